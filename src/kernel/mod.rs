//! Search Kernels: binary-search primitives over fixed-width unsigned keys,
//! generic over key width (`u8`/`u16`/`u32`/`u64`) and byte order, in two
//! families — row-strided (§[`row`], §[`sub`]) and column-contiguous
//! (§[`col`]). All kernels are total: "not found" is the `last + 1`
//! sentinel, "no further match" is `false`, and none of them allocate,
//! block, or return a `Result`.

mod core;

pub mod col;
pub mod row;
pub mod sub;
