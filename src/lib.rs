// binsrc — binary search over large, immutable, memory-mapped, sorted columnar files

pub mod config;
pub mod container;
pub mod error;
pub mod kernel;
pub mod mapping;
pub mod reader;

// ─────────────────────────────────────────────────────────────────────────────
// Top-level convenience re-exports for the most common entry points.
// ─────────────────────────────────────────────────────────────────────────────

/// Opens, maps, and parses a path into a [`Mapping`].
pub use mapping::open;
/// The handle to a read-only memory-mapped file and its resolved layout.
pub use mapping::Mapping;

/// Error kind returned by [`open`] and [`Mapping::close`]. The search kernels
/// never fail — "not found" and "no further match" are in-band return
/// values, not errors.
pub use error::MapError;

/// Which on-disk container a [`Mapping`] was parsed from.
pub use container::ContainerKind;

/// Byte order a fixed-width key is decoded under.
pub use reader::ByteOrder;
/// Reads a `u8`/`u16`/`u32`/`u64` at an absolute byte offset, in either
/// byte order, with no alignment assumption.
pub use reader::{read_be, read_le, UInt};

// ─────────────────────────────────────────────────────────────────────────────
// Row-strided kernels (`kernel::row`, `kernel::sub`)
// ─────────────────────────────────────────────────────────────────────────────

/// Least index in `[first, last]` whose key equals `search`, or `last + 1`.
pub use kernel::row::find_first;
/// Greatest index in `[first, last]` whose key equals `search`, or `last + 1`.
pub use kernel::row::find_last;
/// `true` and advances `pos` iff the next row still matches `search`.
pub use kernel::row::has_next;
/// `true` and steps `pos` back iff the previous row still matches `search`.
pub use kernel::row::has_prev;

/// Bitfield-masked [`find_first`].
pub use kernel::sub::find_first_sub;
/// Bitfield-masked [`find_last`].
pub use kernel::sub::find_last_sub;
/// Bitfield-masked [`has_next`].
pub use kernel::sub::has_next_sub;
/// Bitfield-masked [`has_prev`].
pub use kernel::sub::has_prev_sub;

// ─────────────────────────────────────────────────────────────────────────────
// Column-contiguous kernels (`kernel::col`)
// ─────────────────────────────────────────────────────────────────────────────

/// Column-contiguous specialization of [`find_first`] (`blklen == width`,
/// `blkpos == 0`): eliminates a multiply and an add per probe.
pub use kernel::col::find_first as col_find_first;
/// Column-contiguous specialization of [`find_last`].
pub use kernel::col::find_last as col_find_last;
/// Column-contiguous specialization of [`has_next`].
pub use kernel::col::has_next as col_has_next;
/// Column-contiguous specialization of [`has_prev`].
pub use kernel::col::has_prev as col_has_prev;
