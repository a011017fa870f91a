// config.rs — Compile-time configuration constants.
//
// Named and documented one per constant, the way an on-disk format's magic
// numbers and structural limits are usually pinned down in one place.

// Upper bound on indexed columns in a single Mapping.
pub const MAX_COLUMNS: usize = 256;

// Magic value at the start of a native "binsrc" header (little-endian u64).
pub const BINSRC_MAGIC: u64 = 0x6373_6e69_6252_4448;

// Byte length of the native "binsrc" header:
// magic:u64, data_offset:u32, n_rows:u32, n_cols:u8, reserved:u8[3].
// (8 + 4 + 4 + 1 + 3 = 20; see DESIGN.md for why this header is 20 bytes
// rather than the 16 its fields were first described against.)
pub const BINSRC_HEADER_LEN: usize = 20;

// Magic bytes at both ends of an Apache Arrow IPC file.
pub const ARROW_MAGIC: &[u8; 6] = b"ARROW1";

// Marker preceding each encapsulated IPC message: distinguishes the modern
// continuation-then-length form from a bare legacy length prefix.
pub const ARROW_CONTINUATION_MARKER: u32 = 0xffff_ffff;

// Magic bytes at the start and end of a legacy Feather v1 file.
pub const FEATHER_MAGIC: &[u8; 4] = b"FEA1";
