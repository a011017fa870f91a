//! Legacy Feather v1 container: `FEA1` magic at both ends of the file, a
//! FlatBuffers-encoded `CTable` metadata footer describing each column's
//! absolute buffer offset and length.
//!
//! Schema (abbreviated, field order is the FlatBuffers vtable slot order):
//!
//! ```text
//! table CTable {
//!   description: string;        // 0
//!   num_rows: long;             // 1
//!   columns: [Column];          // 2
//!   version: int = 2;           // 3
//! }
//! table Column {
//!   name: string;                // 0
//!   values: PrimitiveArray;      // 1
//! }
//! table PrimitiveArray {
//!   type: byte;                  // 0
//!   encoding: short = 0;         // 1
//!   offset: long;                // 2
//!   length: long;                // 3
//!   null_count: long;            // 4
//!   total_bytes: long;           // 5
//! }
//! ```

use std::path::Path;

use crate::config::FEATHER_MAGIC;
use crate::error::MapError;

use super::flatbuf::Table;
use super::{resolve_width, ContainerKind, Layout};

const SLOT_CTABLE_NUM_ROWS: usize = 1;
const SLOT_CTABLE_COLUMNS: usize = 2;
const SLOT_COLUMN_VALUES: usize = 1;
const SLOT_ARRAY_OFFSET: usize = 2;
const SLOT_ARRAY_LENGTH: usize = 3;

fn bad(path: &Path, reason: &'static str) -> MapError {
    MapError::BadContainer {
        path: path.to_path_buf(),
        reason,
    }
}

pub(super) fn parse(data: &[u8], ctbytes: &[u8], path: &Path) -> Result<Layout, MapError> {
    let magic_len = FEATHER_MAGIC.len();
    if data.len() < magic_len * 2 + 4 {
        return Err(bad(path, "feather file too short to contain a footer"));
    }

    // Trailing layout: metadata (flatbuffer), metadata_len:i32 LE, magic.
    let len_bytes = &data[data.len() - magic_len - 4..data.len() - magic_len];
    let meta_len = i32::from_le_bytes(len_bytes.try_into().unwrap());
    if meta_len <= 0 {
        return Err(bad(path, "feather metadata length is non-positive"));
    }
    let meta_len = meta_len as usize;
    let meta_start = data
        .len()
        .checked_sub(magic_len + 4 + meta_len)
        .ok_or_else(|| bad(path, "feather metadata length larger than file"))?;
    let meta = &data[meta_start..meta_start + meta_len];

    let ctable = Table::root(meta, 0).ok_or_else(|| bad(path, "feather metadata root table unreadable"))?;
    let n_rows = ctable.get_i64(SLOT_CTABLE_NUM_ROWS, 0);
    if n_rows < 0 {
        return Err(bad(path, "feather num_rows is negative"));
    }
    let n_rows = n_rows as usize;

    let columns = ctable
        .get_table_vector(SLOT_CTABLE_COLUMNS)
        .ok_or_else(|| bad(path, "feather metadata has no columns vector"))?;
    let n_cols = columns.len();
    if !ctbytes.is_empty() && ctbytes.len() != n_cols {
        return Err(MapError::WidthMismatch {
            path: path.to_path_buf(),
            expected_cols: ctbytes.len(),
            found_cols: n_cols,
        });
    }

    let mut col_bytes = Vec::with_capacity(n_cols);
    let mut col_offset = Vec::with_capacity(n_cols);
    let mut min_offset = usize::MAX;
    let mut max_end = 0usize;
    for i in 0..n_cols {
        let column = columns
            .get(i)
            .ok_or_else(|| bad(path, "feather column table missing from vector"))?;
        let values = column
            .get_table(SLOT_COLUMN_VALUES)
            .ok_or_else(|| bad(path, "feather column has no values array"))?;
        let offset = values.get_i64(SLOT_ARRAY_OFFSET, -1);
        let length = values.get_i64(SLOT_ARRAY_LENGTH, -1);
        if offset < 0 || length < 0 {
            return Err(bad(path, "feather column buffer offset/length missing"));
        }
        let (offset, length) = (offset as usize, length as usize);
        if offset + length > data.len() {
            return Err(bad(path, "feather column buffer extends past end of file"));
        }
        let expected = ctbytes.get(i).copied();
        let width = resolve_width(length, n_rows, expected, path)?;

        min_offset = min_offset.min(offset);
        max_end = max_end.max(offset + length);
        col_bytes.push(width);
        col_offset.push(offset);
    }

    Ok(Layout {
        kind: ContainerKind::FeatherV1,
        data_offset: if n_cols == 0 { 0 } else { min_offset },
        data_length: if n_cols == 0 { 0 } else { max_end - min_offset },
        n_rows,
        n_cols,
        col_bytes,
        col_offset,
    })
}
