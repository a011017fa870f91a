//! Container Parser: detects the on-disk container a freshly mapped file
//! holds and resolves it to a flat [`Layout`] of data-block and per-column
//! offsets that the search kernels can index directly.

mod arrow_ipc;
mod binsrc;
mod feather;
mod flatbuf;
mod raw;

use std::path::Path;

use crate::config::{ARROW_MAGIC, BINSRC_MAGIC, FEATHER_MAGIC};
use crate::error::MapError;
use crate::reader::read_le;

/// Which on-disk shape a [`crate::mapping::Mapping`] was parsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    Binsrc,
    ArrowIpc,
    FeatherV1,
    Raw,
}

/// Resolved data-block and per-column layout, independent of which container
/// produced it.
#[derive(Debug)]
pub(crate) struct Layout {
    pub kind: ContainerKind,
    pub data_offset: usize,
    pub data_length: usize,
    pub n_rows: usize,
    pub n_cols: usize,
    pub col_bytes: Vec<u8>,
    pub col_offset: Vec<usize>,
}

/// The byte widths this crate's kernels can decode; any other stride is a
/// container the library cannot search over.
const VALID_WIDTHS: [u8; 4] = [1, 2, 4, 8];

pub(crate) fn detect_and_parse(
    data: &[u8],
    ctbytes: &[u8],
    path: &Path,
) -> Result<Layout, MapError> {
    if data.len() >= 8 && read_le::<u64>(data, 0) == BINSRC_MAGIC {
        return binsrc::parse(data, ctbytes, path);
    }
    if data.len() >= ARROW_MAGIC.len() * 2
        && &data[..ARROW_MAGIC.len()] == ARROW_MAGIC
        && &data[data.len() - ARROW_MAGIC.len()..] == ARROW_MAGIC
    {
        return arrow_ipc::parse(data, ctbytes, path);
    }
    if data.len() >= FEATHER_MAGIC.len() * 2
        && &data[..FEATHER_MAGIC.len()] == FEATHER_MAGIC
        && &data[data.len() - FEATHER_MAGIC.len()..] == FEATHER_MAGIC
    {
        return feather::parse(data, ctbytes, path);
    }
    raw::parse(data, ctbytes, path)
}

/// Lays out `n_cols` columns contiguously starting at `data_offset`, the
/// shared math for containers that don't carry their own per-column offsets
/// (binsrc, raw).
pub(crate) fn contiguous_offsets(data_offset: usize, n_rows: usize, col_bytes: &[u8]) -> Vec<usize> {
    let mut offsets = Vec::with_capacity(col_bytes.len());
    let mut next = data_offset;
    for &w in col_bytes {
        offsets.push(next);
        next += n_rows * w as usize;
    }
    offsets
}

/// Derives a column's byte width from a container-declared buffer length and
/// row count, validating it against the caller's expectation when supplied.
pub(crate) fn resolve_width(
    buffer_len: usize,
    n_rows: usize,
    expected: Option<u8>,
    path: &Path,
) -> Result<u8, MapError> {
    if n_rows == 0 {
        return expected.ok_or(MapError::BadContainer {
            path: path.to_path_buf(),
            reason: "cannot infer column width: zero rows and no ctbytes supplied",
        });
    }
    if !buffer_len.is_multiple_of(n_rows) {
        return Err(MapError::BadContainer {
            path: path.to_path_buf(),
            reason: "column buffer length is not a multiple of the row count",
        });
    }
    let width = (buffer_len / n_rows) as u8;
    if !VALID_WIDTHS.contains(&width) {
        return Err(MapError::BadContainer {
            path: path.to_path_buf(),
            reason: "column width is not one of 1, 2, 4, 8 bytes",
        });
    }
    if let Some(expected) = expected {
        if expected != width {
            return Err(MapError::WidthMismatch {
                path: path.to_path_buf(),
                expected_cols: expected as usize,
                found_cols: width as usize,
            });
        }
    }
    Ok(width)
}
