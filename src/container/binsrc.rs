//! Native "binsrc" container: a 16-byte little-endian header directly
//! encoding `data_offset`, `n_rows`, and `n_cols`, followed by `n_cols`
//! column buffers laid out contiguously.

use std::path::Path;

use crate::config::BINSRC_HEADER_LEN;
use crate::error::MapError;
use crate::reader::read_le;

use super::{contiguous_offsets, ContainerKind, Layout};

pub(super) fn parse(data: &[u8], ctbytes: &[u8], path: &Path) -> Result<Layout, MapError> {
    if data.len() < BINSRC_HEADER_LEN {
        return Err(MapError::BadContainer {
            path: path.to_path_buf(),
            reason: "binsrc header truncated",
        });
    }

    let data_offset = read_le::<u32>(data, 8) as usize;
    let n_rows = read_le::<u32>(data, 12) as usize;
    let n_cols = data[16] as usize;

    if ctbytes.len() != n_cols {
        return Err(MapError::WidthMismatch {
            path: path.to_path_buf(),
            expected_cols: ctbytes.len(),
            found_cols: n_cols,
        });
    }

    let data_length: usize = ctbytes.iter().map(|&w| n_rows * w as usize).sum();
    if data_offset + data_length > data.len() {
        return Err(MapError::BadContainer {
            path: path.to_path_buf(),
            reason: "binsrc data block extends past end of file",
        });
    }

    let col_offset = contiguous_offsets(data_offset, n_rows, ctbytes);

    Ok(Layout {
        kind: ContainerKind::Binsrc,
        data_offset,
        data_length,
        n_rows,
        n_cols,
        col_bytes: ctbytes.to_vec(),
        col_offset,
    })
}
