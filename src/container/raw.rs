//! Raw container: no magic, no header. The file is a bare data block of a
//! single column of width `ctbytes[0]`.

use std::path::Path;

use crate::error::MapError;

use super::{contiguous_offsets, ContainerKind, Layout};

pub(super) fn parse(data: &[u8], ctbytes: &[u8], path: &Path) -> Result<Layout, MapError> {
    if ctbytes.len() != 1 {
        return Err(MapError::BadContainer {
            path: path.to_path_buf(),
            reason: "no recognized container magic and ctbytes does not name exactly one raw column width",
        });
    }
    let width = ctbytes[0];
    if !data.len().is_multiple_of(width as usize) {
        return Err(MapError::BadContainer {
            path: path.to_path_buf(),
            reason: "raw file size is not a multiple of the declared column width",
        });
    }
    let n_rows = data.len() / width as usize;
    let col_offset = contiguous_offsets(0, n_rows, ctbytes);

    Ok(Layout {
        kind: ContainerKind::Raw,
        data_offset: 0,
        data_length: data.len(),
        n_rows,
        n_cols: 1,
        col_bytes: ctbytes.to_vec(),
        col_offset,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_row_count_derived_from_size_and_width() {
        let data = vec![0u8; 40];
        let layout = parse(&data, &[4], Path::new("t")).unwrap();
        assert_eq!(layout.n_rows, 10);
        assert_eq!(layout.data_offset, 0);
        assert_eq!(layout.col_offset[0], 0);
    }

    #[test]
    fn raw_requires_exactly_one_ctbyte() {
        let data = vec![0u8; 40];
        assert!(parse(&data, &[], Path::new("t")).is_err());
        assert!(parse(&data, &[4, 2], Path::new("t")).is_err());
    }
}
