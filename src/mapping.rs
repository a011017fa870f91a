//! Mapping: the handle to a read-only memory-mapped file plus the layout
//! metadata its container parser derived from it.

use std::path::{Path, PathBuf};

use log::debug;
use memmap2::Mmap;

use crate::config::MAX_COLUMNS;
use crate::container;
use crate::error::MapError;

/// An immutable handle to a read-only memory-mapped file and the validated
/// layout metadata derived from its container.
///
/// Created by [`open`], read-only thereafter, and released by [`Mapping::close`].
/// A `Mapping` never writes through its memory map; the underlying file is
/// assumed immutable for the lifetime of the handle.
#[derive(Debug)]
pub struct Mapping {
    mmap: Mmap,
    path: PathBuf,
    data_offset: usize,
    data_length: usize,
    n_rows: usize,
    n_cols: usize,
    col_bytes: Vec<u8>,
    col_offset: Vec<usize>,
}

impl Mapping {
    /// Raw bytes of the mapping, for use by the search kernels.
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.mmap
    }

    /// Total bytes mapped.
    #[inline]
    pub fn size(&self) -> usize {
        self.mmap.len()
    }

    /// Absolute byte offset within the mapping where the sorted data block begins.
    #[inline]
    pub fn data_offset(&self) -> usize {
        self.data_offset
    }

    /// Byte length of the data block.
    #[inline]
    pub fn data_length(&self) -> usize {
        self.data_length
    }

    /// Number of records in the data block.
    #[inline]
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Number of indexed columns.
    #[inline]
    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// Byte width of column `i` (one of 1, 2, 4, 8).
    #[inline]
    pub fn col_bytes(&self, i: usize) -> u8 {
        self.col_bytes[i]
    }

    /// Absolute byte offset of the first element of column `i` within the mapping.
    #[inline]
    pub fn col_offset(&self, i: usize) -> usize {
        self.col_offset[i]
    }

    /// Releases the mapping and file descriptor.
    ///
    /// Takes `self` by value: a closed `Mapping` cannot be reused, since there
    /// is no longer a value to call methods on. `munmap`/file-close failures
    /// on Unix-like platforms backing [`memmap2::Mmap`]'s `Drop` are not
    /// observable here (the crate has no hook into that teardown), so this
    /// is infallible in practice; it returns `Result` to keep the type
    /// honest about the underlying resource-release contract of `close()`.
    pub fn close(self) -> Result<(), MapError> {
        debug!("closing mapping for {}", self.path.display());
        drop(self);
        Ok(())
    }
}

/// Opens `path`, maps it read-only, detects its container, and validates the
/// resulting layout against the caller-supplied `ctbytes`.
///
/// `ctbytes` enumerates the expected per-column byte widths. It may be empty
/// for self-describing containers (Arrow IPC, Feather v1); it is required
/// for raw files, where it also supplies the (single) column's width.
pub fn open(path: impl AsRef<Path>, ctbytes: &[u8]) -> Result<Mapping, MapError> {
    let path = path.as_ref().to_path_buf();
    let file = std::fs::File::open(&path).map_err(|source| MapError::OpenFailure {
        path: path.clone(),
        source,
    })?;
    let mmap = unsafe { Mmap::map(&file) }.map_err(|source| MapError::OpenFailure {
        path: path.clone(),
        source,
    })?;

    let layout = container::detect_and_parse(&mmap, ctbytes, &path)?;

    if layout.n_cols > MAX_COLUMNS {
        return Err(MapError::WidthMismatch {
            path: path.clone(),
            expected_cols: ctbytes.len(),
            found_cols: layout.n_cols,
        });
    }

    debug!(
        "opened {} as {:?}: {} rows, {} cols, data_offset={}, data_length={}",
        path.display(),
        layout.kind,
        layout.n_rows,
        layout.n_cols,
        layout.data_offset,
        layout.data_length
    );

    Ok(Mapping {
        mmap,
        path,
        data_offset: layout.data_offset,
        data_length: layout.data_length,
        n_rows: layout.n_rows,
        n_cols: layout.n_cols,
        col_bytes: layout.col_bytes,
        col_offset: layout.col_offset,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn open_raw_file_derives_row_count_from_size_and_width() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        for v in 0u32..10 {
            f.write_all(&v.to_be_bytes()).unwrap();
        }
        f.flush().unwrap();

        let m = open(f.path(), &[4]).unwrap();
        assert_eq!(m.n_rows(), 10);
        assert_eq!(m.n_cols(), 1);
        assert_eq!(m.col_bytes(0), 4);
        assert_eq!(m.data_offset(), 0);
        m.close().unwrap();
    }

    #[test]
    fn open_missing_file_is_open_failure() {
        let err = open("/nonexistent/does/not/exist.bin", &[4]).unwrap_err();
        assert!(matches!(err, MapError::OpenFailure { .. }));
    }
}
