use std::fmt;
use std::io;
use std::path::PathBuf;

/// Error returned by [`crate::mapping::open`] and [`crate::mapping::Mapping::close`].
///
/// These are the only two points in the crate that can fail; the search kernels
/// are total and never return a `Result`.
#[derive(Debug)]
pub enum MapError {
    /// The file could not be opened or mapped into memory.
    OpenFailure { path: PathBuf, source: io::Error },
    /// A container magic was recognized but the structure that followed it was
    /// inconsistent (truncated header, bad flatbuffer, footer magic mismatch, ...).
    BadContainer { path: PathBuf, reason: &'static str },
    /// The caller-supplied column widths contradict the container's own metadata.
    WidthMismatch {
        path: PathBuf,
        expected_cols: usize,
        found_cols: usize,
    },
    /// The underlying unmap/close system call failed.
    CloseFailure { path: PathBuf, source: io::Error },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::OpenFailure { path, source } => {
                write!(f, "failed to open/map {}: {}", path.display(), source)
            }
            MapError::BadContainer { path, reason } => {
                write!(f, "bad container in {}: {}", path.display(), reason)
            }
            MapError::WidthMismatch {
                path,
                expected_cols,
                found_cols,
            } => write!(
                f,
                "column width mismatch in {}: caller declared {} column(s), container has {}",
                path.display(),
                expected_cols,
                found_cols
            ),
            MapError::CloseFailure { path, source } => {
                write!(f, "failed to close {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for MapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MapError::OpenFailure { source, .. } => Some(source),
            MapError::CloseFailure { source, .. } => Some(source),
            MapError::BadContainer { .. } | MapError::WidthMismatch { .. } => None,
        }
    }
}
