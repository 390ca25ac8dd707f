// Evlist Errors
// Hard failures of a scan; everything else degrades to empty values

use std::io;
use std::path::PathBuf;

/// Result type for scan operations
pub type ScanResult<T> = Result<T, ScanError>;

/// Filesystem failure while walking the device or alias directories.
///
/// Any of these aborts the whole scan; no partial device list is returned.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("failed to read directory {}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read symlink {}", path.display())]
    ReadLink {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScanError {
    /// The underlying I/O error
    pub fn io_error(&self) -> &io::Error {
        match self {
            ScanError::ReadDir { source, .. } | ScanError::ReadLink { source, .. } => source,
        }
    }

    /// OS error code of the underlying failure, if there is one
    pub fn raw_os_error(&self) -> Option<i32> {
        self.io_error().raw_os_error()
    }

    /// Process exit code for this error: the errno when known, otherwise 1.
    pub fn exit_code(&self) -> i32 {
        match self.raw_os_error() {
            Some(code) if code > 0 => code,
            _ => 1,
        }
    }
}
