//! Error types for drive-fs

use std::path::PathBuf;

/// Result type for drive-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in drive-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Local root {} does not exist or is not a directory", .path.display())]
    RootNotFound { path: PathBuf },

    #[error("Failed to parse exclusion list at {}: {message}", .path.display())]
    ExclusionParse { path: PathBuf, message: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
