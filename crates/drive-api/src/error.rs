//! Error types for drive-api

use std::path::PathBuf;

/// Result type for drive-api operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur talking to the Drive API
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("Drive API returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Invalid access token: {message}")]
    InvalidToken { message: String },

    #[error("Entry {path} has no drive id to download")]
    MissingId { path: String },

    #[error("Failed to read credentials at {}: {message}", .path.display())]
    Credentials { path: PathBuf, message: String },

    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Download root {} does not exist", .path.display())]
    RootNotFound { path: PathBuf },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn credentials(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Credentials {
            path: path.into(),
            message: message.into(),
        }
    }
}
