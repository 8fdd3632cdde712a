//! Error types for drive-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from drive-fs
    #[error(transparent)]
    Fs(#[from] drive_fs::Error),

    /// Error from drive-api
    #[error(transparent)]
    Api(#[from] drive_api::Error),
}
