//! Error types for daydream_app

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur in the demo application
#[derive(Error, Debug)]
pub enum AppError {
    /// Config file could not be read
    #[error("failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for `AppConfig`
    #[error("failed to parse config {}: {reason}", path.display())]
    ConfigParse { path: PathBuf, reason: String },

    /// Config could not be written out
    #[error("failed to serialize config: {0}")]
    ConfigSerialize(String),

    /// Platform error (assets, event loop)
    #[error("platform error: {0}")]
    Platform(#[from] daydream_platform::PlatformError),
}

/// Result type for daydream_app operations
pub type Result<T> = std::result::Result<T, AppError>;
