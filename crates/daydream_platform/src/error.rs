//! Platform error types

use thiserror::Error;

/// Platform-related errors
#[derive(Error, Debug)]
pub enum PlatformError {
    /// Asset path does not resolve to anything readable
    #[error("asset not found: {0}")]
    AssetNotFound(String),

    /// Asset exists but could not be read
    #[error("failed to read asset {path}: {source}")]
    AssetRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Path escapes the mount it was resolved against
    #[error("asset path escapes its mount: {0}")]
    InvalidAssetPath(String),

    /// `romfs:/` path used while no romfs is mounted
    #[error("romfs is not mounted (requested {0})")]
    RomfsNotMounted(String),
}

/// Result type for platform operations
pub type Result<T> = std::result::Result<T, PlatformError>;
