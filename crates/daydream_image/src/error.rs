//! Image error types

use thiserror::Error;

/// Errors from loading or decoding an image
#[derive(Error, Debug)]
pub enum ImageError {
    /// Asset could not be read
    #[error("failed to load asset: {0}")]
    AssetLoad(#[from] daydream_platform::PlatformError),

    /// Bytes are not a supported image
    #[error("failed to decode image: {0}")]
    Decode(String),

    /// Pixel buffer does not match its dimensions
    #[error("invalid image dimensions: {0}")]
    InvalidDimensions(String),
}

impl From<image::ImageError> for ImageError {
    fn from(err: image::ImageError) -> Self {
        ImageError::Decode(err.to_string())
    }
}

/// Result type for image operations
pub type Result<T> = std::result::Result<T, ImageError>;
