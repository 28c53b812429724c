//! Image loading and data management

use daydream_platform::AssetLoader;
use image::{DynamicImage, GenericImageView};

use crate::error::{ImageError, Result};
use crate::source::ImageSource;

/// Decoded image data ready for GPU upload
#[derive(Debug, Clone)]
pub struct ImageData {
    /// Raw RGBA pixel data
    pixels: Vec<u8>,
    /// Image width in pixels
    width: u32,
    /// Image height in pixels
    height: u32,
}

impl ImageData {
    /// Create ImageData from raw RGBA pixels
    pub fn from_rgba(pixels: Vec<u8>, width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ImageError::InvalidDimensions(format!(
                "{}x{} has no pixels",
                width, height
            )));
        }
        let expected_len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4))
            .ok_or_else(|| {
                ImageError::InvalidDimensions(format!("{}x{} is too large", width, height))
            })?;
        if pixels.len() != expected_len {
            return Err(ImageError::InvalidDimensions(format!(
                "expected {} bytes of pixel data, got {}",
                expected_len,
                pixels.len()
            )));
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Load an image from a source (synchronous)
    ///
    /// Asset sources are read through `loader`; other sources ignore it.
    pub fn load(source: ImageSource, loader: &dyn AssetLoader) -> Result<Self> {
        match source {
            ImageSource::Asset(path) => {
                let data = loader.load(&path)?;
                tracing::debug!("decoding {} ({} bytes)", path, data.len());
                Self::from_bytes(&data)
            }

            ImageSource::Bytes(data) => Self::from_bytes(&data),

            ImageSource::Rgba {
                data,
                width,
                height,
            } => Self::from_rgba(data, width, height),
        }
    }

    /// Decode image from raw bytes
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let img = image::load_from_memory(data)?;
        Self::from_dynamic_image(img)
    }

    /// Convert a DynamicImage to ImageData
    fn from_dynamic_image(img: DynamicImage) -> Result<Self> {
        let (width, height) = img.dimensions();
        let rgba = img.to_rgba8();
        Self::from_rgba(rgba.into_raw(), width, height)
    }

    /// Get the raw RGBA pixel data
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Get the image width
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get image dimensions as (width, height)
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get the number of bytes in the pixel data
    pub fn byte_len(&self) -> usize {
        self.pixels.len()
    }
}
