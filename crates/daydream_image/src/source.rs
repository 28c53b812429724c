//! Image sources

use daydream_platform::AssetPath;

/// Where image data comes from
#[derive(Clone, Debug, PartialEq)]
pub enum ImageSource {
    /// An asset resolved through an `AssetLoader`
    Asset(AssetPath),
    /// Encoded image bytes (PNG, JPEG)
    Bytes(Vec<u8>),
    /// Raw RGBA8 pixels
    Rgba {
        data: Vec<u8>,
        width: u32,
        height: u32,
    },
}

impl ImageSource {
    /// Source for an asset path string (`romfs:/...` or a file path)
    pub fn asset(path: impl Into<AssetPath>) -> Self {
        ImageSource::Asset(path.into())
    }
}

impl From<AssetPath> for ImageSource {
    fn from(path: AssetPath) -> Self {
        ImageSource::Asset(path)
    }
}
