//! Daydream image decoding
//!
//! Turns asset bytes into RGBA8 pixel data ready for upload. PNG and JPEG
//! are supported.
//!
//! ```ignore
//! use daydream_image::{ImageData, ImageSource};
//! use daydream_platform::RomfsLoader;
//!
//! let loader = RomfsLoader::mount("romfs");
//! let image = ImageData::load(ImageSource::asset("romfs:/images/image1.jpg"), &loader)?;
//! println!("{}x{}", image.width(), image.height());
//! ```

mod error;
mod loader;
mod source;

pub use error::{ImageError, Result};
pub use loader::ImageData;
pub use source::ImageSource;
