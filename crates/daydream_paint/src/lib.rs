//! Daydream Paint
//!
//! A `RenderContext` that owns real resources: images decoded from the
//! asset loader and fonts parsed with `ttf-parser`. Draw commands are
//! recorded per frame and handed over as a [`Frame`] on `end_frame`.
//!
//! # Example
//!
//! ```ignore
//! use daydream_core::{RenderContext, Size};
//! use daydream_paint::PaintContext;
//! use daydream_platform::RomfsLoader;
//!
//! let mut ctx = PaintContext::new(Size::new(1280.0, 720.0), RomfsLoader::mount("romfs"));
//! ctx.create_font("sans", "romfs:/fonts/Roboto-Regular.ttf")?;
//!
//! ctx.begin_frame(1280.0, 720.0, 1.0);
//! // Draw widgets
//! ctx.end_frame();
//!
//! let frame = ctx.last_frame();
//! ```

pub mod context;
pub mod frame;
pub mod resources;

pub use context::PaintContext;
pub use frame::Frame;
pub use resources::{FontStore, ImageStore, StoredImage};
