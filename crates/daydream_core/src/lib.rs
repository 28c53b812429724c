//! Daydream Core
//!
//! Foundational types for the Daydream widget library:
//!
//! - **Geometry**: `Point`, `Size`, `Rect`
//! - **Color**: RGBA colors with an `rgba8` constructor matching nanovg
//! - **Render Context**: the nanovg-shaped drawing capability every widget
//!   draws into, plus a recording implementation used for presentation and
//!   testing
//! - **Canvas**: the borrowed handle widgets keep to the shared context
//!
//! # Example
//!
//! ```rust
//! use std::cell::RefCell;
//! use daydream_core::{CanvasRef, Color, RecordingContext, Rect, RenderContextExt, Size};
//!
//! let ctx = RefCell::new(RecordingContext::new(Size::new(1280.0, 720.0)));
//! let canvas = CanvasRef::new(&ctx);
//!
//! canvas.with(|vg| {
//!     vg.fill_rect_color(Rect::new(10.0, 10.0, 100.0, 50.0), Color::BLACK);
//! });
//!
//! assert_eq!(ctx.borrow().fills().len(), 1);
//! ```

pub mod canvas;
pub mod color;
pub mod draw;
pub mod error;
pub mod geometry;

pub use canvas::CanvasRef;
pub use color::Color;
pub use draw::{
    Brush, DrawCommand, FillRecord, FontId, HorizontalAlign, ImageFlags, ImageId, ImagePattern,
    ImageStats, PathCommand, RecordingContext, RenderContext, RenderContextExt, TextAlign,
    TextRecord, TextStyle, VerticalAlign,
};
pub use error::{RenderError, Result};
pub use geometry::{Point, Rect, Size};
