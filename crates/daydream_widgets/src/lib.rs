//! Daydream Widgets
//!
//! Small immediate-mode widgets that draw into a shared render context:
//!
//! - [`Image`] - an image pattern filling a rectangle
//! - [`Rectangle`] - a solid-color rectangle
//! - [`Text`] - one line of text at an anchor point
//! - [`Commons`] - the label and caption-panel helpers
//!
//! Every widget holds a [`CanvasRef`](daydream_core::CanvasRef) to the
//! context, draws once when created, and redraws on [`Widget::update`].
//!
//! # Example
//!
//! ```rust
//! use std::cell::RefCell;
//! use daydream_core::{CanvasRef, Color, RecordingContext, Size};
//! use daydream_widgets::{Rectangle, Widget};
//!
//! let ctx = RefCell::new(RecordingContext::new(Size::new(1280.0, 720.0)));
//! let canvas = CanvasRef::new(&ctx);
//!
//! let mut panel = Rectangle::with_color(canvas, 0.0, 0.0, 200.0, 100.0, Color::BLACK);
//! panel.set_width(300.0);
//! panel.update();
//!
//! assert_eq!(ctx.borrow().fills().len(), 2);
//! ```

pub mod commons;
pub mod image;
pub mod rectangle;
pub mod text;
pub mod widget;

#[cfg(test)]
mod tests;

pub use commons::{Commons, CAPTION_ANCHOR_X, COMMONS_FONT_FACE, COMMONS_IMAGE_PATHS};
pub use image::{Image, ImageConfig, ImageSlot};
pub use rectangle::Rectangle;
pub use text::Text;
pub use widget::Widget;
