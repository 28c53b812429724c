//! Image widget
//!
//! Fills a rectangle with an image pattern sized to the widget:
//!
//! ```ignore
//! use daydream_widgets::{Image, ImageConfig};
//!
//! let logo = Image::new(canvas, 20.0, 20.0, 128.0, 128.0, "romfs:/images/image1.jpg");
//! let faded = Image::with_config(
//!     canvas,
//!     200.0, 20.0, 128.0, 128.0,
//!     "romfs:/images/image2.png",
//!     ImageConfig::default().angle(0.2).alpha(0.5),
//! );
//! ```
//!
//! The texture handle is acquired from the context on the first draw and
//! reused afterwards. If acquisition fails a single warning is logged and
//! the widget draws nothing until its path changes. A handle that cannot be
//! released while the context is busy is deleted on the next draw or drop.

use daydream_core::{Brush, CanvasRef, ImageFlags, ImageId, Rect, RenderContextExt};

use crate::widget::Widget;

/// Optional image parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageConfig {
    /// Pattern rotation in radians
    pub angle: f32,
    /// Opacity, 0.0 to 1.0
    pub alpha: f32,
    /// Flags passed to `create_image`
    pub flags: ImageFlags,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            angle: 0.0,
            alpha: 1.0,
            flags: ImageFlags::NONE,
        }
    }
}

impl ImageConfig {
    pub fn angle(mut self, angle: f32) -> Self {
        self.angle = angle;
        self
    }

    pub fn alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn flags(mut self, flags: ImageFlags) -> Self {
        self.flags = flags;
        self
    }
}

/// State of the widget's texture handle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ImageSlot {
    /// Not requested yet
    #[default]
    Unloaded,
    /// Acquired from the context
    Loaded(ImageId),
    /// Acquisition failed for the current path
    Failed,
}

/// An image drawn into a rectangle
#[derive(Debug)]
pub struct Image<'a> {
    canvas: CanvasRef<'a>,
    rect: Rect,
    path: String,
    config: ImageConfig,
    slot: ImageSlot,
    pending_release: Vec<ImageId>,
}

impl<'a> Image<'a> {
    /// Create an unrotated, opaque image and draw it
    pub fn new(
        canvas: CanvasRef<'a>,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        path: impl Into<String>,
    ) -> Self {
        Self::with_config(canvas, x, y, width, height, path, ImageConfig::default())
    }

    /// Create an image with explicit angle, alpha and flags and draw it
    pub fn with_config(
        canvas: CanvasRef<'a>,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        path: impl Into<String>,
        config: ImageConfig,
    ) -> Self {
        debug_assert!(width > 0.0 && height > 0.0, "image size must be positive");
        let mut image = Self {
            canvas,
            rect: Rect::new(x, y, width, height),
            path: path.into(),
            config,
            slot: ImageSlot::Unloaded,
            pending_release: Vec::new(),
        };
        image.draw();
        image
    }

    pub fn x(&self) -> f32 {
        self.rect.x()
    }

    pub fn y(&self) -> f32 {
        self.rect.y()
    }

    pub fn width(&self) -> f32 {
        self.rect.width()
    }

    pub fn height(&self) -> f32 {
        self.rect.height()
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Rotation in radians
    pub fn angle(&self) -> f32 {
        self.config.angle
    }

    pub fn alpha(&self) -> f32 {
        self.config.alpha
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn slot(&self) -> ImageSlot {
        self.slot
    }

    /// The acquired texture handle, if any
    pub fn handle(&self) -> Option<ImageId> {
        match self.slot {
            ImageSlot::Loaded(image) => Some(image),
            _ => None,
        }
    }

    pub fn set_x(&mut self, x: f32) {
        self.rect.origin.x = x;
    }

    pub fn set_y(&mut self, y: f32) {
        self.rect.origin.y = y;
    }

    pub fn set_width(&mut self, width: f32) {
        debug_assert!(width > 0.0, "image width must be positive");
        self.rect.size.width = width;
    }

    pub fn set_height(&mut self, height: f32) {
        debug_assert!(height > 0.0, "image height must be positive");
        self.rect.size.height = height;
    }

    pub fn set_angle(&mut self, angle: f32) {
        self.config.angle = angle;
    }

    pub fn set_alpha(&mut self, alpha: f32) {
        self.config.alpha = alpha;
    }

    /// Point the widget at another asset
    ///
    /// A held handle is released now; the next draw acquires the new one.
    pub fn set_path(&mut self, path: impl Into<String>) {
        self.release();
        self.slot = ImageSlot::Unloaded;
        self.path = path.into();
    }

    fn release(&mut self) {
        if let ImageSlot::Loaded(image) = std::mem::take(&mut self.slot) {
            self.pending_release.push(image);
        }
        if self.pending_release.is_empty() {
            return;
        }

        let pending = &mut self.pending_release;
        let released = self.canvas.try_with(|vg| {
            for image in pending.drain(..) {
                vg.delete_image(image);
            }
        });
        if released.is_none() {
            tracing::warn!(
                "image {:?} ({}) not released: context busy",
                self.pending_release,
                self.path
            );
        }
    }
}

impl Widget for Image<'_> {
    fn draw(&mut self) {
        let canvas = self.canvas;
        canvas.with(|vg| {
            for image in self.pending_release.drain(..) {
                vg.delete_image(image);
            }

            let image = match self.slot {
                ImageSlot::Loaded(image) => image,
                ImageSlot::Failed => return,
                ImageSlot::Unloaded => match vg.create_image(&self.path, self.config.flags) {
                    Ok(image) => {
                        tracing::debug!("image widget acquired {:?} for {}", image, self.path);
                        self.slot = ImageSlot::Loaded(image);
                        image
                    }
                    Err(err) => {
                        tracing::warn!("error loading image: {}", err);
                        self.slot = ImageSlot::Failed;
                        return;
                    }
                },
            };

            let paint = Brush::image_in_rect(self.rect, self.config.angle, image, self.config.alpha);
            vg.fill_rect_paint(self.rect, paint);
        });
    }
}

impl Drop for Image<'_> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use daydream_core::{DrawCommand, RecordingContext, Size};
    use std::cell::RefCell;

    const LOGO: &str = "romfs:/images/image1.jpg";

    fn context() -> RefCell<RecordingContext> {
        RefCell::new(RecordingContext::new(Size::new(1280.0, 720.0)).with_image(LOGO))
    }

    #[test]
    fn test_construction_draws_image_rect() {
        let ctx = context();
        let image = Image::new(CanvasRef::new(&ctx), 10.0, 20.0, 30.0, 40.0, LOGO);

        let handle = image.handle().unwrap();
        let ctx = ctx.borrow();
        assert_eq!(
            ctx.commands(),
            &[
                DrawCommand::BeginPath,
                DrawCommand::Rect(Rect::new(10.0, 20.0, 30.0, 40.0)),
                DrawCommand::FillPaint(Brush::image_pattern(
                    10.0, 20.0, 30.0, 40.0, 0.0, handle, 1.0
                )),
                DrawCommand::Fill,
            ]
        );
        assert_eq!(ctx.image_stats().created, 1);
    }

    #[test]
    fn test_handle_is_acquired_once() {
        let ctx = context();
        let mut image = Image::new(CanvasRef::new(&ctx), 0.0, 0.0, 8.0, 8.0, LOGO);
        image.update();
        image.update();

        assert_eq!(ctx.borrow().image_stats().created, 1);
        assert_eq!(ctx.borrow().fills().len(), 3);
    }

    #[test]
    fn test_config_reaches_pattern() {
        let ctx = context();
        let image = Image::with_config(
            CanvasRef::new(&ctx),
            0.0,
            0.0,
            8.0,
            8.0,
            LOGO,
            ImageConfig::default().angle(0.5).alpha(0.25),
        );

        let brush = ctx.borrow().fills()[0].brush;
        match brush {
            Brush::Image(pattern) => {
                assert_eq!(pattern.angle, 0.5);
                assert_eq!(pattern.alpha, 0.25);
                assert_eq!(Some(pattern.image), image.handle());
            }
            other => panic!("expected image brush, got {:?}", other),
        }
    }

    #[test]
    fn test_set_path_releases_and_reacquires() {
        let ctx = RefCell::new(context().into_inner().with_image("romfs:/images/image2.png"));
        let mut image = Image::new(CanvasRef::new(&ctx), 0.0, 0.0, 8.0, 8.0, LOGO);
        let first = image.handle().unwrap();

        image.set_path("romfs:/images/image2.png");
        assert_eq!(image.slot(), ImageSlot::Unloaded);
        assert!(!ctx.borrow().is_live(first));

        image.update();
        let second = image.handle().unwrap();
        assert_ne!(first, second);
        assert_eq!(
            ctx.borrow().image_path(second),
            Some("romfs:/images/image2.png")
        );
    }

    #[test]
    fn test_release_while_busy_is_deferred_to_next_draw() {
        let ctx = RefCell::new(context().into_inner().with_image("romfs:/images/image2.png"));
        let canvas = CanvasRef::new(&ctx);
        let mut image = Image::new(canvas, 0.0, 0.0, 8.0, 8.0, LOGO);
        let first = image.handle().unwrap();

        canvas.with(|_| image.set_path("romfs:/images/image2.png"));
        assert!(ctx.borrow().is_live(first));

        image.update();
        assert!(!ctx.borrow().is_live(first));
        assert_eq!(ctx.borrow().live_image_count(), 1);

        drop(image);
        let stats = ctx.borrow().image_stats();
        assert_eq!(stats.created, 2);
        assert_eq!(stats.deleted, 2);
        assert_eq!(stats.invalid_deletes, 0);
        assert_eq!(ctx.borrow().live_image_count(), 0);
    }

    #[test]
    fn test_release_while_busy_is_deferred_to_drop() {
        let ctx = context();
        let canvas = CanvasRef::new(&ctx);
        let mut image = Image::new(canvas, 0.0, 0.0, 8.0, 8.0, LOGO);

        canvas.with(|_| image.set_path("romfs:/missing.png"));
        assert_eq!(ctx.borrow().live_image_count(), 1);

        drop(image);
        assert_eq!(ctx.borrow().image_stats().deleted, 1);
        assert_eq!(ctx.borrow().live_image_count(), 0);
    }

    #[test]
    fn test_drop_releases_handle() {
        let ctx = context();
        {
            let _image = Image::new(CanvasRef::new(&ctx), 0.0, 0.0, 8.0, 8.0, LOGO);
            assert_eq!(ctx.borrow().live_image_count(), 1);
        }
        let stats = ctx.borrow().image_stats();
        assert_eq!(stats.deleted, 1);
        assert_eq!(stats.invalid_deletes, 0);
        assert_eq!(ctx.borrow().live_image_count(), 0);
    }
}
