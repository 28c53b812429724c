//! Commons panel: the label and caption-panel helpers
//!
//! `Commons` loads two fixed images when it is created and keeps them for
//! its whole life. `draw_text_in_rect` stacks a black background, both
//! images and a centered caption; `draw_label` is a plain left-aligned
//! label.

use daydream_core::{
    Brush, CanvasRef, Color, ImageFlags, ImageId, Point, Rect, RenderContextExt, Size,
    TextAlign, TextStyle,
};

/// Assets loaded by [`Commons::new`], in layer order
pub const COMMONS_IMAGE_PATHS: [&str; 2] = ["romfs:/images/image1.jpg", "romfs:/images/image2.png"];

/// Face used by both helpers
pub const COMMONS_FONT_FACE: &str = "sans";

/// Absolute x of the caption drawn by `draw_text_in_rect`
///
/// The caption does not follow the panel's `x`; panels away from the left
/// edge get their caption at this fixed column.
pub const CAPTION_ANCHOR_X: f32 = 220.0;

const LABEL_FONT_SIZE: f32 = 64.0;
const CAPTION_FONT_SIZE: f32 = 16.0;
const FIRST_IMAGE_SIZE: f32 = 100.0;
const SECOND_IMAGE_SIZE: f32 = 80.0;
const FIRST_IMAGE_OFFSET: Point = Point::new(20.0, -25.0);

/// Panel helpers sharing two preloaded images
#[derive(Debug)]
pub struct Commons<'a> {
    canvas: CanvasRef<'a>,
    images: [Option<ImageId>; 2],
}

impl<'a> Commons<'a> {
    /// Load both panel images
    ///
    /// A failed load leaves that layer empty; one warning covers both.
    pub fn new(canvas: CanvasRef<'a>) -> Self {
        let images = canvas.with(|vg| {
            COMMONS_IMAGE_PATHS.map(|path| match vg.create_image(path, ImageFlags::NONE) {
                Ok(image) => Some(image),
                Err(err) => {
                    tracing::debug!("commons: {}", err);
                    None
                }
            })
        });

        if images.iter().any(Option::is_none) {
            let missing: Vec<&str> = COMMONS_IMAGE_PATHS
                .iter()
                .zip(&images)
                .filter(|(_, image)| image.is_none())
                .map(|(path, _)| *path)
                .collect();
            tracing::warn!("error loading commons images: {}", missing.join(", "));
        }

        Self { canvas, images }
    }

    /// Handles of the two panel images, in layer order
    pub fn images(&self) -> [Option<ImageId>; 2] {
        self.images
    }

    /// Draw `text` left-aligned and vertically centered in a box
    ///
    /// Only the box height positions the text; `_width` has no effect.
    pub fn draw_label(&self, text: &str, x: f32, y: f32, _width: f32, height: f32) {
        let style = TextStyle::new(COMMONS_FONT_FACE, LABEL_FONT_SIZE)
            .with_color(Color::rgba8(0, 0, 0, 128))
            .with_align(TextAlign::LEFT_MIDDLE);
        let origin = Point::new(x, y + height * 0.5);

        self.canvas
            .with(|vg| vg.draw_text_styled(text, origin, &style));
    }

    /// Draw the caption panel at `(x, y, width, height)`
    ///
    /// Layers, bottom to top: black background, first image, second image
    /// centered on the first one's bottom-right corner, white caption at
    /// [`CAPTION_ANCHOR_X`]. Missing images are skipped.
    pub fn draw_text_in_rect(&self, text: &str, x: f32, y: f32, width: f32, height: f32) {
        let background = Rect::new(x, y, width, height);
        let [first_rect, second_rect] = Self::image_rects(x, y);
        let style = TextStyle::new(COMMONS_FONT_FACE, CAPTION_FONT_SIZE)
            .with_color(Color::WHITE)
            .with_align(TextAlign::CENTER_MIDDLE);
        let caption_origin = Point::new(CAPTION_ANCHOR_X, y + height / 2.0);

        self.canvas.with(|vg| {
            vg.fill_rect_color(background, Color::BLACK);

            for (image, rect) in self.images.iter().zip([first_rect, second_rect]) {
                if let Some(image) = image {
                    vg.fill_rect_paint(rect, Brush::image_in_rect(rect, 0.0, *image, 1.0));
                }
            }

            vg.draw_text_styled(text, caption_origin, &style);
        });
    }

    /// Rects of both images for a panel at `(x, y)`
    pub fn image_rects(x: f32, y: f32) -> [Rect; 2] {
        let first = Rect::from_origin_size(
            Point::new(x + FIRST_IMAGE_OFFSET.x, y + FIRST_IMAGE_OFFSET.y),
            Size::new(FIRST_IMAGE_SIZE, FIRST_IMAGE_SIZE),
        );
        // Centered on the first image's bottom-right corner
        let second = Rect::from_center(first.max(), Size::new(SECOND_IMAGE_SIZE, SECOND_IMAGE_SIZE));
        [first, second]
    }
}

impl Drop for Commons<'_> {
    fn drop(&mut self) {
        let images = std::mem::take(&mut self.images);
        let released = self.canvas.try_with(|vg| {
            for image in images.into_iter().flatten() {
                vg.delete_image(image);
            }
        });
        if released.is_none() {
            tracing::warn!("commons images not released: context busy");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use daydream_core::RecordingContext;
    use std::cell::RefCell;

    #[test]
    fn test_image_rects() {
        let [first, second] = Commons::image_rects(10.0, 50.0);
        assert_eq!(first, Rect::new(30.0, 25.0, 100.0, 100.0));
        assert_eq!(second, Rect::new(90.0, 85.0, 80.0, 80.0));
    }

    #[test]
    fn test_missing_images_are_skipped() {
        let ctx = RefCell::new(RecordingContext::new(Size::new(1280.0, 720.0)));
        let commons = Commons::new(CanvasRef::new(&ctx));
        assert_eq!(commons.images(), [None, None]);

        commons.draw_text_in_rect("X", 0.0, 0.0, 10.0, 10.0);
        let ctx = ctx.borrow();
        assert_eq!(ctx.fills().len(), 1);
        assert_eq!(ctx.texts().len(), 1);
        assert_eq!(ctx.image_stats().failed, 2);
    }

    #[test]
    fn test_drop_releases_acquired_images_only() {
        let ctx = RefCell::new(
            RecordingContext::new(Size::new(1280.0, 720.0)).with_image(COMMONS_IMAGE_PATHS[1]),
        );
        {
            let commons = Commons::new(CanvasRef::new(&ctx));
            assert!(commons.images()[0].is_none());
            assert!(commons.images()[1].is_some());
        }
        let stats = ctx.borrow().image_stats();
        assert_eq!(stats.created, 1);
        assert_eq!(stats.deleted, 1);
        assert_eq!(stats.invalid_deletes, 0);
    }
}
