//! Solid-color rectangle widget

use daydream_core::{CanvasRef, Color, Rect, RenderContextExt};

use crate::widget::Widget;

/// An axis-aligned rectangle filled with one color
#[derive(Debug)]
pub struct Rectangle<'a> {
    canvas: CanvasRef<'a>,
    rect: Rect,
    color: Color,
}

impl<'a> Rectangle<'a> {
    /// Fill color used by [`Rectangle::new`]
    pub const DEFAULT_COLOR: Color = Color::LIGHT_GRAY;

    /// Create a light gray rectangle and draw it
    pub fn new(canvas: CanvasRef<'a>, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::with_color(canvas, x, y, width, height, Self::DEFAULT_COLOR)
    }

    /// Create a rectangle with a fill color and draw it
    pub fn with_color(
        canvas: CanvasRef<'a>,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    ) -> Self {
        debug_assert!(width > 0.0 && height > 0.0, "rectangle size must be positive");
        let mut rectangle = Self {
            canvas,
            rect: Rect::new(x, y, width, height),
            color,
        };
        rectangle.draw();
        rectangle
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

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_x(&mut self, x: f32) {
        self.rect.origin.x = x;
    }

    pub fn set_y(&mut self, y: f32) {
        self.rect.origin.y = y;
    }

    pub fn set_width(&mut self, width: f32) {
        debug_assert!(width > 0.0, "rectangle width must be positive");
        self.rect.size.width = width;
    }

    pub fn set_height(&mut self, height: f32) {
        debug_assert!(height > 0.0, "rectangle height must be positive");
        self.rect.size.height = height;
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}

impl Widget for Rectangle<'_> {
    fn draw(&mut self) {
        let (rect, color) = (self.rect, self.color);
        self.canvas.with(|vg| vg.fill_rect_color(rect, color));
    }
}
