//! Text widget
//!
//! Draws one line of text at an anchor point. Text and face are borrowed,
//! so the strings must outlive the widget.
//!
//! Font size, face, color and alignment are set on the context as ambient
//! state before the text is emitted, and stay set afterwards. Two text
//! widgets drawn back to back do not isolate each other: whatever the
//! second one sets wins for every later draw that does not reset it.

use daydream_core::{CanvasRef, Color, Point, RenderContextExt, TextAlign, TextStyle};

use crate::widget::Widget;

/// A line of text
#[derive(Debug)]
pub struct Text<'a> {
    canvas: CanvasRef<'a>,
    text: &'a str,
    origin: Point,
    style: TextStyle<'a>,
}

impl<'a> Text<'a> {
    /// Create a text widget and draw it
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        canvas: CanvasRef<'a>,
        text: &'a str,
        face: &'a str,
        size: f32,
        x: f32,
        y: f32,
        color: Color,
        align: TextAlign,
    ) -> Self {
        Self::with_style(
            canvas,
            text,
            Point::new(x, y),
            TextStyle::new(face, size)
                .with_color(color)
                .with_align(align),
        )
    }

    /// Create a text widget from a prepared style and draw it
    pub fn with_style(
        canvas: CanvasRef<'a>,
        text: &'a str,
        origin: Point,
        style: TextStyle<'a>,
    ) -> Self {
        debug_assert!(style.size > 0.0, "font size must be positive");
        let mut widget = Self {
            canvas,
            text,
            origin,
            style,
        };
        widget.draw();
        widget
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn font_face(&self) -> &'a str {
        self.style.face
    }

    pub fn font_size(&self) -> f32 {
        self.style.size
    }

    pub fn x(&self) -> f32 {
        self.origin.x
    }

    pub fn y(&self) -> f32 {
        self.origin.y
    }

    pub fn color(&self) -> Color {
        self.style.color
    }

    pub fn align(&self) -> TextAlign {
        self.style.align
    }

    pub fn style(&self) -> &TextStyle<'a> {
        &self.style
    }

    pub fn set_text(&mut self, text: &'a str) {
        self.text = text;
    }

    pub fn set_font_face(&mut self, face: &'a str) {
        self.style.face = face;
    }

    pub fn set_font_size(&mut self, size: f32) {
        debug_assert!(size > 0.0, "font size must be positive");
        self.style.size = size;
    }

    pub fn set_x(&mut self, x: f32) {
        self.origin.x = x;
    }

    pub fn set_y(&mut self, y: f32) {
        self.origin.y = y;
    }

    pub fn set_color(&mut self, color: Color) {
        self.style.color = color;
    }

    pub fn set_align(&mut self, align: TextAlign) {
        self.style.align = align;
    }
}

impl Widget for Text<'_> {
    fn draw(&mut self) {
        let (text, origin, style) = (self.text, self.origin, self.style);
        self.canvas
            .with(|vg| vg.draw_text_styled(text, origin, &style));
    }
}
