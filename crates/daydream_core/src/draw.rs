//! Render Context - the nanovg-shaped drawing capability
//!
//! The `RenderContext` trait is the only surface widgets draw through. It
//! mirrors an immediate-mode vector renderer: a path is built with
//! `begin_path`/`rect`, a paint is chosen with `fill_color`/`fill_paint`, and
//! `fill` commits it. Text uses the same ambient model: font size, face,
//! fill color and alignment are set on the context and stay set until
//! somebody changes them.
//!
//! # Ambient state
//!
//! Every setter mutates context-wide state. Two text widgets drawn back to
//! back are not isolated from each other: the second inherits whatever the
//! first left behind for any setting it does not touch itself. The
//! `RenderContextExt` helpers always emit the full setter sequence, so draws
//! built on them only depend on their own arguments.
//!
//! # Example
//!
//! ```ignore
//! fn paint(vg: &mut dyn RenderContext) {
//!     vg.begin_path();
//!     vg.rect(Rect::new(0.0, 0.0, 100.0, 50.0));
//!     vg.fill_color(Color::BLACK);
//!     vg.fill();
//!
//!     let style = TextStyle::new("sans", 16.0).with_color(Color::WHITE);
//!     vg.draw_text_styled("Hello", Point::new(10.0, 30.0), &style);
//! }
//! ```

use std::ops::BitOr;

use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;

use crate::color::Color;
use crate::error::{RenderError, Result};
use crate::geometry::{Point, Rect, Size};

// ─────────────────────────────────────────────────────────────────────────────
// Resource Handles
// ─────────────────────────────────────────────────────────────────────────────

/// Opaque handle to a decoded, backend-resident image
///
/// Handles are never zero; an image that failed to load has no handle at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ImageId(pub u64);

/// Opaque handle to a registered font face
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FontId(pub u64);

/// Image creation flags (nanovg `NVGimageFlags` encoding)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ImageFlags(u32);

impl ImageFlags {
    pub const NONE: ImageFlags = ImageFlags(0);
    pub const GENERATE_MIPMAPS: ImageFlags = ImageFlags(1 << 0);
    pub const REPEAT_X: ImageFlags = ImageFlags(1 << 1);
    pub const REPEAT_Y: ImageFlags = ImageFlags(1 << 2);
    pub const FLIP_Y: ImageFlags = ImageFlags(1 << 3);
    pub const PREMULTIPLIED: ImageFlags = ImageFlags(1 << 4);
    pub const NEAREST: ImageFlags = ImageFlags(1 << 5);

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn contains(self, other: ImageFlags) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for ImageFlags {
    type Output = ImageFlags;

    fn bitor(self, rhs: ImageFlags) -> ImageFlags {
        ImageFlags(self.0 | rhs.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Text Alignment
// ─────────────────────────────────────────────────────────────────────────────

/// Horizontal text alignment relative to the anchor point
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HorizontalAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Vertical text alignment relative to the anchor point
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum VerticalAlign {
    Top,
    Middle,
    Bottom,
    #[default]
    Baseline,
}

/// Combined horizontal + vertical alignment
///
/// Compose with `|`: `HorizontalAlign::Left | VerticalAlign::Middle`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TextAlign {
    pub horizontal: HorizontalAlign,
    pub vertical: VerticalAlign,
}

impl TextAlign {
    const LEFT_BIT: u32 = 1 << 0;
    const CENTER_BIT: u32 = 1 << 1;
    const RIGHT_BIT: u32 = 1 << 2;
    const TOP_BIT: u32 = 1 << 3;
    const MIDDLE_BIT: u32 = 1 << 4;
    const BOTTOM_BIT: u32 = 1 << 5;
    const BASELINE_BIT: u32 = 1 << 6;

    pub const LEFT_MIDDLE: TextAlign = TextAlign::new(HorizontalAlign::Left, VerticalAlign::Middle);
    pub const CENTER_MIDDLE: TextAlign =
        TextAlign::new(HorizontalAlign::Center, VerticalAlign::Middle);

    pub const fn new(horizontal: HorizontalAlign, vertical: VerticalAlign) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Encode as nanovg `NVGalign` flags
    pub fn bits(self) -> u32 {
        let h = match self.horizontal {
            HorizontalAlign::Left => Self::LEFT_BIT,
            HorizontalAlign::Center => Self::CENTER_BIT,
            HorizontalAlign::Right => Self::RIGHT_BIT,
        };
        let v = match self.vertical {
            VerticalAlign::Top => Self::TOP_BIT,
            VerticalAlign::Middle => Self::MIDDLE_BIT,
            VerticalAlign::Bottom => Self::BOTTOM_BIT,
            VerticalAlign::Baseline => Self::BASELINE_BIT,
        };
        h | v
    }

    /// Decode nanovg `NVGalign` flags
    ///
    /// A missing group falls back to Left / Baseline. Returns `None` for
    /// unknown bits or for more than one flag within a group.
    pub fn from_bits(bits: u32) -> Option<Self> {
        let known = Self::LEFT_BIT
            | Self::CENTER_BIT
            | Self::RIGHT_BIT
            | Self::TOP_BIT
            | Self::MIDDLE_BIT
            | Self::BOTTOM_BIT
            | Self::BASELINE_BIT;
        if bits & !known != 0 {
            return None;
        }

        let horizontal = match bits & (Self::LEFT_BIT | Self::CENTER_BIT | Self::RIGHT_BIT) {
            0 => HorizontalAlign::Left,
            Self::LEFT_BIT => HorizontalAlign::Left,
            Self::CENTER_BIT => HorizontalAlign::Center,
            Self::RIGHT_BIT => HorizontalAlign::Right,
            _ => return None,
        };
        let vertical = match bits
            & (Self::TOP_BIT | Self::MIDDLE_BIT | Self::BOTTOM_BIT | Self::BASELINE_BIT)
        {
            0 => VerticalAlign::Baseline,
            Self::TOP_BIT => VerticalAlign::Top,
            Self::MIDDLE_BIT => VerticalAlign::Middle,
            Self::BOTTOM_BIT => VerticalAlign::Bottom,
            Self::BASELINE_BIT => VerticalAlign::Baseline,
            _ => return None,
        };
        Some(Self::new(horizontal, vertical))
    }
}

impl BitOr<VerticalAlign> for HorizontalAlign {
    type Output = TextAlign;

    fn bitor(self, rhs: VerticalAlign) -> TextAlign {
        TextAlign::new(self, rhs)
    }
}

impl BitOr<HorizontalAlign> for VerticalAlign {
    type Output = TextAlign;

    fn bitor(self, rhs: HorizontalAlign) -> TextAlign {
        TextAlign::new(rhs, self)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Paint Types
// ─────────────────────────────────────────────────────────────────────────────

/// Image fill pattern (the nanovg `nvgImagePattern` paint)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImagePattern {
    /// Top-left corner of one image tile
    pub origin: Point,
    /// Size of one image tile
    pub size: Size,
    /// Rotation around the origin, in radians
    pub angle: f32,
    /// Image to sample
    pub image: ImageId,
    /// Opacity multiplier (0.0 - 1.0)
    pub alpha: f32,
}

/// What a fill paints with
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Brush {
    Solid(Color),
    Image(ImagePattern),
}

impl Brush {
    /// Image pattern brush, argument order as in `nvgImagePattern`
    pub fn image_pattern(
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        angle: f32,
        image: ImageId,
        alpha: f32,
    ) -> Self {
        Brush::Image(ImagePattern {
            origin: Point::new(x, y),
            size: Size::new(width, height),
            angle,
            image,
            alpha,
        })
    }

    /// Image pattern stretched over exactly `rect`
    pub fn image_in_rect(rect: Rect, angle: f32, image: ImageId, alpha: f32) -> Self {
        Brush::Image(ImagePattern {
            origin: rect.origin,
            size: rect.size,
            angle,
            image,
            alpha,
        })
    }
}

impl Default for Brush {
    fn default() -> Self {
        Brush::Solid(Color::WHITE)
    }
}

impl From<Color> for Brush {
    fn from(color: Color) -> Self {
        Brush::Solid(color)
    }
}

impl From<ImagePattern> for Brush {
    fn from(pattern: ImagePattern) -> Self {
        Brush::Image(pattern)
    }
}

/// Everything a text draw needs, bundled so it can be passed explicitly
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle<'a> {
    /// Registered font face name
    pub face: &'a str,
    /// Font size in pixels
    pub size: f32,
    /// Fill color
    pub color: Color,
    /// Anchor alignment
    pub align: TextAlign,
}

impl<'a> TextStyle<'a> {
    /// Create a text style with a face and size
    pub fn new(face: &'a str, size: f32) -> Self {
        Self {
            face,
            size,
            color: Color::BLACK,
            align: TextAlign::default(),
        }
    }

    /// Set text color
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set anchor alignment
    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Render Context Trait
// ─────────────────────────────────────────────────────────────────────────────

/// The drawing capability shared by every widget
///
/// Implementations own the frame, the current path, the ambient paint and
/// text state, and the image/font registries. Drawing never fails; only
/// resource creation reports errors.
pub trait RenderContext {
    // ─────────────────────────────────────────────────────────────────────────
    // Frame
    // ─────────────────────────────────────────────────────────────────────────

    /// Start a frame; resets path and ambient state
    fn begin_frame(&mut self, width: f32, height: f32, pixel_ratio: f32);

    /// Finish the frame
    fn end_frame(&mut self);

    /// Size passed to the last `begin_frame`
    fn viewport_size(&self) -> Size;

    // ─────────────────────────────────────────────────────────────────────────
    // Paths
    // ─────────────────────────────────────────────────────────────────────────

    /// Discard the current path and start a new one
    fn begin_path(&mut self);

    /// Add an axis-aligned rectangle sub-path
    fn rect(&mut self, rect: Rect);

    /// Close the current sub-path
    fn close_path(&mut self);

    /// Fill the current path with the current fill paint
    fn fill(&mut self);

    // ─────────────────────────────────────────────────────────────────────────
    // Ambient State
    // ─────────────────────────────────────────────────────────────────────────

    /// Set the fill paint to a solid color
    fn fill_color(&mut self, color: Color);

    /// Set the fill paint
    fn fill_paint(&mut self, brush: Brush);

    /// Set the font size for subsequent text
    fn font_size(&mut self, size: f32);

    /// Set the font face (by registered name) for subsequent text
    fn font_face(&mut self, face: &str);

    /// Set the text alignment for subsequent text
    fn text_align(&mut self, align: TextAlign);

    /// Draw a line of text anchored at `origin` with the current text state
    fn text(&mut self, origin: Point, text: &str);

    // ─────────────────────────────────────────────────────────────────────────
    // Resources
    // ─────────────────────────────────────────────────────────────────────────

    /// Load and decode an image asset
    fn create_image(&mut self, path: &str, flags: ImageFlags) -> Result<ImageId>;

    /// Release an image previously returned by `create_image`
    fn delete_image(&mut self, image: ImageId);

    /// Register a font face under `name`
    fn create_font(&mut self, name: &str, path: &str) -> Result<FontId>;
}

/// Helpers that emit complete, order-stable primitive sequences
pub trait RenderContextExt: RenderContext {
    /// `begin_path, rect, fill_color, fill`
    fn fill_rect_color(&mut self, rect: Rect, color: Color) {
        self.begin_path();
        self.rect(rect);
        self.fill_color(color);
        self.fill();
    }

    /// `begin_path, rect, fill_paint, fill`
    fn fill_rect_paint(&mut self, rect: Rect, brush: Brush) {
        self.begin_path();
        self.rect(rect);
        self.fill_paint(brush);
        self.fill();
    }

    /// `font_size, font_face, fill_color, text_align`
    fn apply_text_style(&mut self, style: &TextStyle<'_>) {
        self.font_size(style.size);
        self.font_face(style.face);
        self.fill_color(style.color);
        self.text_align(style.align);
    }

    /// Apply `style`, then draw `text` at `origin`
    fn draw_text_styled(&mut self, text: &str, origin: Point, style: &TextStyle<'_>) {
        self.apply_text_style(style);
        self.text(origin, text);
    }
}

impl<T: RenderContext + ?Sized> RenderContextExt for T {}

// ─────────────────────────────────────────────────────────────────────────────
// Recording Render Context
// ─────────────────────────────────────────────────────────────────────────────

/// One sub-path of the current path
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    Rect(Rect),
    Close,
}

/// A primitive call, as issued
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    // Frame
    BeginFrame { size: Size, pixel_ratio: f32 },
    EndFrame,

    // Paths
    BeginPath,
    Rect(Rect),
    ClosePath,
    Fill,

    // State
    FillColor(Color),
    FillPaint(Brush),
    FontSize(f32),
    FontFace(String),
    TextAlign(TextAlign),

    // Text
    Text { origin: Point, text: String },
}

/// A committed fill with the ambient paint resolved
#[derive(Clone, Debug, PartialEq)]
pub struct FillRecord {
    pub path: Vec<PathCommand>,
    pub brush: Brush,
}

impl FillRecord {
    /// First rectangle of the filled path
    pub fn rect(&self) -> Option<Rect> {
        self.path.iter().find_map(|cmd| match cmd {
            PathCommand::Rect(rect) => Some(*rect),
            PathCommand::Close => None,
        })
    }
}

/// A drawn line of text with the ambient text state resolved
#[derive(Clone, Debug, PartialEq)]
pub struct TextRecord {
    pub text: String,
    pub origin: Point,
    pub face: Option<String>,
    pub size: f32,
    pub brush: Brush,
    pub align: TextAlign,
}

/// Image bookkeeping counters
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ImageStats {
    /// Successful `create_image` calls
    pub created: usize,
    /// Failed `create_image` calls
    pub failed: usize,
    /// `delete_image` calls that released a live handle
    pub deleted: usize,
    /// `delete_image` calls for handles that were not live
    pub invalid_deletes: usize,
}

/// A render context that records what it is asked to draw
///
/// Besides the raw `DrawCommand` stream it resolves the ambient paint and
/// text state into `FillRecord`s and `TextRecord`s. Images resolve only for
/// paths registered with `with_image`/`add_image`, which makes it a
/// counting stand-in for a real backend.
#[derive(Debug)]
pub struct RecordingContext {
    commands: Vec<DrawCommand>,
    fills: Vec<FillRecord>,
    texts: Vec<TextRecord>,
    path: SmallVec<[PathCommand; 4]>,
    brush: Brush,
    font_size: f32,
    font_face: Option<String>,
    text_align: TextAlign,
    viewport: Size,
    available_images: FxHashSet<String>,
    live_images: FxHashMap<ImageId, String>,
    fonts: FxHashMap<String, FontId>,
    next_handle: u64,
    stats: ImageStats,
}

impl RecordingContext {
    /// Default font size of a fresh context
    pub const DEFAULT_FONT_SIZE: f32 = 16.0;

    /// Create a new recording context
    pub fn new(viewport: Size) -> Self {
        Self {
            commands: Vec::new(),
            fills: Vec::new(),
            texts: Vec::new(),
            path: SmallVec::new(),
            brush: Brush::default(),
            font_size: Self::DEFAULT_FONT_SIZE,
            font_face: None,
            text_align: TextAlign::default(),
            viewport,
            available_images: FxHashSet::default(),
            live_images: FxHashMap::default(),
            fonts: FxHashMap::default(),
            next_handle: 1,
            stats: ImageStats::default(),
        }
    }

    /// Make `path` resolvable by `create_image`
    pub fn with_image(mut self, path: impl Into<String>) -> Self {
        self.add_image(path);
        self
    }

    /// Make `path` resolvable by `create_image`
    pub fn add_image(&mut self, path: impl Into<String>) {
        self.available_images.insert(path.into());
    }

    /// Get the recorded commands
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Committed fills, in order
    pub fn fills(&self) -> &[FillRecord] {
        &self.fills
    }

    /// Drawn text runs, in order
    pub fn texts(&self) -> &[TextRecord] {
        &self.texts
    }

    /// Image bookkeeping counters
    pub fn image_stats(&self) -> ImageStats {
        self.stats
    }

    /// Number of images created and not yet deleted
    pub fn live_image_count(&self) -> usize {
        self.live_images.len()
    }

    /// Whether `image` is currently live
    pub fn is_live(&self, image: ImageId) -> bool {
        self.live_images.contains_key(&image)
    }

    /// Path a live image was created from
    pub fn image_path(&self, image: ImageId) -> Option<&str> {
        self.live_images.get(&image).map(String::as_str)
    }

    /// Whether a font was registered under `name`
    pub fn has_font(&self, name: &str) -> bool {
        self.fonts.contains_key(name)
    }

    /// Clear recorded commands, fills and texts
    ///
    /// Ambient state and image bookkeeping are kept.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.fills.clear();
        self.texts.clear();
    }

    fn reset_state(&mut self) {
        self.path.clear();
        self.brush = Brush::default();
        self.font_size = Self::DEFAULT_FONT_SIZE;
        self.font_face = None;
        self.text_align = TextAlign::default();
    }

    fn issue_handle(&mut self) -> u64 {
        let handle = self.next_handle;
        self.next_handle += 1;
        handle
    }
}

impl Default for RecordingContext {
    fn default() -> Self {
        Self::new(Size::ZERO)
    }
}

impl RenderContext for RecordingContext {
    fn begin_frame(&mut self, width: f32, height: f32, pixel_ratio: f32) {
        self.viewport = Size::new(width, height);
        self.reset_state();
        self.commands.push(DrawCommand::BeginFrame {
            size: self.viewport,
            pixel_ratio,
        });
    }

    fn end_frame(&mut self) {
        self.commands.push(DrawCommand::EndFrame);
    }

    fn viewport_size(&self) -> Size {
        self.viewport
    }

    fn begin_path(&mut self) {
        self.path.clear();
        self.commands.push(DrawCommand::BeginPath);
    }

    fn rect(&mut self, rect: Rect) {
        self.path.push(PathCommand::Rect(rect));
        self.commands.push(DrawCommand::Rect(rect));
    }

    fn close_path(&mut self) {
        self.path.push(PathCommand::Close);
        self.commands.push(DrawCommand::ClosePath);
    }

    fn fill(&mut self) {
        self.commands.push(DrawCommand::Fill);
        self.fills.push(FillRecord {
            path: self.path.to_vec(),
            brush: self.brush,
        });
    }

    fn fill_color(&mut self, color: Color) {
        self.brush = Brush::Solid(color);
        self.commands.push(DrawCommand::FillColor(color));
    }

    fn fill_paint(&mut self, brush: Brush) {
        self.brush = brush;
        self.commands.push(DrawCommand::FillPaint(brush));
    }

    fn font_size(&mut self, size: f32) {
        self.font_size = size;
        self.commands.push(DrawCommand::FontSize(size));
    }

    fn font_face(&mut self, face: &str) {
        self.font_face = Some(face.to_string());
        self.commands.push(DrawCommand::FontFace(face.to_string()));
    }

    fn text_align(&mut self, align: TextAlign) {
        self.text_align = align;
        self.commands.push(DrawCommand::TextAlign(align));
    }

    fn text(&mut self, origin: Point, text: &str) {
        self.commands.push(DrawCommand::Text {
            origin,
            text: text.to_string(),
        });
        self.texts.push(TextRecord {
            text: text.to_string(),
            origin,
            face: self.font_face.clone(),
            size: self.font_size,
            brush: self.brush,
            align: self.text_align,
        });
    }

    fn create_image(&mut self, path: &str, _flags: ImageFlags) -> Result<ImageId> {
        if !self.available_images.contains(path) {
            self.stats.failed += 1;
            return Err(RenderError::image_load(path, "asset not found"));
        }

        let image = ImageId(self.issue_handle());
        self.live_images.insert(image, path.to_string());
        self.stats.created += 1;
        tracing::trace!("recording: created image {:?} from {}", image, path);
        Ok(image)
    }

    fn delete_image(&mut self, image: ImageId) {
        if self.live_images.remove(&image).is_some() {
            self.stats.deleted += 1;
        } else {
            self.stats.invalid_deletes += 1;
            tracing::warn!("recording: delete of unknown image {:?}", image);
        }
    }

    fn create_font(&mut self, name: &str, _path: &str) -> Result<FontId> {
        if let Some(font) = self.fonts.get(name) {
            return Ok(*font);
        }
        let font = FontId(self.issue_handle());
        self.fonts.insert(name.to_string(), font);
        Ok(font)
    }
}
