//! Paint context - a RenderContext with real image and font resources
//!
//! Drawing primitives are recorded through an inner `RecordingContext`;
//! images are decoded with `daydream_image` and fonts are parsed with
//! `ttf-parser`, so resource failures surface exactly where a GPU backend
//! would report them.

use daydream_core::{
    Brush, Color, DrawCommand, FillRecord, FontId, ImageFlags, ImageId, Point, Rect,
    RecordingContext, RenderContext, RenderError, Result, Size, TextAlign, TextRecord,
};
use daydream_image::{ImageData, ImageSource};
use daydream_platform::{AssetLoader, AssetPath};
use rustc_hash::FxHashSet;

use crate::frame::Frame;
use crate::resources::{FontStore, ImageStore, StoredImage};

/// The render context used by the demo driver
///
/// PaintContext wraps a RecordingContext to record draw commands, while
/// owning the decoded images and parsed fonts they refer to.
pub struct PaintContext<L: AssetLoader> {
    recording: RecordingContext,
    loader: L,
    images: ImageStore,
    fonts: FontStore,
    current_face: Option<String>,
    warned_faces: FxHashSet<String>,
    last_frame: Option<Frame>,
    frames_presented: u64,
}

impl<L: AssetLoader> PaintContext<L> {
    /// Create a new paint context with the given viewport size
    pub fn new(viewport: Size, loader: L) -> Self {
        Self {
            recording: RecordingContext::new(viewport),
            loader,
            images: ImageStore::new(),
            fonts: FontStore::new(),
            current_face: None,
            warned_faces: FxHashSet::default(),
            last_frame: None,
            frames_presented: 0,
        }
    }

    /// Get the asset loader
    pub fn loader(&self) -> &L {
        &self.loader
    }

    /// Commands recorded since the last `end_frame`
    pub fn commands(&self) -> &[DrawCommand] {
        self.recording.commands()
    }

    /// Fills recorded since the last `end_frame`
    pub fn fills(&self) -> &[FillRecord] {
        self.recording.fills()
    }

    /// Text runs recorded since the last `end_frame`
    pub fn texts(&self) -> &[TextRecord] {
        self.recording.texts()
    }

    /// The most recently presented frame
    pub fn last_frame(&self) -> Option<&Frame> {
        self.last_frame.as_ref()
    }

    /// Number of frames finished with `end_frame`
    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// Decoded data behind an image handle
    pub fn image(&self, image: ImageId) -> Option<&ImageData> {
        self.images.get(image).map(|stored| &stored.data)
    }

    /// Number of live images
    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    /// Whether a font was registered under `name`
    pub fn has_font(&self, name: &str) -> bool {
        self.fonts.contains(name)
    }

    /// Faces that were used for text without being registered
    pub fn missing_faces(&self) -> impl Iterator<Item = &str> + '_ {
        self.warned_faces.iter().map(String::as_str)
    }

    fn check_face(&mut self) {
        let Some(face) = self.current_face.as_deref() else {
            return;
        };
        if self.fonts.contains(face) || self.warned_faces.contains(face) {
            return;
        }
        tracing::warn!("text drawn with unregistered font face '{}'", face);
        self.warned_faces.insert(face.to_string());
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// RenderContext Implementation - delegates drawing to RecordingContext
// ═══════════════════════════════════════════════════════════════════════════════

impl<L: AssetLoader> RenderContext for PaintContext<L> {
    fn begin_frame(&mut self, width: f32, height: f32, pixel_ratio: f32) {
        self.current_face = None;
        self.recording.begin_frame(width, height, pixel_ratio);
    }

    fn end_frame(&mut self) {
        self.recording.end_frame();

        let frame = Frame {
            index: self.frames_presented,
            size: self.recording.viewport_size(),
            commands: self.recording.take_commands(),
        };
        self.recording.clear();

        tracing::trace!(
            "presented frame {} ({} commands)",
            frame.index,
            frame.commands.len()
        );
        self.last_frame = Some(frame);
        self.frames_presented += 1;
    }

    fn viewport_size(&self) -> Size {
        self.recording.viewport_size()
    }

    fn begin_path(&mut self) {
        self.recording.begin_path();
    }

    fn rect(&mut self, rect: Rect) {
        self.recording.rect(rect);
    }

    fn close_path(&mut self) {
        self.recording.close_path();
    }

    fn fill(&mut self) {
        self.recording.fill();
    }

    fn fill_color(&mut self, color: Color) {
        self.recording.fill_color(color);
    }

    fn fill_paint(&mut self, brush: Brush) {
        if let Brush::Image(pattern) = brush {
            if self.images.get(pattern.image).is_none() {
                tracing::debug!("fill with released image {:?}", pattern.image);
            }
        }
        self.recording.fill_paint(brush);
    }

    fn font_size(&mut self, size: f32) {
        self.recording.font_size(size);
    }

    fn font_face(&mut self, face: &str) {
        self.current_face = Some(face.to_string());
        self.recording.font_face(face);
    }

    fn text_align(&mut self, align: TextAlign) {
        self.recording.text_align(align);
    }

    fn text(&mut self, origin: Point, text: &str) {
        self.check_face();
        self.recording.text(origin, text);
    }

    fn create_image(&mut self, path: &str, flags: ImageFlags) -> Result<ImageId> {
        let data = ImageData::load(ImageSource::asset(path), &self.loader)
            .map_err(|e| RenderError::image_load(path, e))?;

        let (width, height) = data.dimensions();
        let image = self.images.insert(StoredImage {
            path: path.to_string(),
            data,
        });
        tracing::debug!(
            "created image {:?} from {} ({}x{}, {:?})",
            image,
            path,
            width,
            height,
            flags
        );
        Ok(image)
    }

    fn delete_image(&mut self, image: ImageId) {
        match self.images.remove(image) {
            Some(stored) => tracing::debug!("deleted image {:?} ({})", image, stored.path),
            None => tracing::warn!("delete of unknown image {:?}", image),
        }
    }

    fn create_font(&mut self, name: &str, path: &str) -> Result<FontId> {
        let font_error = |reason: String| RenderError::FontLoad {
            name: name.to_string(),
            path: path.to_string(),
            reason,
        };

        let data = self
            .loader
            .load(&AssetPath::parse(path))
            .map_err(|e| font_error(e.to_string()))?;
        let font = self
            .fonts
            .insert(name, &data)
            .map_err(|e| font_error(e.to_string()))?;

        tracing::debug!("registered font '{}' from {}", name, path);
        Ok(font)
    }
}
