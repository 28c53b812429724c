//! Presented frames

use daydream_core::{DrawCommand, Size};

/// The commands of one finished frame
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    /// Zero-based presentation index
    pub index: u64,
    /// Framebuffer size given to `begin_frame`
    pub size: Size,
    /// Everything recorded between `begin_frame` and `end_frame`
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    /// Number of fill commands
    pub fn fill_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::Fill))
            .count()
    }

    /// Text runs in draw order
    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Whether any text run equals `text`
    pub fn contains_text(&self, text: &str) -> bool {
        self.texts().any(|t| t == text)
    }
}
