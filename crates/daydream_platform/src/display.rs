//! Display configuration

/// Framebuffer the frame driver renders into
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayConfig {
    /// Framebuffer width in pixels
    pub width: u32,
    /// Framebuffer height in pixels
    pub height: u32,
    /// Device pixel ratio passed to `begin_frame`
    pub pixel_ratio: f32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            pixel_ratio: 1.0,
        }
    }
}

impl DisplayConfig {
    /// Set the framebuffer size
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the pixel ratio
    pub fn pixel_ratio(mut self, ratio: f32) -> Self {
        self.pixel_ratio = ratio;
        self
    }
}
