//! Demo configuration file handling
//!
//! The demo reads an optional `daydream.toml`:
//!
//! ```toml
//! [display]
//! width = 1280
//! height = 720
//!
//! [assets]
//! romfs = "romfs"
//!
//! [font]
//! name = "sans"
//! path = "romfs:/fonts/Roboto-Regular.ttf"
//!
//! [caption]
//! text = "Teste de texto."
//! duration_secs = 5.0
//! rect = [0.0, 100.0, 400.0, 75.0]
//! ```
//!
//! Every key is optional; missing ones take the values shown above.

use std::fs;
use std::path::{Path, PathBuf};

use daydream_platform::DisplayConfig;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Complete demo configuration
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub display: DisplaySection,
    #[serde(default)]
    pub assets: AssetsSection,
    #[serde(default)]
    pub font: FontSection,
    #[serde(default)]
    pub caption: CaptionSection,
}

// =============================================================================
// Sections
// =============================================================================

/// Framebuffer settings
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct DisplaySection {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default = "default_pixel_ratio")]
    pub pixel_ratio: f32,
}

fn default_width() -> u32 {
    1280
}

fn default_height() -> u32 {
    720
}

fn default_pixel_ratio() -> f32 {
    1.0
}

impl Default for DisplaySection {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            pixel_ratio: default_pixel_ratio(),
        }
    }
}

/// Asset mount settings
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct AssetsSection {
    /// Directory mounted as `romfs:/`
    #[serde(default = "default_romfs")]
    pub romfs: PathBuf,
}

fn default_romfs() -> PathBuf {
    PathBuf::from("romfs")
}

impl Default for AssetsSection {
    fn default() -> Self {
        Self {
            romfs: default_romfs(),
        }
    }
}

/// Font registered at startup
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct FontSection {
    #[serde(default = "default_font_name")]
    pub name: String,
    #[serde(default = "default_font_path")]
    pub path: String,
}

fn default_font_name() -> String {
    "sans".to_string()
}

fn default_font_path() -> String {
    "romfs:/fonts/Roboto-Regular.ttf".to_string()
}

impl Default for FontSection {
    fn default() -> Self {
        Self {
            name: default_font_name(),
            path: default_font_path(),
        }
    }
}

/// The timed caption panel
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct CaptionSection {
    #[serde(default = "default_caption_text")]
    pub text: String,
    /// How long the panel stays up after ZR, in seconds
    #[serde(default = "default_caption_duration")]
    pub duration_secs: f32,
    /// Panel rect as `[x, y, width, height]`
    #[serde(default = "default_caption_rect")]
    pub rect: [f32; 4],
}

fn default_caption_text() -> String {
    "Teste de texto.".to_string()
}

fn default_caption_duration() -> f32 {
    5.0
}

fn default_caption_rect() -> [f32; 4] {
    [0.0, 100.0, 400.0, 75.0]
}

impl Default for CaptionSection {
    fn default() -> Self {
        Self {
            text: default_caption_text(),
            duration_secs: default_caption_duration(),
            rect: default_caption_rect(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        let config: AppConfig = toml::from_str(&content).map_err(|e| AppError::ConfigParse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| AppError::ConfigSerialize(e.to_string()))
    }

    /// Display settings for the platform layer
    pub fn display_config(&self) -> DisplayConfig {
        DisplayConfig::default()
            .size(self.display.width, self.display.height)
            .pixel_ratio(self.display.pixel_ratio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.display.width, 1280);
        assert_eq!(config.display.height, 720);
        assert_eq!(config.font.name, "sans");
        assert_eq!(config.font.path, "romfs:/fonts/Roboto-Regular.ttf");
        assert_eq!(config.caption.duration_secs, 5.0);
        assert_eq!(config.caption.rect, [0.0, 100.0, 400.0, 75.0]);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [display]
            width = 640

            [caption]
            text = "hello"
            "#,
        )
        .unwrap();

        assert_eq!(config.display.width, 640);
        assert_eq!(config.display.height, 720);
        assert_eq!(config.caption.text, "hello");
        assert_eq!(config.caption.duration_secs, 5.0);
        assert_eq!(config.assets.romfs, PathBuf::from("romfs"));
    }

    #[test]
    fn test_load_and_roundtrip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[assets]\nromfs = \"/data/romfs\"").unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.assets.romfs, PathBuf::from("/data/romfs"));

        let reparsed: AppConfig = toml::from_str(&config.to_toml().unwrap()).unwrap();
        assert_eq!(reparsed, config);
    }

    #[test]
    fn test_load_errors() {
        let missing = AppConfig::load(Path::new("/definitely/not/here.toml"));
        assert!(matches!(missing, Err(AppError::ConfigRead { .. })));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[display]\nwidth = \"wide\"").unwrap();
        assert!(matches!(
            AppConfig::load(file.path()),
            Err(AppError::ConfigParse { .. })
        ));
    }

    #[test]
    fn test_display_config() {
        let mut config = AppConfig::default();
        config.display.pixel_ratio = 2.0;
        let display = config.display_config();
        assert_eq!((display.width, display.height), (1280, 720));
        assert_eq!(display.pixel_ratio, 2.0);
    }
}
