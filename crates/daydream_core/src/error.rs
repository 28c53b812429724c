//! Error types for render context operations

use thiserror::Error;

/// Errors reported by a render context
///
/// Only resource acquisition can fail; drawing primitives never do.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    /// Image asset could not be resolved or decoded
    #[error("failed to load image '{path}': {reason}")]
    ImageLoad { path: String, reason: String },

    /// Font asset could not be resolved or parsed
    #[error("failed to load font '{name}' from '{path}': {reason}")]
    FontLoad {
        name: String,
        path: String,
        reason: String,
    },
}

impl RenderError {
    /// Shorthand for an image load failure
    pub fn image_load(path: impl Into<String>, reason: impl ToString) -> Self {
        RenderError::ImageLoad {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

/// Result type for render context operations
pub type Result<T> = std::result::Result<T, RenderError>;
