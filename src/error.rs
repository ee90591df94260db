//! Error type for resume generation.
//!
//! Every failure while turning a resume into PDF bytes (an undecodable
//! photo, text the built-in fonts cannot encode, I/O trouble staging the
//! transient photo file) collapses into one [`GenerationError`] carrying a
//! human-readable message. Callers show the message; they never branch on
//! the cause.

use thiserror::Error;

/// "Generation failed", with a description of what went wrong.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("generation failed: {message}")]
pub struct GenerationError {
    message: String,
}

impl GenerationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The description without the "generation failed" prefix.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<std::io::Error> for GenerationError {
    fn from(err: std::io::Error) -> Self {
        GenerationError::new(format!("I/O error: {err}"))
    }
}

impl From<image::ImageError> for GenerationError {
    fn from(err: image::ImageError) -> Self {
        GenerationError::new(format!("Photo decode error: {err}"))
    }
}

/// Result type alias for generation operations.
pub type GenerationResult<T> = Result<T, GenerationError>;
