//! Error types and handling for Imagizer

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Imagizer operations
pub type Result<T> = std::result::Result<T, ImagizerError>;

/// Main error type for Imagizer operations
#[derive(Debug, Error)]
pub enum ImagizerError {
    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Image decode/encode errors
    #[error("Image processing error: {0}")]
    Image(#[from] image::ImageError),

    /// The interactive input stream ended before a prompt was answered
    #[error("Input ended while waiting for {prompt}")]
    InputClosed { prompt: String },

    /// Invalid target dimensions
    #[error("Invalid dimensions: {message}")]
    InvalidDimensions { message: String },

    /// File format not supported
    #[error("Unsupported image format: {format} (file: {file:?})")]
    UnsupportedFormat {
        format: String,
        file: Option<PathBuf>,
    },
}

impl ImagizerError {
    /// Create a new input-closed error for the named prompt
    pub fn input_closed<S: Into<String>>(prompt: S) -> Self {
        Self::InputClosed {
            prompt: prompt.into(),
        }
    }

    /// Create a new invalid dimensions error
    pub fn invalid_dimensions<S: Into<String>>(message: S) -> Self {
        Self::InvalidDimensions {
            message: message.into(),
        }
    }

    /// Create a new unsupported format error
    pub fn unsupported_format<S: Into<String>>(format: S, file: Option<PathBuf>) -> Self {
        Self::UnsupportedFormat {
            format: format.into(),
            file,
        }
    }

    /// Check if this error is recoverable (the batch can continue)
    pub fn is_recoverable(&self) -> bool {
        match self {
            // These errors affect a single file; the rest of the batch
            // is still processable
            Self::Image(_) | Self::UnsupportedFormat { .. } => true,

            // These errors invalidate the whole run
            Self::Io(_) | Self::InputClosed { .. } | Self::InvalidDimensions { .. } => false,
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Io(e) => format!("File system error: {}", e),
            Self::Image(e) => format!("Image processing failed: {}", e),
            Self::UnsupportedFormat { format, .. } => {
                format!(
                    "Unsupported image format: {}. Supported formats: JPEG, PNG",
                    format
                )
            }
            other => other.to_string(),
        }
    }
}
