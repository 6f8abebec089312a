//! Error types for TNL conversion

use std::io;
use thiserror::Error;

/// Result type alias for TNL operations
pub type Result<T> = std::result::Result<T, TnlError>;

/// Main error type for container, texture and thumbnail operations
#[derive(Error, Debug)]
pub enum TnlError {
    /// IO errors when reading/writing files
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Malformed or oversized container, or a JPEG too large to frame
    #[error("Format error: {0}")]
    Format(String),

    /// Re-encoding could not reach the byte budget
    #[error("Could not fit JPEG into {limit} bytes even at the lowest quality (last attempt: {last_size} bytes)")]
    SizeExhausted { limit: usize, last_size: usize },

    /// Source image could not be decoded or encoded
    #[error("Image codec error: {0}")]
    Decode(String),

    /// Input buffer shorter than the layout requires
    #[error("Not enough data: expected {expected}, got {actual}")]
    NotEnoughData { expected: usize, actual: usize },

    /// Invalid arguments or image data
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl TnlError {
    /// Create a format error
    pub fn format<S: Into<String>>(message: S) -> Self {
        Self::Format(message.into())
    }

    /// Create a decode error
    pub fn decode<S: Into<String>>(message: S) -> Self {
        Self::Decode(message.into())
    }

    /// Create an invalid data error
    pub fn invalid_data<S: Into<String>>(message: S) -> Self {
        Self::InvalidData(message.into())
    }

    /// Create a not enough data error
    pub fn not_enough_data(expected: usize, actual: usize) -> Self {
        Self::NotEnoughData { expected, actual }
    }

    /// Create a size exhausted error
    pub fn size_exhausted(limit: usize, last_size: usize) -> Self {
        Self::SizeExhausted { limit, last_size }
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }
}
