//! Error handling for label insertion
//!
//! Label inference itself never fails; it degrades to placeholder values.
//! Errors only surface at the host boundary, where cursor positions and
//! user-supplied options are checked before any label is computed.

use std::fmt;

/// Label insertion error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelError {
    /// A cursor position lies past the end of the buffer or inside a character
    InvalidPosition { position: usize, len: usize },
    /// An option value would break an output invariant
    InvalidOption { option: String, message: String },
}

impl fmt::Display for LabelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelError::InvalidPosition { position, len } => {
                if position > len {
                    write!(
                        f,
                        "Invalid position {}: buffer is only {} bytes long",
                        position, len
                    )
                } else {
                    write!(
                        f,
                        "Invalid position {}: not on a character boundary",
                        position
                    )
                }
            }
            LabelError::InvalidOption { option, message } => {
                write!(f, "Invalid option '{}': {}", option, message)
            }
        }
    }
}

impl std::error::Error for LabelError {}

/// Result type for label insertion operations
pub type LabelErrorResult<T> = Result<T, LabelError>;

// Convenience constructors for errors
impl LabelError {
    pub fn invalid_position(position: usize, len: usize) -> Self {
        LabelError::InvalidPosition { position, len }
    }

    pub fn invalid_option(option: impl Into<String>, message: impl Into<String>) -> Self {
        LabelError::InvalidOption {
            option: option.into(),
            message: message.into(),
        }
    }
}
