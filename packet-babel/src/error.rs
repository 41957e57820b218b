//! Error types for output compilation

use std::fmt;

/// Errors that can occur while compiling a packet to an output format.
#[derive(Debug, Clone)]
pub enum FormatError {
    /// The requested format name is not registered.
    UnknownFormat(String),
    /// The underlying serializer failed.
    Serialization(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::UnknownFormat(name) => write!(f, "unknown output format '{}'", name),
            FormatError::Serialization(message) => {
                write!(f, "serialization failed: {}", message)
            }
        }
    }
}

impl std::error::Error for FormatError {}
