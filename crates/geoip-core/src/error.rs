//! Error types for the geoip converters
//!
//! This module defines all error types used throughout the crate.

use thiserror::Error;

/// Result type alias for geoip operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for the geoip converters
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File system errors (directory creation, file writes)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A prefix string that is neither a CIDR nor an IP address
    #[error("Invalid prefix: {0}")]
    InvalidPrefix(String),

    /// An entry could not be rendered to text
    #[error("Failed to marshal entry {entry}: {message}")]
    Marshal {
        /// Entry name
        entry: String,
        /// Error message
        message: String,
    },
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an invalid prefix error
    pub fn invalid_prefix(msg: impl Into<String>) -> Self {
        Self::InvalidPrefix(msg.into())
    }

    /// Create a marshaling error for the named entry
    pub fn marshal(entry: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Marshal {
            entry: entry.into(),
            message: message.into(),
        }
    }
}
