//! Error types for the selector library.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Error type for all selector operations.
///
/// Note that a rejected quantity is not an error: the stepper treats it as
/// an unset step and carries on.
#[derive(Error, Debug)]
pub enum SelectorError {
    /// An input event named a field that is not one of the form's steps
    #[error("Unknown step '{name}'")]
    UnknownStep { name: String },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> SelectorError {
        SelectorError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl SelectorError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a configuration error from any displayable message.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

/// Specialized extension trait for file-system Results.
pub trait IoResultExt<T> {
    /// Map I/O errors to a `FileSystem` error naming `path`.
    fn with_path(self, path: &Path) -> Result<T>;
}

impl<T> IoResultExt<T> for std::result::Result<T, std::io::Error> {
    fn with_path(self, path: &Path) -> Result<T> {
        self.map_err(|e| SelectorError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

/// Result type alias for selector operations
pub type Result<T> = std::result::Result<T, SelectorError>;
