//! Unified error types for chatcorpus.
//!
//! This module provides a single [`CorpusError`] enum that covers every
//! failure the library can surface.
//!
//! # Error Handling Policy
//!
//! - **Per-line** problems (a line that does not look like a chat message,
//!   or whose timestamp does not match the configured format) are absorbed
//!   by the file processor and the line is dropped.
//! - **File and directory** problems (missing input directory, unreadable
//!   export, unwritable output) are fatal and abort the whole run.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// A specialized [`Result`] type for chatcorpus operations.
///
/// # Example
///
/// ```rust
/// use chatcorpus::error::Result;
///
/// fn collect() -> Result<Vec<String>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, CorpusError>;

/// The error type for all chatcorpus operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CorpusError {
    /// An I/O error occurred while touching `path`.
    ///
    /// This typically happens when:
    /// - The chats directory doesn't exist
    /// - An export file is unreadable or not valid UTF-8
    /// - The output directory can't be created or written
    #[error("IO error on '{}': {source}", path.display())]
    Io {
        /// The file or directory involved
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A structurally valid line carried a date/time that doesn't match the
    /// configured datetime format.
    #[error("Timestamp '{input}' does not match format '{format}': {source}")]
    Timestamp {
        /// The combined `"<date>, <time>"` string
        input: String,
        /// The chrono format string it was parsed with
        format: String,
        /// The underlying chrono error
        #[source]
        source: chrono::ParseError,
    },

    /// A configuration value is out of range or missing.
    #[error("Invalid configuration for '{field}': {message}")]
    InvalidConfig {
        /// Name of the offending field
        field: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// The language model backend reported a failure.
    #[error("Model error: {0}")]
    Model(String),

    /// JSON parsing/serialization error (configuration files).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl CorpusError {
    /// Creates an I/O error bound to a path.
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        CorpusError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a timestamp format error.
    pub fn timestamp(
        input: impl Into<String>,
        format: impl Into<String>,
        source: chrono::ParseError,
    ) -> Self {
        CorpusError::Timestamp {
            input: input.into(),
            format: format.into(),
            source,
        }
    }

    /// Creates an invalid configuration error.
    pub fn invalid_config(field: &'static str, message: impl Into<String>) -> Self {
        CorpusError::InvalidConfig {
            field,
            message: message.into(),
        }
    }

    /// Creates a model backend error.
    pub fn model(message: impl Into<String>) -> Self {
        CorpusError::Model(message.into())
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, CorpusError::Io { .. })
    }

    /// Returns `true` if this is a timestamp format error.
    pub fn is_timestamp(&self) -> bool {
        matches!(self, CorpusError::Timestamp { .. })
    }

    /// Returns `true` if this is a configuration error.
    pub fn is_invalid_config(&self) -> bool {
        matches!(self, CorpusError::InvalidConfig { .. })
    }

    /// Returns the path associated with this error, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            CorpusError::Io { path, .. } => Some(path),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use std::error::Error as _;

    #[test]
    fn test_io_error_names_path() {
        let err = CorpusError::io(
            "data/raw",
            io::Error::new(io::ErrorKind::NotFound, "not found"),
        );
        assert!(err.is_io());
        assert_eq!(err.path(), Some(Path::new("data/raw")));
        let msg = err.to_string();
        assert!(msg.contains("data/raw"));
        assert!(msg.contains("not found"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_timestamp_error_display() {
        let parse_err =
            NaiveDateTime::parse_from_str("13/45/20, 10:00", "%m/%d/%y, %H:%M").unwrap_err();
        let err = CorpusError::timestamp("13/45/20, 10:00", "%m/%d/%y, %H:%M", parse_err);
        assert!(err.is_timestamp());
        assert!(!err.is_io());
        assert!(err.path().is_none());
        assert!(err.to_string().contains("13/45/20, 10:00"));
    }

    #[test]
    fn test_invalid_config_display() {
        let err = CorpusError::invalid_config("user_name", "must not be empty");
        assert!(err.is_invalid_config());
        assert_eq!(
            err.to_string(),
            "Invalid configuration for 'user_name': must not be empty"
        );
    }

    #[test]
    fn test_json_from() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: CorpusError = json_err.into();
        assert!(matches!(err, CorpusError::Json(_)));
    }

    #[test]
    fn test_model_error_display() {
        assert_eq!(CorpusError::model("boom").to_string(), "Model error: boom");
    }
}
