//! Error types for the Yari library.
//!
//! All fallible operations in Yari return [`Result`], whose error type is
//! the [`YariError`] enum. Configuration problems (unknown stage names,
//! malformed synonym rules) surface at analyzer-build time; `analyze`
//! itself never fails on input content.
//!
//! # Examples
//!
//! ```
//! use yari::error::{Result, YariError};
//!
//! fn build_stage(name: &str) -> Result<()> {
//!     Err(YariError::config(format!("unknown stage: {name}")))
//! }
//!
//! assert!(build_stage("bogus").is_err());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Yari operations.
#[derive(Error, Debug)]
pub enum YariError {
    /// I/O errors (reading synonym rule files, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Configuration errors (unknown stage names, invalid stage params,
    /// malformed synonym rules). Raised at build time, never at analyze time.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Analysis-related errors (tokenization, filtering)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Synonym rule syntax errors
    #[error("Parse error: {0}")]
    Parse(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("Error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with [`YariError`].
pub type Result<T> = std::result::Result<T, YariError>;

impl YariError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        YariError::Config(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        YariError::Analysis(msg.into())
    }

    /// Create a new parse error.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        YariError::Parse(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = YariError::config("unknown tokenizer 'foo'");
        assert_eq!(
            err.to_string(),
            "Configuration error: unknown tokenizer 'foo'"
        );

        let err = YariError::parse("line 3: empty phrase");
        assert_eq!(err.to_string(), "Parse error: line 3: empty phrase");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing");
        let err: YariError = io_err.into();
        assert!(matches!(err, YariError::Io(_)));
    }
}
