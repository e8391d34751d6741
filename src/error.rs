//! Error types for the segstream library.
//!
//! All fallible operations return [`SegstreamError`]. Token streams
//! themselves never fail once constructed: empty input, fully rejected
//! input and exhaustion are ordinary outcomes. Errors come from
//! construction, for example an invalid regex pattern or an unreadable
//! stop word file.
//!
//! # Examples
//!
//! ```
//! use segstream::error::{Result, SegstreamError};
//!
//! fn check(max_token_length: usize) -> Result<()> {
//!     if max_token_length == 0 {
//!         return Err(SegstreamError::config("max_token_length must be positive"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check(0).is_err());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for segstream operations.
#[derive(Error, Debug)]
pub enum SegstreamError {
    /// I/O errors (reading stop word files, configuration, input text)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (segmenter construction, unknown strategies)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Invalid configuration values
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid segmentation patterns
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Errors raised by third-party segmentation engines
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with SegstreamError.
pub type Result<T> = std::result::Result<T, SegstreamError>;

impl SegstreamError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        SegstreamError::Analysis(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        SegstreamError::Config(msg.into())
    }
}
