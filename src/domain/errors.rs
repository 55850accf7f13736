//! Domain error types
//!
//! All errors are domain-specific and don't expose third-party types.
//! Every error is fatal to the run: the tool is a one-shot batch
//! transform with no retries, so errors are propagated to the caller
//! and surfaced to the user with a non-zero exit code.

use thiserror::Error;

/// Main Veil error type
///
/// This is the primary error type used throughout the application.
#[derive(Debug, Error)]
pub enum VeilError {
    /// Input file missing, unreadable, or structurally malformed
    #[error("Input format error: {0}")]
    InputFormat(String),

    /// A required column is absent from the input header
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// A field value could not be processed
    #[error("Value error: {0}")]
    Value(String),

    /// Command-line usage errors
    #[error("Usage error: {0}")]
    Usage(String),

    /// Configuration errors (log level, etc.)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

/// Result type alias using [`VeilError`]
pub type Result<T> = std::result::Result<T, VeilError>;

// Conversion from std::io::Error
impl From<std::io::Error> for VeilError {
    fn from(err: std::io::Error) -> Self {
        VeilError::Io(err.to_string())
    }
}

// Conversion from csv errors. Reader-side failures (bad quoting, ragged
// rows, unreadable file) are input-format errors; everything else is I/O.
impl From<csv::Error> for VeilError {
    fn from(err: csv::Error) -> Self {
        match err.kind() {
            csv::ErrorKind::Io(_) => VeilError::Io(err.to_string()),
            _ => VeilError::InputFormat(err.to_string()),
        }
    }
}
