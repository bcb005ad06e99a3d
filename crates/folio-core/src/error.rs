//! Error types for Folio

use thiserror::Error;

/// Main error type for Folio operations
///
/// Modal operations never produce these; missing overlay parts are skipped
/// instead. Errors only come from loading content, parsing options and
/// submitting the demo contact form.
#[derive(Error, Debug)]
pub enum FolioError {
    /// General I/O error (reading a content file)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Content file could not be parsed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Content parsed but violates a content rule
    #[error("Invalid content: {0}")]
    InvalidContent(String),

    /// Theme name other than "light" or "dark"
    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    /// Contact form submitted with a blank field
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    /// Tracing subscriber could not be installed
    #[error("Logging error: {0}")]
    Logging(String),
}

/// Result type alias using FolioError
pub type FolioResult<T> = Result<T, FolioError>;
