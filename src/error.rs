//! Error types for label generation
//!
//! Every failure the core can report is a variant of [`LabelError`].
//! Blank input is not an error: the composer simply skips it.

use thiserror::Error;

use crate::types::FontName;

/// Custom error type for label generation
#[derive(Error, Debug)]
pub enum LabelError {
    #[error("Unsupported font '{0}' (expected one of: {list})", list = FontName::names().join(", "))]
    InvalidFont(String),

    #[error("Cannot measure {ch:?} in font {font}: no supported glyph")]
    MetricsFailure { font: FontName, ch: char },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("JSON parsing error: {0}")]
    JsonError(String),

    #[error("PDF generation error: {0}")]
    PdfError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for label operations
pub type LabelResult<T> = Result<T, LabelError>;

/// Conversion from LabelError to PyErr
#[cfg(feature = "python")]
impl From<LabelError> for pyo3::PyErr {
    fn from(err: LabelError) -> Self {
        match err {
            LabelError::IoError(e) => pyo3::PyErr::new::<pyo3::exceptions::PyIOError, _>(e.to_string()),
            other => pyo3::PyErr::new::<pyo3::exceptions::PyValueError, _>(other.to_string()),
        }
    }
}

/// Helper to convert serde_json errors
impl From<serde_json::Error> for LabelError {
    fn from(err: serde_json::Error) -> Self {
        LabelError::JsonError(err.to_string())
    }
}
