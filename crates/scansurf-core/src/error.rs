//! Error types for scansurf.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for scansurf operations.
#[derive(Error, Debug)]
pub enum ScanError {
    /// The selected scan path does not resolve to a readable file.
    #[error("scan file '{}' not found or unreadable: {source}", .path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The scan table is malformed (ragged, non-numeric, empty...).
    #[error("format error at line {line}: {message}")]
    Format { line: usize, message: String },

    /// The radius field has zero dynamic range, so it cannot be normalized.
    #[error("degenerate radius range: every sample equals {value}")]
    DegenerateRange { value: f64 },

    /// Radius data violates the matrix invariants (empty, negative, non-finite).
    #[error("invalid radius data: {0}")]
    InvalidData(String),

    /// A configuration value is out of its valid domain.
    #[error("invalid option: {0}")]
    InvalidOption(String),

    /// Data size mismatch.
    #[error("data size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// Rendering or export error.
    #[error("render error: {0}")]
    RenderError(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl ScanError {
    pub(crate) fn format(line: usize, message: impl Into<String>) -> Self {
        Self::Format {
            line,
            message: message.into(),
        }
    }
}

/// A specialized Result type for scansurf operations.
pub type Result<T> = std::result::Result<T, ScanError>;
