//! Export error types.

use thiserror::Error;

/// Errors that can occur while producing preview images or meshes.
#[derive(Error, Debug)]
pub enum ExportError {
    /// No color map is registered under this name.
    #[error("unknown color map '{0}'")]
    UnknownColorMap(String),

    /// Pixel buffer does not match the image dimensions.
    #[error("invalid image data")]
    InvalidImageData,

    /// Image encoding failed.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// Writing the output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ExportError> for scansurf_core::ScanError {
    fn from(err: ExportError) -> Self {
        match err {
            ExportError::Io(e) => Self::IoError(e),
            other => Self::RenderError(other.to_string()),
        }
    }
}

/// A specialized Result type for export operations.
pub type ExportResult<T> = std::result::Result<T, ExportError>;
