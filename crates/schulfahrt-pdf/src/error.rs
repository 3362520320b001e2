//! Error types for PDF composition and export

use thiserror::Error;

/// Result type for PDF operations
pub type Result<T> = std::result::Result<T, PdfError>;

/// Errors that can occur while composing or exporting a document
#[derive(Error, Debug)]
pub enum PdfError {
    /// The drawing backend could not be initialized
    #[error("drawing backend unavailable: {0}")]
    BackendUnavailable(String),

    /// A drawing call failed mid-document
    #[error("document drawing failed: {0}")]
    Drawing(String),

    /// IO error while writing the finished document
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
