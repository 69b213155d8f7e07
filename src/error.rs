//! Error types for the unscan library.

use std::io;
use thiserror::Error;

/// Result type alias for unscan operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during document reconstruction and export.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A text-line quadrilateral is malformed (wrong point count or a
    /// degenerate edge). Never coerced; surfaced to the caller.
    #[error("Invalid quadrilateral: {0}")]
    InvalidQuadrilateral(String),

    /// Detector outputs that must correspond index-by-index have
    /// different lengths.
    #[error("Detection mismatch for {what}: expected {expected}, got {actual}")]
    DetectionMismatch {
        /// Which correspondence was violated.
        what: &'static str,
        /// Number of entries the other detector produced.
        expected: usize,
        /// Number of entries actually received.
        actual: usize,
    },

    /// An output-format token is not recognized.
    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    /// The region detector collaborator failed.
    #[error("Region detection error: {0}")]
    Detection(String),

    /// The table-grid or text-recognition collaborator failed.
    #[error("Recognition error: {0}")]
    Recognition(String),

    /// An unrecoverable failure while assembling one page of a document.
    #[error("Page {page} failed: {source}")]
    PageFailure {
        /// Zero-based index of the failed page.
        page: usize,
        /// Underlying failure.
        #[source]
        source: Box<Error>,
    },

    /// Error during export serialization.
    #[error("Rendering error: {0}")]
    Render(String),

    /// Error writing a cropped figure image.
    #[error("Figure export error: {0}")]
    FigureExport(#[from] image::ImageError),
}

impl Error {
    /// Wrap an error as a page-level failure.
    pub fn page_failure(page: usize, source: Error) -> Self {
        Error::PageFailure {
            page,
            source: Box::new(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnsupportedFormat("yaml".to_string());
        assert_eq!(err.to_string(), "Unsupported output format: yaml");

        let err = Error::DetectionMismatch {
            what: "table grids",
            expected: 2,
            actual: 1,
        };
        assert_eq!(
            err.to_string(),
            "Detection mismatch for table grids: expected 2, got 1"
        );
    }

    #[test]
    fn test_page_failure_wraps_source() {
        let err = Error::page_failure(3, Error::Recognition("model timeout".into()));
        assert!(err.to_string().contains("Page 3"));
        assert!(err.to_string().contains("model timeout"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
