//! Error types for the pdfsections library.

use std::io;
use thiserror::Error;

/// Result type alias for pdfsections operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while turning a document into sections.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading input.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not recognized as a PDF.
    #[error("Unknown file format: not a valid PDF")]
    UnknownFormat,

    /// The PDF version header is malformed.
    #[error("Unsupported PDF version: {0}")]
    UnsupportedVersion(String),

    /// The PDF document is encrypted.
    #[error("Document is encrypted")]
    Encrypted,

    /// The PDF object structure could not be loaded.
    #[error("PDF parsing error: {0}")]
    PdfParse(String),

    /// The document is well-formed but unusable (e.g. no extractable text).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Low-level fault while extracting text runs from a page.
    #[error("Text extraction failed: {0}")]
    ExtractionFailure(String),

    /// Page number is out of range.
    #[error("Page {0} is out of range (document has {1} pages)")]
    PageOutOfRange(u32, u32),

    /// Invalid page range specification.
    #[error("Invalid page range: {0}")]
    InvalidPageRange(String),

    /// Error serializing or rendering a result.
    #[error("Rendering error: {0}")]
    Render(String),
}

/// Coarse error category surfaced to callers for status mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller supplied something that is not a usable document.
    InvalidInput,
    /// Processing failed on the server side.
    ExtractionFailure,
}

impl Error {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::UnknownFormat
            | Error::UnsupportedVersion(_)
            | Error::Encrypted
            | Error::PdfParse(_)
            | Error::InvalidInput(_)
            | Error::PageOutOfRange(_, _)
            | Error::InvalidPageRange(_) => ErrorKind::InvalidInput,
            Error::Io(_) | Error::ExtractionFailure(_) | Error::Render(_) => {
                ErrorKind::ExtractionFailure
            }
        }
    }

    /// Whether the error should be reported as a client error.
    pub fn is_client_error(&self) -> bool {
        self.kind() == ErrorKind::InvalidInput
    }
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::PdfParse(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Encrypted;
        assert_eq!(err.to_string(), "Document is encrypted");

        let err = Error::PageOutOfRange(10, 5);
        assert_eq!(
            err.to_string(),
            "Page 10 is out of range (document has 5 pages)"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.kind(), ErrorKind::ExtractionFailure);
    }

    #[test]
    fn test_error_kind_mapping() {
        assert_eq!(Error::UnknownFormat.kind(), ErrorKind::InvalidInput);
        assert!(Error::InvalidInput("no text".into()).is_client_error());
        assert!(Error::PdfParse("bad xref".into()).is_client_error());
        assert!(!Error::ExtractionFailure("bad stream".into()).is_client_error());
    }
}
