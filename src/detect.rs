//! PDF header sniffing.
//!
//! Rejects non-PDF uploads before any object parsing is attempted.

use crate::error::{Error, Result};

/// Information read from the `%PDF-x.y` header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfHeader {
    /// PDF version (e.g., "1.7", "2.0")
    pub version: String,
    /// Byte offset of the header (some producers emit leading garbage)
    pub offset: usize,
}

impl std::fmt::Display for PdfHeader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PDF {}", self.version)
    }
}

const PDF_MAGIC: &[u8] = b"%PDF-";
const VERSION_LEN: usize = 3;

/// Readers accept the header anywhere in the first 1024 bytes.
const HEADER_SEARCH_WINDOW: usize = 1024;

/// Locate and validate the PDF header in `data`.
///
/// # Returns
/// * `Ok(PdfHeader)` if a `%PDF-x.y` header is present
/// * `Err(Error::UnknownFormat)` if the data is not a PDF
/// * `Err(Error::UnsupportedVersion)` if the version is malformed
///
/// # Example
/// ```
/// use pdfsections::detect::detect_format_from_bytes;
///
/// let header = detect_format_from_bytes(b"%PDF-1.7\n").unwrap();
/// assert_eq!(header.version, "1.7");
/// ```
pub fn detect_format_from_bytes(data: &[u8]) -> Result<PdfHeader> {
    let window = &data[..data.len().min(HEADER_SEARCH_WINDOW)];
    let offset = window
        .windows(PDF_MAGIC.len())
        .position(|w| w == PDF_MAGIC)
        .ok_or(Error::UnknownFormat)?;

    let version_start = offset + PDF_MAGIC.len();
    let version_bytes = data
        .get(version_start..version_start + VERSION_LEN)
        .ok_or(Error::UnknownFormat)?;
    let version = String::from_utf8_lossy(version_bytes).to_string();

    if !is_valid_version(version_bytes) {
        return Err(Error::UnsupportedVersion(version));
    }

    Ok(PdfHeader { version, offset })
}

fn is_valid_version(bytes: &[u8]) -> bool {
    matches!(bytes, [major, b'.', minor] if major.is_ascii_digit() && minor.is_ascii_digit())
}

/// Check if bytes start like a PDF.
pub fn is_pdf_bytes(data: &[u8]) -> bool {
    detect_format_from_bytes(data).is_ok()
}
