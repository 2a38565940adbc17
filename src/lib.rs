//! # pdfsections
//!
//! Section outline inference for PDF documents.
//!
//! This library reads the positioned text of a PDF and infers a two-level
//! outline from it: section headers (such as "EDUCATION" or "EXPERIENCE")
//! and the content lines that belong to each. Headers are recognised from
//! typography alone, by comparing each line's font size to the document's
//! average and by its shape (all caps, short, no trailing punctuation).
//!
//! ## Quick Start
//!
//! ```no_run
//! use pdfsections::{parse_file, render};
//!
//! fn main() -> pdfsections::Result<()> {
//!     let result = parse_file("resume.pdf")?;
//!
//!     for section in &result.data {
//!         println!("{} ({} lines)", section.text, section.content.len());
//!     }
//!
//!     let json = render::to_json(&result, render::JsonFormat::Pretty)?;
//!     println!("{}", json);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Pure engine**: [`outline_elements`] works on any [`TextElement`] source
//! - **Configurable rules**: size delta, word limit, terminal punctuation
//! - **Preamble policies**: collect, drop, or promote the first line
//! - **CJK aware**: no spurious spaces between ideographs or kana
//! - **Batch processing**: Uses Rayon across independent documents

pub mod analysis;
pub mod detect;
pub mod error;
pub mod extract;
pub mod model;
pub mod options;
pub mod render;

// Re-export commonly used types
pub use analysis::{
    outline_elements, ContentMode, FontProfile, HeaderRules, OutlineConfig, PreamblePolicy,
    SectionGrouper, StructureBuilder,
};
pub use detect::{detect_format_from_bytes, is_pdf_bytes, PdfHeader};
pub use error::{Error, ErrorKind, Result};
pub use extract::{extract_elements, PdfTextSource, TextElementSource};
pub use model::{
    ClassifiedElement, ContentNode, ParseResponse, ParseResult, Position, Role, SectionNode,
    TextElement,
};
pub use options::{ErrorMode, PageSelection, ParseOptions};
pub use render::JsonFormat;

use std::io::Read;
use std::path::Path;

use rayon::prelude::*;

/// Parse a PDF file into its section outline.
///
/// # Example
///
/// ```no_run
/// use pdfsections::parse_file;
///
/// let result = parse_file("resume.pdf").unwrap();
/// println!("Sections: {}", result.section_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<ParseResult> {
    parse_file_with_options(path, &ParseOptions::default())
}

/// Parse a PDF file with custom options.
///
/// # Example
///
/// ```no_run
/// use pdfsections::{parse_file_with_options, ParseOptions, PreamblePolicy};
///
/// let options = ParseOptions::new()
///     .with_raw_text(true)
///     .with_preamble(PreamblePolicy::PromoteFirst);
/// let result = parse_file_with_options("resume.pdf", &options).unwrap();
/// ```
pub fn parse_file_with_options<P: AsRef<Path>>(
    path: P,
    options: &ParseOptions,
) -> Result<ParseResult> {
    let data = std::fs::read(path)?;
    parse_bytes_with_options(&data, options)
}

/// Parse a PDF from bytes.
///
/// # Example
///
/// ```no_run
/// use pdfsections::parse_bytes;
///
/// let data = std::fs::read("resume.pdf").unwrap();
/// let result = parse_bytes(&data).unwrap();
/// ```
pub fn parse_bytes(data: &[u8]) -> Result<ParseResult> {
    parse_bytes_with_options(data, &ParseOptions::default())
}

/// Parse a PDF from bytes with custom options.
///
/// Fails with an input error when the bytes are not a readable PDF or,
/// unless [`ParseOptions::allow_empty`] is set, when no text could be
/// extracted. Never returns a partial result.
pub fn parse_bytes_with_options(data: &[u8], options: &ParseOptions) -> Result<ParseResult> {
    let header = detect_format_from_bytes(data)?;
    log::debug!("Detected {}", header);

    let elements = PdfTextSource::from_bytes(data, options)?.elements()?;
    if elements.is_empty() && options.require_text {
        return Err(Error::InvalidInput(
            "document contains no extractable text".to_string(),
        ));
    }

    Ok(outline_elements(elements, &options.outline))
}

/// Parse a PDF from a reader.
///
/// # Example
///
/// ```no_run
/// use pdfsections::parse_reader;
/// use std::fs::File;
///
/// let file = File::open("resume.pdf").unwrap();
/// let result = parse_reader(file).unwrap();
/// ```
pub fn parse_reader<R: Read>(reader: R) -> Result<ParseResult> {
    parse_reader_with_options(reader, &ParseOptions::default())
}

/// Parse a PDF from a reader with custom options.
pub fn parse_reader_with_options<R: Read>(
    mut reader: R,
    options: &ParseOptions,
) -> Result<ParseResult> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    parse_bytes_with_options(&data, options)
}

/// Parse independent documents, one result per document in input order.
///
/// Documents are processed on the Rayon thread pool unless
/// [`ParseOptions::parallel`] is off. A failure affects only its own slot.
pub fn parse_batch<D>(documents: &[D], options: &ParseOptions) -> Vec<Result<ParseResult>>
where
    D: AsRef<[u8]> + Sync,
{
    if options.parallel {
        documents
            .par_iter()
            .map(|data| parse_bytes_with_options(data.as_ref(), options))
            .collect()
    } else {
        documents
            .iter()
            .map(|data| parse_bytes_with_options(data.as_ref(), options))
            .collect()
    }
}

/// Builder for parsing PDF documents into section outlines.
///
/// # Example
///
/// ```no_run
/// use pdfsections::{PdfSections, PreamblePolicy};
///
/// let result = PdfSections::new()
///     .with_raw_text()
///     .preamble(PreamblePolicy::Drop)
///     .lenient()
///     .parse("resume.pdf")?;
/// # Ok::<(), pdfsections::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PdfSections {
    options: ParseOptions,
}

impl PdfSections {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the raw reading-order text to results.
    pub fn with_raw_text(mut self) -> Self {
        self.options = self.options.with_raw_text(true);
        self
    }

    /// Set the preamble policy.
    pub fn preamble(mut self, policy: PreamblePolicy) -> Self {
        self.options = self.options.with_preamble(policy);
        self
    }

    /// Set the header rules.
    pub fn rules(mut self, rules: HeaderRules) -> Self {
        self.options = self.options.with_rules(rules);
        self
    }

    /// Join each section's content into a single node.
    pub fn joined(mut self) -> Self {
        self.options = self.options.with_content_mode(ContentMode::Joined);
        self
    }

    /// Enable lenient parsing mode.
    pub fn lenient(mut self) -> Self {
        self.options = self.options.lenient();
        self
    }

    /// Disable parallel batch processing.
    pub fn sequential(mut self) -> Self {
        self.options = self.options.sequential();
        self
    }

    /// Set page selection.
    pub fn with_pages(mut self, pages: PageSelection) -> Self {
        self.options = self.options.with_pages(pages);
        self
    }

    /// Keep "Page N of M" footer lines.
    pub fn keep_page_footers(mut self) -> Self {
        self.options = self.options.with_page_footers(true);
        self
    }

    /// The options this builder has accumulated.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse a PDF file.
    pub fn parse<P: AsRef<Path>>(&self, path: P) -> Result<ParseResult> {
        parse_file_with_options(path, &self.options)
    }

    /// Parse a PDF from bytes.
    pub fn parse_bytes(&self, data: &[u8]) -> Result<ParseResult> {
        parse_bytes_with_options(data, &self.options)
    }

    /// Parse several documents.
    pub fn parse_batch<D: AsRef<[u8]> + Sync>(&self, documents: &[D]) -> Vec<Result<ParseResult>> {
        parse_batch(documents, &self.options)
    }

    /// Outline already-extracted elements with this builder's settings.
    pub fn outline(&self, elements: Vec<TextElement>) -> ParseResult {
        outline_elements(elements, &self.options.outline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let builder = PdfSections::new()
            .with_raw_text()
            .preamble(PreamblePolicy::PromoteFirst)
            .joined()
            .lenient()
            .sequential();

        let options = builder.options();
        assert!(options.outline.include_raw_text);
        assert_eq!(options.outline.preamble, PreamblePolicy::PromoteFirst);
        assert_eq!(options.outline.content_mode, ContentMode::Joined);
        assert_eq!(options.error_mode, ErrorMode::Lenient);
        assert!(!options.parallel);
    }

    #[test]
    fn test_builder_default() {
        let builder = PdfSections::default();
        assert!(!builder.options().outline.include_raw_text);
        assert_eq!(builder.options().pages, PageSelection::All);
    }

    #[test]
    fn test_builder_outline() {
        let elements = vec![
            TextElement::new("Jane Doe", 11.0, Position::new(1, 760.0, 72.0), 0),
            TextElement::new("SKILLS", 11.0, Position::new(1, 700.0, 72.0), 1),
        ];
        let result = PdfSections::new()
            .preamble(PreamblePolicy::Drop)
            .outline(elements);
        assert_eq!(result.flatten(), vec![(1, "SKILLS")]);
    }

    // ==================== Edge Case Tests ====================

    #[test]
    fn test_parse_bytes_empty_data() {
        let result = parse_bytes(&[]);
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_parse_bytes_unknown_magic() {
        let data = [0xFF, 0xFE, 0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07];
        let err = parse_bytes(&data).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_parse_bytes_truncated_pdf() {
        assert!(parse_bytes(b"%PDF-1.4\n1 0 obj\n<<").is_err());
    }

    #[test]
    fn test_parse_reader_propagates_detection_error() {
        let result = parse_reader(std::io::Cursor::new(b"<html></html>".to_vec()));
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_parse_file_missing() {
        let err = parse_file("/nonexistent/resume.pdf").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.kind(), ErrorKind::ExtractionFailure);
    }

    #[test]
    fn test_parse_batch_keeps_order() {
        let docs: Vec<&[u8]> = vec![&b"not a pdf"[..], &b"%PDF-x.y"[..], &b""[..]];
        for options in [ParseOptions::default(), ParseOptions::default().sequential()] {
            let results = parse_batch(&docs, &options);
            assert_eq!(results.len(), 3);
            assert!(matches!(results[0], Err(Error::UnknownFormat)));
            assert!(matches!(results[1], Err(Error::UnsupportedVersion(_))));
            assert!(matches!(results[2], Err(Error::UnknownFormat)));
        }
    }
}
