//! Text element extraction from PDF documents.
//!
//! Pages are read through a [`PdfBackend`], their content streams
//! interpreted into spans, and the spans grouped into lines. Each surviving
//! line becomes one [`TextElement`], numbered in document reading order:
//! pages ascending, then top to bottom, then left to right.

pub mod backend;
pub mod content;
pub mod lines;

pub use backend::{decode_text_simple, ContentOp, LopdfBackend, PageId, PdfBackend, PdfValue};
pub use content::TextSpan;
pub use lines::{group_into_lines, is_page_footer, TextLine};

use crate::error::{Error, Result};
use crate::model::{Position, TextElement};
use crate::options::{ErrorMode, PageSelection, ParseOptions};

/// Load a PDF and extract its text elements in reading order.
pub fn extract_elements(data: &[u8], options: &ParseOptions) -> Result<Vec<TextElement>> {
    PdfTextSource::from_bytes(data, options)?.elements()
}

/// Anything that can supply text elements for outline inference.
pub trait TextElementSource {
    /// All elements, with `order_index` set.
    fn elements(&self) -> Result<Vec<TextElement>>;
}

impl TextElementSource for [TextElement] {
    fn elements(&self) -> Result<Vec<TextElement>> {
        Ok(self.to_vec())
    }
}

impl TextElementSource for Vec<TextElement> {
    fn elements(&self) -> Result<Vec<TextElement>> {
        Ok(self.clone())
    }
}

/// Extracts text elements from a PDF.
pub struct PdfTextSource<B: PdfBackend = LopdfBackend> {
    backend: B,
    pages: PageSelection,
    error_mode: ErrorMode,
    keep_page_footers: bool,
}

impl PdfTextSource<LopdfBackend> {
    /// Load a PDF from memory.
    pub fn from_bytes(data: &[u8], options: &ParseOptions) -> Result<Self> {
        let backend = LopdfBackend::load_bytes(data)?;
        log::debug!(
            "Loaded PDF {} with {} pages",
            backend.version(),
            backend.page_count()
        );
        Ok(Self::new(backend, options))
    }
}

impl<B: PdfBackend> PdfTextSource<B> {
    /// Wrap a backend with the extraction settings from `options`.
    pub fn new(backend: B, options: &ParseOptions) -> Self {
        Self {
            backend,
            pages: options.pages.clone(),
            error_mode: options.error_mode,
            keep_page_footers: options.keep_page_footers,
        }
    }

    /// The underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Lines of a single page, footers removed unless kept.
    pub fn page_lines(&self, page_id: PageId) -> Result<Vec<TextLine>> {
        let spans = content::page_spans(&self.backend, page_id)?;
        let mut lines = group_into_lines(spans);
        if !self.keep_page_footers {
            lines.retain(|line| !is_page_footer(&line.text()));
        }
        Ok(lines)
    }

    fn check_selection(&self, page_count: u32) -> Result<()> {
        match self.pages.first_beyond(page_count) {
            Some(page) if self.error_mode == ErrorMode::Strict => {
                Err(Error::PageOutOfRange(page, page_count))
            }
            Some(page) => {
                log::warn!("Page {} requested but document has {}", page, page_count);
                Ok(())
            }
            None => Ok(()),
        }
    }
}

impl<B: PdfBackend> TextElementSource for PdfTextSource<B> {
    fn elements(&self) -> Result<Vec<TextElement>> {
        let pages = self.backend.pages();
        self.check_selection(pages.len() as u32)?;

        let mut elements = Vec::new();

        for (&page_num, &page_id) in pages.iter().filter(|(n, _)| self.pages.includes(**n)) {
            let lines = match self.page_lines(page_id) {
                Ok(lines) => lines,
                Err(e) if self.error_mode == ErrorMode::Strict => {
                    return Err(Error::ExtractionFailure(format!("page {}: {}", page_num, e)));
                }
                Err(e) => {
                    log::warn!("Failed to extract text from page {}: {}", page_num, e);
                    continue;
                }
            };

            for line in lines {
                let text = line.text();
                let text = text.trim();
                if text.is_empty() {
                    continue;
                }
                let position = Position::new(page_num, line.y, line.x);
                let order_index = elements.len();
                elements.push(TextElement::new(text, line.font_size, position, order_index));
            }
        }

        log::debug!("Extracted {} text elements", elements.len());
        Ok(elements)
    }
}
