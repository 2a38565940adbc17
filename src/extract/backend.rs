//! PDF backend abstraction layer.
//!
//! The content-stream interpreter talks to a [`PdfBackend`] instead of a
//! concrete PDF library, so it can be driven by hand-built operations in
//! tests and the `lopdf` dependency stays behind one type.

use std::collections::BTreeMap;

use lopdf::{Document as LopdfDocument, Object};

use crate::error::{Error, Result};

/// Page identifier: (object number, generation number).
pub type PageId = (u32, u16);

/// A value from a PDF content stream operand.
#[derive(Debug, Clone, PartialEq)]
pub enum PdfValue {
    Integer(i64),
    Real(f32),
    Name(Vec<u8>),
    Str(Vec<u8>),
    Array(Vec<PdfValue>),
    Other,
}

impl PdfValue {
    /// Numeric value of an integer or real operand.
    pub fn as_number(&self) -> Option<f32> {
        match self {
            PdfValue::Integer(i) => Some(*i as f32),
            PdfValue::Real(r) => Some(*r),
            _ => None,
        }
    }
}

/// A single operation from a PDF content stream.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentOp {
    pub operator: String,
    pub operands: Vec<PdfValue>,
}

impl ContentOp {
    /// Create an operation.
    pub fn new(operator: impl Into<String>, operands: Vec<PdfValue>) -> Self {
        Self {
            operator: operator.into(),
            operands,
        }
    }

    /// Numeric operand at `idx`, or `default` if absent or non-numeric.
    pub fn number(&self, idx: usize, default: f32) -> f32 {
        self.operands
            .get(idx)
            .and_then(PdfValue::as_number)
            .unwrap_or(default)
    }
}

/// Read access to the parts of a PDF that text extraction needs.
pub trait PdfBackend {
    /// All pages as page number (1-indexed) to [`PageId`].
    fn pages(&self) -> BTreeMap<u32, PageId>;

    /// Decompressed, concatenated content stream bytes of a page.
    fn page_content(&self, page: PageId) -> Result<Vec<u8>>;

    /// Parse content stream bytes into operations.
    fn decode_content(&self, data: &[u8]) -> Result<Vec<ContentOp>>;

    /// Decode a string operand shown with font resource `font` on `page`.
    /// Falls back to [`decode_text_simple`] when no encoding is available.
    fn decode_text(&self, page: PageId, font: &[u8], bytes: &[u8]) -> String;

    /// Page content as operations.
    fn page_operations(&self, page: PageId) -> Result<Vec<ContentOp>> {
        let content = self.page_content(page)?;
        self.decode_content(&content)
    }
}

/// Simple text decoding fallback when no encoding is available.
pub fn decode_text_simple(bytes: &[u8]) -> String {
    if let [0xFE, 0xFF, rest @ ..] = bytes {
        let utf16: Vec<u16> = rest
            .chunks_exact(2)
            .map(|c| u16::from_be_bytes([c[0], c[1]]))
            .collect();
        return String::from_utf16_lossy(&utf16);
    }

    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        // Latin-1
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    }
}

/// [`PdfBackend`] backed by `lopdf::Document`.
pub struct LopdfBackend {
    doc: LopdfDocument,
}

impl LopdfBackend {
    /// Load from an in-memory byte slice.
    pub fn load_bytes(data: &[u8]) -> Result<Self> {
        let doc = LopdfDocument::load_mem(data)?;
        if doc.is_encrypted() {
            return Err(Error::Encrypted);
        }
        Ok(Self { doc })
    }

    /// Number of pages.
    pub fn page_count(&self) -> u32 {
        self.doc.get_pages().len() as u32
    }

    /// PDF version string.
    pub fn version(&self) -> String {
        self.doc.version.to_string()
    }
}

impl PdfBackend for LopdfBackend {
    fn pages(&self) -> BTreeMap<u32, PageId> {
        self.doc.get_pages()
    }

    fn page_content(&self, page_id: PageId) -> Result<Vec<u8>> {
        let page_dict = self
            .doc
            .get_dictionary(page_id)
            .map_err(|e| Error::ExtractionFailure(e.to_string()))?;

        // A page without /Contents is blank.
        let Ok(contents) = page_dict.get(b"Contents") else {
            return Ok(Vec::new());
        };

        let refs: Vec<&Object> = match contents {
            Object::Array(arr) => arr.iter().collect(),
            other => vec![other],
        };

        let mut content = Vec::new();
        for obj in refs {
            let stream = match obj {
                Object::Reference(r) => match self.doc.get_object(*r) {
                    Ok(Object::Stream(s)) => s,
                    _ => {
                        return Err(Error::ExtractionFailure(format!(
                            "content reference {} {} is not a stream",
                            r.0, r.1
                        )))
                    }
                },
                Object::Stream(s) => s,
                _ => return Err(Error::ExtractionFailure("invalid /Contents entry".into())),
            };
            let data = stream
                .decompressed_content()
                .unwrap_or_else(|_| stream.content.clone());
            content.extend_from_slice(&data);
            content.push(b'\n');
        }

        Ok(content)
    }

    fn decode_content(&self, data: &[u8]) -> Result<Vec<ContentOp>> {
        let content = lopdf::content::Content::decode(data)
            .map_err(|e| Error::ExtractionFailure(e.to_string()))?;

        Ok(content
            .operations
            .into_iter()
            .map(|op| ContentOp {
                operator: op.operator,
                operands: op.operands.iter().map(convert_object).collect(),
            })
            .collect())
    }

    fn decode_text(&self, page: PageId, font: &[u8], bytes: &[u8]) -> String {
        if let Ok(fonts) = self.doc.get_page_fonts(page) {
            if let Some(font_dict) = fonts.get(font) {
                if let Ok(enc) = font_dict.get_font_encoding(&self.doc) {
                    if let Ok(text) = LopdfDocument::decode_text(&enc, bytes) {
                        return text;
                    }
                }
            }
        }
        decode_text_simple(bytes)
    }
}

fn convert_object(obj: &Object) -> PdfValue {
    match obj {
        Object::Integer(i) => PdfValue::Integer(*i),
        Object::Real(r) => PdfValue::Real(*r),
        Object::Name(n) => PdfValue::Name(n.clone()),
        Object::String(b, _) => PdfValue::Str(b.clone()),
        Object::Array(arr) => PdfValue::Array(arr.iter().map(convert_object).collect()),
        _ => PdfValue::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_text_simple_utf8() {
        assert_eq!(decode_text_simple(b"Hello"), "Hello");
    }

    #[test]
    fn test_decode_text_simple_latin1() {
        // 0xE9 = 'é' in Latin-1
        assert_eq!(decode_text_simple(&[0x48, 0x65, 0x6C, 0x6C, 0xE9]), "Hellé");
    }

    #[test]
    fn test_decode_text_simple_utf16be() {
        assert_eq!(decode_text_simple(&[0xFE, 0xFF, 0x00, 0x48, 0x00, 0x69]), "Hi");
    }

    #[test]
    fn test_operand_numbers() {
        let op = ContentOp::new(
            "Td",
            vec![PdfValue::Integer(72), PdfValue::Real(-14.5), PdfValue::Other],
        );
        assert_eq!(op.number(0, 0.0), 72.0);
        assert_eq!(op.number(1, 0.0), -14.5);
        assert_eq!(op.number(2, 1.0), 1.0);
        assert_eq!(op.number(9, 3.0), 3.0);
    }

    #[test]
    fn test_load_rejects_garbage() {
        assert!(LopdfBackend::load_bytes(b"%PDF-1.4\nthis is not a pdf").is_err());
    }
}
