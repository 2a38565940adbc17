//! The nested section outline returned to callers.

use serde::{Deserialize, Serialize};

/// A body line belonging to a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentNode {
    /// Always 2
    pub depth: u8,
    /// Content text
    pub text: String,
}

impl ContentNode {
    /// Depth of every content node.
    pub const DEPTH: u8 = 2;

    /// Create a content node.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            depth: Self::DEPTH,
            text: text.into(),
        }
    }
}

/// A section header and the content that follows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionNode {
    /// Always 1
    pub depth: u8,
    /// Header text (or the preamble title)
    pub text: String,
    /// Content in reading order
    #[serde(default)]
    pub content: Vec<ContentNode>,
}

impl SectionNode {
    /// Depth of every section node.
    pub const DEPTH: u8 = 1;

    /// Create a section with no content.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            depth: Self::DEPTH,
            text: text.into(),
            content: Vec::new(),
        }
    }

    /// Append a content node.
    pub fn push(&mut self, text: impl Into<String>) {
        self.content.push(ContentNode::new(text));
    }

    /// Builder-style variant of [`push`](Self::push).
    pub fn with_content(mut self, text: impl Into<String>) -> Self {
        self.push(text);
        self
    }
}

/// The outcome of parsing one document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParseResult {
    /// Per-element text in reading order, when requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_text: Option<Vec<String>>,
    /// Sections in reading order
    pub data: Vec<SectionNode>,
}

impl ParseResult {
    /// An empty result, with an empty raw text view if one was requested.
    pub fn empty(include_raw_text: bool) -> Self {
        Self {
            raw_text: include_raw_text.then(Vec::new),
            data: Vec::new(),
        }
    }

    /// Number of sections.
    pub fn section_count(&self) -> usize {
        self.data.len()
    }

    /// Number of content nodes across all sections.
    pub fn content_count(&self) -> usize {
        self.data.iter().map(|s| s.content.len()).sum()
    }

    /// Check if no sections were produced.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Find the first section whose header matches `title` (case-insensitive).
    pub fn section(&self, title: &str) -> Option<&SectionNode> {
        self.data
            .iter()
            .find(|s| s.text.eq_ignore_ascii_case(title.trim()))
    }

    /// Walk the outline as `(depth, text)` pairs: each header, then its content.
    pub fn flatten(&self) -> Vec<(u8, &str)> {
        let mut out = Vec::with_capacity(self.section_count() + self.content_count());
        for section in &self.data {
            out.push((section.depth, section.text.as_str()));
            for node in &section.content {
                out.push((node.depth, node.text.as_str()));
            }
        }
        out
    }

    /// Wrap in the `{"result": ...}` response envelope.
    pub fn into_response(self) -> ParseResponse {
        ParseResponse { result: self }
    }
}

/// Response envelope: `{"result": {"raw_text": [...], "data": [...]}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseResponse {
    /// The parse result
    pub result: ParseResult,
}
