//! Assembly of grouped runs into the two-level outline.

use serde::{Deserialize, Serialize};

use super::group::Run;
use crate::model::{ContentNode, ParseResult, SectionNode};

/// How a section's content elements become content nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentMode {
    /// One content node per element
    #[default]
    PerElement,
    /// All of a section's content joined with spaces into a single node
    Joined,
}

/// Default text for the headerless leading section.
pub const DEFAULT_PREAMBLE_TITLE: &str = "Preamble";

/// Turns runs into [`SectionNode`]s. Makes no classification decisions.
#[derive(Debug, Clone)]
pub struct StructureBuilder {
    preamble_title: String,
    content_mode: ContentMode,
}

impl Default for StructureBuilder {
    fn default() -> Self {
        Self {
            preamble_title: DEFAULT_PREAMBLE_TITLE.to_string(),
            content_mode: ContentMode::PerElement,
        }
    }
}

impl StructureBuilder {
    /// Create a builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text used for a run without a header.
    pub fn with_preamble_title(mut self, title: impl Into<String>) -> Self {
        self.preamble_title = title.into();
        self
    }

    /// Set the content mode.
    pub fn with_content_mode(mut self, mode: ContentMode) -> Self {
        self.content_mode = mode;
        self
    }

    /// Build the result. `raw_text` is attached unchanged when present.
    pub fn build(&self, runs: Vec<Run>, raw_text: Option<Vec<String>>) -> ParseResult {
        let data = runs.into_iter().map(|run| self.section(run)).collect();
        ParseResult { raw_text, data }
    }

    fn section(&self, run: Run) -> SectionNode {
        let title = match &run.header {
            Some(header) => header.text().to_string(),
            None => self.preamble_title.clone(),
        };
        let mut section = SectionNode::new(title);

        match self.content_mode {
            ContentMode::PerElement => {
                section.content = run
                    .content
                    .iter()
                    .map(|item| ContentNode::new(item.text()))
                    .collect();
            }
            ContentMode::Joined => {
                let joined = run
                    .content
                    .iter()
                    .map(|item| item.text())
                    .filter(|text| !text.is_empty())
                    .collect::<Vec<_>>()
                    .join(" ");
                if !joined.is_empty() {
                    section.push(joined);
                }
            }
        }

        section
    }
}
