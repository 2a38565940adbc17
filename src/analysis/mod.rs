//! Layout-to-structure inference.
//!
//! Turns a reading-ordered sequence of [`TextElement`]s into a two-level
//! outline in four passes:
//!
//! 1. [`FontProfile::compute`] measures the document's average font size.
//! 2. [`HeaderRules::classify`] tags every element as header or content.
//! 3. [`SectionGrouper::group`] splits the stream into header/content runs.
//! 4. [`StructureBuilder::build`] assembles the runs into sections.
//!
//! The passes share no state beyond the values handed from one to the next,
//! so independent documents can be processed concurrently.

mod build;
mod classify;
mod group;
mod profile;

pub use build::{ContentMode, StructureBuilder, DEFAULT_PREAMBLE_TITLE};
pub use classify::{classify_all, is_uppercase_text, word_count, HeaderRules};
pub use group::{PreamblePolicy, Run, SectionGrouper};
pub use profile::FontProfile;

use serde::{Deserialize, Serialize};

use crate::model::{ParseResult, TextElement};

/// Settings for outline inference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlineConfig {
    /// Header detection thresholds
    pub rules: HeaderRules,
    /// Handling of content before the first header
    pub preamble: PreamblePolicy,
    /// Title of the collected preamble section
    pub preamble_title: String,
    /// How content elements become content nodes
    pub content_mode: ContentMode,
    /// Attach the flat reading-order text to the result
    pub include_raw_text: bool,
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            rules: HeaderRules::default(),
            preamble: PreamblePolicy::default(),
            preamble_title: DEFAULT_PREAMBLE_TITLE.to_string(),
            content_mode: ContentMode::default(),
            include_raw_text: false,
        }
    }
}

impl OutlineConfig {
    /// Create a config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the header rules.
    pub fn with_rules(mut self, rules: HeaderRules) -> Self {
        self.rules = rules;
        self
    }

    /// Set the preamble policy.
    pub fn with_preamble(mut self, policy: PreamblePolicy) -> Self {
        self.preamble = policy;
        self
    }

    /// Set the preamble section title.
    pub fn with_preamble_title(mut self, title: impl Into<String>) -> Self {
        self.preamble_title = title.into();
        self
    }

    /// Set the content mode.
    pub fn with_content_mode(mut self, mode: ContentMode) -> Self {
        self.content_mode = mode;
        self
    }

    /// Enable or disable the raw text view.
    pub fn with_raw_text(mut self, include: bool) -> Self {
        self.include_raw_text = include;
        self
    }

    fn builder(&self) -> StructureBuilder {
        StructureBuilder::new()
            .with_preamble_title(self.preamble_title.clone())
            .with_content_mode(self.content_mode)
    }
}

/// Infer the section outline of already-extracted elements.
///
/// Elements are put in `order_index` order first (stable, so ties keep
/// input order). Never fails; no elements means an empty result.
///
/// # Example
///
/// ```
/// use pdfsections::{outline_elements, OutlineConfig, Position, TextElement};
///
/// let elements = vec![
///     TextElement::new("EDUCATION", 11.0, Position::new(1, 700.0, 72.0), 0),
///     TextElement::new("BSc Physics, 2015", 11.0, Position::new(1, 686.0, 72.0), 1),
/// ];
/// let result = outline_elements(elements, &OutlineConfig::default());
/// assert_eq!(result.data[0].text, "EDUCATION");
/// assert_eq!(result.data[0].content[0].text, "BSc Physics, 2015");
/// ```
pub fn outline_elements(mut elements: Vec<TextElement>, config: &OutlineConfig) -> ParseResult {
    elements.sort_by_key(|e| e.order_index);

    let raw_text = config
        .include_raw_text
        .then(|| elements.iter().map(|e| e.text.clone()).collect());

    let profile = FontProfile::compute(&elements);
    let classified = classify_all(elements, &profile, &config.rules);
    let headers = classified.iter().filter(|c| c.role.is_header()).count();

    let runs = SectionGrouper::new(config.preamble).group(classified);
    let result = config.builder().build(runs, raw_text);

    log::debug!(
        "Outlined {} elements (avg font {:.2}pt, {} headers) into {} sections",
        profile.sample_count,
        profile.average_font_size,
        headers,
        result.section_count()
    );

    result
}
