//! Header/content classification.
//!
//! A line is a header when it is written entirely in capitals, or when it is
//! noticeably larger than the document average, short, and not sentence-like.
//! The thresholds live in [`HeaderRules`] so callers can tune them and tests
//! can probe the boundaries directly.

use serde::{Deserialize, Serialize};

use super::profile::FontProfile;
use crate::model::{ClassifiedElement, Role, TextElement};

/// Tunable header detection rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderRules {
    /// Points above the average font size at which text counts as large (inclusive)
    pub size_delta: f32,
    /// Maximum word count for a large-font header
    pub max_words: usize,
    /// Trailing characters that mark text as a sentence rather than a title
    pub terminal_punctuation: Vec<char>,
    /// Whether all-caps text is a header regardless of size
    pub uppercase_rule: bool,
}

impl Default for HeaderRules {
    fn default() -> Self {
        Self {
            size_delta: 0.7,
            max_words: 2,
            terminal_punctuation: vec!['.', ','],
            uppercase_rule: true,
        }
    }
}

impl HeaderRules {
    /// Create rules with the default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the size threshold above the average.
    pub fn with_size_delta(mut self, delta: f32) -> Self {
        self.size_delta = delta;
        self
    }

    /// Set the word-count cutoff.
    pub fn with_max_words(mut self, max_words: usize) -> Self {
        self.max_words = max_words;
        self
    }

    /// Set the disqualifying trailing characters.
    pub fn with_terminal_punctuation(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.terminal_punctuation = chars.into_iter().collect();
        self
    }

    /// Enable or disable the all-caps rule.
    pub fn with_uppercase_rule(mut self, enabled: bool) -> Self {
        self.uppercase_rule = enabled;
        self
    }

    /// Decide whether `text` at `font_size` is a header in a document whose
    /// average font size is `average`.
    pub fn is_header(&self, text: &str, font_size: f32, average: f32) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }

        if self.uppercase_rule && is_uppercase_text(text) {
            return true;
        }

        let is_large = font_size >= average + self.size_delta;
        let is_short = word_count(text) <= self.max_words;
        let no_terminal_punct = !text
            .chars()
            .next_back()
            .is_some_and(|c| self.terminal_punctuation.contains(&c));

        is_large && is_short && no_terminal_punct
    }

    /// Classify one element against the document profile.
    pub fn classify(&self, element: &TextElement, profile: &FontProfile) -> Role {
        if self.is_header(&element.text, element.font_size, profile.average_font_size) {
            Role::Header
        } else {
            Role::Content
        }
    }
}

/// Tag every element with its role, keeping input order.
pub fn classify_all(
    elements: Vec<TextElement>,
    profile: &FontProfile,
    rules: &HeaderRules,
) -> Vec<ClassifiedElement> {
    elements
        .into_iter()
        .map(|element| {
            let role = rules.classify(&element, profile);
            ClassifiedElement::new(element, role)
        })
        .collect()
}

/// True when every letter is uppercase and there is at least one letter.
pub fn is_uppercase_text(text: &str) -> bool {
    let mut letters = text.chars().filter(|c| c.is_alphabetic()).peekable();
    letters.peek().is_some() && letters.all(char::is_uppercase)
}

/// Number of whitespace-delimited tokens.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
