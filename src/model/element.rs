//! Positioned text elements and their classification.

use serde::{Deserialize, Serialize};

/// Where a text element sits on its page.
///
/// Coordinates are PDF user space: `y` grows upward, so a larger `y` is
/// closer to the top of the page.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    /// Page number (1-indexed)
    pub page: u32,
    /// Baseline Y coordinate
    pub y: f32,
    /// Left edge X coordinate
    pub x: f32,
}

impl Position {
    /// Create a new position.
    pub fn new(page: u32, y: f32, x: f32) -> Self {
        Self { page, y, x }
    }
}

/// One discrete run of text with its font size and reading-order rank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextElement {
    /// The text content
    pub text: String,
    /// Font size in points
    pub font_size: f32,
    /// Location on the page
    pub position: Position,
    /// Global reading-order rank; strictly increasing across a document
    pub order_index: usize,
}

impl TextElement {
    /// Create a new text element.
    pub fn new(
        text: impl Into<String>,
        font_size: f32,
        position: Position,
        order_index: usize,
    ) -> Self {
        Self {
            text: text.into(),
            font_size,
            position,
            order_index,
        }
    }

    /// The text with surrounding whitespace removed.
    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }
}

/// Structural role assigned by the header classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Section title (depth 1)
    Header,
    /// Body material (depth 2)
    Content,
}

impl Role {
    /// Check if this is the header role.
    pub fn is_header(self) -> bool {
        self == Role::Header
    }
}

/// A text element tagged with its role.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedElement {
    /// The source element
    #[serde(flatten)]
    pub element: TextElement,
    /// Header or content
    pub role: Role,
}

impl ClassifiedElement {
    /// Tag an element with a role.
    pub fn new(element: TextElement, role: Role) -> Self {
        Self { element, role }
    }

    /// Reading-order rank of the underlying element.
    pub fn order_index(&self) -> usize {
        self.element.order_index
    }

    /// Trimmed text of the underlying element.
    pub fn text(&self) -> &str {
        self.element.trimmed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trimmed_keeps_inner_whitespace() {
        let el = TextElement::new("  Lead \t Role  ", 12.0, Position::default(), 0);
        assert_eq!(el.trimmed(), "Lead \t Role");
    }

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Header).unwrap(), "\"header\"");
        assert_eq!(serde_json::to_string(&Role::Content).unwrap(), "\"content\"");
    }

    #[test]
    fn test_classified_element_accessors() {
        let el = TextElement::new(" SKILLS ", 11.0, Position::new(1, 700.0, 72.0), 4);
        let classified = ClassifiedElement::new(el, Role::Header);
        assert_eq!(classified.order_index(), 4);
        assert_eq!(classified.text(), "SKILLS");
        assert!(classified.role.is_header());
    }
}
