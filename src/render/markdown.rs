//! Markdown rendering of parse results.

use crate::model::ParseResult;

/// Render each section as a level-2 heading followed by its content
/// paragraphs.
pub fn to_markdown(result: &ParseResult) -> String {
    let mut output = String::new();

    for section in &result.data {
        output.push_str("## ");
        output.push_str(&escape_markdown(&section.text));
        output.push_str("\n\n");

        for node in &section.content {
            output.push_str(&escape_markdown(&node.text));
            output.push_str("\n\n");
        }
    }

    output
}

fn escape_markdown(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' | '`' | '*' | '_' | '[' | ']' | '|' => {
                result.push('\\');
                result.push(c);
            }
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SectionNode;

    #[test]
    fn test_escape_markdown() {
        assert_eq!(escape_markdown("C++ *and* [Rust]"), "C++ \\*and\\* \\[Rust\\]");
        assert_eq!(escape_markdown("snake_case"), "snake\\_case");
    }

    #[test]
    fn test_render_sections() {
        let result = ParseResult {
            raw_text: None,
            data: vec![
                SectionNode::new("EDUCATION").with_content("BSc Physics"),
                SectionNode::new("SKILLS"),
            ],
        };
        assert_eq!(
            to_markdown(&result),
            "## EDUCATION\n\nBSc Physics\n\n## SKILLS\n\n"
        );
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(to_markdown(&ParseResult::default()), "");
    }
}
