//! Grouping of spans into visual lines.

use std::sync::OnceLock;

use regex::Regex;

use super::content::{is_spaceless_script_char, TextSpan};

/// Spans whose baselines differ by at most this fraction of the font size
/// share a line.
const Y_TOLERANCE: f32 = 0.3;

/// A horizontal gap wider than this fraction of a character inserts a space.
const GAP_THRESHOLD: f32 = 0.2;

/// A line of text assembled from one or more spans.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    /// Spans ordered left to right
    pub spans: Vec<TextSpan>,
    /// Baseline of the first span
    pub y: f32,
    /// Left edge of the leftmost span
    pub x: f32,
    /// Character-weighted font size
    pub font_size: f32,
}

impl TextLine {
    /// Create a line from spans, ordering them left to right.
    pub fn from_spans(mut spans: Vec<TextSpan>) -> Self {
        if spans.is_empty() {
            return Self {
                spans,
                y: 0.0,
                x: 0.0,
                font_size: 0.0,
            };
        }

        spans.sort_by(|a, b| a.x.total_cmp(&b.x));

        let total_chars: usize = spans.iter().map(TextSpan::char_count).sum();
        let weighted: f32 = spans
            .iter()
            .map(|s| s.font_size * s.char_count() as f32)
            .sum();
        let font_size = if total_chars > 0 {
            weighted / total_chars as f32
        } else {
            spans[0].font_size
        };

        Self {
            y: spans[0].y,
            x: spans[0].x,
            font_size,
            spans,
        }
    }

    /// Combined text, with spaces where spans are visibly apart.
    pub fn text(&self) -> String {
        let mut result = String::new();

        for (i, span) in self.spans.iter().enumerate() {
            if i > 0 && needs_separator(&self.spans[i - 1], span) {
                result.push(' ');
            }
            result.push_str(&span.text);
        }

        result
    }
}

fn needs_separator(prev: &TextSpan, curr: &TextSpan) -> bool {
    let gap = curr.x - (prev.x + prev.estimated_width());
    if gap <= curr.font_size * 0.5 * GAP_THRESHOLD {
        return false;
    }

    let prev_last = prev.text.chars().next_back();
    let curr_first = curr.text.chars().next();

    let both_spaceless = prev_last.is_some_and(is_spaceless_script_char)
        && curr_first.is_some_and(is_spaceless_script_char);
    let has_space = prev_last.is_some_and(char::is_whitespace)
        || curr_first.is_some_and(char::is_whitespace);

    !both_spaceless && !has_space
}

/// Group a page's spans into lines, top to bottom.
pub fn group_into_lines(mut spans: Vec<TextSpan>) -> Vec<TextLine> {
    // PDF y grows upwards
    spans.sort_by(|a, b| b.y.total_cmp(&a.y).then(a.x.total_cmp(&b.x)));

    let mut lines = Vec::new();
    let mut current: Vec<TextSpan> = Vec::new();
    let mut current_y: Option<f32> = None;

    for span in spans {
        let tolerance = span.font_size * Y_TOLERANCE;
        match current_y {
            Some(y) if (span.y - y).abs() <= tolerance => current.push(span),
            _ => {
                if !current.is_empty() {
                    lines.push(TextLine::from_spans(std::mem::take(&mut current)));
                }
                current_y = Some(span.y);
                current.push(span);
            }
        }
    }

    if !current.is_empty() {
        lines.push(TextLine::from_spans(current));
    }

    lines
}

/// Whether `text` is a "Page N of M" footer.
pub fn is_page_footer(text: &str) -> bool {
    static FOOTER: OnceLock<Regex> = OnceLock::new();
    FOOTER
        .get_or_init(|| Regex::new(r"^Page \d+ of \d+$").unwrap())
        .is_match(text.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(text: &str, x: f32, y: f32, size: f32) -> TextSpan {
        TextSpan::new(text, x, y, size)
    }

    #[test]
    fn test_group_orders_top_to_bottom() {
        let lines = group_into_lines(vec![
            span("bottom", 72.0, 100.0, 10.0),
            span("top", 72.0, 700.0, 10.0),
            span("middle", 72.0, 400.0, 10.0),
        ]);
        let texts: Vec<String> = lines.iter().map(TextLine::text).collect();
        assert_eq!(texts, vec!["top", "middle", "bottom"]);
    }

    #[test]
    fn test_spans_within_tolerance_share_line() {
        let lines = group_into_lines(vec![
            span("Corp", 150.0, 501.0, 10.0),
            span("Acme", 72.0, 500.0, 10.0),
            span("next", 72.0, 480.0, 10.0),
        ]);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text(), "Acme Corp");
        assert_eq!(lines[0].x, 72.0);
    }

    #[test]
    fn test_adjacent_spans_not_separated() {
        // "Ac" at 10pt is estimated 10pt wide
        let line = TextLine::from_spans(vec![span("Ac", 0.0, 0.0, 10.0), span("me", 10.0, 0.0, 10.0)]);
        assert_eq!(line.text(), "Acme");
    }

    #[test]
    fn test_no_space_between_cjk_spans() {
        let line = TextLine::from_spans(vec![span("経歴", 0.0, 0.0, 10.0), span("概要", 40.0, 0.0, 10.0)]);
        assert_eq!(line.text(), "経歴概要");
    }

    #[test]
    fn test_weighted_font_size() {
        let line = TextLine::from_spans(vec![span("ab", 0.0, 0.0, 10.0), span("cdef", 50.0, 0.0, 16.0)]);
        assert_eq!(line.font_size, 14.0);
    }

    #[test]
    fn test_page_footer() {
        assert!(is_page_footer("Page 1 of 3"));
        assert!(is_page_footer("  Page 12 of 12 "));
        assert!(!is_page_footer("Page one of three"));
        assert!(!is_page_footer("See Page 1 of 3"));
    }
}
