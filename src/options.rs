//! Parsing options and configuration.

use std::ops::RangeInclusive;

use crate::analysis::{ContentMode, HeaderRules, OutlineConfig, PreamblePolicy};
use crate::error::{Error, Result};

/// Options for parsing a PDF into sections.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Outline inference settings
    pub outline: OutlineConfig,

    /// Error handling mode for page-level extraction failures
    pub error_mode: ErrorMode,

    /// Which pages to extract text from
    pub pages: PageSelection,

    /// Keep "Page N of M" footer lines instead of filtering them out
    pub keep_page_footers: bool,

    /// Whether batch parsing may use multiple threads
    pub parallel: bool,

    /// Treat a document with no extractable text as invalid input
    pub require_text: bool,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the outline configuration.
    pub fn with_outline(mut self, outline: OutlineConfig) -> Self {
        self.outline = outline;
        self
    }

    /// Attach the raw reading-order text to the result.
    pub fn with_raw_text(mut self, include: bool) -> Self {
        self.outline.include_raw_text = include;
        self
    }

    /// Set the preamble policy.
    pub fn with_preamble(mut self, policy: PreamblePolicy) -> Self {
        self.outline.preamble = policy;
        self
    }

    /// Set the header rules.
    pub fn with_rules(mut self, rules: HeaderRules) -> Self {
        self.outline.rules = rules;
        self
    }

    /// Set the content mode.
    pub fn with_content_mode(mut self, mode: ContentMode) -> Self {
        self.outline.content_mode = mode;
        self
    }

    /// Set error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Enable lenient mode (skip pages whose content cannot be read).
    pub fn lenient(mut self) -> Self {
        self.error_mode = ErrorMode::Lenient;
        self
    }

    /// Set page selection.
    pub fn with_pages(mut self, pages: PageSelection) -> Self {
        self.pages = pages;
        self
    }

    /// Keep or drop page footers.
    pub fn with_page_footers(mut self, keep: bool) -> Self {
        self.keep_page_footers = keep;
        self
    }

    /// Enable or disable parallel batch processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Allow documents without text to produce an empty result.
    pub fn allow_empty(mut self) -> Self {
        self.require_text = false;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            outline: OutlineConfig::default(),
            error_mode: ErrorMode::Strict,
            pages: PageSelection::All,
            keep_page_footers: false,
            parallel: true,
            require_text: true,
        }
    }
}

/// Error handling mode during extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Fail on any page error
    #[default]
    Strict,
    /// Skip unreadable pages and continue
    Lenient,
}

/// Page selection (1-indexed).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PageSelection {
    /// All pages
    #[default]
    All,
    /// A range of pages (inclusive)
    Range(RangeInclusive<u32>),
    /// Specific pages
    Pages(Vec<u32>),
    /// Sorted, non-overlapping ranges (from a list such as "1,3,5-7")
    Ranges(Vec<RangeInclusive<u32>>),
}

impl PageSelection {
    /// Check if a page number should be included.
    pub fn includes(&self, page: u32) -> bool {
        match self {
            PageSelection::All => true,
            PageSelection::Range(range) => range.contains(&page),
            PageSelection::Pages(pages) => pages.contains(&page),
            PageSelection::Ranges(ranges) => ranges.iter().any(|r| r.contains(&page)),
        }
    }

    /// The first selected page beyond `page_count`, if any.
    pub fn first_beyond(&self, page_count: u32) -> Option<u32> {
        let first_missing = page_count.saturating_add(1);
        let past_end = |range: &RangeInclusive<u32>| {
            (*range.end() > page_count).then(|| (*range.start()).max(first_missing))
        };

        match self {
            PageSelection::All => None,
            PageSelection::Range(range) => past_end(range),
            PageSelection::Pages(pages) => pages.iter().copied().filter(|&p| p > page_count).min(),
            PageSelection::Ranges(ranges) => ranges.iter().find_map(past_end),
        }
    }

    /// Parse a page selection string (e.g., "all", "1-10", "1,3,5-7").
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();

        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            return Ok(PageSelection::All);
        }

        if !s.contains(',') {
            if let Some((start, end)) = s.split_once('-') {
                let (start, end) = (parse_page(start, s)?, parse_page(end, s)?);
                if start > end {
                    return Err(Error::InvalidPageRange(s.to_string()));
                }
                return Ok(PageSelection::Range(start..=end));
            }
        }

        let mut ranges = Vec::new();
        for part in s.split(',') {
            let (start, end) = match part.split_once('-') {
                Some((start, end)) => (parse_page(start, s)?, parse_page(end, s)?),
                None => {
                    let page = parse_page(part, s)?;
                    (page, page)
                }
            };
            if start > end {
                return Err(Error::InvalidPageRange(s.to_string()));
            }
            ranges.push(start..=end);
        }

        ranges.sort_by_key(|r| *r.start());
        let mut merged: Vec<RangeInclusive<u32>> = Vec::with_capacity(ranges.len());
        for range in ranges {
            match merged.last_mut() {
                Some(last) if *range.start() <= (*last.end()).saturating_add(1) => {
                    let end = (*last.end()).max(*range.end());
                    *last = *last.start()..=end;
                }
                _ => merged.push(range),
            }
        }
        Ok(PageSelection::Ranges(merged))
    }
}

fn parse_page(part: &str, whole: &str) -> Result<u32> {
    match part.trim().parse::<u32>() {
        Ok(0) | Err(_) => Err(Error::InvalidPageRange(whole.to_string())),
        Ok(page) => Ok(page),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_options_builder() {
        let options = ParseOptions::new()
            .lenient()
            .with_raw_text(true)
            .with_preamble(PreamblePolicy::Drop)
            .sequential()
            .allow_empty();

        assert_eq!(options.error_mode, ErrorMode::Lenient);
        assert!(options.outline.include_raw_text);
        assert_eq!(options.outline.preamble, PreamblePolicy::Drop);
        assert!(!options.parallel);
        assert!(!options.require_text);
    }

    #[test]
    fn test_default_options() {
        let options = ParseOptions::default();
        assert_eq!(options.error_mode, ErrorMode::Strict);
        assert!(options.parallel);
        assert!(options.require_text);
        assert!(!options.keep_page_footers);
        assert!(!options.outline.include_raw_text);
    }

    #[test]
    fn test_page_selection_includes() {
        let range = PageSelection::Range(5..=10);
        assert!(!range.includes(4));
        assert!(range.includes(5));
        assert!(range.includes(10));
        assert!(!range.includes(11));

        let pages = PageSelection::Pages(vec![1, 3]);
        assert!(pages.includes(3));
        assert!(!pages.includes(2));

        let ranges = PageSelection::Ranges(vec![1..=2, 6..=8]);
        assert!(ranges.includes(2));
        assert!(!ranges.includes(5));
        assert!(ranges.includes(8));
        assert!(PageSelection::All.includes(999));
    }

    #[test]
    fn test_page_selection_parse() {
        assert_eq!(PageSelection::parse("all").unwrap(), PageSelection::All);
        assert_eq!(PageSelection::parse("2-4").unwrap(), PageSelection::Range(2..=4));
        assert_eq!(
            PageSelection::parse("7, 1,3,5-6,3").unwrap(),
            PageSelection::Ranges(vec![1..=1, 3..=3, 5..=7])
        );
        assert_eq!(
            PageSelection::parse("4-9,2-5").unwrap(),
            PageSelection::Ranges(vec![2..=9])
        );
    }

    #[test]
    fn test_page_selection_parse_huge_list_range() {
        let selection = PageSelection::parse("1,1-4294967295").unwrap();
        assert_eq!(selection, PageSelection::Ranges(vec![1..=u32::MAX]));
        assert!(selection.includes(u32::MAX));

        match PageSelection::parse("10-50000000,3").unwrap() {
            PageSelection::Ranges(ranges) => assert_eq!(ranges.len(), 2),
            other => panic!("expected ranges, got {:?}", other),
        }
    }

    #[test]
    fn test_first_beyond() {
        assert_eq!(PageSelection::All.first_beyond(3), None);
        assert_eq!(PageSelection::Range(1..=3).first_beyond(3), None);
        assert_eq!(PageSelection::Range(2..=9).first_beyond(3), Some(4));
        assert_eq!(PageSelection::Range(7..=9).first_beyond(3), Some(7));
        assert_eq!(PageSelection::Pages(vec![9, 2, 5]).first_beyond(3), Some(5));
        assert_eq!(
            PageSelection::Ranges(vec![1..=2, 3..=u32::MAX]).first_beyond(3),
            Some(4)
        );
    }

    #[test]
    fn test_page_selection_parse_errors() {
        assert!(matches!(
            PageSelection::parse("abc"),
            Err(Error::InvalidPageRange(_))
        ));
        assert!(PageSelection::parse("5-2").is_err());
        assert!(PageSelection::parse("0").is_err());
        assert!(PageSelection::parse("1,,2").is_err());
    }
}
