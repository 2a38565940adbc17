//! JSON rendering of parse results.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::model::ParseResult;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

#[derive(Serialize)]
struct Envelope<'a> {
    result: &'a ParseResult,
}

/// Serialize a result inside the `{"result": ...}` envelope.
pub fn to_json(result: &ParseResult, format: JsonFormat) -> Result<String> {
    let envelope = Envelope { result };
    let json = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(&envelope),
        JsonFormat::Compact => serde_json::to_string(&envelope),
    };

    json.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ParseResponse, SectionNode};

    fn sample() -> ParseResult {
        ParseResult {
            raw_text: None,
            data: vec![SectionNode::new("EDUCATION").with_content("BSc Physics")],
        }
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&sample(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"result\""));
        assert!(json.contains("EDUCATION"));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&sample(), JsonFormat::Compact).unwrap();
        assert_eq!(
            json,
            r#"{"result":{"data":[{"depth":1,"text":"EDUCATION","content":[{"depth":2,"text":"BSc Physics"}]}]}}"#
        );
    }

    #[test]
    fn test_matches_response_envelope() {
        let json = to_json(&sample(), JsonFormat::Compact).unwrap();
        let parsed: ParseResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sample().into_response());
    }
}
