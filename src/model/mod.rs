//! Data model shared by extraction and outline inference.
//!
//! Text elements flow in from a [`TextElementSource`](crate::extract::TextElementSource),
//! pick up a [`Role`] during classification, and leave as a [`ParseResult`]
//! of depth-1 sections holding depth-2 content.

mod element;
mod outline;

pub use element::{ClassifiedElement, Position, Role, TextElement};
pub use outline::{ContentNode, ParseResponse, ParseResult, SectionNode};
