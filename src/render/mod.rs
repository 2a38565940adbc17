//! Rendering of parse results to output formats.

mod json;
mod markdown;

pub use json::{to_json, JsonFormat};
pub use markdown::to_markdown;
