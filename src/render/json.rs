//! JSON dump of recorded paragraphs.

use crate::error::{Error, Result};
use crate::model::Paragraph;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Serialize paragraphs, with their formats and run styles, to JSON.
pub fn to_json(paragraphs: &[Paragraph], format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(paragraphs),
        JsonFormat::Compact => serde_json::to_string(paragraphs),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}
