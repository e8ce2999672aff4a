// crates/infra/src/extraction.rs
use std::path::Path;

use sales_summary_ports::extraction::RecordExtractor;
use serde_json::{Map, Value};

use crate::persistence::FileReader;

const TOTAL_FIELD: &str = "Total";
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Reads `{ "Total": <number> }` documents. Any failure counts as zero.
///
/// Parsing is strict JSON: comments, trailing commas and unquoted member
/// names make the document unreadable.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonTotalExtractor;

impl JsonTotalExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Parse the `Total` member out of a JSON document, if there is a usable one.
    pub fn parse_total(contents: &[u8]) -> Option<f64> {
        let contents = contents.strip_prefix(UTF8_BOM).unwrap_or(contents);
        let document: Value = serde_json::from_slice(contents).ok()?;
        let field = total_field(document.as_object()?)?;
        numeric_value(field)
    }
}

impl RecordExtractor for JsonTotalExtractor {
    fn extract_total(&self, path: &Path) -> f64 {
        FileReader::read_to_end(path)
            .ok()
            .and_then(|bytes| Self::parse_total(&bytes))
            .unwrap_or(0.0)
    }
}

// Exact name wins; otherwise the first case-insensitive match.
fn total_field(object: &Map<String, Value>) -> Option<&Value> {
    object.get(TOTAL_FIELD).or_else(|| {
        object
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(TOTAL_FIELD))
            .map(|(_, value)| value)
    })
}

fn numeric_value(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    number.is_finite().then_some(number)
}
