//! Coerce loosely typed attribute values into numbers.
//!
//! Source datasets mix JSON numbers, numeric strings with thousands
//! separators (`"1,234"`), `null`, and absent keys. Every helper here is
//! total: nothing panics and nothing returns an error.
//!
//! # Examples
//! ```
//! use serde_json::json;
//! use regionrank_core::value::{parse_number, parse_present};
//!
//! assert_eq!(parse_number(Some(&json!("12,500"))), 12_500.0);
//! assert_eq!(parse_number(Some(&json!(null))), 0.0);
//! assert_eq!(parse_number(None), 0.0);
//! assert_eq!(parse_present(Some(&json!("n/a"))), None);
//! ```

use serde_json::Value;

const GROUPING_SEPARATOR: char = ',';

/// Parse a raw attribute, falling back to `0.0` when it carries no number.
#[must_use]
pub fn parse_number(raw: Option<&Value>) -> f64 {
    parse_present(raw).unwrap_or(0.0)
}

/// Parse a raw attribute, returning `None` when it carries no finite number.
///
/// Absent keys, `null`, booleans, containers, unparseable text, and
/// non-finite results are all treated as missing.
#[must_use]
pub fn parse_present(raw: Option<&Value>) -> Option<f64> {
    let parsed = match raw? {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => parse_text(text),
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
    };
    parsed.filter(|value| value.is_finite())
}

fn parse_text(text: &str) -> Option<f64> {
    let cleaned: String = text
        .trim()
        .chars()
        .filter(|ch| *ch != GROUPING_SEPARATOR)
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok()
}
