//! Lenient parsing of product information text.

use serde_json::{Map, Value};

/// Parses product information given as a JSON object or as `key: value`
/// lines.
///
/// Text that is not a JSON object is read line by line; each line with a
/// `:` contributes one trimmed key and string value, split at the first
/// colon. Other lines are ignored.
#[must_use]
pub fn parse_product_info(text: &str) -> Map<String, Value> {
    if let Ok(fields) = serde_json::from_str::<Map<String, Value>>(text) {
        return fields;
    }

    text.trim()
        .lines()
        .filter_map(|line| line.split_once(':'))
        .map(|(key, value)| (key.trim().to_owned(), Value::from(value.trim())))
        .collect()
}
