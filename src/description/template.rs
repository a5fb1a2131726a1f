//! `{field}` placeholder substitution.

use crate::catalogue::{domain::ProductRecord, services::MISSING_TEMPLATE_SENTINEL};
use serde_json::{Map, Value};

/// Fills `{field}` placeholders in `template` from `record`.
///
/// Only string-valued fields are substituted; other placeholders are left as
/// written. Returns an empty string for an empty template or for
/// [`MISSING_TEMPLATE_SENTINEL`].
#[must_use]
pub fn apply_template(template: &str, record: &ProductRecord) -> String {
    apply_template_fields(template, record.as_map())
}

/// Fills `{field}` placeholders in `template` from a raw JSON object.
///
/// Substitution is a single left-to-right pass: inserted values are never
/// scanned for further placeholders.
#[must_use]
pub fn apply_template_fields(template: &str, fields: &Map<String, Value>) -> String {
    if template.is_empty() || template == MISSING_TEMPLATE_SENTINEL {
        return String::new();
    }

    let mut output = String::with_capacity(template.len());
    let mut remaining = template;
    while let Some((before, after_open)) = remaining.split_once('{') {
        output.push_str(before);
        match after_open.split_once('}') {
            Some((name, after_close)) if !name.contains('{') => {
                match fields.get(name).and_then(Value::as_str) {
                    Some(value) => output.push_str(value),
                    None => {
                        output.push('{');
                        output.push_str(name);
                        output.push('}');
                    }
                }
                remaining = after_close;
            }
            _ => {
                output.push('{');
                remaining = after_open;
            }
        }
    }
    output.push_str(remaining);
    output
}
