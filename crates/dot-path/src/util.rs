//! Path splitting and small value helpers shared by the accessors.

use serde_json::Value;

use crate::types::Path;
use crate::DELIMITER;

/// Split a dot-path into its segments.
///
/// A path without a delimiter comes back as a single segment, so `""` is one
/// empty segment and not the whole container.
pub fn split_path(path: &str) -> Path<'_> {
    if !path.contains(DELIMITER) {
        return vec![path];
    }
    path.split(DELIMITER).collect()
}

/// Check if a string is a canonical array index (no sign, no leading zero).
pub fn is_valid_index(index: &str) -> bool {
    if index.is_empty() {
        return false;
    }
    let bytes = index.as_bytes();
    if bytes.len() > 1 && bytes[0] == b'0' {
        return false;
    }
    bytes.iter().all(|&b| b.is_ascii_digit())
}

/// Parse a segment as an array index.
pub fn parse_index(segment: &str) -> Option<usize> {
    if !is_valid_index(segment) {
        return None;
    }
    segment.parse().ok()
}

/// Name of the JSON kind of a value, for error messages and logs.
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Render a value as a mapping key.
///
/// Floats are truncated toward zero, so `1.5` and `1` name the same key.
pub fn key_string(value: &Value) -> String {
    match value {
        Value::Null | Value::Bool(false) => String::new(),
        Value::Bool(true) => "1".to_string(),
        Value::String(s) => s.clone(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() => (f.trunc() as i64).to_string(),
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}
