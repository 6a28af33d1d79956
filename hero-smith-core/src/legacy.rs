//! Field access helpers for loosely typed legacy JSON records.
//!
//! Legacy files mix absent keys, nulls, empty strings and zeroes for "no
//! value"; all of them count as missing here.

use serde_json::{Map, Value};

/// Whether a JSON value carries anything: not null, false, 0 or "".
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// The value under `key` when it is truthy.
pub fn get_present<'a>(record: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    record.get(key).filter(|v| is_truthy(v))
}

/// Non-empty string under `key`.
pub fn get_text<'a>(record: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    record
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// First non-empty string among `keys`.
pub fn first_text<'a>(record: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a str> {
    keys.iter().find_map(|key| get_text(record, key))
}
