//! File utility functions.

use crate::error::{HeroSmithError, Result};
use serde::Serialize;
use serde_json::Value;
use std::path::Path;

/// Read file with UTF-8 encoding.
pub fn read_utf8_file(path: &Path) -> Result<String> {
    Ok(std::fs::read_to_string(path)?)
}

/// Read a JSON document whose root must be an array and return its elements in order.
pub fn read_json_array(path: &Path) -> Result<Vec<Value>> {
    if !path.exists() {
        return Err(HeroSmithError::NotFound(format!(
            "{} not found",
            path.display()
        )));
    }

    let text = read_utf8_file(path)?;
    match serde_json::from_str::<Value>(&text)? {
        Value::Array(records) => Ok(records),
        other => Err(HeroSmithError::InvalidRoot(format!(
            "{} root must be an array, found {}",
            path.display(),
            json_kind(&other)
        ))),
    }
}

/// Serialize `value` with two-space indentation and replace `path` with it.
///
/// The document is written to a sibling temporary file first and renamed over
/// the target, so the original content survives a failed write.
pub fn write_json_pretty<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value)?;

    let mut tmp_name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    std::fs::write(&tmp_path, text)?;
    if let Err(e) = std::fs::rename(&tmp_path, path) {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(e.into());
    }
    Ok(())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
