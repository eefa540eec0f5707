//! Turn captured stdout into the shape a caller asked for.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ParseError;

/// Drop one trailing newline, nothing else.
pub fn text(out: &str) -> String {
    out.strip_suffix('\n').unwrap_or(out).to_string()
}

pub fn lines(out: &str) -> Vec<String> {
    let body = out.strip_suffix('\n').unwrap_or(out);
    body.split('\n').map(str::to_string).collect()
}

/// Split `-print0` / `xargs -0` style output.
pub fn null_separated(out: &str) -> Vec<String> {
    let body = out.strip_suffix('\0').unwrap_or(out);
    body.split('\0').map(str::to_string).collect()
}

/// Whitespace-separated table, one row per line.
pub fn fields(out: &str) -> Vec<Vec<String>> {
    let body = out.strip_suffix('\n').unwrap_or(out);
    body.split('\n')
        .map(|line| line.split_whitespace().map(str::to_string).collect())
        .collect()
}

pub fn json<T: DeserializeOwned>(out: &str) -> Result<T, ParseError> {
    Ok(serde_json::from_str(out)?)
}

/// Pretty-print a value for debugging; `None` shows as `(undefined)`.
pub fn dump<T: Serialize + ?Sized>(value: Option<&T>) -> String {
    match value {
        None => "(undefined)".to_string(),
        Some(v) => serde_json::to_string_pretty(v).unwrap_or_else(|e| format!("<unserializable: {}>", e)),
    }
}
