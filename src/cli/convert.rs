//! JSON <-> calc Value conversion utilities

use super::CliError;
use crate::Value;

/// Convert a calc Value to serde_json::Value
///
/// Non-finite numbers have no JSON form and print as `null`.
pub fn value_to_json(v: Value) -> serde_json::Value {
    match v {
        Value::Number(n) => serde_json::Number::from_f64(n)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Value::Boolean(b) => serde_json::Value::Bool(b),
        Value::Text(s) => serde_json::Value::String(s),
        Value::Opaque(json) => json,
    }
}

/// Split a `NAME=VALUE` flag.
///
/// The value is read as JSON when it parses as JSON, otherwise it is taken
/// as plain text, so `--var region=EU` and `--var qty=12` both work.
pub fn parse_binding(binding: &str) -> Result<(String, serde_json::Value), CliError> {
    let (name, raw) = binding
        .split_once('=')
        .ok_or_else(|| CliError::InvalidBinding(binding.to_string()))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(CliError::InvalidBinding(binding.to_string()));
    }

    let value = serde_json::from_str(raw)
        .unwrap_or_else(|_| serde_json::Value::String(raw.to_string()));
    Ok((name.to_string(), value))
}
