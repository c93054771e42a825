//! Coercion helpers shared by the extraction tables.

use serde_json::Value;

/// Interprets a JSON value as a finite `f64`.
///
/// Accepts numbers and numeric strings (providers disagree on which they
/// send); rejects NaN/infinity and everything else.
pub(crate) fn finite_f64(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    parsed.is_finite().then_some(parsed)
}

/// Resolves the first pointer in `pointers` whose value parses to a finite
/// number. A present-but-zero value wins over a later non-zero one; the
/// table order is the whole contract.
pub(crate) fn first_finite(value: &Value, pointers: &[&str]) -> Option<f64> {
    pointers
        .iter()
        .filter_map(|ptr| value.pointer(ptr))
        .find_map(finite_f64)
}

/// Resolves the first pointer in `pointers` whose value is a non-empty
/// string; empty and non-string candidates fall through to the next entry.
pub(crate) fn first_non_empty_string(value: &Value, pointers: &[&str]) -> Option<String> {
    pointers
        .iter()
        .filter_map(|ptr| value.pointer(ptr))
        .filter_map(Value::as_str)
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

/// Converts an extracted metric to a count: negative inputs collapse to 0,
/// fractional values truncate, absent stays 0.
pub(crate) fn count_from(value: Option<f64>) -> u64 {
    match value {
        Some(v) if v > 0.0 => v as u64,
        _ => 0,
    }
}
