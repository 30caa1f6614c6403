//! Helpers for reading loosely shaped JSON records.

use hostdir_types::scalar::{format_number, scalar_text};
use serde_json::Value;

/// Render a field for a violation message the way a template string prints it:
/// `undefined` when absent, strings unquoted, numbers in shortest form, array
/// elements comma-joined.
pub(crate) fn render(value: Option<&Value>) -> String {
    match value {
        None => "undefined".to_string(),
        Some(v) => render_value(v),
    }
}

fn render_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => render_value(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
        scalar => scalar_text(scalar).unwrap_or_default(),
    }
}

/// Identity key for id comparison. Numbers compare by value (`1` equals
/// `1.0`) but never equal the string `"1"`. Arrays and objects have no key and
/// never match anything.
pub(crate) fn identity_key(value: Option<&Value>) -> Option<String> {
    match value {
        None => Some("undefined".to_string()),
        Some(Value::Null) => Some("null".to_string()),
        Some(Value::String(s)) => Some(format!("s:{s}")),
        Some(Value::Number(n)) => n.as_f64().map(|f| format!("n:{}", format_number(f))),
        Some(Value::Bool(b)) => Some(format!("b:{b}")),
        Some(Value::Array(_) | Value::Object(_)) => None,
    }
}

pub(crate) fn is_finite_number(value: Option<&Value>) -> bool {
    value
        .and_then(Value::as_f64)
        .is_some_and(|n| n.is_finite())
}

pub(crate) fn is_finite_number_or_null(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::Null)) || is_finite_number(value)
}

/// Whether a field holds a usable value: not absent, null, false, zero or empty string.
pub(crate) fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(_) => true,
    }
}

/// Substring match for string notes, element match for array notes.
pub(crate) fn contains_marker(value: Option<&Value>, marker: &str) -> bool {
    match value {
        Some(Value::String(s)) => s.contains(marker),
        Some(Value::Array(items)) => items.iter().any(|v| v.as_str() == Some(marker)),
        _ => false,
    }
}
