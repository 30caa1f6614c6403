//! Text forms of JSON scalars, shared by typed reading and the validator.

use serde_json::Value;

/// Shortest decimal form of `n`: `1.0` prints as `1`, `-0` as `0`, and
/// magnitudes outside `[1e-6, 1e21)` use exponent form (`1e+21`, `1e-7`).
pub fn format_number(n: f64) -> String {
    if n == 0.0 {
        return "0".to_string();
    }
    let abs = n.abs();
    if (1e-6..1e21).contains(&abs) {
        return n.to_string();
    }
    let exp = format!("{:e}", n);
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
        _ => exp,
    }
}

/// Text of an id-like value: strings as written, numbers and booleans in their
/// printed form. `None` for null, arrays and objects.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => n.as_f64().map(format_number),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
