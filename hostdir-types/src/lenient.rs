//! Deserializers that never reject a field.
//!
//! The catalog is checked by the validator before publishing; readers of the
//! catalog degrade malformed values to `None`/empty instead of failing.

use crate::scalar::scalar_text;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Ids and foreign keys: numbers and booleans keep their printed form so
/// `5` and `6` stay distinct keys.
pub(crate) fn id<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(&Value::deserialize(d)?))
}

pub(crate) fn id_or_empty<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(id(d)?.unwrap_or_default())
}

pub(crate) fn finite_number<'de, D>(d: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Value::deserialize(d)?;
    Ok(v.as_f64().filter(|n| n.is_finite()))
}

pub(crate) fn string<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(d)? {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

pub(crate) fn string_or_empty<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(string(d)?.unwrap_or_default())
}

/// Only a literal JSON `true` counts.
pub(crate) fn strict_true<'de, D>(d: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(matches!(Value::deserialize(d)?, Value::Bool(true)))
}

/// Non-array values read as empty; non-string elements are skipped.
pub(crate) fn string_list<'de, D>(d: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(d)? {
        Value::Array(items) => Ok(items
            .into_iter()
            .filter_map(|v| match v {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect()),
        _ => Ok(Vec::new()),
    }
}
