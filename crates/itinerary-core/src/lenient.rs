//! Forgiving deserializers for persisted documents.
//!
//! Older or hand-edited data may carry `null` or the wrong JSON type in a
//! field; those load as the field's default instead of rejecting the whole
//! document.

use serde::de::{DeserializeOwned, Deserializer, Error};
use serde::Deserialize;
use serde_json::Value;

pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        _ => String::new(),
    })
}

/// Non-array values load as `[]`; elements that are not objects are dropped
pub fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Array(values) => values
            .into_iter()
            .filter(Value::is_object)
            .map(|value| serde_json::from_value(value).map_err(D::Error::custom))
            .collect(),
        _ => Ok(Vec::new()),
    }
}

/// `subItems`: absent, `null`, non-array, and `[]` all mean "no sub items"
pub fn sub_items<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(values) => values
            .into_iter()
            .map(|v| match v {
                Value::String(s) => s,
                _ => String::new(),
            })
            .collect::<Vec<_>>(),
        _ => Vec::new(),
    };
    Ok(if items.is_empty() { None } else { Some(items) })
}
