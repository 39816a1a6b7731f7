use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

/// Render a JSON tree canonically.
///
/// Object keys are emitted in byte-wise order regardless of how the map
/// stores them, separators carry no whitespace, and non-ASCII text is
/// written as literal UTF-8. Only `"`, `\` and control characters are
/// escaped.
pub fn to_canonical_json(value: &Value) -> Result<String, serde_json::Error> {
    serde_json::to_string(&sort_keys(value))
}

/// Convert any serializable value to a tree and render it canonically.
pub fn to_canonical_json_value<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    let tree = serde_json::to_value(value)?;
    to_canonical_json(&tree)
}

/// Copy of `value` with every object rebuilt in sorted key order.
pub(crate) fn sort_keys(value: &Value) -> Value {
    match value {
        Value::Object(entries) => {
            let sorted: BTreeMap<&String, Value> = entries
                .iter()
                .map(|(key, item)| (key, sort_keys(item)))
                .collect();
            let mut object = Map::new();
            for (key, item) in sorted {
                object.insert(key.clone(), item);
            }
            Value::Object(object)
        }
        Value::Array(items) => Value::Array(items.iter().map(sort_keys).collect()),
        _ => value.clone(),
    }
}
