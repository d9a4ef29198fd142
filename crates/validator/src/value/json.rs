//! JSON interop for [`Value`].

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

use super::{Array, Key, Value};

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(flag) => Self::Bool(flag),
            serde_json::Value::Number(number) => match number.as_i64() {
                Some(integer) => Self::Int(integer),
                None => number.as_f64().map_or(Self::Null, Self::Float),
            },
            serde_json::Value::String(text) => Self::String(text),
            serde_json::Value::Array(items) => Self::list(items),
            serde_json::Value::Object(entries) => Self::Array(
                entries
                    .into_iter()
                    .map(|(name, item)| (Key::from(name), Self::from(item)))
                    .collect(),
            ),
        }
    }
}

fn is_list(items: &Array) -> bool {
    items
        .keys()
        .enumerate()
        .all(|(position, key)| key.as_index() == i64::try_from(position).ok())
}

/// Lists (keys `0..n` in order) serialize as sequences, other arrays as maps,
/// objects as their string conversion or type name.
impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(flag) => serializer.serialize_bool(*flag),
            Self::Int(number) => serializer.serialize_i64(*number),
            Self::Float(number) => serializer.serialize_f64(*number),
            Self::String(text) => serializer.serialize_str(text),
            Self::Array(items) if is_list(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items.values() {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Array(items) => {
                let mut map = serializer.serialize_map(Some(items.len()))?;
                for (key, item) in items {
                    map.serialize_entry(key, item)?;
                }
                map.end()
            }
            Self::Object(object) => {
                serializer.serialize_str(object.display().unwrap_or(object.type_name()))
            }
        }
    }
}
