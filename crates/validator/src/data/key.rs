//! Key arguments for keyed bindings.

use crate::error::{ConfigError, ConfigResult};
use crate::value::{Key, Value};

/// The record key(s) a validator is bound to.
///
/// Built from a key string, a list of key strings, or a `(key, label)`
/// pair. Configuration values convert with [`TryFrom<&Value>`], which also
/// accepts the `{key: label}` single-entry record and the explicit
/// `{key: …, label: …}` record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyArg {
    One(String),
    Many(Vec<String>),
    Labeled { key: String, label: String },
}

impl KeyArg {
    /// `(key, label)` pairs to bind, after checking every key is non-empty.
    pub(crate) fn into_bindings(self) -> ConfigResult<Vec<(String, Option<String>)>> {
        let bindings = match self {
            Self::One(key) => vec![(key, None)],
            Self::Many(keys) => {
                if keys.is_empty() {
                    return Err(ConfigError::invalid_key("the key list is empty"));
                }
                keys.into_iter().map(|key| (key, None)).collect()
            }
            Self::Labeled { key, label } => vec![(key, Some(label))],
        };
        if bindings.iter().any(|(key, _)| key.is_empty()) {
            return Err(ConfigError::invalid_key(
                "validator key must be a non-empty string or a list of them",
            ));
        }
        Ok(bindings)
    }
}

impl From<&str> for KeyArg {
    fn from(key: &str) -> Self {
        Self::One(key.to_owned())
    }
}

impl From<String> for KeyArg {
    fn from(key: String) -> Self {
        Self::One(key)
    }
}

impl From<Vec<String>> for KeyArg {
    fn from(keys: Vec<String>) -> Self {
        Self::Many(keys)
    }
}

impl From<Vec<&str>> for KeyArg {
    fn from(keys: Vec<&str>) -> Self {
        Self::Many(keys.into_iter().map(str::to_owned).collect())
    }
}

impl<const N: usize> From<[&str; N]> for KeyArg {
    fn from(keys: [&str; N]) -> Self {
        Self::Many(keys.into_iter().map(str::to_owned).collect())
    }
}

impl From<(&str, &str)> for KeyArg {
    fn from((key, label): (&str, &str)) -> Self {
        Self::Labeled {
            key: key.to_owned(),
            label: label.to_owned(),
        }
    }
}

impl From<(String, String)> for KeyArg {
    fn from((key, label): (String, String)) -> Self {
        Self::Labeled { key, label }
    }
}

fn string_entry(value: &Value, what: &str) -> ConfigResult<String> {
    match value {
        Value::String(text) if !text.is_empty() => Ok(text.clone()),
        other => Err(ConfigError::invalid_key(format!(
            "{what} must be a non-empty string, {} given",
            other.kind()
        ))),
    }
}

impl TryFrom<&Value> for KeyArg {
    type Error = ConfigError;

    fn try_from(value: &Value) -> ConfigResult<Self> {
        let items = match value {
            Value::String(_) => return Ok(Self::One(string_entry(value, "key")?)),
            Value::Array(items) => items,
            other => {
                return Err(ConfigError::invalid_key(format!(
                    "expected a key, a list of keys or a key/label record, {} given",
                    other.kind()
                )));
            }
        };

        let explicit = (items.get(&Key::from("key")), items.get(&Key::from("label")));
        if let (Some(key), Some(label)) = explicit {
            if items.len() == 2 {
                return Ok(Self::Labeled {
                    key: string_entry(key, "key")?,
                    label: string_entry(label, "label")?,
                });
            }
        }

        let is_list = items.keys().all(|key| key.as_index().is_some());
        if is_list {
            let keys = items
                .values()
                .map(|item| string_entry(item, "every listed key"))
                .collect::<ConfigResult<Vec<_>>>()?;
            if keys.is_empty() {
                return Err(ConfigError::invalid_key("the key list is empty"));
            }
            return Ok(Self::Many(keys));
        }

        match items.iter().next() {
            Some((Key::Name(key), label)) if items.len() == 1 && !key.is_empty() => {
                Ok(Self::Labeled {
                    key: key.clone(),
                    label: string_entry(label, "label")?,
                })
            }
            _ => Err(ConfigError::invalid_key(
                "a key/label record must have exactly one named entry",
            )),
        }
    }
}

impl TryFrom<Value> for KeyArg {
    type Error = ConfigError;

    fn try_from(value: Value) -> ConfigResult<Self> {
        Self::try_from(&value)
    }
}
