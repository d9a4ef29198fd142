//! Failure context and constructor options.

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::{ConfigError, ConfigResult};
use crate::value::{Key, Value};

/// Constructor options: option name to value.
///
/// Build them with the [`options!`](crate::options) macro or collect them from
/// decoded configuration.
pub type Options = IndexMap<String, Value>;

/// The data that produced a failure.
///
/// Always carries a `value` entry holding the rejected input, followed by the
/// parameters a message template may refer to (`min`, `max`, `pattern`,
/// `format`...). Inside a map validation a `key` entry names the field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct InputContext {
    entries: IndexMap<String, Value>,
}

impl InputContext {
    pub const VALUE: &'static str = "value";
    pub const KEY: &'static str = "key";

    /// Creates a context for the rejected `value`.
    pub fn new(value: impl Into<Value>) -> Self {
        let mut entries = IndexMap::with_capacity(4);
        entries.insert(Self::VALUE.to_owned(), value.into());
        Self { entries }
    }

    /// Adds a parameter.
    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Sets a parameter, replacing any previous value under the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    /// The rejected value, `Null` when the entry was removed.
    pub fn value(&self) -> &Value {
        const NULL: &Value = &Value::Null;
        self.entries.get(Self::VALUE).unwrap_or(NULL)
    }

    /// The field key this failure was logged for, if any.
    pub fn key(&self) -> Option<&Value> {
        self.entries.get(Self::KEY)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// The context as a record value.
    pub fn to_value(&self) -> Value {
        Value::record(
            self.entries
                .iter()
                .map(|(name, value)| (Key::from(name), value.clone())),
        )
    }
}

impl Default for InputContext {
    fn default() -> Self {
        Self::new(Value::Null)
    }
}

impl<'a> IntoIterator for &'a InputContext {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// ============================================================================
// OPTION READERS
// ============================================================================

/// Required option.
pub(crate) fn required<'a>(
    options: &'a Options,
    validator: &'static str,
    name: &'static str,
) -> ConfigResult<&'a Value> {
    options
        .get(name)
        .filter(|value| !value.is_null())
        .ok_or_else(|| ConfigError::missing_option(validator, name))
}

/// Optional value with a default.
pub(crate) fn value_or(options: &Options, name: &str, default: Value) -> Value {
    options.get(name).cloned().unwrap_or(default)
}

/// Optional boolean flag with a default.
pub(crate) fn flag(
    options: &Options,
    validator: &'static str,
    name: &'static str,
    default: bool,
) -> ConfigResult<bool> {
    match options.get(name) {
        None | Some(Value::Null) => Ok(default),
        Some(value) => value.to_flag().ok_or_else(|| {
            ConfigError::invalid_option(validator, name, format!("expected a boolean, {} given", value.kind()))
        }),
    }
}

/// Optional string with a default.
pub(crate) fn text(
    options: &Options,
    validator: &'static str,
    name: &'static str,
    default: &str,
) -> ConfigResult<String> {
    match options.get(name) {
        None | Some(Value::Null) => Ok(default.to_owned()),
        Some(Value::String(value)) => Ok(value.clone()),
        Some(other) => Err(ConfigError::invalid_option(
            validator,
            name,
            format!("expected a string, {} given", other.kind()),
        )),
    }
}

/// Converts a nested option value (a record) into [`Options`].
pub(crate) fn nested(
    value: &Value,
    validator: &'static str,
    name: &'static str,
) -> ConfigResult<Options> {
    match value {
        Value::Null => Ok(Options::new()),
        Value::Array(items) => Ok(items
            .iter()
            .map(|(key, item)| (key.to_string(), item.clone()))
            .collect()),
        other => Err(ConfigError::invalid_option(
            validator,
            name,
            format!("expected an array of options, {} given", other.kind()),
        )),
    }
}
