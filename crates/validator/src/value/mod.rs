//! Dynamic values inspected by validators.
//!
//! Validators receive loosely typed input: form fields, decoded JSON, rows
//! coming out of a config file. [`Value`] models that input with a small set
//! of scalar variants, an insertion-ordered [`Array`] addressed by integer or
//! string [`Key`]s, and opaque [`Object`]s that only carry a type name and an
//! optional string conversion.
//!
//! ```rust,ignore
//! use verdict_validator::value::Value;
//!
//! let record = Value::record([("name", Value::from("Ada")), ("age", Value::from(36))]);
//! assert_eq!(record.get("age"), Some(&Value::Int(36)));
//! ```

mod compare;
mod export;
mod json;
mod key;

use indexmap::IndexMap;

pub use compare::Number;
pub use export::{stringify, var_export};
pub use key::Key;

/// Insertion-ordered array, the only collection type of the value model.
pub type Array = IndexMap<Key, Value>;

/// A dynamically typed value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Absence of a value. Also what a missing record key resolves to.
    #[default]
    Null,
    /// Boolean.
    Bool(bool),
    /// Signed integer.
    Int(i64),
    /// Double precision float.
    Float(f64),
    /// UTF-8 text.
    String(String),
    /// Ordered array, either list-like (integer keys) or record-like.
    Array(Array),
    /// Opaque object.
    Object(Object),
}

/// An opaque object value.
///
/// Validators cannot look inside an object. They can check its type name and
/// use its string conversion when one is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Object {
    type_name: String,
    display: Option<String>,
}

impl Object {
    /// Creates an object without a string conversion.
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            display: None,
        }
    }

    /// Attaches a string conversion.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_display(mut self, display: impl Into<String>) -> Self {
        self.display = Some(display.into());
        self
    }

    /// Type name of the object.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// String conversion of the object, if any.
    pub fn display(&self) -> Option<&str> {
        self.display.as_deref()
    }
}

impl Value {
    /// Builds a list-like array with keys `0..n`.
    pub fn list<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::Array(
            items
                .into_iter()
                .enumerate()
                .map(|(index, item)| (Key::from(index), item.into()))
                .collect(),
        )
    }

    /// Builds a record-like array from key/value pairs.
    pub fn record<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Key>,
        V: Into<Value>,
    {
        Self::Array(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Builds an empty array.
    #[must_use]
    pub fn empty_array() -> Self {
        Self::Array(Array::new())
    }

    /// Type name used in diagnostics and by the `Type` validator.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "NULL",
            Self::Bool(_) => "boolean",
            Self::Int(_) => "integer",
            Self::Float(_) => "double",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
        }
    }

    #[inline]
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Booleans, integers, floats and strings.
    #[inline]
    #[must_use]
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            Self::Bool(_) | Self::Int(_) | Self::Float(_) | Self::String(_)
        )
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(number) => Some(*number),
            _ => None,
        }
    }

    /// Looks up an entry of an array value. Non-arrays have no entries.
    pub fn get(&self, key: impl Into<Key>) -> Option<&Value> {
        self.as_array().and_then(|items| items.get(&key.into()))
    }

    /// Text of strings, numbers and objects with a string conversion.
    ///
    /// This is the conversion text validators use when they accept "anything
    /// that reads as a string".
    #[must_use]
    pub fn to_text(&self) -> Option<String> {
        match self {
            Self::String(text) => Some(text.clone()),
            Self::Int(number) => Some(number.to_string()),
            Self::Float(number) => Some(export::format_float(*number)),
            Self::Object(object) => object.display.clone(),
            _ => None,
        }
    }

    /// Reads an option flag the permissive way configuration files spell it.
    ///
    /// Accepts booleans, `0`/`1`, and the strings `true/false`, `1/0`,
    /// `yes/no`, `on/off` (case-insensitive). Everything else is `None`.
    #[must_use]
    pub fn to_flag(&self) -> Option<bool> {
        match self {
            Self::Bool(flag) => Some(*flag),
            Self::Int(0) => Some(false),
            Self::Int(1) => Some(true),
            Self::String(text) => match text.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Some(true),
                "0" | "false" | "no" | "off" | "" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<i32> for Value {
    fn from(number: i32) -> Self {
        Self::Int(i64::from(number))
    }
}

impl From<i64> for Value {
    fn from(number: i64) -> Self {
        Self::Int(number)
    }
}

impl From<u32> for Value {
    fn from(number: u32) -> Self {
        Self::Int(i64::from(number))
    }
}

impl From<usize> for Value {
    fn from(number: usize) -> Self {
        i64::try_from(number).map_or(Self::Float(number as f64), Self::Int)
    }
}

impl From<f32> for Value {
    fn from(number: f32) -> Self {
        Self::Float(f64::from(number))
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Self::Float(number)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::String(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::String(text)
    }
}

impl From<&String> for Value {
    fn from(text: &String) -> Self {
        Self::String(text.clone())
    }
}

impl From<Array> for Value {
    fn from(items: Array) -> Self {
        Self::Array(items)
    }
}

impl From<Object> for Value {
    fn from(object: Object) -> Self {
        Self::Object(object)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::list(items)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
