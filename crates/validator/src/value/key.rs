//! Array keys.

use std::fmt;

use serde::{Serialize, Serializer};

/// A key inside a [`Value::Array`](super::Value::Array).
///
/// Names that spell a canonical decimal integer (`"0"`, `"42"`, `"-7"`, but
/// not `"007"` or `"-0"`) are stored as [`Key::Index`], so `"1"` and `1`
/// address the same entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// Integer position or integer-like name.
    Index(i64),
    /// Any other name.
    Name(String),
}

impl Key {
    /// Builds a key from a name, canonicalizing integer-like names.
    pub fn name(name: impl Into<String>) -> Self {
        let name = name.into();
        match canonical_index(&name) {
            Some(index) => Self::Index(index),
            None => Self::Name(name),
        }
    }

    /// Returns the index when this is an integer key.
    #[must_use]
    pub fn as_index(&self) -> Option<i64> {
        match self {
            Self::Index(index) => Some(*index),
            Self::Name(_) => None,
        }
    }
}

fn canonical_index(name: &str) -> Option<i64> {
    let digits = name.strip_prefix('-').unwrap_or(name);
    let first = digits.bytes().next()?;
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if first == b'0' && (digits.len() > 1 || name.starts_with('-')) {
        return None;
    }
    name.parse().ok()
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "{index}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

impl From<i64> for Key {
    fn from(index: i64) -> Self {
        Self::Index(index)
    }
}

impl From<i32> for Key {
    fn from(index: i32) -> Self {
        Self::Index(i64::from(index))
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Self::Index(i64::try_from(index).unwrap_or(i64::MAX))
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Self::name(name)
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Self::name(name)
    }
}

impl From<&String> for Key {
    fn from(name: &String) -> Self {
        Self::name(name.as_str())
    }
}

impl Serialize for Key {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
