//! Emptiness check.

use crate::error::ConfigResult;
use crate::foundation::{ErrorCode, Options, Validate, ValidationError};
use crate::value::Value;

/// Rejects empty values.
///
/// Empty means `null`, `false`, `""` or an array with no entries. The
/// number `0` and the string `"0"` are values, not emptiness.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotEmpty;

impl NotEmpty {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Takes no options; any given are ignored.
    pub fn from_options(_options: &Options) -> ConfigResult<Self> {
        Ok(Self)
    }
}

/// Whether `value` counts as empty.
fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

impl Validate for NotEmpty {
    fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        if is_empty(value) {
            return Err(ValidationError::for_value(ErrorCode::IS_EMPTY, value));
        }
        Ok(())
    }
}
