//! Exact size check.

use crate::error::{ConfigError, ConfigResult};
use crate::foundation::{ErrorCode, InputContext, Options, Validate, ValidationError};
use crate::value::{Number, Value};

/// Value must have exactly the configured size.
///
/// Size of a string is its character count, of a number its integer value,
/// of a boolean `0` or `1`, of an array its entry count. Objects cannot be
/// counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    size: u64,
}

impl Size {
    pub fn new(size: u64) -> Self {
        Self { size }
    }

    /// Options: `size` (default `0`), a non-negative integer or numeric
    /// string.
    pub fn from_options(options: &Options) -> ConfigResult<Self> {
        let Some(value) = options.get("size").filter(|value| !value.is_null()) else {
            return Ok(Self::default());
        };
        let size = match value {
            Value::Int(_) | Value::Float(_) | Value::String(_) => value.to_number(),
            _ => None,
        };
        match size {
            Some(Number::Int(size)) if size >= 0 => Ok(Self::new(size.unsigned_abs())),
            Some(Number::Float(size)) if size >= 0.0 && size.fract() == 0.0 && size.is_finite() => {
                Ok(Self::new(size as u64))
            }
            _ => Err(ConfigError::invalid_option(
                "Size",
                "size",
                "must be a positive integer or 0",
            )),
        }
    }

    pub fn size(&self) -> u64 {
        self.size
    }
}

/// Measured size, `None` for uncountable values.
fn measure(value: &Value) -> Option<i128> {
    match value {
        Value::Null => Some(-1),
        Value::Bool(flag) => Some(i128::from(*flag)),
        Value::Int(number) => Some(i128::from(*number)),
        Value::Float(number) => Some(number.trunc() as i128),
        Value::String(text) => Some(text.chars().count() as i128),
        Value::Array(items) => Some(items.len() as i128),
        Value::Object(_) => None,
    }
}

impl Validate for Size {
    fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        let context = || InputContext::new(value.clone()).with("size", self.size as i64);
        match measure(value) {
            None => Err(ValidationError::new(ErrorCode::INVALID_TYPE_NON_COUNTABLE, context())),
            Some(size) if size == i128::from(self.size) => Ok(()),
            Some(_) => Err(ValidationError::new(ErrorCode::INVALID_SIZE, context())),
        }
    }
}
