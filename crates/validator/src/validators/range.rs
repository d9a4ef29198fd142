//! Bound validators: [`GreaterThan`], [`LessThan`] and [`Between`].
//!
//! Bounds and input compare loosely (see [`Value::loose_cmp`]): numbers,
//! booleans and numeric strings numerically, two non-numeric strings
//! lexically. A value that cannot be compared with a bound fails.

use std::cmp::Ordering;

use crate::error::{ConfigError, ConfigResult};
use crate::foundation::{ErrorCode, InputContext, Options, Validate, ValidationError, flag, value_or};
use crate::value::Value;

fn bound(options: &Options, validator: &'static str, name: &'static str, default: Value) -> ConfigResult<Value> {
    let value = value_or(options, name, default);
    if value.is_scalar() || value.is_null() {
        Ok(value)
    } else {
        Err(ConfigError::invalid_option(
            validator,
            name,
            format!("expected a scalar bound, {} given", value.kind()),
        ))
    }
}

// ============================================================================
// GREATER THAN
// ============================================================================

/// Value must be greater than `min` (or equal, when inclusive).
///
/// ```rust,ignore
/// let adult = GreaterThan::new(18).inclusive();
/// assert!(adult.validate(&Value::from(18)).is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GreaterThan {
    min: Value,
    inclusive: bool,
}

impl GreaterThan {
    pub fn new(min: impl Into<Value>) -> Self {
        Self {
            min: min.into(),
            inclusive: false,
        }
    }

    /// Accepts values equal to `min`.
    #[must_use = "builder methods must be chained or built"]
    pub fn inclusive(mut self) -> Self {
        self.inclusive = true;
        self
    }

    /// Options: `min` (default `0`), `inclusive` (default `false`).
    pub fn from_options(options: &Options) -> ConfigResult<Self> {
        Ok(Self {
            min: bound(options, "GreaterThan", "min", Value::Int(0))?,
            inclusive: flag(options, "GreaterThan", "inclusive", false)?,
        })
    }

    pub fn min(&self) -> &Value {
        &self.min
    }
}

impl Default for GreaterThan {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Validate for GreaterThan {
    fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        let passed = match value.loose_cmp(&self.min) {
            Some(Ordering::Greater) => true,
            Some(Ordering::Equal) => self.inclusive,
            _ => false,
        };
        if passed {
            return Ok(());
        }
        let code = if self.inclusive {
            ErrorCode::NOT_GREATER_INCLUSIVE
        } else {
            ErrorCode::NOT_GREATER
        };
        Err(ValidationError::new(
            code,
            InputContext::new(value.clone())
                .with("min", self.min.clone())
                .with("inclusive", self.inclusive),
        ))
    }
}

// ============================================================================
// LESS THAN
// ============================================================================

/// Value must be less than `max` (or equal, when inclusive).
#[derive(Debug, Clone, PartialEq)]
pub struct LessThan {
    max: Value,
    inclusive: bool,
}

impl LessThan {
    pub fn new(max: impl Into<Value>) -> Self {
        Self {
            max: max.into(),
            inclusive: false,
        }
    }

    /// Accepts values equal to `max`.
    #[must_use = "builder methods must be chained or built"]
    pub fn inclusive(mut self) -> Self {
        self.inclusive = true;
        self
    }

    /// Options: `max` (default `0`), `inclusive` (default `false`).
    pub fn from_options(options: &Options) -> ConfigResult<Self> {
        Ok(Self {
            max: bound(options, "LessThan", "max", Value::Int(0))?,
            inclusive: flag(options, "LessThan", "inclusive", false)?,
        })
    }

    pub fn max(&self) -> &Value {
        &self.max
    }
}

impl Default for LessThan {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Validate for LessThan {
    fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        let passed = match value.loose_cmp(&self.max) {
            Some(Ordering::Less) => true,
            Some(Ordering::Equal) => self.inclusive,
            _ => false,
        };
        if passed {
            return Ok(());
        }
        let code = if self.inclusive {
            ErrorCode::NOT_LESS_INCLUSIVE
        } else {
            ErrorCode::NOT_LESS
        };
        Err(ValidationError::new(
            code,
            InputContext::new(value.clone())
                .with("max", self.max.clone())
                .with("inclusive", self.inclusive),
        ))
    }
}

// ============================================================================
// BETWEEN
// ============================================================================

/// Value must lie between `min` and `max`.
///
/// Inclusive by default; [`Between::strict`] excludes both bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct Between {
    min: Value,
    max: Value,
    inclusive: bool,
}

impl Between {
    pub fn new(min: impl Into<Value>, max: impl Into<Value>) -> Self {
        Self {
            min: min.into(),
            max: max.into(),
            inclusive: true,
        }
    }

    /// Rejects values equal to either bound.
    #[must_use = "builder methods must be chained or built"]
    pub fn strict(mut self) -> Self {
        self.inclusive = false;
        self
    }

    /// Options: `min` (default `0`), `max` (default `i64::MAX`),
    /// `inclusive` (default `true`).
    pub fn from_options(options: &Options) -> ConfigResult<Self> {
        Ok(Self {
            min: bound(options, "Between", "min", Value::Int(0))?,
            max: bound(options, "Between", "max", Value::Int(i64::MAX))?,
            inclusive: flag(options, "Between", "inclusive", true)?,
        })
    }
}

impl Validate for Between {
    fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        let lower = value.loose_cmp(&self.min);
        let upper = value.loose_cmp(&self.max);
        let passed = match (lower, upper) {
            (Some(lower), Some(upper)) if self.inclusive => {
                lower != Ordering::Less && upper != Ordering::Greater
            }
            (Some(lower), Some(upper)) => lower == Ordering::Greater && upper == Ordering::Less,
            _ => false,
        };
        if passed {
            return Ok(());
        }
        let code = if self.inclusive {
            ErrorCode::NOT_BETWEEN
        } else {
            ErrorCode::NOT_BETWEEN_STRICT
        };
        Err(ValidationError::new(
            code,
            InputContext::new(value.clone())
                .with("min", self.min.clone())
                .with("max", self.max.clone())
                .with("inclusive", self.inclusive),
        ))
    }
}
