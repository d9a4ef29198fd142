//! Membership check.

use crate::error::{ConfigError, ConfigResult};
use crate::foundation::{ErrorCode, InputContext, Options, Validate, ValidationError, flag};
use crate::value::{Array, Value};

/// Value must be one of the haystack's entries.
///
/// Strict mode (the default) requires an exact match: `"1"` is not `1`.
/// Loose mode compares with [`Value::loose_eq`].
#[derive(Debug, Clone, PartialEq)]
pub struct InArray {
    haystack: Array,
    strict: bool,
}

impl InArray {
    /// `haystack` must be an array; anything else is an empty haystack.
    pub fn new(haystack: impl Into<Value>) -> Self {
        let haystack = match haystack.into() {
            Value::Array(items) => items,
            _ => Array::new(),
        };
        Self {
            haystack,
            strict: true,
        }
    }

    /// Compares loosely.
    #[must_use = "builder methods must be chained or built"]
    pub fn loose(mut self) -> Self {
        self.strict = false;
        self
    }

    /// Options: `haystack` (default empty, must be an array), `strict`
    /// (default `true`).
    pub fn from_options(options: &Options) -> ConfigResult<Self> {
        let haystack = match options.get("haystack") {
            None | Some(Value::Null) => Array::new(),
            Some(Value::Array(items)) => items.clone(),
            Some(other) => {
                return Err(ConfigError::invalid_option(
                    "InArray",
                    "haystack",
                    format!("expected an array, {} given", other.kind()),
                ));
            }
        };
        Ok(Self {
            haystack,
            strict: flag(options, "InArray", "strict", true)?,
        })
    }

    fn contains(&self, value: &Value) -> bool {
        if self.strict {
            self.haystack.values().any(|candidate| candidate == value)
        } else {
            self.haystack.values().any(|candidate| candidate.loose_eq(value))
        }
    }
}

impl Validate for InArray {
    fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        if self.contains(value) {
            return Ok(());
        }
        Err(ValidationError::new(
            ErrorCode::NOT_IN_ARRAY,
            InputContext::new(value.clone())
                .with("haystack", Value::Array(self.haystack.clone()))
                .with("strict", self.strict),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options;

    #[test]
    fn strict_by_default() {
        let validator = InArray::new(Value::list([1, 2, 3]));
        assert!(validator.validate(&Value::Int(2)).is_ok());
        let error = validator.validate(&Value::from("2")).unwrap_err();
        assert_eq!(error.error_code(), &ErrorCode::NOT_IN_ARRAY);
        assert_eq!(error.input_data().get("strict"), Some(&Value::Bool(true)));
    }

    #[test]
    fn loose_mode() {
        let validator = InArray::new(Value::list([1, 2, 3])).loose();
        assert!(validator.validate(&Value::from("2")).is_ok());
        assert!(validator.validate(&Value::Float(3.0)).is_ok());
        assert!(validator.validate(&Value::from("four")).is_err());
    }

    #[test]
    fn options() {
        let validator = InArray::from_options(&options! {
            "haystack" => Value::list(["a", "b"]),
            "strict" => false,
        })
        .unwrap();
        assert!(validator.validate(&Value::from("b")).is_ok());

        assert!(InArray::from_options(&options! {}).unwrap().validate(&Value::Null).is_err());
        assert!(InArray::from_options(&options! { "haystack" => "a,b" }).is_err());
    }
}
