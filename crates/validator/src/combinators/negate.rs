//! NOT combinator.

use std::fmt;
use std::sync::Arc;

use crate::error::ConfigResult;
use crate::factory::ValidatorFactory;
use crate::foundation::{ErrorCode, InputContext, Options, Validate, ValidationError, ValidatorSpec};
use crate::value::Value;

/// Inverts a validator.
///
/// Passes when the child fails. When the child passes, fails with
/// [`ErrorCode::NEGATED_VALIDATOR_PASSED`] and a context naming the child in
/// `validator_name`.
///
/// ```rust,ignore
/// let not_empty_string = Negate::new(InArray::new(Value::list([""])));
/// assert!(not_empty_string.validate(&Value::from("x")).is_ok());
/// ```
#[derive(Clone)]
pub struct Negate {
    validator: Arc<dyn Validate>,
}

impl Negate {
    /// Wraps `validator`.
    pub fn new(validator: impl Validate + 'static) -> Self {
        Self {
            validator: Arc::new(validator),
        }
    }

    /// Wraps an instance or factory name.
    pub fn with_validator(validator: impl Into<ValidatorSpec>) -> ConfigResult<Self> {
        Ok(Self {
            validator: ValidatorFactory::shared().resolve(validator)?,
        })
    }

    /// Builds from options: `validator` (required) names the child and
    /// `options` configures it.
    pub fn from_options(options: &Options, factory: &ValidatorFactory) -> ConfigResult<Self> {
        Ok(Self {
            validator: factory.resolve_child(options, "Negate")?,
        })
    }

    /// The wrapped validator.
    pub fn inner(&self) -> &Arc<dyn Validate> {
        &self.validator
    }
}

impl Validate for Negate {
    fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        match self.validator.validate(value) {
            Err(_) => Ok(()),
            Ok(()) => Err(ValidationError::new(
                ErrorCode::NEGATED_VALIDATOR_PASSED,
                InputContext::new(value.clone())
                    .with("validator_name", self.validator.name().into_owned()),
            )),
        }
    }
}

impl fmt::Debug for Negate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Negate").field(&self.validator.name()).finish()
    }
}
