//! Passes when any element of an array passes.

use std::fmt;
use std::sync::Arc;

use crate::error::ConfigResult;
use crate::factory::ValidatorFactory;
use crate::foundation::{ErrorCode, Options, Validate, ValidationError, ValidatorSpec};
use crate::value::Value;

/// At least one element must pass the child.
///
/// - input that is not an array: [`ErrorCode::INVALID_TYPE_NON_TRAVERSABLE`]
/// - empty array: [`ErrorCode::IS_EMPTY`]
/// - every element rejected: the last element's failure
#[derive(Clone)]
pub struct Pool {
    validator: Arc<dyn Validate>,
}

impl Pool {
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

    /// Options: `validator` (required) and its `options`.
    pub fn from_options(options: &Options, factory: &ValidatorFactory) -> ConfigResult<Self> {
        Ok(Self {
            validator: factory.resolve_child(options, "Pool")?,
        })
    }

    pub fn inner(&self) -> &Arc<dyn Validate> {
        &self.validator
    }
}

impl Validate for Pool {
    fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        let Some(items) = value.as_array() else {
            return Err(ValidationError::for_value(
                ErrorCode::INVALID_TYPE_NON_TRAVERSABLE,
                value,
            ));
        };

        let mut last = None;
        for item in items.values() {
            match self.validator.validate(item) {
                Ok(()) => return Ok(()),
                Err(error) => last = Some(error),
            }
        }
        match last {
            Some(error) => Err(error),
            None => Err(ValidationError::for_value(ErrorCode::IS_EMPTY, value)),
        }
    }
}

impl fmt::Debug for Pool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pool").field(&self.validator.name()).finish()
    }
}
