//! Applies one validator to every element of an array.

use std::fmt;
use std::sync::Arc;

use crate::error::ConfigResult;
use crate::factory::ValidatorFactory;
use crate::foundation::{ErrorCode, Options, Validate, ValidationError, ValidatorSpec};
use crate::value::Value;

/// Every element must pass the child.
///
/// Stops at the first rejected element and returns that element's failure
/// unchanged. Input that is not an array fails with
/// [`ErrorCode::INVALID_TYPE_NON_TRAVERSABLE`] before any element is checked.
#[derive(Clone)]
pub struct Bulk {
    validator: Arc<dyn Validate>,
}

impl Bulk {
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
            validator: factory.resolve_child(options, "Bulk")?,
        })
    }

    pub fn inner(&self) -> &Arc<dyn Validate> {
        &self.validator
    }
}

impl Validate for Bulk {
    fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        let Some(items) = value.as_array() else {
            return Err(ValidationError::for_value(
                ErrorCode::INVALID_TYPE_NON_TRAVERSABLE,
                value,
            ));
        };
        items
            .values()
            .try_for_each(|item| self.validator.validate(item))
    }
}

impl fmt::Debug for Bulk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Bulk").field(&self.validator.name()).finish()
    }
}
