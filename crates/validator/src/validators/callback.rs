//! Closure-backed validator.

use std::fmt;
use std::sync::Arc;

use crate::foundation::{ErrorCode, Validate, ValidationError};
use crate::value::Value;

type Predicate = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// Validates with a predicate closure.
///
/// Fails with [`ErrorCode::CUSTOM_ERROR`] unless another code is set with
/// [`Callback::with_error_code`]. A closure cannot come from a configuration
/// document, so `Callback` is not registered with the factory.
///
/// ```rust,ignore
/// let even = Callback::new(|value| value.as_int().is_some_and(|n| n % 2 == 0))
///     .with_error_code("not_even");
/// ```
#[derive(Clone)]
pub struct Callback {
    predicate: Predicate,
    error_code: ErrorCode,
}

impl Callback {
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Arc::new(predicate),
            error_code: ErrorCode::CUSTOM_ERROR,
        }
    }

    /// Code reported on failure. An empty code keeps the default.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_error_code(mut self, code: impl Into<ErrorCode>) -> Self {
        let code = code.into();
        if !code.is_empty() {
            self.error_code = code;
        }
        self
    }

    pub fn error_code(&self) -> &ErrorCode {
        &self.error_code
    }
}

impl Validate for Callback {
    fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        if (self.predicate)(value) {
            Ok(())
        } else {
            Err(ValidationError::for_value(self.error_code.clone(), value))
        }
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("error_code", &self.error_code)
            .finish_non_exhaustive()
    }
}
