//! Two-call compatibility wrapper.
//!
//! Some callers expect to ask "is it valid?" first and read the failure
//! afterwards. [`Tracked`] keeps the outcome of the last call so those reads
//! work, without adding state to the validators themselves.

use std::sync::LazyLock;

use super::{ErrorCode, InputContext, Validate, ValidationError};
use crate::value::Value;

static NO_CONTEXT: LazyLock<InputContext> = LazyLock::new(InputContext::default);
static NO_CODE: ErrorCode = ErrorCode::from_static("");

/// A validator that remembers its last result.
///
/// ```rust,ignore
/// let mut check = Tracked::new(GreaterThan::new(10));
/// assert!(!check.is_valid(&Value::from(5)));
/// assert_eq!(check.error_code(), &ErrorCode::NOT_GREATER);
/// ```
#[derive(Debug, Clone)]
pub struct Tracked<V> {
    validator: V,
    last: Option<ValidationError>,
}

impl<V: Validate> Tracked<V> {
    pub fn new(validator: V) -> Self {
        Self {
            validator,
            last: None,
        }
    }

    /// Validates `value` and keeps the outcome for the getters.
    pub fn is_valid(&mut self, value: &Value) -> bool {
        self.last = self.validator.validate(value).err();
        self.last.is_none()
    }

    /// Code of the last failure, empty after a successful call.
    pub fn error_code(&self) -> &ErrorCode {
        self.last.as_ref().map_or(&NO_CODE, ValidationError::error_code)
    }

    /// Context of the last failure; after a successful call, a context whose
    /// value is `Null`.
    pub fn input_data(&self) -> &InputContext {
        self.last
            .as_ref()
            .map_or(&*NO_CONTEXT, ValidationError::input_data)
    }

    /// Every code of the last failure.
    pub fn error_codes(&self) -> Vec<ErrorCode> {
        self.last
            .as_ref()
            .map(ValidationError::error_codes)
            .unwrap_or_default()
    }

    /// Contexts recorded for `code` during the last call.
    pub fn error_data(&self, code: &ErrorCode) -> Vec<&InputContext> {
        self.last
            .as_ref()
            .map(|error| error.error_data(code))
            .unwrap_or_default()
    }

    /// The last failure, if the last call failed.
    pub fn last_error(&self) -> Option<&ValidationError> {
        self.last.as_ref()
    }

    pub fn inner(&self) -> &V {
        &self.validator
    }

    pub fn into_inner(self) -> V {
        self.validator
    }
}
