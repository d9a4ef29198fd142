//! OR combinator that short-circuits on the first success.

use std::fmt;
use std::sync::Arc;

use super::multi::Children;
use crate::error::ConfigResult;
use crate::factory::ValidatorFactory;
use crate::foundation::{Options, Validate, ValidationError, ValidatorSpec};
use crate::value::Value;

/// Logical OR over any number of validators.
///
/// Children run in order; the first one that passes makes the whole check
/// pass and discards the failures collected so far. When every child fails,
/// the error carries each child's failures in order. No children means any
/// value passes.
///
/// ```rust,ignore
/// let id = MultiOr::new().with(Type::new("integer")).with(RegEx::new("/^[a-z]+$/"));
/// assert!(id.validate(&Value::from(7)).is_ok());
/// assert!(id.validate(&Value::from("abc")).is_ok());
/// ```
#[derive(Clone, Default)]
pub struct MultiOr {
    validators: Children,
}

/// First-success validator; the same semantics as [`MultiOr`].
pub type FirstOf = MultiOr;

impl MultiOr {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds from instances or factory names.
    pub fn with_validators<I, S>(validators: I) -> ConfigResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<ValidatorSpec>,
    {
        let factory = ValidatorFactory::shared();
        let validators = validators
            .into_iter()
            .map(|spec| factory.resolve(spec))
            .collect::<ConfigResult<Children>>()?;
        Ok(Self { validators })
    }

    /// Builds from options; `validators` lists names or
    /// `{validator, options}` records.
    pub fn from_options(options: &Options, factory: &ValidatorFactory) -> ConfigResult<Self> {
        Ok(Self {
            validators: factory.resolve_list(options, "MultiOr", "validators")?,
        })
    }

    /// Appends a child.
    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, validator: impl Validate + 'static) -> Self {
        self.validators.push(Arc::new(validator));
        self
    }

    /// Appends a child given as an instance or factory name.
    pub fn add_validator(&mut self, validator: impl Into<ValidatorSpec>) -> ConfigResult<&mut Self> {
        self.validators
            .push(ValidatorFactory::shared().resolve(validator)?);
        Ok(self)
    }

    pub fn count(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

impl Validate for MultiOr {
    fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        let mut failures = Vec::with_capacity(self.validators.len());
        for validator in &self.validators {
            match validator.validate(value) {
                Ok(()) => return Ok(()),
                Err(error) => failures.push(error.with_input(value)),
            }
        }
        ValidationError::combine(failures).map_or(Ok(()), Err)
    }
}

impl fmt::Debug for MultiOr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiOr")
            .field(
                "validators",
                &self.validators.iter().map(|v| v.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::foundation::ErrorCode;
    use crate::validators::{Callback, NotEmpty, Type};

    fn fails(code: &'static str) -> Callback {
        Callback::new(|_| false).with_error_code(code)
    }

    #[test]
    fn first_success_wins_and_clears_failures() {
        let calls = Arc::new(AtomicUsize::new(0));
        let spy = {
            let calls = Arc::clone(&calls);
            Callback::new(move |_| {
                calls.fetch_add(1, Ordering::SeqCst);
                false
            })
        };
        let any = MultiOr::new()
            .with(fails("a"))
            .with(Callback::new(|_| true))
            .with(spy);
        assert!(any.validate(&Value::from(1)).is_ok());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn all_failing_reports_every_code() {
        let any = FirstOf::new().with(fails("a")).with(fails("b"));
        let error = any.validate(&Value::from(1)).unwrap_err();
        assert_eq!(error.error_codes(), [ErrorCode::new("a"), ErrorCode::new("b")]);
        assert_eq!(error.error_code(), &ErrorCode::new("b"));
    }

    #[test]
    fn zero_children_pass() {
        assert!(MultiOr::new().validate(&Value::Null).is_ok());
    }

    #[test]
    fn built_from_names() {
        let any = MultiOr::with_validators([
            ValidatorSpec::from(NotEmpty::new()),
            ValidatorSpec::from(Type::new("null")),
        ])
        .unwrap();
        assert_eq!(any.count(), 2);
        assert!(any.validate(&Value::Null).is_ok());
        assert!(any.validate(&Value::from("x")).is_ok());
        let error = any.validate(&Value::from("")).unwrap_err();
        assert_eq!(error.error_codes(), [ErrorCode::IS_EMPTY, ErrorCode::INVALID_TYPE_GIVEN]);
    }

    #[test]
    fn unknown_child_name_fails_construction() {
        assert!(MultiOr::with_validators(["no-such-validator"]).is_err());
    }
}
