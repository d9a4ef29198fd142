//! AND combinator that accumulates failures.
//!
//! [`Multi`] runs every child against the same value and reports every
//! failure it saw. With [`Multi::stop_on_failure`] it returns at the first
//! failing child instead.
//!
//! # Examples
//!
//! ```rust,ignore
//! use verdict_validator::prelude::*;
//!
//! let range = Multi::new().with(GreaterThan::new(10)).with(LessThan::new(20));
//! let error = range.validate(&Value::from(5.5)).unwrap_err();
//! assert_eq!(error.error_codes(), [ErrorCode::NOT_GREATER]);
//! ```

use std::fmt;
use std::sync::Arc;

use smallvec::SmallVec;

use crate::error::ConfigResult;
use crate::factory::ValidatorFactory;
use crate::foundation::{Options, Validate, ValidationError, ValidatorSpec, flag};
use crate::value::Value;

pub(crate) type Children = SmallVec<[Arc<dyn Validate>; 4]>;

/// Logical AND over any number of validators.
///
/// Every child sees the same input. Each failure is recorded with its
/// context's `value` set to that input. No children means any value passes.
#[derive(Clone, Default)]
pub struct Multi {
    validators: Children,
    stop_on_failure: bool,
}

impl Multi {
    /// An empty `Multi`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a `Multi` from instances or factory names.
    pub fn with_validators<I, S>(validators: I) -> ConfigResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<ValidatorSpec>,
    {
        let factory = ValidatorFactory::shared();
        let mut multi = Self::new();
        for spec in validators {
            multi.validators.push(factory.resolve(spec)?);
        }
        Ok(multi)
    }

    /// Builds a `Multi` from options.
    ///
    /// - `stop_on_failure`: flag, default `false`
    /// - `validators`: list of names or `{validator, options}` records
    pub fn from_options(options: &Options, factory: &ValidatorFactory) -> ConfigResult<Self> {
        Ok(Self {
            validators: factory.resolve_list(options, "Multi", "validators")?,
            stop_on_failure: flag(options, "Multi", "stop_on_failure", false)?,
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

    /// A copy of this `Multi` that returns at the first failing child.
    #[must_use]
    pub fn stop_on_failure(&self) -> Self {
        Self {
            validators: self.validators.clone(),
            stop_on_failure: true,
        }
    }

    pub fn stops_on_failure(&self) -> bool {
        self.stop_on_failure
    }

    /// Number of children.
    pub fn count(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

impl Validate for Multi {
    fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        let mut failures = Vec::new();
        for validator in &self.validators {
            if let Err(error) = validator.validate(value) {
                failures.push(error.with_input(value));
                if self.stop_on_failure {
                    break;
                }
            }
        }
        ValidationError::combine(failures).map_or(Ok(()), Err)
    }
}

impl fmt::Debug for Multi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Multi")
            .field(
                "validators",
                &self.validators.iter().map(|v| v.name()).collect::<Vec<_>>(),
            )
            .field("stop_on_failure", &self.stop_on_failure)
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::foundation::{ErrorCode, InputContext};
    use crate::options;
    use crate::validators::{Callback, GreaterThan, LessThan};

    fn fails(code: &'static str) -> Callback {
        Callback::new(|_| false).with_error_code(code)
    }

    fn passes() -> Callback {
        Callback::new(|_| true)
    }

    #[test]
    fn accumulates_every_failure() {
        let multi = Multi::new().with(fails("a")).with(passes()).with(fails("b"));
        let error = multi.validate(&Value::from(1)).unwrap_err();
        assert_eq!(error.error_codes(), [ErrorCode::new("a"), ErrorCode::new("b")]);
        assert_eq!(error.error_code(), &ErrorCode::new("b"));
    }

    #[test]
    fn stop_on_failure_skips_remaining_children() {
        let calls = Arc::new(AtomicUsize::new(0));
        let spy = {
            let calls = Arc::clone(&calls);
            Callback::new(move |_| {
                calls.fetch_add(1, Ordering::SeqCst);
                false
            })
            .with_error_code("b")
        };
        let multi = Multi::new().with(fails("a")).with(passes()).with(spy);

        let error = multi.stop_on_failure().validate(&Value::Null).unwrap_err();
        assert_eq!(error.error_codes(), [ErrorCode::new("a")]);
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        assert!(multi.validate(&Value::Null).is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn stop_on_failure_returns_a_new_instance() {
        let multi = Multi::new().with(passes());
        let stopping = multi.stop_on_failure();
        assert!(!multi.stops_on_failure());
        assert!(stopping.stops_on_failure());
        assert_eq!(stopping.count(), 1);
    }

    #[test]
    fn all_passing_is_valid() {
        let multi = Multi::new().with(GreaterThan::new(8)).with(LessThan::new(20));
        assert!(multi.validate(&Value::from(10)).is_ok());
    }

    #[test]
    fn empty_multi_is_valid() {
        assert!(Multi::new().validate(&Value::from("anything")).is_ok());
    }

    #[test]
    fn context_carries_child_parameters_and_multi_input() {
        let multi = Multi::new().with(LessThan::new(9));
        let error = multi.validate(&Value::from(10)).unwrap_err();
        let data = error.error_data(&ErrorCode::NOT_LESS);
        assert_eq!(data.len(), 1);
        assert_eq!(data[0].value(), &Value::Int(10));
        assert_eq!(data[0].get("max"), Some(&Value::Int(9)));
    }

    #[test]
    fn children_resolve_through_the_factory() {
        let multi = Multi::with_validators([
            ValidatorSpec::named("greater-than", options! { "min" => 8, "max" => 9 }),
            ValidatorSpec::from(LessThan::new(9)),
        ])
        .unwrap();
        assert_eq!(multi.count(), 2);
        let error = multi.validate(&Value::from(10)).unwrap_err();
        assert_eq!(error.error_codes(), [ErrorCode::NOT_LESS]);
    }

    #[test]
    fn from_options() {
        let options = options! {
            "stop_on_failure" => "true",
            "validators" => Value::list(["not-empty", "regex"]),
        };
        let err = Multi::from_options(&options, ValidatorFactory::shared()).unwrap_err();
        assert!(err.to_string().contains("pattern"));

        let options = options! {
            "stop_on_failure" => true,
            "validators" => Value::list([
                Value::from("not_empty"),
                Value::record([
                    ("validator", Value::from("LessThan")),
                    ("options", Value::record([("max", 3)])),
                ]),
            ]),
        };
        let multi = Multi::from_options(&options, ValidatorFactory::shared()).unwrap();
        assert!(multi.stops_on_failure());
        let error = multi.validate(&Value::from("")).unwrap_err();
        assert_eq!(error.error_codes(), [ErrorCode::IS_EMPTY]);
    }

    #[test]
    fn nested_combinator_failures_are_flattened() {
        let inner = Multi::new().with(fails("a")).with(fails("b"));
        let outer = Multi::new().with(inner).with(fails("c"));
        let error = outer.validate(&Value::Null).unwrap_err();
        let codes: Vec<&ErrorCode> = error.failures().map(|(code, _)| code).collect();
        assert_eq!(codes, [&ErrorCode::new("a"), &ErrorCode::new("b"), &ErrorCode::new("c")]);
        assert!(error.failures().all(|(_, ctx)| ctx == &InputContext::new(Value::Null)));
    }
}
