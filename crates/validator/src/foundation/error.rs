//! Validation failures.
//!
//! A [`ValidationError`] is the value a validator returns when data is
//! rejected. It carries the code and [`InputContext`] of the failure that
//! stopped evaluation and, for combinators that collect several failures in
//! one pass, every `(code, context)` pair seen, in order.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use super::{ErrorCode, InputContext};
use crate::value::Value;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A rejected value.
///
/// ```rust,ignore
/// use verdict_validator::foundation::{ErrorCode, InputContext, ValidationError};
///
/// let error = ValidationError::new(ErrorCode::NOT_LESS, InputContext::new(10).with("max", 9));
/// assert_eq!(error.error_code(), &ErrorCode::NOT_LESS);
/// assert_eq!(error.error_codes(), [ErrorCode::NOT_LESS]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationError {
    code: ErrorCode,
    context: InputContext,
    /// Every failure collected in one pass, flattened. Empty for a single
    /// failure, in which case the error itself is the only failure.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    failures: Vec<ValidationError>,
}

impl ValidationError {
    /// Creates a single failure.
    pub fn new(code: impl Into<ErrorCode>, context: InputContext) -> Self {
        Self {
            code: code.into(),
            context,
            failures: Vec::new(),
        }
    }

    /// Creates a single failure whose context holds only the rejected value.
    pub fn for_value(code: impl Into<ErrorCode>, value: &Value) -> Self {
        Self::new(code, InputContext::new(value.clone()))
    }

    /// Adds a parameter to the context.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.context.insert(name, value);
        self
    }

    /// Combines failures collected in one pass.
    ///
    /// Returns `None` when there is nothing to combine. The combined error
    /// takes its code and context from the last failure and keeps every
    /// failure, flattened, in order.
    pub fn combine(failures: Vec<ValidationError>) -> Option<Self> {
        let mut flat: Vec<ValidationError> = Vec::with_capacity(failures.len());
        for failure in failures {
            if failure.failures.is_empty() {
                flat.push(failure);
            } else {
                flat.extend(failure.failures);
            }
        }
        match flat.len() {
            0 => None,
            1 => flat.pop(),
            _ => {
                let last = flat.last()?;
                Some(Self {
                    code: last.code.clone(),
                    context: last.context.clone(),
                    failures: flat,
                })
            }
        }
    }

    /// Replaces the `value` entry of every failure.
    ///
    /// Combinators use this so the recorded context shows the input they
    /// received rather than what a child saw.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_input(mut self, value: &Value) -> Self {
        self.context.insert(InputContext::VALUE, value.clone());
        for failure in &mut self.failures {
            failure.context.insert(InputContext::VALUE, value.clone());
        }
        self
    }

    /// Code of the failure that stopped evaluation.
    pub fn error_code(&self) -> &ErrorCode {
        &self.code
    }

    /// Context of the failure that stopped evaluation.
    pub fn input_data(&self) -> &InputContext {
        &self.context
    }

    /// Every `(code, context)` failure, in the order it was seen.
    pub fn failures(&self) -> impl Iterator<Item = (&ErrorCode, &InputContext)> {
        let own = self.failures.is_empty().then_some((&self.code, &self.context));
        own.into_iter().chain(
            self.failures
                .iter()
                .map(|failure| (&failure.code, &failure.context)),
        )
    }

    /// Number of failures carried, at least one.
    pub fn failure_count(&self) -> usize {
        self.failures.len().max(1)
    }

    /// Distinct codes in first-seen order.
    pub fn error_codes(&self) -> Vec<ErrorCode> {
        self.error_data_map().into_keys().collect()
    }

    /// Contexts recorded for `code`, empty if the code was not seen.
    pub fn error_data(&self, code: &ErrorCode) -> Vec<&InputContext> {
        self.failures()
            .filter(|(seen, _)| *seen == code)
            .map(|(_, context)| context)
            .collect()
    }

    /// Contexts grouped by code, codes in first-seen order.
    pub fn error_data_map(&self) -> IndexMap<ErrorCode, Vec<InputContext>> {
        let mut map: IndexMap<ErrorCode, Vec<InputContext>> = IndexMap::new();
        for (code, context) in self.failures() {
            map.entry(code.clone()).or_default().push(context.clone());
        }
        map
    }

    /// Serializes the error for transport.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation failed with `{}`", self.code)?;
        if self.failures.len() > 1 {
            write!(f, " ({} failures)", self.failures.len())?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn failure(code: &'static str, value: i64) -> ValidationError {
        ValidationError::new(code, InputContext::new(value))
    }

    #[test]
    fn single_failure_reports_itself() {
        let error = failure("a", 1).with_param("min", 2);
        assert_eq!(error.error_codes(), [ErrorCode::new("a")]);
        assert_eq!(error.failure_count(), 1);
        assert_eq!(error.input_data().get("min"), Some(&Value::Int(2)));
    }

    #[test]
    fn combine_keeps_order_and_takes_last_as_primary() {
        let error = ValidationError::combine(vec![failure("a", 1), failure("b", 2), failure("a", 3)])
            .unwrap();
        assert_eq!(error.error_code(), &ErrorCode::new("a"));
        assert_eq!(error.input_data().value(), &Value::Int(3));
        assert_eq!(error.error_codes(), [ErrorCode::new("a"), ErrorCode::new("b")]);
        assert_eq!(error.error_data(&ErrorCode::new("a")).len(), 2);
        assert_eq!(error.failure_count(), 3);
    }

    #[test]
    fn combine_flattens_nested_errors() {
        let inner = ValidationError::combine(vec![failure("a", 1), failure("b", 2)]).unwrap();
        let outer = ValidationError::combine(vec![inner, failure("c", 3)]).unwrap();
        let codes: Vec<&str> = outer.failures().map(|(code, _)| code.as_str()).collect();
        assert_eq!(codes, ["a", "b", "c"]);
    }

    #[test]
    fn combine_of_nothing_is_none() {
        assert!(ValidationError::combine(Vec::new()).is_none());
    }

    #[test]
    fn with_input_rewrites_every_value() {
        let error = ValidationError::combine(vec![failure("a", 1), failure("b", 2)])
            .unwrap()
            .with_input(&Value::from("whole"));
        assert!(error.failures().all(|(_, ctx)| ctx.value() == &Value::from("whole")));
    }

    #[test]
    fn unknown_code_has_no_data() {
        assert!(failure("a", 1).error_data(&ErrorCode::new("zzz")).is_empty());
    }
}
