//! Error codes.

use std::borrow::{Borrow, Cow};
use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier for a class of validation failure.
///
/// The built-in codes are associated constants. Custom codes are plain
/// strings; they need a template registered in the
/// [`ErrorTemplates`](crate::logger::ErrorTemplates) store (or an inline
/// template at log time) before a message can be rendered for them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorCode(Cow<'static, str>);

impl ErrorCode {
    pub const CUSTOM_ERROR: Self = Self::from_static("custom_error");
    pub const INVALID_DATE: Self = Self::from_static("invalid_date");
    pub const INVALID_DATE_FORMAT: Self = Self::from_static("invalid_date_format");
    pub const INVALID_DNS: Self = Self::from_static("invalid_dns");
    pub const INVALID_TYPE_NON_ARRAY: Self = Self::from_static("invalid_type_non_array");
    pub const INVALID_TYPE_NON_COUNTABLE: Self = Self::from_static("invalid_type_non_countable");
    pub const INVALID_TYPE_NON_DATE: Self = Self::from_static("invalid_type_non_date");
    pub const INVALID_TYPE_NON_NUMERIC: Self = Self::from_static("invalid_type_non_numeric");
    pub const INVALID_TYPE_NON_SCALAR: Self = Self::from_static("invalid_type_non_scalar");
    pub const INVALID_TYPE_NON_STRING: Self = Self::from_static("invalid_type_non_string");
    pub const INVALID_TYPE_NON_TRAVERSABLE: Self =
        Self::from_static("invalid_type_non_traversable");
    pub const INVALID_TYPE_GIVEN: Self = Self::from_static("invalid_type_given");
    pub const INVALID_SIZE: Self = Self::from_static("invalid_size");
    pub const IS_EMPTY: Self = Self::from_static("is_empty");
    pub const NOT_BETWEEN: Self = Self::from_static("not_between");
    pub const NOT_BETWEEN_STRICT: Self = Self::from_static("not_between_strict");
    pub const NOT_EMAIL: Self = Self::from_static("not_email");
    pub const NOT_GREATER: Self = Self::from_static("not_greater_than");
    pub const NOT_GREATER_INCLUSIVE: Self = Self::from_static("not_greater_than_inclusive");
    pub const NOT_IN_ARRAY: Self = Self::from_static("not_in_array");
    pub const NOT_LESS: Self = Self::from_static("not_less_than");
    pub const NOT_LESS_INCLUSIVE: Self = Self::from_static("not_less_than_inclusive");
    pub const NOT_MATCH: Self = Self::from_static("not_match");
    pub const NOT_URL: Self = Self::from_static("not_url");
    pub const MULTIPLE_ERRORS: Self = Self::from_static("multiple_errors");
    pub const REGEX_INTERNAL_ERROR: Self = Self::from_static("regex_internal_error");
    pub const NEGATED_VALIDATOR_PASSED: Self = Self::from_static("negated_validator_passed");

    /// Every built-in code, in declaration order.
    pub const BUILT_IN: [Self; 27] = [
        Self::CUSTOM_ERROR,
        Self::INVALID_DATE,
        Self::INVALID_DATE_FORMAT,
        Self::INVALID_DNS,
        Self::INVALID_TYPE_NON_ARRAY,
        Self::INVALID_TYPE_NON_COUNTABLE,
        Self::INVALID_TYPE_NON_DATE,
        Self::INVALID_TYPE_NON_NUMERIC,
        Self::INVALID_TYPE_NON_SCALAR,
        Self::INVALID_TYPE_NON_STRING,
        Self::INVALID_TYPE_NON_TRAVERSABLE,
        Self::INVALID_TYPE_GIVEN,
        Self::INVALID_SIZE,
        Self::IS_EMPTY,
        Self::NOT_BETWEEN,
        Self::NOT_BETWEEN_STRICT,
        Self::NOT_EMAIL,
        Self::NOT_GREATER,
        Self::NOT_GREATER_INCLUSIVE,
        Self::NOT_IN_ARRAY,
        Self::NOT_LESS,
        Self::NOT_LESS_INCLUSIVE,
        Self::NOT_MATCH,
        Self::NOT_URL,
        Self::MULTIPLE_ERRORS,
        Self::REGEX_INTERNAL_ERROR,
        Self::NEGATED_VALIDATOR_PASSED,
    ];

    /// Creates a code from a static string.
    #[must_use]
    pub const fn from_static(code: &'static str) -> Self {
        Self(Cow::Borrowed(code))
    }

    /// Creates a code from any string.
    pub fn new(code: impl Into<Cow<'static, str>>) -> Self {
        Self(code.into())
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ErrorCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ErrorCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for ErrorCode {
    fn from(code: &'static str) -> Self {
        Self::from_static(code)
    }
}

impl From<String> for ErrorCode {
    fn from(code: String) -> Self {
        Self(Cow::Owned(code))
    }
}

impl PartialEq<str> for ErrorCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ErrorCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn built_in_codes_are_distinct() {
        let built_in = ErrorCode::BUILT_IN;
        let unique: HashSet<&str> = built_in.iter().map(ErrorCode::as_str).collect();
        assert_eq!(unique.len(), ErrorCode::BUILT_IN.len());
    }

    #[test]
    fn compares_with_plain_strings() {
        assert_eq!(ErrorCode::IS_EMPTY, "is_empty");
        assert_eq!(ErrorCode::from(String::from("mine")), ErrorCode::new("mine"));
    }
}
