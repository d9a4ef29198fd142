//! Configuration and usage errors.
//!
//! Data that fails validation is never an error in this sense: it is reported
//! through [`ValidationError`](crate::foundation::ValidationError). A
//! [`ConfigError`] means the validator, the logger or the factory was set up
//! or called incorrectly, and is returned from the call that caused it.

use std::borrow::Cow;

/// Setup or usage mistake reported synchronously by the failing call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A code was logged without an inline template and no template is
    /// registered for it, or an empty code was registered.
    #[error("error code `{code}` has no registered template")]
    UnknownErrorCode {
        /// The offending code.
        code: String,
    },

    /// A template loaded from configuration is not a string.
    #[error("template for error code `{code}` must be a string, {found} given")]
    InvalidTemplate {
        /// Code the template was meant for.
        code: String,
        /// Kind of the value found instead.
        found: &'static str,
    },

    /// Malformed key argument when binding a validator to record keys.
    #[error("invalid validator key: {reason}")]
    InvalidKey {
        /// What was wrong with the key argument.
        reason: String,
    },

    /// A required constructor option is absent.
    #[error("`{validator}` requires the \"{option}\" option")]
    MissingOption {
        /// Validator being constructed.
        validator: Cow<'static, str>,
        /// Name of the missing option.
        option: &'static str,
    },

    /// A constructor option has an unusable value.
    #[error("`{validator}` option \"{option}\" is invalid: {reason}")]
    InvalidOption {
        /// Validator being constructed.
        validator: Cow<'static, str>,
        /// Name of the option.
        option: &'static str,
        /// What was wrong with it.
        reason: String,
    },

    /// The factory has no constructor for the given name.
    #[error("the given validator `{name}` does not exist")]
    UnknownValidator {
        /// Name as supplied by the caller.
        name: String,
    },

    /// A configuration document could not be parsed.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Parser message.
        reason: String,
    },
}

impl ConfigError {
    pub(crate) fn missing_option(validator: &'static str, option: &'static str) -> Self {
        Self::MissingOption {
            validator: Cow::Borrowed(validator),
            option,
        }
    }

    pub(crate) fn invalid_option(
        validator: &'static str,
        option: &'static str,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidOption {
            validator: Cow::Borrowed(validator),
            option,
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_key(reason: impl Into<String>) -> Self {
        Self::InvalidKey {
            reason: reason.into(),
        }
    }
}

/// Result alias for setup and usage operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
