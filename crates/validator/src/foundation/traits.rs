//! Core validation traits.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use super::{Options, ValidationError};
use crate::value::Value;

// ============================================================================
// VALIDATE TRAIT
// ============================================================================

/// The validator contract.
///
/// A validator inspects a [`Value`] and either accepts it or returns a
/// [`ValidationError`] describing why it was rejected. Validators hold no
/// per-call state, so a configured validator can be shared freely.
///
/// # Examples
///
/// ```rust,ignore
/// use verdict_validator::foundation::{ErrorCode, Validate, ValidationError};
/// use verdict_validator::value::Value;
///
/// struct Even;
///
/// impl Validate for Even {
///     fn validate(&self, value: &Value) -> Result<(), ValidationError> {
///         match value {
///             Value::Int(n) if n % 2 == 0 => Ok(()),
///             _ => Err(ValidationError::for_value(ErrorCode::CUSTOM_ERROR, value)),
///         }
///     }
/// }
/// ```
pub trait Validate: Send + Sync {
    /// Validates `value`.
    fn validate(&self, value: &Value) -> Result<(), ValidationError>;

    /// Short type name used in diagnostics, e.g. `GreaterThan`.
    fn name(&self) -> Cow<'static, str> {
        Cow::Borrowed(short_type_name(std::any::type_name::<Self>()))
    }
}

/// `a::b::Multi<x::Y>` → `Multi`.
fn short_type_name(full: &'static str) -> &'static str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

impl<V: Validate + ?Sized> Validate for &V {
    fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        (**self).validate(value)
    }

    fn name(&self) -> Cow<'static, str> {
        (**self).name()
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        (**self).validate(value)
    }

    fn name(&self) -> Cow<'static, str> {
        (**self).name()
    }
}

impl<V: Validate + ?Sized> Validate for Arc<V> {
    fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        (**self).validate(value)
    }

    fn name(&self) -> Cow<'static, str> {
        (**self).name()
    }
}

// ============================================================================
// VALIDATOR SPEC
// ============================================================================

/// A validator given either as an instance or by name.
///
/// Named specs are resolved through a
/// [`ValidatorFactory`](crate::factory::ValidatorFactory) when they are bound,
/// so a bad name or option fails at setup time.
#[derive(Clone)]
pub enum ValidatorSpec {
    /// A ready validator.
    Instance(Arc<dyn Validate>),
    /// A factory name plus constructor options.
    Named {
        /// Short or path-qualified validator name.
        name: String,
        /// Constructor options.
        options: Options,
    },
}

impl ValidatorSpec {
    /// Wraps a validator instance.
    pub fn instance(validator: impl Validate + 'static) -> Self {
        Self::Instance(Arc::new(validator))
    }

    /// Names a validator with constructor options.
    pub fn named(name: impl Into<String>, options: Options) -> Self {
        Self::Named {
            name: name.into(),
            options,
        }
    }
}

impl fmt::Debug for ValidatorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Instance(validator) => f.debug_tuple("Instance").field(&validator.name()).finish(),
            Self::Named { name, options } => f
                .debug_struct("Named")
                .field("name", name)
                .field("options", options)
                .finish(),
        }
    }
}

impl From<Arc<dyn Validate>> for ValidatorSpec {
    fn from(validator: Arc<dyn Validate>) -> Self {
        Self::Instance(validator)
    }
}

impl From<Box<dyn Validate>> for ValidatorSpec {
    fn from(validator: Box<dyn Validate>) -> Self {
        Self::Instance(Arc::from(validator))
    }
}

impl From<&str> for ValidatorSpec {
    fn from(name: &str) -> Self {
        Self::named(name, Options::new())
    }
}

impl From<String> for ValidatorSpec {
    fn from(name: String) -> Self {
        Self::named(name, Options::new())
    }
}

impl<N: Into<String>> From<(N, Options)> for ValidatorSpec {
    fn from((name, options): (N, Options)) -> Self {
        Self::named(name, options)
    }
}
