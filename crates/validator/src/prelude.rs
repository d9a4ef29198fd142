//! Prelude module for convenient imports.
//!
//! Provides a single `use verdict_validator::prelude::*;` import that brings
//! in the value model, the core traits, every validator and combinator, the
//! factory, the logger and [`DataValidator`].
//!
//! # Examples
//!
//! ```rust,ignore
//! use verdict_validator::prelude::*;
//!
//! let range = Multi::new().with(GreaterThan::new(8)).with(LessThan::new(20));
//! let error = range.validate(&Value::from(5)).unwrap_err();
//! assert_eq!(error.error_code(), &ErrorCode::NOT_GREATER);
//! ```

// ============================================================================
// VALUES
// ============================================================================

pub use crate::value::{Array, Key, Number, Object, Value, stringify, var_export};

// ============================================================================
// FOUNDATION: Core traits, errors, contexts
// ============================================================================

pub use crate::error::{ConfigError, ConfigResult};
pub use crate::foundation::{
    ErrorCode, InputContext, Options, Tracked, Validate, ValidationError, ValidatorSpec,
};
pub use crate::options;

// ============================================================================
// VALIDATORS AND COMBINATORS
// ============================================================================

pub use crate::combinators::{Bulk, FirstOf, Multi, MultiOr, Negate, Pool};
pub use crate::validators::{
    Between, Callback, Date, Email, GreaterThan, InArray, LessThan, NotEmpty, RegEx, Size, Type,
    TypeName, Url,
};

// ============================================================================
// CONSTRUCTION AND REPORTING
// ============================================================================

pub use crate::data::{DataValidator, KeyArg, ValidationReport};
pub use crate::factory::ValidatorFactory;
pub use crate::logger::{ErrorLogger, ErrorTemplates, LogKey, LoggedError, TemplateConfig};
