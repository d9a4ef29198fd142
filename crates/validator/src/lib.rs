//! # verdict-validator
//!
//! Composable validators for loosely typed data, with templated,
//! human-readable error messages.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use verdict_validator::prelude::*;
//!
//! let mut validator = DataValidator::new();
//! validator
//!     .add_validator_by_key(Multi::new().with(GreaterThan::new(8)).with(LessThan::new(20)), "age")?
//!     .add_validator_by_key(Email::new(), ("email", "Email address"))?;
//!
//! let record = Value::record([("age", Value::from(7)), ("email", Value::from("nope"))]);
//! if !validator.is_valid(&record)? {
//!     for message in validator.error_messages() {
//!         eprintln!("{message}");
//!     }
//! }
//! ```
//!
//! ## Layout
//!
//! - [`value`]: the dynamic [`Value`](value::Value) model and its text renderings
//! - [`foundation`]: the [`Validate`](foundation::Validate) trait, error codes
//!   and failure contexts
//! - [`validators`]: leaf validators (ranges, types, patterns, dates, emails, URLs)
//! - [`combinators`]: `Multi`, `MultiOr`, `Negate`, `Bulk` and `Pool`
//! - [`factory`]: builds validators from names and option maps
//! - [`logger`]: renders failures through message templates
//! - [`data`]: [`DataValidator`], per-key validation of records
//!
//! Setup mistakes (unknown names, bad options, bad keys, missing templates)
//! are reported as [`ConfigError`]; a value failing validation is a
//! [`ValidationError`](foundation::ValidationError).

// ValidationError carries its context inline; boxing it would add an
// allocation to every failing check.
#![allow(clippy::result_large_err)]

pub mod combinators;
pub mod data;
pub mod error;
pub mod factory;
pub mod foundation;
pub mod logger;
mod macros;
pub mod prelude;
pub mod validators;
pub mod value;

pub use data::DataValidator;
pub use error::{ConfigError, ConfigResult};
