//! Core validation types and traits
//!
//! - **Traits**: [`Validate`], plus [`ValidatorSpec`] for validators given by name
//! - **Failures**: [`ValidationError`], [`ErrorCode`], [`InputContext`]
//! - **Compatibility**: [`Tracked`] for the "validate, then ask why" style
//!
//! # Reporting protocol
//!
//! A validator never panics or returns a [`ConfigError`](crate::ConfigError)
//! because of the data it inspects. Rejection is a value: the code of the
//! failure plus the context that produced it (the rejected value and the
//! parameters a message template may mention).
//!
//! ```rust,ignore
//! use verdict_validator::prelude::*;
//!
//! let check = LessThan::new(9);
//! let error = check.validate(&Value::from(10)).unwrap_err();
//! assert_eq!(error.error_code(), &ErrorCode::NOT_LESS);
//! assert_eq!(error.input_data().get("max"), Some(&Value::from(9)));
//! ```

mod code;
mod context;
mod error;
mod tracked;
mod traits;

pub use code::ErrorCode;
pub use context::{InputContext, Options};
pub(crate) use context::{flag, nested, required, text, value_or};
pub use error::ValidationError;
pub use tracked::Tracked;
pub use traits::{Validate, ValidatorSpec};
