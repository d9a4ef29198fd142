//! Built-in validators
//!
//! Every validator has a typed constructor and, except [`Callback`], a
//! `from_options` constructor used by the
//! [`ValidatorFactory`](crate::factory::ValidatorFactory). Each failure
//! context holds the rejected `value` plus the options a message template
//! may mention.
//!
//! # Categories
//!
//! - **Presence**: [`NotEmpty`]
//! - **Range**: [`GreaterThan`], [`LessThan`], [`Between`]
//! - **Content**: [`RegEx`], [`Email`], [`Url`], [`Date`]
//! - **Collection**: [`InArray`], [`Size`]
//! - **Type**: [`Type`]
//! - **Custom**: [`Callback`]
//!
//! # Examples
//!
//! ```rust,ignore
//! use verdict_validator::prelude::*;
//!
//! let age = Between::new(18, 100);
//! assert!(age.validate(&Value::from(42)).is_ok());
//!
//! let error = RegEx::new("/Hello/").validate(&Value::from("")).unwrap_err();
//! assert_eq!(error.error_code(), &ErrorCode::NOT_MATCH);
//! ```

mod callback;
mod content;
mod in_array;
mod not_empty;
mod pattern;
mod range;
mod size;
mod time;
mod type_check;

pub use callback::Callback;
pub use content::{Email, Url};
pub use in_array::InArray;
pub use not_empty::NotEmpty;
pub use pattern::RegEx;
pub use range::{Between, GreaterThan, LessThan};
pub use size::Size;
pub use time::Date;
pub use type_check::{Type, TypeName};

crate::macros::impl_into_spec!(
    Between,
    Callback,
    Date,
    Email,
    GreaterThan,
    InArray,
    LessThan,
    NotEmpty,
    RegEx,
    Size,
    Type,
    Url,
);
