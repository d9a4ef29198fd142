//! Validator combinators.
//!
//! Each combinator wraps one or more validators and is itself a
//! [`Validate`](crate::foundation::Validate):
//!
//! - [`Multi`]: every child must pass; failures accumulate
//! - [`MultiOr`] / [`FirstOf`]: the first passing child wins
//! - [`Negate`]: passes when its child fails
//! - [`Bulk`]: every array element must pass the child
//! - [`Pool`]: some array element must pass the child
//!
//! Children can be given as instances or as factory names, so a combinator
//! can be assembled entirely from configuration:
//!
//! ```rust,ignore
//! use verdict_validator::prelude::*;
//!
//! let range = Multi::with_validators([
//!     ValidatorSpec::named("greater-than", options! { "min" => 10 }),
//!     ValidatorSpec::named("less-than", options! { "max" => 20 }),
//! ])?;
//! assert!(range.validate(&Value::from(15)).is_ok());
//! ```

mod bulk;
mod multi;
mod multi_or;
mod negate;
mod pool;

pub use bulk::Bulk;
pub(crate) use multi::Children;
pub use multi::Multi;
pub use multi_or::{FirstOf, MultiOr};
pub use negate::Negate;
pub use pool::Pool;

crate::macros::impl_into_spec!(Bulk, Multi, MultiOr, Negate, Pool);
