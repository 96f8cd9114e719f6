//! Combinators for composing validators
//!
//! Every combinator runs its operands against the same value, flattens the
//! operand results and attaches them as children of its own result. Its
//! verdict is computed over that flattened list, not over the raw operand
//! results, so a failing nested combinator also contributes its failing
//! children to the count.
//!
//! # Available Combinators
//!
//! - [`AllOf`] - every flattened result passed (`all`)
//! - [`AnyOf`] - at least one flattened result passed (`any`)
//! - [`NoneOf`] - no flattened result passed (`none`)
//! - [`Either`] - exactly one flattened result passed (`either`)
//! - [`Not`] - inverts a result, keeping its kind
//!
//! # Examples
//!
//! ```
//! use formstate_validator::prelude::*;
//! use serde_json::json;
//!
//! let rule = either(equals(1), equals(2));
//! assert!(rule.validate(&json!(1)).passed);
//! assert!(rule.validate(&json!(2)).passed);
//! assert!(!rule.validate(&json!(3)).passed);
//! ```

pub mod all;
pub mod any;
pub mod either;
pub mod none;
pub mod not;

pub use all::{AllOf, all};
pub use any::{AnyOf, any};
pub use either::{Either, either};
pub use none::{NoneOf, none};
pub use not::{Not, not};
