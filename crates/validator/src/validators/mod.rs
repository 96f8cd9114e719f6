//! Built-in leaf rules
//!
//! Every rule is a small struct produced by a factory function, reports a
//! single leaf [`ValidationResult`](crate::foundation::ValidationResult) and
//! can be retagged with `with_kind`.
//!
//! # Categories
//!
//! - **Presence**: [`required`]
//! - **Size**: [`min`], [`max`], [`range`], [`size`]
//! - **Equality**: [`equals`], [`equals_field`]
//! - **Pattern**: [`email`], [`matches`]
//!
//! # Examples
//!
//! ```
//! use formstate_validator::prelude::*;
//! use serde_json::json;
//!
//! let password = all![required(), min(8)];
//! assert!(password.validate(&json!("correct horse")).passed);
//!
//! let result = password.validate(&json!("short"));
//! assert_eq!(extract_errors(&result.flatten()), ["all", "min"]);
//! ```

pub mod equality;
pub mod pattern;
pub mod presence;
pub mod size;

pub use equality::{Equals, EqualsField, equals, equals_field};
pub use pattern::{Email, Matches, email, matches};
pub use presence::{Required, required};
pub use size::{Max, Min, Range, Size, max, min, range, size};
