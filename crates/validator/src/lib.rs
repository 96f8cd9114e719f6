//! # formstate-validator
//!
//! Composable validation rules over dynamic values, producing result trees
//! that flatten into an ordered list of passes and failures.
//!
//! ## Quick Start
//!
//! ```
//! use formstate_validator::prelude::*;
//! use serde_json::json;
//!
//! let rules = [required().boxed(), email().boxed()];
//!
//! let results = run_all(&json!("someone@example.com"), &rules);
//! assert!(all_passed(&results));
//!
//! let results = run_all(&json!(""), &rules);
//! assert_eq!(extract_errors(&results), ["required", "email"]);
//! ```
//!
//! ## Creating Validators
//!
//! Use the [`rule!`] macro for leaf rules, implement
//! [`Validate`](foundation::Validate) manually, or pass any
//! `Fn(&Value) -> ValidationResult` closure.
//!
//! ## Built-in Validators
//!
//! - **Presence**: [`Required`](validators::Required)
//! - **Size**: [`Min`](validators::Min), [`Max`](validators::Max),
//!   [`Range`](validators::Range), [`Size`](validators::Size)
//! - **Equality**: [`Equals`](validators::Equals),
//!   [`EqualsField`](validators::EqualsField)
//! - **Pattern**: [`Email`](validators::Email), [`Matches`](validators::Matches)
//! - **Combinators**: [`AllOf`](combinators::AllOf), [`AnyOf`](combinators::AnyOf),
//!   [`NoneOf`](combinators::NoneOf), [`Either`](combinators::Either),
//!   [`Not`](combinators::Not)

pub mod combinators;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod validators;

/// The dynamic value every rule validates.
pub use serde_json::Value;
