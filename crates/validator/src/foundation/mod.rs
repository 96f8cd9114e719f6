//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation system:
//!
//! - **Traits**: [`Validate`], [`ValidateExt`], [`ValueSource`]
//! - **Results**: [`ValidationResult`], [`run_all`], [`extract_errors`]
//! - **Tags**: [`RuleKind`]
//! - **Coercions**: [`size_of`], [`is_blank_char`], [`is_falsy`], [`coerce_to_string`], [`deep_equal`]
//!
//! # Architecture
//!
//! A validator is a pure function `&Value -> ValidationResult`. Leaf rules
//! produce a single node; combinators run their operands, flatten the
//! operand results and attach them as children. Flattening is what gives
//! every consumer the same linear view of a run:
//!
//! ```
//! use formstate_validator::prelude::*;
//! use serde_json::json;
//!
//! let rules = [
//!     required().boxed(),
//!     any![equals(json!("a")), min(3.0)].boxed(),
//! ];
//!
//! let results = run_all(&json!("b"), &rules);
//! assert_eq!(extract_errors(&results), ["any", "equal", "min"]);
//! ```

pub mod error;
pub mod kind;
pub mod result;
pub mod traits;
pub mod value;

pub use error::PatternError;
pub use kind::RuleKind;
pub use result::{ValidationResult, all_passed, extract_errors, run_all};
pub use traits::{Validate, ValidateExt, Validator, ValueSource};
pub use value::{coerce_to_string, deep_equal, is_blank_char, is_falsy, size_of};

// ============================================================================
// PRELUDE
// ============================================================================

/// Common imports for working with the validator foundation.
pub mod prelude {
    pub use super::{
        RuleKind, Validate, ValidateExt, ValidationResult, Validator, ValueSource, extract_errors,
        run_all,
    };
}
