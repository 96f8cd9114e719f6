//! Prelude module for convenient imports.
//!
//! Provides a single `use formstate_validator::prelude::*;` import that brings
//! in the traits, result types, built-in rules, combinators and macros.
//!
//! # Examples
//!
//! ```
//! use formstate_validator::prelude::*;
//! use serde_json::json;
//!
//! let username = all![required(), range(3, 20)];
//! let results = run_all(&json!("al"), [&username]);
//! assert_eq!(extract_errors(&results), ["all", "range"]);
//! ```

// ============================================================================
// FOUNDATION: Core traits and results
// ============================================================================

pub use crate::foundation::{
    RuleKind, Validate, ValidateExt, ValidationResult, Validator, ValueSource, all_passed,
    extract_errors, run_all,
};

// ============================================================================
// VALIDATORS: All built-in rules
// ============================================================================

pub use crate::validators::{
    Email, Equals, EqualsField, Matches, Max, Min, Range, Required, Size, email, equals,
    equals_field, matches, max, min, range, required, size,
};

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{AllOf, AnyOf, Either, NoneOf, Not, all, any, either, none, not};

// ============================================================================
// MACROS
// ============================================================================

pub use crate::{all, any, none};
