//! NOT combinator - logical negation of validators
//!
//! This module provides the [`Not`] combinator which inverts the result
//! of a validator - it passes when the inner validator fails and vice versa.
//!
//! # Examples
//!
//! ```
//! use formstate_validator::combinators::Not;
//! use formstate_validator::foundation::Validate;
//! use formstate_validator::validators::equals;
//! use serde_json::json;
//!
//! let validator = Not::new(equals("admin"));
//! assert!(validator.validate(&json!("user123")).passed);
//! assert!(!validator.validate(&json!("admin")).passed);
//! ```

use crate::Value;
use crate::foundation::{Validate, ValidationResult};

/// Inverts a validator with logical NOT.
///
/// Only `passed` flips. The kind and any children of the inner result are
/// kept, so `not(not(v))` reports exactly what `v` reports.
///
/// # Type Parameters
///
/// * `V` - The inner validator type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Not<V> {
    /// The inner validator to invert.
    pub(crate) inner: V,
}

impl<V> Not<V> {
    /// Creates a new `Not` combinator.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for Not<V>
where
    V: Validate,
{
    fn validate(&self, input: &Value) -> ValidationResult {
        self.inner.validate(input).invert()
    }
}

/// Creates a `Not` combinator from a validator.
///
/// # Examples
///
/// ```
/// use formstate_validator::combinators::not;
/// use formstate_validator::foundation::Validate;
/// use formstate_validator::validators::equals;
/// use serde_json::json;
///
/// let validator = not(equals(1));
/// assert!(validator.validate(&json!(2)).passed);
/// ```
pub fn not<V>(validator: V) -> Not<V> {
    Not::new(validator)
}
