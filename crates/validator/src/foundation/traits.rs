//! Core traits for the validation system
//!
//! This module defines the trait every validator implements, the
//! type-erased [`Validator`] handle, and the read-only [`ValueSource`]
//! accessor used by cross-field rules.

use std::fmt;
use std::sync::Arc;

use crate::Value;
use crate::combinators::Not;
use crate::foundation::ValidationResult;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators implement.
///
/// A validator is a pure function from a value to a [`ValidationResult`].
/// Validators never fail in the control-flow sense: every input, including
/// `null`, is legal and produces a result.
///
/// Any `Fn(&Value) -> ValidationResult` closure is a validator.
///
/// # Examples
///
/// ```
/// use formstate_validator::foundation::{Validate, ValidationResult};
/// use serde_json::{Value, json};
///
/// struct IsEven;
///
/// impl Validate for IsEven {
///     fn validate(&self, input: &Value) -> ValidationResult {
///         let even = input.as_i64().is_some_and(|n| n % 2 == 0);
///         ValidationResult::new("even", even)
///     }
/// }
///
/// assert!(IsEven.validate(&json!(4)).passed);
/// assert!(!IsEven.validate(&json!("4")).passed);
/// ```
pub trait Validate: Send + Sync {
    /// Tests the input value.
    fn validate(&self, input: &Value) -> ValidationResult;
}

impl<F> Validate for F
where
    F: Fn(&Value) -> ValidationResult + Send + Sync,
{
    fn validate(&self, input: &Value) -> ValidationResult {
        self(input)
    }
}

// ============================================================================
// TYPE-ERASED HANDLE
// ============================================================================

/// A shared, type-erased validator.
///
/// Cloning is cheap; the underlying rule is reference counted. Fields and
/// the variadic combinators store their rules as `Validator`s.
#[derive(Clone)]
pub struct Validator(Arc<dyn Validate>);

impl Validator {
    /// Wraps any validator.
    pub fn new(validator: impl Validate + 'static) -> Self {
        Self(Arc::new(validator))
    }

    /// Wraps a closure.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&Value) -> ValidationResult + Send + Sync + 'static,
    {
        Self::new(f)
    }
}

impl Validate for Validator {
    fn validate(&self, input: &Value) -> ValidationResult {
        self.0.validate(input)
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator").finish_non_exhaustive()
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// Automatically implemented for every sized [`Validate`] type.
pub trait ValidateExt: Validate + Sized {
    /// Inverts the validator.
    ///
    /// # Examples
    ///
    /// ```
    /// use formstate_validator::prelude::*;
    /// use serde_json::json;
    ///
    /// let not_one = equals(json!(1)).not();
    /// assert!(not_one.validate(&json!(2)).passed);
    /// assert!(!not_one.validate(&json!(1)).passed);
    /// ```
    fn not(self) -> Not<Self> {
        Not::new(self)
    }

    /// Erases the concrete type.
    fn boxed(self) -> Validator
    where
        Self: 'static,
    {
        Validator::new(self)
    }
}

impl<T: Validate> ValidateExt for T {}

// ============================================================================
// VALUE SOURCES
// ============================================================================

/// Read-only access to a value that lives elsewhere, typically another field.
///
/// Cross-field rules read the source on every run, so they always compare
/// against the current value rather than a copy taken at construction.
pub trait ValueSource: Send + Sync {
    /// Returns the current value.
    fn current_value(&self) -> Value;
}

impl<F> ValueSource for F
where
    F: Fn() -> Value + Send + Sync,
{
    fn current_value(&self) -> Value {
        self()
    }
}
