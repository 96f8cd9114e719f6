//! Equality validators
//!
//! [`Equals`] compares against a fixed value, [`EqualsField`] against the
//! live value of another source (usually a field) read on every run.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::Value;
use crate::foundation::{RuleKind, Validate, ValidationResult, ValueSource, deep_equal};

// ============================================================================
// EQUALS
// ============================================================================

crate::rule! {
    /// Passes when the value is structurally equal to the expected value.
    ///
    /// Numbers compare by numeric value, so `1` equals `1.0`.
    pub Equals { expected: Value } => RuleKind::Equal;
    check(self, input) { deep_equal(input, &self.expected) }
}

impl Equals {
    /// Returns the value this rule compares against.
    #[must_use]
    pub fn expected(&self) -> &Value {
        &self.expected
    }
}

/// Creates a validator comparing against a fixed value.
///
/// # Examples
///
/// ```
/// use formstate_validator::validators::equals;
/// use formstate_validator::foundation::Validate;
/// use serde_json::json;
///
/// assert!(equals(1).validate(&json!(1.0)).passed);
/// assert!(equals(json!({ "foo": "bar" })).validate(&json!({ "foo": "bar" })).passed);
/// assert!(!equals("0").validate(&json!(0)).passed);
/// ```
#[must_use]
pub fn equals(expected: impl Into<Value>) -> Equals {
    Equals::new(expected.into())
}

// ============================================================================
// EQUALS FIELD
// ============================================================================

/// Passes when the value equals the current value of another source.
///
/// The source is read at validation time, never captured. A source that has
/// no value yet reads as whatever it currently holds (typically `null`).
#[derive(Clone)]
pub struct EqualsField {
    source: Arc<dyn ValueSource>,
    kind: Cow<'static, str>,
}

impl EqualsField {
    /// Creates the rule with the `equal` kind.
    pub fn new(source: impl ValueSource + 'static) -> Self {
        Self {
            source: Arc::new(source),
            kind: RuleKind::Equal.into(),
        }
    }

    /// Overrides the kind tag reported in results.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_kind(mut self, kind: impl Into<Cow<'static, str>>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Returns the kind tag reported in results.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }
}

impl Validate for EqualsField {
    fn validate(&self, input: &Value) -> ValidationResult {
        let other = self.source.current_value();
        ValidationResult::new(self.kind.clone(), deep_equal(&other, input))
    }
}

impl fmt::Debug for EqualsField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EqualsField")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// Creates a validator comparing against the live value of `source`.
pub fn equals_field(source: impl ValueSource + 'static) -> EqualsField {
    EqualsField::new(source)
}
