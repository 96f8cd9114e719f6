//! ANY combinator - at least one operand must pass

use crate::Value;
use crate::foundation::{RuleKind, Validate, ValidationResult, Validator, run_all};

/// Passes when at least one flattened operand result passed.
///
/// With no operands the combinator fails.
#[derive(Debug, Clone)]
pub struct AnyOf {
    validators: Vec<Validator>,
}

impl AnyOf {
    /// Creates the combinator over `validators`.
    pub fn new(validators: impl IntoIterator<Item = Validator>) -> Self {
        Self {
            validators: validators.into_iter().collect(),
        }
    }

    /// Returns the operands in evaluation order.
    #[must_use]
    pub fn validators(&self) -> &[Validator] {
        &self.validators
    }
}

impl Validate for AnyOf {
    fn validate(&self, input: &Value) -> ValidationResult {
        let results = run_all(input, &self.validators);
        let passed = results.iter().any(|result| result.passed);
        ValidationResult::new(RuleKind::Any, passed).with_children(results)
    }
}

/// Creates an [`AnyOf`] combinator. See also the [`any!`](crate::any) macro.
pub fn any(validators: impl IntoIterator<Item = Validator>) -> AnyOf {
    AnyOf::new(validators)
}
