//! NONE combinator - no operand may pass

use crate::Value;
use crate::foundation::{RuleKind, Validate, ValidationResult, Validator, run_all};

/// Passes when no flattened operand result passed.
#[derive(Debug, Clone)]
pub struct NoneOf {
    validators: Vec<Validator>,
}

impl NoneOf {
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

impl Validate for NoneOf {
    fn validate(&self, input: &Value) -> ValidationResult {
        let results = run_all(input, &self.validators);
        let passed = !results.iter().any(|result| result.passed);
        ValidationResult::new(RuleKind::None, passed).with_children(results)
    }
}

/// Creates a [`NoneOf`] combinator. See also the [`none!`](crate::none) macro.
pub fn none(validators: impl IntoIterator<Item = Validator>) -> NoneOf {
    NoneOf::new(validators)
}
