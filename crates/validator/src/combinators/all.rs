//! ALL combinator - every operand must pass

use crate::Value;
use crate::foundation::{RuleKind, Validate, ValidationResult, Validator, all_passed, run_all};

/// Passes when every flattened operand result passed.
///
/// With no operands the combinator passes vacuously.
///
/// # Examples
///
/// ```
/// use formstate_validator::prelude::*;
/// use serde_json::json;
///
/// let validator = all![required(), max(3)];
/// assert!(validator.validate(&json!("abc")).passed);
///
/// let result = validator.validate(&json!("abcd"));
/// assert_eq!(extract_errors(&result.flatten()), ["all", "max"]);
/// ```
#[derive(Debug, Clone)]
pub struct AllOf {
    validators: Vec<Validator>,
}

impl AllOf {
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

impl Validate for AllOf {
    fn validate(&self, input: &Value) -> ValidationResult {
        let results = run_all(input, &self.validators);
        ValidationResult::new(RuleKind::All, all_passed(&results)).with_children(results)
    }
}

/// Creates an [`AllOf`] combinator. See also the [`all!`](crate::all) macro.
pub fn all(validators: impl IntoIterator<Item = Validator>) -> AllOf {
    AllOf::new(validators)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{ValidateExt, extract_errors};
    use crate::validators::{equals, min};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn passes_when_every_operand_passes() {
        assert!(all([equals(1).boxed(), equals(1).boxed()]).validate(&json!(1)).passed);
        assert!(crate::all![equals(1), equals(1), equals(1)].validate(&json!(1)).passed);
    }

    #[test]
    fn fails_when_one_operand_fails() {
        let result = crate::all![equals(1), min(2)].validate(&json!(1));
        assert!(!result.passed);
        assert_eq!(result.kind, "all");
        assert_eq!(extract_errors(&result.flatten()), ["all", "min"]);
    }

    #[test]
    fn empty_is_vacuously_true() {
        let validator = all(Vec::new());
        assert!(validator.validate(&json!(null)).passed);
        assert!(validator.validators().is_empty());
    }

    #[test]
    fn children_are_flattened_operand_results() {
        let inner = crate::all![equals(2), min(5)];
        let result = crate::all![inner, equals(1)].validate(&json!(1));
        let kinds: Vec<_> = result.children.iter().map(|r| &*r.kind).collect();
        assert_eq!(kinds, ["all", "equal", "min", "equal"]);
    }
}
