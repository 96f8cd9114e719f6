//! EITHER combinator - exclusive or of two validators

use crate::Value;
use crate::foundation::{RuleKind, Validate, ValidationResult};

/// Passes when exactly one result passed among the flattened results of
/// both operands.
///
/// The count runs over the flattened list, so an operand that is itself a
/// failing combinator contributes its own entry and its children. For two
/// leaf operands this is plain exclusive or.
///
/// # Examples
///
/// ```
/// use formstate_validator::combinators::either;
/// use formstate_validator::foundation::Validate;
/// use formstate_validator::validators::equals;
/// use serde_json::json;
///
/// assert!(either(equals(1), equals(2)).validate(&json!(2)).passed);
/// assert!(!either(equals(1), equals(1)).validate(&json!(1)).passed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Either<A, B> {
    pub(crate) first: A,
    pub(crate) second: B,
}

impl<A, B> Either<A, B> {
    /// Creates a new `Either` combinator.
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// Extracts both operands.
    pub fn into_parts(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A, B> Validate for Either<A, B>
where
    A: Validate,
    B: Validate,
{
    fn validate(&self, input: &Value) -> ValidationResult {
        let mut results = self.first.validate(input).flatten();
        results.extend(self.second.validate(input).flatten());
        let count = results.iter().filter(|result| result.passed).count();
        ValidationResult::new(RuleKind::Either, count == 1).with_children(results)
    }
}

/// Creates an [`Either`] combinator.
pub fn either<A, B>(first: A, second: B) -> Either<A, B>
where
    A: Validate,
    B: Validate,
{
    Either::new(first, second)
}
