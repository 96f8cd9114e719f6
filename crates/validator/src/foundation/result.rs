//! Validation result trees
//!
//! Every validator produces a [`ValidationResult`]. Leaf rules produce a node
//! without children; combinators attach the flattened results of their
//! operands as children. [`run_all`] linearizes results and
//! [`extract_errors`] reduces them to the list of failing kinds.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::Value;
use crate::foundation::Validate;

/// A single node in a validation result tree.
///
/// `kind` is a tag naming the rule that produced the node (for example
/// `"required"` or a caller supplied override), not a human readable message.
///
/// # Examples
///
/// ```
/// use formstate_validator::foundation::ValidationResult;
///
/// let result = ValidationResult::fail("all")
///     .with_children(vec![ValidationResult::ok("min"), ValidationResult::fail("max")]);
///
/// let kinds: Vec<_> = result.flatten().into_iter().map(|r| r.kind).collect();
/// assert_eq!(kinds, ["all", "min", "max"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Tag of the rule that produced this node.
    pub kind: Cow<'static, str>,
    /// Whether the rule passed.
    pub passed: bool,
    /// Results of sub-validators, empty for leaf rules.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ValidationResult>,
}

impl ValidationResult {
    /// Creates a leaf result.
    pub fn new(kind: impl Into<Cow<'static, str>>, passed: bool) -> Self {
        Self {
            kind: kind.into(),
            passed,
            children: Vec::new(),
        }
    }

    /// Creates a passing leaf result.
    pub fn ok(kind: impl Into<Cow<'static, str>>) -> Self {
        Self::new(kind, true)
    }

    /// Creates a failing leaf result.
    pub fn fail(kind: impl Into<Cow<'static, str>>) -> Self {
        Self::new(kind, false)
    }

    /// Attaches child results, replacing any existing ones.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_children(mut self, children: Vec<ValidationResult>) -> Self {
        self.children = children;
        self
    }

    /// Returns the same node with `passed` flipped.
    ///
    /// Children are carried over untouched.
    #[must_use]
    pub fn invert(mut self) -> Self {
        self.passed = !self.passed;
        self
    }

    /// Returns true if this node has no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Linearizes the tree in pre-order.
    ///
    /// A passing node is emitted as-is; its children stay attached and are
    /// not expanded. A failing node is emitted with its children still
    /// attached, followed by each child flattened by the same rule.
    ///
    /// Combinators store flattened operand results as their children, so a
    /// failing combinator nested in another one reports its inner failures
    /// once for each enclosing level.
    #[must_use]
    pub fn flatten(self) -> Vec<ValidationResult> {
        let mut out = Vec::new();
        self.flatten_into(&mut out);
        out
    }

    fn flatten_into(self, out: &mut Vec<ValidationResult>) {
        // Explicit stack so arbitrarily deep nesting cannot overflow.
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if node.passed || node.children.is_empty() {
                out.push(node);
                continue;
            }
            stack.extend(node.children.iter().rev().cloned());
            out.push(node);
        }
    }
}

impl std::fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = if self.passed { "ok" } else { "fail" };
        write!(f, "{}: {status}", self.kind)?;
        if !self.children.is_empty() {
            write!(f, " ({} children)", self.children.len())?;
        }
        Ok(())
    }
}

// ============================================================================
// RUNNING & EXTRACTION
// ============================================================================

/// Runs every validator against `value` and flattens the results.
///
/// Output order follows the order of `validators`; each result is expanded
/// in place as described in [`ValidationResult::flatten`].
///
/// # Examples
///
/// ```
/// use formstate_validator::foundation::{Validator, run_all, extract_errors};
/// use formstate_validator::validators::{max, min};
/// use serde_json::json;
///
/// let rules = [Validator::new(min(3.0)), Validator::new(max(5.0))];
/// let results = run_all(&json!("hi"), &rules);
/// assert_eq!(extract_errors(&results), ["min"]);
/// ```
pub fn run_all<'a, I, V>(value: &Value, validators: I) -> Vec<ValidationResult>
where
    I: IntoIterator<Item = &'a V>,
    V: Validate + ?Sized + 'a,
{
    let mut out = Vec::new();
    for validator in validators {
        validator.validate(value).flatten_into(&mut out);
    }
    out
}

/// Collects the kinds of every failing result, preserving input order.
#[must_use]
pub fn extract_errors(results: &[ValidationResult]) -> Vec<String> {
    results
        .iter()
        .filter(|result| !result.passed)
        .map(|result| result.kind.to_string())
        .collect()
}

/// Returns true if every result passed (vacuously true when empty).
#[must_use]
pub fn all_passed(results: &[ValidationResult]) -> bool {
    results.iter().all(|result| result.passed)
}
