//! Size validators
//!
//! All rules here compare [`size_of`] of the input against `f64` bounds, so
//! the same rule measures numbers, trimmed strings and arrays. A `NaN` bound
//! (the representation of a malformed bound) makes every comparison fail.

use crate::foundation::{RuleKind, size_of};

// ============================================================================
// MIN
// ============================================================================

crate::rule! {
    /// Passes when the size of the value is at least the bound.
    pub Min { bound: f64 } => RuleKind::Min;
    check(self, input) { size_of(input) >= self.bound }
}

/// Creates a validator that checks `size_of(value) >= bound`.
///
/// # Examples
///
/// ```
/// use formstate_validator::validators::min;
/// use formstate_validator::foundation::Validate;
/// use serde_json::json;
///
/// assert!(min(2).validate(&json!("12")).passed);
/// assert!(!min(2).validate(&json!([1])).passed);
/// assert!(min(-2).validate(&json!(-1)).passed);
/// ```
#[must_use]
pub fn min(bound: impl Into<f64>) -> Min {
    Min::new(bound.into())
}

// ============================================================================
// MAX
// ============================================================================

crate::rule! {
    /// Passes when the size of the value is at most the bound.
    pub Max { bound: f64 } => RuleKind::Max;
    check(self, input) { size_of(input) <= self.bound }
}

/// Creates a validator that checks `size_of(value) <= bound`.
#[must_use]
pub fn max(bound: impl Into<f64>) -> Max {
    Max::new(bound.into())
}

// ============================================================================
// RANGE
// ============================================================================

crate::rule! {
    /// Passes when both the lower and the upper bound hold.
    ///
    /// Produces a single leaf result; the bound checks are not reported
    /// separately.
    pub Range { min: f64, max: f64 } => RuleKind::Range;
    check(self, input) {
        let size = size_of(input);
        size >= self.min && size <= self.max
    }
}

/// Creates a validator that checks `min <= size_of(value) <= max`.
///
/// # Examples
///
/// ```
/// use formstate_validator::validators::range;
/// use formstate_validator::foundation::Validate;
/// use serde_json::json;
///
/// assert!(range(1, 10).validate(&json!(5)).passed);
/// assert!(!range(1, 2).validate(&json!("000")).passed);
/// assert!(range(-1, 2).validate(&json!({})).passed);
/// ```
#[must_use]
pub fn range(min: impl Into<f64>, max: impl Into<f64>) -> Range {
    Range::new(min.into(), max.into())
}

// ============================================================================
// EXACT SIZE
// ============================================================================

crate::rule! {
    /// Passes when the size of the value equals the bound exactly.
    pub Size { size: f64 } => RuleKind::Size;
    check(self, input) { size_of(input) == self.size }
}

/// Creates a validator that checks `size_of(value) == size`.
#[must_use]
pub fn size(size: impl Into<f64>) -> Size {
    Size::new(size.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Value;
    use crate::foundation::Validate;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(1.0, json!(1), true)]
    #[case(2.0, json!(1), false)]
    #[case(1.0, json!(2), true)]
    #[case(-1.0, json!(2), true)]
    #[case(-1.0, json!(-2), false)]
    #[case(-2.0, json!(-1), true)]
    #[case(2.0, json!([1, 2, 3]), true)]
    #[case(2.0, json!([1, 2]), true)]
    #[case(2.0, json!([1]), false)]
    #[case(-2.0, json!([1]), true)]
    #[case(2.0, json!("1"), false)]
    #[case(2.0, json!("12"), true)]
    #[case(-1.0, json!("123"), true)]
    #[case(1.0, json!("   "), false)]
    #[case(2.0, json!("5"), false)]
    #[case(1.0, json!({}), false)]
    #[case(0.0, json!(null), true)]
    #[case(1.0, json!(null), false)]
    fn min_cases(#[case] bound: f64, #[case] value: Value, #[case] expected: bool) {
        assert_eq!(min(bound).validate(&value).passed, expected);
    }

    #[rstest]
    #[case(1.0, json!(1), true)]
    #[case(2.0, json!(1), true)]
    #[case(1.0, json!(2), false)]
    #[case(-1.0, json!(-2), true)]
    #[case(1.0, json!("1"), true)]
    #[case(1.0, json!("5"), true)]
    #[case(1.0, json!("00"), false)]
    #[case(3.0, json!("   123   "), true)]
    #[case(3.0, json!("   1 23   "), false)]
    #[case(0.0, json!([]), true)]
    #[case(1.0, json!([1, 2]), false)]
    #[case(-1.0, json!([]), false)]
    #[case(0.0, json!(null), true)]
    #[case(-1.0, json!(null), false)]
    fn max_cases(#[case] bound: f64, #[case] value: Value, #[case] expected: bool) {
        assert_eq!(max(bound).validate(&value).passed, expected);
    }

    #[rstest]
    #[case(0.0, 0.0, json!(0), true)]
    #[case(1.0, 10.0, json!(0), false)]
    #[case(1.0, 10.0, json!(11), false)]
    #[case(1.0, 10.0, json!(5), true)]
    #[case(1.0, 2.0, json!(""), false)]
    #[case(1.0, 2.0, json!("0"), true)]
    #[case(1.0, 2.0, json!("000"), false)]
    #[case(1.0, 2.0, json!([]), false)]
    #[case(1.0, 2.0, json!([5]), true)]
    #[case(1.0, 2.0, json!([5, 5, 5]), false)]
    #[case(1.0, 2.0, json!({}), false)]
    #[case(-1.0, 2.0, json!({}), true)]
    fn range_cases(#[case] lo: f64, #[case] hi: f64, #[case] value: Value, #[case] expected: bool) {
        assert_eq!(range(lo, hi).validate(&value).passed, expected);
    }

    #[rstest]
    #[case(0.0, json!(0), true)]
    #[case(5.0, json!(5), true)]
    #[case(0.0, json!(null), true)]
    #[case(0.0, json!({}), true)]
    #[case(0.0, json!([]), true)]
    #[case(1.0, json!([]), false)]
    #[case(0.0, json!([1]), false)]
    #[case(0.0, json!(""), true)]
    #[case(0.0, json!("   "), true)]
    #[case(1.0, json!("  x  "), true)]
    fn size_cases(#[case] bound: f64, #[case] value: Value, #[case] expected: bool) {
        assert_eq!(size(bound).validate(&value).passed, expected);
    }

    #[test]
    fn nan_bounds_never_pass() {
        assert!(!min(f64::NAN).validate(&json!(1)).passed);
        assert!(!max(f64::NAN).validate(&json!(0)).passed);
        assert!(!size(f64::NAN).validate(&json!(null)).passed);
    }

    #[test]
    fn kinds() {
        assert_eq!(min(2).validate(&json!(3)).kind, "min");
        assert_eq!(max(2).validate(&json!(1)).kind, "max");
        assert_eq!(range(0, 2).validate(&json!(6)).kind, "range");
        assert_eq!(size(1).validate(&json!([1, 2])).kind, "size");
        assert_eq!(min(2).with_kind("foo").validate(&json!(1)).kind, "foo");
        assert_eq!(range(0, 2).with_kind("foo").validate(&json!(1)).kind, "foo");
    }
}
