//! Presence validator
//!
//! [`Required`] decides whether a field holds anything at all.

use crate::Value;
use crate::foundation::{RuleKind, size_of};

crate::rule! {
    /// Passes when the value is present.
    ///
    /// Present means `true`, a non-empty array, any object (even an empty
    /// one), or anything whose [`size_of`] is non-zero. `null`, `false`,
    /// `0`, blank strings and empty arrays are missing.
    ///
    /// # Examples
    ///
    /// ```
    /// use formstate_validator::validators::required;
    /// use formstate_validator::foundation::Validate;
    /// use serde_json::json;
    ///
    /// assert!(required().validate(&json!("foo")).passed);
    /// assert!(required().validate(&json!({})).passed);
    /// assert!(!required().validate(&json!("   ")).passed);
    /// assert!(!required().validate(&json!([])).passed);
    /// ```
    pub Required {} => RuleKind::Required;
    check(self, input) { is_present(input) }
    fn required();
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Array(items) => !items.is_empty(),
        Value::Object(_) => true,
        other => size_of(other) != 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!(true), true)]
    #[case(json!(false), false)]
    #[case(json!(null), false)]
    #[case(json!(""), false)]
    #[case(json!("foo"), true)]
    #[case(json!(" \t\n"), false)]
    #[case(json!("\u{FEFF}"), false)]
    #[case(json!("\u{A0}\u{2028}"), false)]
    #[case(json!("\u{85}"), true)]
    #[case(json!(0), false)]
    #[case(json!(1), true)]
    #[case(json!(-1), true)]
    #[case(json!({}), true)]
    #[case(json!([]), false)]
    #[case(json!([1]), true)]
    fn required_cases(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(required().validate(&value).passed, expected);
    }

    #[test]
    fn default_and_custom_kind() {
        assert_eq!(required().validate(&json!(true)).kind, "required");
        assert_eq!(required().validate(&json!(false)).kind, "required");
        assert_eq!(required().with_kind("foo").validate(&json!(true)).kind, "foo");
        assert_eq!(required().with_kind("foo").validate(&json!(false)).kind, "foo");
    }
}
