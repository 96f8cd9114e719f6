//! Value coercions shared by the built-in rules
//!
//! Field values are dynamic JSON values. These helpers define how rules
//! measure, compare and stringify them. All of them are total: no input
//! value makes them panic.

use serde_json::Number;

use crate::Value;

/// Measures a value for the size-based rules.
///
/// Numbers measure as themselves, strings as their character count after
/// trimming surrounding whitespace (see [`is_blank_char`]), arrays as their
/// length. Everything else,
/// including `null`, booleans and objects, measures as `0`.
///
/// # Examples
///
/// ```
/// use formstate_validator::foundation::size_of;
/// use serde_json::json;
///
/// assert_eq!(size_of(&json!(-2.5)), -2.5);
/// assert_eq!(size_of(&json!("  ab ")), 2.0);
/// assert_eq!(size_of(&json!([1, 2, 3])), 3.0);
/// assert_eq!(size_of(&json!({ "a": 1 })), 0.0);
/// ```
#[must_use]
pub fn size_of(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim_matches(is_blank_char).chars().count() as f64,
        Value::Array(items) => items.len() as f64,
        Value::Null | Value::Bool(_) | Value::Object(_) => 0.0,
    }
}

/// Characters trimmed from strings before measuring.
///
/// Unicode `White_Space` minus NEL (U+0085), plus the byte order mark
/// (U+FEFF). The email pattern uses the same set.
#[must_use]
pub fn is_blank_char(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

/// Returns true for `null`, `false`, `0` and the empty string.
#[must_use]
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f == 0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Converts a value to the string the pattern rules match against.
///
/// # Examples
///
/// ```
/// use formstate_validator::foundation::coerce_to_string;
/// use serde_json::json;
///
/// assert_eq!(coerce_to_string(&json!(null)), "null");
/// assert_eq!(coerce_to_string(&json!(2.0)), "2");
/// assert_eq!(coerce_to_string(&json!([1, null, "a"])), "1,,a");
/// assert_eq!(coerce_to_string(&json!({})), "[object Object]");
/// ```
#[must_use]
pub fn coerce_to_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_owned(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_to_string(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => coerce_to_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_owned(),
    }
}

fn number_to_string(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f == 0.0 => "0".to_owned(),
        Some(f) if f.abs() >= 1e21 || f.abs() < 1e-6 => exponent_notation(f),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

/// Shortest round-trip digits with an explicitly signed exponent: `1e+21`,
/// `-2.5e-7`.
fn exponent_notation(f: f64) -> String {
    let formatted = format!("{f:e}");
    match formatted.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => formatted,
    }
}

/// Structural equality where numbers compare by numeric value.
///
/// `json!(1)` and `json!(1.0)` are equal here although `serde_json` keeps
/// them apart.
#[must_use]
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => {
            if x.is_f64() || y.is_f64() {
                x.as_f64() == y.as_f64()
            } else {
                x == y
            }
        }
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| deep_equal(x, y))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(key, x)| ys.get(key).is_some_and(|y| deep_equal(x, y)))
        }
        _ => a == b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!(5), 5.0)]
    #[case(json!(-1), -1.0)]
    #[case(json!("   "), 0.0)]
    #[case(json!("  x  "), 1.0)]
    #[case(json!("   1 23   "), 4.0)]
    #[case(json!("\u{FEFF}"), 0.0)]
    #[case(json!("\u{FEFF} ab\u{3000}"), 2.0)]
    #[case(json!("\u{2028}x\u{2029}"), 1.0)]
    #[case(json!("\u{85}x"), 2.0)]
    #[case(json!([]), 0.0)]
    #[case(json!([1, 2]), 2.0)]
    #[case(json!(null), 0.0)]
    #[case(json!(true), 0.0)]
    #[case(json!({}), 0.0)]
    fn measures_values(#[case] value: Value, #[case] expected: f64) {
        assert_eq!(size_of(&value), expected);
    }

    #[rstest]
    #[case(json!(null), true)]
    #[case(json!(false), true)]
    #[case(json!(0), true)]
    #[case(json!(0.0), true)]
    #[case(json!(""), true)]
    #[case(json!(" "), false)]
    #[case(json!(true), false)]
    #[case(json!(-1), false)]
    #[case(json!([]), false)]
    #[case(json!({}), false)]
    fn falsiness(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(is_falsy(&value), expected);
    }

    #[rstest]
    #[case(json!("abc"), "abc")]
    #[case(json!(true), "true")]
    #[case(json!(12), "12")]
    #[case(json!(1.5), "1.5")]
    #[case(json!(-0.0), "0")]
    #[case(json!([1, [2, 3]]), "1,2,3")]
    #[case(json!(1e21), "1e+21")]
    #[case(json!(-1.5e22), "-1.5e+22")]
    #[case(json!(1e20), "100000000000000000000")]
    #[case(json!(1e-7), "1e-7")]
    #[case(json!(2.5e-7), "2.5e-7")]
    #[case(json!(0.000_001), "0.000001")]
    fn coerces_to_string(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(coerce_to_string(&value), expected);
    }

    #[test]
    fn deep_equal_compares_numbers_by_value() {
        assert!(deep_equal(&json!(1), &json!(1.0)));
        assert!(!deep_equal(&json!(0), &json!("0")));
        assert!(!deep_equal(&json!(null), &json!(0)));
    }

    #[test]
    fn deep_equal_recurses() {
        assert!(deep_equal(&json!([0]), &json!([0.0])));
        assert!(deep_equal(&json!({ "foo": "bar" }), &json!({ "foo": "bar" })));
        assert!(!deep_equal(&json!({ "foo": "bar" }), &json!({ "foo": "baz" })));
        assert!(!deep_equal(&json!({ "a": 1 }), &json!({ "a": 1, "b": 2 })));
        assert!(!deep_equal(&json!([1]), &json!([1, 1])));
    }
}
