//! Pattern validators
//!
//! Both rules coerce the input to a string first (see
//! [`coerce_to_string`]) and search it with a regular expression.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use crate::Value;
use crate::foundation::{PatternError, RuleKind, Validate, ValidationResult, coerce_to_string};

// Blank characters are those of `is_blank_char` (`\s` minus NEL, plus BOM);
// the quoted local part excludes line terminators.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"^(([^<>()\[\]\\.,;:@"\x{FEFF}[\s--\x{85}]]+(\.[^<>()\[\]\\.,;:@"\x{FEFF}[\s--\x{85}]]+)*)"#,
        r#"|("[^\n\r\x{2028}\x{2029}]+"))"#,
        r#"@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
    ))
    .expect("email pattern is valid")
});

// ============================================================================
// EMAIL
// ============================================================================

crate::rule! {
    /// Passes for values that look like an email address.
    ///
    /// Accepts a dot-separated local part or a quoted one, followed by either
    /// a bracketed IPv4 literal or a domain ending in a label of at least two
    /// letters. Matching is case-insensitive.
    pub Email {} => RuleKind::Email;
    check(self, input) { EMAIL_REGEX.is_match(&coerce_to_string(input).to_lowercase()) }
    fn email();
}

// ============================================================================
// REGEX
// ============================================================================

/// Passes when the coerced string contains a match of the pattern.
///
/// The search is unanchored; anchor the pattern with `^`/`$` to match the
/// whole value.
#[derive(Debug, Clone)]
pub struct Matches {
    regex: Regex,
    kind: Cow<'static, str>,
}

impl Matches {
    /// Creates the rule from a compiled regular expression.
    #[must_use]
    pub fn new(regex: Regex) -> Self {
        Self {
            regex,
            kind: RuleKind::Regex.into(),
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

    /// Returns the pattern source.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl Validate for Matches {
    fn validate(&self, input: &Value) -> ValidationResult {
        let passed = self.regex.is_match(&coerce_to_string(input));
        ValidationResult::new(self.kind.clone(), passed)
    }
}

impl From<Regex> for Matches {
    fn from(regex: Regex) -> Self {
        Self::new(regex)
    }
}

/// Compiles `pattern` into a [`Matches`] rule.
///
/// # Errors
///
/// Returns [`PatternError::Invalid`] when the pattern does not compile.
///
/// # Examples
///
/// ```
/// use formstate_validator::validators::matches;
/// use formstate_validator::foundation::Validate;
/// use serde_json::json;
///
/// let rule = matches("abc")?;
/// assert!(rule.validate(&json!("xabcx")).passed);
/// assert!(!rule.validate(&json!("a-c")).passed);
/// assert!(matches("(").is_err());
/// # Ok::<(), formstate_validator::foundation::PatternError>(())
/// ```
pub fn matches(pattern: &str) -> Result<Matches, PatternError> {
    Regex::new(pattern)
        .map(Matches::new)
        .map_err(|source| PatternError::Invalid {
            pattern: pattern.to_owned(),
            source,
        })
}
