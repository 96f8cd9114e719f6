//! Canonical rule tags
//!
//! Each built-in rule tags its results with a fixed kind unless the caller
//! overrides it. The tags are part of the public contract: they end up in
//! field error lists and are matched on by UI code.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Default tag of every built-in rule and combinator.
///
/// `not` has no tag of its own; it keeps the kind of the result it inverts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    /// Every flattened operand result passed.
    All,
    /// At least one flattened operand result passed.
    Any,
    /// No flattened operand result passed.
    None,
    /// Exactly one flattened operand result passed.
    Either,
    /// Value is present.
    Required,
    /// Size is at least a bound.
    Min,
    /// Size is at most a bound.
    Max,
    /// Size lies within inclusive bounds.
    Range,
    /// Size equals a bound.
    Size,
    /// Value deep-equals an expected value or another field.
    Equal,
    /// Value looks like an email address.
    Email,
    /// Value matches a regular expression.
    Regex,
}

impl RuleKind {
    /// Returns the tag as it appears in results.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Any => "any",
            Self::None => "none",
            Self::Either => "either",
            Self::Required => "required",
            Self::Min => "min",
            Self::Max => "max",
            Self::Range => "range",
            Self::Size => "size",
            Self::Equal => "equal",
            Self::Email => "email",
            Self::Regex => "regex",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<RuleKind> for Cow<'static, str> {
    fn from(kind: RuleKind) -> Self {
        Cow::Borrowed(kind.as_str())
    }
}
