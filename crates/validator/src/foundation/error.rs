//! Construction-time errors
//!
//! Validation outcomes are data ([`ValidationResult`](super::ValidationResult)),
//! never errors. The only fallible step is building a rule from a
//! malformed configuration such as an invalid regular expression.

/// Error raised while constructing a rule.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PatternError {
    /// The regular expression did not compile.
    #[error("invalid pattern `{pattern}`: {source}")]
    Invalid {
        /// The pattern as supplied.
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl PatternError {
    /// Returns the offending pattern.
    #[must_use]
    pub fn pattern(&self) -> &str {
        match self {
            Self::Invalid { pattern, .. } => pattern,
        }
    }
}
