//! Error handling for formstate-log

/// Errors raised while installing the global subscriber.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum LogError {
    /// The filter directives did not parse.
    #[error("invalid filter '{filter}': {reason}")]
    Filter {
        /// The directives as configured.
        filter: String,
        /// Parser message.
        reason: String,
    },

    /// A global subscriber is already installed.
    #[error("failed to install subscriber: {0}")]
    Init(String),
}

/// Result alias for logging setup.
pub type LogResult<T> = Result<T, LogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = LogError::Filter {
            filter: "x=bogus".into(),
            reason: "invalid level".into(),
        };
        assert!(err.to_string().contains("invalid filter 'x=bogus'"));
        assert!(LogError::Init("set".into()).to_string().ends_with("set"));
    }
}
