//! Error type for the formatting step.
//!
//! Substitution itself never fails; the single hard error is a rendered URL
//! that cannot be parsed into any structured form at all.

use std::fmt;

/// Errors that can abort the formatting step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The rendered, encoded URL string could not be parsed.
    ///
    /// Carries the offending string and the parser's reason, so the host can
    /// report which request target was unusable.
    InvalidUrl {
        /// The string that failed to parse
        url: String,
        /// Why the URL parser rejected it
        reason: String,
    },
}

impl FormatError {
    /// Builds an `InvalidUrl` from the offending string and the underlying
    /// parse error.
    pub fn invalid_url(url: impl Into<String>, reason: impl fmt::Display) -> Self {
        FormatError::InvalidUrl {
            url: url.into(),
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::InvalidUrl { url, reason } => {
                write!(
                    f,
                    "Invalid URL '{}' after template substitution: {}",
                    url, reason
                )
            }
        }
    }
}

impl std::error::Error for FormatError {}
