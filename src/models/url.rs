//! Structured URL produced by the URL formatter.
//!
//! Request targets come in two shapes: absolute URLs
//! (`https://host/api/foo`) and relative references (`/api/foo`). The `url`
//! crate only parses the former, so relative references get a small manual
//! split into path/query/fragment, matching what the surrounding HTTP
//! tooling expects from a parsed target.

use crate::format::FormatError;
use serde::{Deserialize, Serialize};
use url::Url;

/// A parsed request target.
///
/// For relative references `scheme`, `host` and `port` are `None` and `path`
/// holds the reference itself. `href` always carries the full original string
/// so the target can be round-tripped without loss.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedUrl {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fragment: Option<String>,
    /// The complete URL string this value was parsed from.
    pub href: String,
}

impl ResolvedUrl {
    /// Parses an absolute URL or relative reference into its components.
    ///
    /// Absolute URLs go through the `url` crate and fail hard on anything it
    /// rejects (empty host, bad port, and so on). Strings without a scheme
    /// are treated as relative references and split on the first `#` and `?`.
    pub fn parse(input: &str) -> Result<Self, FormatError> {
        match Url::parse(input) {
            Ok(url) => Ok(Self::from_absolute(&url)),
            Err(url::ParseError::RelativeUrlWithoutBase) => Ok(Self::from_relative(input)),
            Err(err) => Err(FormatError::invalid_url(input, err)),
        }
    }

    fn from_absolute(url: &Url) -> Self {
        Self {
            scheme: Some(url.scheme().to_string()),
            host: url.host_str().map(str::to_string),
            port: url.port(),
            path: url.path().to_string(),
            query: url.query().map(str::to_string),
            fragment: url.fragment().map(str::to_string),
            href: url.as_str().to_string(),
        }
    }

    fn from_relative(input: &str) -> Self {
        let (without_fragment, fragment) = match input.split_once('#') {
            Some((head, frag)) => (head, Some(frag.to_string())),
            None => (input, None),
        };
        let (path, query) = match without_fragment.split_once('?') {
            Some((head, query)) => (head, Some(query.to_string())),
            None => (without_fragment, None),
        };
        Self {
            scheme: None,
            host: None,
            port: None,
            path: path.to_string(),
            query,
            fragment,
            href: input.to_string(),
        }
    }

    /// The full URL string.
    pub fn href(&self) -> &str {
        &self.href
    }

    /// Whether this target carries a scheme (i.e. was an absolute URL).
    pub fn is_absolute(&self) -> bool {
        self.scheme.is_some()
    }
}

impl std::fmt::Display for ResolvedUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.href)
    }
}
