//! format-url-template
//!
//! An HTTP client plugin that resolves `{ placeholder }` tokens in an
//! outgoing request's URL and query string, substituting values drawn from
//! the request's own option fields, with optional per-field value remapping.
//! It runs once per request as a pre-processing step before dispatch.
//!
//! # Architecture
//!
//! - **models**: request options, the resolved structured URL
//! - **template**: the resolution engine: placeholder parsing, key-path
//!   lookup, value remapping, rendering
//! - **format**: the URL and query-string formatters plus the
//!   percent-encoding pass
//! - **config**: plugin configuration and the per-call deep merge
//! - **plugin**: the entry point the host pipeline calls per request
//!
//! # Behavior
//!
//! Substitution is best-effort: a placeholder whose key path does not resolve
//! to a scalar keeps its literal token, and malformed brace syntax passes
//! through as plain text. The one hard error is a rendered URL that cannot be
//! parsed into any structured form ([`FormatError::InvalidUrl`]).
//!
//! # Usage
//!
//! ```
//! use format_url_template::{FormatUrlTemplate, RequestOptions, UriValue};
//!
//! let plugin = FormatUrlTemplate::default();
//! let options = RequestOptions::new()
//!     .with_uri("/api/foo/{ authType }/bar")
//!     .with_field("authType", "oauth");
//!
//! let resolved = plugin.load(&options).unwrap();
//! assert_eq!(
//!     resolved.uri.as_ref().map(UriValue::href),
//!     Some("/api/foo/oauth/bar"),
//! );
//! ```
//!
//! Query-string rendering is off by default; enable it (and customize the
//! remapping table) through [`PluginConfigOverride`], either at construction
//! or per request under `requestOptions.plugins.formatUrlTemplate`.

pub mod config;
pub mod format;
pub mod models;
pub mod plugin;
pub mod template;

pub use config::{PluginConfig, PluginConfigOverride};
pub use format::{encode_uri, FormatError};
pub use models::{RequestOptions, ResolvedUrl, UriValue};
pub use plugin::{FormatUrlTemplate, PLUGIN_NAME};
pub use template::{render_template, ValuesMap};
