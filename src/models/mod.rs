//! Core data models: request options and resolved URLs.

pub mod request;
pub mod url;

pub use request::{RequestOptions, UriValue};
pub use url::ResolvedUrl;
