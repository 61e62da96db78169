//! Formatting of the two request fields the plugin rewrites.
//!
//! `url` renders and reparses the request target; `query` renders the
//! string-valued entries of the query map; `encode` is the percent-encoding
//! pass between rendering and reparsing.

pub mod encode;
pub mod error;
pub mod query;
pub mod url;

pub use encode::encode_uri;
pub use error::FormatError;
pub use query::format_query;
pub use url::format_uri;
