//! Template resolution engine.
//!
//! This module owns the logic of turning a template string like
//! `/api/{ authType }/bar` into its substituted form: tokenizing placeholders,
//! resolving key paths against the request options, and remapping resolved
//! values through a configured table.

pub mod parser;
pub mod render;
pub mod resolver;
pub mod values;

pub use parser::{parse_template, Segment};
pub use render::render_template;
pub use resolver::{resolve_path, top_level_key};
pub use values::ValuesMap;
