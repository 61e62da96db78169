//! Query-string formatting.

use crate::config::PluginConfig;
use crate::models::RequestOptions;
use crate::template::render_template;
use serde_json::{Map, Value};

/// Produces the request's new `qs` field.
///
/// When `applyToQueryString` is off or the request has no query map, the
/// original field comes back unchanged. Otherwise every string value in the
/// map is rendered against the full request options; numbers, booleans,
/// arrays, and nested objects are copied as-is. Key order is preserved.
///
/// Query formatting cannot fail: an unresolved placeholder stays in the value
/// as literal text, and nothing here is reparsed.
pub fn format_query(options: &RequestOptions, config: &PluginConfig) -> Option<Map<String, Value>> {
    let qs = match &options.qs {
        Some(qs) if config.apply_to_query_string => qs,
        other => return other.clone(),
    };

    let context = options.lookup_context();
    let mut output = Map::new();
    for (key, value) in qs {
        let rendered = match value {
            Value::String(text) => {
                Value::String(render_template(text, &context, &config.values_map))
            }
            other => other.clone(),
        };
        output.insert(key.clone(), rendered);
    }

    Some(output)
}
