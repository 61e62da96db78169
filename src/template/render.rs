//! Template rendering: parser + resolver + values map, composed.
//!
//! Substitution is best-effort by design. A placeholder whose key path does
//! not resolve to a scalar is spliced back verbatim, braces and all; the host
//! pipeline never sees an error for a bad template. One pass only; a value
//! that itself contains brace syntax is not expanded again.

use super::parser::{parse_template, Segment};
use super::resolver::{resolve_path, top_level_key};
use super::values::ValuesMap;
use serde_json::Value;

/// Renders `template` against `context`, remapping through `values`.
///
/// For each placeholder: the key path is resolved against `context` (see
/// [`resolve_path`]); the result is stringified (strings verbatim, numbers and
/// booleans in canonical form); the top-level key name is then consulted in
/// `values` and the remapped value wins when present. Unresolved placeholders
/// keep their original token text.
///
/// # Examples
///
/// ```
/// use format_url_template::template::{render_template, ValuesMap};
/// use serde_json::json;
///
/// let mut values = ValuesMap::new();
/// values.insert("authType", "saml", "form");
///
/// let context = json!({ "authType": "saml" });
/// let rendered = render_template("/api/{ authType }/bar", &context, &values);
/// assert_eq!(rendered, "/api/form/bar");
/// ```
pub fn render_template(template: &str, context: &Value, values: &ValuesMap) -> String {
    // Fast path: nothing that could open a placeholder.
    if !template.contains('{') {
        return template.to_string();
    }

    let mut output = String::with_capacity(template.len());
    for segment in parse_template(template) {
        match segment {
            Segment::Literal(text) => output.push_str(&text),
            Segment::Placeholder { key, raw } => match resolve_path(context, &key) {
                Some(value) => {
                    let rendered = stringify(value);
                    match values.remap(top_level_key(&key), &rendered) {
                        Some(mapped) => output.push_str(mapped),
                        None => output.push_str(&rendered),
                    }
                }
                None => output.push_str(&raw),
            },
        }
    }
    output
}

/// Canonical string form of a scalar: strings verbatim, everything else via
/// its JSON representation (`3` → `"3"`, `true` → `"true"`).
fn stringify(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
