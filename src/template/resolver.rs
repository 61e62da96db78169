//! Key-path resolution against the request-options tree.
//!
//! A key path addresses a value inside an arbitrary JSON-shaped tree using
//! dots and brackets (`authType`, `auth.type`, `tags[0]`, `headers["x-id"]`).
//! Resolution is explicit found/not-found: a missing segment, a non-container
//! in the middle of the path, or a non-scalar at the end all yield `None`.
//! Nothing here ever panics on a malformed path.

use serde_json::Value;

/// Splits a key path into its lookup segments.
///
/// Dots separate segments; `[...]` is an alternate segment form whose content
/// may be wrapped in single or double quotes. `a.b`, `a[0].b` and `a["b"]` all
/// work. An unclosed bracket is not an error; it is read as if it closed at the
/// end of the path.
fn split_path(path: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    for part in path.split('.') {
        let mut rest = part;
        loop {
            match rest.find('[') {
                Some(open) => {
                    if !rest[..open].is_empty() {
                        segments.push(&rest[..open]);
                    }
                    match rest[open + 1..].find(']') {
                        Some(close) => {
                            let inner = rest[open + 1..open + 1 + close]
                                .trim_matches(|c| c == '\'' || c == '"');
                            if !inner.is_empty() {
                                segments.push(inner);
                            }
                            rest = &rest[open + close + 2..];
                        }
                        None => {
                            segments.push(&rest[open + 1..]);
                            break;
                        }
                    }
                }
                None => {
                    if !rest.is_empty() {
                        segments.push(rest);
                    }
                    break;
                }
            }
        }
    }
    segments
}

/// Returns the first segment of a key path.
///
/// This is the name the value mapper keys on (`auth.type` → `auth`). For a
/// single-segment path it is the path itself.
pub fn top_level_key(path: &str) -> &str {
    split_path(path).first().copied().unwrap_or(path)
}

/// Resolves `path` against `context`, returning the scalar at that address.
///
/// Walks the tree one segment at a time: mappings are indexed by name,
/// sequences by decimal position. Returns `None` when any segment is missing,
/// when a scalar shows up with segments still to walk, or when the final value
/// is not a scalar; objects, arrays, and `null` are not substitutable.
///
/// # Examples
///
/// ```
/// use format_url_template::template::resolve_path;
/// use serde_json::json;
///
/// let context = json!({ "auth": { "type": "oauth" }, "retries": 3 });
/// assert_eq!(resolve_path(&context, "auth.type"), Some(&json!("oauth")));
/// assert_eq!(resolve_path(&context, "retries"), Some(&json!(3)));
/// assert_eq!(resolve_path(&context, "auth"), None); // not a scalar
/// assert_eq!(resolve_path(&context, "auth.missing"), None);
/// ```
pub fn resolve_path<'a>(context: &'a Value, path: &str) -> Option<&'a Value> {
    let segments = split_path(path);
    if segments.is_empty() {
        return None;
    }

    let mut current = context;
    for segment in segments {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }

    match current {
        Value::String(_) | Value::Number(_) | Value::Bool(_) => Some(current),
        _ => None,
    }
}
