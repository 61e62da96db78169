//! Placeholder tokenizer for template strings.
//!
//! Splits a template into literal runs and `{ key }` placeholder tokens in a
//! single left-to-right scan. Malformed tokens (empty braces, an opening brace
//! with no closer) are not errors; they stay part of the literal text so the
//! renderer can pass them through untouched.

/// A single piece of a template string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// A run of characters with no substitution point in it.
    Literal(String),

    /// A `{ key }` substitution point.
    Placeholder {
        /// The key path between the braces, with surrounding whitespace trimmed.
        key: String,
        /// The token exactly as it appeared in the source, braces and interior
        /// whitespace included. Spliced back verbatim when the key does not
        /// resolve.
        raw: String,
    },
}

/// Splits `input` into literal and placeholder segments.
///
/// A placeholder is one `{`, any run of non-brace characters, then one `}`.
/// Braces do not nest. Two malformed shapes are folded back into the literal
/// text rather than reported as errors:
///
/// - `{}` or `{   }` (nothing but whitespace between the braces)
/// - a `{` that never finds a matching `}` before the end of the string, or
///   that runs into another `{` first
///
/// # Examples
///
/// ```
/// use format_url_template::template::{parse_template, Segment};
///
/// let segments = parse_template("/api/{ authType }/bar");
/// assert_eq!(
///     segments,
///     vec![
///         Segment::Literal("/api/".to_string()),
///         Segment::Placeholder {
///             key: "authType".to_string(),
///             raw: "{ authType }".to_string(),
///         },
///         Segment::Literal("/bar".to_string()),
///     ]
/// );
/// ```
pub fn parse_template(input: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut rest = input;

    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        match after.find(['{', '}']) {
            Some(pos) if after.as_bytes()[pos] == b'}' => {
                let raw = &rest[open..open + pos + 2];
                let key = after[..pos].trim();
                literal.push_str(&rest[..open]);
                if key.is_empty() {
                    // Malformed: empty braces stay literal.
                    literal.push_str(raw);
                } else {
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Placeholder {
                        key: key.to_string(),
                        raw: raw.to_string(),
                    });
                }
                rest = &rest[open + pos + 2..];
            }
            _ => {
                // Nested opener or no closer: this '{' is literal text. Scanning
                // resumes right after it, so a later well-formed token still
                // gets picked up.
                literal.push_str(&rest[..open + 1]);
                rest = &rest[open + 1..];
            }
        }
    }

    literal.push_str(rest);
    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }

    segments
}
