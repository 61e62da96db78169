//! Full-string URL percent-encoding.
//!
//! Substituted values can contain anything the request options held, spaces
//! and non-ASCII scripts included, so the rendered URL gets one encoding pass
//! before parsing. The safe set matches the URL character classes that carry
//! structure (alphanumerics plus `;,/?:@&=+$-_.!~*'()#`); everything else is
//! percent-encoded, with non-ASCII characters encoded byte-wise as UTF-8.
//! Existing `%XX` sequences are left alone, which makes the pass idempotent.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// ASCII characters that get escaped. Complement of the unreserved/reserved
/// URL set: controls, space, and the handful of printable characters with no
/// role in a URL.
const URI_ESCAPE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'[')
    .add(b']');

/// Percent-encodes `input` as a complete URL string.
///
/// A `%` followed by two hex digits is assumed to already be an encoded byte
/// and is copied through untouched; a lone `%` is escaped to `%25`. Running
/// the function over its own output changes nothing.
///
/// # Examples
///
/// ```
/// use format_url_template::format::encode_uri;
///
/// assert_eq!(encode_uri("/users/Müller"), "/users/M%C3%BCller");
/// assert_eq!(encode_uri("/a b"), "/a%20b");
/// assert_eq!(encode_uri("/a%20b"), "/a%20b"); // idempotent
/// ```
pub fn encode_uri(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(pos) = rest.find('%') {
        output.extend(utf8_percent_encode(&rest[..pos], URI_ESCAPE));
        let tail = rest[pos + 1..].as_bytes();
        if tail.len() >= 2 && tail[0].is_ascii_hexdigit() && tail[1].is_ascii_hexdigit() {
            output.push_str(&rest[pos..pos + 3]);
            rest = &rest[pos + 3..];
        } else {
            output.push_str("%25");
            rest = &rest[pos + 1..];
        }
    }
    output.extend(utf8_percent_encode(rest, URI_ESCAPE));

    output
}
