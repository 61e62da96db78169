//! URL formatting: render, encode, reparse.

use super::encode::encode_uri;
use super::error::FormatError;
use crate::config::PluginConfig;
use crate::models::{RequestOptions, ResolvedUrl, UriValue};
use crate::template::render_template;

/// Produces the request's new `uri` field.
///
/// When `applyToUrl` is off or the request has no URL, the original field
/// comes back unchanged. Otherwise the URL's string form is rendered against
/// the full request options, percent-encoded, and reparsed into a
/// [`ResolvedUrl`]. A reparse failure is the one hard error of the crate.
pub fn format_uri(
    options: &RequestOptions,
    config: &PluginConfig,
) -> Result<Option<UriValue>, FormatError> {
    let uri = match &options.uri {
        Some(uri) if config.apply_to_url => uri,
        other => return Ok(other.clone()),
    };

    let context = options.lookup_context();
    let rendered = render_template(uri.href(), &context, &config.values_map);
    let encoded = encode_uri(&rendered);
    let resolved = ResolvedUrl::parse(&encoded)?;

    Ok(Some(UriValue::Resolved(resolved)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PluginConfig;

    fn options(uri: &str) -> RequestOptions {
        RequestOptions::new()
            .with_uri(uri)
            .with_field("authType", "oauth")
            .with_field("name", "Müller")
    }

    fn resolved(result: Option<UriValue>) -> ResolvedUrl {
        match result {
            Some(UriValue::Resolved(url)) => url,
            other => panic!("expected resolved uri, got {:?}", other),
        }
    }

    #[test]
    fn test_substitutes_and_parses_relative_reference() {
        let result = format_uri(&options("/api/foo/{ authType }/bar"), &PluginConfig::default());
        let url = resolved(result.unwrap());
        assert_eq!(url.path, "/api/foo/oauth/bar");
        assert_eq!(url.scheme, None);
    }

    #[test]
    fn test_substitutes_and_parses_absolute_url() {
        let result = format_uri(
            &options("https://api.example.com/{ authType }?x=1"),
            &PluginConfig::default(),
        );
        let url = resolved(result.unwrap());
        assert_eq!(url.scheme.as_deref(), Some("https"));
        assert_eq!(url.host.as_deref(), Some("api.example.com"));
        assert_eq!(url.path, "/oauth");
        assert_eq!(url.query.as_deref(), Some("x=1"));
    }

    #[test]
    fn test_non_ascii_value_is_percent_encoded() {
        let result = format_uri(&options("/users/{ name }"), &PluginConfig::default());
        let url = resolved(result.unwrap());
        assert_eq!(url.path, "/users/M%C3%BCller");
    }

    #[test]
    fn test_disabled_flag_leaves_uri_untouched() {
        let config = PluginConfig {
            apply_to_url: false,
            ..PluginConfig::default()
        };
        let input = options("/api/{ authType }");
        let result = format_uri(&input, &config).unwrap();
        assert_eq!(result, input.uri);
    }

    #[test]
    fn test_absent_uri_stays_absent() {
        let input = RequestOptions::new().with_field("authType", "oauth");
        let result = format_uri(&input, &PluginConfig::default()).unwrap();
        assert_eq!(result, None);
    }

    #[test]
    fn test_unresolved_placeholder_is_encoded_not_fatal() {
        let result = format_uri(&options("/api/{ missing }"), &PluginConfig::default());
        let url = resolved(result.unwrap());
        assert_eq!(url.path, "/api/%7B%20missing%20%7D");
    }

    #[test]
    fn test_already_resolved_uri_is_reprocessed_from_href() {
        let input = RequestOptions::new()
            .with_uri(ResolvedUrl::parse("/api/foo").unwrap())
            .with_field("authType", "oauth");
        let result = format_uri(&input, &PluginConfig::default()).unwrap();
        assert_eq!(resolved(result).path, "/api/foo");
    }

    #[test]
    fn test_unparseable_result_is_a_hard_error() {
        // The unresolved token lands in the port position, where no encoding
        // can make it a valid absolute URL.
        let bad = RequestOptions::new().with_uri("https://example.com:{ port }/x");
        let err = format_uri(&bad, &PluginConfig::default()).unwrap_err();
        assert!(matches!(err, FormatError::InvalidUrl { .. }));
    }
}
