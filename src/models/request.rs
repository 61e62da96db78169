//! Request options: the per-call context the formatters operate on.

use super::url::ResolvedUrl;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The request target field, before or after resolution.
///
/// Hosts usually hand the plugin a raw template string; the plugin hands back
/// a structured [`ResolvedUrl`]. Both shapes deserialize transparently (a JSON
/// string becomes `Template`, an object becomes `Resolved`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UriValue {
    /// A structured URL, typically the output of an earlier resolution pass.
    Resolved(ResolvedUrl),
    /// A raw URL string, possibly containing `{ placeholder }` tokens.
    Template(String),
}

impl UriValue {
    /// The string form of the target, whatever its shape.
    pub fn href(&self) -> &str {
        match self {
            UriValue::Template(text) => text,
            UriValue::Resolved(url) => url.href(),
        }
    }
}

impl From<&str> for UriValue {
    fn from(text: &str) -> Self {
        UriValue::Template(text.to_string())
    }
}

impl From<ResolvedUrl> for UriValue {
    fn from(url: ResolvedUrl) -> Self {
        UriValue::Resolved(url)
    }
}

/// Options for one outgoing HTTP request.
///
/// Only `uri` and `qs` are touched by the plugin; every other field rides
/// along in `fields` and doubles as the lookup context for key paths: a
/// template `{ authType }` reads `fields["authType"]`. The maps preserve
/// insertion order, so query parameters come back out in the order they went
/// in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestOptions {
    /// Target URL, absent for hosts that fill it in later.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<UriValue>,

    /// Query-string map. Values may be any JSON shape; only strings are
    /// templated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qs: Option<Map<String, Value>>,

    /// Everything else on the request: auth fields, plugin configuration
    /// blocks, custom context values.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl RequestOptions {
    /// Creates empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the target URL. Builder-style, used heavily in tests.
    pub fn with_uri(mut self, uri: impl Into<UriValue>) -> Self {
        self.uri = Some(uri.into());
        self
    }

    /// Sets the query-string map.
    pub fn with_qs(mut self, qs: Map<String, Value>) -> Self {
        self.qs = Some(qs);
        self
    }

    /// Adds a context field.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Builds the key-path lookup context for template rendering.
    ///
    /// The context is the extra fields, plus `qs` and `uri` re-inserted under
    /// their own names so paths like `qs.token` keep working the way they did
    /// against the flat request-options object.
    pub fn lookup_context(&self) -> Value {
        let mut context = self.fields.clone();
        if let Some(qs) = &self.qs {
            context.insert("qs".to_string(), Value::Object(qs.clone()));
        }
        if let Some(uri) = &self.uri {
            if let Ok(value) = serde_json::to_value(uri) {
                context.insert("uri".to_string(), value);
            }
        }
        Value::Object(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_uri_value_href() {
        let template = UriValue::from("/api/{ authType }");
        assert_eq!(template.href(), "/api/{ authType }");

        let resolved = UriValue::from(ResolvedUrl::parse("/api/oauth").unwrap());
        assert_eq!(resolved.href(), "/api/oauth");
    }

    #[test]
    fn test_uri_value_deserializes_both_shapes() {
        let from_string: UriValue = serde_json::from_value(json!("/api/foo")).unwrap();
        assert_eq!(from_string, UriValue::Template("/api/foo".to_string()));

        let from_object: UriValue =
            serde_json::from_value(json!({ "path": "/api/foo", "href": "/api/foo" })).unwrap();
        assert!(matches!(from_object, UriValue::Resolved(_)));
    }

    #[test]
    fn test_flattened_fields_round_trip() {
        let options: RequestOptions = serde_json::from_value(json!({
            "uri": "/api/{ authType }",
            "authType": "oauth",
            "retries": 3,
        }))
        .unwrap();

        assert_eq!(
            options.uri.as_ref().map(UriValue::href),
            Some("/api/{ authType }")
        );
        assert_eq!(options.fields["authType"], "oauth");
        assert_eq!(options.fields["retries"], 3);

        let back = serde_json::to_value(&options).unwrap();
        assert_eq!(back["authType"], "oauth");
        assert_eq!(back["uri"], "/api/{ authType }");
    }

    #[test]
    fn test_lookup_context_includes_fields_qs_and_uri() {
        let mut qs = Map::new();
        qs.insert("token".to_string(), json!("{ authType }"));

        let options = RequestOptions::new()
            .with_uri("/api")
            .with_qs(qs)
            .with_field("authType", "saml");

        let context = options.lookup_context();
        assert_eq!(context["authType"], "saml");
        assert_eq!(context["qs"]["token"], "{ authType }");
        assert_eq!(context["uri"], "/api");
    }

    #[test]
    fn test_lookup_context_without_optional_fields() {
        let options = RequestOptions::new().with_field("a", 1);
        let context = options.lookup_context();
        assert_eq!(context, json!({ "a": 1 }));
    }
}
