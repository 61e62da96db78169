//! The plugin entry point the host dispatch pipeline calls per request.

use crate::config::{PluginConfig, PluginConfigOverride};
use crate::format::{format_query, format_uri, FormatError};
use crate::models::RequestOptions;

/// Name the plugin registers under in the host pipeline, and the key its
/// per-call overrides live under in `requestOptions.plugins`.
pub const PLUGIN_NAME: &str = "format-url-template";

/// Key of the per-call override block inside `requestOptions.plugins`.
const PLUGIN_OPTIONS_KEY: &str = "formatUrlTemplate";

/// The format-url-template plugin.
///
/// Construction merges the host's overrides over the built-in defaults once;
/// [`load`](Self::load) then runs the per-request transform, folding in any
/// per-call overrides found on the request itself.
///
/// # Examples
///
/// ```
/// use format_url_template::{FormatUrlTemplate, RequestOptions, UriValue};
///
/// let plugin = FormatUrlTemplate::default();
/// let options = RequestOptions::new()
///     .with_uri("/api/foo/{ authType }/bar")
///     .with_field("authType", "oauth");
///
/// let result = plugin.load(&options).unwrap();
/// assert_eq!(result.uri.as_ref().map(UriValue::href), Some("/api/foo/oauth/bar"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct FormatUrlTemplate {
    options: PluginConfig,
}

impl FormatUrlTemplate {
    /// Creates the plugin with construction-time overrides applied over the
    /// defaults.
    pub fn new(overrides: PluginConfigOverride) -> Self {
        Self {
            options: PluginConfig::default().merge(&overrides),
        }
    }

    /// The plugin's effective base configuration.
    pub fn options(&self) -> &PluginConfig {
        &self.options
    }

    /// Runs the per-request transform.
    ///
    /// Returns a new `RequestOptions`, identical to the input except that
    /// `uri` is replaced by the rendered, encoded, reparsed URL and `qs` by
    /// the rendered query map, each only when its flag is enabled and the
    /// field is present. The input is never modified.
    ///
    /// The only error is a rendered URL that cannot be parsed at all;
    /// unresolved or malformed placeholders pass through silently.
    pub fn load(&self, request_options: &RequestOptions) -> Result<RequestOptions, FormatError> {
        let config = self.options.merge(&per_call_overrides(request_options));
        log::debug!(
            "{}: applyToUrl={} applyToQueryString={}",
            PLUGIN_NAME,
            config.apply_to_url,
            config.apply_to_query_string
        );

        let uri = format_uri(request_options, &config)?;
        let qs = format_query(request_options, &config);

        let mut output = request_options.clone();
        output.uri = uri;
        output.qs = qs;
        Ok(output)
    }
}

/// Reads the per-call override block from
/// `requestOptions.plugins.formatUrlTemplate`.
///
/// Absent or unreadable blocks yield an empty override; a malformed block is
/// a host configuration problem and must not fail the request.
fn per_call_overrides(request_options: &RequestOptions) -> PluginConfigOverride {
    let block = request_options
        .fields
        .get("plugins")
        .and_then(|plugins| plugins.get(PLUGIN_OPTIONS_KEY));

    match block {
        Some(value) => serde_json::from_value(value.clone()).unwrap_or_else(|err| {
            log::debug!("{}: ignoring unreadable per-call options: {}", PLUGIN_NAME, err);
            PluginConfigOverride::default()
        }),
        None => PluginConfigOverride::default(),
    }
}
