//! Plugin configuration and the per-call merge.
//!
//! Configuration arrives in two layers: overrides given when the plugin is
//! constructed, and per-call overrides carried on the request options under
//! `plugins.formatUrlTemplate`. Both merge over the built-in defaults with an
//! explicit, pure deep merge; no default table is ever modified in place.

use crate::template::ValuesMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Built-in value remapping table: normalize `authType` values to what the
/// target service expects on the wire.
static DEFAULT_VALUES_MAP: Lazy<ValuesMap> = Lazy::new(|| {
    let mut map = ValuesMap::new();
    map.insert("authType", "oauth", "oauth");
    map.insert("authType", "basic", "basic");
    map.insert("authType", "saml", "form");
    map.insert("authType", "cookie", "form");
    map
});

/// Fully merged plugin configuration, as the formatters consume it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginConfig {
    /// Render placeholders in the request URL. Defaults to true.
    #[serde(default = "default_apply_to_url")]
    pub apply_to_url: bool,

    /// Render placeholders in string-valued query parameters. Defaults to
    /// false.
    #[serde(default)]
    pub apply_to_query_string: bool,

    /// Per-field value remapping table. Defaults to the `authType` table.
    #[serde(default = "default_values_map")]
    pub values_map: ValuesMap,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            apply_to_url: default_apply_to_url(),
            apply_to_query_string: false,
            values_map: default_values_map(),
        }
    }
}

impl PluginConfig {
    /// Merges `overrides` over this configuration, producing a new one.
    ///
    /// Present override fields win; the values map merges deeply, per
    /// raw-value entry. Neither input is modified.
    pub fn merge(&self, overrides: &PluginConfigOverride) -> PluginConfig {
        PluginConfig {
            apply_to_url: overrides.apply_to_url.unwrap_or(self.apply_to_url),
            apply_to_query_string: overrides
                .apply_to_query_string
                .unwrap_or(self.apply_to_query_string),
            values_map: match &overrides.values_map {
                Some(map) => self.values_map.merge(map),
                None => self.values_map.clone(),
            },
        }
    }
}

/// Partial configuration: what hosts hand in at plugin construction or on a
/// single request. Absent fields fall back to the layer below.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginConfigOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apply_to_url: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apply_to_query_string: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values_map: Option<ValuesMap>,
}

// Default value functions for serde

fn default_apply_to_url() -> bool {
    true
}

fn default_values_map() -> ValuesMap {
    DEFAULT_VALUES_MAP.clone()
}
