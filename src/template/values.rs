//! Value remapping table.
//!
//! A two-level lookup: top-level key name → (raw value → replacement). The
//! canonical use is normalizing `authType` values (`saml` and `cookie` both
//! collapse to `form` on the wire), but any field can carry a sub-table.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Remaps resolved raw values, keyed by the top-level key name of the path
/// that produced them.
///
/// Remapping only ever consults the *first* path segment: `auth.type` looks
/// up the `auth` sub-table, not `auth.type`. That matches the behavior of the
/// original plugin and is kept as documented behavior.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValuesMap(pub HashMap<String, HashMap<String, String>>);

impl ValuesMap {
    /// Creates an empty map (no remapping at all).
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a replacement for `raw` under `key`.
    ///
    /// Returns `None` when either the key has no sub-table or the sub-table
    /// has no entry for this raw value; the caller then uses the raw value
    /// unchanged.
    pub fn remap(&self, key: &str, raw: &str) -> Option<&str> {
        self.0.get(key)?.get(raw).map(String::as_str)
    }

    /// Deep-merges `overrides` on top of `self`, producing a new map.
    ///
    /// Merging is per raw-value entry, not per sub-table: an override for
    /// `authType.oauth` leaves `authType.saml` from the base intact. Neither
    /// input is modified.
    pub fn merge(&self, overrides: &ValuesMap) -> ValuesMap {
        let mut merged = self.0.clone();
        for (key, table) in &overrides.0 {
            merged
                .entry(key.clone())
                .or_default()
                .extend(table.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        ValuesMap(merged)
    }

    /// Inserts a single remapping entry. Convenience for building tables in
    /// code rather than deserializing them.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        raw: impl Into<String>,
        replacement: impl Into<String>,
    ) {
        self.0
            .entry(key.into())
            .or_default()
            .insert(raw.into(), replacement.into());
    }
}
