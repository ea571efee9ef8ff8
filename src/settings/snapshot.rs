//! Serializable view of the effective settings

use serde::Serialize;

use super::keys;
use super::store::SettingsStore;
use crate::types::Result;

/// Every named setting as currently resolved, defaults included
///
/// The default scope callback is opaque and only reported as set or unset.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectiveSettings {
    pub inject_attribute: String,
    pub obsolete_attribute: String,
    pub cache_pruning_interval_ms: u128,
    pub default_scope_callback_set: bool,
    pub load_extensions: bool,
    pub extension_search_patterns: Vec<String>,
    pub use_reflection_based_injection: bool,
    pub inject_non_public: bool,
    pub inject_parent_private_properties: bool,
    pub activation_cache_disabled: bool,
    pub allow_null_injection: bool,
    /// Keys set outside the named settings, sorted
    pub custom_keys: Vec<String>,
}

impl EffectiveSettings {
    /// Resolve every named setting from `store`
    pub fn capture(store: &SettingsStore) -> Result<Self> {
        let mut custom_keys: Vec<String> = store
            .keys()
            .filter(|key| !keys::is_well_known(key))
            .map(str::to_string)
            .collect();
        custom_keys.sort();

        Ok(Self {
            inject_attribute: store.inject_attribute()?.name().to_string(),
            obsolete_attribute: store.obsolete_attribute()?.name().to_string(),
            cache_pruning_interval_ms: store.cache_pruning_interval()?.as_millis(),
            default_scope_callback_set: store.contains(keys::DEFAULT_SCOPE_CALLBACK),
            load_extensions: store.load_extensions()?,
            extension_search_patterns: store.extension_search_patterns()?,
            use_reflection_based_injection: store.use_reflection_based_injection()?,
            inject_non_public: store.inject_non_public()?,
            inject_parent_private_properties: store.inject_parent_private_properties()?,
            activation_cache_disabled: store.activation_cache_disabled()?,
            allow_null_injection: store.allow_null_injection()?,
            custom_keys,
        })
    }

    /// Render as pretty JSON
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StandardScope;
    use std::time::Duration;

    #[test]
    fn test_capture_defaults() {
        let effective = EffectiveSettings::capture(&SettingsStore::new()).unwrap();
        assert!(effective.inject_attribute.ends_with("::Inject"));
        assert!(effective.obsolete_attribute.ends_with("::Obsolete"));
        assert_eq!(effective.cache_pruning_interval_ms, 30_000);
        assert!(!effective.default_scope_callback_set);
        assert!(effective.load_extensions);
        assert_eq!(effective.extension_search_patterns.len(), 2);
        assert!(effective.custom_keys.is_empty());
    }

    #[test]
    fn test_capture_custom_values() {
        let mut store = SettingsStore::new();
        store.set_cache_pruning_interval(Duration::from_secs(5));
        store.set_default_scope_callback(StandardScope::Singleton.callback());
        store.set("zeta", 1_i32);
        store.set("alpha", "x".to_string());

        let effective = EffectiveSettings::capture(&store).unwrap();
        assert_eq!(effective.cache_pruning_interval_ms, 5_000);
        assert!(effective.default_scope_callback_set);
        assert_eq!(effective.custom_keys, vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_capture_reports_mismatch() {
        let mut store = SettingsStore::new();
        store.set(keys::INJECT_NON_PUBLIC, 1_u8);
        assert!(EffectiveSettings::capture(&store).unwrap_err().is_type_mismatch());
    }

    #[test]
    fn test_json_field_names() {
        let json = EffectiveSettings::capture(&SettingsStore::new())
            .unwrap()
            .to_json_pretty()
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["cachePruningIntervalMs"], serde_json::json!(30_000));
        assert_eq!(value["loadExtensions"], serde_json::json!(true));
        assert!(value["customKeys"].as_array().unwrap().is_empty());
    }
}
