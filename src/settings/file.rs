//! Settings file format
//!
//! A settings file carries plain values for the named settings plus any other
//! top-level keys, which are kept as raw JSON.

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::keys;
use super::options::compile_patterns;
use super::store::SettingsStore;
use crate::types::{Result, StandardScope};

/// Environment variable prefix for overrides
const ENV_PREFIX: &str = "INJECT_";

/// One layer of settings read from a file or the environment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsFile {
    /// Cache pruning interval in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_pruning_interval_secs: Option<u64>,

    /// Scope policy for bindings without one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_scope: Option<StandardScope>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_extensions: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension_search_patterns: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_reflection_based_injection: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inject_non_public: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inject_parent_private_properties: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activation_cache_disabled: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_null_injection: Option<bool>,

    /// Custom settings as raw JSON
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl SettingsFile {
    /// Create an empty layer
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a layer from JSON text
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Read overrides through `lookup`
    ///
    /// Reads `INJECT_CACHE_PRUNING_INTERVAL_SECS`, `INJECT_DEFAULT_SCOPE`,
    /// `INJECT_LOAD_EXTENSIONS`, `INJECT_EXTENSION_SEARCH_PATTERNS`
    /// (comma-separated), `INJECT_USE_REFLECTION_BASED_INJECTION`,
    /// `INJECT_NON_PUBLIC`, `INJECT_PARENT_PRIVATE_PROPERTIES`,
    /// `INJECT_ACTIVATION_CACHE_DISABLED` and `INJECT_ALLOW_NULL_INJECTION`.
    /// Values that do not parse are logged and ignored.
    pub fn from_env_with<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |suffix: &str| {
            let name = format!("{ENV_PREFIX}{suffix}");
            lookup(name.as_str())
                .filter(|v| !v.trim().is_empty())
                .map(|v| (name, v))
        };
        let flag = |suffix: &str| {
            read(suffix).and_then(|(name, value)| {
                let parsed = parse_bool(&value);
                if parsed.is_none() {
                    tracing::warn!("Ignoring {}: '{}' is not a boolean", name, value);
                }
                parsed
            })
        };

        let cache_pruning_interval_secs =
            read("CACHE_PRUNING_INTERVAL_SECS").and_then(|(name, value)| {
                value
                    .trim()
                    .parse::<u64>()
                    .inspect_err(|e| tracing::warn!("Ignoring {}: {}", name, e))
                    .ok()
            });

        let default_scope = read("DEFAULT_SCOPE").and_then(|(name, value)| {
            value
                .parse::<StandardScope>()
                .inspect_err(|e| tracing::warn!("Ignoring {}: {}", name, e))
                .ok()
        });

        let extension_search_patterns = read("EXTENSION_SEARCH_PATTERNS").map(|(_, value)| {
            value
                .split(',')
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::to_string)
                .collect()
        });

        Self {
            cache_pruning_interval_secs,
            default_scope,
            load_extensions: flag("LOAD_EXTENSIONS"),
            extension_search_patterns,
            use_reflection_based_injection: flag("USE_REFLECTION_BASED_INJECTION"),
            inject_non_public: flag("NON_PUBLIC"),
            inject_parent_private_properties: flag("PARENT_PRIVATE_PROPERTIES"),
            activation_cache_disabled: flag("ACTIVATION_CACHE_DISABLED"),
            allow_null_injection: flag("ALLOW_NULL_INJECTION"),
            extra: HashMap::new(),
        }
    }

    /// Check if this layer sets anything
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge another layer into this one
    ///
    /// Values from `other` take precedence over `self`.
    pub fn merge(&mut self, other: SettingsFile) {
        if other.cache_pruning_interval_secs.is_some() {
            self.cache_pruning_interval_secs = other.cache_pruning_interval_secs;
        }
        if other.default_scope.is_some() {
            self.default_scope = other.default_scope;
        }
        if other.load_extensions.is_some() {
            self.load_extensions = other.load_extensions;
        }
        if other.extension_search_patterns.is_some() {
            self.extension_search_patterns = other.extension_search_patterns;
        }
        if other.use_reflection_based_injection.is_some() {
            self.use_reflection_based_injection = other.use_reflection_based_injection;
        }
        if other.inject_non_public.is_some() {
            self.inject_non_public = other.inject_non_public;
        }
        if other.inject_parent_private_properties.is_some() {
            self.inject_parent_private_properties = other.inject_parent_private_properties;
        }
        if other.activation_cache_disabled.is_some() {
            self.activation_cache_disabled = other.activation_cache_disabled;
        }
        if other.allow_null_injection.is_some() {
            self.allow_null_injection = other.allow_null_injection;
        }
        // Merge extra fields
        for (key, value) in other.extra {
            self.extra.insert(key, value);
        }
    }

    /// Write every value present in this layer into `store`
    ///
    /// Extension patterns are validated first, so an invalid layer leaves the
    /// store untouched.
    pub fn apply_to(&self, store: &mut SettingsStore) -> Result<()> {
        if let Some(ref patterns) = self.extension_search_patterns {
            compile_patterns(patterns)?;
        }

        if let Some(secs) = self.cache_pruning_interval_secs {
            store.set_cache_pruning_interval(Duration::from_secs(secs));
        }
        if let Some(scope) = self.default_scope {
            store.set_default_scope_callback(scope.callback());
        }
        if let Some(enabled) = self.load_extensions {
            store.set_load_extensions(enabled);
        }
        if let Some(ref patterns) = self.extension_search_patterns {
            store.set_extension_search_patterns(patterns.clone());
        }
        if let Some(enabled) = self.use_reflection_based_injection {
            store.set_use_reflection_based_injection(enabled);
        }
        if let Some(enabled) = self.inject_non_public {
            store.set_inject_non_public(enabled);
        }
        if let Some(enabled) = self.inject_parent_private_properties {
            store.set_inject_parent_private_properties(enabled);
        }
        if let Some(disabled) = self.activation_cache_disabled {
            store.set_activation_cache_disabled(disabled);
        }
        if let Some(allowed) = self.allow_null_injection {
            store.set_allow_null_injection(allowed);
        }
        for (key, value) in &self.extra {
            if keys::is_well_known(key) {
                tracing::warn!("Ignoring '{}': well-known settings use camelCase fields", key);
                continue;
            }
            store.set(key.clone(), value.clone());
        }

        Ok(())
    }
}

/// Parse a boolean environment value
fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
