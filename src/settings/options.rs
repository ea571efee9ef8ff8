//! Named settings
//!
//! Typed accessors over the well-known keys. Each one is a plain read or write
//! of its key with the documented default; none of them carries extra logic.

use std::time::Duration;

use globset::{Glob, GlobSet, GlobSetBuilder};

use super::keys;
use super::store::SettingsStore;
use crate::types::{
    Inject, MarkerType, Obsolete, Result, ScopeCallback, SettingsError, StandardScope,
};

/// Read-only view of the named settings
///
/// Subsystems that only consume configuration take `&dyn InjectSettings`.
pub trait InjectSettings: Send + Sync {
    /// Marker type identifying injectable members
    fn inject_attribute(&self) -> Result<MarkerType>;
    /// Marker type identifying members to skip
    fn obsolete_attribute(&self) -> Result<MarkerType>;
    /// Interval between activation cache pruning passes
    fn cache_pruning_interval(&self) -> Result<Duration>;
    /// Scope callback used when a binding names no scope
    fn default_scope_callback(&self) -> Result<ScopeCallback>;
    /// Whether extensions are loaded at startup
    fn load_extensions(&self) -> Result<bool>;
    /// File name patterns used to find extensions
    fn extension_search_patterns(&self) -> Result<Vec<String>>;
    /// Whether reflection replaces generated injectors
    fn use_reflection_based_injection(&self) -> Result<bool>;
    /// Whether non-public members are injected
    fn inject_non_public(&self) -> Result<bool>;
    /// Whether private members of parent types are injected
    fn inject_parent_private_properties(&self) -> Result<bool>;
    /// Whether the activation cache is disabled
    fn activation_cache_disabled(&self) -> Result<bool>;
    /// Whether a null value may be injected
    fn allow_null_injection(&self) -> Result<bool>;
}

impl SettingsStore {
    pub fn inject_attribute(&self) -> Result<MarkerType> {
        self.get(keys::INJECT_ATTRIBUTE, MarkerType::of::<Inject>())
    }

    pub fn set_inject_attribute(&mut self, marker: MarkerType) {
        self.set(keys::INJECT_ATTRIBUTE, marker);
    }

    pub fn obsolete_attribute(&self) -> Result<MarkerType> {
        self.get(keys::OBSOLETE_ATTRIBUTE, MarkerType::of::<Obsolete>())
    }

    pub fn set_obsolete_attribute(&mut self, marker: MarkerType) {
        self.set(keys::OBSOLETE_ATTRIBUTE, marker);
    }

    pub fn cache_pruning_interval(&self) -> Result<Duration> {
        self.get(keys::CACHE_PRUNING_INTERVAL, keys::DEFAULT_CACHE_PRUNING_INTERVAL)
    }

    pub fn set_cache_pruning_interval(&mut self, interval: Duration) {
        self.set(keys::CACHE_PRUNING_INTERVAL, interval);
    }

    /// Scope callback for bindings without an explicit scope
    ///
    /// Defaults to the transient policy.
    pub fn default_scope_callback(&self) -> Result<ScopeCallback> {
        self.get(
            keys::DEFAULT_SCOPE_CALLBACK,
            StandardScope::Transient.callback(),
        )
    }

    pub fn set_default_scope_callback(&mut self, callback: ScopeCallback) {
        self.set(keys::DEFAULT_SCOPE_CALLBACK, callback);
    }

    pub fn load_extensions(&self) -> Result<bool> {
        self.get(keys::LOAD_EXTENSIONS, true)
    }

    pub fn set_load_extensions(&mut self, enabled: bool) {
        self.set(keys::LOAD_EXTENSIONS, enabled);
    }

    pub fn extension_search_patterns(&self) -> Result<Vec<String>> {
        let defaults = keys::DEFAULT_EXTENSION_SEARCH_PATTERNS
            .iter()
            .map(|p| (*p).to_string())
            .collect();
        self.get(keys::EXTENSION_SEARCH_PATTERNS, defaults)
    }

    pub fn set_extension_search_patterns(&mut self, patterns: Vec<String>) {
        self.set(keys::EXTENSION_SEARCH_PATTERNS, patterns);
    }

    /// Whether reflection replaces generated injectors
    ///
    /// When unset, reflection is used only on runtimes without dynamic code
    /// generation.
    pub fn use_reflection_based_injection(&self) -> Result<bool> {
        let default = !self.capabilities().dynamic_codegen;
        self.get(keys::USE_REFLECTION_BASED_INJECTION, default)
    }

    pub fn set_use_reflection_based_injection(&mut self, enabled: bool) {
        self.set(keys::USE_REFLECTION_BASED_INJECTION, enabled);
    }

    pub fn inject_non_public(&self) -> Result<bool> {
        self.get(keys::INJECT_NON_PUBLIC, false)
    }

    pub fn set_inject_non_public(&mut self, enabled: bool) {
        self.set(keys::INJECT_NON_PUBLIC, enabled);
    }

    pub fn inject_parent_private_properties(&self) -> Result<bool> {
        self.get(keys::INJECT_PARENT_PRIVATE_PROPERTIES, false)
    }

    pub fn set_inject_parent_private_properties(&mut self, enabled: bool) {
        self.set(keys::INJECT_PARENT_PRIVATE_PROPERTIES, enabled);
    }

    pub fn activation_cache_disabled(&self) -> Result<bool> {
        self.get(keys::ACTIVATION_CACHE_DISABLED, false)
    }

    pub fn set_activation_cache_disabled(&mut self, disabled: bool) {
        self.set(keys::ACTIVATION_CACHE_DISABLED, disabled);
    }

    pub fn allow_null_injection(&self) -> Result<bool> {
        self.get(keys::ALLOW_NULL_INJECTION, false)
    }

    pub fn set_allow_null_injection(&mut self, allowed: bool) {
        self.set(keys::ALLOW_NULL_INJECTION, allowed);
    }

    /// Compile the extension search patterns into one matcher
    pub fn extension_matcher(&self) -> Result<GlobSet> {
        compile_patterns(&self.extension_search_patterns()?)
    }
}

/// Compile glob patterns, failing on the first invalid one
pub(crate) fn compile_patterns(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob =
            Glob::new(pattern).map_err(|e| SettingsError::invalid_pattern(pattern.as_str(), e))?;
        builder.add(glob);
    }
    builder
        .build()
        .map_err(|e| SettingsError::config_error(format!("cannot build pattern set: {e}")))
}

impl InjectSettings for SettingsStore {
    fn inject_attribute(&self) -> Result<MarkerType> {
        SettingsStore::inject_attribute(self)
    }

    fn obsolete_attribute(&self) -> Result<MarkerType> {
        SettingsStore::obsolete_attribute(self)
    }

    fn cache_pruning_interval(&self) -> Result<Duration> {
        SettingsStore::cache_pruning_interval(self)
    }

    fn default_scope_callback(&self) -> Result<ScopeCallback> {
        SettingsStore::default_scope_callback(self)
    }

    fn load_extensions(&self) -> Result<bool> {
        SettingsStore::load_extensions(self)
    }

    fn extension_search_patterns(&self) -> Result<Vec<String>> {
        SettingsStore::extension_search_patterns(self)
    }

    fn use_reflection_based_injection(&self) -> Result<bool> {
        SettingsStore::use_reflection_based_injection(self)
    }

    fn inject_non_public(&self) -> Result<bool> {
        SettingsStore::inject_non_public(self)
    }

    fn inject_parent_private_properties(&self) -> Result<bool> {
        SettingsStore::inject_parent_private_properties(self)
    }

    fn activation_cache_disabled(&self) -> Result<bool> {
        SettingsStore::activation_cache_disabled(self)
    }

    fn allow_null_injection(&self) -> Result<bool> {
        SettingsStore::allow_null_injection(self)
    }
}
