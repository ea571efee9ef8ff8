//! Generic settings store
//!
//! Values of any type live side by side under string keys. Type safety is
//! recovered on read: a typed lookup checks the stored type and fails on a
//! mismatch instead of coercing.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::types::{Result, RuntimeCapabilities, SettingsError};

/// A value held by the store, with the name of the type it was stored as
#[derive(Clone)]
struct StoredValue {
    value: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl StoredValue {
    fn new<T: Send + Sync + 'static>(value: T) -> Self {
        Self {
            value: Arc::new(value),
            type_name: std::any::type_name::<T>(),
        }
    }
}

/// Settings store
///
/// Cloning produces a snapshot: the clone has its own map, but values are
/// shared with the original until either side overwrites them.
#[derive(Clone, Default)]
pub struct SettingsStore {
    values: HashMap<String, StoredValue>,
    capabilities: RuntimeCapabilities,
}

impl SettingsStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store for a runtime with the given capabilities
    pub fn with_capabilities(capabilities: RuntimeCapabilities) -> Self {
        Self {
            values: HashMap::new(),
            capabilities,
        }
    }

    /// Capabilities the store resolves platform-dependent defaults against
    pub fn capabilities(&self) -> RuntimeCapabilities {
        self.capabilities
    }

    /// Read `key` as `T`, or `default` when the key is unset
    ///
    /// Fails with [`SettingsError::TypeMismatch`] when the key holds a value
    /// of another type.
    pub fn get<T>(&self, key: &str, default: T) -> Result<T>
    where
        T: Clone + Send + Sync + 'static,
    {
        match self.values.get(key) {
            None => Ok(default),
            Some(stored) => stored
                .value
                .downcast_ref::<T>()
                .cloned()
                .ok_or_else(|| Self::mismatch::<T>(key, stored)),
        }
    }

    /// Read `key` as the shared value held by the store
    ///
    /// Returns the same allocation on every call until the key is overwritten.
    pub fn get_shared<T>(&self, key: &str) -> Result<Option<Arc<T>>>
    where
        T: Send + Sync + 'static,
    {
        match self.values.get(key) {
            None => Ok(None),
            Some(stored) => Arc::clone(&stored.value)
                .downcast::<T>()
                .map(Some)
                .map_err(|_| Self::mismatch::<T>(key, stored)),
        }
    }

    /// Insert or overwrite the value of `key`
    pub fn set<T>(&mut self, key: impl Into<String>, value: T)
    where
        T: Send + Sync + 'static,
    {
        let key = key.into();
        let stored = StoredValue::new(value);
        tracing::trace!(key = %key, value_type = stored.type_name, "Setting value");
        if let Some(previous) = self.values.insert(key, stored) {
            tracing::trace!(previous_type = previous.type_name, "Overwrote previous value");
        }
    }

    /// Remove `key`, returning whether it was set
    pub fn remove(&mut self, key: &str) -> bool {
        let removed = self.values.remove(key).is_some();
        if removed {
            tracing::trace!(key = %key, "Removed setting");
        }
        removed
    }

    /// Check if `key` holds a value
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Name of the type stored under `key`
    pub fn value_type_name(&self, key: &str) -> Option<&'static str> {
        self.values.get(key).map(|stored| stored.type_name)
    }

    /// Keys currently set, in no particular order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Number of keys set
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if no key is set
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn mismatch<T>(key: &str, stored: &StoredValue) -> SettingsError {
        SettingsError::type_mismatch(key, std::any::type_name::<T>(), stored.type_name)
    }
}

impl fmt::Debug for SettingsStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<_> = self.values.keys().collect();
        keys.sort();
        f.debug_struct("SettingsStore")
            .field("keys", &keys)
            .field("capabilities", &self.capabilities)
            .finish()
    }
}
