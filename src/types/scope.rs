//! Scope callbacks
//!
//! A scope callback decides how long an activated instance lives. It returns
//! the key of the scope the instance belongs to, or `None` when every request
//! must produce a fresh instance.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Callback type for choosing the scope of an activation
pub type ScopeCallback = Arc<dyn Fn(&ActivationContext) -> Option<ScopeKey> + Send + Sync>;

/// Description of the activation a scope is being chosen for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivationContext {
    /// Type name of the requested service
    pub service: &'static str,
    /// Binding name, when the request targets a named binding
    pub name: Option<String>,
}

impl ActivationContext {
    /// Create a context for the service type `T`
    pub fn for_service<T: ?Sized + 'static>() -> Self {
        Self {
            service: std::any::type_name::<T>(),
            name: None,
        }
    }

    /// Target a named binding
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Opaque identity of a scope
///
/// Keys compare by allocation: clones of one key denote the same scope, two
/// keys built separately never do, whatever they wrap.
#[derive(Clone)]
pub struct ScopeKey(Arc<dyn Any + Send + Sync>);

impl ScopeKey {
    /// Create a key owning `owner`
    pub fn new<T: Any + Send + Sync>(owner: T) -> Self {
        Self(Arc::new(owner))
    }

    /// Check if both keys denote the same scope
    pub fn same_scope(&self, other: &ScopeKey) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Borrow the scope owner as `T`
    pub fn owner<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }
}

impl fmt::Debug for ScopeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ScopeKey")
            .field(&Arc::as_ptr(&self.0).cast::<()>())
            .finish()
    }
}

/// Built-in scope policies
///
/// Names are case-insensitive when read, lowercase when written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum StandardScope {
    /// New instance for every request
    #[default]
    Transient,
    /// One instance per callback
    Singleton,
    /// One instance per thread
    Thread,
}

impl StandardScope {
    /// Build the callback implementing this policy
    pub fn callback(self) -> ScopeCallback {
        match self {
            StandardScope::Transient => transient(),
            StandardScope::Singleton => singleton(),
            StandardScope::Thread => thread(),
        }
    }

    /// Policy name as used in settings files
    pub fn as_str(self) -> &'static str {
        match self {
            StandardScope::Transient => "transient",
            StandardScope::Singleton => "singleton",
            StandardScope::Thread => "thread",
        }
    }
}

impl std::str::FromStr for StandardScope {
    type Err = crate::types::SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "transient" => Ok(StandardScope::Transient),
            "singleton" => Ok(StandardScope::Singleton),
            "thread" => Ok(StandardScope::Thread),
            other => Err(crate::types::SettingsError::config_error(format!(
                "unknown scope '{other}'"
            ))),
        }
    }
}

impl TryFrom<String> for StandardScope {
    type Error = crate::types::SettingsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Callback that never caches
pub fn transient() -> ScopeCallback {
    Arc::new(|_ctx| None)
}

/// Callback that places every activation in one shared scope
pub fn singleton() -> ScopeCallback {
    let key = ScopeKey::new(StandardScope::Singleton);
    Arc::new(move |_ctx| Some(key.clone()))
}

/// Callback that scopes activations to the calling thread
pub fn thread() -> ScopeCallback {
    Arc::new(|_ctx| Some(THREAD_SCOPE.with(Clone::clone)))
}

thread_local! {
    static THREAD_SCOPE: ScopeKey = ScopeKey::new(std::thread::current().id());
}
