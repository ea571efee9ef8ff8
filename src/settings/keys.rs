//! Well-known setting keys and their defaults

use std::time::Duration;

pub const INJECT_ATTRIBUTE: &str = "InjectAttribute";
pub const OBSOLETE_ATTRIBUTE: &str = "ObsoleteAttribute";
pub const CACHE_PRUNING_INTERVAL: &str = "CachePruningInterval";
pub const DEFAULT_SCOPE_CALLBACK: &str = "DefaultScopeCallback";
pub const LOAD_EXTENSIONS: &str = "LoadExtensions";
pub const EXTENSION_SEARCH_PATTERNS: &str = "ExtensionSearchPatterns";
pub const USE_REFLECTION_BASED_INJECTION: &str = "UseReflectionBasedInjection";
pub const INJECT_NON_PUBLIC: &str = "InjectNonPublic";
pub const INJECT_PARENT_PRIVATE_PROPERTIES: &str = "InjectParentPrivateProperties";
pub const ACTIVATION_CACHE_DISABLED: &str = "ActivationCacheDisabled";
pub const ALLOW_NULL_INJECTION: &str = "AllowNullInjection";

/// Every well-known key
pub const ALL: [&str; 11] = [
    INJECT_ATTRIBUTE,
    OBSOLETE_ATTRIBUTE,
    CACHE_PRUNING_INTERVAL,
    DEFAULT_SCOPE_CALLBACK,
    LOAD_EXTENSIONS,
    EXTENSION_SEARCH_PATTERNS,
    USE_REFLECTION_BASED_INJECTION,
    INJECT_NON_PUBLIC,
    INJECT_PARENT_PRIVATE_PROPERTIES,
    ACTIVATION_CACHE_DISABLED,
    ALLOW_NULL_INJECTION,
];

/// Default interval between activation cache pruning passes
pub const DEFAULT_CACHE_PRUNING_INTERVAL: Duration = Duration::from_secs(30);

/// Default file name patterns for extension libraries, in search order
pub const DEFAULT_EXTENSION_SEARCH_PATTERNS: [&str; 2] = [
    "*inject_extension_*.{so,dylib,dll}",
    "*inject_web*.{so,dylib,dll}",
];

/// Check if `key` is one of the well-known keys
pub fn is_well_known(key: &str) -> bool {
    ALL.contains(&key)
}
