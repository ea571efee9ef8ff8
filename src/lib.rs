//! Inject Settings
//!
//! The configuration container of a dependency-injection kernel: a store of
//! named option values with typed reads, documented defaults, and snapshot
//! cloning.
//!
//! ## Features
//!
//! - Heterogeneous key/value storage with type-checked reads
//! - Named accessors for the kernel's well-known options
//! - Shallow snapshot clones
//! - Layered loading from settings files and environment variables
//!
//! ## Quick Start
//!
//! ```
//! use std::time::Duration;
//! use inject_settings::SettingsStore;
//!
//! let mut settings = SettingsStore::new();
//! assert_eq!(settings.cache_pruning_interval()?, Duration::from_secs(30));
//!
//! settings.set_cache_pruning_interval(Duration::from_secs(5));
//! let snapshot = settings.clone();
//! settings.set_cache_pruning_interval(Duration::from_secs(10));
//!
//! assert_eq!(snapshot.cache_pruning_interval()?, Duration::from_secs(5));
//! # Ok::<(), inject_settings::SettingsError>(())
//! ```
//!
//! ## Well-known settings
//!
//! | Key | Type | Default |
//! |---|---|---|
//! | `InjectAttribute` | `MarkerType` | `Inject` |
//! | `ObsoleteAttribute` | `MarkerType` | `Obsolete` |
//! | `CachePruningInterval` | `Duration` | 30 seconds |
//! | `DefaultScopeCallback` | `ScopeCallback` | transient |
//! | `LoadExtensions` | `bool` | `true` |
//! | `ExtensionSearchPatterns` | `Vec<String>` | two built-in globs |
//! | `UseReflectionBasedInjection` | `bool` | `false` unless the runtime lacks dynamic codegen |
//! | `InjectNonPublic` | `bool` | `false` |
//! | `InjectParentPrivateProperties` | `bool` | `false` |
//! | `ActivationCacheDisabled` | `bool` | `false` |
//! | `AllowNullInjection` | `bool` | `false` |
//!
//! ## Configuration Loading Priority
//!
//! [`SettingsLoader`] layers the following sources (highest to lowest):
//!
//! 1. **Environment Variables** - `INJECT_*`
//! 2. `.inject/settings.local.json`
//! 3. `.inject/settings.json`
//! 4. `~/.inject/settings.json`
//! 5. **Defaults**
//!
//! ### Example settings.json
//!
//! ```json
//! {
//!   "cachePruningIntervalSecs": 60,
//!   "defaultScope": "singleton",
//!   "loadExtensions": false
//! }
//! ```

pub mod cli;
pub mod logging;
pub mod report;
pub mod settings;
pub mod types;

pub use cli::Cli;
pub use report::Report;
pub use settings::{
    EffectiveSettings, InjectSettings, SettingsFile, SettingsLoader, SettingsStore, keys,
};
pub use types::{
    ActivationContext, Inject, MarkerType, Obsolete, Result, RuntimeCapabilities, ScopeCallback,
    ScopeKey, SettingsError, StandardScope,
};
