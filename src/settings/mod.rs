//! Settings management
//!
//! A generic key/value store with typed reads, the named settings layered on
//! top of it, and loading of settings layers from:
//! - User settings: `~/.inject/settings.json`
//! - Project settings: `.inject/settings.json`
//! - Local settings: `.inject/settings.local.json`
//! - Environment: `INJECT_*` variables
//!
//! Priority: Environment > Local > Project > User

mod file;
pub mod keys;
mod loader;
mod options;
mod snapshot;
mod store;

pub use file::SettingsFile;
pub use loader::SettingsLoader;
pub use options::InjectSettings;
pub use snapshot::EffectiveSettings;
pub use store::SettingsStore;
