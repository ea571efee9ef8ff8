//! Settings loader
//!
//! Handles loading, merging, and applying settings layers from multiple sources.

use std::fmt;
use std::path::{Path, PathBuf};

use super::file::SettingsFile;
use super::store::SettingsStore;
use crate::types::{Result, RuntimeCapabilities};

/// Settings file names
const USER_SETTINGS_DIR: &str = ".inject";
const PROJECT_SETTINGS_DIR: &str = ".inject";
const SETTINGS_FILE: &str = "settings.json";
const LOCAL_SETTINGS_FILE: &str = "settings.local.json";

/// Source of environment overrides
type EnvLookup = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Loader for layered settings
///
/// Priority: Environment > Local > Project > User
pub struct SettingsLoader {
    /// The merged file layers
    layers: SettingsFile,
    /// Project working directory
    project_dir: PathBuf,
    /// Home directory holding the user settings, if read
    home_dir: Option<PathBuf>,
    /// Lookup for `INJECT_*` overrides
    env: EnvLookup,
}

impl fmt::Debug for SettingsLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SettingsLoader")
            .field("project_dir", &self.project_dir)
            .field("home_dir", &self.home_dir)
            .finish_non_exhaustive()
    }
}

impl SettingsLoader {
    /// Create a loader for `project_dir` and load every source
    ///
    /// Reads the user settings under the home directory and the process
    /// environment.
    pub fn new(project_dir: impl AsRef<Path>) -> Self {
        Self::with_sources(project_dir, dirs::home_dir(), |name| {
            std::env::var(name).ok()
        })
    }

    /// Create a loader that reads only the project files
    pub fn project_only(project_dir: impl AsRef<Path>) -> Self {
        Self::with_sources(project_dir, None, |_| None)
    }

    /// Create a loader with explicit user and environment sources
    ///
    /// `home_dir` is the directory holding `.inject/settings.json` for the
    /// user layer; `None` skips that layer. `env` resolves override variables.
    pub fn with_sources<F>(
        project_dir: impl AsRef<Path>,
        home_dir: Option<PathBuf>,
        env: F,
    ) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        let mut loader = Self {
            layers: SettingsFile::new(),
            project_dir: project_dir.as_ref().to_path_buf(),
            home_dir,
            env: Box::new(env),
        };
        loader.reload();
        loader
    }

    /// Reload settings from all sources
    pub fn reload(&mut self) {
        let mut layers = SettingsFile::new();

        // 1. Load user settings (~/.inject/settings.json)
        if let Some(user_settings) = self.home_dir.as_deref().and_then(Self::load_user_settings) {
            tracing::debug!("Loaded user settings");
            layers.merge(user_settings);
        }

        // 2. Load project settings (.inject/settings.json)
        if let Some(project_settings) = Self::load_project_settings(&self.project_dir) {
            tracing::debug!("Loaded project settings from {:?}", self.project_dir);
            layers.merge(project_settings);
        }

        // 3. Load local settings (.inject/settings.local.json)
        if let Some(local_settings) = Self::load_local_settings(&self.project_dir) {
            tracing::debug!("Loaded local settings from {:?}", self.project_dir);
            layers.merge(local_settings);
        }

        // 4. Environment overrides
        let env_settings = SettingsFile::from_env_with(|name| (self.env)(name));
        if !env_settings.is_empty() {
            tracing::debug!("Applied environment overrides");
            layers.merge(env_settings);
        }

        self.layers = layers;
    }

    /// Load user settings from <home>/.inject/settings.json
    fn load_user_settings(home_dir: &Path) -> Option<SettingsFile> {
        let path = home_dir.join(USER_SETTINGS_DIR).join(SETTINGS_FILE);
        Self::load_settings_file(&path)
    }

    /// Load project settings from .inject/settings.json
    fn load_project_settings(project_dir: &Path) -> Option<SettingsFile> {
        let path = project_dir.join(PROJECT_SETTINGS_DIR).join(SETTINGS_FILE);
        Self::load_settings_file(&path)
    }

    /// Load local settings from .inject/settings.local.json
    fn load_local_settings(project_dir: &Path) -> Option<SettingsFile> {
        let path = project_dir
            .join(PROJECT_SETTINGS_DIR)
            .join(LOCAL_SETTINGS_FILE);
        Self::load_settings_file(&path)
    }

    /// Load settings from a file
    fn load_settings_file(path: &Path) -> Option<SettingsFile> {
        if !path.exists() {
            return None;
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match SettingsFile::from_json(&content) {
                Ok(settings) => Some(settings),
                Err(e) => {
                    tracing::warn!("Failed to parse settings file {:?}: {}", path, e);
                    None
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read settings file {:?}: {}", path, e);
                None
            }
        }
    }

    /// Get the merged layers
    pub fn layers(&self) -> &SettingsFile {
        &self.layers
    }

    /// Get the project directory
    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// Apply the merged layers on top of an existing store
    pub fn apply_to(&self, store: &mut SettingsStore) -> Result<()> {
        self.layers.apply_to(store)
    }

    /// Build a fresh store holding the merged layers
    pub fn build(&self) -> Result<SettingsStore> {
        self.build_with(RuntimeCapabilities::default())
    }

    /// Build a fresh store for a runtime with the given capabilities
    pub fn build_with(&self, capabilities: RuntimeCapabilities) -> Result<SettingsStore> {
        let mut store = SettingsStore::with_capabilities(capabilities);
        self.apply_to(&mut store)?;
        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::time::Duration;
    use tempfile::TempDir;

    fn write_settings(dir: &Path, name: &str, content: &str) {
        let settings_dir = dir.join(".inject");
        std::fs::create_dir_all(&settings_dir).unwrap();
        let mut file = std::fs::File::create(settings_dir.join(name)).unwrap();
        writeln!(file, "{content}").unwrap();
    }

    #[test]
    fn test_loader_without_files() {
        let temp_dir = TempDir::new().unwrap();
        let loader = SettingsLoader::project_only(temp_dir.path());

        assert_eq!(loader.project_dir(), temp_dir.path());
        assert!(loader.layers().is_empty());

        let store = loader.build().unwrap();
        assert!(store.is_empty());
        assert!(store.load_extensions().unwrap());
    }

    #[test]
    fn test_loader_layer_priority() {
        let home = TempDir::new().unwrap();
        let project = TempDir::new().unwrap();
        write_settings(
            home.path(),
            "settings.json",
            r#"{"cachePruningIntervalSecs": 1, "injectNonPublic": true, "loadExtensions": false}"#,
        );
        write_settings(
            project.path(),
            "settings.json",
            r#"{"cachePruningIntervalSecs": 2, "loadExtensions": true}"#,
        );
        write_settings(
            project.path(),
            "settings.local.json",
            r#"{"cachePruningIntervalSecs": 3, "allowNullInjection": true}"#,
        );

        let loader = SettingsLoader::with_sources(
            project.path(),
            Some(home.path().to_path_buf()),
            |name| (name == "INJECT_ALLOW_NULL_INJECTION").then(|| "false".to_string()),
        );
        let store = loader.build().unwrap();

        // Local beats project beats user
        assert_eq!(store.cache_pruning_interval().unwrap(), Duration::from_secs(3));
        assert!(store.load_extensions().unwrap());
        // Only the user layer sets this one
        assert!(store.inject_non_public().unwrap());
        // Environment beats every file
        assert!(!store.allow_null_injection().unwrap());
    }

    #[test]
    fn test_loader_without_home_skips_user_layer() {
        let project = TempDir::new().unwrap();
        let loader = SettingsLoader::with_sources(project.path(), None, |_| None);
        assert!(loader.layers().is_empty());
        assert!(format!("{loader:?}").contains("home_dir: None"));
    }

    #[test]
    fn test_loader_env_patterns_validated() {
        let project = TempDir::new().unwrap();
        let loader = SettingsLoader::with_sources(project.path(), None, |name| {
            (name == "INJECT_EXTENSION_SEARCH_PATTERNS").then(|| "bad[".to_string())
        });
        let err = loader.build().unwrap_err();
        assert_eq!(err.kind(), "invalid_pattern");
    }

    #[test]
    fn test_loader_project_settings() {
        let temp_dir = TempDir::new().unwrap();
        write_settings(
            temp_dir.path(),
            "settings.json",
            r#"{
            "cachePruningIntervalSecs": 5,
            "injectNonPublic": true
        }"#,
        );

        let store = SettingsLoader::project_only(temp_dir.path()).build().unwrap();

        assert_eq!(store.cache_pruning_interval().unwrap(), Duration::from_secs(5));
        assert!(store.inject_non_public().unwrap());
    }

    #[test]
    fn test_loader_local_overrides_project() {
        let temp_dir = TempDir::new().unwrap();
        write_settings(
            temp_dir.path(),
            "settings.json",
            r#"{
            "cachePruningIntervalSecs": 5,
            "allowNullInjection": true
        }"#,
        );
        write_settings(
            temp_dir.path(),
            "settings.local.json",
            r#"{
            "cachePruningIntervalSecs": 60
        }"#,
        );

        let store = SettingsLoader::project_only(temp_dir.path()).build().unwrap();

        // Local interval should override project
        assert_eq!(store.cache_pruning_interval().unwrap(), Duration::from_secs(60));
        // Null injection from project should remain
        assert!(store.allow_null_injection().unwrap());
    }

    #[test]
    fn test_loader_skips_broken_file() {
        let temp_dir = TempDir::new().unwrap();
        write_settings(temp_dir.path(), "settings.json", r#"{"loadExtensions": false}"#);
        write_settings(temp_dir.path(), "settings.local.json", "{ not json");

        let store = SettingsLoader::project_only(temp_dir.path()).build().unwrap();
        assert!(!store.load_extensions().unwrap());
    }

    #[test]
    fn test_loader_invalid_patterns_fail_build() {
        let temp_dir = TempDir::new().unwrap();
        write_settings(
            temp_dir.path(),
            "settings.json",
            r#"{"extensionSearchPatterns": ["ext[.so"]}"#,
        );

        let err = SettingsLoader::project_only(temp_dir.path()).build().unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_loader_apply_to_existing_store() {
        let temp_dir = TempDir::new().unwrap();
        write_settings(temp_dir.path(), "settings.json", r#"{"loadExtensions": false}"#);

        let mut store = SettingsStore::new();
        store.set_inject_non_public(true);
        SettingsLoader::project_only(temp_dir.path())
            .apply_to(&mut store)
            .unwrap();

        assert!(!store.load_extensions().unwrap());
        assert!(store.inject_non_public().unwrap());
    }

    #[test]
    fn test_loader_build_with_capabilities() {
        let temp_dir = TempDir::new().unwrap();
        let store = SettingsLoader::project_only(temp_dir.path())
            .build_with(RuntimeCapabilities::without_codegen())
            .unwrap();
        assert!(store.use_reflection_based_injection().unwrap());
    }

    #[test]
    fn test_loader_reload() {
        let temp_dir = TempDir::new().unwrap();
        write_settings(temp_dir.path(), "settings.json", r#"{"cachePruningIntervalSecs": 5}"#);

        let mut loader = SettingsLoader::project_only(temp_dir.path());
        assert_eq!(loader.layers().cache_pruning_interval_secs, Some(5));

        // Update the file
        write_settings(temp_dir.path(), "settings.json", r#"{"cachePruningIntervalSecs": 9}"#);

        // Reload
        loader.reload();
        assert_eq!(loader.layers().cache_pruning_interval_secs, Some(9));
    }
}
