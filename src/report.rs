//! Effective settings report printed by the binary

use crate::cli::Cli;
use crate::settings::{EffectiveSettings, SettingsLoader, SettingsStore};
use crate::types::Result;

/// Effective settings of a project plus extension pattern checks
#[derive(Debug, Clone)]
pub struct Report {
    pub effective: EffectiveSettings,
    /// Each requested file name and whether it matches the extension patterns
    pub matches: Vec<(String, bool)>,
}

impl Report {
    /// Load the project settings named by `cli` and build the report
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        Self::from_loader(&SettingsLoader::new(&cli.project_dir), cli)
    }

    /// Build the report from the layers of `loader`
    pub fn from_loader(loader: &SettingsLoader, cli: &Cli) -> Result<Self> {
        let store = loader.build_with(cli.capabilities())?;
        tracing::debug!(keys = store.len(), "Settings loaded");
        Self::from_store(&store, &cli.matches)
    }

    /// Build the report for an already populated store
    pub fn from_store(store: &SettingsStore, names: &[String]) -> Result<Self> {
        let effective = EffectiveSettings::capture(store)?;
        let matches = if names.is_empty() {
            Vec::new()
        } else {
            let matcher = store.extension_matcher()?;
            names
                .iter()
                .map(|name| (name.clone(), matcher.is_match(name)))
                .collect()
        };
        Ok(Self { effective, matches })
    }

    /// Render the settings as JSON followed by one line per match check
    pub fn render(&self) -> Result<String> {
        let mut out = self.effective.to_json_pretty()?;
        out.push('\n');
        for (name, matched) in &self.matches {
            let verdict = if *matched { "extension" } else { "not an extension" };
            out.push_str(&format!("{name}: {verdict}\n"));
        }
        Ok(out)
    }
}
