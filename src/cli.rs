//! Command-line interface definitions
//!
//! Provides CLI argument parsing using clap for the settings inspector.

use std::path::PathBuf;

use clap::Parser;

use crate::types::RuntimeCapabilities;

/// Inspect the effective dependency-injection settings of a project
#[derive(Parser, Debug, Clone)]
#[command(name = "inject-settings")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Project directory holding `.inject/settings.json`
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub project_dir: PathBuf,

    /// Resolve defaults for a runtime without dynamic code generation
    #[arg(long)]
    pub no_dynamic_codegen: bool,

    /// File name to test against the extension search patterns (repeatable)
    #[arg(short, long = "match", value_name = "NAME")]
    pub matches: Vec<String>,

    /// Increase logging verbosity (-v, -vv)
    /// Note: RUST_LOG env var takes priority over this flag
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (only errors)
    /// Note: RUST_LOG env var takes priority over this flag
    #[arg(short, long)]
    pub quiet: bool,
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            project_dir: PathBuf::from("."),
            no_dynamic_codegen: false,
            matches: Vec::new(),
            verbose: 0,
            quiet: false,
        }
    }
}

impl Cli {
    /// Get the log level based on CLI arguments
    ///
    /// - `--quiet`: ERROR
    /// - default: INFO
    /// - `-v`: DEBUG
    /// - `-vv` or more: TRACE
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else {
            match self.verbose {
                0 => tracing::Level::INFO,
                1 => tracing::Level::DEBUG,
                _ => tracing::Level::TRACE,
            }
        }
    }

    /// Runtime capabilities selected on the command line
    pub fn capabilities(&self) -> RuntimeCapabilities {
        RuntimeCapabilities::new(!self.no_dynamic_codegen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cli() {
        let cli = Cli::default();
        assert_eq!(cli.project_dir, PathBuf::from("."));
        assert_eq!(cli.log_level(), tracing::Level::INFO);
        assert!(cli.capabilities().dynamic_codegen);
    }

    #[test]
    fn test_parse_args() {
        let cli = Cli::parse_from([
            "inject-settings",
            "--project-dir",
            "/srv/app",
            "--no-dynamic-codegen",
            "-m",
            "libinject_extension_a.so",
            "--match",
            "other.dll",
        ]);
        assert_eq!(cli.project_dir, PathBuf::from("/srv/app"));
        assert!(!cli.capabilities().dynamic_codegen);
        assert_eq!(cli.matches, vec!["libinject_extension_a.so", "other.dll"]);
    }

    #[test]
    fn test_parse_defaults_match_default_impl() {
        let cli = Cli::parse_from(["inject-settings"]);
        assert_eq!(cli.project_dir, Cli::default().project_dir);
        assert!(cli.matches.is_empty());
        assert!(!cli.no_dynamic_codegen);
    }

    #[test]
    fn test_log_levels() {
        // Quiet mode
        let cli = Cli {
            quiet: true,
            ..Default::default()
        };
        assert_eq!(cli.log_level(), tracing::Level::ERROR);

        // Default
        let cli = Cli::default();
        assert_eq!(cli.log_level(), tracing::Level::INFO);

        // Verbose
        let cli = Cli {
            verbose: 1,
            ..Default::default()
        };
        assert_eq!(cli.log_level(), tracing::Level::DEBUG);

        // Very verbose
        let cli = Cli {
            verbose: 2,
            ..Default::default()
        };
        assert_eq!(cli.log_level(), tracing::Level::TRACE);
    }
}
