//! Settings inspector binary
//!
//! Run with: cargo run -- --project-dir <DIR>
//!
//! For help: cargo run -- --help

use clap::Parser;
use inject_settings::logging::{ErrorTraceExt, init_logging};
use inject_settings::{Cli, Report};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    match Report::from_cli(&cli).and_then(|report| report.render()) {
        Ok(output) => {
            print!("{output}");
            Ok(())
        }
        Err(e) => {
            e.trace_error();
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
