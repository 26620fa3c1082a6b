//! Strictly SOS - command-line entry point.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use std::sync::Arc;
use strictly_sos_games::{Cli, Command, ConsoleSession, run_tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    init_tracing(config.log_file())?;
    info!(?config, "Configuration resolved");

    match cli.command() {
        Command::Tui(_) => run_tui(&config),
        Command::Console(_) => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            ConsoleSession::new(&config).run(stdin.lock(), stdout.lock())
        }
    }
}

/// Sends logs to a file so they never interfere with the terminal UI.
fn init_tracing(log_file: &Path) -> Result<()> {
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
