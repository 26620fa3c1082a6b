//! Command-line interface for the SOS game.

use crate::config::{ConfigError, GameConfig};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use strictly_sos::{GameMode, Letter};
use tracing::instrument;

/// SOS - a two-player letter placement game for the terminal
#[derive(Parser, Debug)]
#[command(name = "sos")]
#[command(about = "Two-player SOS board game", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./sos.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// File that receives log output
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run (defaults to the terminal UI)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available front ends.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the full-screen terminal UI
    Tui(PlayArgs),

    /// Play with typed commands on stdin/stdout
    Console(PlayArgs),
}

/// Options for the first game of a session.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayArgs {
    /// Board side length (3 to 99)
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Game mode: simple or general
    #[arg(short, long)]
    pub mode: Option<GameMode>,

    /// Letter selected for the first move: S or O
    #[arg(short, long)]
    pub letter: Option<Letter>,
}

impl Cli {
    /// Returns the chosen command, falling back to the terminal UI.
    pub fn command(&self) -> Command {
        self.command
            .clone()
            .unwrap_or_else(|| Command::Tui(PlayArgs::default()))
    }

    /// Resolves the effective configuration: defaults, then file, then flags.
    #[instrument(skip(self))]
    pub fn resolve_config(&self) -> Result<GameConfig, ConfigError> {
        let args = match self.command() {
            Command::Tui(args) | Command::Console(args) => args,
        };
        GameConfig::load(self.config.as_deref())?.with_overrides(
            args.size,
            args.mode,
            args.letter,
            self.log_file.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_tui() {
        let cli = Cli::parse_from(["sos"]);
        assert_eq!(cli.command(), Command::Tui(PlayArgs::default()));
    }

    #[test]
    fn test_console_flags_parse() {
        let cli = Cli::parse_from(["sos", "console", "--size", "5", "--mode", "general", "-l", "o"]);
        assert_eq!(
            cli.command(),
            Command::Console(PlayArgs {
                size: Some(5),
                mode: Some(GameMode::General),
                letter: Some(Letter::O),
            })
        );
    }

    #[test]
    fn test_bad_mode_rejected() {
        assert!(Cli::try_parse_from(["sos", "tui", "--mode", "hard"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["sos", "tui", "--log-file", "game.log"]);
        assert_eq!(cli.log_file, Some(PathBuf::from("game.log")));
    }
}
