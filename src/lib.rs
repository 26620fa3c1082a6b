//! Strictly SOS - the SOS board game in the terminal
//!
//! Two players, Blue and Red, take turns writing `S` or `O` into the empty
//! cells of an N×N board. The game logic lives in the `strictly_sos` crate;
//! this crate adds the front ends around it.
//!
//! # Architecture
//!
//! - **Settings**: pending mode, board size text, and letter for the next game
//! - **Config**: TOML file plus command-line overrides
//! - **TUI**: full-screen ratatui interface with clickable cells
//! - **Console**: line-oriented commands on stdin/stdout
//!
//! # Example
//!
//! ```
//! use strictly_sos_games::{ConsoleSession, GameConfig, Reply};
//!
//! let mut session = ConsoleSession::new(&GameConfig::default());
//! session.handle_line("move 0 0 S");
//! let reply = session.handle_line("move 0 0 O");
//! assert_eq!(reply, Reply::Continue("Error: Cell is already occupied.".to_string()));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod console;
mod settings;
mod tui;

// Crate-level exports - Command line
pub use cli::{Cli, Command, PlayArgs};

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, DEFAULT_LOG_FILE, GameConfig};

// Crate-level exports - Console front end
pub use console::{CommandError, ConsoleCommand, ConsoleSession, Reply};

// Crate-level exports - New-game settings
pub use settings::{INVALID_SIZE_MESSAGE, NewGameSettings, SettingsError, parse_board_size};

// Crate-level exports - Terminal UI
pub use tui::{App, AppAction, BoardGeometry, Focus, Popup, draw, move_cursor, player_color, run_tui};

// Crate-level exports - Game types
pub use strictly_sos::{
    Board, BoardSize, BoardSizeError, GameMode, Letter, Move, MoveError, Placement, Player,
    Position, SosGame, Square,
};
