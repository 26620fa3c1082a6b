//! Line-oriented front end: type commands, read the board back as text.

use crate::config::GameConfig;
use crate::settings::NewGameSettings;
use anyhow::{Context, Result};
use derive_more::{Display, Error};
use std::io::{BufRead, Write};
use std::str::FromStr;
use strictly_sos::{GameMode, Letter, SosGame};
use tracing::{debug, info, instrument, warn};

const HELP: &str = "\
Commands:
  move <row> <col> [S|O]   write a letter (defaults to the selected letter)
  letter <S|O>             select the letter for the next move
  mode <simple|general>    select the mode for the next game
  new [size]               start a new game (size defaults to the size field)
  board                    show the board
  help                     show this help
  quit                     leave the game";

/// A parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Write a letter at a cell.
    Move {
        /// Row index.
        row: usize,
        /// Column index.
        col: usize,
        /// Letter to write; `None` uses the selected letter.
        letter: Option<Letter>,
    },
    /// Select the letter for the next move.
    Letter(Letter),
    /// Select the mode for the next game.
    Mode(GameMode),
    /// Start a new game, optionally with new size text.
    New(Option<String>),
    /// Print the board.
    Board,
    /// Print the command list.
    Help,
    /// Leave.
    Quit,
}

/// A line that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum CommandError {
    /// Nothing was typed.
    #[display("Type a command, or 'help' for the list")]
    Empty,
    /// The first word is not a command.
    #[display("Unknown command '{_0}', type 'help' for the list")]
    Unknown(#[error(not(source))] String),
    /// A known command with the wrong arguments.
    #[display("Usage: {_0}")]
    Usage(#[error(not(source))] &'static str),
}

impl FromStr for ConsoleCommand {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((command, args)) = words.split_first() else {
            return Err(CommandError::Empty);
        };

        match (command.to_lowercase().as_str(), args) {
            ("move" | "m", [row, col, rest @ ..]) if rest.len() <= 1 => {
                let usage = CommandError::Usage("move <row> <col> [S|O]");
                let row = row.parse().map_err(|_| usage.clone())?;
                let col = col.parse().map_err(|_| usage.clone())?;
                let letter = match rest.first() {
                    Some(l) => Some(Letter::from_str(l).map_err(|_| usage)?),
                    None => None,
                };
                Ok(ConsoleCommand::Move { row, col, letter })
            }
            ("move" | "m", _) => Err(CommandError::Usage("move <row> <col> [S|O]")),
            ("letter" | "l", [letter]) => Letter::from_str(letter)
                .map(ConsoleCommand::Letter)
                .map_err(|_| CommandError::Usage("letter <S|O>")),
            ("letter" | "l", _) => Err(CommandError::Usage("letter <S|O>")),
            ("mode", [mode]) => GameMode::from_str(mode)
                .map(ConsoleCommand::Mode)
                .map_err(|_| CommandError::Usage("mode <simple|general>")),
            ("mode", _) => Err(CommandError::Usage("mode <simple|general>")),
            ("new" | "n", []) => Ok(ConsoleCommand::New(None)),
            ("new" | "n", [size]) => Ok(ConsoleCommand::New(Some((*size).to_string()))),
            ("new" | "n", _) => Err(CommandError::Usage("new [size]")),
            ("board" | "b", []) => Ok(ConsoleCommand::Board),
            ("help" | "h" | "?", []) => Ok(ConsoleCommand::Help),
            ("quit" | "q" | "exit", []) => Ok(ConsoleCommand::Quit),
            (other, _) => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// What the session wants after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print this text and keep reading.
    Continue(String),
    /// Stop reading.
    Quit,
}

/// One console session: the current game plus the pending settings.
#[derive(Debug, Clone)]
pub struct ConsoleSession {
    game: SosGame,
    settings: NewGameSettings,
}

impl ConsoleSession {
    /// Starts a session with a first game built from the configuration.
    #[instrument(skip(config))]
    pub fn new(config: &GameConfig) -> Self {
        let settings = NewGameSettings::new(*config.board_size(), *config.mode(), *config.letter());
        Self {
            game: SosGame::new(*config.board_size(), *config.mode()),
            settings,
        }
    }

    /// Returns the current game.
    pub fn game(&self) -> &SosGame {
        &self.game
    }

    /// Returns the pending settings.
    pub fn settings(&self) -> &NewGameSettings {
        &self.settings
    }

    /// The turn banner, e.g. `Current Player: BLUE`.
    pub fn status_line(&self) -> String {
        format!(
            "Current Player: {}",
            self.game.current_turn().label().to_uppercase()
        )
    }

    fn board_with_status(&self) -> String {
        format!(
            "{} game, {}x{}\n{}\n{}",
            self.game.mode(),
            self.game.size(),
            self.game.size(),
            self.game.board().display(),
            self.status_line()
        )
    }

    /// Parses and runs one input line.
    #[instrument(skip(self))]
    pub fn handle_line(&mut self, line: &str) -> Reply {
        match line.parse::<ConsoleCommand>() {
            Ok(command) => self.execute(command),
            Err(e) => Reply::Continue(e.to_string()),
        }
    }

    /// Runs one command against the session.
    #[instrument(skip(self))]
    pub fn execute(&mut self, command: ConsoleCommand) -> Reply {
        debug!(?command, "Executing console command");
        let text = match command {
            ConsoleCommand::Move { row, col, letter } => {
                let letter = letter.unwrap_or(*self.settings.letter());
                match self.game.make_move(row, col, letter) {
                    Ok(action) => format!("{}\n{}", action, self.board_with_status()),
                    Err(e) => {
                        warn!(error = %e, "Move rejected");
                        format!("Error: {}", e)
                    }
                }
            }
            ConsoleCommand::Letter(letter) => {
                self.settings.set_letter(letter);
                format!("Current Letter: {}", letter)
            }
            ConsoleCommand::Mode(mode) => {
                self.settings.set_mode(mode);
                format!("Game Mode: {} (applies to the next new game)", mode)
            }
            ConsoleCommand::New(size) => {
                if let Some(size) = size {
                    self.settings.set_size_input(size);
                }
                match self.settings.start_game() {
                    Ok(game) => {
                        self.game = game;
                        self.board_with_status()
                    }
                    Err(e) => format!("Invalid Input: {}", e),
                }
            }
            ConsoleCommand::Board => self.board_with_status(),
            ConsoleCommand::Help => HELP.to_string(),
            ConsoleCommand::Quit => return Reply::Quit,
        };
        Reply::Continue(text)
    }

    /// Reads commands from `input` until `quit` or end of input.
    #[instrument(skip_all)]
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        info!("Starting console session");
        writeln!(output, "SOS\n{}", self.board_with_status()).context("Failed to write output")?;

        for line in input.lines() {
            let line = line.context("Failed to read input")?;
            if line.trim().is_empty() {
                continue;
            }
            match self.handle_line(&line) {
                Reply::Continue(text) => {
                    writeln!(output, "{}", text).context("Failed to write output")?
                }
                Reply::Quit => break,
            }
        }

        info!("Console session ended");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::INVALID_SIZE_MESSAGE;
    use strictly_sos::{Player, Position, Square};

    fn session() -> ConsoleSession {
        ConsoleSession::new(&GameConfig::default())
    }

    #[test]
    fn test_parse_move_with_and_without_letter() {
        assert_eq!(
            "move 1 2 o".parse::<ConsoleCommand>(),
            Ok(ConsoleCommand::Move {
                row: 1,
                col: 2,
                letter: Some(Letter::O)
            })
        );
        assert_eq!(
            "M 0 0".parse::<ConsoleCommand>(),
            Ok(ConsoleCommand::Move {
                row: 0,
                col: 0,
                letter: None
            })
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<ConsoleCommand>(), Err(CommandError::Empty));
        assert!(matches!(
            "move one 2".parse::<ConsoleCommand>(),
            Err(CommandError::Usage(_))
        ));
        assert!(matches!(
            "move 1 2 X".parse::<ConsoleCommand>(),
            Err(CommandError::Usage(_))
        ));
        assert!(matches!(
            "dance".parse::<ConsoleCommand>(),
            Err(CommandError::Unknown(_))
        ));
    }

    #[test]
    fn test_parse_other_commands() {
        assert_eq!("letter O".parse::<ConsoleCommand>(), Ok(ConsoleCommand::Letter(Letter::O)));
        assert_eq!("mode General".parse::<ConsoleCommand>(), Ok(ConsoleCommand::Mode(GameMode::General)));
        assert_eq!("new 5".parse::<ConsoleCommand>(), Ok(ConsoleCommand::New(Some("5".to_string()))));
        assert_eq!("new".parse::<ConsoleCommand>(), Ok(ConsoleCommand::New(None)));
        assert_eq!("quit".parse::<ConsoleCommand>(), Ok(ConsoleCommand::Quit));
    }

    #[test]
    fn test_move_uses_selected_letter() {
        let mut session = session();
        session.handle_line("letter o");
        session.handle_line("move 1 1");
        let square = session.game().board().get(Position::new(1, 1));
        assert_eq!(square.and_then(Square::letter), Some(Letter::O));
        assert_eq!(session.status_line(), "Current Player: RED");
    }

    #[test]
    fn test_occupied_cell_reports_error() {
        let mut session = session();
        session.handle_line("move 0 0 S");
        let reply = session.handle_line("move 0 0 O");
        assert_eq!(
            reply,
            Reply::Continue("Error: Cell is already occupied.".to_string())
        );
        assert_eq!(session.game().current_turn(), Player::Red);
    }

    #[test]
    fn test_new_game_validates_size() {
        let mut session = session();
        session.handle_line("move 0 0 S");
        let reply = session.handle_line("new 2");
        assert_eq!(
            reply,
            Reply::Continue(
                "Invalid Input: Please enter a valid integer for the board size (3 or greater)."
                    .to_string()
            )
        );
        // The old game survives a rejected restart.
        assert_eq!(session.game().history().len(), 1);
    }

    #[test]
    fn test_new_game_rejects_oversized_board() {
        let mut session = session();
        for size in ["100000", "4294967296"] {
            let reply = session.handle_line(&format!("new {}", size));
            assert_eq!(
                reply,
                Reply::Continue(format!("Invalid Input: {}", INVALID_SIZE_MESSAGE))
            );
            assert_eq!(session.game().size().get(), 3);
        }
    }

    #[test]
    fn test_mode_applies_on_next_new_game() {
        let mut session = session();
        session.handle_line("mode general");
        assert_eq!(session.game().mode(), GameMode::Simple);
        session.handle_line("new 4");
        assert_eq!(session.game().mode(), GameMode::General);
        assert_eq!(session.game().size().get(), 4);
        assert_eq!(session.game().current_turn(), Player::Blue);
    }

    #[test]
    fn test_run_stops_at_quit() {
        let mut session = session();
        let input = "move 0 0\n\nmove 0 1 O\nquit\nmove 2 2\n";
        let mut output = Vec::new();
        session.run(input.as_bytes(), &mut output).unwrap();

        assert_eq!(session.game().history().len(), 2);
        let text = String::from_utf8(output).unwrap();
        assert!(text.starts_with("SOS\n"));
        assert!(text.contains("Blue writes S at (0, 0)"));
        assert!(text.contains("Red writes O at (0, 1)"));
    }
}
