//! New-game settings: the pending selections a player edits before starting a game.
//!
//! Board size arrives as free text from the size field and is validated here,
//! before any [`SosGame`] is built. Mode and size only take effect when a new
//! game starts; the letter applies to the very next move.

use derive_getters::Getters;
use derive_more::{Display, Error};
use strictly_sos::{BoardSize, GameMode, Letter, SosGame};
use tracing::{debug, info, instrument, warn};

/// Message shown when the board size field holds something unusable.
pub const INVALID_SIZE_MESSAGE: &str =
    "Please enter a valid integer for the board size (3 or greater).";

/// Longest text the size field accepts.
const MAX_SIZE_INPUT: usize = 4;

/// Rejected board size input.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Please enter a valid integer for the board size (3 or greater).")]
pub struct SettingsError {
    /// The text that failed validation.
    pub input: String,
}

/// Parses the board size field.
///
/// Blank input means the default size of 3. Anything that is not an
/// integer, or is an integer below 3 or above 99, is rejected.
#[instrument]
pub fn parse_board_size(input: &str) -> Result<BoardSize, SettingsError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        debug!("Blank size input, using default");
        return Ok(BoardSize::DEFAULT);
    }

    let invalid = || SettingsError {
        input: input.to_string(),
    };
    let size = trimmed.parse::<usize>().map_err(|_| invalid())?;
    BoardSize::new(size).map_err(|_| invalid())
}

/// Pending selections for the next game.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct NewGameSettings {
    /// Raw contents of the board size field.
    size_input: String,
    /// Mode the next game will be started with.
    mode: GameMode,
    /// Letter the next move will write.
    letter: Letter,
}

impl NewGameSettings {
    /// Creates settings pre-filled with the given selections.
    #[instrument]
    pub fn new(size: BoardSize, mode: GameMode, letter: Letter) -> Self {
        Self {
            size_input: size.to_string(),
            mode,
            letter,
        }
    }

    /// Appends a character to the size field.
    ///
    /// Any printable character is accepted so that bad input surfaces as a
    /// validation message when the game starts.
    pub fn push_size_char(&mut self, c: char) {
        if !c.is_control() && self.size_input.chars().count() < MAX_SIZE_INPUT {
            self.size_input.push(c);
        }
    }

    /// Removes the last character from the size field.
    pub fn pop_size_char(&mut self) {
        self.size_input.pop();
    }

    /// Replaces the size field.
    pub fn set_size_input(&mut self, input: impl Into<String>) {
        self.size_input = input.into();
    }

    /// Selects the mode for the next game.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        info!(%mode, "Selected game mode");
    }

    /// Toggles between `Simple` and `General`.
    pub fn toggle_mode(&mut self) {
        self.set_mode(self.mode.toggle());
    }

    /// Selects the letter for the next move.
    #[instrument(skip(self))]
    pub fn set_letter(&mut self, letter: Letter) {
        self.letter = letter;
        debug!(%letter, "Selected letter");
    }

    /// Swaps between `S` and `O`.
    pub fn toggle_letter(&mut self) {
        self.set_letter(self.letter.toggle());
    }

    /// Validates the size field and builds a fresh game from these settings.
    #[instrument(skip(self), fields(size_input = %self.size_input, mode = %self.mode))]
    pub fn start_game(&self) -> Result<SosGame, SettingsError> {
        match parse_board_size(&self.size_input) {
            Ok(size) => {
                info!(%size, "Starting new game");
                Ok(SosGame::new(size, self.mode))
            }
            Err(e) => {
                warn!("Rejected board size input");
                Err(e)
            }
        }
    }
}

impl Default for NewGameSettings {
    fn default() -> Self {
        Self::new(BoardSize::DEFAULT, GameMode::default(), Letter::default())
    }
}
