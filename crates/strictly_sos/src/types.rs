//! Core domain types for SOS.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString};

/// Player in the game.
///
/// The names carry no meaning beyond turn order.
#[derive(
    Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Blue player (goes first).
    Blue,
    /// Red player (goes second).
    Red,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Blue => Player::Red,
            Player::Red => Player::Blue,
        }
    }

    /// Display label for this player.
    pub fn label(self) -> &'static str {
        match self {
            Player::Blue => "Blue",
            Player::Red => "Red",
        }
    }
}

/// One of the two symbols a player may write into a cell.
#[derive(
    Debug,
    Display,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Letter {
    /// The letter `S`.
    #[default]
    S,
    /// The letter `O`.
    O,
}

impl Letter {
    /// Returns the single character written on the board.
    pub fn as_char(self) -> char {
        match self {
            Letter::S => 'S',
            Letter::O => 'O',
        }
    }

    /// Returns the other letter.
    pub fn toggle(self) -> Self {
        match self {
            Letter::S => Letter::O,
            Letter::O => Letter::S,
        }
    }
}

/// Game mode label.
///
/// Both modes play identically: the mode is recorded with the game and shown
/// to the players, nothing more.
#[derive(
    Debug,
    Display,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum GameMode {
    /// Simple game.
    #[default]
    Simple,
    /// General game.
    General,
}

impl GameMode {
    /// Toggles between `Simple` and `General`.
    pub fn toggle(self) -> Self {
        match self {
            GameMode::Simple => GameMode::General,
            GameMode::General => GameMode::Simple,
        }
    }
}

/// A letter together with the player who wrote it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    /// The letter written.
    pub letter: Letter,
    /// The player who wrote it.
    pub player: Player,
}

/// A cell on the SOS board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a letter.
    Occupied(Placement),
}

impl Square {
    /// Returns the letter in this cell, if any.
    pub fn letter(self) -> Option<Letter> {
        match self {
            Square::Empty => None,
            Square::Occupied(placement) => Some(placement.letter),
        }
    }

    /// Returns the player who filled this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(placement) => Some(placement.player),
        }
    }
}
