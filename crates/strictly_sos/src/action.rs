//! First-class move types for SOS.
//!
//! A move is a domain event: who wrote which letter where. Moves are kept in
//! the game history and can be replayed onto a fresh board.

use super::{Letter, Player, Position};
use derive_more::{Display, Error};
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A player writing a letter into a cell.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
#[display("{player} writes {letter} at {position}")]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The cell written to.
    pub position: Position,
    /// The letter written.
    pub letter: Letter,
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The target cell already holds a letter.
    #[display("Cell is already occupied.")]
    CellOccupied(#[error(not(source))] Position),

    /// The target cell is not on the board.
    #[display("Cell {position} is outside the {size}x{size} board.")]
    OutOfBounds {
        /// The requested cell.
        position: Position,
        /// Side length of the board.
        size: usize,
    },

    /// It is not this player's turn.
    #[display("It's not {_0}'s turn")]
    WrongPlayer(#[error(not(source))] Player),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {_0}")]
    InvariantViolation(#[error(not(source))] String),
}

impl MoveError {
    /// The cell the rejected move targeted, when there is one.
    pub fn position(&self) -> Option<Position> {
        match self {
            MoveError::CellOccupied(position) | MoveError::OutOfBounds { position, .. } => {
                Some(*position)
            }
            MoveError::WrongPlayer(_) | MoveError::InvariantViolation(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_display() {
        let action = Move::new(Player::Red, Position::new(1, 2), Letter::O);
        assert_eq!(action.to_string(), "Red writes O at (1, 2)");
    }

    #[test]
    fn test_occupied_message_matches_user_facing_text() {
        let err = MoveError::CellOccupied(Position::new(0, 0));
        assert_eq!(err.to_string(), "Cell is already occupied.");
        assert_eq!(err.position(), Some(Position::new(0, 0)));
    }

    #[test]
    fn test_out_of_bounds_message() {
        let err = MoveError::OutOfBounds {
            position: Position::new(5, 0),
            size: 3,
        };
        assert_eq!(err.to_string(), "Cell (5, 0) is outside the 3x3 board.");
    }
}
