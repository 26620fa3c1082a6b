//! Pure SOS game logic.
//!
//! Two players, Blue and Red, take turns writing an `S` or an `O` into the
//! empty cells of a square board. This crate owns the board and the turn
//! and enforces the one rule the game has: a move may only target an empty
//! cell. It has no terminal, file, or network dependencies.
//!
//! # Example
//!
//! ```
//! use strictly_sos::{BoardSize, GameMode, Letter, MoveError, Player, SosGame};
//!
//! let mut game = SosGame::new(BoardSize::DEFAULT, GameMode::Simple);
//! game.make_move(0, 0, Letter::S).unwrap();
//! assert_eq!(game.current_turn(), Player::Red);
//!
//! let err = game.make_move(0, 0, Letter::O).unwrap_err();
//! assert!(matches!(err, MoveError::CellOccupied(_)));
//! assert_eq!(game.current_turn(), Player::Red);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod contracts;
mod game;
mod invariants;
mod types;

pub use action::{Move, MoveError};
pub use board::{Board, BoardSize, BoardSizeError, Position};
pub use contracts::{CellIsEmpty, Contract, InBounds, LegalMove, MoveContract, PlayersTurn};
pub use game::SosGame;
pub use invariants::{
    AlternatingTurnInvariant, HistoryConsistentInvariant, Invariant, InvariantSet,
    InvariantViolation, MonotonicBoardInvariant, SosInvariants,
};
pub use types::{GameMode, Letter, Placement, Player, Square};
