//! Monotonic board invariant: cells never change once written.

use super::Invariant;
use crate::{Board, Placement, SosGame};

/// Invariant: board cells are monotonic (never overwritten).
///
/// Once a cell goes from empty to occupied it never changes. Verified by
/// replaying the move history onto an empty board and comparing.
pub struct MonotonicBoardInvariant;

impl Invariant<SosGame> for MonotonicBoardInvariant {
    fn holds(game: &SosGame) -> bool {
        let mut reconstructed = Board::new(game.size());

        for mov in game.history() {
            // Cell must be empty before writing
            if !reconstructed.is_empty(mov.position) {
                return false;
            }
            reconstructed.place(
                mov.position,
                Placement {
                    letter: mov.letter,
                    player: mov.player,
                },
            );
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
