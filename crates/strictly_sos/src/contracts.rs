//! Contract-based validation for SOS moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}.

use super::action::{Move, MoveError};
use super::game::SosGame;
use super::invariants::{InvariantSet, SosInvariants};
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the move's cell lies on the board.
pub struct InBounds;

impl InBounds {
    /// Rejects moves that target a cell outside the board.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &SosGame) -> Result<(), MoveError> {
        if game.board().contains(mov.position) {
            Ok(())
        } else {
            Err(MoveError::OutOfBounds {
                position: mov.position,
                size: game.size().get(),
            })
        }
    }
}

/// Precondition: the move's cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects moves onto an occupied cell.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &SosGame) -> Result<(), MoveError> {
        if game.board().is_empty(mov.position) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied(mov.position))
        }
    }
}

/// Precondition: it is the moving player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Rejects moves by the player who is not to move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &SosGame) -> Result<(), MoveError> {
        if mov.player == game.current_turn() {
            Ok(())
        } else {
            Err(MoveError::WrongPlayer(mov.player))
        }
    }
}

/// Composite precondition: on the board, empty, and the mover's turn.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move, bounds first.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &SosGame) -> Result<(), MoveError> {
        InBounds::check(mov, game)?;
        CellIsEmpty::check(mov, game)?;
        PlayersTurn::check(mov, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Cell is on the board
/// - Cell is empty
/// - It is the mover's turn
///
/// Postconditions:
/// - Exactly one more cell is occupied and one more move recorded
/// - The turn flipped exactly once
/// - All of [`SosInvariants`] hold
pub struct MoveContract;

impl Contract<SosGame, Move> for MoveContract {
    fn pre(game: &SosGame, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(before: &SosGame, after: &SosGame) -> Result<(), MoveError> {
        if after.history().len() != before.history().len() + 1
            || after.board().occupied_count() != before.board().occupied_count() + 1
        {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: a move must fill exactly one cell".to_string(),
            ));
        }

        if after.current_turn() != before.current_turn().opponent() {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: a move must flip the turn exactly once".to_string(),
            ));
        }

        SosInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
