//! The SOS game engine: board, turn, and move application.

use super::action::{Move, MoveError};
use super::board::{Board, BoardSize, Position};
use super::contracts::{Contract, MoveContract};
use super::types::{GameMode, Letter, Placement, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Authoritative state of one SOS game.
///
/// The game has no terminal state. A full board simply rejects every further
/// move with [`MoveError::CellOccupied`]; starting over means building a new
/// `SosGame`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SosGame {
    board: Board,
    mode: GameMode,
    to_move: Player,
    history: Vec<Move>,
    /// Every turn flip so far, from moves and from [`SosGame::switch_turn`].
    turn_flips: usize,
}

impl SosGame {
    /// Starts a game on an empty board with Blue to move.
    #[instrument]
    pub fn new(size: BoardSize, mode: GameMode) -> Self {
        debug!("Starting new game");
        Self {
            board: Board::new(size),
            mode,
            to_move: Player::Blue,
            history: Vec::new(),
            turn_flips: 0,
        }
    }

    /// Writes `letter` at (`row`, `col`) for the player to move, then passes the turn.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfBounds`] if the cell is not on the board.
    /// - [`MoveError::CellOccupied`] if the cell already holds a letter.
    ///
    /// On error neither the board nor the turn changes.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn make_move(&mut self, row: usize, col: usize, letter: Letter) -> Result<Move, MoveError> {
        let action = Move::new(self.to_move, Position::new(row, col), letter);

        if let Err(e) = MoveContract::pre(self, &action) {
            warn!(error = %e, "Move rejected");
            return Err(e);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.board.place(
            action.position,
            Placement {
                letter,
                player: action.player,
            },
        );
        self.history.push(action);
        self.switch_turn();

        #[cfg(debug_assertions)]
        if let Err(e) = MoveContract::post(&before, self) {
            warn!(error = %e, "Move broke an invariant, rolling back");
            *self = before;
            return Err(e);
        }

        debug!(%action, next = %self.to_move, "Move applied");
        Ok(action)
    }

    /// Returns the player whose turn it is.
    pub fn current_turn(&self) -> Player {
        self.to_move
    }

    /// Passes the turn to the other player. Two calls cancel out.
    #[instrument(skip(self), fields(from = %self.to_move))]
    pub fn switch_turn(&mut self) {
        self.to_move = self.to_move.opponent();
        self.turn_flips += 1;
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side length of the board.
    pub fn size(&self) -> BoardSize {
        self.board.size()
    }

    /// Returns the mode this game was started with.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the moves played so far, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Number of turn flips so far.
    pub fn turn_flips(&self) -> usize {
        self.turn_flips
    }

    /// Checks whether every cell holds a letter.
    pub fn is_board_full(&self) -> bool {
        self.board.is_full()
    }

    /// Returns the cells that would accept a move.
    #[instrument(skip(self))]
    pub fn valid_positions(&self) -> Vec<Position> {
        self.board.empty_positions()
    }

    /// Rebuilds a game by playing `moves` in order on a fresh board.
    ///
    /// A move by the player who is not to move stands for a manual
    /// [`SosGame::switch_turn`] before it, so any history a game produced
    /// replays to the same board, history and turn.
    #[instrument(skip(moves), fields(moves = moves.len()))]
    pub fn replay(size: BoardSize, mode: GameMode, moves: &[Move]) -> Result<Self, MoveError> {
        let mut game = Self::new(size, mode);
        for action in moves {
            if action.player != game.to_move {
                debug!(player = %action.player, "Replaying manual turn switch");
                game.switch_turn();
            }
            game.make_move(action.position.row, action.position.col, action.letter)?;
        }
        Ok(game)
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn history_mut(&mut self) -> &mut Vec<Move> {
        &mut self.history
    }
}
