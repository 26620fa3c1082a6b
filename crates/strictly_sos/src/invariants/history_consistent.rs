//! History consistency invariant: one move per occupied cell.

use super::Invariant;
use crate::SosGame;

/// Invariant: history length equals the number of occupied cells.
pub struct HistoryConsistentInvariant;

impl Invariant<SosGame> for HistoryConsistentInvariant {
    fn holds(game: &SosGame) -> bool {
        game.history().len() == game.board().occupied_count()
    }

    fn description() -> &'static str {
        "History length matches number of occupied cells"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BoardSize, GameMode, Letter};

    #[test]
    fn test_holds_through_full_board() {
        let mut game = SosGame::new(BoardSize::DEFAULT, GameMode::Simple);
        assert!(HistoryConsistentInvariant::holds(&game));
        for pos in game.valid_positions() {
            game.make_move(pos.row, pos.col, Letter::O).unwrap();
            assert!(HistoryConsistentInvariant::holds(&game));
        }
        assert!(game.is_board_full());
    }

    #[test]
    fn test_dropped_history_violates() {
        let mut game = SosGame::new(BoardSize::DEFAULT, GameMode::Simple);
        game.make_move(2, 1, Letter::S).unwrap();
        game.history_mut().clear();
        assert!(!HistoryConsistentInvariant::holds(&game));
    }
}
