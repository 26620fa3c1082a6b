//! Alternating turn invariant: Blue, Red, Blue, Red, ...

use super::Invariant;
use crate::{Player, SosGame};

/// Invariant: the turn flips once per move.
///
/// The player to move is Blue exactly when the total number of turn flips is
/// even. Every move is a flip, so there are never fewer flips than moves.
/// When no flip happened outside of a move, the history itself must read
/// Blue, Red, Blue, ...
pub struct AlternatingTurnInvariant;

impl Invariant<SosGame> for AlternatingTurnInvariant {
    fn holds(game: &SosGame) -> bool {
        let flips = game.turn_flips();
        let history = game.history();

        let expected_to_move = if flips % 2 == 0 {
            Player::Blue
        } else {
            Player::Red
        };
        if game.current_turn() != expected_to_move || flips < history.len() {
            return false;
        }

        if flips == history.len() {
            if history.first().is_some_and(|m| m.player != Player::Blue) {
                return false;
            }
            if history.windows(2).any(|w| w[0].player == w[1].player) {
                return false;
            }
        }

        true
    }

    fn description() -> &'static str {
        "Players alternate turns (Blue, Red, Blue, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BoardSize, GameMode, Letter, Move, Position};

    fn game() -> SosGame {
        SosGame::new(BoardSize::DEFAULT, GameMode::Simple)
    }

    #[test]
    fn test_empty_game_holds() {
        assert!(AlternatingTurnInvariant::holds(&game()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let mut game = game();
        for (row, col) in [(0, 0), (1, 1), (2, 2), (0, 1), (1, 0)] {
            game.make_move(row, col, Letter::S).unwrap();
        }
        assert!(AlternatingTurnInvariant::holds(&game));
        assert_eq!(game.current_turn(), Player::Red);
    }

    #[test]
    fn test_manual_switch_still_holds() {
        let mut game = game();
        game.make_move(0, 0, Letter::S).unwrap();
        game.switch_turn();
        game.make_move(0, 1, Letter::O).unwrap();
        assert!(AlternatingTurnInvariant::holds(&game));
        assert_eq!(game.current_turn(), Player::Red);
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut game = game();
        game.make_move(0, 0, Letter::S).unwrap();
        game.history_mut()
            .push(Move::new(Player::Blue, Position::new(0, 1), Letter::S));
        assert!(!AlternatingTurnInvariant::holds(&game));
    }
}
