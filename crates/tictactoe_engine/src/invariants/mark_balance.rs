//! Mark balance invariant: X moves first and the players alternate.

use super::Invariant;
use crate::{Game, Mark};

/// Invariant: the board holds as many X as O marks, or one more X.
pub struct MarkBalanceInvariant;

impl Invariant<Game> for MarkBalanceInvariant {
    fn holds(game: &Game) -> bool {
        let x = game.board().count(Mark::X);
        let o = game.board().count(Mark::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X marks equal O marks or exceed them by one"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_holds() {
        assert!(MarkBalanceInvariant::holds(&Game::new()));
    }

    #[test]
    fn test_after_moves_holds() {
        let mut game = Game::new();
        game.play_move(0, 0).unwrap();
        assert!(MarkBalanceInvariant::holds(&game));
        game.play_move(2, 2).unwrap();
        assert!(MarkBalanceInvariant::holds(&game));
    }

    #[test]
    fn test_extra_o_violates() {
        let mut game = Game::new();
        game.board.place_mark(Mark::O, 1, 1).unwrap();
        assert!(!MarkBalanceInvariant::holds(&game));
    }
}
