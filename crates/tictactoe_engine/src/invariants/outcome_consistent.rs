//! Outcome invariant: the cached phase agrees with the board.

use super::Invariant;
use crate::{Game, Outcome, Phase, rules};

/// Invariant: the phase is exactly what the board implies.
///
/// - awaiting a move: no line and at least one empty cell
/// - won by a seat: that seat's mark fills a line
/// - tie: full board, no line
pub struct OutcomeConsistentInvariant;

impl Invariant<Game> for OutcomeConsistentInvariant {
    fn holds(game: &Game) -> bool {
        let board = game.board();
        let winner = rules::check_winner(board);
        match game.phase() {
            Phase::AwaitingMove => winner.is_none() && !rules::is_full(board),
            Phase::GameOver(Outcome::Win(seat)) => winner == Some(seat.mark()),
            Phase::GameOver(Outcome::Tie) => rules::is_tie(board),
        }
    }

    fn description() -> &'static str {
        "Game phase matches the lines on the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Seat;

    #[test]
    fn test_holds_for_finished_game() {
        let mut game = Game::new();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            game.play_move(row, col).unwrap();
        }
        assert!(OutcomeConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_wrong_winner_violates() {
        let mut game = Game::new();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            game.play_move(row, col).unwrap();
        }
        game.phase = Phase::GameOver(Outcome::Win(Seat::Two));
        assert!(!OutcomeConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_premature_tie_violates() {
        let mut game = Game::new();
        game.phase = Phase::GameOver(Outcome::Tie);
        assert!(!OutcomeConsistentInvariant::holds(&game));
    }
}
