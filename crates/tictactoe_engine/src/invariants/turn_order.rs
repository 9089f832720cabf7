//! Turn order invariant: the active seat follows from the board.

use super::Invariant;
use crate::{Game, Mark, Phase, Seat};

/// Invariant: while a move is awaited, player one is active exactly when
/// both marks appear equally often.
///
/// After the game ends the active seat is the one that moved last, so the
/// relation flips: player one is active exactly when X is ahead.
pub struct TurnOrderInvariant;

impl Invariant<Game> for TurnOrderInvariant {
    fn holds(game: &Game) -> bool {
        let balanced = game.board().count(Mark::X) == game.board().count(Mark::O);
        let player_one_active = game.active_seat() == Seat::One;
        match game.phase() {
            Phase::AwaitingMove => player_one_active == balanced,
            Phase::GameOver(_) => player_one_active != balanced,
        }
    }

    fn description() -> &'static str {
        "Active player matches the marks on the board"
    }
}
