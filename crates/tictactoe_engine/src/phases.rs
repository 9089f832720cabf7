//! Phases of the game state machine and the outcome of a finished game.

use crate::types::Seat;
use serde::{Deserialize, Serialize};

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The player in this seat completed a line.
    Win(Seat),
    /// The board filled up with no line.
    Tie,
}

impl Outcome {
    /// Returns the winning seat if there is one.
    pub fn winner(&self) -> Option<Seat> {
        match self {
            Outcome::Win(seat) => Some(*seat),
            Outcome::Tie => None,
        }
    }

    /// Returns true if the game was a tie.
    pub fn is_tie(&self) -> bool {
        matches!(self, Outcome::Tie)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win(seat) => write!(f, "{} wins", seat),
            Outcome::Tie => write!(f, "Tie"),
        }
    }
}

/// Where the engine is in its state machine.
///
/// ```text
/// AwaitingMove --winning move--> GameOver(Win)
/// AwaitingMove --filling move--> GameOver(Tie)
/// GameOver     --reset_game----> AwaitingMove
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Phase {
    /// The active player may move.
    #[default]
    AwaitingMove,
    /// No further moves are accepted until the game is reset.
    GameOver(Outcome),
}

impl Phase {
    /// The outcome, once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            Phase::AwaitingMove => None,
            Phase::GameOver(outcome) => Some(*outcome),
        }
    }

    /// Returns true once the game has ended.
    pub fn is_over(&self) -> bool {
        matches!(self, Phase::GameOver(_))
    }
}
