//! Error types for board access and moves.

use crate::position::Position;
use derive_more::{Display, Error};

/// Coordinates that fall outside the 3x3 board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("({}, {}) is outside the 3x3 board", row, col)]
pub struct OutOfRange {
    /// Requested row.
    pub row: usize,
    /// Requested column.
    pub col: usize,
}

impl OutOfRange {
    /// Creates a new out-of-range error.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Why a move was rejected.
///
/// A rejected move never changes the board or the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MoveError {
    /// Coordinates are not on the board.
    #[display("{}", _0)]
    OutOfRange(OutOfRange),

    /// The target cell already holds a mark.
    #[display("{} is already occupied", _0)]
    CellOccupied(Position),

    /// The game has already ended.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveError::OutOfRange(e) => Some(e),
            _ => None,
        }
    }
}

impl From<OutOfRange> for MoveError {
    fn from(err: OutOfRange) -> Self {
        MoveError::OutOfRange(err)
    }
}

/// Why players could not be renamed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum RenameError {
    /// Names may only change before the first move of a fresh game.
    #[display("Players can only be renamed before the first move")]
    GameInProgress,
}
