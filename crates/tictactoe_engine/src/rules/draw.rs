//! Tie detection logic for tic-tac-toe.

use super::win::check_winner;
use crate::Board;
use tracing::instrument;

/// Checks if the board is full (all cells marked).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// A tie is a full board with no winning line.
///
/// A board that is both full and won is a win, never a tie.
#[instrument(skip(board))]
pub fn is_tie(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}
