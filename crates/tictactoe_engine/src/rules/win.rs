//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Mark, Position};
use tracing::instrument;

/// The eight triples that win: three rows, three columns, two diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first triple whose three cells hold the same mark.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<[Position; 3]> {
    LINES.into_iter().find(|&[a, b, c]| {
        let cell = board.cell(a);
        cell != Cell::Empty && cell == board.cell(b) && cell == board.cell(c)
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if that mark fills a complete line, `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    winning_line(board).and_then(|[first, _, _]| board.cell(first).mark())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(Mark, Position)]) -> Board {
        let mut board = Board::new();
        for &(mark, pos) in marks {
            board.place_mark(mark, pos.row(), pos.col()).unwrap();
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_every_line_wins() {
        for line in LINES {
            let board = board_with(&line.map(|pos| (Mark::O, pos)));
            assert_eq!(check_winner(&board), Some(Mark::O));
            assert_eq!(winning_line(&board), Some(line));
        }
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let board = board_with(&[
            (Mark::X, Position::TopLeft),
            (Mark::O, Position::TopCenter),
            (Mark::X, Position::TopRight),
        ]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(&[(Mark::X, Position::TopLeft), (Mark::X, Position::Center)]);
        assert_eq!(winning_line(&board), None);
    }
}
