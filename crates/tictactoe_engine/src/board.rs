//! The 3x3 grid of cells.

use crate::error::{MoveError, OutOfRange};
use crate::position::{Position, SIZE};
use crate::types::{Cell, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// 3x3 tic-tac-toe board.
///
/// Cells only go from empty to marked; the sole way back is [`Board::reset`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; 9];
        debug!("Board cleared");
    }

    /// Returns the cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if either coordinate is not in `0..3`.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, OutOfRange> {
        Position::from_coords(row, col).map(|pos| self.cell(pos))
    }

    /// Returns the cell at a position.
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    /// Checks if the cell at a position is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.cell(pos).is_empty()
    }

    /// Places `mark` at `(row, col)` if that cell is still empty.
    ///
    /// This is the only move-legality check the board performs; whose turn it
    /// is belongs to the engine.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfRange`] for coordinates off the board
    /// - [`MoveError::CellOccupied`] if the cell already holds a mark
    ///
    /// The board is unchanged on error.
    #[instrument(skip(self, mark), fields(mark = %mark))]
    pub fn place_mark(&mut self, mark: Mark, row: usize, col: usize) -> Result<Position, MoveError> {
        let pos = Position::from_coords(row, col)?;
        if !self.is_empty(pos) {
            debug!(position = %pos, "Cell already occupied");
            return Err(MoveError::CellOccupied(pos));
        }
        self.cells[pos.index()] = Cell::Marked(mark);
        Ok(pos)
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Returns the cells grouped by row.
    pub fn rows(&self) -> [[Cell; SIZE]; SIZE] {
        std::array::from_fn(|row| std::array::from_fn(|col| self.cells[row * SIZE + col]))
    }

    /// Positions that can still be played.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .into_iter()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Checks if every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Marked(mark))
            .count()
    }

    /// Formats the board as plain text, numbering empty cells 1-9.
    pub fn render(&self) -> String {
        let mut result = String::new();
        for (row, cells) in self.rows().iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let symbol = match cell {
                    Cell::Empty => char::from_digit((row * SIZE + col + 1) as u32, 10).unwrap_or('?'),
                    Cell::Marked(mark) => mark.symbol(),
                };
                result.push(symbol);
                if col < SIZE - 1 {
                    result.push('|');
                }
            }
            if row < SIZE - 1 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_board_is_empty() {
        let mut board = Board::new();
        board.place_mark(Mark::X, 1, 1).unwrap();
        board.place_mark(Mark::O, 2, 0).unwrap();
        board.reset();
        for row in 0..3 {
            for col in 0..3 {
                assert_eq!(board.get(row, col), Ok(Cell::Empty));
            }
        }
    }

    #[test]
    fn test_get_out_of_range() {
        let board = Board::new();
        assert_eq!(board.get(3, 0), Err(OutOfRange::new(3, 0)));
        assert_eq!(board.get(0, 7), Err(OutOfRange::new(0, 7)));
    }

    #[test]
    fn test_place_mark_only_once() {
        for first in [Mark::X, Mark::O] {
            for second in [Mark::X, Mark::O] {
                let mut board = Board::new();
                assert_eq!(board.place_mark(first, 2, 1), Ok(Position::BottomCenter));
                assert_eq!(
                    board.place_mark(second, 2, 1),
                    Err(MoveError::CellOccupied(Position::BottomCenter))
                );
                assert_eq!(board.get(2, 1), Ok(Cell::Marked(first)));
            }
        }
    }

    #[test]
    fn test_place_mark_out_of_range_leaves_board() {
        let mut board = Board::new();
        assert!(matches!(
            board.place_mark(Mark::X, 0, 3),
            Err(MoveError::OutOfRange(_))
        ));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_counts_and_full() {
        let mut board = Board::new();
        assert_eq!(board.empty_positions().len(), 9);
        for (i, pos) in Position::ALL.into_iter().enumerate() {
            let mark = if i % 2 == 0 { Mark::X } else { Mark::O };
            board.place_mark(mark, pos.row(), pos.col()).unwrap();
        }
        assert!(board.is_full());
        assert_eq!(board.count(Mark::X), 5);
        assert_eq!(board.count(Mark::O), 4);
        assert!(board.empty_positions().is_empty());
    }

    #[test]
    fn test_render() {
        let mut board = Board::new();
        board.place_mark(Mark::X, 0, 0).unwrap();
        board.place_mark(Mark::O, 1, 1).unwrap();
        assert_eq!(board.render(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }
}
