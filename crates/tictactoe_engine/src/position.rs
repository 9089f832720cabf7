//! The nine addressable cells of the board.

use crate::error::OutOfRange;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side length of the board.
pub const SIZE: usize = 3;

/// A position on the board, addressed by `(row, col)` or row-major index.
///
/// ```text
/// (0,0)=0  (0,1)=1  (0,2)=2
/// (1,0)=3  (1,1)=4  (1,2)=5
/// (2,0)=6  (2,1)=7  (2,2)=8
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Row 0, column 0.
    TopLeft,
    /// Row 0, column 1.
    TopCenter,
    /// Row 0, column 2.
    TopRight,
    /// Row 1, column 0.
    MiddleLeft,
    /// Row 1, column 1.
    Center,
    /// Row 1, column 2.
    MiddleRight,
    /// Row 2, column 0.
    BottomLeft,
    /// Row 2, column 1.
    BottomCenter,
    /// Row 2, column 2.
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Resolves `(row, col)` to a position.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] unless both coordinates are in `0..3`.
    #[instrument]
    pub fn from_coords(row: usize, col: usize) -> Result<Self, OutOfRange> {
        if row >= SIZE || col >= SIZE {
            return Err(OutOfRange::new(row, col));
        }
        Ok(Self::ALL[row * SIZE + col])
    }

    /// Creates a position from its row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row-major index (0-8).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Row of this position (0-2).
    pub fn row(self) -> usize {
        self.index() / SIZE
    }

    /// Column of this position (0-2).
    pub fn col(self) -> usize {
        self.index() % SIZE
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Looks a position up by its label, ignoring case.
    #[instrument]
    pub fn from_label(label: &str) -> Option<Self> {
        let wanted = label.trim();
        <Position as strum::IntoEnumIterator>::iter()
            .find(|pos| pos.label().eq_ignore_ascii_case(wanted))
    }

    /// Moves by `(d_row, d_col)`, staying put at the board edge.
    pub fn step(self, d_row: isize, d_col: isize) -> Self {
        let clamp = |v: usize, d: isize| v.saturating_add_signed(d).min(SIZE - 1);
        Self::ALL[clamp(self.row(), d_row) * SIZE + clamp(self.col(), d_col)]
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {})", self.label(), self.row(), self.col())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coords_round_trip_every_cell() {
        for pos in Position::ALL {
            assert_eq!(Position::from_coords(pos.row(), pos.col()), Ok(pos));
        }
        assert_eq!(Position::from_coords(1, 2), Ok(Position::MiddleRight));
    }

    #[test]
    fn test_coords_out_of_range() {
        assert!(Position::from_coords(3, 0).is_err());
        assert!(Position::from_coords(0, 3).is_err());
        assert!(Position::from_coords(usize::MAX, 1).is_err());
    }

    #[test]
    fn test_index() {
        assert_eq!(Position::TopLeft.index(), 0);
        assert_eq!(Position::Center.index(), 4);
        assert_eq!(Position::from_index(8), Some(Position::BottomRight));
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_from_label() {
        assert_eq!(Position::from_label("center"), Some(Position::Center));
        assert_eq!(Position::from_label(" Bottom-Left "), Some(Position::BottomLeft));
        assert_eq!(Position::from_label("middle"), None);
    }

    #[test]
    fn test_step_clamps_at_edges() {
        assert_eq!(Position::Center.step(-1, 0), Position::TopCenter);
        assert_eq!(Position::TopLeft.step(-1, -1), Position::TopLeft);
        assert_eq!(Position::BottomRight.step(1, 0), Position::BottomRight);
        assert_eq!(Position::MiddleLeft.step(0, 1), Position::Center);
    }
}
