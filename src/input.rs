//! Turning user text into board positions.
//!
//! The engine only ever sees validated coordinates; everything malformed is
//! rejected here.

use derive_more::{Display, Error};
use tictactoe_engine::{OutOfRange, Position};
use tracing::instrument;

/// Input that does not name a cell.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum InputError {
    /// Nothing was entered.
    #[display("No position given")]
    Empty,

    /// Text that is neither coordinates, a keypad digit nor a label.
    #[display("Cannot read {:?} as a position (try \"row,col\", 1-9 or a label)", input)]
    Unrecognized {
        /// The rejected text.
        input: String,
    },

    /// Well-formed coordinates that are off the board.
    #[display("{}", source)]
    OffBoard {
        /// The underlying range error.
        source: OutOfRange,
    },
}

/// Parses a position.
///
/// Accepted forms:
/// - `"row,col"` or `"row col"` with zero-based coordinates, e.g. `"0,2"`
/// - a keypad digit `1`-`9`, counting row by row from the top left
/// - a label such as `"center"` or `"bottom-left"`
#[instrument]
pub fn parse_position(input: &str) -> Result<Position, InputError> {
    let text = input.trim();
    if text.is_empty() {
        return Err(InputError::Empty);
    }

    let parts: Vec<&str> = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();
    if let [row, col] = parts.as_slice()
        && let (Ok(row), Ok(col)) = (row.parse::<usize>(), col.parse::<usize>())
    {
        return Position::from_coords(row, col).map_err(|source| InputError::OffBoard { source });
    }

    if let Ok(digit) = text.parse::<usize>() {
        return digit
            .checked_sub(1)
            .and_then(Position::from_index)
            .ok_or_else(|| InputError::Unrecognized {
                input: text.to_string(),
            });
    }

    Position::from_label(text).ok_or_else(|| InputError::Unrecognized {
        input: text.to_string(),
    })
}

/// Keypad digit (1-9) for a position.
pub fn keypad_digit(pos: Position) -> char {
    char::from_digit(pos.index() as u32 + 1, 10).unwrap_or('?')
}

/// Position for a keypad digit (1-9).
pub fn from_keypad(c: char) -> Option<Position> {
    c.to_digit(10)
        .and_then(|d| (d as usize).checked_sub(1))
        .and_then(Position::from_index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keypad_round_trip() {
        for pos in Position::ALL {
            assert_eq!(from_keypad(keypad_digit(pos)), Some(pos));
        }
        assert_eq!(from_keypad('0'), None);
        assert_eq!(from_keypad('x'), None);
    }
}
