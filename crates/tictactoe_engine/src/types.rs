//! Core domain types for tic-tac-toe.

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// Symbol a player places on the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Mark {
    /// Mark of player one (moves first).
    #[display("X")]
    X,
    /// Mark of player two.
    #[display("O")]
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Returns the character drawn for this mark.
    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

/// A single cell of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No mark yet.
    #[default]
    Empty,
    /// Cell claimed by a mark.
    Marked(Mark),
}

impl Cell {
    /// Returns true if no mark has been placed here.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(mark),
        }
    }
}

/// Which of the two players a value refers to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Seat {
    /// Player one, always plays `X`.
    #[display("player 1")]
    One,
    /// Player two, always plays `O`.
    #[display("player 2")]
    Two,
}

impl Seat {
    /// Returns the other seat.
    pub fn other(self) -> Self {
        match self {
            Seat::One => Seat::Two,
            Seat::Two => Seat::One,
        }
    }

    /// The mark permanently assigned to this seat.
    pub fn mark(self) -> Mark {
        match self {
            Seat::One => Mark::X,
            Seat::Two => Mark::O,
        }
    }

    /// Name used when no display name was chosen.
    pub fn default_name(self) -> &'static str {
        match self {
            Seat::One => "Player 1",
            Seat::Two => "Player 2",
        }
    }
}

/// A participant: display name plus the mark they play.
///
/// The mark is fixed at construction; only the engine may change the name.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
pub struct Player {
    /// Display name.
    name: String,
    /// Mark placed by this player.
    #[getter(skip)]
    mark: Mark,
}

impl Player {
    /// Creates the default player sitting in `seat`.
    pub fn for_seat(seat: Seat) -> Self {
        Self::new(seat.default_name().to_string(), seat.mark())
    }

    /// Mark placed by this player.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seats_have_distinct_marks() {
        assert_eq!(Seat::One.mark(), Mark::X);
        assert_eq!(Seat::Two.mark(), Mark::O);
        assert_eq!(Seat::One.other(), Seat::Two);
        assert_eq!(Mark::X.opponent(), Mark::O);
    }

    #[test]
    fn test_default_player() {
        let player = Player::for_seat(Seat::Two);
        assert_eq!(player.name(), "Player 2");
        assert_eq!(player.mark(), Mark::O);
    }

    #[test]
    fn test_cell_mark() {
        assert!(Cell::default().is_empty());
        assert_eq!(Cell::Marked(Mark::X).mark(), Some(Mark::X));
        assert_eq!(Cell::Empty.mark(), None);
    }
}
