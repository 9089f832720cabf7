//! Tic-tac-toe board and rules engine.
//!
//! The engine is a plain owned value: construct a [`Game`], feed it moves
//! with [`Game::play_move`], and query [`Game::board`],
//! [`Game::active_player`] and [`Game::outcome`] (or a whole
//! [`GameSnapshot`]) after every command.
//!
//! ```
//! use tictactoe_engine::{Game, Outcome, Phase, Seat};
//!
//! let mut game = Game::with_names("Ada", "Grace");
//! for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
//!     game.play_move(row, col)?;
//! }
//! assert_eq!(game.play_move(0, 2)?, Phase::GameOver(Outcome::Win(Seat::One)));
//! assert_eq!(game.snapshot().status_message(), "Ada has won!");
//! # Ok::<(), tictactoe_engine::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod game;
pub mod invariants;
mod phases;
mod position;
pub mod rules;
mod snapshot;
mod types;

pub use board::Board;
pub use error::{MoveError, OutOfRange, RenameError};
pub use game::Game;
pub use phases::{Outcome, Phase};
pub use position::{Position, SIZE};
pub use snapshot::GameSnapshot;
pub use types::{Cell, Mark, Player, Seat};
