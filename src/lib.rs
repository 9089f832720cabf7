//! Two-player tic-tac-toe for the terminal.
//!
//! The rules live in [`tictactoe_engine`]; this crate is the collaborator
//! that feeds it input and shows its state.
//!
//! # Architecture
//!
//! - **Config**: optional TOML file with player names and logging settings
//! - **Input**: parsing user text into board positions
//! - **Script**: non-interactive play from a list of moves
//! - **Tui**: interactive terminal front end (ratatui + crossterm)

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod input;
pub mod logging;
mod script;
pub mod tui;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_FILE};

// Crate-level exports - Input parsing
pub use input::{InputError, from_keypad, keypad_digit, parse_position};

// Crate-level exports - Scripted play
pub use script::{RejectedMove, ScriptReport, play_script};

// Crate-level exports - Game types
pub use tictactoe_engine::{
    Board, Cell, Game, GameSnapshot, Mark, MoveError, Outcome, OutOfRange, Phase, Player,
    Position, RenameError, Seat,
};
