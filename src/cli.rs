//! Command-line interface for tictactoe.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Tic Tac Toe - two players, one terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./tictactoe.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Player names given on the command line.
#[derive(Args, Debug, Default)]
pub struct NameArgs {
    /// Name of player one (X)
    #[arg(long)]
    pub player_one: Option<String>,

    /// Name of player two (O)
    #[arg(long)]
    pub player_two: Option<String>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        #[command(flatten)]
        names: NameArgs,
    },

    /// Play a fixed list of moves and print the result
    Script {
        #[command(flatten)]
        names: NameArgs,

        /// Print the final state as JSON
        #[arg(long)]
        json: bool,

        /// Moves as "row,col" (0-2), keypad digits 1-9 or labels
        #[arg(required = true)]
        moves: Vec<String>,
    },
}
