//! Tic Tac Toe - terminal front end and scripted runner.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, NameArgs};
use tictactoe::logging::{self, LogTarget};
use tictactoe::{AppConfig, Game, play_script};
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    match cli.command.unwrap_or(Command::Play {
        names: NameArgs::default(),
    }) {
        Command::Play { names } => run_play(config, names),
        Command::Script { names, json, moves } => run_script(config, names, json, &moves),
    }
}

/// Run the interactive terminal UI
fn run_play(config: AppConfig, names: NameArgs) -> Result<()> {
    let config = config.with_player_names(names.player_one, names.player_two);
    logging::init(&config, LogTarget::File)?;
    tictactoe::tui::run(&config)
}

/// Play the given moves and print the final state
#[instrument(skip_all, fields(moves = moves.len()))]
fn run_script(config: AppConfig, names: NameArgs, json: bool, moves: &[String]) -> Result<()> {
    let config = config.with_player_names(names.player_one, names.player_two);
    logging::init(&config, LogTarget::Stderr)?;

    let mut game = Game::with_names(config.player_one(), config.player_two());
    let report = play_script(&mut game, moves).context("Invalid move list")?;
    let snapshot = game.snapshot();
    info!(status = %snapshot.status_message(), "Script complete");

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        println!("{}\n", game.board().render());
        println!("{}", snapshot.status_message());
        for rejected in report.rejected() {
            println!(
                "ignored move {} ({}): {}",
                rejected.index + 1,
                rejected.position,
                rejected.error
            );
        }
    }
    Ok(())
}
