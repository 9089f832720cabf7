//! Non-interactive play from a list of moves.

use crate::input::{InputError, parse_position};
use derive_getters::Getters;
use tictactoe_engine::{Game, MoveError, Position};
use tracing::{info, instrument, warn};

/// A move the engine turned down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedMove {
    /// Zero-based index into the script.
    pub index: usize,
    /// The position that was tried.
    pub position: Position,
    /// Why it was rejected.
    pub error: MoveError,
}

/// Summary of a scripted run.
#[derive(Debug, Clone, PartialEq, Eq, Default, Getters)]
pub struct ScriptReport {
    /// Moves the engine accepted.
    accepted: usize,
    /// Moves ignored because the cell was taken or the game had ended.
    rejected: Vec<RejectedMove>,
}

/// Plays every move in order against `game`.
///
/// All moves are parsed before any is played, so malformed input never
/// reaches the engine. Illegal moves are skipped, the way a click on a taken
/// cell is ignored, and listed in the report.
///
/// # Errors
///
/// Returns the first [`InputError`], with the game untouched.
#[instrument(skip(game, moves))]
pub fn play_script<S: AsRef<str>>(game: &mut Game, moves: &[S]) -> Result<ScriptReport, InputError> {
    let positions = moves
        .iter()
        .map(|text| parse_position(text.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;

    let mut report = ScriptReport::default();
    for (index, position) in positions.into_iter().enumerate() {
        match game.play(position) {
            Ok(_) => report.accepted += 1,
            Err(error) => {
                warn!(index, %position, %error, "Scripted move ignored");
                report.rejected.push(RejectedMove {
                    index,
                    position,
                    error,
                });
            }
        }
    }

    info!(
        accepted = report.accepted,
        rejected = report.rejected.len(),
        phase = ?game.phase(),
        "Script finished"
    );
    Ok(report)
}
