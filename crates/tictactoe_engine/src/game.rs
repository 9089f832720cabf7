//! The rules engine: turn order, move validation and outcome detection.

use crate::board::Board;
use crate::error::{MoveError, RenameError};
use crate::invariants::assert_invariants;
use crate::phases::{Outcome, Phase};
use crate::position::Position;
use crate::rules;
use crate::snapshot::GameSnapshot;
use crate::types::{Player, Seat};
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe game engine.
///
/// Owns the board and both players. Player one (`X`) always moves first.
/// Every game is an independent value; nothing is shared between instances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub(crate) board: Board,
    player_one: Player,
    player_two: Player,
    pub(crate) active: Seat,
    pub(crate) phase: Phase,
}

impl Game {
    /// Creates a new game with default player names.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            player_one: Player::for_seat(Seat::One),
            player_two: Player::for_seat(Seat::Two),
            active: Seat::One,
            phase: Phase::AwaitingMove,
        }
    }

    /// Creates a new game with the given display names.
    #[instrument(skip(name_one, name_two))]
    pub fn with_names(name_one: impl AsRef<str>, name_two: impl AsRef<str>) -> Self {
        let mut game = Self::new();
        game.player_one.set_name(display_name(Seat::One, name_one.as_ref()));
        game.player_two.set_name(display_name(Seat::Two, name_two.as_ref()));
        game
    }

    /// Plays the active player's mark at `(row, col)`.
    ///
    /// On success the win check runs first, then the tie check; only if
    /// neither ends the game does the turn pass to the other player.
    /// Returns the phase after the move.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] once the game has ended
    /// - [`MoveError::OutOfRange`] for coordinates off the board
    /// - [`MoveError::CellOccupied`] if the cell is taken
    ///
    /// A rejected move leaves the game untouched.
    #[instrument(skip(self), fields(active = %self.active))]
    pub fn play_move(&mut self, row: usize, col: usize) -> Result<Phase, MoveError> {
        if self.phase.is_over() {
            warn!(row, col, "Move rejected, game is already over");
            return Err(MoveError::GameOver);
        }

        let mark = self.active_player().mark();
        let pos = self.board.place_mark(mark, row, col).map_err(|e| {
            warn!(row, col, error = %e, "Move rejected");
            e
        })?;
        debug!(position = %pos, mark = %mark, "Mark placed");

        if let Some(winner) = rules::check_winner(&self.board) {
            debug_assert_eq!(winner, mark, "only the mover can complete a line");
            self.phase = Phase::GameOver(Outcome::Win(self.active));
            info!(winner = %self.active_player().name(), "Game won");
        } else if rules::is_full(&self.board) {
            self.phase = Phase::GameOver(Outcome::Tie);
            info!("Game tied");
        } else {
            self.active = self.active.other();
            debug!(next = %self.active, "Turn passed");
        }

        assert_invariants(self);
        Ok(self.phase)
    }

    /// Plays the active player's mark at a position.
    ///
    /// # Errors
    ///
    /// Same as [`Game::play_move`], minus out-of-range coordinates.
    pub fn play(&mut self, pos: Position) -> Result<Phase, MoveError> {
        self.play_move(pos.row(), pos.col())
    }

    /// Clears the board and starts over with player one to move.
    ///
    /// Player names are kept.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) {
        self.board.reset();
        self.active = Seat::One;
        self.phase = Phase::AwaitingMove;
        info!("Game reset");
    }

    /// Changes both display names.
    ///
    /// Only allowed while the game is fresh: no move played since creation or
    /// the last reset. Names are trimmed and a blank name falls back to the
    /// seat's default.
    ///
    /// # Errors
    ///
    /// Returns [`RenameError::GameInProgress`] once a move has been played;
    /// the names are unchanged in that case.
    #[instrument(skip(self, name_one, name_two))]
    pub fn rename_players(
        &mut self,
        name_one: impl AsRef<str>,
        name_two: impl AsRef<str>,
    ) -> Result<(), RenameError> {
        if !self.is_fresh() {
            warn!("Rename rejected, game already started");
            return Err(RenameError::GameInProgress);
        }
        self.player_one.set_name(display_name(Seat::One, name_one.as_ref()));
        self.player_two.set_name(display_name(Seat::Two, name_two.as_ref()));
        info!(
            player_one = %self.player_one.name(),
            player_two = %self.player_two.name(),
            "Players renamed"
        );
        Ok(())
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the seat whose turn it is.
    ///
    /// After the game ends this is the seat that made the final move.
    pub fn active_seat(&self) -> Seat {
        self.active
    }

    /// Returns the player whose turn it is.
    pub fn active_player(&self) -> &Player {
        self.player(self.active)
    }

    /// Returns the player in a seat.
    pub fn player(&self, seat: Seat) -> &Player {
        match seat {
            Seat::One => &self.player_one,
            Seat::Two => &self.player_two,
        }
    }

    /// Returns both players, player one first.
    pub fn players(&self) -> [&Player; 2] {
        [&self.player_one, &self.player_two]
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the outcome, or `None` while moves are still awaited.
    pub fn outcome(&self) -> Option<Outcome> {
        self.phase.outcome()
    }

    /// Returns true if no move has been played since creation or reset.
    pub fn is_fresh(&self) -> bool {
        !self.phase.is_over() && self.board.cells().iter().all(|c| c.is_empty())
    }

    /// Captures everything a UI needs to redraw.
    #[instrument(skip(self))]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(self)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

fn display_name(seat: Seat, name: &str) -> String {
    match name.trim() {
        "" => seat.default_name().to_string(),
        trimmed => trimmed.to_string(),
    }
}
