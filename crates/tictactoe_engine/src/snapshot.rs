//! Serializable read model of a game for rendering.

use crate::game::Game;
use crate::phases::{Outcome, Phase};
use crate::position::{Position, SIZE};
use crate::rules;
use crate::types::{Mark, Player, Seat};
use serde::{Deserialize, Serialize};

/// Everything a UI needs to redraw after a command.
///
/// Detached from the engine: holding a snapshot never blocks further moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Marks by row, then column.
    pub cells: [[Option<Mark>; SIZE]; SIZE],
    /// Player one, then player two.
    pub players: [Player; 2],
    /// Seat to move, or the seat that moved last once the game is over.
    pub active: Seat,
    /// Current phase.
    pub phase: Phase,
    /// The completed line, if the game was won.
    pub winning_line: Option<[Position; 3]>,
}

impl GameSnapshot {
    pub(crate) fn capture(game: &Game) -> Self {
        Self {
            cells: game.board().rows().map(|row| row.map(|cell| cell.mark())),
            players: game.players().map(|player| player.clone()),
            active: game.active_seat(),
            phase: game.phase(),
            winning_line: rules::winning_line(game.board()),
        }
    }

    /// Returns the player in a seat.
    pub fn player(&self, seat: Seat) -> &Player {
        match seat {
            Seat::One => &self.players[0],
            Seat::Two => &self.players[1],
        }
    }

    /// Returns the mark at a position.
    pub fn mark_at(&self, pos: Position) -> Option<Mark> {
        self.cells[pos.row()][pos.col()]
    }

    /// Returns true once the game has ended.
    pub fn is_over(&self) -> bool {
        self.phase.is_over()
    }

    /// One-line status for display.
    pub fn status_message(&self) -> String {
        match self.phase {
            Phase::AwaitingMove => format!("{}'s turn...", self.player(self.active).name()),
            Phase::GameOver(Outcome::Win(seat)) => {
                format!("{} has won!", self.player(seat).name())
            }
            Phase::GameOver(Outcome::Tie) => "It's a tie!".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_messages() {
        let mut game = Game::with_names("Ada", "Grace");
        assert_eq!(game.snapshot().status_message(), "Ada's turn...");

        game.play_move(0, 0).unwrap();
        assert_eq!(game.snapshot().status_message(), "Grace's turn...");

        for (row, col) in [(1, 0), (0, 1), (1, 1), (0, 2)] {
            game.play_move(row, col).unwrap();
        }
        let snapshot = game.snapshot();
        assert_eq!(snapshot.status_message(), "Ada has won!");
        assert_eq!(
            snapshot.winning_line,
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );
    }

    #[test]
    fn test_cells_follow_board() {
        let mut game = Game::new();
        game.play_move(2, 1).unwrap();
        let snapshot = game.snapshot();
        assert_eq!(snapshot.cells[2][1], Some(Mark::X));
        assert_eq!(snapshot.mark_at(Position::BottomCenter), Some(Mark::X));
        assert_eq!(snapshot.mark_at(Position::Center), None);
        assert!(!snapshot.is_over());
    }

    #[test]
    fn test_json_shape() {
        let snapshot = Game::new().snapshot();
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["phase"], "AwaitingMove");
        assert_eq!(json["active"], "One");
        assert_eq!(json["players"][1]["name"], "Player 2");
        assert_eq!(json["players"][1]["mark"], "O");
    }
}
