//! Tests for scripted play.

use tictactoe::{Game, InputError, MoveError, Outcome, Phase, Position, Seat, play_script};

#[test]
fn test_script_plays_to_a_win() {
    let mut game = Game::new();
    let report = play_script(&mut game, &["0,0", "1,0", "0,1", "1,1", "0,2"]).unwrap();

    assert_eq!(*report.accepted(), 5);
    assert!(report.rejected().is_empty());
    assert_eq!(game.phase(), Phase::GameOver(Outcome::Win(Seat::One)));
}

#[test]
fn test_script_skips_illegal_moves() {
    let mut game = Game::new();
    // X takes the anti-diagonal; the repeated "5" and the move after the win are ignored.
    let report = play_script(&mut game, &["5", "5", "1", "3", "2", "7", "9"]).unwrap();

    assert_eq!(*report.accepted(), 5);
    let rejected = report.rejected();
    assert_eq!(rejected.len(), 2);
    assert_eq!(rejected[0].index, 1);
    assert_eq!(rejected[0].error, MoveError::CellOccupied(Position::Center));
    assert_eq!(rejected[1].index, 6);
    assert_eq!(rejected[1].error, MoveError::GameOver);
    assert_eq!(game.outcome(), Some(Outcome::Win(Seat::One)));
}

#[test]
fn test_script_rejects_malformed_input_before_playing() {
    let mut game = Game::new();
    let err = play_script(&mut game, &["1", "banana"]).unwrap_err();

    assert!(matches!(err, InputError::Unrecognized { .. }));
    assert!(game.is_fresh());
}
