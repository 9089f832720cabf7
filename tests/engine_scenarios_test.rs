//! End-to-end game scenarios against the rules engine.

use tictactoe::{Board, Cell, Game, Mark, MoveError, Outcome, Phase, Position, Seat};

fn play_all(game: &mut Game, moves: &[(usize, usize)]) -> Phase {
    let mut phase = game.phase();
    for &(row, col) in moves {
        phase = game.play_move(row, col).expect("legal move");
    }
    phase
}

#[test]
fn test_fresh_board_is_empty_everywhere() {
    let mut board = Board::new();
    board.place_mark(Mark::O, 2, 2).unwrap();
    board.reset();
    for row in 0..3 {
        for col in 0..3 {
            assert_eq!(board.get(row, col), Ok(Cell::Empty));
        }
    }
}

#[test]
fn test_player_one_wins_top_row() {
    let mut game = Game::new();
    let phase = play_all(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);

    assert_eq!(phase, Phase::GameOver(Outcome::Win(Seat::One)));
    assert_eq!(game.outcome(), Some(Outcome::Win(Seat::One)));
    assert_eq!(game.active_player().mark(), Mark::X);
}

#[test]
fn test_full_board_without_line_is_tie() {
    let mut game = Game::new();
    // X O X / X O O / O X X
    let phase = play_all(
        &mut game,
        &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)],
    );

    assert_eq!(phase, Phase::GameOver(Outcome::Tie));
    assert!(game.board().is_full());
}

#[test]
fn test_same_cell_twice_is_rejected() {
    let mut game = Game::new();
    game.play_move(0, 0).unwrap();
    assert_eq!(game.active_seat(), Seat::Two);

    let result = game.play_move(0, 0);

    assert_eq!(result, Err(MoveError::CellOccupied(Position::TopLeft)));
    assert_eq!(game.active_seat(), Seat::Two);
    assert_eq!(game.board().get(0, 0), Ok(Cell::Marked(Mark::X)));
}

#[test]
fn test_every_non_terminal_move_flips_turn() {
    let mut game = Game::new();
    let moves = [(1, 1), (0, 0), (2, 2), (0, 2), (0, 1), (2, 1), (1, 0), (1, 2)];
    for (row, col) in moves {
        let before = game.active_seat();
        assert_eq!(game.play_move(row, col), Ok(Phase::AwaitingMove));
        assert_eq!(game.active_seat(), before.other());
    }
}

#[test]
fn test_independent_games_do_not_share_state() {
    let mut first = Game::with_names("Ada", "Grace");
    let second = Game::new();
    first.play_move(1, 1).unwrap();

    assert!(second.is_fresh());
    assert_eq!(second.player(Seat::One).name(), "Player 1");
}

#[test]
fn test_rename_then_play_then_reset() {
    let mut game = Game::new();
    game.rename_players("Ada", "Grace").unwrap();
    play_all(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    assert_eq!(game.snapshot().status_message(), "Ada has won!");
    assert!(game.rename_players("Alan", "Edsger").is_err());

    game.reset_game();
    assert_eq!(game.snapshot().status_message(), "Ada's turn...");
    assert!(game.rename_players("Alan", "Edsger").is_ok());
}
