//! Scenario tests for the tic-tac-toe game model.

use tictactoe_model::invariants::{GameInvariants, InvariantSet};
use tictactoe_model::{Cell, Game, GameState, Outcome, Player, Space};

/// Plays `moves` in order, asserting each is accepted and invariants hold.
fn play(moves: &[(usize, usize)]) -> Game {
    let mut game = Game::new();
    for &(x, y) in moves {
        assert!(game.mark(x, y), "move ({x}, {y}) rejected in {:?}", game.state());
        assert!(GameInvariants::check_all(&game).is_ok());
    }
    game
}

#[test]
fn test_fresh_game_is_empty() {
    let game = Game::new();
    for x in 0..3 {
        for y in 0..3 {
            assert_eq!(game.board(x, y), Space::Free);
        }
    }
    assert_eq!(game.state(), GameState::Player1Turn);
    assert!(!game.finished());
}

#[test]
fn test_mark_places_current_players_mark() {
    let mut game = Game::new();
    assert!(game.mark(2, 0));
    assert_eq!(game.board(2, 0), Space::X);
    assert!(game.mark(0, 2));
    assert_eq!(game.board(0, 2), Space::O);
}

#[test]
fn test_occupied_cell_rejected_without_change() {
    let mut game = Game::new();
    assert!(game.mark(1, 1));
    let before = game.clone();

    assert!(!game.mark(1, 1));
    assert_eq!(game, before);
    assert_eq!(game.board(1, 1), Space::X);
    assert_eq!(game.state(), GameState::Player2Turn);
}

#[test]
fn test_turns_alternate_strictly() {
    let mut game = Game::new();
    let moves = [(1, 1), (0, 0), (2, 2), (0, 2), (0, 1), (2, 1)];
    let mut expected = Player::One;
    for (x, y) in moves {
        assert_eq!(game.state(), expected.turn());
        assert!(game.mark(x, y));
        expected = expected.opponent();
    }
    assert_eq!(game.state(), GameState::Player1Turn);
}

#[test]
fn test_left_column_victory() {
    let game = play(&[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    assert_eq!(game.state(), GameState::Player1Victory);
    assert!(game.finished());
    assert_eq!(game.winner(), Some(Player::One));
}

#[test]
fn test_player_two_column_victory() {
    let game = play(&[(0, 0), (1, 0), (2, 2), (1, 1), (0, 2), (1, 2)]);
    assert_eq!(game.state(), GameState::Player2Victory);
    assert_eq!(game.winner(), Some(Player::Two));
}

#[test]
fn test_victory_on_last_cell_is_not_a_tie() {
    // X completes the main diagonal with the ninth mark.
    let game = play(&[
        (0, 0),
        (1, 0),
        (2, 0),
        (0, 1),
        (1, 1),
        (2, 1),
        (1, 2),
        (0, 2),
        (2, 2),
    ]);
    assert!(game.board_ref().is_full());
    assert_eq!(game.state(), GameState::Player1Victory);
}

#[test]
fn test_full_board_without_line_is_tied() {
    let game = play(&[
        (0, 0),
        (1, 1),
        (2, 0),
        (1, 0),
        (1, 2),
        (0, 1),
        (2, 1),
        (2, 2),
        (0, 2),
    ]);
    assert_eq!(game.state(), GameState::Tied);
    assert!(game.finished());
    assert_eq!(game.winner(), None);
}

#[test]
fn test_finished_game_rejects_free_cells() {
    let mut game = play(&[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    let before = game.clone();

    for cell in game.board_ref().free_cells() {
        assert!(!game.mark(cell.x(), cell.y()));
    }
    assert_eq!(game, before);
    assert_eq!(game.state(), GameState::Player1Victory);
}

#[test]
fn test_reset_restores_initial_configuration() {
    let won = play(&[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    let running = play(&[(1, 1), (0, 0)]);
    let tied = play(&[
        (0, 0),
        (1, 1),
        (2, 0),
        (1, 0),
        (1, 2),
        (0, 1),
        (2, 1),
        (2, 2),
        (0, 2),
    ]);

    for mut game in [won, running, tied, Game::new()] {
        game.reset();
        assert_eq!(game, Game::new());
        game.reset();
        assert_eq!(game, Game::new());
    }
}

#[test]
fn test_game_is_reusable_after_reset() {
    let mut game = play(&[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    game.reset();
    for (x, y) in [(0, 0), (1, 0), (2, 2), (1, 1), (0, 2), (1, 2)] {
        assert!(game.mark(x, y));
    }
    assert_eq!(game.state(), GameState::Player2Victory);
}

#[test]
fn test_independent_instances() {
    let mut a = Game::new();
    let b = Game::new();
    a.mark(1, 1);
    assert_eq!(a.board(1, 1), Space::X);
    assert_eq!(b.board(1, 1), Space::Free);
}

#[test]
fn test_try_mark_outcomes() {
    let mut game = Game::new();
    let cell = |x, y| Cell::new(x, y).unwrap();
    assert_eq!(
        game.try_mark(cell(0, 0)),
        Ok(Outcome::Continue { next: Player::Two })
    );
    game.try_mark(cell(1, 0)).unwrap();
    game.try_mark(cell(0, 1)).unwrap();
    game.try_mark(cell(1, 1)).unwrap();
    assert_eq!(game.try_mark(cell(0, 2)), Ok(Outcome::Victory(Player::One)));
}

#[test]
fn test_state_serializes_by_variant_name() {
    let game = play(&[(1, 1)]);
    let json = serde_json::to_value(&game).unwrap();
    assert_eq!(json["state"], "Player2Turn");
    assert_eq!(json["board"]["spaces"][1][1], "X");
    assert_eq!(json["board"]["spaces"][0][0], "Free");
}
