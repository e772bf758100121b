//! Outcome invariant: the game state agrees with the lines on the board.

use super::Invariant;
use crate::rules::{is_full, is_victory};
use crate::{Game, GameState, Space};

/// Invariant: the state is the one the board implies.
///
/// - a victory state has the winner's line on the board
/// - `Tied` has a full board and no line
/// - a turn state has no line and at least one free cell
pub struct OutcomeMatchesBoardInvariant;

impl Invariant<Game> for OutcomeMatchesBoardInvariant {
    fn holds(game: &Game) -> bool {
        let board = game.board_ref();
        let x_line = is_victory(board, Space::X);
        let o_line = is_victory(board, Space::O);
        match game.state() {
            GameState::Player1Victory => x_line,
            GameState::Player2Victory => o_line,
            GameState::Tied => is_full(board) && !x_line && !o_line,
            GameState::Player1Turn | GameState::Player2Turn => {
                !is_full(board) && !x_line && !o_line
            }
        }
    }

    fn description() -> &'static str {
        "Game state matches the lines on the board"
    }
}
