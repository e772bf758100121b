//! Turn invariant: the player to move follows from the marks on the board.

use super::Invariant;
use crate::{Game, Player, Space};

/// Invariant: while the game runs, player 1 is to move exactly when the
/// board holds as many X as O.
pub struct TurnMatchesBoardInvariant;

impl Invariant<Game> for TurnMatchesBoardInvariant {
    fn holds(game: &Game) -> bool {
        let Some(player) = game.current_player() else {
            return true;
        };
        let balanced = game.board_ref().count(Space::X) == game.board_ref().count(Space::O);
        (player == Player::One) == balanced
    }

    fn description() -> &'static str {
        "Player 1 moves exactly when X and O counts are equal"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Cell, GameState};

    #[test]
    fn test_turns_alternate_with_marks() {
        let mut game = Game::new();
        assert!(TurnMatchesBoardInvariant::holds(&game));
        game.mark(2, 2);
        assert_eq!(game.current_player(), Some(Player::Two));
        assert!(TurnMatchesBoardInvariant::holds(&game));
        game.mark(0, 0);
        assert!(TurnMatchesBoardInvariant::holds(&game));
    }

    #[test]
    fn test_wrong_player_to_move_violates() {
        let mut board = Board::new();
        board.set(Cell::at(1, 1), Space::X);
        let game = Game::from_parts(board, GameState::Player1Turn);
        assert!(!TurnMatchesBoardInvariant::holds(&game));
    }

    #[test]
    fn test_ignored_once_finished() {
        let game = Game::from_parts(Board::new(), GameState::Tied);
        assert!(TurnMatchesBoardInvariant::holds(&game));
    }
}
