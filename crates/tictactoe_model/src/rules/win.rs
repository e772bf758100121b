//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Space};
use tracing::instrument;

/// The eight lines that win the game.
pub const LINES: [[Cell; 3]; 8] = [
    // Rows
    [Cell::at(0, 0), Cell::at(1, 0), Cell::at(2, 0)],
    [Cell::at(0, 1), Cell::at(1, 1), Cell::at(2, 1)],
    [Cell::at(0, 2), Cell::at(1, 2), Cell::at(2, 2)],
    // Columns
    [Cell::at(0, 0), Cell::at(0, 1), Cell::at(0, 2)],
    [Cell::at(1, 0), Cell::at(1, 1), Cell::at(1, 2)],
    [Cell::at(2, 0), Cell::at(2, 1), Cell::at(2, 2)],
    // Diagonals
    [Cell::at(0, 0), Cell::at(1, 1), Cell::at(2, 2)],
    [Cell::at(2, 0), Cell::at(1, 1), Cell::at(0, 2)],
];

/// Checks whether `mark` owns a complete row, column or diagonal.
///
/// Always false for [`Space::Free`].
#[instrument(level = "trace")]
pub fn is_victory(board: &Board, mark: Space) -> bool {
    if mark.is_free() {
        return false;
    }
    LINES
        .iter()
        .any(|line| line.iter().all(|cell| board.space(*cell) == mark))
}

/// Returns the first complete line on the board and who owns it.
#[instrument(level = "trace")]
pub fn winning_line(board: &Board) -> Option<(Space, [Cell; 3])> {
    for [a, b, c] in LINES {
        let space = board.space(a);
        if !space.is_free() && space == board.space(b) && space == board.space(c) {
            return Some((space, [a, b, c]));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(mark: Space, cells: &[Cell]) -> Board {
        let mut board = Board::new();
        for cell in cells {
            board.set(*cell, mark);
        }
        board
    }

    #[test]
    fn test_no_victory_on_empty_board() {
        let board = Board::new();
        assert!(!is_victory(&board, Space::X));
        assert!(!is_victory(&board, Space::O));
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_free_never_wins() {
        assert!(!is_victory(&Board::new(), Space::Free));
    }

    #[test]
    fn test_every_line_wins() {
        for line in LINES {
            let board = board_with(Space::O, &line);
            assert!(is_victory(&board, Space::O), "line {:?}", line);
            assert!(!is_victory(&board, Space::X));
            assert_eq!(winning_line(&board), Some((Space::O, line)));
        }
    }

    #[test]
    fn test_incomplete_line() {
        let board = board_with(Space::X, &[Cell::at(0, 0), Cell::at(1, 0)]);
        assert!(!is_victory(&board, Space::X));
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let mut board = board_with(Space::X, &[Cell::at(0, 0), Cell::at(1, 1)]);
        board.set(Cell::at(2, 2), Space::O);
        assert!(!is_victory(&board, Space::X));
        assert!(!is_victory(&board, Space::O));
    }
}
