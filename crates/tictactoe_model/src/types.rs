//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// Content of one board cell.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, strum::Display,
)]
pub enum Space {
    /// Nobody has marked this cell yet.
    #[default]
    #[strum(to_string = " ")]
    Free,
    /// Player 1's mark.
    X,
    /// Player 2's mark.
    O,
}

impl Space {
    /// Returns true if the cell is unmarked.
    pub fn is_free(self) -> bool {
        self == Space::Free
    }
}

/// One of the two players.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, strum::Display,
)]
pub enum Player {
    /// Moves first, marks with X.
    #[strum(to_string = "Player 1")]
    One,
    /// Moves second, marks with O.
    #[strum(to_string = "Player 2")]
    Two,
}

impl Player {
    /// The mark this player places.
    pub fn mark(self) -> Space {
        match self {
            Player::One => Space::X,
            Player::Two => Space::O,
        }
    }

    /// Returns the other player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// The state in which this player is expected to move.
    pub fn turn(self) -> GameState {
        match self {
            Player::One => GameState::Player1Turn,
            Player::Two => GameState::Player2Turn,
        }
    }

    /// The terminal state in which this player has won.
    pub fn victory(self) -> GameState {
        match self {
            Player::One => GameState::Player1Victory,
            Player::Two => GameState::Player2Victory,
        }
    }
}

/// Phase of a game. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum GameState {
    /// Player 1 is to move.
    #[default]
    Player1Turn,
    /// Player 2 is to move.
    Player2Turn,
    /// Player 1 completed a line.
    Player1Victory,
    /// Player 2 completed a line.
    Player2Victory,
    /// The board filled up without a line.
    Tied,
}

impl GameState {
    /// Returns true for victory and tie states.
    pub fn is_finished(self) -> bool {
        matches!(
            self,
            GameState::Player1Victory | GameState::Player2Victory | GameState::Tied
        )
    }

    /// The player to move, if the game is still running.
    pub fn current_player(self) -> Option<Player> {
        match self {
            GameState::Player1Turn => Some(Player::One),
            GameState::Player2Turn => Some(Player::Two),
            _ => None,
        }
    }

    /// The winner, if the game ended in a victory.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameState::Player1Victory => Some(Player::One),
            GameState::Player2Victory => Some(Player::Two),
            _ => None,
        }
    }
}

/// A coordinate on the board, `x` is the column and `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Cell {
    x: u8,
    y: u8,
}

impl Cell {
    /// All nine cells, column by column.
    pub const ALL: [Cell; 9] = [
        Cell { x: 0, y: 0 },
        Cell { x: 0, y: 1 },
        Cell { x: 0, y: 2 },
        Cell { x: 1, y: 0 },
        Cell { x: 1, y: 1 },
        Cell { x: 1, y: 2 },
        Cell { x: 2, y: 0 },
        Cell { x: 2, y: 1 },
        Cell { x: 2, y: 2 },
    ];

    /// Creates a cell, or `None` if either coordinate is outside `0..3`.
    pub fn new(x: usize, y: usize) -> Option<Self> {
        if x < 3 && y < 3 {
            Some(Self {
                x: x as u8,
                y: y as u8,
            })
        } else {
            None
        }
    }

    /// Same as [`Cell::new`] for compile-time constants.
    pub(crate) const fn at(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Cell for a keypad number 1-9, counted row by row from the top left.
    pub fn from_number(n: u32) -> Option<Self> {
        match n {
            1..=9 => {
                let index = (n - 1) as usize;
                Self::new(index % 3, index / 3)
            }
            _ => None,
        }
    }

    /// Column, 0-2.
    pub fn x(self) -> usize {
        self.x as usize
    }

    /// Row, 0-2.
    pub fn y(self) -> usize {
        self.y as usize
    }

    /// Neighbouring cell, or `None` past the board edge.
    pub fn offset(self, dx: isize, dy: isize) -> Option<Self> {
        let x = self.x() as isize + dx;
        let y = self.y() as isize + dy;
        if x < 0 || y < 0 {
            return None;
        }
        Self::new(x as usize, y as usize)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// 3x3 tic-tac-toe board, indexed `[x][y]`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    spaces: [[Space; 3]; 3],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            spaces: [[Space::Free; 3]; 3],
        }
    }

    /// Returns the space at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is not in `0..3`.
    pub fn get(&self, x: usize, y: usize) -> Space {
        self.spaces[x][y]
    }

    /// Returns the space at a validated cell.
    pub fn space(&self, cell: Cell) -> Space {
        self.spaces[cell.x()][cell.y()]
    }

    pub(crate) fn set(&mut self, cell: Cell, space: Space) {
        self.spaces[cell.x()][cell.y()] = space;
    }

    /// Number of cells holding `space`.
    pub fn count(&self, space: Space) -> usize {
        self.spaces.iter().flatten().filter(|s| **s == space).count()
    }

    /// Checks if every cell is marked.
    pub fn is_full(&self) -> bool {
        crate::rules::is_full(self)
    }

    /// Cells that can still be marked.
    pub fn free_cells(&self) -> Vec<Cell> {
        Cell::ALL
            .iter()
            .copied()
            .filter(|cell| self.space(*cell).is_free())
            .collect()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in 0..3 {
            let row = (0..3)
                .map(|x| self.get(x, y).to_string())
                .collect::<Vec<_>>()
                .join("|");
            write!(f, "{}", row)?;
            if y < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_only_terminal_states_are_finished() {
        let finished: Vec<_> = GameState::iter().filter(|s| s.is_finished()).collect();
        assert_eq!(
            finished,
            vec![
                GameState::Player1Victory,
                GameState::Player2Victory,
                GameState::Tied
            ]
        );
    }

    #[test]
    fn test_player_helpers() {
        for player in Player::iter() {
            assert_eq!(player.turn().current_player(), Some(player));
            assert_eq!(player.victory().winner(), Some(player));
            assert_ne!(player.opponent(), player);
        }
        assert_eq!(Player::One.mark(), Space::X);
        assert_eq!(Player::Two.mark(), Space::O);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Player::One.to_string(), "Player 1");
        assert_eq!(Player::Two.to_string(), "Player 2");
        assert_eq!(Space::Free.to_string(), " ");
        assert_eq!(Space::X.to_string(), "X");
    }

    #[test]
    fn test_cell_bounds() {
        assert!(Cell::new(2, 2).is_some());
        assert!(Cell::new(3, 0).is_none());
        assert!(Cell::new(0, 3).is_none());
        assert_eq!(Cell::new(0, 0).and_then(|c| c.offset(-1, 0)), None);
        assert_eq!(Cell::new(1, 1).and_then(|c| c.offset(1, -1)), Cell::new(2, 0));
    }

    #[test]
    fn test_keypad_numbers() {
        assert_eq!(Cell::from_number(1), Cell::new(0, 0));
        assert_eq!(Cell::from_number(3), Cell::new(2, 0));
        assert_eq!(Cell::from_number(5), Cell::new(1, 1));
        assert_eq!(Cell::from_number(7), Cell::new(0, 2));
        assert_eq!(Cell::from_number(0), None);
        assert_eq!(Cell::from_number(10), None);
    }

    #[test]
    fn test_board_display() {
        let mut board = Board::new();
        board.set(Cell::at(0, 0), Space::X);
        board.set(Cell::at(1, 1), Space::O);
        assert_eq!(board.to_string(), "X| | \n-+-+-\n |O| \n-+-+-\n | | ");
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_get_panics() {
        Board::new().get(3, 0);
    }
}
