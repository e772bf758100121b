//! Game state machine for tic-tac-toe.

use crate::invariants::{GameInvariants, InvariantSet};
use crate::rules;
use crate::types::{Board, Cell, GameState, Player, Space};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// Result of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    /// No line and free cells remain; `next` is to move.
    Continue {
        /// The player whose turn it is now.
        next: Player,
    },
    /// The mover completed a line.
    Victory(Player),
    /// The board filled up without a line.
    Tied,
}

/// Why a move was rejected. The board and state are unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MarkError {
    /// The cell already carries a mark.
    #[display("Cell ({}, {}) is already marked {}", x, y, by)]
    Occupied {
        /// Column of the rejected move.
        x: usize,
        /// Row of the rejected move.
        y: usize,
        /// Mark already on the cell.
        by: Space,
    },

    /// The game has ended; only reset is accepted.
    #[display("Game is already over ({:?})", state)]
    GameOver {
        /// Terminal state the game is in.
        state: GameState,
    },
}

impl std::error::Error for MarkError {}

/// Two-player tic-tac-toe game.
///
/// Owns the board and the turn/outcome state and is the only thing
/// that writes either. A new game is already reset, and a finished game
/// can be reused after [`Game::reset`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Game {
    board: Board,
    state: GameState,
}

impl Game {
    /// Creates a game ready for player 1's first move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            state: GameState::Player1Turn,
        }
    }

    #[cfg(test)]
    pub(crate) fn from_parts(board: Board, state: GameState) -> Self {
        Self { board, state }
    }

    /// Clears every cell and hands the first move to player 1.
    #[instrument(skip(self), fields(previous = ?self.state))]
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.state = GameState::Player1Turn;
        debug!("Game reset");
    }

    /// Returns the current phase.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Returns the mark at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is not in `0..3`.
    pub fn board(&self, x: usize, y: usize) -> Space {
        self.board.get(x, y)
    }

    /// Returns the mark at a validated cell.
    pub fn cell(&self, cell: Cell) -> Space {
        self.board.space(cell)
    }

    /// Returns the whole board.
    pub fn board_ref(&self) -> &Board {
        &self.board
    }

    /// True once somebody has won or the game is tied.
    pub fn finished(&self) -> bool {
        self.state.is_finished()
    }

    /// The player to move, or `None` once finished.
    pub fn current_player(&self) -> Option<Player> {
        self.state.current_player()
    }

    /// The winner, if the game ended in a victory.
    pub fn winner(&self) -> Option<Player> {
        self.state.winner()
    }

    /// Number of marks on the board.
    pub fn moves_played(&self) -> usize {
        9 - self.board.count(Space::Free)
    }

    /// Places the current player's mark at `(x, y)`.
    ///
    /// Returns true if the board changed. A move on an occupied cell, or
    /// any move once the game is finished, is rejected and returns false.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is not in `0..3`.
    pub fn mark(&mut self, x: usize, y: usize) -> bool {
        let Some(cell) = Cell::new(x, y) else {
            panic!("cell ({x}, {y}) is outside the 3x3 board");
        };
        self.try_mark(cell).is_ok()
    }

    /// Places the current player's mark on `cell` and reports the outcome.
    ///
    /// # Errors
    ///
    /// - [`MarkError::GameOver`] if the game is already finished.
    /// - [`MarkError::Occupied`] if the cell is not free.
    #[instrument(skip(self), fields(state = ?self.state))]
    pub fn try_mark(&mut self, cell: Cell) -> Result<Outcome, MarkError> {
        let Some(player) = self.state.current_player() else {
            debug!("Move rejected, game is over");
            return Err(MarkError::GameOver { state: self.state });
        };

        let existing = self.board.space(cell);
        if !existing.is_free() {
            debug!(by = ?existing, "Move rejected, cell occupied");
            return Err(MarkError::Occupied {
                x: cell.x(),
                y: cell.y(),
                by: existing,
            });
        }

        self.board.set(cell, player.mark());

        let outcome = if rules::is_victory(&self.board, player.mark()) {
            self.state = player.victory();
            info!(winner = %player, "Game won");
            Outcome::Victory(player)
        } else if rules::is_full(&self.board) {
            self.state = GameState::Tied;
            info!("Game tied");
            Outcome::Tied
        } else {
            let next = player.opponent();
            self.state = next.turn();
            debug!(%next, "Turn passed");
            Outcome::Continue { next }
        };

        self.assert_invariants();
        Ok(outcome)
    }

    fn assert_invariants(&self) {
        if cfg!(debug_assertions) {
            if let Err(violations) = GameInvariants::check_all(self) {
                for violation in &violations {
                    warn!(description = %violation.description, "Invariant violated");
                }
                debug_assert!(violations.is_empty(), "game invariants violated");
            }
        }
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{:?}", self.state)?;
        write!(f, "{}", self.board)
    }
}
