//! Two-player tic-tac-toe game model.
//!
//! [`Game`] owns a 3x3 [`Board`] of [`Space`] values and a [`GameState`].
//! It enforces move legality, turn alternation, win and tie detection and
//! the reset lifecycle. Nothing here does I/O; a front end calls
//! [`Game::mark`] and reads [`Game::state`] and [`Game::board`] to draw.
//!
//! # Example
//!
//! ```
//! use tictactoe_model::{Game, GameState, Space};
//!
//! let mut game = Game::new();
//! for (x, y) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
//!     assert!(game.mark(x, y));
//! }
//! assert_eq!(game.state(), GameState::Player1Victory);
//! assert_eq!(game.board(0, 1), Space::X);
//! assert!(game.finished());
//!
//! // Finished games accept nothing but a reset.
//! assert!(!game.mark(2, 2));
//! game.reset();
//! assert_eq!(game.state(), GameState::Player1Turn);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
pub mod invariants;
pub mod rules;
mod shared;
mod types;

pub use game::{Game, MarkError, Outcome};
pub use shared::SharedGame;
pub use types::{Board, Cell, GameState, Player, Space};
