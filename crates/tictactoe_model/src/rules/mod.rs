//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board. They never mutate and are
//! kept apart from [`Game`](crate::Game) so invariants can reuse them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, is_victory, winning_line};
