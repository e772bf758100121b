//! Tie detection logic for tic-tac-toe.

use crate::{Board, Cell};
use tracing::instrument;

/// Checks if the board is full (no free cell left).
///
/// A full board only counts as a tie when nobody has a line; the caller
/// checks victory first.
#[instrument(level = "trace")]
pub fn is_full(board: &Board) -> bool {
    Cell::ALL.iter().all(|cell| !board.space(*cell).is_free())
}
