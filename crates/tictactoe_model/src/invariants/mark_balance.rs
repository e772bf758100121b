//! Mark balance invariant: X never trails O and never leads by two.

use super::Invariant;
use crate::{Game, Space};

/// Invariant: `#X == #O` or `#X == #O + 1`.
///
/// Player 1 always moves first and the players alternate.
pub struct MarkBalanceInvariant;

impl Invariant<Game> for MarkBalanceInvariant {
    fn holds(game: &Game) -> bool {
        let x = game.board_ref().count(Space::X);
        let o = game.board_ref().count(Space::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X count equals O count or leads it by one"
    }
}
