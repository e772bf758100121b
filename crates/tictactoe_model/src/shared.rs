//! Thread-safe handle around a single game.

use crate::game::{Game, MarkError, Outcome};
use crate::types::{Cell, GameState, Space};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::instrument;

/// Cloneable handle that serializes access to one [`Game`].
///
/// `Game` does no locking of its own. Every clone of a `SharedGame`
/// drives the same game, one call at a time.
#[derive(Debug, Clone, Default)]
pub struct SharedGame {
    game: Arc<Mutex<Game>>,
}

impl SharedGame {
    /// Creates a handle around a fresh game.
    #[instrument]
    pub fn new() -> Self {
        Self::from(Game::new())
    }

    // A game is consistent between calls, so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, Game> {
        self.game.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// See [`Game::reset`].
    pub fn reset(&self) {
        self.lock().reset();
    }

    /// See [`Game::state`].
    pub fn state(&self) -> GameState {
        self.lock().state()
    }

    /// See [`Game::board`].
    pub fn board(&self, x: usize, y: usize) -> Space {
        self.lock().board(x, y)
    }

    /// See [`Game::finished`].
    pub fn finished(&self) -> bool {
        self.lock().finished()
    }

    /// See [`Game::mark`].
    pub fn mark(&self, x: usize, y: usize) -> bool {
        self.lock().mark(x, y)
    }

    /// See [`Game::try_mark`].
    pub fn try_mark(&self, cell: Cell) -> Result<Outcome, MarkError> {
        self.lock().try_mark(cell)
    }

    /// Copy of the game as it is right now.
    pub fn snapshot(&self) -> Game {
        self.lock().clone()
    }
}

impl From<Game> for SharedGame {
    fn from(game: Game) -> Self {
        Self {
            game: Arc::new(Mutex::new(game)),
        }
    }
}
