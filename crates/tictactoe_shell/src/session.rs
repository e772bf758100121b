//! Frame-by-frame driver around a game.
//!
//! The session is updated once per tick with the elapsed time and the
//! current touch. It owns the pre-game countdown, waits for the end of
//! a game to be acknowledged and turns touches into moves. A touch is
//! used at most once: after it has been turned into a move attempt it is
//! ignored until a released tick is seen.

use crate::layout::BoardLayout;
use std::time::Duration;
use tictactoe_model::{Cell, Game, GameState};
use tracing::{debug, info, instrument};

/// Input held during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Touch {
    /// Nothing is pressed.
    Released,
    /// Mouse button held at a screen position.
    Screen {
        /// Screen column.
        column: u16,
        /// Screen row.
        row: u16,
    },
    /// A cell chosen from the keyboard.
    Cell(Cell),
}

impl Touch {
    /// True unless released.
    pub fn is_touched(self) -> bool {
        self != Touch::Released
    }
}

/// What the session is waiting for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    /// Counting down before the game starts. Input is ignored.
    WarmingUp {
        /// Time left on the countdown.
        remaining: Duration,
    },
    /// Waiting for moves.
    Playing,
    /// The game has ended.
    ///
    /// A touch still held from the final move must be released first,
    /// the next touch after that starts a new game.
    GameOver {
        /// Whether a released tick has been seen since the game ended.
        acknowledged: bool,
    },
}

/// Cursor direction for keyboard play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Towards row 2.
    Down,
    /// Towards column 0.
    Left,
    /// Towards column 2.
    Right,
}

/// A game plus everything the front end needs to drive it.
#[derive(Debug, Clone)]
pub struct Session {
    game: Game,
    layout: BoardLayout,
    phase: Phase,
    countdown: Duration,
    cursor: Cell,
    /// The current touch has already been used.
    spent: bool,
}

impl Session {
    /// Creates a session that starts counting down `countdown`.
    #[instrument]
    pub fn new(countdown: Duration, width: u16, height: u16) -> Self {
        Self {
            game: Game::new(),
            layout: BoardLayout::fit(width, height),
            phase: Phase::WarmingUp {
                remaining: countdown,
            },
            countdown,
            cursor: centre(),
            spent: false,
        }
    }

    /// The game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Current board geometry.
    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Cell highlighted for keyboard play.
    pub fn cursor(&self) -> Cell {
        self.cursor
    }

    /// Refits the board to a new screen size.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.layout = BoardLayout::fit(width, height);
        debug!(width, height, "Layout refitted");
    }

    /// Moves the keyboard cursor, stopping at the board edge.
    pub fn move_cursor(&mut self, direction: Direction) {
        let (dx, dy) = match direction {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        };
        self.cursor = self.cursor.offset(dx, dy).unwrap_or(self.cursor);
    }

    /// Puts the keyboard cursor on `cell`.
    pub fn set_cursor(&mut self, cell: Cell) {
        self.cursor = cell;
    }

    /// Abandons the current game and restarts the countdown.
    #[instrument(skip(self), fields(state = ?self.game.state()))]
    pub fn restart(&mut self) {
        self.game.reset();
        self.phase = Phase::WarmingUp {
            remaining: self.countdown,
        };
        info!("New game, countdown started");
    }

    /// Advances one tick. Returns true if a mark was placed.
    pub fn update(&mut self, delta: Duration, touch: Touch) -> bool {
        if !touch.is_touched() {
            self.spent = false;
        }

        if let Phase::WarmingUp { remaining } = &mut self.phase {
            let left = remaining.saturating_sub(delta);
            if !left.is_zero() {
                *remaining = left;
                return false;
            }
            self.phase = Phase::Playing;
            info!("Countdown finished, game on");
        }

        if let Phase::GameOver { acknowledged } = &mut self.phase {
            if !*acknowledged {
                if !touch.is_touched() {
                    *acknowledged = true;
                    debug!("Result acknowledged");
                }
                return false;
            }
            if touch.is_touched() {
                self.restart();
                self.spent = true;
            }
            return false;
        }

        if !touch.is_touched() || self.spent {
            return false;
        }
        let Some(cell) = self.resolve(touch) else {
            return false;
        };
        self.spent = true;

        let changed = self.game.mark(cell.x(), cell.y());
        if changed {
            debug!(%cell, state = ?self.game.state(), "Mark placed");
            if self.game.finished() {
                self.phase = Phase::GameOver {
                    acknowledged: false,
                };
                info!(state = ?self.game.state(), "Game over");
            }
        }
        changed
    }

    fn resolve(&self, touch: Touch) -> Option<Cell> {
        match touch {
            Touch::Released => None,
            Touch::Screen { column, row } => self.layout.hit_test(column, row),
            Touch::Cell(cell) => Some(cell),
        }
    }

    /// True while the held touch has been used and not yet released.
    pub fn is_spent(&self) -> bool {
        self.spent
    }

    /// Status line for the current phase and game state.
    pub fn message(&self) -> String {
        if let Phase::WarmingUp { remaining } = self.phase {
            return format!(
                "Starting game in {} seconds...",
                remaining.as_secs_f32().round() as u32
            );
        }
        match self.game.state() {
            GameState::Player1Turn => "Player 1's turn".to_string(),
            GameState::Player2Turn => "Player 2's turn".to_string(),
            GameState::Player1Victory => "Player 1 wins!".to_string(),
            GameState::Player2Victory => "Player 2 wins!".to_string(),
            GameState::Tied => "Game is tied :(".to_string(),
        }
    }
}

fn centre() -> Cell {
    Cell::ALL[4]
}
