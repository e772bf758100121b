//! Board geometry on the terminal screen.
//!
//! The same layout positions the spaces when drawing and maps mouse
//! clicks back to cells, so what is drawn is what gets hit.

use ratatui::layout::Rect;
use tictactoe_model::Cell;

/// Rows reserved above the board for the status message.
pub const STATUS_ROWS: u16 = 1;

/// Rows reserved below the board for the key help.
pub const HELP_ROWS: u16 = 1;

/// Where the nine spaces sit on a screen.
///
/// A space is twice as wide as it is tall to make up for terminal
/// character cells being roughly twice as tall as wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    origin_x: u16,
    origin_y: u16,
    space_width: u16,
    space_height: u16,
}

impl BoardLayout {
    /// Centres the board on a `width` x `height` screen.
    ///
    /// The board takes up to three quarters of the smaller dimension.
    pub fn fit(width: u16, height: u16) -> Self {
        let usable = height.saturating_sub(STATUS_ROWS + HELP_ROWS);
        let size = (width / 8).min(usable / 4).max(1);
        let space_width = size * 2;
        let space_height = size;

        Self {
            origin_x: width.saturating_sub(space_width * 3) / 2,
            origin_y: STATUS_ROWS + usable.saturating_sub(space_height * 3) / 2,
            space_width,
            space_height,
        }
    }

    /// Screen rectangle of one space.
    pub fn space_rect(&self, cell: Cell) -> Rect {
        Rect::new(
            self.origin_x + cell.x() as u16 * self.space_width,
            self.origin_y + cell.y() as u16 * self.space_height,
            self.space_width,
            self.space_height,
        )
    }

    /// Screen rectangle of the whole board.
    pub fn board_rect(&self) -> Rect {
        Rect::new(
            self.origin_x,
            self.origin_y,
            self.space_width * 3,
            self.space_height * 3,
        )
    }

    /// The cell under a screen position, if any.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<Cell> {
        if column < self.origin_x || row < self.origin_y {
            return None;
        }
        let x = usize::from((column - self.origin_x) / self.space_width);
        let y = usize::from((row - self.origin_y) / self.space_height);
        Cell::new(x, y)
    }
}
