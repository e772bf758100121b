//! Terminal events to shell commands.

use crate::session::Direction;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use tictactoe_model::Cell;

/// What a terminal event asks the shell to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Leave the program.
    Quit,
    /// Reset the game and restart the countdown.
    Restart,
    /// Move the keyboard cursor.
    Cursor(Direction),
    /// Touch the cell under the cursor for one tick.
    Select,
    /// Move the cursor to a cell and touch it for one tick.
    SelectCell(Cell),
    /// Left mouse button pressed at a screen position.
    Press {
        /// Screen column.
        column: u16,
        /// Screen row.
        row: u16,
    },
    /// Left mouse button moved while held.
    Drag {
        /// Screen column.
        column: u16,
        /// Screen row.
        row: u16,
    },
    /// Mouse button let go.
    Release,
    /// Terminal resized.
    Resize {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

/// Maps a terminal event to a command, or `None` if it is ignored.
pub fn command(event: &Event) -> Option<Command> {
    match event {
        Event::Key(key) => key_command(key),
        Event::Mouse(mouse) => mouse_command(mouse),
        Event::Resize(width, height) => Some(Command::Resize {
            width: *width,
            height: *height,
        }),
        _ => None,
    }
}

fn key_command(key: &KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char('r') => Some(Command::Restart),
        KeyCode::Up => Some(Command::Cursor(Direction::Up)),
        KeyCode::Down => Some(Command::Cursor(Direction::Down)),
        KeyCode::Left => Some(Command::Cursor(Direction::Left)),
        KeyCode::Right => Some(Command::Cursor(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::Select),
        KeyCode::Char(c) => c
            .to_digit(10)
            .and_then(Cell::from_number)
            .map(Command::SelectCell),
        _ => None,
    }
}

fn mouse_command(mouse: &MouseEvent) -> Option<Command> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Command::Press {
            column: mouse.column,
            row: mouse.row,
        }),
        MouseEventKind::Drag(MouseButton::Left) => Some(Command::Drag {
            column: mouse.column,
            row: mouse.row,
        }),
        MouseEventKind::Up(_) => Some(Command::Release),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_keys() {
        assert_eq!(command(&key(KeyCode::Char('q'))), Some(Command::Quit));
        assert_eq!(command(&key(KeyCode::Esc)), Some(Command::Quit));
        assert_eq!(command(&key(KeyCode::Char('r'))), Some(Command::Restart));
        assert_eq!(command(&key(KeyCode::Enter)), Some(Command::Select));
        assert_eq!(
            command(&key(KeyCode::Left)),
            Some(Command::Cursor(Direction::Left))
        );
        assert_eq!(command(&key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_digits_select_cells() {
        assert_eq!(
            command(&key(KeyCode::Char('1'))),
            Some(Command::SelectCell(Cell::new(0, 0).unwrap()))
        );
        assert_eq!(
            command(&key(KeyCode::Char('6'))),
            Some(Command::SelectCell(Cell::new(2, 1).unwrap()))
        );
        assert_eq!(command(&key(KeyCode::Char('0'))), None);
    }

    #[test]
    fn test_key_release_ignored() {
        let event = Event::Key(KeyEvent::new_with_kind_and_state(
            KeyCode::Enter,
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        ));
        assert_eq!(command(&event), None);
    }

    #[test]
    fn test_mouse() {
        assert_eq!(
            command(&mouse(MouseEventKind::Down(MouseButton::Left), 10, 4)),
            Some(Command::Press { column: 10, row: 4 })
        );
        assert_eq!(
            command(&mouse(MouseEventKind::Drag(MouseButton::Left), 11, 4)),
            Some(Command::Drag { column: 11, row: 4 })
        );
        assert_eq!(
            command(&mouse(MouseEventKind::Up(MouseButton::Left), 11, 4)),
            Some(Command::Release)
        );
        assert_eq!(
            command(&mouse(MouseEventKind::Down(MouseButton::Right), 1, 1)),
            None
        );
        assert_eq!(command(&mouse(MouseEventKind::Moved, 1, 1)), None);
    }

    #[test]
    fn test_resize() {
        assert_eq!(
            command(&Event::Resize(100, 30)),
            Some(Command::Resize {
                width: 100,
                height: 30
            })
        );
    }
}
