//! Stateless rendering of a session.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_model::{Cell, GameState, Space, rules};

use crate::session::{Phase, Session};

const HELP: &str = "arrows + enter or 1-9 or click to mark | r restart | q quit";

/// Draws status, board and key help.
pub fn draw(frame: &mut Frame, session: &Session) {
    let area = frame.area();
    if area.height == 0 || area.width == 0 {
        return;
    }

    let status = Paragraph::new(session.message())
        .style(status_style(session))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect::new(area.x, area.y, area.width, 1));

    draw_board(frame, area, session);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(
        help,
        Rect::new(area.x, area.y + area.height - 1, area.width, 1),
    );
}

fn status_style(session: &Session) -> Style {
    if matches!(session.phase(), Phase::WarmingUp { .. }) {
        return Style::default().add_modifier(Modifier::BOLD);
    }
    match session.game().state() {
        GameState::Player1Turn => Style::default().fg(Color::Blue),
        GameState::Player2Turn => Style::default().fg(Color::Magenta),
        GameState::Player1Victory | GameState::Player2Victory => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        GameState::Tied => Style::default(),
    }
}

fn draw_board(frame: &mut Frame, area: Rect, session: &Session) {
    let game = session.game();
    let winning = rules::winning_line(game.board_ref()).map(|(_, line)| line);
    let show_cursor = matches!(session.phase(), Phase::Playing);

    for cell in Cell::ALL {
        let rect = session.layout().space_rect(cell).intersection(area);
        if rect.width == 0 || rect.height == 0 {
            continue;
        }

        let border = if winning.is_some_and(|line| line.contains(&cell)) {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else if show_cursor && cell == session.cursor() {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default().borders(Borders::ALL).border_style(border);
        let inner = block.inner(rect);
        frame.render_widget(block, rect);
        draw_mark(frame, inner, game.cell(cell));
    }
}

fn draw_mark(frame: &mut Frame, area: Rect, space: Space) {
    if area.height == 0 || area.width == 0 {
        return;
    }
    let style = match space {
        Space::X => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Space::O => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        Space::Free => return,
    };

    let padding = (area.height - 1) / 2;
    let mut lines = vec![Line::default(); padding as usize];
    lines.push(Line::from(Span::styled(space.to_string(), style)));

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
