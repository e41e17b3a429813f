//! Tic-tac-toe board rendering.

use crate::app::App;
use crate::ui::center_rect;
use pocket_tictactoe::{GameSnapshot, Player, Position, Square};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};

/// Renders the board, status line, and mode line.
pub fn render(f: &mut Frame, area: Rect, app: &App, bot_thinking: bool) {
    let snapshot = app.game().snapshot();
    let frame = center_rect(area, 40, 16);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(frame);

    let status = if bot_thinking && !snapshot.is_over() {
        "Bot is thinking...".to_string()
    } else {
        snapshot.status_string()
    };
    let status = Paragraph::new(status)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    f.render_widget(status, chunks[0]);

    render_row(f, chunks[2], &snapshot, 0);
    render_separator(f, chunks[3]);
    render_row(f, chunks[4], &snapshot, 3);
    render_separator(f, chunks[5]);
    render_row(f, chunks[6], &snapshot, 6);

    let counts = match snapshot.next_to_block {
        Some(cell) => format!(
            "{} marks · {} open · {} fades next",
            snapshot.active_moves,
            snapshot.available_cells,
            cell.position.label()
        ),
        _ => format!(
            "{} marks · {} open",
            snapshot.active_moves, snapshot.available_cells
        ),
    };
    let counts = Paragraph::new(counts)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center);
    f.render_widget(counts, chunks[7]);

    let mode = Paragraph::new(format!("{} · oldest mark fades at 6", snapshot.mode))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(mode, chunks[8]);
}

fn render_row(f: &mut Frame, area: Rect, snapshot: &GameSnapshot, start: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(34),
        ])
        .split(area);

    render_square(f, cols[0], snapshot, start);
    render_vertical_sep(f, cols[1]);
    render_square(f, cols[2], snapshot, start + 1);
    render_vertical_sep(f, cols[3]);
    render_square(f, cols[4], snapshot, start + 2);
}

fn render_square(f: &mut Frame, area: Rect, snapshot: &GameSnapshot, index: usize) {
    let pos = Position::from_index(index).unwrap_or(Position::Center);
    let blocked = snapshot
        .blocked
        .is_some_and(|cell| cell.position == pos);
    let (text, style) = match snapshot.board.get(pos) {
        Square::Empty => (
            format!("{}", index + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(player) => {
            let glyph = player.to_string();
            let color = match player {
                Player::X => Color::Blue,
                Player::O => Color::Red,
            };
            let style = if blocked {
                // The mark on the way out: dimmed, no longer load-bearing.
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::DIM | Modifier::CROSSED_OUT)
            } else if snapshot.is_winning(pos) {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(color).add_modifier(Modifier::BOLD)
            };
            (glyph, style)
        }
    };
    let paragraph = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}
