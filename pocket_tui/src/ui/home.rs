//! Home-screen app grid.

use crate::app::{App, AppKind};
use crate::ui::center_rect;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use strum::IntoEnumIterator;

/// Renders the grid of app tiles.
pub fn render(f: &mut Frame, area: Rect, _app: &App) {
    let grid = center_rect(area, 54, 12);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Length(6)])
        .split(grid);

    let kinds: Vec<AppKind> = AppKind::iter().collect();
    render_row(f, rows[0], &kinds[..3]);
    render_row(f, rows[1], &kinds[3..]);
}

fn render_row(f: &mut Frame, area: Rect, kinds: &[AppKind]) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(area);

    for (i, kind) in kinds.iter().enumerate() {
        render_tile(f, cols[i], *kind);
    }
}

fn render_tile(f: &mut Frame, area: Rect, kind: AppKind) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));
    let lines = vec![
        Line::from(kind.icon()),
        Line::styled(
            kind.name(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            format!("[{}]", kind.hotkey()),
            Style::default().fg(Color::DarkGray),
        ),
    ];
    let tile = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    f.render_widget(tile, area);
}
