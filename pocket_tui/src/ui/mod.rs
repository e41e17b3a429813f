//! Rendering.
//!
//! Pure functions from application state to widgets. Nothing in here
//! mutates state.

mod apps;
mod board;
mod home;

use crate::app::{App, AppKind, Screen};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Draws the whole frame. `bot_thinking` reflects the scheduler's
/// outstanding timer and drives the game screen's status line.
pub fn draw(f: &mut Frame, app: &App, bot_thinking: bool) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_title(f, chunks[0], app);

    // The phone: a rounded frame the screens render inside.
    let shell = center_rect(chunks[1], 62.min(chunks[1].width), chunks[1].height);
    let frame = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));
    let screen_area = frame.inner(shell);
    f.render_widget(frame, shell);

    match app.screen() {
        Screen::Home => home::render(f, screen_area, app),
        Screen::App(AppKind::TicTacToe) => board::render(f, screen_area, app, bot_thinking),
        Screen::App(kind) => apps::render(f, screen_area, app, kind),
    }

    draw_hints(f, chunks[2], app);
}

fn draw_title(f: &mut Frame, area: Rect, app: &App) {
    let title = match app.screen() {
        Screen::Home => "Pocket".to_string(),
        Screen::App(kind) => format!("Pocket · {}", kind.name()),
    };
    let widget = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center);
    f.render_widget(widget, area);
}

fn draw_hints(f: &mut Frame, area: Rect, app: &App) {
    let hints = if app.input().is_some() {
        "Enter confirm · Esc cancel"
    } else {
        match app.screen() {
            Screen::Home => "1-5 open app · q quit",
            Screen::App(AppKind::TicTacToe) => "1-9 play · r restart · m mode · Esc home",
            Screen::App(AppKind::Calculator) => "0-9 . + - * / = % s c · Esc home",
            Screen::App(AppKind::Todo) => "a add · j/k move · space toggle · d delete · Esc home",
            Screen::App(AppKind::Weather) => "s search city · Esc home",
            Screen::App(AppKind::Music) => "space play · n/p track · l like · +/- volume · Esc home",
        }
    };
    let widget = Paragraph::new(hints)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(widget, area);
}

/// Centers a fixed-size rect inside `area`.
pub(crate) fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(horizontal[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crossterm::event::KeyCode;
    use pocket_tictactoe::GameMode;
    use ratatui::{backend::TestBackend, Terminal};

    fn rendered(app: &App, bot_thinking: bool) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| draw(f, app, bot_thinking)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_thinking_indicator_follows_the_timer() {
        let mut app = App::new(&Config::default(), GameMode::VsBot);
        app.handle_key(KeyCode::Char('1'));
        app.handle_key(KeyCode::Char('5'));
        assert!(rendered(&app, true).contains("Bot is thinking"));
        assert!(rendered(&app, false).contains("Bot's turn"));
    }

    #[test]
    fn test_fade_hint_renders_while_a_cell_is_blocked() {
        let mut app = App::new(&Config::default(), GameMode::VsBot);
        app.handle_key(KeyCode::Char('1')); // open the game
        app.handle_key(KeyCode::Char('m')); // two players, fresh board
        // Six quiet moves fill the window and block the first mark.
        for key in ['1', '2', '4', '3', '8', '6'] {
            app.handle_key(KeyCode::Char(key));
        }
        assert!(app.game().blocked().is_some());
        let text = rendered(&app, false);
        assert!(text.contains("Top-center"));
        assert!(text.contains("fades next"));
    }
}
