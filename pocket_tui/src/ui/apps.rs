//! Rendering for the calculator, todo, weather, and music screens.

use crate::app::{App, AppKind, TextInput};
use crate::ui::center_rect;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Gauge, Paragraph},
    Frame,
};

/// Renders the open app.
pub fn render(f: &mut Frame, area: Rect, app: &App, kind: AppKind) {
    match kind {
        AppKind::Calculator => render_calculator(f, area, app),
        AppKind::Todo => render_todo(f, area, app),
        AppKind::Weather => render_weather(f, area, app),
        AppKind::Music => render_music(f, area, app),
        AppKind::TicTacToe => {}
    }
}

fn card(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray))
}

fn render_calculator(f: &mut Frame, area: Rect, app: &App) {
    let calc = app.calculator();
    let frame = center_rect(area, 34, 8);
    let lines = vec![
        Line::styled(
            calc.expression(),
            Style::default().fg(Color::DarkGray),
        ),
        Line::from(""),
        Line::styled(
            calc.display(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ];
    let widget = Paragraph::new(lines)
        .block(card("Calculator"))
        .alignment(Alignment::Right);
    f.render_widget(widget, frame);
}

fn render_todo(f: &mut Frame, area: Rect, app: &App) {
    let todos = app.todos();
    let frame = center_rect(area, 44, (todos.len() as u16 + 5).max(8));
    let mut lines: Vec<Line> = Vec::new();

    for (i, item) in todos.items().iter().enumerate() {
        let mark = if item.done { "[x]" } else { "[ ]" };
        let mut style = if item.done {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default()
        };
        if i == app.todo_cursor() {
            style = style.add_modifier(Modifier::REVERSED);
        }
        lines.push(Line::styled(format!("{mark} {}", item.text), style));
    }
    if todos.is_empty() {
        lines.push(Line::styled(
            "nothing to do",
            Style::default().fg(Color::DarkGray),
        ));
    }
    lines.push(Line::from(""));
    if let Some(TextInput::TodoEntry(buffer)) = app.input() {
        lines.push(Line::styled(
            format!("new: {buffer}_"),
            Style::default().fg(Color::Cyan),
        ));
    } else {
        lines.push(Line::styled(
            format!("{}/{} done", todos.completed_count(), todos.len()),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let widget = Paragraph::new(lines).block(card("Todo List"));
    f.render_widget(widget, frame);
}

fn render_weather(f: &mut Frame, area: Rect, app: &App) {
    let report = app.weather();
    let frame = center_rect(area, 44, 14);
    let mut lines = vec![
        Line::styled(
            report.city().to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            format!("{}°C  {}", report.temperature, report.condition),
            Style::default().fg(Color::Yellow),
        ),
        Line::from(""),
        Line::from(format!(
            "humidity {}%  wind {} km/h",
            report.humidity, report.wind_kmh
        )),
        Line::from(format!(
            "visibility {} km  UV {}",
            report.visibility_km, report.uv_index
        )),
        Line::from(""),
    ];
    for day in &report.forecast {
        lines.push(Line::from(format!(
            "{:<10} {} {:>3}° / {:>3}°",
            day.day, day.icon, day.high, day.low
        )));
    }
    if let Some(TextInput::CitySearch(buffer)) = app.input() {
        lines.push(Line::from(""));
        lines.push(Line::styled(
            format!("search: {buffer}_"),
            Style::default().fg(Color::Cyan),
        ));
    }

    let widget = Paragraph::new(lines).block(card("Weather"));
    f.render_widget(widget, frame);
}

fn render_music(f: &mut Frame, area: Rect, app: &App) {
    let player = app.music();
    let track = player.track();
    let frame = center_rect(area, 44, 12);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Length(3)])
        .split(frame);

    let state = if player.is_playing() { "▶" } else { "⏸" };
    let like = if player.is_liked() { "♥" } else { "♡" };
    let lines = vec![
        Line::styled(
            track.title,
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            format!("{} · {}", track.artist, track.album),
            Style::default().fg(Color::DarkGray),
        ),
        Line::from(""),
        Line::from(format!(
            "{state}  {} / {}  {like}",
            clock(player.elapsed_secs() as u32),
            clock(track.duration_secs),
        )),
        Line::styled(
            format!(
                "track {}/{}  volume {:.0}%",
                player.current_index() + 1,
                player.playlist().len(),
                player.volume() * 100.0
            ),
            Style::default().fg(Color::DarkGray),
        ),
    ];
    let widget = Paragraph::new(lines)
        .block(card("Music"))
        .alignment(Alignment::Center);
    f.render_widget(widget, chunks[0]);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
        .ratio(player.progress().clamp(0.0, 1.0))
        .label("");
    f.render_widget(gauge, chunks[1]);
}

fn clock(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}
