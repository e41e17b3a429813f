//! Application state and key dispatch.
//!
//! The `App` owns every app model and routes keyboard input to whichever
//! screen is open. The engine stays the single writer of game state; the
//! UI only ever reads snapshots.

use crate::config::Config;
use crossterm::event::KeyCode;
use pocket_apps::{Calculator, MusicPlayer, TodoList, WeatherReport};
use pocket_apps::calculator::Op;
use pocket_tictactoe::{bot, Game, GameMode, Player, Position};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::debug;

/// The installed apps, in home-screen order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::EnumIter,
    clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum AppKind {
    /// The no-draw tic-tac-toe game.
    TicTacToe,
    /// Pocket calculator.
    Calculator,
    /// Todo list.
    Todo,
    /// Weather card.
    Weather,
    /// Music player.
    Music,
}

impl AppKind {
    /// Display name on the home screen.
    pub fn name(self) -> &'static str {
        match self {
            AppKind::TicTacToe => "Tic Tac Toe",
            AppKind::Calculator => "Calculator",
            AppKind::Todo => "Todo List",
            AppKind::Weather => "Weather",
            AppKind::Music => "Music",
        }
    }

    /// Icon glyph for the home-screen tile.
    pub fn icon(self) -> &'static str {
        match self {
            AppKind::TicTacToe => "✕○",
            AppKind::Calculator => "=",
            AppKind::Todo => "✓",
            AppKind::Weather => "☀",
            AppKind::Music => "♪",
        }
    }

    /// Hotkey that opens the app from the home screen.
    pub fn hotkey(self) -> char {
        match self {
            AppKind::TicTacToe => '1',
            AppKind::Calculator => '2',
            AppKind::Todo => '3',
            AppKind::Weather => '4',
            AppKind::Music => '5',
        }
    }

    fn from_hotkey(c: char) -> Option<Self> {
        use strum::IntoEnumIterator;
        AppKind::iter().find(|kind| kind.hotkey() == c)
    }
}

/// What is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// The app grid.
    Home,
    /// An open app.
    App(AppKind),
}

/// A text field currently capturing keystrokes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextInput {
    /// New todo entry.
    TodoEntry(String),
    /// Weather city search.
    CitySearch(String),
}

/// Main application state.
pub struct App {
    screen: Screen,
    game: Game,
    calculator: Calculator,
    todos: TodoList,
    weather: WeatherReport,
    music: MusicPlayer,
    input: Option<TextInput>,
    todo_cursor: usize,
    last_tick: Instant,
    should_quit: bool,
}

impl App {
    /// Creates the application from configuration.
    pub fn new(config: &Config, mode: GameMode) -> Self {
        Self {
            screen: config.start_app.map_or(Screen::Home, Screen::App),
            game: Game::new(mode),
            calculator: Calculator::new(),
            todos: TodoList::starter(),
            weather: WeatherReport::default(),
            music: MusicPlayer::new(),
            input: None,
            todo_cursor: 0,
            last_tick: Instant::now(),
            should_quit: false,
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Read access for rendering
    // ─────────────────────────────────────────────────────────────

    /// The current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// The game engine (snapshots only, for rendering).
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// The calculator model.
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// The todo list.
    pub fn todos(&self) -> &TodoList {
        &self.todos
    }

    /// The weather card.
    pub fn weather(&self) -> &WeatherReport {
        &self.weather
    }

    /// The music player.
    pub fn music(&self) -> &MusicPlayer {
        &self.music
    }

    /// The text field capturing input, if any.
    pub fn input(&self) -> Option<&TextInput> {
        self.input.as_ref()
    }

    /// Highlighted row in the todo list.
    pub fn todo_cursor(&self) -> usize {
        self.todo_cursor
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// True while the scheduler should have a bot timer armed: the game
    /// screen is open and the engine is waiting on the bot.
    pub fn wants_bot_move(&self) -> bool {
        self.screen == Screen::App(AppKind::TicTacToe) && self.game.is_bot_turn()
    }

    // ─────────────────────────────────────────────────────────────
    //  Events
    // ─────────────────────────────────────────────────────────────

    /// The thinking delay elapsed: ask the heuristic and apply its
    /// choice. Re-checks the state first; a stale event (reset raced
    /// the timer) is dropped.
    pub fn bot_move_due<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if !self.wants_bot_move() {
            debug!("stale bot event dropped");
            return;
        }
        let choice = bot::choose_move(self.game.board(), &self.game.available(), Player::O, rng);
        if let Some(pos) = choice {
            self.game.apply_bot_move(pos);
        }
    }

    /// Advances time-based state (music playback).
    pub fn on_tick(&mut self) {
        let now = Instant::now();
        let dt = now.duration_since(self.last_tick);
        self.last_tick = now;
        self.music.tick(dt.as_secs_f64());
    }

    /// Routes a key press to the open screen.
    pub fn handle_key(&mut self, code: KeyCode) {
        if self.input.is_some() {
            self.handle_text_input(code);
            return;
        }

        match (self.screen, code) {
            (_, KeyCode::Char('q')) => self.should_quit = true,
            (Screen::Home, KeyCode::Char(c)) => {
                if let Some(kind) = AppKind::from_hotkey(c) {
                    debug!(app = kind.name(), "opening app");
                    self.screen = Screen::App(kind);
                }
            }
            (Screen::App(_), KeyCode::Esc) => self.screen = Screen::Home,
            (Screen::App(kind), code) => self.handle_app_key(kind, code),
            _ => {}
        }
    }

    fn handle_app_key(&mut self, kind: AppKind, code: KeyCode) {
        match kind {
            AppKind::TicTacToe => self.handle_game_key(code),
            AppKind::Calculator => self.handle_calculator_key(code),
            AppKind::Todo => self.handle_todo_key(code),
            AppKind::Weather => {
                if code == KeyCode::Char('s') {
                    self.input = Some(TextInput::CitySearch(String::new()));
                }
            }
            AppKind::Music => self.handle_music_key(code),
        }
    }

    fn handle_game_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if let Some(pos) = Position::from_index(index) {
                    self.game.play(pos);
                }
            }
            KeyCode::Char('r') => self.game.reset(None),
            KeyCode::Char('m') => {
                let next = match self.game.mode() {
                    GameMode::VsBot => GameMode::VsHuman,
                    GameMode::VsHuman => GameMode::VsBot,
                };
                self.game.set_mode(next);
                self.game.reset(None);
            }
            _ => {}
        }
    }

    fn handle_calculator_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c @ '0'..='9') => self.calculator.input_digit(c as u8 - b'0'),
            KeyCode::Char('.') => self.calculator.input_decimal(),
            KeyCode::Char('+') => self.calculator.input_op(Op::Add),
            KeyCode::Char('-') => self.calculator.input_op(Op::Sub),
            KeyCode::Char('*') | KeyCode::Char('x') => self.calculator.input_op(Op::Mul),
            KeyCode::Char('/') => self.calculator.input_op(Op::Div),
            KeyCode::Char('=') | KeyCode::Enter => self.calculator.equals(),
            KeyCode::Char('%') => self.calculator.percent(),
            KeyCode::Char('s') => self.calculator.toggle_sign(),
            KeyCode::Char('c') | KeyCode::Backspace => self.calculator.clear(),
            _ => {}
        }
    }

    fn handle_todo_key(&mut self, code: KeyCode) {
        let len = self.todos.len();
        match code {
            KeyCode::Char('a') => self.input = Some(TextInput::TodoEntry(String::new())),
            KeyCode::Down | KeyCode::Char('j') => {
                if len > 0 {
                    self.todo_cursor = (self.todo_cursor + 1).min(len - 1);
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.todo_cursor = self.todo_cursor.saturating_sub(1);
            }
            KeyCode::Char(' ') => {
                if let Some(item) = self.todos.items().get(self.todo_cursor) {
                    let id = item.id;
                    self.todos.toggle(id);
                }
            }
            KeyCode::Char('d') => {
                if let Some(item) = self.todos.items().get(self.todo_cursor) {
                    let id = item.id;
                    self.todos.remove(id);
                    self.todo_cursor = self.todo_cursor.min(self.todos.len().saturating_sub(1));
                }
            }
            _ => {}
        }
    }

    fn handle_music_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(' ') | KeyCode::Enter => self.music.toggle_play(),
            KeyCode::Char('n') | KeyCode::Right => self.music.next(),
            KeyCode::Char('p') | KeyCode::Left => self.music.previous(),
            KeyCode::Char('l') => self.music.toggle_like(),
            KeyCode::Char('+') | KeyCode::Up => self.music.adjust_volume(0.1),
            KeyCode::Char('-') | KeyCode::Down => self.music.adjust_volume(-0.1),
            _ => {}
        }
    }

    fn handle_text_input(&mut self, code: KeyCode) {
        let Some(input) = self.input.as_mut() else {
            return;
        };
        let buffer = match input {
            TextInput::TodoEntry(buffer) | TextInput::CitySearch(buffer) => buffer,
        };
        match code {
            KeyCode::Esc => self.input = None,
            KeyCode::Backspace => {
                buffer.pop();
            }
            KeyCode::Char(c) => buffer.push(c),
            KeyCode::Enter => {
                match self.input.take() {
                    Some(TextInput::TodoEntry(text)) => {
                        if self.todos.add(&text).is_some() {
                            self.todo_cursor = self.todos.len() - 1;
                        }
                    }
                    Some(TextInput::CitySearch(city)) => self.weather.search(&city),
                    None => {}
                }
            }
            _ => {}
        }
    }
}
