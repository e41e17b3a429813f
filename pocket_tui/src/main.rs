//! Terminal phone home screen.
//!
//! A handful of demo apps behind an app grid, with the no-draw
//! tic-tac-toe game as the centerpiece.

#![warn(missing_docs)]

mod app;
mod config;
mod scheduler;
mod ui;

use anyhow::Result;
use app::{App, AppKind};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use pocket_tictactoe::GameMode;
use ratatui::{backend::CrosstermBackend, Terminal};
use scheduler::{BotScheduler, SchedulerEvent};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command-line options.
#[derive(Debug, Parser)]
#[command(about = "Terminal phone home screen with a no-draw tic-tac-toe game")]
struct Args {
    /// Path to a TOML config file.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Open this app on startup instead of the home screen.
    #[arg(long)]
    app: Option<AppKind>,
    /// Opponent for the tic-tac-toe game.
    #[arg(long, value_enum, default_value_t = ModeArg::Bot)]
    mode: ModeArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum ModeArg {
    Bot,
    Human,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Bot => GameMode::VsBot,
            ModeArg::Human => GameMode::VsHuman,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut config = config::load(args.config.as_deref())?;
    if args.app.is_some() {
        config.start_app = args.app;
    }

    info!(bot_delay_ms = config.bot_delay_ms, "starting pocket tui");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let scheduler = BotScheduler::new(Duration::from_millis(config.bot_delay_ms), event_tx);
    let app = App::new(&config, args.mode.into());

    let res = run_app(&mut terminal, app, scheduler, &mut event_rx).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    mut scheduler: BotScheduler,
    event_rx: &mut mpsc::UnboundedReceiver<SchedulerEvent>,
) -> Result<()> {
    let mut rng = rand::rng();

    loop {
        terminal.draw(|f| ui::draw(f, &app, scheduler.is_pending()))?;

        // Timer events from the scheduler.
        while let Ok(SchedulerEvent::BotMoveDue) = event_rx.try_recv() {
            scheduler.acknowledge();
            app.bot_move_due(&mut rng);
        }

        // Reconcile the bot timer with whatever the last input did.
        scheduler.sync(app.wants_bot_move());

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code);
                }
            }
        }

        app.on_tick();

        if app.should_quit() {
            return Ok(());
        }
    }
}
