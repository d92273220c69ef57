mod app;
mod config;
mod domain;
mod input;
mod ticker;
mod ui;

use anyhow::{Context, Result};
use app::AppState;
use clap::{Parser, Subcommand};
use config::{default_config_path, Overrides};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use domain::Settings;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tomato")]
#[command(about = "A small terminal work/break countdown timer", long_about = None)]
struct Cli {
    /// Work interval in minutes
    #[arg(short = 'w', long = "work")]
    work: Option<u32>,

    /// Break interval in minutes
    #[arg(short = 'b', long = "break")]
    r#break: Option<u32>,

    /// Long break interval in minutes
    #[arg(short = 'l', long = "long-break")]
    long_break: Option<u32>,

    /// Config file. Defaults to <config dir>/tomato/config.json
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write logs to this file (the terminal is owned by the UI)
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the effective settings as JSON and exit
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let settings = load_settings(&cli)?;

    match cli.command {
        Some(Commands::Config) => {
            println!("{}", serde_json::to_string_pretty(&settings)?);
            Ok(())
        }
        None => run_tui(settings),
    }
}

/// Install a file-backed tracing subscriber. RUST_LOG overrides the default filter.
fn init_logging(path: &Path) -> Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tomato=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(std::sync::Mutex::new(file))
        .init();

    Ok(())
}

/// Defaults, then config file, then command-line flags
fn load_settings(cli: &Cli) -> Result<Settings> {
    let overrides = Overrides {
        work_minutes: cli.work,
        break_minutes: cli.r#break,
        long_break_minutes: cli.long_break,
    };

    let (settings, origin) =
        config::load_settings(cli.config.as_deref(), default_config_path(), &overrides)?;
    info!(
        work = settings.work_minutes,
        brk = settings.break_minutes,
        long_break = settings.long_break_minutes,
        origin = %origin,
        "settings loaded"
    );
    Ok(settings)
}

fn run_tui(settings: Settings) -> Result<()> {
    let mut app = AppState::new(settings);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Tear down the schedule with the app
    app.pause(Instant::now());
    info!(completed = app.history.len(), "exiting");

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    let poll_rate = ticker::poll_duration();

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        // Wake for input, or at the next tick, whichever is sooner
        let timeout = app
            .ticker
            .time_until_next(Instant::now())
            .map_or(poll_rate, |until| until.min(poll_rate));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key)? {
                    return Ok(());
                }
            }
        }

        app.on_clock(Instant::now());
    }
}
