mod app;
mod handler;
mod tui;
mod ui;

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;
use anyhow::{Context, Result};
use clap::Parser;
use medease_core::{PreferencesStore, RESPONSE_LATENCY};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use app::App;
use tui::EventHandler;

#[derive(Parser)]
#[command(name = "medease")]
#[command(version, about = "Explore a simplified medical document, its glossary and summaries, and chat with the MedEase assistant")]
struct Cli {
    /// Preferences file (defaults to the user config directory)
    #[arg(long, value_name = "PATH")]
    preferences: Option<PathBuf>,

    /// Simulated delay before replies and post-upload navigation, in milliseconds
    #[arg(long, value_name = "MS", default_value_t = RESPONSE_LATENCY.as_millis() as u64)]
    latency_ms: u64,

    /// Log file (defaults to medease.log in the config directory)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn config_dir() -> Result<PathBuf> {
    let dir = dirs::config_dir()
        .context("Could not determine config directory")?
        .join("medease");
    Ok(dir)
}

/// Log to a file; the terminal belongs to the UI
fn init_logging(cli: &Cli) -> Result<()> {
    let path = match &cli.log_file {
        Some(path) => path.clone(),
        None => config_dir()?.join("medease.log"),
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Could not open log file {}", path.display()))?;

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let store = match &cli.preferences {
        Some(path) => PreferencesStore::new(path.clone()),
        None => PreferencesStore::default_location()?,
    };
    info!(
        version = env!("CARGO_PKG_VERSION"),
        preferences = %store.path().display(),
        latency_ms = cli.latency_ms,
        "Starting MedEase"
    );

    let mut app = App::new(store, Duration::from_millis(cli.latency_ms));

    tui::install_panic_hook();
    let mut terminal = tui::init()?;
    let result = run(&mut terminal, &mut app).await;

    app.shutdown();
    tui::restore()?;
    info!("Exiting");

    result
}

async fn run(terminal: &mut tui::Tui, app: &mut App) -> Result<()> {
    let mut events = EventHandler::new();

    while !app.should_quit {
        terminal.draw(|frame| ui::render(app, frame))?;

        let Some(event) = events.next().await else {
            break;
        };
        handler::handle_event(app, event)?;
        app.poll_tasks().await?;
    }

    Ok(())
}
