//! Hooktail - terminal activity feed for GitHub webhook logs
//!
//! Binary entry point for the TUI application.

use std::fs::OpenOptions;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use hooktail::api::{DemoFeed, FeedSource, LogsClient};
use hooktail::app::App;

/// Log destination; the terminal itself belongs to the TUI
const LOG_PATH: &str = "/tmp/hooktail.log";

/// Command line arguments
#[derive(Parser)]
#[command(name = "hooktail")]
#[command(about = "Terminal activity feed for a GitHub webhook logger")]
#[command(version)]
struct Args {
    /// Base URL of the webhook logger service
    #[arg(long, default_value = "http://localhost:5000")]
    api: String,

    /// Poll interval in seconds (minimum 1)
    #[arg(long, default_value = "15")]
    interval: u64,

    /// Render a synthetic feed instead of polling the service
    #[arg(long)]
    demo: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> color_eyre::Result<()> {
    let args = Args::parse();
    color_eyre::install()?;
    init_logging(&args.log_level)?;

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "starting");

    let source = if args.demo {
        FeedSource::Demo(DemoFeed::new())
    } else {
        FeedSource::Live(LogsClient::new(&args.api)?)
    };
    let interval = Duration::from_secs(args.interval.max(1));

    let terminal = ratatui::init();
    let result = run(terminal, source, interval);
    ratatui::restore();
    result
}

/// Initialize logging to a file (never stderr, which the TUI owns)
fn init_logging(level: &str) -> color_eyre::Result<()> {
    let level = match level {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::new(format!("hooktail={}", level.as_str().to_lowercase()));
    let file = OpenOptions::new().create(true).append(true).open(LOG_PATH)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

/// Run the application's main loop.
fn run(
    mut terminal: DefaultTerminal,
    source: FeedSource,
    interval: Duration,
) -> color_eyre::Result<()> {
    let mut app = App::new(source, interval);
    app.start();

    while app.running {
        terminal.draw(|frame| app.render(frame))?;
        handle_events(&mut app)?;
        app.on_tick();
    }

    app.stop();
    Ok(())
}

/// Handle crossterm events.
///
/// Uses poll with 200ms timeout so due polls and finished requests are
/// serviced even when no key arrives.
fn handle_events(app: &mut App) -> color_eyre::Result<()> {
    if event::poll(Duration::from_millis(200))? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                app.on_key_event(key);
            }
            _ => {}
        }
    }
    Ok(())
}
