//! CrediTrust Insight Console entry point.
//!
//! Single-threaded UI event loop; the only suspension point is the pending
//! `/ask` call running on a worker thread. Logging goes to a file because
//! the terminal itself is the UI surface.

use std::io;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

use creditrust::api::AskClient;
use creditrust::cli::Cli;
use creditrust::config;
use creditrust::ui::{handle_key_event, render, App};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = init_logging(cli.log.as_deref());

    let api_url = config::resolve_api_url(cli.api_url);
    info!(api_url = %api_url, "starting console");

    let client = AskClient::new(&api_url);
    let mut app = App::new(client);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    // Restore terminal even when the loop errored.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("console finished");
    result
}

/// Main event loop: draw, poll keys, drain ask events.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|f| render(f, app))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                handle_key_event(app, key);
            }
        }

        // Settlements from worker threads.
        app.on_tick();
    }
    Ok(())
}

/// File-backed tracing. Filter priority: --log flag, then RUST_LOG, then
/// "info". Returns the writer guard; dropping it flushes buffered lines.
fn init_logging(filter: Option<&str>) -> tracing_appender::non_blocking::WorkerGuard {
    let file_appender =
        tracing_appender::rolling::never(std::env::temp_dir(), "creditrust-tui.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = match filter {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    guard
}
