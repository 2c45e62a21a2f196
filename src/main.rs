//! Skycast - Terminal weather lookup
//!
//! A terminal UI application that shows current conditions, a five-day
//! forecast, and an hourly breakdown for a searched city or for the
//! machine's own location.

use std::io;
use std::panic;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use skycast::app::App;
use skycast::cli::{Cli, StartupConfig};
use skycast::fetch::{self, Fetcher};
use skycast::ui;

/// Sets up a panic hook that restores the terminal before printing the panic message.
/// This ensures the terminal is usable even if the application panics.
fn setup_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Attempt to restore the terminal
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        // Call the original panic hook
        original_hook(panic_info);
    }));
}

/// Renders the UI based on the current application state
fn render_ui(frame: &mut ratatui::Frame, app: &App) {
    ui::render_dashboard(frame, app);

    if app.show_help {
        ui::render_help_overlay(frame);
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse arguments before touching the terminal so --help prints cleanly
    let cli = Cli::parse();
    let config = StartupConfig::from_cli(&cli);

    // Set up panic hook to restore terminal on crash
    setup_panic_hook();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::with_startup_config(config);
    let fetcher = Fetcher::new();
    let (outcome_tx, mut outcome_rx) = mpsc::channel(8);

    // Main event loop
    loop {
        // Apply any finished fetches; stale ones are discarded by the app
        while let Some(outcome) = fetch::try_recv(&mut outcome_rx) {
            app.apply_fetch(outcome);
        }

        // Hand the newest issued request to a background task
        if let Some((seq, request)) = app.take_pending_fetch() {
            fetch::spawn_fetch(fetcher.clone(), seq, request, outcome_tx.clone());
        }

        // Render UI
        terminal.draw(|f| render_ui(f, &app))?;

        // Poll for keyboard events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }

        // Check if we should quit
        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    Ok(())
}
