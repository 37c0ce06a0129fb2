use std::io;
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use enroll::config::AppConfig;
use enroll::core::logging;
use enroll::tui::app::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load();

    // Initialize file logging; the guard flushes buffered lines on drop
    let _log_guard = logging::init(&config.log_dir());
    log::info!("{} v{} starting", enroll::NAME, enroll::VERSION);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let mut app = AppState::new(event_rx, event_tx);
    let tick_rate = Duration::from_millis(config.tui.tick_rate_ms);
    let result = app.run(&mut terminal, tick_rate).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    log::info!("{} exiting", enroll::NAME);
    Ok(())
}
