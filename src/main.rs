//! projdeck - Terminal Project Board
//!
//! Add projects through a small form and move them between the active and
//! finished lists. Everything lives in memory; CSV export keeps a copy.

use std::io;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{error, info};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use projdeck::application::{App, AppMode};
use projdeck::domain::ProjectStore;
use projdeck::infrastructure::{init_logging, log_directory, AppConfig};
use projdeck::presentation::{render_ui, InputHandler};

/// Entry point for the projdeck terminal board.
///
/// Loads configuration, starts file logging, builds the one project store
/// and hands it to the application before running the event loop.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, logging cannot start,
/// or terminal setup fails.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_logging(&config.log_level, &config.log_dir)?;

    let mut app = App::new(ProjectStore::new(), &config.export_path);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!("event=app_exit status=error reason=\"{}\"", err);
        println!("{err:?}");
    } else {
        let log_dir = log_directory().map(|dir| dir.display().to_string()).unwrap_or_default();
        info!("event=app_exit status=ok projects={} log_dir={}", app.store.len(), log_dir);
    }

    Ok(())
}

/// Main application event loop.
///
/// Redraws after every key press and exits on 'q' in normal mode.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render_ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                match key.code {
                    KeyCode::Char('q') if matches!(app.mode, AppMode::Normal) => return Ok(()),
                    _ => InputHandler::handle_key_event(app, key.code, key.modifiers),
                }
            }
        }
    }
}
