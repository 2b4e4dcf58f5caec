//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::sync::Arc;
use tokio::runtime::Handle;
use tracing::{debug, info};

use crate::api::{ApiClient, HttpSubmitter, OutcomeNotifier};
use crate::config::settings::Settings;

use super::app::App;
use super::event::{Event, EventHandler};
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal before printing panic info
        let _ = restore_terminal_impl();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    restore_terminal_impl()?;
    Ok(())
}

fn restore_terminal_impl() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI application
///
/// Requests run on `runtime`; their outcomes come back through the same
/// channel as terminal events so the UI thread stays the only writer of
/// [`App`] state.
pub fn run_tui(settings: &Settings, client: ApiClient, runtime: Handle) -> Result<()> {
    let mut terminal = init_terminal()?;

    let events = EventHandler::default();
    let sender = events.sender();
    let notify: OutcomeNotifier = Arc::new(move |ticket, outcome| {
        // The loop may already be gone when a late response arrives
        let _ = sender.send(Event::Submission { ticket, outcome });
    });
    let submitter = HttpSubmitter::new(client, runtime, notify);

    let mut app = App::new(settings, &submitter);
    info!(api = %settings.api.base_url, "TUI started");

    let result = event_loop(&mut terminal, &mut app, &events);

    restore_terminal()?;
    debug!("terminal restored");

    result
}

fn event_loop(terminal: &mut Tui, app: &mut App, events: &EventHandler) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| super::views::render(frame, app))?;

        match events.next()? {
            Event::Resize(_, _) | Event::Tick => {}
            event => handle_event(app, event)?,
        }
    }

    Ok(())
}
