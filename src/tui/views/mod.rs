//! TUI Views module
//!
//! The home screen, the status bar and whichever dialog is open on top.

pub mod home;
pub mod status_bar;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    home::render_header(frame, app, layout.header);
    home::render(frame, app, layout.main);
    status_bar::render(frame, app, layout.status_bar);

    match app.active_dialog {
        ActiveDialog::NewTransaction => dialogs::new_transaction::render(frame, app),
        ActiveDialog::None => {}
    }
}
