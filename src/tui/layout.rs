//! Layout definitions for the TUI
//!
//! Defines the overall layout structure: header, main panel, status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Title bar
    pub header: Rect,
    /// Main content area
    pub main: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(3),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            header: vertical[0],
            main: vertical[1],
            status_bar: vertical[2],
        }
    }
}

/// Rows of the new-transaction dialog
pub struct TransactionDialogLayout {
    pub description: Rect,
    pub description_error: Rect,
    pub price: Rect,
    pub price_error: Rect,
    pub category: Rect,
    pub category_error: Rect,
    pub type_control: Rect,
    pub submit: Rect,
    pub submit_error: Rect,
    pub hints: Rect,
}

impl TransactionDialogLayout {
    /// Height the dialog needs, borders included
    pub const HEIGHT: u16 = 20;

    /// Width the dialog asks for
    pub const WIDTH: u16 = 60;

    /// Split the inner area of the dialog
    pub fn new(inner: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Description
                Constraint::Length(1), // Description error
                Constraint::Length(1), // Price
                Constraint::Length(1), // Price error
                Constraint::Length(1), // Category
                Constraint::Length(1), // Category error
                Constraint::Length(3), // Type control
                Constraint::Length(1), // Spacer
                Constraint::Length(3), // Submit button
                Constraint::Length(1), // Submission error
                Constraint::Length(1), // Hints
                Constraint::Min(0),    // Remaining
            ])
            .split(inner);

        Self {
            description: chunks[0],
            description_error: chunks[1],
            price: chunks[2],
            price_error: chunks[3],
            category: chunks[4],
            category_error: chunks[5],
            type_control: chunks[6],
            submit: chunks[8],
            submit_error: chunks[9],
            hints: chunks[10],
        }
    }
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}
