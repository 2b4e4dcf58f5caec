//! Terminal User Interface module
//!
//! A home screen hosting the new transaction dialog, built on ratatui.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;
pub mod theme;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
