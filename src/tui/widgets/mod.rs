//! Reusable widgets for the TUI
//!
//! Contains custom widgets for common UI elements

pub mod input;
pub mod segmented;

// Re-export commonly used widgets
pub use input::{InputField, TextInput};
pub use segmented::TransactionTypeControl;
