//! Colour theme
//!
//! Presentation colours are part of [`Settings`](crate::config::Settings) and
//! handed to every render function, never read from global state.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use crate::models::TransactionType;

/// Colours used by the TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Focus markers, borders and the submit button
    pub accent: Color,
    /// Variant colour of the income button
    pub income: Color,
    /// Variant colour of the outcome button
    pub outcome: Color,
    /// Regular text
    pub text: Color,
    /// Placeholders, hints and disabled controls
    pub muted: Color,
    /// Validation and submission errors
    pub error: Color,
    /// Text drawn on top of filled backgrounds
    pub background: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Rgb(0x00, 0x87, 0x5f),
            income: Color::Rgb(0x00, 0xb3, 0x7e),
            outcome: Color::Rgb(0xf7, 0x5a, 0x68),
            text: Color::Rgb(0xe1, 0xe1, 0xe6),
            muted: Color::Rgb(0x7c, 0x7c, 0x8a),
            error: Color::Red,
            background: Color::Rgb(0x12, 0x12, 0x14),
        }
    }
}

impl Theme {
    /// Variant colour of a transaction type button
    pub fn variant(&self, kind: TransactionType) -> Color {
        match kind {
            TransactionType::Income => self.income,
            TransactionType::Outcome => self.outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_colours() {
        let theme = Theme::default();
        assert_eq!(theme.variant(TransactionType::Income), theme.income);
        assert_eq!(theme.variant(TransactionType::Outcome), theme.outcome);
    }

    #[test]
    fn test_partial_theme_uses_defaults() {
        let theme: Theme = serde_json::from_str(r#"{ "error": "yellow" }"#).unwrap();
        assert_eq!(theme.error, Color::Yellow);
        assert_eq!(theme.income, Theme::default().income);
    }

    #[test]
    fn test_serde_round_trip() {
        let theme = Theme::default();
        let json = serde_json::to_string(&theme).unwrap();
        let loaded: Theme = serde_json::from_str(&json).unwrap();
        assert_eq!(theme, loaded);
    }
}
