//! Two-button exclusive choice for the transaction type

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::models::TransactionType;
use crate::tui::theme::Theme;

/// Segmented control bound to a [`TransactionType`]
pub struct TransactionTypeControl<'a> {
    value: TransactionType,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> TransactionTypeControl<'a> {
    pub fn new(value: TransactionType, theme: &'a Theme) -> Self {
        Self {
            value,
            focused: false,
            theme,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for TransactionTypeControl<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        for (kind, button_area) in TransactionType::ALL.into_iter().zip(halves.iter()) {
            let variant = self.theme.variant(kind);
            let selected = kind == self.value;

            let (text_style, border_style) = if selected {
                (
                    Style::default()
                        .fg(self.theme.background)
                        .bg(variant)
                        .add_modifier(Modifier::BOLD),
                    Style::default().fg(variant),
                )
            } else {
                (
                    Style::default().fg(self.theme.text),
                    Style::default().fg(self.theme.muted),
                )
            };

            let border_type = if selected && self.focused {
                BorderType::Thick
            } else {
                BorderType::Rounded
            };

            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(border_type)
                .border_style(border_style);

            let label = Line::styled(format!(" {} {} ", kind.icon(), kind.label()), text_style);
            Paragraph::new(label)
                .alignment(Alignment::Center)
                .block(block)
                .render(*button_area, buf);
        }
    }
}
