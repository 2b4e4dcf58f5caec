//! Text input widget
//!
//! A single-line text input with a character-based cursor, so multi-byte
//! text such as "Salário" edits correctly.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::tui::theme::Theme;

/// Editable text with a cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    /// Current text content
    pub content: String,
    /// Cursor position, in characters
    pub cursor: usize,
    /// Whether the input is focused
    pub focused: bool,
    /// Placeholder text
    pub placeholder: String,
}

impl TextInput {
    /// Create a new text input
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set content, moving the cursor to the end
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self.cursor = self.char_count();
        self
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Move cursor left
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move cursor right
    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    /// Move cursor to start
    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end
    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }
}

/// Renders a [`TextInput`] with theme colours
pub struct InputField<'a> {
    input: &'a TextInput,
    theme: &'a Theme,
    invalid: bool,
}

impl<'a> InputField<'a> {
    pub fn new(input: &'a TextInput, theme: &'a Theme) -> Self {
        Self {
            input,
            theme,
            invalid: false,
        }
    }

    /// Highlight the field as failing validation
    pub fn invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }
}

impl Widget for InputField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let input = self.input;
        let marker_style = if self.invalid {
            Style::default().fg(self.theme.error)
        } else if input.focused {
            Style::default()
                .fg(self.theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.theme.muted)
        };
        let marker = if input.focused { "▌ " } else { "  " };

        let mut spans = vec![Span::styled(marker, marker_style)];

        if input.content.is_empty() && !input.focused {
            spans.push(Span::styled(
                input.placeholder.as_str(),
                Style::default().fg(self.theme.muted),
            ));
        } else if input.focused {
            let text_style = Style::default().fg(self.theme.text);
            let before: String = input.content.chars().take(input.cursor).collect();
            let mut rest = input.content.chars().skip(input.cursor);
            let under = rest.next().unwrap_or(' ');
            let after: String = rest.collect();

            spans.push(Span::styled(before, text_style));
            spans.push(Span::styled(
                under.to_string(),
                Style::default().fg(self.theme.background).bg(self.theme.accent),
            ));
            spans.push(Span::styled(after, text_style));
        } else {
            spans.push(Span::styled(
                input.content.as_str(),
                Style::default().fg(self.theme.text),
            ));
        }

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}
