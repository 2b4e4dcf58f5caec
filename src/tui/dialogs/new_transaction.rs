//! New transaction dialog
//!
//! Modal dialog with description, price and category inputs, the income /
//! outcome segmented control and a submit button that stays disabled while a
//! submission is in flight.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{block::Title, Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::form::{Field, FormMessage, NewTransactionForm};
use crate::models::TransactionType;
use crate::tui::app::App;
use crate::tui::layout::{centered_rect_fixed, TransactionDialogLayout};
use crate::tui::theme::Theme;
use crate::tui::widgets::{InputField, TransactionTypeControl};

/// Render the new transaction dialog
pub fn render(frame: &mut Frame, app: &App) {
    let theme = app.theme();
    let form = &app.transaction_form;

    // Overlay: dim whatever is behind the dialog
    let screen = frame.area();
    frame
        .buffer_mut()
        .set_style(screen, Style::default().add_modifier(Modifier::DIM));

    let area = centered_rect_fixed(
        TransactionDialogLayout::WIDTH,
        TransactionDialogLayout::HEIGHT,
        screen,
    );
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(
            Title::from(Span::styled(
                " New transaction ",
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Left),
        )
        .title(
            Title::from(Span::styled(" ✕ Esc ", Style::default().fg(theme.muted)))
                .alignment(Alignment::Right),
        )
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.accent));
    frame.render_widget(block, area);

    // Inner area for content
    let inner = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    };
    let layout = TransactionDialogLayout::new(inner);

    for (field, input_area, error_area) in [
        (Field::Description, layout.description, layout.description_error),
        (Field::Price, layout.price, layout.price_error),
        (Field::Category, layout.category, layout.category_error),
    ] {
        render_text_field(frame, form, theme, field, input_area, error_area);
    }

    frame.render_widget(
        TransactionTypeControl::new(form.kind, theme).focused(form.focused_field == Field::Type),
        layout.type_control,
    );

    render_submit_button(frame, form, theme, layout.submit);

    if let Some(ref error) = form.error_message {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                error.as_str(),
                Style::default().fg(theme.error),
            ))),
            layout.submit_error,
        );
    }

    let key = Style::default().fg(theme.accent);
    let hints = Line::from(vec![
        Span::styled("[Tab]", key),
        Span::raw(" Next  "),
        Span::styled("[←/→]", key),
        Span::raw(" Type  "),
        Span::styled("[Enter]", key),
        Span::raw(" Register  "),
        Span::styled("[Esc]", key),
        Span::raw(" Close"),
    ]);
    frame.render_widget(
        Paragraph::new(hints).style(Style::default().fg(theme.muted)),
        layout.hints,
    );
}

fn render_text_field(
    frame: &mut Frame,
    form: &NewTransactionForm,
    theme: &Theme,
    field: Field,
    input_area: Rect,
    error_area: Rect,
) {
    let input = match field {
        Field::Description => &form.description_input,
        Field::Price => &form.price_input,
        Field::Category => &form.category_input,
        Field::Type => return,
    };
    let error = form.field_error(field);

    frame.render_widget(
        InputField::new(input, theme).invalid(error.is_some()),
        input_area,
    );

    if let Some(message) = error {
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!("  {}", message),
                Style::default().fg(theme.error),
            )),
            error_area,
        );
    }
}

fn render_submit_button(frame: &mut Frame, form: &NewTransactionForm, theme: &Theme, area: Rect) {
    let (label, text_style, border_style) = if form.is_submitting() {
        (
            "Registering…",
            Style::default().fg(theme.muted),
            Style::default().fg(theme.muted),
        )
    } else {
        (
            "Register",
            Style::default()
                .fg(theme.text)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD),
            Style::default().fg(theme.accent),
        )
    };

    let button = Paragraph::new(Line::styled(format!(" {} ", label), text_style))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border_style),
        );
    frame.render_widget(button, area);
}

/// Handle key input for the new transaction dialog
/// Returns true if the key was handled, false otherwise
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
            return true;
        }
        KeyCode::Enter => {
            app.submit_transaction();
            return true;
        }
        _ => {}
    }

    match to_message(&app.transaction_form, key) {
        Some(message) => {
            app.transaction_form.apply(message);
            true
        }
        None => false,
    }
}

/// Translate a key into a form message, depending on which field has focus
fn to_message(form: &NewTransactionForm, key: KeyEvent) -> Option<FormMessage> {
    let on_type_control = form.focused_field == Field::Type;

    let message = match key.code {
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => FormMessage::FocusPrev,
        KeyCode::Tab | KeyCode::Down => FormMessage::FocusNext,
        KeyCode::BackTab | KeyCode::Up => FormMessage::FocusPrev,

        KeyCode::Left if on_type_control => FormMessage::SelectType(TransactionType::Income),
        KeyCode::Right if on_type_control => FormMessage::SelectType(TransactionType::Outcome),
        KeyCode::Char('i') | KeyCode::Char('I') if on_type_control => {
            FormMessage::SelectType(TransactionType::Income)
        }
        KeyCode::Char('o') | KeyCode::Char('O') if on_type_control => {
            FormMessage::SelectType(TransactionType::Outcome)
        }
        KeyCode::Char(' ') if on_type_control => FormMessage::ToggleType,

        KeyCode::Left => FormMessage::CursorLeft,
        KeyCode::Right => FormMessage::CursorRight,
        KeyCode::Home => FormMessage::CursorHome,
        KeyCode::End => FormMessage::CursorEnd,
        KeyCode::Backspace => FormMessage::Backspace,
        KeyCode::Delete => FormMessage::Delete,
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            FormMessage::Insert(c)
        }
        _ => return None,
    };

    Some(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::Settings;
    use crate::tui::app::tests::RecordingSubmitter;
    use crate::tui::app::ActiveDialog;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        screen_text(&terminal)
    }

    #[test]
    fn test_renders_title_fields_and_controls() {
        let settings = Settings::default();
        let submitter = RecordingSubmitter::default();
        let mut app = App::new(&settings, &submitter);
        app.open_dialog(ActiveDialog::NewTransaction);

        let text = draw(&app);
        assert!(text.contains("New transaction"));
        assert!(text.contains("✕ Esc"));
        assert!(text.contains("Price"));
        assert!(text.contains("Category"));
        assert!(text.contains("↑ Income"));
        assert!(text.contains("↓ Outcome"));
        assert!(text.contains("Register"));
        assert!(!text.contains("Registering"));
    }

    #[test]
    fn test_submit_button_disabled_while_in_flight() {
        let settings = Settings::default();
        let submitter = RecordingSubmitter::default();
        let mut app = App::new(&settings, &submitter);
        app.open_dialog(ActiveDialog::NewTransaction);

        for (i, text) in ["Coffee", "4.5", "Food"].iter().enumerate() {
            if i > 0 {
                handle_key(&mut app, KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE));
            }
            for c in text.chars() {
                handle_key(&mut app, KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
            }
        }
        handle_key(&mut app, KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));

        assert!(draw(&app).contains("Registering…"));
    }

    #[test]
    fn test_validation_errors_are_rendered() {
        let settings = Settings::default();
        let submitter = RecordingSubmitter::default();
        let mut app = App::new(&settings, &submitter);
        app.open_dialog(ActiveDialog::NewTransaction);
        handle_key(&mut app, KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));

        let text = draw(&app);
        assert!(text.contains("Description is required"));
        assert!(text.contains("Price is required"));
        assert!(text.contains("Category is required"));
    }

    #[test]
    fn test_type_keys_only_apply_on_type_control() {
        let form = NewTransactionForm::new();
        let key = KeyEvent::new(KeyCode::Char('o'), KeyModifiers::NONE);
        assert_eq!(to_message(&form, key), Some(FormMessage::Insert('o')));

        let mut form = NewTransactionForm::new();
        form.apply(FormMessage::Focus(Field::Type));
        assert_eq!(
            to_message(&form, key),
            Some(FormMessage::SelectType(TransactionType::Outcome))
        );
        assert_eq!(
            to_message(&form, KeyEvent::new(KeyCode::Left, KeyModifiers::NONE)),
            Some(FormMessage::SelectType(TransactionType::Income))
        );
    }

    #[test]
    fn test_shift_tab_moves_back() {
        let form = NewTransactionForm::new();
        assert_eq!(
            to_message(&form, KeyEvent::new(KeyCode::Tab, KeyModifiers::SHIFT)),
            Some(FormMessage::FocusPrev)
        );
        assert_eq!(
            to_message(&form, KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)),
            Some(FormMessage::FocusPrev)
        );
    }
}
