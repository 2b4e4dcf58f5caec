//! Event handler for the TUI
//!
//! Routes keyboard events to the active dialog or the home screen, and
//! submission outcomes to the app.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Submission { ticket, outcome } => {
            app.on_submission(ticket, outcome);
            Ok(())
        }
        Event::Mouse(_) | Event::Tick | Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Windows reports releases too
    if key.kind == KeyEventKind::Release {
        return Ok(());
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    handle_normal_key(app, key)
}

/// Handle keys on the home screen
fn handle_normal_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('n') | KeyCode::Char('N') => {
            app.clear_status();
            app.open_dialog(ActiveDialog::NewTransaction);
        }
        KeyCode::Esc => app.clear_status(),
        _ => {}
    }

    Ok(())
}

/// Handle keys while a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.active_dialog {
        ActiveDialog::NewTransaction => {
            dialogs::new_transaction::handle_key(app, key);
        }
        ActiveDialog::None => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{SubmissionOutcome, SubmissionTicket};
    use crate::config::settings::Settings;
    use crate::models::TransactionType;
    use crate::tui::app::tests::RecordingSubmitter;

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn fill_form(app: &mut App, description: &str, price: &str, category: &str) {
        type_text(app, description);
        press(app, KeyCode::Tab);
        type_text(app, price);
        press(app, KeyCode::Tab);
        type_text(app, category);
    }

    #[test]
    fn test_n_opens_dialog_and_q_quits() {
        let settings = Settings::default();
        let submitter = RecordingSubmitter::default();
        let mut app = App::new(&settings, &submitter);

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.active_dialog, ActiveDialog::NewTransaction);

        // 'q' is text inside the dialog
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.transaction_form.description_input.value(), "q");

        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_valid_submission_sends_exactly_one_request() {
        let settings = Settings::default();
        let submitter = RecordingSubmitter::default();
        let mut app = App::new(&settings, &submitter);

        press(&mut app, KeyCode::Char('n'));
        fill_form(&mut app, "Hamburguer", "59", "Food");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);

        let calls = submitter.calls.borrow();
        assert_eq!(calls.len(), 1);

        let body = serde_json::to_value(&calls[0].1).unwrap();
        let object = body.as_object().unwrap();
        assert_eq!(object.len(), 5);
        assert_eq!(object["description"], "Hamburguer");
        assert_eq!(object["price"].as_f64(), Some(59.0));
        assert_eq!(object["category"], "Food");
        assert_eq!(object["type"], "outcome");
        assert!(object["createdAt"].is_string());
    }

    #[test]
    fn test_enter_while_in_flight_is_a_no_op() {
        let settings = Settings::default();
        let submitter = RecordingSubmitter::default();
        let mut app = App::new(&settings, &submitter);

        press(&mut app, KeyCode::Char('n'));
        fill_form(&mut app, "Rent", "1200", "House");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);

        assert_eq!(submitter.calls.borrow().len(), 1);
        assert!(app.transaction_form.is_submitting());

        handle_event(
            &mut app,
            Event::Submission {
                ticket: SubmissionTicket::first(),
                outcome: SubmissionOutcome::Created,
            },
        )
        .unwrap();
        assert!(!app.has_dialog());
    }

    #[test]
    fn test_non_numeric_price_never_reaches_the_network() {
        let settings = Settings::default();
        let submitter = RecordingSubmitter::default();
        let mut app = App::new(&settings, &submitter);

        press(&mut app, KeyCode::Char('n'));
        fill_form(&mut app, "Rent", "a lot", "House");
        press(&mut app, KeyCode::Enter);

        assert!(submitter.calls.borrow().is_empty());
        assert!(app.transaction_form.field_error(crate::form::Field::Price).is_some());
        assert!(app.has_dialog());
    }

    #[test]
    fn test_last_type_selection_wins() {
        let settings = Settings::default();
        let submitter = RecordingSubmitter::default();
        let mut app = App::new(&settings, &submitter);

        press(&mut app, KeyCode::Char('n'));
        fill_form(&mut app, "Bonus", "300", "Work");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('o'));
        press(&mut app, KeyCode::Char('i'));
        press(&mut app, KeyCode::Enter);

        let calls = submitter.calls.borrow();
        assert_eq!(calls[0].1.kind, TransactionType::Income);
    }

    #[test]
    fn test_closing_dialog_sends_nothing() {
        let settings = Settings::default();
        let submitter = RecordingSubmitter::default();
        let mut app = App::new(&settings, &submitter);

        press(&mut app, KeyCode::Char('n'));
        fill_form(&mut app, "Rent", "1200", "House");
        press(&mut app, KeyCode::Esc);

        assert!(!app.has_dialog());
        assert!(submitter.calls.borrow().is_empty());
    }

    #[test]
    fn test_ctrl_c_quits_from_dialog() {
        let settings = Settings::default();
        let submitter = RecordingSubmitter::default();
        let mut app = App::new(&settings, &submitter);

        press(&mut app, KeyCode::Char('n'));
        handle_event(
            &mut app,
            Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        )
        .unwrap();
        assert!(app.should_quit);
    }
}
