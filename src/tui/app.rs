//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::api::{SubmissionOutcome, SubmissionTicket, Submitter};
use crate::config::settings::Settings;
use crate::form::{NewTransactionForm, SubmitRejected};
use crate::tui::theme::Theme;

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    NewTransaction,
}

/// Main application state
pub struct App<'a> {
    /// Application settings
    pub settings: &'a Settings,

    /// Where submitted transactions go
    submitter: &'a dyn Submitter,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Current input mode
    pub input_mode: InputMode,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Status message to display
    pub status_message: Option<String>,

    /// New transaction form state
    pub transaction_form: NewTransactionForm,

    /// Ticket handed to the next submission
    next_ticket: SubmissionTicket,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(settings: &'a Settings, submitter: &'a dyn Submitter) -> Self {
        Self {
            settings,
            submitter,
            should_quit: false,
            input_mode: InputMode::default(),
            active_dialog: ActiveDialog::default(),
            status_message: None,
            transaction_form: NewTransactionForm::new(),
            next_ticket: SubmissionTicket::first(),
        }
    }

    /// Colours to render with
    pub fn theme(&self) -> &Theme {
        &self.settings.theme
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
        match dialog {
            ActiveDialog::NewTransaction => {
                // Every opening starts from a fresh draft
                self.transaction_form = NewTransactionForm::new();
                self.input_mode = InputMode::Editing;
            }
            ActiveDialog::None => {
                self.input_mode = InputMode::Normal;
            }
        }
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
        self.input_mode = InputMode::Normal;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// Submit the new transaction form
    ///
    /// Hands at most one request to the submitter; does nothing while a
    /// previous submission from the same form is in flight.
    pub fn submit_transaction(&mut self) {
        let ticket = self.next_ticket;
        match self.transaction_form.begin_submit(ticket, Utc::now()) {
            Ok(transaction) => {
                self.next_ticket = ticket.next();
                self.submitter.submit(ticket, transaction);
            }
            Err(SubmitRejected::InFlight) => {
                debug!("Ignoring submit while {:?} is in flight", self.transaction_form.pending);
            }
            Err(SubmitRejected::Invalid(errors)) => {
                debug!("Form rejected: {}", errors);
            }
        }
    }

    /// Handle the outcome of a submission
    pub fn on_submission(&mut self, ticket: SubmissionTicket, outcome: SubmissionOutcome) {
        let owned_by_open_form = self.active_dialog == ActiveDialog::NewTransaction
            && self.transaction_form.finish_submit(ticket, &outcome);

        match outcome {
            SubmissionOutcome::Created => {
                info!("Transaction {} created", ticket);
                if owned_by_open_form {
                    self.close_dialog();
                }
                self.set_status("Transaction registered");
            }
            SubmissionOutcome::Failed(reason) => {
                warn!("Transaction {} failed: {}", ticket, reason);
                // An open form shows the error itself
                if !owned_by_open_form {
                    self.set_status(format!("Failed to register transaction: {}", reason));
                }
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::form::FormMessage;
    use crate::models::{NewTransaction, TransactionType};
    use std::cell::RefCell;

    /// Records submissions instead of sending them
    #[derive(Default)]
    pub(crate) struct RecordingSubmitter {
        pub calls: RefCell<Vec<(SubmissionTicket, NewTransaction)>>,
    }

    impl Submitter for RecordingSubmitter {
        fn submit(&self, ticket: SubmissionTicket, transaction: NewTransaction) {
            self.calls.borrow_mut().push((ticket, transaction));
        }
    }

    fn fill(app: &mut App) {
        for (i, text) in ["Salary", "5000", "Work"].iter().enumerate() {
            if i > 0 {
                app.transaction_form.apply(FormMessage::FocusNext);
            }
            for c in text.chars() {
                app.transaction_form.apply(FormMessage::Insert(c));
            }
        }
    }

    #[test]
    fn test_open_dialog_resets_form() {
        let settings = Settings::default();
        let submitter = RecordingSubmitter::default();
        let mut app = App::new(&settings, &submitter);

        app.open_dialog(ActiveDialog::NewTransaction);
        app.transaction_form.apply(FormMessage::Insert('x'));
        app.transaction_form.apply(FormMessage::ToggleType);
        app.close_dialog();
        app.open_dialog(ActiveDialog::NewTransaction);

        assert_eq!(app.transaction_form.description_input.value(), "");
        assert_eq!(app.transaction_form.kind, TransactionType::Income);
        assert_eq!(app.input_mode, InputMode::Editing);
    }

    #[test]
    fn test_submit_hands_one_request_to_submitter() {
        let settings = Settings::default();
        let submitter = RecordingSubmitter::default();
        let mut app = App::new(&settings, &submitter);

        app.open_dialog(ActiveDialog::NewTransaction);
        fill(&mut app);
        app.submit_transaction();
        app.submit_transaction();

        let calls = submitter.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, SubmissionTicket::first());
        assert_eq!(calls[0].1.description, "Salary");
    }

    #[test]
    fn test_success_closes_dialog() {
        let settings = Settings::default();
        let submitter = RecordingSubmitter::default();
        let mut app = App::new(&settings, &submitter);

        app.open_dialog(ActiveDialog::NewTransaction);
        fill(&mut app);
        app.submit_transaction();
        app.on_submission(SubmissionTicket::first(), SubmissionOutcome::Created);

        assert!(!app.has_dialog());
        assert_eq!(app.status_message.as_deref(), Some("Transaction registered"));
    }

    #[test]
    fn test_failure_keeps_dialog_open_and_allows_retry() {
        let settings = Settings::default();
        let submitter = RecordingSubmitter::default();
        let mut app = App::new(&settings, &submitter);

        app.open_dialog(ActiveDialog::NewTransaction);
        fill(&mut app);
        app.submit_transaction();
        app.on_submission(
            SubmissionTicket::first(),
            SubmissionOutcome::Failed("connection refused".into()),
        );

        assert!(app.has_dialog());
        assert!(!app.transaction_form.is_submitting());
        assert!(app.transaction_form.error_message.is_some());
        assert!(app.status_message.is_none());

        app.submit_transaction();
        assert_eq!(submitter.calls.borrow().len(), 2);
    }

    #[test]
    fn test_stale_outcome_does_not_touch_new_form() {
        let settings = Settings::default();
        let submitter = RecordingSubmitter::default();
        let mut app = App::new(&settings, &submitter);

        app.open_dialog(ActiveDialog::NewTransaction);
        fill(&mut app);
        app.submit_transaction();
        app.close_dialog();

        app.open_dialog(ActiveDialog::NewTransaction);
        fill(&mut app);
        app.submit_transaction();
        assert_eq!(submitter.calls.borrow().len(), 2);

        app.on_submission(
            SubmissionTicket::first(),
            SubmissionOutcome::Failed("timeout".into()),
        );
        assert!(app.has_dialog());
        assert!(app.transaction_form.is_submitting());
        assert_eq!(
            app.status_message.as_deref(),
            Some("Failed to register transaction: timeout")
        );
    }
}
