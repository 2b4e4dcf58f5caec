//! Form state for the new-transaction dialog
//!
//! Holds the draft being edited, the current validation errors and whether a
//! submission is in flight. Every user interaction arrives as a
//! [`FormMessage`]; the dialog never mutates fields directly.

use chrono::{DateTime, Utc};
use thiserror::Error;

use super::schema::{validate, Draft, Field, FieldErrors};
use crate::api::{SubmissionOutcome, SubmissionTicket};
use crate::models::{NewTransaction, TransactionType};
use crate::tui::widgets::input::TextInput;

/// A single user interaction with the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMessage {
    Insert(char),
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    SelectType(TransactionType),
    ToggleType,
    FocusNext,
    FocusPrev,
    Focus(Field),
}

/// Why a submit request did not produce a payload
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    #[error("A submission is already in progress")]
    InFlight,

    #[error("{0}")]
    Invalid(FieldErrors),
}

/// State of the new-transaction form
#[derive(Debug, Clone)]
pub struct NewTransactionForm {
    /// Currently focused field
    pub focused_field: Field,

    pub description_input: TextInput,
    pub price_input: TextInput,
    pub category_input: TextInput,

    /// Selected value of the segmented control
    pub kind: TransactionType,

    /// Errors from the last validation pass
    pub errors: FieldErrors,

    /// Set once the user tried to submit; from then on errors track every edit
    pub submit_attempted: bool,

    /// Submission currently in flight, if any
    pub pending: Option<SubmissionTicket>,

    /// Error from the last failed submission
    pub error_message: Option<String>,
}

impl Default for NewTransactionForm {
    fn default() -> Self {
        Self::new()
    }
}

impl NewTransactionForm {
    /// Create a fresh form: empty text, `income` selected, description focused
    pub fn new() -> Self {
        let mut form = Self {
            focused_field: Field::Description,
            description_input: TextInput::new().placeholder(Field::Description.label()),
            price_input: TextInput::new().placeholder(Field::Price.label()),
            category_input: TextInput::new().placeholder(Field::Category.label()),
            kind: TransactionType::Income,
            errors: FieldErrors::default(),
            submit_attempted: false,
            pending: None,
            error_message: None,
        };
        form.update_focus();
        form
    }

    /// Snapshot of the current values
    pub fn draft(&self) -> Draft {
        Draft {
            description: self.description_input.value().to_string(),
            price: self.price_input.value().to_string(),
            category: self.category_input.value().to_string(),
            kind: self.kind,
        }
    }

    /// Whether a submission is in flight (submit control disabled)
    pub fn is_submitting(&self) -> bool {
        self.pending.is_some()
    }

    /// Error to show under a field
    pub fn field_error(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }

    fn update_focus(&mut self) {
        self.description_input.focused = self.focused_field == Field::Description;
        self.price_input.focused = self.focused_field == Field::Price;
        self.category_input.focused = self.focused_field == Field::Category;
    }

    fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            Field::Description => Some(&mut self.description_input),
            Field::Price => Some(&mut self.price_input),
            Field::Category => Some(&mut self.category_input),
            Field::Type => None,
        }
    }

    /// Apply one interaction
    pub fn apply(&mut self, message: FormMessage) {
        let edited = match message {
            FormMessage::FocusNext => {
                self.focused_field = self.focused_field.next();
                self.update_focus();
                false
            }
            FormMessage::FocusPrev => {
                self.focused_field = self.focused_field.prev();
                self.update_focus();
                false
            }
            FormMessage::Focus(field) => {
                self.focused_field = field;
                self.update_focus();
                false
            }
            FormMessage::SelectType(kind) => {
                self.kind = kind;
                true
            }
            FormMessage::ToggleType => {
                self.kind = self.kind.toggle();
                true
            }
            FormMessage::Insert(c) => self.edit(|input| input.insert(c)),
            FormMessage::Backspace => self.edit(TextInput::backspace),
            FormMessage::Delete => self.edit(TextInput::delete),
            FormMessage::CursorLeft => {
                self.edit(TextInput::move_left);
                false
            }
            FormMessage::CursorRight => {
                self.edit(TextInput::move_right);
                false
            }
            FormMessage::CursorHome => {
                self.edit(TextInput::move_start);
                false
            }
            FormMessage::CursorEnd => {
                self.edit(TextInput::move_end);
                false
            }
        };

        if edited {
            self.error_message = None;
            if self.submit_attempted {
                self.revalidate();
            }
        }
    }

    /// Run `f` on the focused text input; false when the type control has focus
    fn edit(&mut self, f: impl FnOnce(&mut TextInput)) -> bool {
        match self.focused_input() {
            Some(input) => {
                f(input);
                true
            }
            None => false,
        }
    }

    fn revalidate(&mut self) {
        self.errors = match validate(&self.draft()) {
            Ok(_) => FieldErrors::default(),
            Err(errors) => errors,
        };
    }

    /// Try to start a submission
    ///
    /// On success the form is marked in flight under `ticket` and the request
    /// body, stamped with `now`, is returned for the caller to send. While a
    /// submission is in flight every further call is rejected without
    /// touching the form.
    pub fn begin_submit(
        &mut self,
        ticket: SubmissionTicket,
        now: DateTime<Utc>,
    ) -> Result<NewTransaction, SubmitRejected> {
        if self.pending.is_some() {
            return Err(SubmitRejected::InFlight);
        }

        self.submit_attempted = true;
        self.error_message = None;

        match validate(&self.draft()) {
            Ok(input) => {
                self.errors.clear();
                self.pending = Some(ticket);
                Ok(NewTransaction::from_input(input, now))
            }
            Err(errors) => {
                if let Some(field) = errors.first_field() {
                    self.apply(FormMessage::Focus(field));
                }
                self.errors = errors.clone();
                Err(SubmitRejected::Invalid(errors))
            }
        }
    }

    /// Record the outcome of a submission
    ///
    /// Returns false, leaving the form untouched, when `ticket` is not the
    /// submission this form is waiting for.
    pub fn finish_submit(&mut self, ticket: SubmissionTicket, outcome: &SubmissionOutcome) -> bool {
        if self.pending != Some(ticket) {
            return false;
        }

        self.pending = None;
        if let SubmissionOutcome::Failed(reason) = outcome {
            self.error_message = Some(format!("Could not register transaction: {}", reason));
        }
        true
    }
}
