//! Submission of new transactions
//!
//! The UI never awaits a request itself. It hands the payload to a
//! [`Submitter`] together with a [`SubmissionTicket`], and the outcome comes
//! back later through whatever notification path the submitter was built with.

use std::fmt;
use std::sync::Arc;

use tokio::runtime::Handle;
use tracing::{info, warn};

use super::client::{ApiClient, ApiError};
use crate::models::NewTransaction;

/// Identifies one submission so its outcome can be matched to the form that
/// started it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubmissionTicket(u64);

impl SubmissionTicket {
    pub const fn first() -> Self {
        Self(1)
    }

    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for SubmissionTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Result of a finished submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Created,
    Failed(String),
}

impl From<Result<(), ApiError>> for SubmissionOutcome {
    fn from(result: Result<(), ApiError>) -> Self {
        match result {
            Ok(()) => Self::Created,
            Err(e) => Self::Failed(e.to_string()),
        }
    }
}

/// Sends a transaction to wherever transactions are created
pub trait Submitter {
    /// Start exactly one create request. Must not block the caller.
    fn submit(&self, ticket: SubmissionTicket, transaction: NewTransaction);
}

/// Callback invoked from the runtime once a request finishes
pub type OutcomeNotifier = Arc<dyn Fn(SubmissionTicket, SubmissionOutcome) + Send + Sync>;

/// [`Submitter`] that posts to the HTTP API on a tokio runtime
pub struct HttpSubmitter {
    client: ApiClient,
    runtime: Handle,
    notify: OutcomeNotifier,
}

impl HttpSubmitter {
    pub fn new(client: ApiClient, runtime: Handle, notify: OutcomeNotifier) -> Self {
        Self {
            client,
            runtime,
            notify,
        }
    }
}

impl Submitter for HttpSubmitter {
    fn submit(&self, ticket: SubmissionTicket, transaction: NewTransaction) {
        let client = self.client.clone();
        let notify = Arc::clone(&self.notify);

        info!("Submitting transaction {}: {}", ticket, transaction);
        self.runtime.spawn(async move {
            let result = client.create_transaction(&transaction).await;
            match &result {
                Ok(()) => info!("Transaction {} registered", ticket),
                Err(e) => warn!("Transaction {} failed: {}", ticket, e),
            }
            notify(ticket, result.into());
        });
    }
}
