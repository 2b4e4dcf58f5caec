//! Client for the remote transactions API

pub mod client;
pub mod submit;

pub use client::{ApiClient, ApiError};
pub use submit::{
    HttpSubmitter, OutcomeNotifier, SubmissionOutcome, SubmissionTicket, Submitter,
};
