//! The new-transaction form: validation rules and editable state

pub mod schema;
pub mod state;

pub use schema::{parse_price, validate, Draft, Field, FieldErrors, PriceError};
pub use state::{FormMessage, NewTransactionForm, SubmitRejected};
