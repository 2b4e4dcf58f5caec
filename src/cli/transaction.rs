//! Transaction CLI commands
//!
//! Registers a transaction without opening the TUI. The arguments go through
//! the same draft validation the dialog uses.

use chrono::Utc;
use clap::Args;
use tokio::runtime::Runtime;
use tracing::{info, warn};

use crate::api::ApiClient;
use crate::error::DtMoneyResult;
use crate::form::{validate, Draft};
use crate::models::{NewTransaction, TransactionType};

/// Arguments of `dt-money add`
#[derive(Args, Debug)]
pub struct AddTransactionArgs {
    /// What the money was for
    #[arg(short, long)]
    pub description: String,
    /// Amount, e.g. "59.90"
    #[arg(short, long, allow_hyphen_values = true)]
    pub price: String,
    /// Category name
    #[arg(short, long)]
    pub category: String,
    /// income or outcome
    #[arg(short = 't', long = "type", default_value = "income")]
    pub kind: TransactionType,
}

impl AddTransactionArgs {
    fn to_draft(&self) -> Draft {
        Draft {
            description: self.description.clone(),
            price: self.price.clone(),
            category: self.category.clone(),
            kind: self.kind,
        }
    }
}

/// Handle `dt-money add`
pub fn handle_add_command(
    client: &ApiClient,
    runtime: &Runtime,
    args: AddTransactionArgs,
) -> DtMoneyResult<()> {
    let input = validate(&args.to_draft()).map_err(|errors| {
        warn!("Rejected transaction from the command line: {}", errors);
        errors
    })?;

    let transaction = NewTransaction::from_input(input, Utc::now());
    info!("Submitting transaction: {}", transaction);

    runtime.block_on(client.create_transaction(&transaction))?;

    info!("Transaction registered");
    println!("Registered {}", transaction);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiSettings;
    use crate::error::DtMoneyError;
    use crate::form::Field;

    #[test]
    fn test_invalid_arguments_fail_before_any_request() {
        // Nothing listens on this port; a request would surface as an API error
        let client = ApiClient::new(&ApiSettings {
            base_url: "http://127.0.0.1:9".to_string(),
            timeout_secs: 1,
        })
        .unwrap();
        let runtime = Runtime::new().unwrap();

        let args = AddTransactionArgs {
            description: "Coffee".into(),
            price: "cheap".into(),
            category: "  ".into(),
            kind: TransactionType::Outcome,
        };

        match handle_add_command(&client, &runtime, args) {
            Err(DtMoneyError::Validation(errors)) => {
                assert!(errors.contains(Field::Price));
                assert!(errors.contains(Field::Category));
                assert!(!errors.contains(Field::Description));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_draft_keeps_raw_values() {
        let args = AddTransactionArgs {
            description: " Salary ".into(),
            price: "5000".into(),
            category: "Work".into(),
            kind: TransactionType::Income,
        };

        let draft = args.to_draft();
        assert_eq!(draft.description, " Salary ");
        assert_eq!(draft.price, "5000");
        assert_eq!(draft.kind, TransactionType::Income);
    }
}
