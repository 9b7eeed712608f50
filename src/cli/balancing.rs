//! Balancing (reality check) CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_balancing_overview, format_reconcile_outcome};
use crate::error::{CascadeError, CascadeResult};
use crate::services::reconciliation::{parse_balance_input, reconcile};
use crate::storage::Storage;

/// Balancing subcommands
#[derive(Subcommand)]
pub enum BalancingCommands {
    /// Show an account's calculated balance and last reality check
    Show {
        /// Account name
        account: String,
    },
    /// Record the account's real balance and store the new balancing value
    Update {
        /// Account name
        account: String,
        /// The real balance as you read it ("1.234,56" or "1250")
        value: String,
    },
}

/// Handle a balancing subcommand
pub fn handle_balancing_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BalancingCommands,
) -> CascadeResult<()> {
    match cmd {
        BalancingCommands::Show { account } => {
            let account = storage
                .accounts
                .get(&account)?
                .ok_or_else(|| CascadeError::account_not_found(account))?;

            let kind = settings.account_kind(&account.name);
            print!("{}", format_balancing_overview(&account, kind));
        }
        BalancingCommands::Update { account, value } => {
            let mut account = storage
                .accounts
                .get(&account)?
                .ok_or_else(|| CascadeError::account_not_found(account))?;

            let kind = settings.account_kind(&account.name);

            // A rejected entry leaves the stored balancing untouched.
            let parsed = parse_balance_input(kind, &value)
                .map_err(|e| CascadeError::Reconciliation(e.to_string()))?;

            let outcome = reconcile(&mut account, parsed.value);
            storage.accounts.upsert(account.clone())?;
            storage.accounts.save()?;

            print!("{}", format_reconcile_outcome(&account, kind, &outcome));
        }
    }

    Ok(())
}
