//! Account CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_amount;
use crate::error::CascadeResult;
use crate::models::Account;
use crate::storage::Storage;

/// Account subcommands
#[derive(Subcommand)]
pub enum AccountCommands {
    /// Add a new account
    Add {
        /// Account name
        name: String,
        /// Current balance
        #[arg(allow_negative_numbers = true)]
        balance: f64,
    },
    /// List all accounts
    List,
}

/// Handle an account subcommand
pub fn handle_account_command(
    storage: &Storage,
    settings: &Settings,
    cmd: AccountCommands,
) -> CascadeResult<()> {
    match cmd {
        AccountCommands::Add { name, balance } => {
            let account = Account::new(name, balance);
            account
                .validate()
                .map_err(|e| crate::error::CascadeError::Validation(e.to_string()))?;

            storage.accounts.insert(account.clone())?;
            storage.accounts.save()?;
            println!("Added account '{}'.", account.name);
        }
        AccountCommands::List => {
            let accounts = storage.accounts.get_all()?;
            if accounts.is_empty() {
                println!("No accounts found.");
                return Ok(());
            }

            let name_width = accounts
                .iter()
                .map(|a| a.name.len())
                .max()
                .unwrap_or(4)
                .max(4);

            println!(
                "{:<name_width$}  {:<8}  {:>16}  {:>16}",
                "Name",
                "Kind",
                "Balance",
                "Balancing",
                name_width = name_width,
            );
            println!(
                "{:-<name_width$}  {:-<8}  {:->16}  {:->16}",
                "",
                "",
                "",
                "",
                name_width = name_width,
            );

            for account in &accounts {
                println!(
                    "{:<name_width$}  {:<8}  {:>16}  {:>16}",
                    account.name,
                    settings.account_kind(&account.name).to_string(),
                    format_amount(account.balance),
                    format_amount(account.balancing),
                    name_width = name_width,
                );
            }
        }
    }

    Ok(())
}
