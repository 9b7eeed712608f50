//! Transaction CLI commands

use clap::Subcommand;

use crate::display::format_amount;
use crate::error::{CascadeError, CascadeResult};
use crate::models::{Transaction, TransactionKind};
use crate::services::import::{read_transactions, ColumnMapping};
use crate::storage::Storage;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Add a new transaction
    Add {
        /// Category key (e.g., "FOOD")
        category: String,
        /// Signed amount (negative for outflow)
        #[arg(allow_negative_numbers = true)]
        amount: f64,
        /// Transaction date (DD/MM/YYYY or YYYY-MM-DD); defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Transaction kind (Spending, Income, Transfer)
        #[arg(short, long, default_value = "Spending")]
        kind: String,
    },
    /// List transactions
    List {
        /// Number of transactions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
    /// Import transactions from a CSV ledger export
    Import {
        /// Path to the CSV file
        file: String,
        /// Column index of the transaction kind
        #[arg(long, default_value = "0")]
        kind_col: usize,
        /// Column index of the category
        #[arg(long, default_value = "1")]
        category_col: usize,
        /// Column index of the date
        #[arg(long, default_value = "2")]
        date_col: usize,
        /// Column index of the signed amount
        #[arg(long, default_value = "3")]
        amount_col: usize,
    },
}

/// Handle a transaction subcommand
pub fn handle_transaction_command(storage: &Storage, cmd: TransactionCommands) -> CascadeResult<()> {
    match cmd {
        TransactionCommands::Add {
            category,
            amount,
            date,
            kind,
        } => {
            let date = date.unwrap_or_else(|| {
                chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
            });

            let transaction =
                Transaction::new(TransactionKind::parse(&kind), category, date, amount);

            if transaction.parsed_date().is_none() {
                return Err(CascadeError::Validation(format!(
                    "Unreadable date '{}'",
                    transaction.date
                )));
            }

            storage.transactions.append(transaction)?;
            storage.transactions.save()?;
            println!("Transaction recorded.");
        }
        TransactionCommands::List { limit } => {
            let transactions = storage.transactions.get_all()?;
            if transactions.is_empty() {
                println!("No transactions found.");
                return Ok(());
            }

            for txn in transactions.iter().rev().take(limit) {
                println!(
                    "{:<12}  {:<10}  {:<24}  {:>16}",
                    txn.date,
                    txn.kind.to_string(),
                    txn.category,
                    format_amount(txn.amount),
                );
            }
        }
        TransactionCommands::Import {
            file,
            kind_col,
            category_col,
            date_col,
            amount_col,
        } => {
            let reader = std::fs::File::open(&file)
                .map_err(|e| CascadeError::Import(format!("Cannot open {}: {}", file, e)))?;

            let mapping = ColumnMapping {
                kind_column: kind_col,
                category_column: category_col,
                date_column: date_col,
                amount_column: Some(amount_col),
                ..ColumnMapping::default()
            };

            let (transactions, summary) = read_transactions(reader, &mapping)?;
            storage.transactions.append_all(transactions)?;
            storage.transactions.save()?;

            println!(
                "Imported {} transactions ({} skipped).",
                summary.imported, summary.skipped
            );
        }
    }

    Ok(())
}
