//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod account;
pub mod balancing;
pub mod budget;
pub mod transaction;
pub mod weekly;

pub use account::{handle_account_command, AccountCommands};
pub use balancing::{handle_balancing_command, BalancingCommands};
pub use budget::{handle_budget_command, BudgetCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};
pub use weekly::{handle_weekly_command, WeeklyCommands};
