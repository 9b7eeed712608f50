//! Storage layer for cascade-cli
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. The storage layer is the "external data layer" the computation
//! services assume: it loads plain value objects and hands them over.

pub mod accounts;
pub mod budgets;
pub mod file_io;
pub mod transactions;

pub use accounts::AccountRepository;
pub use budgets::BudgetRepository;
pub use file_io::{read_json, write_json_atomic};
pub use transactions::TransactionRepository;

use crate::config::paths::CascadePaths;
use crate::error::CascadeError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: CascadePaths,
    pub accounts: AccountRepository,
    pub budgets: BudgetRepository,
    pub transactions: TransactionRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: CascadePaths) -> Result<Self, CascadeError> {
        paths.ensure_directories()?;

        Ok(Self {
            accounts: AccountRepository::new(paths.accounts_file()),
            budgets: BudgetRepository::new(paths.budgets_file()),
            transactions: TransactionRepository::new(paths.transactions_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &CascadePaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), CascadeError> {
        self.accounts.load()?;
        self.budgets.load()?;
        self.transactions.load()?;
        Ok(())
    }
}
