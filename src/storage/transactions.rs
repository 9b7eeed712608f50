//! Transaction repository for JSON storage
//!
//! Transactions are an append-oriented list; the computation layer filters
//! and sums them per request, so the repository only loads, appends and
//! saves.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::CascadeError;
use crate::models::Transaction;

use super::file_io::{read_json, write_json_atomic};

/// Serializable transaction data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct TransactionData {
    transactions: Vec<Transaction>,
}

/// Repository for transaction persistence
pub struct TransactionRepository {
    path: PathBuf,
    data: RwLock<Vec<Transaction>>,
}

impl TransactionRepository {
    /// Create a new transaction repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load transactions from disk
    pub fn load(&self) -> Result<(), CascadeError> {
        let file_data: TransactionData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| CascadeError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *data = file_data.transactions;
        Ok(())
    }

    /// Save transactions to disk
    pub fn save(&self) -> Result<(), CascadeError> {
        let data = self
            .data
            .read()
            .map_err(|e| CascadeError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = TransactionData {
            transactions: data.clone(),
        };

        write_json_atomic(&self.path, &file_data)
    }

    /// Append a single transaction
    pub fn append(&self, transaction: Transaction) -> Result<(), CascadeError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| CascadeError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.push(transaction);
        Ok(())
    }

    /// Append a batch of transactions (CSV import)
    pub fn append_all(&self, transactions: Vec<Transaction>) -> Result<(), CascadeError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| CascadeError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.extend(transactions);
        Ok(())
    }

    /// Get all transactions in insertion order
    pub fn get_all(&self) -> Result<Vec<Transaction>, CascadeError> {
        let data = self
            .data
            .read()
            .map_err(|e| CascadeError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.clone())
    }
}
