//! Account repository for JSON storage
//!
//! Manages loading and saving accounts to accounts.json. Accounts are keyed
//! by name; lookups are case-insensitive so CLI arguments don't need exact
//! casing.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::CascadeError;
use crate::models::Account;

use super::file_io::{read_json, write_json_atomic};

/// Serializable account data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct AccountData {
    accounts: Vec<Account>,
}

/// Repository for account persistence
pub struct AccountRepository {
    path: PathBuf,
    data: RwLock<Vec<Account>>,
}

impl AccountRepository {
    /// Create a new account repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load accounts from disk
    pub fn load(&self) -> Result<(), CascadeError> {
        let file_data: AccountData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| CascadeError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *data = file_data.accounts;
        Ok(())
    }

    /// Save accounts to disk
    pub fn save(&self) -> Result<(), CascadeError> {
        let data = self
            .data
            .read()
            .map_err(|e| CascadeError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = AccountData {
            accounts: data.clone(),
        };

        write_json_atomic(&self.path, &file_data)
    }

    /// Get an account by name
    pub fn get(&self, name: &str) -> Result<Option<Account>, CascadeError> {
        let data = self
            .data
            .read()
            .map_err(|e| CascadeError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data
            .iter()
            .find(|a| a.name.eq_ignore_ascii_case(name))
            .cloned())
    }

    /// Get all accounts, sorted by name
    pub fn get_all(&self) -> Result<Vec<Account>, CascadeError> {
        let data = self
            .data
            .read()
            .map_err(|e| CascadeError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut accounts = data.clone();
        accounts.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(accounts)
    }

    /// Insert a new account; errors if the name is already taken
    pub fn insert(&self, account: Account) -> Result<(), CascadeError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| CascadeError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        if data.iter().any(|a| a.name.eq_ignore_ascii_case(&account.name)) {
            return Err(CascadeError::Duplicate {
                entity_type: "Account",
                identifier: account.name,
            });
        }

        data.push(account);
        Ok(())
    }

    /// Insert or replace an account by name
    pub fn upsert(&self, account: Account) -> Result<(), CascadeError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| CascadeError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        match data
            .iter_mut()
            .find(|a| a.name.eq_ignore_ascii_case(&account.name))
        {
            Some(existing) => *existing = account,
            None => data.push(account),
        }
        Ok(())
    }
}
