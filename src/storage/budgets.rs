//! Monthly budget repository for JSON storage
//!
//! One budget entry per category; setting a category's budget replaces the
//! previous entry.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::CascadeError;
use crate::models::MonthlyBudget;

use super::file_io::{read_json, write_json_atomic};

/// Serializable budget data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct BudgetData {
    budgets: Vec<MonthlyBudget>,
}

/// Repository for monthly budget persistence
pub struct BudgetRepository {
    path: PathBuf,
    data: RwLock<Vec<MonthlyBudget>>,
}

impl BudgetRepository {
    /// Create a new budget repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load budgets from disk
    pub fn load(&self) -> Result<(), CascadeError> {
        let file_data: BudgetData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| CascadeError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *data = file_data.budgets;
        Ok(())
    }

    /// Save budgets to disk
    pub fn save(&self) -> Result<(), CascadeError> {
        let data = self
            .data
            .read()
            .map_err(|e| CascadeError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = BudgetData {
            budgets: data.clone(),
        };

        write_json_atomic(&self.path, &file_data)
    }

    /// Get the budget for a category, if set
    pub fn get(&self, category: &str) -> Result<Option<MonthlyBudget>, CascadeError> {
        let data = self
            .data
            .read()
            .map_err(|e| CascadeError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data
            .iter()
            .find(|b| b.category.eq_ignore_ascii_case(category))
            .cloned())
    }

    /// Get all budgets
    pub fn get_all(&self) -> Result<Vec<MonthlyBudget>, CascadeError> {
        let data = self
            .data
            .read()
            .map_err(|e| CascadeError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.clone())
    }

    /// Set a category's monthly budget, replacing any previous entry
    pub fn set(&self, budget: MonthlyBudget) -> Result<(), CascadeError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| CascadeError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        match data
            .iter_mut()
            .find(|b| b.category.eq_ignore_ascii_case(&budget.category))
        {
            Some(existing) => *existing = budget,
            None => data.push(budget),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_set_and_get() {
        let dir = TempDir::new().unwrap();
        let repo = BudgetRepository::new(dir.path().join("budgets.json"));

        repo.set(MonthlyBudget::new("FOOD", 310.0)).unwrap();
        let budget = repo.get("food").unwrap().unwrap();
        assert_eq!(budget.amount, 310.0);
    }

    #[test]
    fn test_set_replaces_existing() {
        let dir = TempDir::new().unwrap();
        let repo = BudgetRepository::new(dir.path().join("budgets.json"));

        repo.set(MonthlyBudget::new("FOOD", 310.0)).unwrap();
        repo.set(MonthlyBudget::new("food", 280.0)).unwrap();

        assert_eq!(repo.get_all().unwrap().len(), 1);
        assert_eq!(repo.get("FOOD").unwrap().unwrap().amount, 280.0);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("budgets.json");

        {
            let repo = BudgetRepository::new(path.clone());
            repo.set(MonthlyBudget::new("FOOD", 310.0)).unwrap();
            repo.set(MonthlyBudget::new("GROCERIES", -155.0)).unwrap();
            repo.save().unwrap();
        }

        let repo = BudgetRepository::new(path);
        repo.load().unwrap();
        assert_eq!(repo.get_all().unwrap().len(), 2);
        assert_eq!(repo.get("GROCERIES").unwrap().unwrap().pool(), 155.0);
    }
}
