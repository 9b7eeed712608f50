//! Account model
//!
//! An account tracks two numbers: the calculated balance maintained by the
//! ledger, and the `balancing` value recorded the last time the user
//! confirmed the account's real-world balance (the "reality check").

use serde::{Deserialize, Serialize};
use std::fmt;

/// How an account accepts balance input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    /// Accepts up to two decimal places (`,` or `.` separator)
    Decimal,
    /// Accepts whole numbers only
    #[default]
    Integer,
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decimal => write!(f, "Decimal"),
            Self::Integer => write!(f, "Integer"),
        }
    }
}

/// A financial account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Account name (e.g., "Wallet")
    pub name: String,

    /// Calculated balance, maintained by the ledger
    pub balance: f64,

    /// Last user-confirmed real balance; 0 if never recorded
    #[serde(default)]
    pub balancing: f64,
}

impl Account {
    /// Create a new account
    pub fn new(name: impl Into<String>, balance: f64) -> Self {
        Self {
            name: name.into(),
            balance,
            balancing: 0.0,
        }
    }

    /// Whether a reality check has ever been recorded
    pub fn has_balancing(&self) -> bool {
        self.balancing > 0.0
    }

    /// Validate the account
    pub fn validate(&self) -> Result<(), AccountValidationError> {
        if self.name.trim().is_empty() {
            return Err(AccountValidationError::EmptyName);
        }

        if self.name.len() > 100 {
            return Err(AccountValidationError::NameTooLong(self.name.len()));
        }

        Ok(())
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for accounts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountValidationError {
    EmptyName,
    NameTooLong(usize),
}

impl fmt::Display for AccountValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Account name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Account name too long ({} chars, max 100)", len)
            }
        }
    }
}

impl std::error::Error for AccountValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_account() {
        let account = Account::new("Wallet", 1500.0);
        assert_eq!(account.name, "Wallet");
        assert_eq!(account.balance, 1500.0);
        assert_eq!(account.balancing, 0.0);
        assert!(!account.has_balancing());
    }

    #[test]
    fn test_has_balancing() {
        let mut account = Account::new("Wallet", 1500.0);
        account.balancing = 1450.0;
        assert!(account.has_balancing());
    }

    #[test]
    fn test_validation() {
        let mut account = Account::new("Valid Name", 0.0);
        assert!(account.validate().is_ok());

        account.name = String::new();
        assert_eq!(account.validate(), Err(AccountValidationError::EmptyName));

        account.name = "a".repeat(101);
        assert!(matches!(
            account.validate(),
            Err(AccountValidationError::NameTooLong(_))
        ));
    }

    #[test]
    fn test_balancing_defaults_on_deserialize() {
        let json = r#"{"name":"Wallet","balance":100.0}"#;
        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.balancing, 0.0);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(format!("{}", AccountKind::Decimal), "Decimal");
        assert_eq!(format!("{}", AccountKind::Integer), "Integer");
    }
}
