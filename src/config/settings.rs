//! User settings for cascade-cli
//!
//! Manages user preferences, most importantly the account-kind
//! classification: which accounts accept decimal balance input. The
//! classification lives in configuration so the reconciliation code never
//! branches on hard-coded account names.

use serde::{Deserialize, Serialize};

use super::paths::CascadePaths;
use crate::error::CascadeError;
use crate::models::AccountKind;

/// User settings for cascade-cli
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Names of accounts that accept decimal balance input; every other
    /// account is integer-only
    #[serde(default = "default_decimal_accounts")]
    pub decimal_accounts: Vec<String>,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_decimal_accounts() -> Vec<String> {
    vec!["Mandiri".to_string(), "BCA".to_string()]
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            decimal_accounts: default_decimal_accounts(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Classify an account by name
    pub fn account_kind(&self, account_name: &str) -> AccountKind {
        if self
            .decimal_accounts
            .iter()
            .any(|name| name.eq_ignore_ascii_case(account_name))
        {
            AccountKind::Decimal
        } else {
            AccountKind::Integer
        }
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &CascadePaths) -> Result<Self, CascadeError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| CascadeError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| CascadeError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            // Create default settings; let the caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &CascadePaths) -> Result<(), CascadeError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| CascadeError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| CascadeError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.decimal_accounts.len(), 2);
    }

    #[test]
    fn test_account_kind_classification() {
        let settings = Settings::default();
        assert_eq!(settings.account_kind("Mandiri"), AccountKind::Decimal);
        assert_eq!(settings.account_kind("bca"), AccountKind::Decimal);
        assert_eq!(settings.account_kind("Wallet"), AccountKind::Integer);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CascadePaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.decimal_accounts = vec!["Checking".to_string()];

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.decimal_accounts, vec!["Checking".to_string()]);
        assert_eq!(loaded.account_kind("Checking"), AccountKind::Decimal);
        assert_eq!(loaded.account_kind("Mandiri"), AccountKind::Integer);
    }

    #[test]
    fn test_serde_defaults_fill_missing_fields() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.schema_version, 1);
        assert!(!settings.decimal_accounts.is_empty());
    }
}
