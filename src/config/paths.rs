//! Path management for cascade-cli
//!
//! Provides XDG-compliant path resolution for configuration and data.
//!
//! ## Path Resolution Order
//!
//! 1. `CASCADE_CLI_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/cascade-cli` or `~/.config/cascade-cli`
//! 3. Windows: `%APPDATA%\cascade-cli`

use std::path::PathBuf;

use crate::error::CascadeError;

/// Manages all paths used by cascade-cli
#[derive(Debug, Clone)]
pub struct CascadePaths {
    /// Base directory for all cascade-cli data
    base_dir: PathBuf,
}

impl CascadePaths {
    /// Create a new CascadePaths instance
    ///
    /// Path resolution:
    /// 1. `CASCADE_CLI_DATA_DIR` env var (explicit override)
    /// 2. Unix: `$XDG_CONFIG_HOME/cascade-cli` or `~/.config/cascade-cli`
    /// 3. Windows: `%APPDATA%\cascade-cli`
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, CascadeError> {
        let base_dir = if let Ok(custom) = std::env::var("CASCADE_CLI_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create CascadePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/cascade-cli/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/cascade-cli/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to accounts.json
    pub fn accounts_file(&self) -> PathBuf {
        self.data_dir().join("accounts.json")
    }

    /// Get the path to transactions.json
    pub fn transactions_file(&self) -> PathBuf {
        self.data_dir().join("transactions.json")
    }

    /// Get the path to budgets.json (monthly budgets per category)
    pub fn budgets_file(&self) -> PathBuf {
        self.data_dir().join("budgets.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), CascadeError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| CascadeError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| CascadeError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if cascade-cli has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, CascadeError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| {
            std::env::var("HOME").map(|home| PathBuf::from(home).join(".config"))
        })
        .map_err(|_| CascadeError::Config("Could not determine home directory".into()))?;
    Ok(config_base.join("cascade-cli"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, CascadeError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| CascadeError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("cascade-cli"))
}
