//! Path management for Bankbook
//!
//! Provides XDG-compliant path resolution for configuration and ledger data.
//!
//! ## Path Resolution Order
//!
//! 1. `BANKBOOK_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/bankbook` or `~/.config/bankbook`
//! 3. Windows: `%APPDATA%\bankbook`

use std::path::PathBuf;

use crate::error::BankbookError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "BANKBOOK_DATA_DIR";

/// Manages all paths used by Bankbook
#[derive(Debug, Clone)]
pub struct BankbookPaths {
    /// Base directory for all Bankbook data
    base_dir: PathBuf,
}

impl BankbookPaths {
    /// Create a new BankbookPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, BankbookError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create BankbookPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/bankbook/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/bankbook/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the transaction journal
    pub fn transaction_log(&self) -> PathBuf {
        self.base_dir.join("bank_transactions.log")
    }

    /// Get the path to the accounts file
    pub fn accounts_file(&self) -> PathBuf {
        self.data_dir().join("bank_accounts.dat")
    }

    /// Get the path to the counter file
    pub fn counter_file(&self) -> PathBuf {
        self.data_dir().join("account_counter.dat")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), BankbookError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| BankbookError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| BankbookError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if Bankbook has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, BankbookError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var("HOME")
                .map_err(|_| BankbookError::Config("HOME environment variable not set".into()))?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("bankbook"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, BankbookError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| BankbookError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("bankbook"))
}
