//! Ledger settings for Bankbook
//!
//! Ledger constants are configuration here: the account number prefix and
//! seed, balance floors per account type, the credential length and the
//! currency label.

use serde::{Deserialize, Serialize};

use super::paths::BankbookPaths;
use crate::error::BankbookError;
use crate::models::{BalanceRules, Money, DEFAULT_CREDENTIAL_LENGTH};

/// How the account counter survives between runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CounterMode {
    /// Counter file is written after each new account and reconciled on load
    #[default]
    Persisted,
    /// No counter file; the counter is rebuilt from the seed and the loaded
    /// account numbers
    Derived,
}

/// User settings for Bankbook
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Prefix of every minted account number
    #[serde(default = "default_account_prefix")]
    pub account_prefix: String,

    /// Counter value before the first account; first number is seed + 1
    #[serde(default = "default_counter_seed")]
    pub counter_seed: u64,

    /// Whether the counter is persisted to its own file
    #[serde(default)]
    pub counter_mode: CounterMode,

    /// Minimum balance for savings accounts
    #[serde(default = "default_savings_minimum")]
    pub savings_minimum_balance: Money,

    /// Minimum balance for current accounts
    #[serde(default = "default_current_minimum")]
    pub current_minimum_balance: Money,

    /// Number of digits in a withdrawal credential
    #[serde(default = "default_credential_length")]
    pub credential_length: usize,

    /// Reject opening deposits below the type's minimum balance
    #[serde(default = "default_true")]
    pub enforce_opening_minimum: bool,

    /// Currency label shown after amounts
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_account_prefix() -> String {
    "ACCT".to_string()
}

fn default_counter_seed() -> u64 {
    1000
}

fn default_savings_minimum() -> Money {
    Money::from_major(100)
}

fn default_current_minimum() -> Money {
    Money::from_major(500)
}

fn default_credential_length() -> usize {
    DEFAULT_CREDENTIAL_LENGTH
}

fn default_true() -> bool {
    true
}

fn default_currency() -> String {
    "BDT".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            account_prefix: default_account_prefix(),
            counter_seed: default_counter_seed(),
            counter_mode: CounterMode::default(),
            savings_minimum_balance: default_savings_minimum(),
            current_minimum_balance: default_current_minimum(),
            credential_length: default_credential_length(),
            enforce_opening_minimum: true,
            currency: default_currency(),
        }
    }
}

impl Settings {
    /// The balance rules the account model enforces
    pub fn balance_rules(&self) -> BalanceRules {
        BalanceRules {
            savings_minimum: self.savings_minimum_balance,
            current_minimum: self.current_minimum_balance,
            currency: self.currency.clone(),
        }
    }

    /// Check settings that would make the ledger unusable
    pub fn validate(&self) -> Result<(), BankbookError> {
        if self.account_prefix.is_empty()
            || self.account_prefix.chars().any(|c| c.is_whitespace() || c.is_ascii_digit())
        {
            return Err(BankbookError::Config(format!(
                "account_prefix must be non-empty without digits or whitespace: '{}'",
                self.account_prefix
            )));
        }
        if self.currency.contains('\n') || self.currency.contains('\r') {
            return Err(BankbookError::Config(
                "currency must not contain line breaks".into(),
            ));
        }
        if self.credential_length == 0 {
            return Err(BankbookError::Config(
                "credential_length must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Load settings from disk, or default settings if the file doesn't exist
    pub fn load_or_create(paths: &BankbookPaths) -> Result<Self, BankbookError> {
        let settings_path = paths.settings_file();

        let settings = if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                BankbookError::Io(format!("Failed to read settings file: {}", e))
            })?;

            serde_json::from_str(&contents).map_err(|e| {
                BankbookError::Config(format!("Failed to parse settings file: {}", e))
            })?
        } else {
            // Don't save yet - let caller decide when to persist
            Settings::default()
        };

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BankbookPaths) -> Result<(), BankbookError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            BankbookError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            BankbookError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
