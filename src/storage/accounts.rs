//! Account repository for the flat accounts file
//!
//! Keeps accounts in memory in file order and rewrites the whole file on
//! save.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::RwLock;

use tracing::debug;

use crate::error::{BankbookError, BankbookResult};
use crate::models::{Account, AccountNumber};

use super::file_io::{read_text, write_atomic};
use super::record::{read_records, write_records};

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

    /// Load accounts from disk, replacing what is in memory
    pub fn load(&self) -> BankbookResult<()> {
        let accounts = match read_text(&self.path)? {
            Some(text) => read_records(&text).map_err(|e| {
                BankbookError::Storage(format!("{}: {}", self.path.display(), e))
            })?,
            None => Vec::new(),
        };

        let mut seen = HashSet::with_capacity(accounts.len());
        for account in &accounts {
            if !seen.insert(account.number().clone()) {
                return Err(BankbookError::Storage(format!(
                    "{}: account number {} appears more than once",
                    self.path.display(),
                    account.number()
                )));
            }
        }

        debug!(path = %self.path.display(), count = accounts.len(), "loaded accounts");

        let mut data = self.data.write().map_err(|e| {
            BankbookError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *data = accounts;

        Ok(())
    }

    /// Save all accounts to disk, in collection order
    pub fn save(&self) -> BankbookResult<()> {
        let data = self.data.read().map_err(|e| {
            BankbookError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        write_atomic(&self.path, |writer| write_records(writer, data.iter()))?;
        debug!(path = %self.path.display(), count = data.len(), "saved accounts");
        Ok(())
    }

    /// Get an account by number
    pub fn get(&self, number: &AccountNumber) -> BankbookResult<Option<Account>> {
        let data = self.data.read().map_err(|e| {
            BankbookError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.iter().find(|a| a.number() == number).cloned())
    }

    /// Get all accounts in collection order
    pub fn get_all(&self) -> BankbookResult<Vec<Account>> {
        let data = self.data.read().map_err(|e| {
            BankbookError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.clone())
    }

    /// Append a new account
    pub fn insert(&self, account: Account) -> BankbookResult<()> {
        let mut data = self.data.write().map_err(|e| {
            BankbookError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        if data.iter().any(|a| a.number() == account.number()) {
            return Err(BankbookError::Duplicate {
                entity_type: "Account",
                identifier: account.number().to_string(),
            });
        }

        data.push(account);
        Ok(())
    }

    /// Run `mutate` against the stored account with this number
    ///
    /// Whatever `mutate` returns is passed through; the account is changed
    /// in place, so a mutation that fails must leave it untouched.
    pub fn update<T, F>(&self, number: &AccountNumber, mutate: F) -> BankbookResult<T>
    where
        F: FnOnce(&mut Account) -> BankbookResult<T>,
    {
        let mut data = self.data.write().map_err(|e| {
            BankbookError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        let account = data
            .iter_mut()
            .find(|a| a.number() == number)
            .ok_or_else(|| BankbookError::account_not_found(number.as_str()))?;

        mutate(account)
    }

    /// Highest numeric suffix among stored account numbers
    pub fn max_numeric_suffix(&self) -> BankbookResult<Option<u64>> {
        let data = self.data.read().map_err(|e| {
            BankbookError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.iter().filter_map(|a| a.number().numeric_suffix()).max())
    }
}
