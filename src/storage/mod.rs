//! Storage layer for Bankbook
//!
//! Flat-file persistence for the ledger: the accounts file, the counter
//! file and the transaction journal. Rewrites are atomic (temp file and
//! rename) and missing files load as empty.

pub mod accounts;
pub mod counter;
pub mod file_io;
pub mod record;

pub use accounts::AccountRepository;
pub use counter::CounterRepository;
pub use file_io::{read_text, write_atomic};

use std::sync::RwLock;

use tracing::debug;

use crate::config::paths::BankbookPaths;
use crate::config::settings::{CounterMode, Settings};
use crate::error::{BankbookError, BankbookResult};
use crate::journal::TransactionJournal;
use crate::models::{AccountCounter, AccountNumber};

/// Main storage coordinator that owns the ledger's persisted state
pub struct Storage {
    paths: BankbookPaths,
    counter_mode: CounterMode,
    counter_seed: u64,
    pub accounts: AccountRepository,
    counter_file: CounterRepository,
    counter: RwLock<AccountCounter>,
    journal: TransactionJournal,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: BankbookPaths, settings: &Settings) -> BankbookResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            accounts: AccountRepository::new(paths.accounts_file()),
            counter_file: CounterRepository::new(paths.counter_file()),
            counter: RwLock::new(AccountCounter::new(
                settings.account_prefix.clone(),
                settings.counter_seed,
            )),
            journal: TransactionJournal::new(paths.transaction_log()),
            counter_mode: settings.counter_mode,
            counter_seed: settings.counter_seed,
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &BankbookPaths {
        &self.paths
    }

    /// Load all data from disk
    ///
    /// The counter ends up at the larger of the persisted counter (or the
    /// seed) and the highest numeric suffix among loaded accounts, so a
    /// stale counter file can't cause a number to be minted twice.
    pub fn load_all(&mut self) -> BankbookResult<()> {
        self.accounts.load()?;

        let start = match self.counter_mode {
            CounterMode::Persisted => self.counter_file.load()?.unwrap_or(self.counter_seed),
            CounterMode::Derived => self.counter_seed,
        };

        let mut counter = self.counter.write().map_err(|e| {
            BankbookError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        let prefix = counter.prefix().to_string();
        *counter = AccountCounter::new(prefix, start);
        if let Some(highest) = self.accounts.max_numeric_suffix()? {
            counter.observe(highest);
        }

        debug!(counter = counter.value(), "ledger counter ready");
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> BankbookResult<()> {
        self.accounts.save()?;
        self.save_counter()
    }

    /// Persist the counter, if this ledger keeps a counter file
    pub fn save_counter(&self) -> BankbookResult<()> {
        if self.counter_mode == CounterMode::Persisted {
            self.counter_file.save(self.counter_value()?)?;
        }
        Ok(())
    }

    /// Mint the next account number
    pub fn next_account_number(&self) -> BankbookResult<AccountNumber> {
        let mut counter = self.counter.write().map_err(|e| {
            BankbookError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        counter.next_number().ok_or_else(|| {
            BankbookError::Storage(format!(
                "account counter exhausted at {}",
                counter.value()
            ))
        })
    }

    /// The last minted counter value
    pub fn counter_value(&self) -> BankbookResult<u64> {
        let counter = self.counter.read().map_err(|e| {
            BankbookError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(counter.value())
    }

    /// Append a line to the transaction journal (best-effort)
    pub fn log_event(&self, message: impl Into<String>) {
        self.journal.log_event(message);
    }

    /// The transaction journal
    pub fn journal(&self) -> &TransactionJournal {
        &self.journal
    }
}
