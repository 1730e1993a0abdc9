//! Append-only transaction journal

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::{BankbookError, BankbookResult};

use super::entry::JournalEntry;

/// Appends entries to the transaction journal file
#[derive(Debug, Clone)]
pub struct TransactionJournal {
    /// Path to the journal file
    log_path: PathBuf,
}

impl TransactionJournal {
    /// Create a journal that appends to the specified path
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append an entry, reporting any failure
    ///
    /// The file is opened, written and flushed per entry.
    pub fn append(&self, entry: &JournalEntry) -> BankbookResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| BankbookError::Io(format!("Failed to open transaction log: {}", e)))?;

        file.write_all(entry.render().as_bytes())
            .map_err(|e| BankbookError::Io(format!("Failed to write transaction log: {}", e)))?;

        file.flush()
            .map_err(|e| BankbookError::Io(format!("Failed to flush transaction log: {}", e)))?;

        Ok(())
    }

    /// Record `message` now; failures are logged and otherwise ignored
    pub fn log_event(&self, message: impl Into<String>) {
        let entry = JournalEntry::now(message);
        if let Err(e) = self.append(&entry) {
            warn!(path = %self.log_path.display(), error = %e, "transaction log entry dropped");
        }
    }

    /// Get the path to the journal file
    pub fn path(&self) -> &Path {
        &self.log_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_journal() -> (TransactionJournal, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let journal = TransactionJournal::new(temp_dir.path().join("bank_transactions.log"));
        (journal, temp_dir)
    }

    #[test]
    fn test_log_event_appends() {
        let (journal, _temp) = create_test_journal();
        assert!(!journal.path().exists());

        journal.log_event("Account created: ACCT1001 for Rahim");
        journal.log_event("Deposit to ACCT1001: 200.00 BDT");

        let contents = std::fs::read_to_string(journal.path()).unwrap();
        let messages: Vec<&str> = contents
            .lines()
            .filter_map(|l| l.strip_prefix(" - "))
            .collect();
        assert_eq!(
            messages,
            vec![
                "Account created: ACCT1001 for Rahim",
                "Deposit to ACCT1001: 200.00 BDT"
            ]
        );
        assert_eq!(contents.matches("\n\n").count(), 2);
    }

    #[test]
    fn test_unwritable_journal_is_not_fatal() {
        let temp_dir = TempDir::new().unwrap();
        // A directory can't be opened for appending
        let journal = TransactionJournal::new(temp_dir.path().to_path_buf());

        journal.log_event("Withdrawal from ACCT1001: 50.00 BDT");
        assert!(journal
            .append(&JournalEntry::now("again"))
            .is_err());
    }

    #[test]
    fn test_survives_restart() {
        let (journal, temp) = create_test_journal();
        journal.log_event("first");

        let reopened = TransactionJournal::new(temp.path().join("bank_transactions.log"));
        reopened.log_event("second");

        let contents = std::fs::read_to_string(reopened.path()).unwrap();
        assert!(contents.contains(" - first\n"));
        assert!(contents.contains(" - second\n"));
    }
}
