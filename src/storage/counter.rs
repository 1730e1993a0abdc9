//! Counter file holding the last minted account number suffix

use std::io::Write;
use std::path::PathBuf;

use tracing::warn;

use crate::error::BankbookResult;

use super::file_io::{read_text, write_atomic};

/// Repository for the single-integer counter file
pub struct CounterRepository {
    path: PathBuf,
}

impl CounterRepository {
    /// Create a new counter repository
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Read the persisted counter
    ///
    /// A missing file yields `None`. So does an unreadable value: the caller
    /// recomputes the counter from the loaded accounts either way.
    pub fn load(&self) -> BankbookResult<Option<u64>> {
        let Some(text) = read_text(&self.path)? else {
            return Ok(None);
        };

        match text.trim().parse() {
            Ok(value) => Ok(Some(value)),
            Err(_) => {
                warn!(path = %self.path.display(), "ignoring unreadable account counter");
                Ok(None)
            }
        }
    }

    /// Overwrite the counter file with `value`
    pub fn save(&self, value: u64) -> BankbookResult<()> {
        write_atomic(&self.path, |writer| write!(writer, "{}", value))
    }
}
