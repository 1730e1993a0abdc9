//! Transaction journal for Bankbook
//!
//! An append-only, human-readable log of ledger events, separate from the
//! per-account narrations. Nothing in Bankbook reads it back.
//!
//! # Format
//!
//! Each entry is a `ctime`-style timestamp line, the message prefixed with
//! `" - "`, and a blank line:
//!
//! ```text
//! Sun Oct 18 14:00:00 2026
//!  - Account created: ACCT1001 for Rahim Uddin
//!
//! ```
//!
//! Writes are best-effort: if the journal can't be opened the ledger
//! operation still succeeds and a warning is logged.

mod entry;
mod logger;

pub use entry::JournalEntry;
pub use logger::TransactionJournal;
