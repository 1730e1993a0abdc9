//! Configuration module for Bankbook
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - Ledger settings persistence (prefix, balance floors, credential length)

pub mod paths;
pub mod settings;

pub use paths::BankbookPaths;
pub use settings::{CounterMode, Settings};
