//! Bankbook - single-user account ledger
//!
//! This library provides the core of the Bankbook ledger: savings and
//! current accounts with per-type minimum balances, PIN-authorized
//! withdrawals, a narration history per account, and persistence to
//! line-oriented flat files between runs.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and ledger settings
//! - `error`: Custom error types
//! - `models`: Accounts, money, account numbers and credentials
//! - `storage`: Flat-file persistence for accounts and the counter
//! - `journal`: Append-only transaction journal
//! - `services`: Business logic layer
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `bankbook` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use bankbook_cli::config::{paths::BankbookPaths, settings::Settings};
//! use bankbook_cli::services::AccountService;
//! use bankbook_cli::storage::Storage;
//!
//! let paths = BankbookPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut storage = Storage::new(paths, &settings)?;
//! storage.load_all()?;
//!
//! let service = AccountService::new(&storage, &settings);
//! let accounts = service.list_all()?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod journal;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{BankbookError, BankbookResult};
