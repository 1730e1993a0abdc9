//! Core data models for Bankbook
//!
//! This module contains the data structures of the ledger domain: accounts,
//! account numbers, credentials and money.

pub mod account;
pub mod account_number;
pub mod credential;
pub mod money;
pub mod narration;

pub use account::{Account, AccountType, AccountValidationError, BalanceRules, HolderDetails};
pub use account_number::{AccountCounter, AccountNumber};
pub use credential::{Credential, CredentialError, DEFAULT_CREDENTIAL_LENGTH};
pub use money::Money;
