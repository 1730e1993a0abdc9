//! Service layer for Bankbook
//!
//! The service layer provides business logic on top of the storage layer:
//! input validation, the opening-balance rule, persistence after every
//! mutation, and the transaction journal.

pub mod account;

pub use account::AccountService;
