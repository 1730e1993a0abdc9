//! Display formatting for terminal output
//!
//! Renders accounts, balances and narration history as plain text for the
//! CLI. Credentials are never rendered.

pub mod account;

pub use account::{format_account_details, format_account_list, format_balance, format_history};
