//! Account numbers and the counter that mints them
//!
//! An account number is a fixed prefix followed by a decimal counter value,
//! e.g. `ACCT1001`. The counter only moves forward.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of an account, unique within a ledger
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountNumber(String);

impl AccountNumber {
    /// Build a number from a prefix and counter value
    pub fn new(prefix: &str, value: u64) -> Self {
        Self(format!("{}{}", prefix, value))
    }

    /// Parse an account number as typed by an operator or read from disk
    pub fn parse(s: &str) -> Result<Self, AccountNumberError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(AccountNumberError::Empty);
        }
        if s.chars().any(char::is_whitespace) {
            return Err(AccountNumberError::Whitespace(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }

    /// The number as stored
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The trailing run of ASCII digits, if any
    ///
    /// `ACCT1005` yields `Some(1005)`; `ACCT` yields `None`.
    pub fn numeric_suffix(&self) -> Option<u64> {
        let digits_start = self
            .0
            .char_indices()
            .rev()
            .take_while(|(_, c)| c.is_ascii_digit())
            .last()
            .map(|(i, _)| i)?;
        self.0[digits_start..].parse().ok()
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for AccountNumber {
    type Err = AccountNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for AccountNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Error type for account number parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountNumberError {
    Empty,
    Whitespace(String),
}

impl fmt::Display for AccountNumberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Account number cannot be empty"),
            Self::Whitespace(s) => write!(f, "Account number contains whitespace: '{}'", s),
        }
    }
}

impl std::error::Error for AccountNumberError {}

/// Monotonic counter used to mint account numbers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountCounter {
    prefix: String,
    value: u64,
}

impl AccountCounter {
    /// Create a counter at `seed`; the first number minted is `seed + 1`
    pub fn new(prefix: impl Into<String>, seed: u64) -> Self {
        Self {
            prefix: prefix.into(),
            value: seed,
        }
    }

    /// The last value handed out (or the seed if none yet)
    pub fn value(&self) -> u64 {
        self.value
    }

    /// The prefix every minted number starts with
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Bump the counter and return the new account number
    ///
    /// `None` once the counter is at `u64::MAX`; the counter is unchanged.
    pub fn next_number(&mut self) -> Option<AccountNumber> {
        self.value = self.value.checked_add(1)?;
        Some(AccountNumber::new(&self.prefix, self.value))
    }

    /// Raise the counter to at least `value`; never lowers it
    pub fn observe(&mut self, value: u64) {
        self.value = self.value.max(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_number_after_seed() {
        let mut counter = AccountCounter::new("ACCT", 1000);
        assert_eq!(counter.next_number().unwrap().as_str(), "ACCT1001");
        assert_eq!(counter.value(), 1001);
    }

    #[test]
    fn test_numbers_strictly_increase() {
        let mut counter = AccountCounter::new("ACCT", 1000);
        let mut previous = 1000;
        let mut seen = std::collections::HashSet::new();
        for _ in 0..50 {
            let number = counter.next_number().unwrap();
            let suffix = number.numeric_suffix().unwrap();
            assert!(suffix > previous);
            assert!(seen.insert(number));
            previous = suffix;
        }
    }

    #[test]
    fn test_observe_never_lowers() {
        let mut counter = AccountCounter::new("ACCT", 1002);
        counter.observe(1005);
        assert_eq!(counter.value(), 1005);
        counter.observe(1003);
        assert_eq!(counter.value(), 1005);
        assert_eq!(counter.next_number().unwrap().as_str(), "ACCT1006");
    }

    #[test]
    fn test_exhausted_counter() {
        let mut counter = AccountCounter::new("ACCT", u64::MAX);
        assert_eq!(counter.next_number(), None);
        assert_eq!(counter.value(), u64::MAX);
    }

    #[test]
    fn test_numeric_suffix() {
        assert_eq!(AccountNumber::parse("ACCT1005").unwrap().numeric_suffix(), Some(1005));
        assert_eq!(AccountNumber::parse("42").unwrap().numeric_suffix(), Some(42));
        assert_eq!(AccountNumber::parse("ACCT").unwrap().numeric_suffix(), None);
        assert_eq!(AccountNumber::parse("A1B").unwrap().numeric_suffix(), None);
    }

    #[test]
    fn test_parse_rejects_blank_and_spaces() {
        assert_eq!(AccountNumber::parse("  "), Err(AccountNumberError::Empty));
        assert!(matches!(
            AccountNumber::parse("ACCT 1001"),
            Err(AccountNumberError::Whitespace(_))
        ));
        assert_eq!(AccountNumber::parse(" ACCT1001 ").unwrap().as_str(), "ACCT1001");
    }
}
