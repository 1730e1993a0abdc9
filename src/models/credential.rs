//! Withdrawal credentials
//!
//! A credential is a short numeric PIN fixed at account opening. It is kept
//! as plaintext because the accounts file stores it that way; the buffer is
//! wiped when dropped and never shown by `Debug`.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Default number of digits in a credential
pub const DEFAULT_CREDENTIAL_LENGTH: usize = 4;

/// A numeric PIN that authorizes withdrawals
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Credential {
    inner: String,
}

impl Credential {
    /// Validate a newly chosen credential: exactly `length` ASCII digits
    pub fn new(pin: &str, length: usize) -> Result<Self, CredentialError> {
        if pin.chars().count() != length {
            return Err(CredentialError::WrongLength {
                expected: length,
                actual: pin.chars().count(),
            });
        }
        if !pin.chars().all(|c| c.is_ascii_digit()) {
            return Err(CredentialError::NotNumeric);
        }
        Ok(Self {
            inner: pin.to_string(),
        })
    }

    /// Wrap a credential read back from storage without revalidating it
    pub fn from_stored(pin: impl Into<String>) -> Self {
        Self { inner: pin.into() }
    }

    /// Check an offered PIN against this credential
    pub fn matches(&self, offered: &str) -> bool {
        self.inner == offered
    }

    /// The raw PIN, for persistence only
    pub fn expose(&self) -> &str {
        &self.inner
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Credential([REDACTED])")
    }
}

/// Why a proposed credential was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialError {
    WrongLength { expected: usize, actual: usize },
    NotNumeric,
}

impl fmt::Display for CredentialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { expected, actual } => write!(
                f,
                "Password must be {} digits (got {})",
                expected, actual
            ),
            Self::NotNumeric => write!(f, "Password must contain only digits"),
        }
    }
}

impl std::error::Error for CredentialError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_credential() {
        let credential = Credential::new("0420", DEFAULT_CREDENTIAL_LENGTH).unwrap();
        assert!(credential.matches("0420"));
        assert!(!credential.matches("420"));
        assert!(!credential.matches("0421"));
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert_eq!(
            Credential::new("123", 4),
            Err(CredentialError::WrongLength {
                expected: 4,
                actual: 3
            })
        );
        assert!(Credential::new("12345", 4).is_err());
        assert!(Credential::new("123456", 6).is_ok());
    }

    #[test]
    fn test_rejects_non_digits() {
        assert_eq!(Credential::new("12a4", 4), Err(CredentialError::NotNumeric));
        assert_eq!(Credential::new("١٢٣٤", 4), Err(CredentialError::NotNumeric));
    }

    #[test]
    fn test_stored_credential_is_not_revalidated() {
        let credential = Credential::from_stored("abc");
        assert!(credential.matches("abc"));
        assert_eq!(credential.expose(), "abc");
    }

    #[test]
    fn test_debug_redacts() {
        let credential = Credential::new("9999", 4).unwrap();
        assert!(!format!("{:?}", credential).contains("9999"));
    }
}
