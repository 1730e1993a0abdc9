//! Account model
//!
//! An account holds the holder's contact details, a balance, its type, the
//! withdrawal credential and an append-only list of narrations. Balance and
//! narrations change only through [`Account::deposit`] and
//! [`Account::withdraw`].

use serde::{Deserialize, Serialize};
use std::fmt;

use super::account_number::AccountNumber;
use super::credential::Credential;
use super::money::Money;
use super::narration;
use crate::error::{BankbookError, BankbookResult};

/// Type of account; decides the minimum balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AccountType {
    /// Savings account
    #[default]
    Savings,
    /// Current account
    Current,
}

impl AccountType {
    /// The exact spelling used in the accounts file
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Savings => "Savings",
            Self::Current => "Current",
        }
    }

    /// Parse account type from string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "savings" => Some(Self::Savings),
            "current" => Some(Self::Current),
            _ => None,
        }
    }

    /// All account types, in menu order
    pub fn all() -> [Self; 2] {
        [Self::Savings, Self::Current]
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Minimum balances per account type and the currency label for narrations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceRules {
    pub savings_minimum: Money,
    pub current_minimum: Money,
    pub currency: String,
}

impl BalanceRules {
    /// The floor a withdrawal may not cross for this account type
    pub fn minimum_for(&self, account_type: AccountType) -> Money {
        match account_type {
            AccountType::Savings => self.savings_minimum,
            AccountType::Current => self.current_minimum,
        }
    }
}

impl Default for BalanceRules {
    fn default() -> Self {
        Self {
            savings_minimum: Money::from_major(100),
            current_minimum: Money::from_major(500),
            currency: "BDT".to_string(),
        }
    }
}

/// Identity and contact fields supplied when opening an account
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HolderDetails {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
}

impl HolderDetails {
    /// Validate the contact fields
    ///
    /// Name and address must be non-blank, the phone all digits and the
    /// email must contain both `@` and `.`. No field may span lines.
    pub fn validate(&self) -> Result<(), AccountValidationError> {
        let fields = [
            ("name", &self.name),
            ("address", &self.address),
            ("phone", &self.phone),
            ("email", &self.email),
        ];
        for (field, value) in fields {
            if value.contains('\n') || value.contains('\r') {
                return Err(AccountValidationError::MultiLine(field));
            }
        }

        if self.name.trim().is_empty() {
            return Err(AccountValidationError::EmptyName);
        }
        if self.address.trim().is_empty() {
            return Err(AccountValidationError::EmptyAddress);
        }
        if self.phone.is_empty() || !self.phone.chars().all(|c| c.is_ascii_digit()) {
            return Err(AccountValidationError::InvalidPhone(self.phone.clone()));
        }
        if !(self.email.contains('@') && self.email.contains('.')) {
            return Err(AccountValidationError::InvalidEmail(self.email.clone()));
        }

        Ok(())
    }
}

/// A bank account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    number: AccountNumber,
    holder_name: String,
    address: String,
    phone: String,
    email: String,
    balance: Money,
    account_type: AccountType,
    credential: Credential,
    narrations: Vec<String>,
}

impl Account {
    /// Open a new account with `initial_deposit` as its balance
    ///
    /// Does not apply the minimum balance; callers that want an opening
    /// floor check it first.
    pub fn open(
        number: AccountNumber,
        holder: HolderDetails,
        initial_deposit: Money,
        account_type: AccountType,
        credential: Credential,
        rules: &BalanceRules,
    ) -> Self {
        let mut account = Self {
            number,
            holder_name: holder.name,
            address: holder.address,
            phone: holder.phone,
            email: holder.email,
            balance: initial_deposit,
            account_type,
            credential,
            narrations: Vec::new(),
        };

        if initial_deposit.is_positive() {
            account.narrate(&format!(
                "Account opened with initial deposit: {}",
                initial_deposit.format_with_currency(&rules.currency)
            ));
        }

        account
    }

    /// Rebuild an account from persisted fields, as-is
    pub fn from_parts(
        number: AccountNumber,
        holder: HolderDetails,
        balance: Money,
        account_type: AccountType,
        credential: Credential,
        narrations: Vec<String>,
    ) -> Self {
        Self {
            number,
            holder_name: holder.name,
            address: holder.address,
            phone: holder.phone,
            email: holder.email,
            balance,
            account_type,
            credential,
            narrations,
        }
    }

    pub fn number(&self) -> &AccountNumber {
        &self.number
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn account_type(&self) -> AccountType {
        self.account_type
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    /// Narrations in the order they were recorded
    pub fn narrations(&self) -> &[String] {
        &self.narrations
    }

    /// Check an offered PIN against the stored credential
    pub fn verify_credential(&self, offered: &str) -> bool {
        self.credential.matches(offered)
    }

    /// Add `amount` to the balance; returns the new balance
    pub fn deposit(&mut self, amount: Money, rules: &BalanceRules) -> BankbookResult<Money> {
        if !amount.is_positive() {
            return Err(BankbookError::InvalidAmount(amount));
        }

        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(BankbookError::InvalidAmount(amount))?;
        self.narrate(&format!(
            "Deposit: +{}",
            amount.format_with_currency(&rules.currency)
        ));
        Ok(self.balance)
    }

    /// Take `amount` out of the balance; returns the new balance
    ///
    /// Checked in order: credential, positive amount, minimum balance for
    /// the account type, then available funds. Any failure leaves the
    /// account untouched.
    pub fn withdraw(
        &mut self,
        amount: Money,
        offered_credential: &str,
        rules: &BalanceRules,
    ) -> BankbookResult<Money> {
        if !self.verify_credential(offered_credential) {
            return Err(BankbookError::Authorization(format!(
                "invalid password for account {}",
                self.number
            )));
        }

        if !amount.is_positive() {
            return Err(BankbookError::InvalidAmount(amount));
        }

        let remaining = self
            .balance
            .checked_sub(amount)
            .ok_or(BankbookError::InvalidAmount(amount))?;

        let required = rules.minimum_for(self.account_type);
        if remaining < required {
            return Err(BankbookError::BelowMinimumBalance {
                account_type: self.account_type,
                required,
            });
        }

        // Only reachable with a negative minimum configured.
        if amount > self.balance {
            return Err(BankbookError::InsufficientFunds {
                needed: amount,
                available: self.balance,
            });
        }

        self.balance = remaining;
        self.narrate(&format!(
            "Withdrawal: -{}",
            amount.format_with_currency(&rules.currency)
        ));
        Ok(self.balance)
    }

    fn narrate(&mut self, description: &str) {
        self.narrations.push(narration::stamp(description));
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.number, self.holder_name, self.account_type)
    }
}

/// Validation errors for account holder details
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountValidationError {
    EmptyName,
    EmptyAddress,
    InvalidPhone(String),
    InvalidEmail(String),
    MultiLine(&'static str),
}

impl fmt::Display for AccountValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name cannot be empty"),
            Self::EmptyAddress => write!(f, "Address cannot be empty"),
            Self::InvalidPhone(p) => {
                write!(f, "Phone number must contain only digits: '{}'", p)
            }
            Self::InvalidEmail(e) => write!(f, "Invalid email format: '{}'", e),
            Self::MultiLine(field) => write!(f, "The {} must fit on a single line", field),
        }
    }
}

impl std::error::Error for AccountValidationError {}
