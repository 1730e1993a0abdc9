//! Account service
//!
//! Opens accounts, moves money in and out of them, and exposes the
//! read-only views. Every successful mutation rewrites the accounts file
//! and appends a line to the transaction journal.

use tracing::{info, warn};

use crate::config::settings::Settings;
use crate::error::{BankbookError, BankbookResult};
use crate::models::{Account, AccountNumber, AccountType, Credential, HolderDetails, Money};
use crate::storage::Storage;

/// Service for account management
pub struct AccountService<'a> {
    storage: &'a Storage,
    settings: &'a Settings,
}

impl<'a> AccountService<'a> {
    /// Create a new account service
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self { storage, settings }
    }

    /// Open a new account and mint its number
    pub fn open(
        &self,
        holder: HolderDetails,
        initial_deposit: Money,
        account_type: AccountType,
        pin: &str,
    ) -> BankbookResult<Account> {
        holder
            .validate()
            .map_err(|e| BankbookError::Validation(e.to_string()))?;

        let credential = Credential::new(pin, self.settings.credential_length)
            .map_err(|e| BankbookError::Validation(e.to_string()))?;

        if initial_deposit.is_negative() {
            return Err(BankbookError::Validation(
                "Initial deposit cannot be negative".into(),
            ));
        }

        let rules = self.settings.balance_rules();
        if self.settings.enforce_opening_minimum {
            let required = rules.minimum_for(account_type);
            if initial_deposit < required {
                return Err(BankbookError::BelowMinimumBalance {
                    account_type,
                    required,
                });
            }
        }

        let number = self.storage.next_account_number()?;
        let account = Account::open(
            number,
            holder,
            initial_deposit,
            account_type,
            credential,
            &rules,
        );

        self.storage.accounts.insert(account.clone())?;
        self.storage.save_all()?;

        self.storage.log_event(format!(
            "Account created: {} for {}",
            account.number(),
            account.holder_name()
        ));
        info!(account = %account.number(), account_type = %account_type, "opened account");

        Ok(account)
    }

    /// Deposit into an account; returns the new balance
    pub fn deposit(&self, number: &AccountNumber, amount: Money) -> BankbookResult<Money> {
        let rules = self.settings.balance_rules();
        let balance = self
            .storage
            .accounts
            .update(number, |account| account.deposit(amount, &rules))?;
        self.storage.accounts.save()?;

        self.storage
            .log_event(format!("Deposit to {}: {}", number, amount.round_to_cents()));
        info!(account = %number, %amount, "deposit");

        Ok(balance)
    }

    /// Withdraw from an account; returns the new balance
    pub fn withdraw(
        &self,
        number: &AccountNumber,
        amount: Money,
        pin: &str,
    ) -> BankbookResult<Money> {
        let balance = self.apply_withdrawal(number, amount, pin)?;

        self.storage.log_event(format!(
            "Withdrawal from {}: {}",
            number,
            amount.round_to_cents()
        ));
        info!(account = %number, %amount, "withdrawal");

        Ok(balance)
    }

    /// Authenticate for remote access and return the account
    ///
    /// A mismatched credential is recorded in the journal as a failed
    /// access attempt.
    pub fn remote_access(&self, number: &AccountNumber, pin: &str) -> BankbookResult<Account> {
        let account = self.get(number)?;
        if !account.verify_credential(pin) {
            self.storage
                .log_event(format!("Failed remote access attempt for account: {}", number));
            warn!(account = %number, "failed remote access attempt");
            return Err(BankbookError::Authorization(format!(
                "access denied for account {}",
                number
            )));
        }
        Ok(account)
    }

    /// Withdraw through remote access
    pub fn remote_withdraw(
        &self,
        number: &AccountNumber,
        pin: &str,
        amount: Money,
    ) -> BankbookResult<Money> {
        self.remote_access(number, pin)?;

        let balance = self.apply_withdrawal(number, amount, pin)?;

        self.storage.log_event(format!(
            "Remote withdrawal from {}: {}",
            number,
            amount.round_to_cents()
        ));
        info!(account = %number, %amount, "remote withdrawal");

        Ok(balance)
    }

    /// Look up an account by number
    pub fn find(&self, number: &AccountNumber) -> BankbookResult<Option<Account>> {
        self.storage.accounts.get(number)
    }

    /// Get an account by number, failing if it doesn't exist
    pub fn get(&self, number: &AccountNumber) -> BankbookResult<Account> {
        self.find(number)?
            .ok_or_else(|| BankbookError::account_not_found(number.as_str()))
    }

    /// Current balance of an account
    pub fn balance(&self, number: &AccountNumber) -> BankbookResult<Money> {
        Ok(self.get(number)?.balance())
    }

    /// Narrations of an account, oldest first
    pub fn history(&self, number: &AccountNumber) -> BankbookResult<Vec<String>> {
        Ok(self.get(number)?.narrations().to_vec())
    }

    /// Every account, in the order they were opened
    pub fn list_all(&self) -> BankbookResult<Vec<Account>> {
        self.storage.accounts.get_all()
    }

    fn apply_withdrawal(
        &self,
        number: &AccountNumber,
        amount: Money,
        pin: &str,
    ) -> BankbookResult<Money> {
        let rules = self.settings.balance_rules();
        let result = self
            .storage
            .accounts
            .update(number, |account| account.withdraw(amount, pin, &rules));

        let balance = match result {
            Ok(balance) => balance,
            Err(e) => {
                if e.is_authorization() {
                    warn!(account = %number, "withdrawal refused: credential mismatch");
                }
                return Err(e);
            }
        };
        self.storage.accounts.save()?;

        Ok(balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::BankbookPaths;
    use crate::config::settings::CounterMode;
    use rust_decimal_macros::dec;
    use tempfile::TempDir;

    fn create_test_storage(settings: &Settings) -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BankbookPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths, settings).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn holder(name: &str) -> HolderDetails {
        HolderDetails {
            name: name.into(),
            address: "12 Lake Road, Dhaka".into(),
            phone: "01711000000".into(),
            email: "holder@example.com".into(),
        }
    }

    fn journal(storage: &Storage) -> String {
        std::fs::read_to_string(storage.journal().path()).unwrap_or_default()
    }

    #[test]
    fn test_open_account() {
        let settings = Settings::default();
        let (_temp_dir, storage) = create_test_storage(&settings);
        let service = AccountService::new(&storage, &settings);

        let account = service
            .open(
                holder("Rahim Uddin"),
                Money::from_major(1000),
                AccountType::Savings,
                "1234",
            )
            .unwrap();

        assert_eq!(account.number().as_str(), "ACCT1001");
        assert_eq!(account.balance(), Money::from_major(1000));
        assert_eq!(account.narrations().len(), 1);
        assert!(account.narrations()[0]
            .ends_with(" - Account opened with initial deposit: 1000.00 BDT"));

        assert!(storage.paths().accounts_file().exists());
        let counter = std::fs::read_to_string(storage.paths().counter_file()).unwrap();
        assert_eq!(counter, "1001");
        assert!(journal(&storage).contains(" - Account created: ACCT1001 for Rahim Uddin\n"));
    }

    #[test]
    fn test_numbers_strictly_increase() {
        let settings = Settings::default();
        let (_temp_dir, storage) = create_test_storage(&settings);
        let service = AccountService::new(&storage, &settings);

        let mut previous = 0;
        for name in ["A One", "B Two", "C Three"] {
            let account = service
                .open(holder(name), Money::from_major(600), AccountType::Current, "1111")
                .unwrap();
            let suffix = account.number().numeric_suffix().unwrap();
            assert!(suffix > previous);
            previous = suffix;
        }
        assert_eq!(previous, 1003);
    }

    #[test]
    fn test_open_rejects_bad_input() {
        let settings = Settings::default();
        let (_temp_dir, storage) = create_test_storage(&settings);
        let service = AccountService::new(&storage, &settings);

        let mut bad_phone = holder("Rahim Uddin");
        bad_phone.phone = "017-11".into();
        let err = service
            .open(bad_phone, Money::from_major(200), AccountType::Savings, "1234")
            .unwrap_err();
        assert!(err.is_validation());

        let err = service
            .open(holder("Rahim Uddin"), Money::from_major(200), AccountType::Savings, "12a4")
            .unwrap_err();
        assert!(err.is_validation());

        let err = service
            .open(holder("Rahim Uddin"), Money::from_major(200), AccountType::Savings, "123")
            .unwrap_err();
        assert!(err.is_validation());

        assert!(storage.accounts.get_all().unwrap().is_empty());
        assert_eq!(storage.counter_value().unwrap(), 1000);
    }

    #[test]
    fn test_open_enforces_minimum_when_configured() {
        let settings = Settings::default();
        let (_temp_dir, storage) = create_test_storage(&settings);
        let service = AccountService::new(&storage, &settings);

        let err = service
            .open(holder("Karim"), Money::from_major(400), AccountType::Current, "1234")
            .unwrap_err();
        assert!(matches!(
            err,
            BankbookError::BelowMinimumBalance {
                account_type: AccountType::Current,
                ..
            }
        ));

        let relaxed = Settings {
            enforce_opening_minimum: false,
            ..Settings::default()
        };
        let service = AccountService::new(&storage, &relaxed);
        let account = service
            .open(holder("Karim"), Money::zero(), AccountType::Current, "1234")
            .unwrap();
        assert_eq!(account.balance(), Money::zero());
        assert!(account.narrations().is_empty());
    }

    #[test]
    fn test_savings_scenario() {
        let settings = Settings::default();
        let (_temp_dir, storage) = create_test_storage(&settings);
        let service = AccountService::new(&storage, &settings);

        let account = service
            .open(holder("Rahim Uddin"), Money::from_major(100), AccountType::Savings, "1234")
            .unwrap();
        let number = account.number().clone();

        let err = service
            .withdraw(&number, Money::from_major(50), "1234")
            .unwrap_err();
        assert!(matches!(err, BankbookError::BelowMinimumBalance { .. }));

        let err = service.withdraw(&number, Money::zero(), "1234").unwrap_err();
        assert!(matches!(err, BankbookError::InvalidAmount(_)));

        let balance = service.deposit(&number, Money::from_major(200)).unwrap();
        assert_eq!(balance, Money::from_decimal(dec!(300.00)));

        let balance = service
            .withdraw(&number, Money::from_major(150), "1234")
            .unwrap();
        assert_eq!(balance, Money::from_decimal(dec!(150.00)));

        let history = service.history(&number).unwrap();
        assert_eq!(history.len(), 3);
        assert!(history[1].ends_with(" - Deposit: +200.00 BDT"));
        assert!(history[2].ends_with(" - Withdrawal: -150.00 BDT"));

        let log = journal(&storage);
        assert!(log.contains(" - Deposit to ACCT1001: 200.00\n"));
        assert!(log.contains(" - Withdrawal from ACCT1001: 150.00\n"));
    }

    #[test]
    fn test_wrong_pin_never_mutates() {
        let settings = Settings::default();
        let (_temp_dir, storage) = create_test_storage(&settings);
        let service = AccountService::new(&storage, &settings);

        let account = service
            .open(holder("Rahim Uddin"), Money::from_major(1000), AccountType::Savings, "1234")
            .unwrap();
        let number = account.number().clone();

        for amount in [Money::from_major(10), Money::zero(), Money::from_major(5000)] {
            let err = service.withdraw(&number, amount, "9999").unwrap_err();
            assert!(err.is_authorization());
        }

        let after = service.get(&number).unwrap();
        assert_eq!(after.balance(), Money::from_major(1000));
        assert_eq!(after.narrations(), account.narrations());
    }

    #[test]
    fn test_deposit_rejects_non_positive() {
        let settings = Settings::default();
        let (_temp_dir, storage) = create_test_storage(&settings);
        let service = AccountService::new(&storage, &settings);

        let account = service
            .open(holder("Rahim Uddin"), Money::from_major(100), AccountType::Savings, "1234")
            .unwrap();

        let err = service
            .deposit(account.number(), Money::from_major(-5))
            .unwrap_err();
        assert!(err.is_policy_violation());
        assert_eq!(service.balance(account.number()).unwrap(), Money::from_major(100));
        assert_eq!(service.history(account.number()).unwrap().len(), 1);
    }

    #[test]
    fn test_unknown_account() {
        let settings = Settings::default();
        let (_temp_dir, storage) = create_test_storage(&settings);
        let service = AccountService::new(&storage, &settings);
        let missing = AccountNumber::parse("ACCT4242").unwrap();

        assert!(service.balance(&missing).unwrap_err().is_not_found());
        assert!(service
            .deposit(&missing, Money::from_major(10))
            .unwrap_err()
            .is_not_found());
        assert!(service
            .withdraw(&missing, Money::from_major(10), "1234")
            .unwrap_err()
            .is_not_found());
        assert!(service
            .remote_withdraw(&missing, "1234", Money::from_major(10))
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn test_remote_withdraw() {
        let settings = Settings::default();
        let (_temp_dir, storage) = create_test_storage(&settings);
        let service = AccountService::new(&storage, &settings);

        let account = service
            .open(holder("Rahim Uddin"), Money::from_major(1000), AccountType::Savings, "1234")
            .unwrap();
        let number = account.number().clone();

        let err = service
            .remote_withdraw(&number, "0000", Money::from_major(100))
            .unwrap_err();
        assert!(err.is_authorization());
        assert!(journal(&storage).contains(" - Failed remote access attempt for account: ACCT1001\n"));
        assert!(service.remote_access(&number, "1234").is_ok());

        let balance = service
            .remote_withdraw(&number, "1234", Money::from_major(100))
            .unwrap();
        assert_eq!(balance, Money::from_major(900));
        assert!(journal(&storage).contains(" - Remote withdrawal from ACCT1001: 100.00\n"));
    }

    #[test]
    fn test_state_survives_reload() {
        let settings = Settings::default();
        let temp_dir = TempDir::new().unwrap();
        let paths = BankbookPaths::with_base_dir(temp_dir.path().to_path_buf());

        {
            let mut storage = Storage::new(paths.clone(), &settings).unwrap();
            storage.load_all().unwrap();
            let service = AccountService::new(&storage, &settings);
            let account = service
                .open(holder("Rahim Uddin"), Money::from_major(100), AccountType::Savings, "1234")
                .unwrap();
            service
                .deposit(account.number(), Money::from_decimal(dec!(10.005)))
                .unwrap();
        }

        let mut storage = Storage::new(paths, &settings).unwrap();
        storage.load_all().unwrap();
        let service = AccountService::new(&storage, &settings);
        let number = AccountNumber::parse("ACCT1001").unwrap();

        assert_eq!(
            service.balance(&number).unwrap(),
            Money::from_decimal(dec!(110.01))
        );
        assert_eq!(service.history(&number).unwrap().len(), 2);

        let next = service
            .open(holder("Karim"), Money::from_major(500), AccountType::Current, "4321")
            .unwrap();
        assert_eq!(next.number().as_str(), "ACCT1002");
    }

    #[test]
    fn test_derived_counter_mode() {
        let settings = Settings {
            counter_mode: CounterMode::Derived,
            ..Settings::default()
        };
        let (_temp_dir, storage) = create_test_storage(&settings);
        let service = AccountService::new(&storage, &settings);

        service
            .open(holder("Rahim Uddin"), Money::from_major(100), AccountType::Savings, "1234")
            .unwrap();
        assert!(!storage.paths().counter_file().exists());
    }

    #[test]
    fn test_list_all_in_opening_order() {
        let settings = Settings::default();
        let (_temp_dir, storage) = create_test_storage(&settings);
        let service = AccountService::new(&storage, &settings);

        assert!(service.list_all().unwrap().is_empty());
        service
            .open(holder("First"), Money::from_major(100), AccountType::Savings, "1234")
            .unwrap();
        service
            .open(holder("Second"), Money::from_major(500), AccountType::Current, "1234")
            .unwrap();

        let names: Vec<_> = service
            .list_all()
            .unwrap()
            .iter()
            .map(|a| a.holder_name().to_string())
            .collect();
        assert_eq!(names, vec!["First", "Second"]);
    }
}
