//! Account CLI commands
//!
//! One subcommand per ledger operation. Credentials come from `--pin` or
//! the `BANKBOOK_PIN` environment variable.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::account::{
    format_account_details, format_account_list, format_balance, format_history,
};
use crate::error::{BankbookError, BankbookResult};
use crate::models::{AccountNumber, AccountType, HolderDetails, Money};
use crate::services::AccountService;
use crate::storage::Storage;

/// Environment variable read when `--pin` is not given
pub const PIN_ENV: &str = "BANKBOOK_PIN";

/// Account subcommands
#[derive(Subcommand)]
pub enum AccountCommands {
    /// Open a new account
    Open {
        /// Account holder's full name
        #[arg(long)]
        name: String,
        /// Postal address
        #[arg(long)]
        address: String,
        /// Phone number (digits only)
        #[arg(long)]
        phone: String,
        /// Email address
        #[arg(long)]
        email: String,
        /// Account type (savings, current)
        #[arg(short = 't', long = "type", default_value = "savings")]
        account_type: String,
        /// Initial deposit (e.g., "1000.00" or "1000")
        #[arg(short, long)]
        deposit: String,
        /// Withdrawal PIN
        #[arg(long, env = PIN_ENV, hide_env_values = true)]
        pin: String,
    },
    /// Deposit into an account
    Deposit {
        /// Account number
        account: String,
        /// Amount to deposit
        amount: String,
    },
    /// Withdraw from an account
    Withdraw {
        /// Account number
        account: String,
        /// Amount to withdraw
        amount: String,
        /// Withdrawal PIN
        #[arg(long, env = PIN_ENV, hide_env_values = true)]
        pin: String,
    },
    /// Show an account's balance
    Balance {
        /// Account number
        account: String,
    },
    /// Show account details
    Show {
        /// Account number
        account: String,
    },
    /// Show an account's transaction history
    History {
        /// Account number
        account: String,
    },
    /// List all accounts
    List,
    /// Remote access: authenticate, show the balance, optionally withdraw
    Remote {
        /// Account number
        account: String,
        /// Amount to withdraw after authenticating
        #[arg(short, long)]
        amount: Option<String>,
        /// Withdrawal PIN
        #[arg(long, env = PIN_ENV, hide_env_values = true)]
        pin: String,
    },
}

/// Handle an account command
pub fn handle_account_command(
    storage: &Storage,
    settings: &Settings,
    cmd: AccountCommands,
) -> BankbookResult<()> {
    let service = AccountService::new(storage, settings);
    let currency = settings.currency.as_str();

    match cmd {
        AccountCommands::Open {
            name,
            address,
            phone,
            email,
            account_type,
            deposit,
            pin,
        } => {
            let account_type = AccountType::parse(&account_type).ok_or_else(|| {
                BankbookError::Validation(format!(
                    "Invalid account type: '{}'. Valid types: savings, current",
                    account_type
                ))
            })?;
            let deposit = parse_amount(&deposit)?;

            let holder = HolderDetails {
                name,
                address,
                phone,
                email,
            };
            let account = service.open(holder, deposit, account_type, &pin)?;

            println!("Account created successfully!");
            println!("  Account number: {}", account.number());
            println!("  Holder:         {}", account.holder_name());
            println!("  Type:           {}", account.account_type());
            println!(
                "  Balance:        {}",
                account.balance().format_with_currency(currency)
            );
        }

        AccountCommands::Deposit { account, amount } => {
            let number = parse_account_number(&account)?;
            let amount = parse_amount(&amount)?;
            let balance = service.deposit(&number, amount)?;
            println!(
                "Deposit successful. New balance: {}",
                balance.format_with_currency(currency)
            );
        }

        AccountCommands::Withdraw {
            account,
            amount,
            pin,
        } => {
            let number = parse_account_number(&account)?;
            let amount = parse_amount(&amount)?;
            let balance = service.withdraw(&number, amount, &pin)?;
            println!(
                "Withdrawal successful. New balance: {}",
                balance.format_with_currency(currency)
            );
        }

        AccountCommands::Balance { account } => {
            let found = service.get(&parse_account_number(&account)?)?;
            print!("{}", format_balance(&found, currency));
        }

        AccountCommands::Show { account } => {
            let found = service.get(&parse_account_number(&account)?)?;
            print!("{}", format_account_details(&found, currency));
        }

        AccountCommands::History { account } => {
            let found = service.get(&parse_account_number(&account)?)?;
            print!("{}", format_history(&found));
        }

        AccountCommands::List => {
            let accounts = service.list_all()?;
            print!("{}", format_account_list(&accounts, currency));
        }

        AccountCommands::Remote {
            account,
            amount,
            pin,
        } => {
            let number = parse_account_number(&account)?;
            let found = service.remote_access(&number, &pin)?;
            println!("Authentication successful!");
            print!("{}", format_balance(&found, currency));

            if let Some(amount) = amount {
                let amount = parse_amount(&amount)?;
                let balance = service.remote_withdraw(&number, &pin, amount)?;
                println!(
                    "Remote withdrawal successful. New balance: {}",
                    balance.format_with_currency(currency)
                );
            }
        }
    }

    Ok(())
}

fn parse_account_number(input: &str) -> BankbookResult<AccountNumber> {
    AccountNumber::parse(input)
        .map_err(|e| BankbookError::Validation(format!("Invalid account number: {}", e)))
}

fn parse_amount(input: &str) -> BankbookResult<Money> {
    Money::parse(input).map_err(|e| {
        BankbookError::Validation(format!(
            "Invalid amount: '{}'. Use format like '1000.00' or '1000'. Error: {}",
            input, e
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("150.50").unwrap(), Money::from_cents(15050));
        assert!(parse_amount("ten").unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_account_number() {
        assert_eq!(parse_account_number("ACCT1001").unwrap().as_str(), "ACCT1001");
        assert!(parse_account_number("  ").unwrap_err().is_validation());
    }
}
