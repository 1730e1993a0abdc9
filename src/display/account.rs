//! Account display formatting
//!
//! Formats accounts for terminal output in table and detail views.

use crate::models::{Account, Money};

/// Format all accounts as a table
pub fn format_account_list(accounts: &[Account], currency: &str) -> String {
    if accounts.is_empty() {
        return "No accounts found.\n".to_string();
    }

    let number_width = accounts
        .iter()
        .map(|a| a.number().as_str().len())
        .max()
        .unwrap_or(6)
        .max(6);

    let name_width = accounts
        .iter()
        .map(|a| a.holder_name().chars().count())
        .max()
        .unwrap_or(6)
        .max(6);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<number_width$}  {:<name_width$}  {:<7}  {:>16}\n",
        "Number", "Holder", "Type", "Balance",
    ));
    output.push_str(&format!(
        "{:-<number_width$}  {:-<name_width$}  {:-<7}  {:->16}\n",
        "", "", "", "",
    ));

    for account in accounts {
        output.push_str(&format!(
            "{:<number_width$}  {:<name_width$}  {:<7}  {:>16}\n",
            account.number().as_str(),
            account.holder_name(),
            account.account_type().as_str(),
            account.balance().format_with_currency(currency),
        ));
    }

    let total = accounts
        .iter()
        .try_fold(Money::zero(), |sum, a| sum.checked_add(a.balance()))
        .map(|total| total.format_with_currency(currency))
        .unwrap_or_else(|| "overflow".to_string());
    output.push_str(&format!(
        "{:-<number_width$}  {:-<name_width$}  {:-<7}  {:->16}\n",
        "", "", "", "",
    ));
    output.push_str(&format!(
        "{:<number_width$}  {:<name_width$}  {:<7}  {:>16}\n",
        "TOTAL",
        format!("{} accounts", accounts.len()),
        "",
        total,
    ));

    output
}

/// Format a single account's details
pub fn format_account_details(account: &Account, currency: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Account: {}\n", account.number()));
    output.push_str(&format!("  Holder:   {}\n", account.holder_name()));
    output.push_str(&format!("  Address:  {}\n", account.address()));
    output.push_str(&format!("  Phone:    {}\n", account.phone()));
    output.push_str(&format!("  Email:    {}\n", account.email()));
    output.push_str(&format!("  Type:     {}\n", account.account_type()));
    output.push_str(&format!(
        "  Balance:  {}\n",
        account.balance().format_with_currency(currency)
    ));

    output
}

/// Format the balance view
pub fn format_balance(account: &Account, currency: &str) -> String {
    format!(
        "Account holder: {}\nAccount type: {}\nCurrent balance: {}\n",
        account.holder_name(),
        account.account_type(),
        account.balance().format_with_currency(currency)
    )
}

/// Format an account's narrations, oldest first
pub fn format_history(account: &Account) -> String {
    if account.narrations().is_empty() {
        return format!("No transactions recorded for {}.\n", account.number());
    }

    let mut output = format!("Transaction history for {}:\n", account.number());
    for narration in account.narrations() {
        output.push_str(&format!("  {}\n", narration));
    }
    output
}
