//! Line-oriented account record format
//!
//! Each account is written as one field per line, in this order:
//!
//! ```text
//! account number
//! holder name
//! address
//! phone
//! email
//! balance (two decimal places)
//! account type (Savings | Current)
//! credential
//! narration count
//! narration 1
//! ...
//! ```
//!
//! Records are concatenated with no separator, header or version.

use std::io::{self, Write};
use std::iter::{Enumerate, Peekable};
use std::str::Lines;

use crate::error::{BankbookError, BankbookResult};
use crate::models::{Account, AccountNumber, AccountType, Credential, HolderDetails, Money};

/// Write one account record
pub fn write_record<W: Write>(writer: &mut W, account: &Account) -> io::Result<()> {
    writeln!(writer, "{}", account.number())?;
    writeln!(writer, "{}", account.holder_name())?;
    writeln!(writer, "{}", account.address())?;
    writeln!(writer, "{}", account.phone())?;
    writeln!(writer, "{}", account.email())?;
    writeln!(writer, "{}", account.balance().round_to_cents())?;
    writeln!(writer, "{}", account.account_type().as_str())?;
    writeln!(writer, "{}", account.credential().expose())?;
    writeln!(writer, "{}", account.narrations().len())?;
    for narration in account.narrations() {
        writeln!(writer, "{}", narration)?;
    }
    Ok(())
}

/// Write every account record in order
pub fn write_records<'a, W, I>(writer: &mut W, accounts: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Account>,
{
    for account in accounts {
        write_record(writer, account)?;
    }
    Ok(())
}

/// Reads account records one at a time from file contents
pub struct RecordReader<'a> {
    lines: Peekable<Enumerate<Lines<'a>>>,
}

impl<'a> RecordReader<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().enumerate().peekable(),
        }
    }

    fn next_line(&mut self, field: &str) -> BankbookResult<(usize, &'a str)> {
        self.lines
            .next()
            .map(|(index, line)| (index + 1, line))
            .ok_or_else(|| {
                BankbookError::Storage(format!("record truncated: missing {}", field))
            })
    }

    fn skip_blank_lines(&mut self) {
        while matches!(self.lines.peek(), Some((_, line)) if line.trim().is_empty()) {
            self.lines.next();
        }
    }

    fn read_record(&mut self) -> BankbookResult<Account> {
        let (line_no, raw) = self.next_line("account number")?;
        let number = AccountNumber::parse(raw).map_err(|e| corrupt(line_no, e))?;

        let holder = HolderDetails {
            name: self.next_line("holder name")?.1.to_string(),
            address: self.next_line("address")?.1.to_string(),
            phone: self.next_line("phone")?.1.to_string(),
            email: self.next_line("email")?.1.to_string(),
        };

        let (line_no, raw) = self.next_line("balance")?;
        let balance = Money::parse(raw).map_err(|e| corrupt(line_no, e))?;

        let (line_no, raw) = self.next_line("account type")?;
        let account_type = AccountType::parse(raw)
            .ok_or_else(|| corrupt(line_no, format!("unknown account type '{}'", raw)))?;

        let credential = Credential::from_stored(self.next_line("credential")?.1);

        let (line_no, raw) = self.next_line("narration count")?;
        let count: usize = raw
            .trim()
            .parse()
            .map_err(|_| corrupt(line_no, format!("invalid narration count '{}'", raw)))?;

        let mut narrations = Vec::with_capacity(count);
        for _ in 0..count {
            narrations.push(self.next_line("narration")?.1.to_string());
        }

        Ok(Account::from_parts(
            number,
            holder,
            balance,
            account_type,
            credential,
            narrations,
        ))
    }
}

impl Iterator for RecordReader<'_> {
    type Item = BankbookResult<Account>;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_blank_lines();
        self.lines.peek()?;
        Some(self.read_record())
    }
}

/// Parse every record in `text`, in file order
pub fn read_records(text: &str) -> BankbookResult<Vec<Account>> {
    RecordReader::new(text).collect()
}

fn corrupt(line_no: usize, reason: impl std::fmt::Display) -> BankbookError {
    BankbookError::Storage(format!("line {}: {}", line_no, reason))
}
