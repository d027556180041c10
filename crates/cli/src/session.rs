use std::io::{self, BufRead, Write};

use tally_core::{AccountId, DomainError, Money};
use tally_infra::{BalanceStore, Ledger, LedgerError};

const MENU: &str = "\
Choose an option:
1 - Create account
2 - Deposit
3 - Withdraw
4 - Check balance
5 - Exit";

/// Answer to an account prompt.
enum AccountReply {
    Id(AccountId),
    /// Already reported to the user.
    Rejected,
    /// Input ended.
    Closed,
}

/// One interactive run: prompts on `output`, answers from `input`.
///
/// Ends on option 5 or when `input` is exhausted. Ledger failures are
/// reported and the loop carries on; only terminal I/O errors stop it.
pub struct Session<'l, S, R, W> {
    ledger: &'l mut Ledger<S>,
    input: R,
    output: W,
}

impl<'l, S, R, W> Session<'l, S, R, W>
where
    S: BalanceStore,
    R: BufRead,
    W: Write,
{
    pub fn new(ledger: &'l mut Ledger<S>, input: R, output: W) -> Self {
        Self {
            ledger,
            input,
            output,
        }
    }

    pub fn run(mut self) -> io::Result<()> {
        writeln!(self.output, "Welcome to tally!")?;
        writeln!(self.output, "{MENU}")?;

        loop {
            let Some(choice) = self.prompt("Enter option: ")? else {
                break;
            };
            let keep_going = match choice.as_str() {
                "1" => self.create_account()?,
                "2" => self.deposit()?,
                "3" => self.withdraw()?,
                "4" => self.check_balance()?,
                "5" => false,
                _ => {
                    writeln!(self.output, "Invalid option.")?;
                    true
                }
            };
            if !keep_going {
                break;
            }
        }

        writeln!(self.output, "Leaving tally...")?;
        self.output.flush()
    }

    fn create_account(&mut self) -> io::Result<bool> {
        let id = match self.prompt_account()? {
            AccountReply::Id(id) => id,
            AccountReply::Rejected => return Ok(true),
            AccountReply::Closed => return Ok(false),
        };
        match self.ledger.create_account(&id) {
            Ok(()) => writeln!(self.output, "Account created.")?,
            Err(err) => self.report(&err)?,
        }
        Ok(true)
    }

    fn deposit(&mut self) -> io::Result<bool> {
        let id = match self.prompt_account()? {
            AccountReply::Id(id) => id,
            AccountReply::Rejected => return Ok(true),
            AccountReply::Closed => return Ok(false),
        };
        let Some(amount) = self.prompt_amount("Deposit amount: ")? else {
            return Ok(false);
        };
        match self.ledger.deposit(&id, amount) {
            Ok(balance) => writeln!(
                self.output,
                "Deposited {amount}. New balance: {balance}."
            )?,
            Err(err) => self.report(&err)?,
        }
        Ok(true)
    }

    fn withdraw(&mut self) -> io::Result<bool> {
        let id = match self.prompt_account()? {
            AccountReply::Id(id) => id,
            AccountReply::Rejected => return Ok(true),
            AccountReply::Closed => return Ok(false),
        };
        let Some(amount) = self.prompt_amount("Withdrawal amount: ")? else {
            return Ok(false);
        };
        match self.ledger.withdraw(&id, amount) {
            Ok(balance) => writeln!(
                self.output,
                "Withdrew {amount}. New balance: {balance}."
            )?,
            Err(err) => self.report(&err)?,
        }
        Ok(true)
    }

    fn check_balance(&mut self) -> io::Result<bool> {
        let id = match self.prompt_account()? {
            AccountReply::Id(id) => id,
            AccountReply::Rejected => return Ok(true),
            AccountReply::Closed => return Ok(false),
        };
        match self.ledger.balance(&id) {
            Ok(balance) => writeln!(self.output, "Balance of account {id}: {balance}")?,
            Err(err) => self.report(&err)?,
        }
        Ok(true)
    }

    fn prompt_account(&mut self) -> io::Result<AccountReply> {
        let Some(raw) = self.prompt("Account number: ")? else {
            return Ok(AccountReply::Closed);
        };
        match AccountId::parse(raw) {
            Ok(id) => Ok(AccountReply::Id(id)),
            Err(err) => {
                self.report(&LedgerError::Domain(err))?;
                Ok(AccountReply::Rejected)
            }
        }
    }

    /// Unparseable text counts as zero, which the ledger then rejects.
    fn prompt_amount(&mut self, label: &str) -> io::Result<Option<Money>> {
        let Some(raw) = self.prompt(label)? else {
            return Ok(None);
        };
        let amount = raw.parse::<Money>().unwrap_or_else(|err| {
            tracing::debug!(input = %raw, error = %err, "amount not understood, using zero");
            Money::ZERO
        });
        Ok(Some(amount))
    }

    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn report(&mut self, err: &LedgerError) -> io::Result<()> {
        writeln!(self.output, "{}", describe_error(err))
    }
}

/// One-line, user-facing rendering of a ledger failure.
pub fn describe_error(err: &LedgerError) -> String {
    match err {
        LedgerError::Domain(DomainError::AlreadyExists(_)) => "Account already exists.".to_string(),
        LedgerError::Domain(DomainError::NotFound(_)) => "Account not found.".to_string(),
        LedgerError::Domain(DomainError::InsufficientFunds { balance, .. }) => {
            format!("Insufficient funds (balance {balance}).")
        }
        LedgerError::Domain(DomainError::InvalidAmount(msg)) => format!("Invalid amount: {msg}."),
        LedgerError::Domain(DomainError::InvalidId(msg)) => {
            format!("Invalid account number: {msg}.")
        }
        LedgerError::Storage(err) => {
            format!("Store error ({err}); nothing was changed.")
        }
    }
}
