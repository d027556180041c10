use std::collections::BTreeMap;

use tally_core::{AccountId, DomainError, DomainResult, Money};

use crate::account::Account;

/// Command against the book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerCommand {
    OpenAccount { account: AccountId },
    Deposit { account: AccountId, amount: Money },
    Withdraw { account: AccountId, amount: Money },
}

/// Outcome of an accepted command, ready to be applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerChange {
    AccountOpened { account: AccountId },
    BalanceUpdated { account: AccountId, balance: Money },
}

impl LedgerChange {
    pub fn account(&self) -> &AccountId {
        match self {
            LedgerChange::AccountOpened { account } => account,
            LedgerChange::BalanceUpdated { account, .. } => account,
        }
    }

    /// Balance of the affected account once applied.
    pub fn balance(&self) -> Money {
        match self {
            LedgerChange::AccountOpened { .. } => Money::ZERO,
            LedgerChange::BalanceUpdated { balance, .. } => *balance,
        }
    }
}

/// In-memory mapping of account identifiers to accounts.
///
/// Decisions (`handle`) are separate from state transitions (`apply`) so a
/// caller can make a change durable before committing it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountBook {
    accounts: BTreeMap<AccountId, Account>,
}

impl AccountBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn contains(&self, id: &AccountId) -> bool {
        self.accounts.contains_key(id)
    }

    pub fn get(&self, id: &AccountId) -> Option<&Account> {
        self.accounts.get(id)
    }

    pub fn balance(&self, id: &AccountId) -> DomainResult<Money> {
        self.get(id)
            .map(|a| a.balance)
            .ok_or_else(|| DomainError::not_found(id))
    }

    /// Accounts in identifier order.
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    /// Insert an account as-is, replacing any previous entry with the same id.
    ///
    /// Used when hydrating from a store; bypasses command validation.
    pub fn restore(&mut self, account: Account) {
        self.accounts.insert(account.id.clone(), account);
    }

    pub fn handle(&self, command: &LedgerCommand) -> DomainResult<LedgerChange> {
        match command {
            LedgerCommand::OpenAccount { account } => self.handle_open(account),
            LedgerCommand::Deposit { account, amount } => self.handle_deposit(account, *amount),
            LedgerCommand::Withdraw { account, amount } => self.handle_withdraw(account, *amount),
        }
    }

    pub fn apply(&mut self, change: &LedgerChange) {
        match change {
            LedgerChange::AccountOpened { account } => {
                self.accounts
                    .insert(account.clone(), Account::open(account.clone()));
            }
            LedgerChange::BalanceUpdated { account, balance } => {
                self.accounts
                    .entry(account.clone())
                    .or_insert_with(|| Account::open(account.clone()))
                    .balance = *balance;
            }
        }
    }

    fn handle_open(&self, account: &AccountId) -> DomainResult<LedgerChange> {
        if self.contains(account) {
            return Err(DomainError::AlreadyExists(account.clone()));
        }
        Ok(LedgerChange::AccountOpened {
            account: account.clone(),
        })
    }

    fn handle_deposit(&self, account: &AccountId, amount: Money) -> DomainResult<LedgerChange> {
        let current = self.balance(account)?;
        ensure_positive(amount)?;
        let balance = current.checked_add(amount).ok_or_else(|| {
            DomainError::invalid_amount(format!("depositing {amount} into {account} overflows"))
        })?;
        Ok(LedgerChange::BalanceUpdated {
            account: account.clone(),
            balance,
        })
    }

    fn handle_withdraw(&self, account: &AccountId, amount: Money) -> DomainResult<LedgerChange> {
        let current = self.balance(account)?;
        ensure_positive(amount)?;
        if current < amount {
            return Err(DomainError::InsufficientFunds {
                account: account.clone(),
                balance: current,
                requested: amount,
            });
        }
        // current >= amount > 0, cannot underflow
        let balance = current
            .checked_sub(amount)
            .ok_or_else(|| DomainError::invalid_amount("withdrawal underflow"))?;
        Ok(LedgerChange::BalanceUpdated {
            account: account.clone(),
            balance,
        })
    }
}

impl FromIterator<Account> for AccountBook {
    fn from_iter<I: IntoIterator<Item = Account>>(iter: I) -> Self {
        let mut book = AccountBook::new();
        for account in iter {
            book.restore(account);
        }
        book
    }
}

fn ensure_positive(amount: Money) -> DomainResult<()> {
    if !amount.is_positive() {
        return Err(DomainError::invalid_amount(format!(
            "amount must be positive, got {amount}"
        )));
    }
    Ok(())
}
