//! The ledger service: validate, persist, then commit.
//!
//! ```text
//! call
//!   ↓
//! 1. AccountBook::handle (pure decision, produces a LedgerChange)
//!   ↓
//! 2. apply the change to a copy of the book and encode it
//!   ↓
//! 3. BalanceStore::save (full snapshot rewrite)
//!   ↓
//! 4. swap the copy in as the committed book
//! ```
//!
//! A failed save leaves the committed book untouched, so the store always
//! holds the last state a caller saw succeed.

use thiserror::Error;

use tally_accounting::{Account, AccountBook, LedgerChange, LedgerCommand};
use tally_core::{AccountId, DomainError, Money};

use crate::store::{codec, BalanceStore, StoreError};

pub type LedgerResult<T> = Result<T, LedgerError>;

#[derive(Debug, Error)]
pub enum LedgerError {
    /// Rejected by a domain rule; nothing was written.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Reading or writing the store failed; the operation was abandoned.
    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl LedgerError {
    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            LedgerError::Domain(err) => Some(err),
            LedgerError::Storage(_) => None,
        }
    }

    pub fn is_storage(&self) -> bool {
        matches!(self, LedgerError::Storage(_))
    }
}

/// Named accounts backed by a snapshot store.
///
/// Owned by the caller; there is no process-wide instance.
#[derive(Debug)]
pub struct Ledger<S> {
    book: AccountBook,
    store: S,
}

impl<S: BalanceStore> Ledger<S> {
    /// Hydrate from `store`. An empty or missing store is an empty ledger.
    pub fn open(store: S) -> LedgerResult<Self> {
        let book = match store.load()? {
            Some(contents) => codec::decode(&contents),
            None => {
                tracing::debug!("no existing store, starting empty");
                AccountBook::new()
            }
        };
        tracing::info!(accounts = book.len(), "ledger loaded");
        Ok(Self { book, store })
    }

    pub fn create_account(&mut self, id: &AccountId) -> LedgerResult<()> {
        self.execute(LedgerCommand::OpenAccount {
            account: id.clone(),
        })?;
        Ok(())
    }

    /// Returns the new balance.
    pub fn deposit(&mut self, id: &AccountId, amount: Money) -> LedgerResult<Money> {
        self.execute(LedgerCommand::Deposit {
            account: id.clone(),
            amount,
        })
    }

    /// Returns the new balance.
    pub fn withdraw(&mut self, id: &AccountId, amount: Money) -> LedgerResult<Money> {
        self.execute(LedgerCommand::Withdraw {
            account: id.clone(),
            amount,
        })
    }

    pub fn balance(&self, id: &AccountId) -> LedgerResult<Money> {
        let balance = self.book.balance(id)?;
        tracing::debug!(account = %id, %balance, "balance read");
        Ok(balance)
    }

    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.book.accounts()
    }

    pub fn len(&self) -> usize {
        self.book.len()
    }

    pub fn is_empty(&self) -> bool {
        self.book.is_empty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give the store back, e.g. to reopen it.
    pub fn into_store(self) -> S {
        self.store
    }

    fn execute(&mut self, command: LedgerCommand) -> LedgerResult<Money> {
        let change = self.book.handle(&command).inspect_err(|err| {
            tracing::debug!(error = %err, "command rejected");
        })?;

        let mut next = self.book.clone();
        next.apply(&change);
        self.persist(&next)?;
        self.book = next;

        log_committed(&change);
        Ok(change.balance())
    }

    fn persist(&mut self, book: &AccountBook) -> LedgerResult<()> {
        self.store.save(&codec::encode(book)).map_err(|err| {
            tracing::error!(error = %err, "failed to persist ledger");
            LedgerError::from(err)
        })
    }
}

fn log_committed(change: &LedgerChange) {
    match change {
        LedgerChange::AccountOpened { account } => {
            tracing::info!(account = %account, "account created");
        }
        LedgerChange::BalanceUpdated { account, balance } => {
            tracing::info!(account = %account, %balance, "balance updated");
        }
    }
}
