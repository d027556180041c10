//! Domain error model.

use thiserror::Error;

use crate::id::AccountId;
use crate::money::Money;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// invariants, lookups). Storage concerns belong to the infrastructure layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An account with this identifier is already registered.
    #[error("account {0} already exists")]
    AlreadyExists(AccountId),

    /// No account with this identifier is registered.
    #[error("account {0} not found")]
    NotFound(AccountId),

    /// A withdrawal asked for more than the account holds.
    #[error("insufficient funds in account {account}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        account: AccountId,
        balance: Money,
        requested: Money,
    },

    /// An operation amount was rejected (non-positive, or the result would overflow).
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// An identifier was invalid (e.g. cannot be stored as a record key).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn invalid_amount(msg: impl Into<String>) -> Self {
        Self::InvalidAmount(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found(id: &AccountId) -> Self {
        Self::NotFound(id.clone())
    }
}
