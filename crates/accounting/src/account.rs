use tally_core::{AccountId, Money};

/// A named account and its current balance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: AccountId,
    /// Operations never take this below zero. A record loaded from the store
    /// may already be negative.
    pub balance: Money,
}

impl Account {
    /// Fresh account with a zero balance.
    pub fn open(id: AccountId) -> Self {
        Self {
            id,
            balance: Money::ZERO,
        }
    }
}
