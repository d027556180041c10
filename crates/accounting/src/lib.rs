//! Accounting module (named accounts holding balances).
//!
//! Pure domain logic only: no IO, no persistence concerns.

pub mod account;
pub mod book;

pub use account::Account;
pub use book::{AccountBook, LedgerChange, LedgerCommand};
