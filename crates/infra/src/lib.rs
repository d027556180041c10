//! Infrastructure layer: snapshot store, ledger service, config.

pub mod config;
pub mod ledger;
pub mod store;

pub use config::LedgerConfig;
pub use ledger::{Ledger, LedgerError, LedgerResult};
pub use store::{BalanceStore, FileStore, InMemoryStore, StoreError};
