//! Durable snapshot store boundary.
//!
//! A store holds the whole ledger as text, one `<id>,<balance>` record per
//! line. Every save replaces the previous snapshot; there is no append log.

pub mod codec;
pub mod file;
pub mod in_memory;
pub mod r#trait;

pub use file::FileStore;
pub use in_memory::InMemoryStore;
pub use r#trait::{BalanceStore, StoreError};
