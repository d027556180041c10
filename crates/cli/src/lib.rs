//! `tally-cli`
//!
//! Interactive menu over a [`Ledger`](tally_infra::Ledger). The front end only
//! reads input, converts it to typed arguments and renders outcomes; every
//! rule lives in the ledger.

pub mod session;

pub use session::{describe_error, Session};
