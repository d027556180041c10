use std::path::PathBuf;

use thiserror::Error;

/// Store-level failures. The in-memory book is never touched when one is returned.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read store {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write store {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Snapshot store for the ledger's text representation.
///
/// Owned by a single ledger and driven from one thread. Implementations deal
/// only in raw contents; record parsing lives in [`codec`](super::codec) so
/// every backend shares the same lenient rules.
pub trait BalanceStore {
    /// Current snapshot, or `None` when nothing has been stored yet.
    fn load(&self) -> Result<Option<String>, StoreError>;

    /// Replace the snapshot with `contents`.
    fn save(&mut self, contents: &str) -> Result<(), StoreError>;
}
