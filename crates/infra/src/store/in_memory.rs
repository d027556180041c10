use super::r#trait::{BalanceStore, StoreError};

/// In-memory snapshot store.
///
/// Intended for tests/dev. Holds the same text a [`FileStore`](super::FileStore)
/// would write, so records still go through the codec.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    contents: Option<String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with raw contents.
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Some(contents.into()),
        }
    }

    /// Current raw contents (for assertions).
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl BalanceStore for InMemoryStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        Ok(self.contents.clone())
    }

    fn save(&mut self, contents: &str) -> Result<(), StoreError> {
        self.contents = Some(contents.to_string());
        Ok(())
    }
}
