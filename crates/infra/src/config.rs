//! Configuration loading and representation.

use std::path::PathBuf;

use tally_observability::LogOutput;

pub const STORE_PATH_ENV: &str = "TALLY_STORE_PATH";
pub const LOG_FORMAT_ENV: &str = "TALLY_LOG_FORMAT";

pub const DEFAULT_STORE_PATH: &str = "accounts.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerConfig {
    pub store_path: PathBuf,
    pub log_output: LogOutput,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            log_output: LogOutput::default(),
        }
    }
}

impl LedgerConfig {
    /// Read `TALLY_STORE_PATH` and `TALLY_LOG_FORMAT`, defaulting when unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let store_path = lookup(STORE_PATH_ENV)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.store_path);
        let log_output = lookup(LOG_FORMAT_ENV)
            .map(|v| LogOutput::parse_lenient(&v))
            .unwrap_or(defaults.log_output);
        Self {
            store_path,
            log_output,
        }
    }

    pub fn with_store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.store_path = path.into();
        self
    }
}
