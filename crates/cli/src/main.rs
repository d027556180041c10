//! `tally` binary: interactive ledger on a local store file.
//!
//! Usage: `tally [STORE_PATH]` (falls back to `TALLY_STORE_PATH`, then `accounts.txt`).

use anyhow::Context;

use tally_cli::Session;
use tally_infra::{FileStore, Ledger, LedgerConfig};

fn main() -> anyhow::Result<()> {
    let mut config = LedgerConfig::from_env();
    if let Some(path) = std::env::args_os().nth(1) {
        config = config.with_store_path(path);
    }

    tally_observability::init("warn", config.log_output);
    tracing::info!(store = %config.store_path.display(), "starting");

    let mut ledger = Ledger::open(FileStore::new(&config.store_path))
        .with_context(|| format!("failed to open store {}", config.store_path.display()))?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Session::new(&mut ledger, stdin.lock(), stdout.lock())
        .run()
        .context("terminal I/O failed")?;

    Ok(())
}
