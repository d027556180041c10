//! Record codec: `<accountIdentifier>,<balance>` per line.
//!
//! Decoding is lenient. A line without exactly two fields is dropped and a
//! balance that does not parse reads as zero. Anything else is kept as
//! written, negative balances and empty identifiers included. None of these
//! abort the load.

use tally_accounting::{Account, AccountBook};
use tally_core::{AccountId, Money};

pub const FIELD_SEPARATOR: char = ',';

#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

pub fn encode(book: &AccountBook) -> String {
    let mut out = String::new();
    for account in book.accounts() {
        out.push_str(account.id.as_str());
        out.push(FIELD_SEPARATOR);
        out.push_str(&account.balance.to_string());
        out.push_str(LINE_ENDING);
    }
    out
}

pub fn decode(contents: &str) -> AccountBook {
    let mut book = AccountBook::new();
    for (index, line) in contents.lines().enumerate() {
        let line_no = index + 1;
        let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
        let [raw_id, raw_balance] = fields.as_slice() else {
            tracing::debug!(line_no, fields = fields.len(), "skipping malformed record");
            continue;
        };

        // `lines()` leaves a lone '\r' inside a line; such an id cannot be written back
        let id = match AccountId::parse(*raw_id) {
            Ok(id) => id,
            Err(err) => {
                tracing::warn!(line_no, error = %err, "skipping record with invalid identifier");
                continue;
            }
        };

        let balance = match raw_balance.parse::<Money>() {
            Ok(balance) => balance,
            Err(err) => {
                tracing::warn!(
                    line_no,
                    account = %id,
                    error = %err,
                    "unparseable balance read as zero"
                );
                Money::ZERO
            }
        };

        book.restore(Account { id, balance });
    }
    book
}
