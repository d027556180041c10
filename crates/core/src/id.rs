//! Account identifiers.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of an account (unique key within a ledger).
///
/// Opaque text chosen by the user, possibly empty. The only constraint is that
/// it must fit in one store record: no comma, no line break.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccountId(String);

impl AccountId {
    /// Validate and wrap an identifier.
    pub fn parse(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if let Some(c) = value.chars().find(|&c| matches!(c, ',' | '\r' | '\n')) {
            return Err(DomainError::invalid_id(format!(
                "account identifier {value:?} contains reserved character {c:?}"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for AccountId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for AccountId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for AccountId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<AccountId> for String {
    fn from(value: AccountId) -> Self {
        value.0
    }
}

impl AsRef<str> for AccountId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_identifiers() {
        let id = AccountId::parse("12345-6").unwrap();
        assert_eq!(id.as_str(), "12345-6");
        assert_eq!(id.to_string(), "12345-6");
    }

    #[test]
    fn empty_identifier_is_allowed() {
        let id = AccountId::parse("").unwrap();
        assert_eq!(id.as_str(), "");
    }

    #[test]
    fn rejects_identifiers_that_break_records() {
        for bad in ["a,b", "line\nbreak", "cr\r"] {
            match AccountId::parse(bad) {
                Err(DomainError::InvalidId(_)) => {}
                other => panic!("expected InvalidId for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn deserialization_validates() {
        let ok: AccountId = serde_json::from_str("\"savings\"").unwrap();
        assert_eq!(ok.as_str(), "savings");
        assert!(serde_json::from_str::<AccountId>("\"a,b\"").is_err());
    }
}
