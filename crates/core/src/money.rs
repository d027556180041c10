//! Fixed-point monetary amounts.
//!
//! Amounts are held as a signed count of minor units (cents). Decimal text
//! only appears at the edges: `Display` for output and `FromStr` for input.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minor units per major unit (two fractional digits).
pub const MINOR_UNITS_PER_MAJOR: i64 = 100;

const FRACTION_DIGITS: i64 = 2;

/// Exponents beyond this are either zero or overflow; no need to walk them.
const MAX_EXPONENT: i64 = 1_000;

/// A monetary amount in minor units.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// Whole major units (e.g. `Money::from_major(100)` is `100.00`).
    pub fn from_major(major: i64) -> Option<Self> {
        major.checked_mul(MINOR_UNITS_PER_MAJOR).map(Self)
    }

    pub const fn minor_units(self) -> i64 {
        self.0
    }

    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    pub fn checked_sub(self, rhs: Money) -> Option<Money> {
        self.0.checked_sub(rhs.0).map(Money)
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let magnitude = self.0.unsigned_abs();
        let per_major = MINOR_UNITS_PER_MAJOR as u64;
        write!(
            f,
            "{sign}{}.{:02}",
            magnitude / per_major,
            magnitude % per_major
        )
    }
}

/// Failure to read a decimal amount.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    #[error("amount is empty")]
    Empty,

    #[error("malformed amount: {0:?}")]
    Malformed(String),

    #[error("amount out of range: {0:?}")]
    OutOfRange(String),
}

impl FromStr for Money {
    type Err = MoneyParseError;

    /// Parses dot-decimal text, with an optional sign and exponent.
    ///
    /// Digits past the cent are rounded half away from zero.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.is_empty() {
            return Err(MoneyParseError::Empty);
        }
        let malformed = || MoneyParseError::Malformed(text.to_string());
        let out_of_range = || MoneyParseError::OutOfRange(text.to_string());

        let (negative, unsigned) = match text.as_bytes()[0] {
            b'-' => (true, &text[1..]),
            b'+' => (false, &text[1..]),
            _ => (false, text),
        };

        let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
            Some(idx) => {
                let exponent: i64 = unsigned[idx + 1..].parse().map_err(|_| malformed())?;
                (&unsigned[..idx], exponent)
            }
            None => (unsigned, 0),
        };

        let (int_part, frac_part) = match mantissa.split_once('.') {
            Some((int_part, frac_part)) => (int_part, frac_part),
            None => (mantissa, ""),
        };
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(malformed());
        }
        if !all_digits(int_part) || !all_digits(frac_part) {
            return Err(malformed());
        }

        let digits: Vec<u8> = int_part
            .bytes()
            .chain(frac_part.bytes())
            .map(|b| b - b'0')
            .collect();
        if digits.iter().all(|d| *d == 0) {
            return Ok(Money::ZERO);
        }
        if exponent > MAX_EXPONENT {
            return Err(out_of_range());
        }
        if exponent < -MAX_EXPONENT {
            return Ok(Money::ZERO);
        }

        // Number of leading digits that land at or above the cent position.
        let cut = int_part.len() as i64 + exponent + FRACTION_DIGITS;

        let mut magnitude: i64 = 0;
        for position in 0..cut.max(0) {
            let digit = digits.get(position as usize).copied().unwrap_or(0);
            magnitude = magnitude
                .checked_mul(10)
                .and_then(|m| m.checked_add(i64::from(digit)))
                .ok_or_else(out_of_range)?;
        }

        let round_digit = if cut >= 0 {
            digits.get(cut as usize).copied().unwrap_or(0)
        } else {
            0
        };
        if round_digit >= 5 {
            magnitude = magnitude.checked_add(1).ok_or_else(out_of_range)?;
        }

        Ok(Money(if negative { -magnitude } else { magnitude }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn parse(s: &str) -> Money {
        s.parse().unwrap()
    }

    #[test]
    fn displays_two_fraction_digits() {
        assert_eq!(Money::from_minor(6000).to_string(), "60.00");
        assert_eq!(Money::from_minor(5).to_string(), "0.05");
        assert_eq!(Money::from_minor(-5).to_string(), "-0.05");
        assert_eq!(Money::ZERO.to_string(), "0.00");
    }

    #[test]
    fn parses_plain_decimals() {
        assert_eq!(parse("50.0"), Money::from_minor(5000));
        assert_eq!(parse("50"), Money::from_minor(5000));
        assert_eq!(parse("0.5"), Money::from_minor(50));
        assert_eq!(parse(".25"), Money::from_minor(25));
        assert_eq!(parse("7."), Money::from_minor(700));
        assert_eq!(parse(" 12.34 "), Money::from_minor(1234));
        assert_eq!(parse("+1.10"), Money::from_minor(110));
        assert_eq!(parse("-1.10"), Money::from_minor(-110));
    }

    #[test]
    fn rounds_past_the_cent() {
        assert_eq!(parse("0.30000000000000004"), Money::from_minor(30));
        assert_eq!(parse("59.999999999999"), Money::from_minor(6000));
        assert_eq!(parse("0.005"), Money::from_minor(1));
        assert_eq!(parse("0.004"), Money::ZERO);
        assert_eq!(parse("-0.005"), Money::from_minor(-1));
    }

    #[test]
    fn parses_exponent_notation() {
        assert_eq!(parse("1.0E7"), Money::from_minor(1_000_000_000));
        assert_eq!(parse("2.5e-1"), Money::from_minor(25));
        assert_eq!(parse("1e-3"), Money::ZERO);
        assert_eq!(parse("0e99999"), Money::ZERO);
    }

    #[test]
    fn rejects_garbage() {
        for bad in ["notanumber", "NaN", "Infinity", "1.2.3", "1,5", "--1", ".", "1e", "e5"] {
            assert!(
                matches!(bad.parse::<Money>(), Err(MoneyParseError::Malformed(_))),
                "{bad:?} should be malformed"
            );
        }
        assert_eq!("".parse::<Money>(), Err(MoneyParseError::Empty));
        assert_eq!("   ".parse::<Money>(), Err(MoneyParseError::Empty));
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(matches!(
            "1e30".parse::<Money>(),
            Err(MoneyParseError::OutOfRange(_))
        ));
        assert!(matches!(
            "99999999999999999999".parse::<Money>(),
            Err(MoneyParseError::OutOfRange(_))
        ));
    }

    #[test]
    fn checked_arithmetic_does_not_wrap() {
        let max = Money::from_minor(i64::MAX);
        assert_eq!(max.checked_add(Money::from_minor(1)), None);
        assert_eq!(
            Money::from_minor(100).checked_sub(Money::from_minor(40)),
            Some(Money::from_minor(60))
        );
    }

    #[test]
    fn serializes_as_minor_units() {
        let json = serde_json::to_string(&Money::from_minor(1234)).unwrap();
        assert_eq!(json, "1234");
    }

    proptest! {
        /// Displayed text always reads back to the same amount.
        #[test]
        fn display_parses_back(minor in (i64::MIN + 1)..i64::MAX) {
            let money = Money::from_minor(minor);
            prop_assert_eq!(money.to_string().parse::<Money>().unwrap(), money);
        }
    }
}
