//! Money-string wire format.
//!
//! Adjustments and base prices cross the boundary as strings of the form
//! `digits`, optionally followed by a dot and one to four fractional digits
//! (`"10"`, `"2.50"`, `"0.1234"`). No sign, no exponent: direction comes
//! from [`IncrementMode`](crate::model::IncrementMode), never from the
//! number itself. Internal arithmetic is all [`Decimal`].

use rust_decimal::Decimal;
use thiserror::Error;

/// Rejection of a malformed money string.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("invalid money value {0:?}: expected digits with up to 4 decimals")]
pub struct MoneyError(pub String);

/// Parses a wire money string into a [`Decimal`].
pub fn parse_money(s: &str) -> Result<Decimal, MoneyError> {
    let (int_part, frac_part) = match s.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (s, None),
    };
    let all_digits = |p: &str| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int_part) {
        return Err(MoneyError(s.to_string()));
    }
    if let Some(f) = frac_part {
        if !all_digits(f) || f.len() > 4 {
            return Err(MoneyError(s.to_string()));
        }
    }
    s.parse::<Decimal>().map_err(|_| MoneyError(s.to_string()))
}

/// Coerces a value to a price-safe number: anything unparseable becomes
/// zero, so one poisoned row can never poison a computed price.
pub fn money_or_zero(s: &str) -> Decimal {
    parse_money(s).unwrap_or(Decimal::ZERO)
}
