use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::errors::{ConvertError, ConvertResult};

/// A signed amount read from a German formatted field ("1.234,56").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Amount(Decimal);

impl Amount {
    /// Drops the `.` thousands separators and turns the `,` decimal
    /// separator into `.` before parsing.
    pub fn parse_german(raw: &str) -> ConvertResult<Self> {
        let normalized = raw.trim().replace('.', "").replace(',', ".");

        if !is_plain_decimal(&normalized) {
            return Err(ConvertError::Format(raw.to_string()));
        }

        Decimal::from_str(&normalized)
            .map(Amount)
            .map_err(|_| ConvertError::Format(raw.to_string()))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Value rounded to cents. Sign and zero checks use this, so an amount
    /// that prints as `0.00` counts as zero.
    pub fn rounded(&self) -> Decimal {
        self.0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }

    pub fn is_negative(&self) -> bool {
        let rounded = self.rounded();
        rounded.is_sign_negative() && !rounded.is_zero()
    }

    pub fn is_zero(&self) -> bool {
        self.rounded().is_zero()
    }

    /// Absolute value with two decimal places and `.` as separator.
    pub fn magnitude(&self) -> String {
        format!("{:.2}", self.rounded().abs())
    }
}

/// Optional sign, digits, at most one `.` followed by digits. Rejects the
/// exponents and `_` separators that `Decimal::from_str` would accept.
fn is_plain_decimal(s: &str) -> bool {
    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    let (int, frac) = match unsigned.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (unsigned, None),
    };

    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());

    all_digits(int) && frac.is_none_or(all_digits)
}
