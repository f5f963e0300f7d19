//! Exact two-decimal money amounts.
//!
//! Costs are held as whole cents so that parsing, surcharges and display
//! never go through binary floating point.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a cost string was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CostError {
    #[error("cost is required")]
    Missing,

    #[error("cost is not a number")]
    NotANumber,

    #[error("cost must be greater than zero")]
    NotPositive,

    #[error("cost may have at most two decimal places")]
    TooManyDecimals,

    #[error("cost is too large")]
    TooLarge,
}

/// A non-negative amount in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    /// Create from a whole number of cents.
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Amount in cents.
    pub const fn as_cents(&self) -> u64 {
        self.0
    }

    /// Parse a user-entered cost.
    ///
    /// Accepts plain decimal notation (`12`, `12.3`, `12.34`, `.5`, `12.`)
    /// with surrounding whitespace. The amount must be strictly positive and
    /// carry no more than two fractional digits.
    pub fn parse(input: &str) -> Result<Self, CostError> {
        let s = input.trim();
        if s.is_empty() {
            return Err(CostError::Missing);
        }

        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let (whole, frac) = match body.split_once('.') {
            Some((w, f)) => (w, f),
            None => (body, ""),
        };

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && frac.is_empty()) || !all_digits(whole) || !all_digits(frac) {
            return Err(CostError::NotANumber);
        }

        // Sign is checked before precision so "-1.234" reports the sign.
        let is_zero = whole.bytes().chain(frac.bytes()).all(|b| b == b'0');
        if negative || is_zero {
            return Err(CostError::NotPositive);
        }

        if frac.len() > 2 {
            return Err(CostError::TooManyDecimals);
        }

        let mut cents: u64 = 0;
        for b in whole.bytes() {
            cents = cents
                .checked_mul(10)
                .and_then(|c| c.checked_add(u64::from(b - b'0')))
                .ok_or(CostError::TooLarge)?;
        }
        cents = cents.checked_mul(100).ok_or(CostError::TooLarge)?;

        // Right-pad to exactly two digits: "5" -> 50 cents.
        let frac_cents = frac
            .bytes()
            .chain(std::iter::repeat(b'0'))
            .take(2)
            .fold(0u64, |acc, b| acc * 10 + u64::from(b - b'0'));

        cents
            .checked_add(frac_cents)
            .map(Self)
            .ok_or(CostError::TooLarge)
    }

    /// Scale by `(10_000 + basis_points) / 10_000`, rounding to the nearest
    /// cent with midpoints away from zero.
    ///
    /// 1500 basis points is the 15% express surcharge.
    pub fn with_surcharge(&self, basis_points: u32) -> Result<Self, CostError> {
        let scaled = u128::from(self.0) * (10_000 + u128::from(basis_points));
        let rounded = (scaled + 5_000) / 10_000;
        u64::try_from(rounded)
            .map(Self)
            .map_err(|_| CostError::TooLarge)
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl std::str::FromStr for Money {
    type Err = CostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
