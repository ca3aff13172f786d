//! Monetary amount type with output-time rounding.
//!
//! Uses `rust_decimal` internally so fee arithmetic is exact; values are only
//! rounded to cents when they are formatted for the export.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Deserialize;
use std::fmt;
use std::ops::Mul;
use std::str::FromStr;

/// A monetary value as reported by the ticketing platform.
///
/// Full precision is kept through arithmetic; `Display` renders exactly two
/// decimal places, rounding midpoints away from zero.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use sales_receipts::Amount;
///
/// let amount = Amount::from_str("3.5").unwrap();
/// assert_eq!(amount.to_string(), "3.50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize)]
#[serde(transparent)]
pub struct Amount(Decimal);

impl Amount {
    /// The number of decimal places rendered in the export.
    pub const DISPLAY_SCALE: u32 = 2;

    /// Zero value.
    pub const ZERO: Self = Amount(Decimal::ZERO);

    /// Creates a new `Amount` without altering its precision.
    pub fn new(value: Decimal) -> Self {
        Amount(value)
    }

    /// Returns `true` if this value is zero, regardless of scale or sign.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns the value rounded to cents, as written to the export.
    pub fn to_cents(self) -> Decimal {
        let mut rounded = self
            .0
            .round_dp_with_strategy(Self::DISPLAY_SCALE, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(Self::DISPLAY_SCALE);
        if rounded.is_zero() {
            rounded.set_sign_positive(true);
        }
        rounded
    }
}

impl FromStr for Amount {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Decimal::from_str(s.trim()).map(Amount)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cents())
    }
}

impl Mul<Decimal> for Amount {
    type Output = Self;

    fn mul(self, rhs: Decimal) -> Self::Output {
        Amount(self.0 * rhs)
    }
}
