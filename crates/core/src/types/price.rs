//! Type-safe price representation using decimal arithmetic.
//!
//! Catalog prices arrive as currency-formatted strings (`"$9.67"`). They are
//! normalized to [`Price`] exactly once, at catalog load; everything past
//! that point works with decimal amounts and never re-parses display
//! strings.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product price in the store currency.
///
/// Wraps a `Decimal` so cart math never goes through floating point.
/// Display renders the storefront convention: `$` followed by the amount
/// with exactly two decimal digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price {
    amount: Decimal,
}

impl Price {
    /// Create a price from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self { amount }
    }

    /// Create a price from a whole number of cents.
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self {
            amount: Decimal::new(cents, 2),
        }
    }

    /// The decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// Total for `quantity` units of this price.
    #[must_use]
    pub fn line_total(&self, quantity: u32) -> Decimal {
        self.amount * Decimal::from(quantity)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.amount)
    }
}

/// Error parsing a currency-formatted price string.
#[derive(Debug, thiserror::Error)]
pub enum PriceParseError {
    /// The string was empty after stripping the currency symbol.
    #[error("empty price string")]
    Empty,
    /// The amount was not a valid decimal number.
    #[error("invalid price amount: {0}")]
    InvalidAmount(#[from] rust_decimal::Error),
}

impl FromStr for Price {
    type Err = PriceParseError;

    /// Parse a price from its catalog form, e.g. `"$9.67"`.
    ///
    /// The leading `$` is optional; surrounding whitespace is tolerated.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let raw = raw.strip_prefix('$').unwrap_or(raw).trim();
        if raw.is_empty() {
            return Err(PriceParseError::Empty);
        }
        Ok(Self::new(Decimal::from_str(raw)?))
    }
}
