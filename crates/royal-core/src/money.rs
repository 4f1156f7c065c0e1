//! # Money
//!
//! Nightly rates, invoice totals and payment amounts, held as integer cents.
//!
//! ## Rounding
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Nightly rate 199.99 × 3 nights                                        │
//! │                                                                         │
//! │  As f64:   599.9699999999999   ❌                                       │
//! │  As cents: 19999 × 3 = 59997   → $599.97  ✅                            │
//! │                                                                         │
//! │  Every amount is stored in the smallest currency unit.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use royal_core::money::Money;
//!
//! let rate = Money::from_major_minor(300, 0); // $300.00 per night
//! let total = rate.multiply_nights(4);
//! assert_eq!(total, Money::from_major_minor(1200, 0));
//! assert_eq!(total.to_string(), "$1200.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// An amount in cents.
///
/// Signed: a booking whose dates are reversed has a negative number of
/// nights, and its total stays negative rather than being clamped.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// ```rust
    /// use royal_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(20000), Money::from_major_minor(200, 0));
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Builds an amount from whole dollars plus cents.
    ///
    /// The sign of `dollars` applies to the whole amount, so
    /// `from_major_minor(-5, 50)` is -$5.50. Saturates at the `i64` bounds.
    #[inline]
    pub const fn from_major_minor(dollars: i64, cents: i64) -> Self {
        let cents = if dollars < 0 { -cents } else { cents };
        Money(dollars.saturating_mul(100).saturating_add(cents))
    }

    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Cost of `nights` at this nightly rate.
    ///
    /// ```text
    /// Room 102: $200.00 / night
    /// Stay: 2025-05-01 → 2025-05-03 (2 nights)
    ///      │
    ///      ▼
    /// multiply_nights(2) ──► $400.00
    /// ```
    ///
    /// Saturates at the `i64` bounds instead of overflowing.
    #[inline]
    pub const fn multiply_nights(&self, nights: i64) -> Self {
        Money(self.0.saturating_mul(nights))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let magnitude = self.0.unsigned_abs();
        if self.is_negative() {
            f.write_str("-")?;
        }
        write!(f, "${}.{:02}", magnitude / 100, magnitude % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_major_minor() {
        assert_eq!(Money::from_major_minor(300, 0).cents(), 30000);
        assert_eq!(Money::from_major_minor(350, 50).cents(), 35050);
        assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(120000).to_string(), "$1200.00");
        assert_eq!(Money::from_cents(1099).to_string(), "$10.99");
        assert_eq!(Money::from_cents(-40000).to_string(), "-$400.00");
        assert_eq!(Money::from_cents(-5).to_string(), "-$0.05");
        assert_eq!(Money::zero().to_string(), "$0.00");
    }

    #[test]
    fn test_multiply_nights() {
        let rate = Money::from_cents(19999);
        assert_eq!(rate.multiply_nights(3).cents(), 59997);
        assert!(rate.multiply_nights(0).is_zero());
        assert!(rate.multiply_nights(-2).is_negative());
    }

    #[test]
    fn test_multiply_nights_saturates() {
        let rate = Money::from_major_minor(100_000_000_000, 0);
        assert_eq!(rate.multiply_nights(1_000_000).cents(), i64::MAX);
        assert_eq!(rate.multiply_nights(-1_000_000).cents(), i64::MIN);
        assert_eq!(Money::from_major_minor(i64::MAX, 99).cents(), i64::MAX);
        assert_eq!(Money::from_major_minor(i64::MIN, 99).cents(), i64::MIN);
    }
}
