//! # Money Module
//!
//! Provides the `Money` type for prices and totals.
//!
//! ## Precision
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  STORED vs DISPLAYED                                                    │
//! │                                                                         │
//! │  A price is kept exactly as it was parsed:                              │
//! │    "1.999"  ──► 1.999                                                   │
//! │                                                                         │
//! │  Line totals and the grand total use that value:                        │
//! │    0.004 × 3 = 0.012        0.125 × 8 = 1.0                             │
//! │                                                                         │
//! │  Two decimals appear only when the amount is displayed:                 │
//! │    0.012 ──► "0.01"         1.0 ──► "1.00"        1.999 ──► "2.00"      │
//! │    halves round away from zero: 0.125 ──► "0.13"                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use lista_core::money::Money;
//!
//! let price = Money::new(6.5);
//! let line_total = price.multiply_quantity(2);
//! assert_eq!(line_total.to_string(), "13.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount in currency units.
///
/// ## Design Decisions
/// - **f64**: holds the parsed price unchanged, sub-cent digits included
/// - **Single field tuple struct**: serializes as a plain JSON number
/// - **No rounding in arithmetic**: only [`Display`](fmt::Display) and
///   [`Money::cents`] round
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(f64);

impl Money {
    /// Creates a Money value from an amount in currency units.
    ///
    /// ## Example
    /// ```rust
    /// use lista_core::money::Money;
    ///
    /// assert_eq!(Money::new(1.999).amount(), 1.999);
    /// ```
    #[inline]
    pub const fn new(amount: f64) -> Self {
        Money(amount)
    }

    /// Creates a Money value from whole cents.
    ///
    /// ## Example
    /// ```rust
    /// use lista_core::money::Money;
    ///
    /// let price = Money::from_cents(2000); // 20.00
    /// assert_eq!(price.amount(), 20.0);
    /// ```
    #[inline]
    pub fn from_cents(cents: i64) -> Self {
        Money(cents as f64 / 100.0)
    }

    /// Returns the exact stored amount.
    #[inline]
    pub const fn amount(&self) -> f64 {
        self.0
    }

    /// Returns the amount rounded to the nearest cent, halves away from
    /// zero. This is the value [`Display`](fmt::Display) shows.
    ///
    /// ## Example
    /// ```rust
    /// use lista_core::money::Money;
    ///
    /// assert_eq!(Money::new(1.999).cents(), 200);
    /// assert_eq!(Money::new(0.125).cents(), 13);
    /// ```
    #[inline]
    pub fn cents(&self) -> i64 {
        (self.0 * 100.0).round() as i64
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0.0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Checks if the value is negative (less than zero). `-0.0` is not.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }

    /// Checks for NaN and infinities.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use lista_core::money::Money;
    ///
    /// let unit_price = Money::new(8.0);
    /// assert_eq!(unit_price.multiply_quantity(3).amount(), 24.0);
    /// ```
    #[inline]
    pub fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty as f64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Two-decimal amount without a currency label.
///
/// The label is a display concern and is added by
/// [`ListConfig::format_currency`](crate::config::ListConfig::format_currency).
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = (self.0 * 100.0).round() / 100.0;
        // Tiny negatives and -0.0 print as "0.00".
        let rounded = if rounded == 0.0 { 0.0 } else { rounded };
        write!(f, "{:.2}", rounded)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

/// Sums left to right starting from zero.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        assert_eq!(Money::from_cents(2000).amount(), 20.0);
        assert_eq!(Money::from_cents(650).amount(), 6.5);
        assert_eq!(Money::from_cents(1099).cents(), 1099);
    }

    #[test]
    fn test_amount_keeps_sub_cent_digits() {
        let price = Money::new(1.999);
        assert_eq!(price.amount(), 1.999);
        assert_eq!(price.cents(), 200);
        assert_ne!(price, Money::from_cents(200));
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::new(69.0).to_string(), "69.00");
        assert_eq!(Money::new(6.5).to_string(), "6.50");
        assert_eq!(Money::new(0.05).to_string(), "0.05");
        assert_eq!(Money::new(-5.5).to_string(), "-5.50");
        assert_eq!(Money::zero().to_string(), "0.00");
        assert_eq!(Money::new(-0.0).to_string(), "0.00");
        assert_eq!(Money::new(-0.001).to_string(), "0.00");
    }

    #[test]
    fn test_display_rounds_only_at_the_end() {
        assert_eq!(Money::new(0.004).multiply_quantity(3).to_string(), "0.01");
        assert_eq!(Money::new(0.125).multiply_quantity(8).to_string(), "1.00");
        assert_eq!(Money::new(0.125).to_string(), "0.13");
        assert_eq!(Money::new(1.999).to_string(), "2.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::new(10.0);
        let b = Money::new(5.0);

        assert_eq!((a + b).amount(), 15.0);
        assert_eq!((a - b).amount(), 5.0);
        assert_eq!((a * 3).amount(), 30.0);

        let mut c = a;
        c += b;
        assert_eq!(c.amount(), 15.0);
    }

    #[test]
    fn test_sum() {
        let total: Money = [40.0, 24.0, 5.0].into_iter().map(Money::new).sum();
        assert_eq!(total.amount(), 69.0);

        let empty: Money = std::iter::empty::<Money>().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_sign_and_finiteness() {
        assert!(Money::new(-0.01).is_negative());
        assert!(!Money::new(-0.0).is_negative());
        assert!(!Money::new(f64::NAN).is_finite());
        assert!(Money::new(1e300).is_finite());
    }
}
