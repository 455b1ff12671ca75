//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    100 × 0.9 × 1.18 = 106.19999999999999  ❌ WRONG!                     │
//! │                                                                         │
//! │  OUR SOLUTION: base-10 Decimal                                          │
//! │    100 × 0.9 × 1.18 = 106.200             ✓ exact                       │
//! │                                                                         │
//! │  The pipeline never rounds. Rounding to cents is a presentation         │
//! │  concern, done only by `Display`.                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use checkout_core::money::Money;
//! use rust_decimal::Decimal;
//!
//! let price = Money::new(Decimal::new(1099, 2)); // 10.99
//! let total = price + Money::new(Decimal::new(500, 2));
//! assert_eq!(total.amount(), Decimal::new(1599, 2));
//! assert_eq!(total.to_string(), "15.99");
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use crate::types::Rate;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value as an exact decimal.
///
/// ## Design Decisions
/// - **Signed**: Money itself allows negatives; non-negativity is enforced by
///   the values that hold it (`Item`, `Order`)
/// - **Single field tuple struct**: zero-cost wrapper over `Decimal`
/// - **No currency**: the pipeline is single-currency
///
/// ## Where Money is Used
/// ```text
/// Item.price ──► discount ──► VAT ──► line price ──► Σ ──► Order.total
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Creates a Money value from a decimal amount.
    #[inline]
    pub const fn new(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Creates a Money value from integer minor units (cents).
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).to_string(), "10.99");
    /// ```
    #[inline]
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, 2))
    }

    /// Returns the underlying decimal amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Scales the amount by `(1 + rate)`.
    ///
    /// This is the VAT transform; `rate = 0` returns the value unchanged.
    #[inline]
    pub fn increase_by(&self, rate: Rate) -> Money {
        Money(self.0 * (Decimal::ONE + rate.value()))
    }

    /// Scales the amount by `(1 - rate)`.
    ///
    /// This is the percentage-discount transform.
    #[inline]
    pub fn decrease_by(&self, rate: Rate) -> Money {
        Money(self.0 * (Decimal::ONE - rate.value()))
    }

    /// Subtracts `other`, flooring the result at zero.
    #[inline]
    pub fn saturating_sub(&self, other: Money) -> Money {
        if other.0 >= self.0 {
            Money::zero()
        } else {
            Money(self.0 - other.0)
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders with two decimal places. Presentation only; never feed this back
/// into a calculation.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
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

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}
