//! # Discount Strategies
//!
//! Pluggable policies that reduce an item's price before tax.
//!
//! ## Strategy Seam
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      DiscountStrategy (trait)                           │
//! │                                                                         │
//! │   PriceCalculator / Cart only ever see `&dyn DiscountStrategy`         │
//! │                                                                         │
//! │  ┌────────────────────┐ ┌────────────────────┐ ┌────────────────────┐  │
//! │  │ PercentageDiscount │ │ FixedAmountDiscount│ │     NoDiscount     │  │
//! │  │ price × (1 - p)    │ │ max(price - a, 0)  │ │ price              │  │
//! │  └────────────────────┘ └────────────────────┘ └────────────────────┘  │
//! │                                                                         │
//! │  New variants (tiered, buy-X-get-Y, ...) implement the trait and need  │
//! │  no change anywhere else.                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All parameters are validated in constructors, so a strategy that exists
//! is valid and the pipeline does not re-check it.

use rust_decimal::Decimal;
use std::fmt;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::Rate;
use crate::validation::validate_non_negative;

/// A pure policy mapping an item price to its discounted price.
///
/// Implementations hold no mutable state and may be shared across carts.
pub trait DiscountStrategy: fmt::Debug + Send + Sync {
    /// Returns the discounted price. Must not return a negative amount for a
    /// non-negative input.
    fn apply_discount(&self, price: Money) -> Money;

    /// Short human-readable label, used in order summaries.
    fn describe(&self) -> String;
}

// =============================================================================
// Percentage
// =============================================================================

/// Takes a fixed fraction off every item (0.1 = 10% off).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PercentageDiscount {
    percentage: Rate,
}

impl PercentageDiscount {
    /// Fails with `InvalidConfiguration` if `percentage` is outside `[0, 1]`.
    pub fn new(percentage: Decimal) -> CoreResult<Self> {
        Ok(PercentageDiscount {
            percentage: Rate::new(percentage)?,
        })
    }

    pub const fn percentage(&self) -> Rate {
        self.percentage
    }
}

impl DiscountStrategy for PercentageDiscount {
    fn apply_discount(&self, price: Money) -> Money {
        price.decrease_by(self.percentage)
    }

    fn describe(&self) -> String {
        format!("{} off", self.percentage)
    }
}

// =============================================================================
// Fixed Amount
// =============================================================================

/// Takes a fixed amount off every item, never going below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedAmountDiscount {
    amount: Money,
}

impl FixedAmountDiscount {
    /// Fails with `InvalidConfiguration` if `amount` is negative.
    pub fn new(amount: Money) -> CoreResult<Self> {
        validate_non_negative("discount amount", amount.amount())
            .map_err(CoreError::InvalidConfiguration)?;
        Ok(FixedAmountDiscount { amount })
    }

    pub const fn amount(&self) -> Money {
        self.amount
    }
}

impl DiscountStrategy for FixedAmountDiscount {
    fn apply_discount(&self, price: Money) -> Money {
        price.saturating_sub(self.amount)
    }

    fn describe(&self) -> String {
        format!("{} off each item", self.amount)
    }
}

// =============================================================================
// None
// =============================================================================

/// Identity strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoDiscount;

impl DiscountStrategy for NoDiscount {
    fn apply_discount(&self, price: Money) -> Money {
        price
    }

    fn describe(&self) -> String {
        "no discount".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_percentage_discount() {
        let discount = PercentageDiscount::new(dec!(0.1)).unwrap();
        let price = Money::new(dec!(100));
        assert_eq!(discount.apply_discount(price).amount(), dec!(90));
        assert_eq!(discount.describe(), "10% off");
    }

    #[test]
    fn test_percentage_bounds() {
        assert!(PercentageDiscount::new(dec!(-0.1))
            .unwrap_err()
            .is_configuration_error());
        assert!(PercentageDiscount::new(dec!(1.5))
            .unwrap_err()
            .is_configuration_error());

        let full = PercentageDiscount::new(dec!(1)).unwrap();
        assert!(full.apply_discount(Money::new(dec!(42))).is_zero());
    }

    #[test]
    fn test_fixed_amount_floors_at_zero() {
        let discount = FixedAmountDiscount::new(Money::new(dec!(5))).unwrap();
        assert_eq!(
            discount.apply_discount(Money::new(dec!(12))).amount(),
            dec!(7)
        );
        assert!(discount.apply_discount(Money::new(dec!(3))).is_zero());
        assert_eq!(discount.describe(), "5.00 off each item");
    }

    #[test]
    fn test_fixed_amount_rejects_negative() {
        let err = FixedAmountDiscount::new(Money::new(dec!(-1))).unwrap_err();
        assert!(err.is_configuration_error());
    }

    #[test]
    fn test_no_discount_is_identity() {
        let price = Money::new(dec!(7.77));
        assert_eq!(NoDiscount.apply_discount(price), price);
    }

    #[test]
    fn test_strategies_are_object_safe() {
        let strategies: Vec<Box<dyn DiscountStrategy>> = vec![
            Box::new(NoDiscount),
            Box::new(PercentageDiscount::new(dec!(0.5)).unwrap()),
            Box::new(FixedAmountDiscount::new(Money::new(dec!(1))).unwrap()),
        ];
        let results: Vec<Decimal> = strategies
            .iter()
            .map(|s| s.apply_discount(Money::new(dec!(10))).amount())
            .collect();
        assert_eq!(results, vec![dec!(10), dec!(5), dec!(9)]);
    }

    proptest! {
        #[test]
        fn prop_percentage_never_negative_or_increasing(
            bps in 0i64..=10_000,
            cents in 0i64..=10_000_000,
        ) {
            let discount = PercentageDiscount::new(Decimal::new(bps, 4)).unwrap();
            let price = Money::new(Decimal::new(cents, 2));
            let discounted = discount.apply_discount(price);

            prop_assert!(!discounted.is_negative());
            prop_assert!(discounted <= price);
        }
    }
}
