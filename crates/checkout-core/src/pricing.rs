//! # Pricing
//!
//! Composes VAT and a discount strategy over a set of items.
//!
//! ## Calculation Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Per item:                                                              │
//! │                                                                         │
//! │    price ──► apply_discount ──► apply_vat ──► line price                │
//! │                                                                         │
//! │  Discount is ALWAYS applied first, then tax:                            │
//! │    100 × (1 - 0.10) × (1 + 0.18) = 106.2                                │
//! │                                                                         │
//! │  Total = Σ line prices (empty cart = 0). No rounding at any step.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use crate::discount::DiscountStrategy;
use crate::money::Money;
use crate::types::Item;
use crate::vat::VatManager;

/// Stateless total calculator.
///
/// Holds only an immutable `VatManager`, so one instance can be shared
/// (e.g. behind an `Arc`) by any number of carts and threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceCalculator {
    vat: VatManager,
}

impl PriceCalculator {
    pub const fn new(vat: VatManager) -> Self {
        PriceCalculator { vat }
    }

    pub const fn vat(&self) -> &VatManager {
        &self.vat
    }

    /// Price of one item: discount first, then VAT.
    pub fn calculate_price_for_item(
        &self,
        price: Money,
        strategy: &dyn DiscountStrategy,
    ) -> Money {
        self.vat.apply_vat(strategy.apply_discount(price))
    }

    /// Sum of `calculate_price_for_item` over `items`.
    pub fn calculate_total(&self, items: &[Item], strategy: &dyn DiscountStrategy) -> Money {
        let total: Money = items
            .iter()
            .map(|item| self.calculate_price_for_item(item.price(), strategy))
            .sum();

        debug!(
            items = items.len(),
            vat_rate = %self.vat.rate(),
            discount = %strategy.describe(),
            total = %total.amount(),
            "Calculated cart total"
        );

        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discount::{FixedAmountDiscount, NoDiscount, PercentageDiscount};
    use rust_decimal_macros::dec;

    fn calculator(vat: rust_decimal::Decimal) -> PriceCalculator {
        PriceCalculator::new(VatManager::new(vat).unwrap())
    }

    fn item(price: rust_decimal::Decimal) -> Item {
        Item::new("item", Money::new(price)).unwrap()
    }

    #[test]
    fn test_empty_items_total_zero() {
        let calc = calculator(dec!(0.18));
        let discount = PercentageDiscount::new(dec!(0.5)).unwrap();

        assert!(calc.calculate_total(&[], &discount).is_zero());
        assert!(calc.calculate_total(&[], &NoDiscount).is_zero());
    }

    /// Canonical order: discount, then VAT.
    #[test]
    fn test_discount_applied_before_vat() {
        let calc = calculator(dec!(0.18));
        let discount = PercentageDiscount::new(dec!(0.1)).unwrap();

        let total = calc.calculate_total(&[item(dec!(100))], &discount);
        assert_eq!(total.amount(), dec!(106.2));
    }

    #[test]
    fn test_multiple_items_without_discount() {
        let calc = calculator(dec!(0.2));
        let discount = PercentageDiscount::new(dec!(0)).unwrap();

        let total = calc.calculate_total(&[item(dec!(50)), item(dec!(150))], &discount);
        assert_eq!(total.amount(), dec!(240));
    }

    /// The order matters for fixed-amount discounts, which do not commute
    /// with VAT. VAT-first would give (10 × 1.2) - 5 = 7.
    #[test]
    fn test_fixed_discount_order_is_observable() {
        let calc = calculator(dec!(0.2));
        let discount = FixedAmountDiscount::new(Money::new(dec!(5))).unwrap();

        let line = calc.calculate_price_for_item(Money::new(dec!(10)), &discount);
        assert_eq!(line.amount(), dec!(6));
    }

    #[test]
    fn test_total_is_order_independent() {
        let calc = calculator(dec!(0.07));
        let discount = PercentageDiscount::new(dec!(0.15)).unwrap();

        let forward = [item(dec!(3.99)), item(dec!(12.5)), item(dec!(0))];
        let mut reversed = forward.clone();
        reversed.reverse();

        assert_eq!(
            calc.calculate_total(&forward, &discount),
            calc.calculate_total(&reversed, &discount)
        );
    }

    #[test]
    fn test_largest_cart_does_not_overflow() {
        let calc = calculator(dec!(1));
        let items = vec![item(crate::MAX_ITEM_PRICE); crate::MAX_CART_ITEMS];

        let total = calc.calculate_total(&items, &NoDiscount);
        assert_eq!(total.amount(), dec!(200000000000));
    }

    #[test]
    fn test_shared_across_threads() {
        let calc = std::sync::Arc::new(calculator(dec!(0.2)));
        let handles: Vec<_> = (1..=4i64)
            .map(|n| {
                let calc = calc.clone();
                std::thread::spawn(move || {
                    calc.calculate_total(&[item(rust_decimal::Decimal::from(n * 10))], &NoDiscount)
                })
            })
            .collect();

        let totals: Vec<Money> = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .collect();
        assert_eq!(totals[0].amount(), dec!(12));
        assert_eq!(totals[3].amount(), dec!(48));
    }
}
