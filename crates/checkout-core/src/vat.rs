//! # VAT
//!
//! Applies a single fixed tax rate to prices.

use rust_decimal::Decimal;

use crate::error::CoreResult;
use crate::money::Money;
use crate::types::Rate;

/// Stateless tax policy with a rate fixed at construction.
///
/// ## Example
/// ```rust
/// use checkout_core::money::Money;
/// use checkout_core::vat::VatManager;
/// use rust_decimal::Decimal;
///
/// let vat = VatManager::new(Decimal::new(18, 2)).unwrap(); // 18%
/// let gross = vat.apply_vat(Money::from_cents(10000));
/// assert_eq!(gross.amount(), Decimal::new(118, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VatManager {
    rate: Rate,
}

impl VatManager {
    /// Creates a VAT policy.
    ///
    /// Fails with `InvalidConfiguration` if `rate` is outside `[0, 1]`.
    pub fn new(rate: Decimal) -> CoreResult<Self> {
        Ok(VatManager {
            rate: Rate::new(rate)?,
        })
    }

    /// Creates a VAT policy from an already validated rate.
    pub const fn with_rate(rate: Rate) -> Self {
        VatManager { rate }
    }

    /// Returns the configured rate.
    #[inline]
    pub const fn rate(&self) -> Rate {
        self.rate
    }

    /// Returns `price * (1 + rate)`.
    #[inline]
    pub fn apply_vat(&self, price: Money) -> Money {
        price.increase_by(self.rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_apply_vat() {
        let vat = VatManager::new(dec!(0.2)).unwrap();
        assert_eq!(vat.apply_vat(Money::new(dec!(50))).amount(), dec!(60));
    }

    #[test]
    fn test_zero_rate_is_identity() {
        let vat = VatManager::new(dec!(0)).unwrap();
        let price = Money::new(dec!(19.99));
        assert_eq!(vat.apply_vat(price), price);
    }

    #[test]
    fn test_rejects_out_of_range_rate() {
        assert!(VatManager::new(dec!(-0.01)).unwrap_err().is_configuration_error());
        assert!(VatManager::new(dec!(1.01)).unwrap_err().is_configuration_error());
        assert!(VatManager::new(dec!(1)).is_ok());
    }

    proptest! {
        #[test]
        fn prop_apply_vat_matches_formula(
            bps in 0u32..=10_000,
            cents in 0i64..=10_000_000,
        ) {
            let rate = Decimal::new(i64::from(bps), 4);
            let price = Money::new(Decimal::new(cents, 2));
            let vat = VatManager::new(rate).unwrap();

            prop_assert_eq!(
                vat.apply_vat(price).amount(),
                price.amount() * (Decimal::ONE + rate)
            );
        }
    }
}
