//! # Validation Module
//!
//! Input validation for values entering the checkout pipeline.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Points                                  │
//! │                                                                         │
//! │  Construction time (THIS MODULE)                                       │
//! │  ├── VAT rate in [0, 1]                                                │
//! │  ├── Discount percentage in [0, 1]                                     │
//! │  ├── Fixed discount amount >= 0                                        │
//! │  └── Item price in [0, MAX_ITEM_PRICE]                                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Call time (cart.rs / order.rs)                                        │
//! │  ├── Cart not empty, not already ordered                               │
//! │  └── Order total >= 0                                                  │
//! │                                                                         │
//! │  Once a value is constructed it is valid for its whole lifetime.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::{MAX_CART_ITEMS, MAX_ITEM_PRICE};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates that a value is a fraction in `[0, 1]`.
///
/// ## Example
/// ```rust
/// use checkout_core::validation::validate_fraction;
/// use rust_decimal::Decimal;
///
/// assert!(validate_fraction("vat_rate", Decimal::new(18, 2)).is_ok());
/// assert!(validate_fraction("vat_rate", Decimal::new(-1, 2)).is_err());
/// assert!(validate_fraction("vat_rate", Decimal::new(101, 2)).is_err());
/// ```
pub fn validate_fraction(field: &str, value: Decimal) -> ValidationResult<Decimal> {
    if value < Decimal::ZERO || value > Decimal::ONE {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: Decimal::ZERO,
            max: Decimal::ONE,
            value,
        });
    }

    Ok(value)
}

/// Validates that a monetary amount is non-negative.
///
/// Zero is allowed (free items, zero-value discounts).
pub fn validate_non_negative(field: &str, value: Decimal) -> ValidationResult<Decimal> {
    if value < Decimal::ZERO {
        return Err(ValidationError::Negative {
            field: field.to_string(),
            value,
        });
    }

    Ok(value)
}

/// Validates an item's unit price.
///
/// ## Rules
/// - Must not be negative (free items are fine)
/// - Must not exceed `MAX_ITEM_PRICE`
pub fn validate_item_price(price: Decimal) -> ValidationResult<Decimal> {
    validate_non_negative("price", price)?;

    if price > MAX_ITEM_PRICE {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: Decimal::ZERO,
            max: MAX_ITEM_PRICE,
            value: price,
        });
    }

    Ok(price)
}

/// Validates a basis-point rate (0 to 10000).
pub fn validate_bps(field: &str, bps: u32) -> ValidationResult<u32> {
    if bps > 10_000 {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: Decimal::ZERO,
            max: Decimal::from(10_000),
            value: Decimal::from(bps),
        });
    }

    Ok(bps)
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates cart size before adding one more item.
pub fn validate_cart_size(current_items: usize) -> ValidationResult<()> {
    if current_items >= MAX_CART_ITEMS {
        return Err(ValidationError::OutOfRange {
            field: "cart items".to_string(),
            min: Decimal::ZERO,
            max: Decimal::from(MAX_CART_ITEMS as u64),
            value: Decimal::from(current_items as u64 + 1),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_validate_fraction_bounds() {
        assert_eq!(validate_fraction("rate", dec!(0)), Ok(dec!(0)));
        assert_eq!(validate_fraction("rate", dec!(1)), Ok(dec!(1)));
        assert!(validate_fraction("rate", dec!(0.5)).is_ok());

        assert!(validate_fraction("rate", dec!(-0.0001)).is_err());
        assert!(validate_fraction("rate", dec!(1.0001)).is_err());
    }

    #[test]
    fn test_validate_fraction_reports_field() {
        let err = validate_fraction("discount", dec!(2)).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::OutOfRange { ref field, .. } if field == "discount"
        ));
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative("price", dec!(0)).is_ok());
        assert!(validate_non_negative("price", dec!(10.99)).is_ok());
        assert!(validate_non_negative("price", dec!(-0.01)).is_err());
    }

    #[test]
    fn test_validate_item_price() {
        assert!(validate_item_price(dec!(0)).is_ok());
        assert!(validate_item_price(MAX_ITEM_PRICE).is_ok());
        assert!(matches!(
            validate_item_price(dec!(-1)),
            Err(ValidationError::Negative { .. })
        ));
        assert!(matches!(
            validate_item_price(MAX_ITEM_PRICE + dec!(0.01)),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(validate_item_price(Decimal::MAX).is_err());
    }

    #[test]
    fn test_validate_bps() {
        assert!(validate_bps("vat_rate", 0).is_ok());
        assert!(validate_bps("vat_rate", 1800).is_ok());
        assert!(validate_bps("vat_rate", 10_000).is_ok());
        assert!(validate_bps("vat_rate", 10_001).is_err());
    }

    #[test]
    fn test_validate_cart_size() {
        assert!(validate_cart_size(0).is_ok());
        assert!(validate_cart_size(MAX_CART_ITEMS - 1).is_ok());
        assert!(validate_cart_size(MAX_CART_ITEMS).is_err());
    }
}
