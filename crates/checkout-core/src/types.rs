//! # Domain Types
//!
//! Value types shared across the checkout pipeline.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Rate       │   │      Item       │   │    OrderId      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  fraction [0,1] │   │  name           │   │  UUID v4        │       │
//! │  │  0.18 = 18%     │   │  price >= 0     │   │  opaque         │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::validation::{validate_bps, validate_fraction, validate_item_price};

// =============================================================================
// Rate
// =============================================================================

/// A fractional rate in `[0, 1]` (0.18 = 18%).
///
/// Used for both VAT and percentage discounts. A `Rate` can only be built
/// through a validating constructor, so holding one proves it is in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Rate(Decimal);

impl Rate {
    /// Creates a rate from a fraction.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::types::Rate;
    /// use rust_decimal::Decimal;
    ///
    /// assert!(Rate::new(Decimal::new(18, 2)).is_ok());
    /// assert!(Rate::new(Decimal::new(2, 0)).is_err());
    /// ```
    pub fn new(value: Decimal) -> CoreResult<Self> {
        validate_fraction("rate", value)
            .map(Rate)
            .map_err(CoreError::InvalidConfiguration)
    }

    /// Creates a rate from basis points (1800 = 18%).
    pub fn from_bps(bps: u32) -> CoreResult<Self> {
        let bps = validate_bps("rate", bps).map_err(CoreError::InvalidConfiguration)?;
        Ok(Rate(Decimal::new(i64::from(bps), 4)))
    }

    /// Zero rate.
    #[inline]
    pub const fn zero() -> Self {
        Rate(Decimal::ZERO)
    }

    /// Returns the rate as a fraction.
    #[inline]
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// Checks if the rate is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl Default for Rate {
    fn default() -> Self {
        Rate::zero()
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", (self.0 * Decimal::ONE_HUNDRED).normalize())
    }
}

// =============================================================================
// Item
// =============================================================================

/// A priced item in a cart.
///
/// Items are immutable once built; the cart and the order snapshot both hold
/// copies, never references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    name: String,
    price: Money,
}

impl Item {
    /// Creates an item.
    ///
    /// ## Errors
    /// `InvalidItem` if the price is negative or above `MAX_ITEM_PRICE`.
    pub fn new(name: impl Into<String>, price: Money) -> CoreResult<Self> {
        validate_item_price(price.amount()).map_err(CoreError::InvalidItem)?;

        Ok(Item {
            name: name.into(),
            price,
        })
    }

    /// Display label.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price (always non-negative).
    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }
}

// =============================================================================
// Order Identity
// =============================================================================

/// Opaque order identifier, unique per order and stable for its lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(Uuid);

impl OrderId {
    /// Generates a fresh identifier.
    pub fn new() -> Self {
        OrderId(Uuid::new_v4())
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for OrderId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
