//! # Order
//!
//! The immutable record produced by one successful pricing run.
//!
//! ## Construction Rules
//! - Built only by the pipeline (`Cart::make_order`); there is no public
//!   constructor and no setter.
//! - Items are a snapshot copy taken at construction, never a live view of
//!   the cart.
//! - Empty orders are rejected, as are negative totals.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Item, OrderId};

/// A placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    id: OrderId,
    items: Vec<Item>,
    total_price: Money,
    created_at: DateTime<Utc>,
}

impl Order {
    /// Builds an order from an item snapshot and its computed total.
    ///
    /// ## Errors
    /// `InvalidState` if `items` is empty or `total_price` is negative. Both
    /// should be unreachable through `Cart`, which checks first and only
    /// feeds non-negative prices through the calculator.
    pub(crate) fn new(items: Vec<Item>, total_price: Money) -> CoreResult<Self> {
        if items.is_empty() {
            return Err(CoreError::invalid_state("an order must contain at least one item"));
        }

        if total_price.is_negative() {
            return Err(CoreError::invalid_state(format!(
                "order total must not be negative, got {}",
                total_price.amount()
            )));
        }

        Ok(Order {
            id: OrderId::new(),
            items,
            total_price,
            created_at: Utc::now(),
        })
    }

    /// Stable identifier for this order.
    #[inline]
    pub fn id(&self) -> OrderId {
        self.id
    }

    /// Items as they were when the order was placed.
    #[inline]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[inline]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Final total, VAT and discount included.
    #[inline]
    pub fn total_price(&self) -> Money {
        self.total_price
    }

    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
