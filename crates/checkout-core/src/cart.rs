//! # Cart
//!
//! Holds the current items and orchestrates the checkout pipeline.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Cart Lifecycle                                  │
//! │                                                                         │
//! │   ┌───────┐  add_item   ┌───────────┐  make_order  ┌─────────┐         │
//! │   │ Empty │ ──────────► │ Populated │ ───────────► │ Ordered │         │
//! │   └───────┘             └─────┬─────┘              └────┬────┘         │
//! │                               │ ▲                       │              │
//! │                               └─┘ add_item              │ terminal     │
//! │                                                          │              │
//! │   make_order on Empty   ──► InvalidState (no order)      │              │
//! │   make_order on Ordered ──► AlreadyOrdered (unchanged) ◄─┘              │
//! │   add_item on Ordered   ──► InvalidState                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Pipeline (make_order)
//! ```text
//! calculate total ──► build Order ──► record on cart ──► notify
//!        │                 │                                │
//!   (pure, no I/O)   InvalidState aborts              failure keeps the
//!                    before recording                 order, returns
//!                                                      NotificationDelivery
//! ```
//!
//! ## Concurrency
//! A cart belongs to one session. `make_order` takes `&mut self`, so two
//! concurrent runs on the same cart cannot be expressed without the caller
//! adding its own lock. The cart holds no lock of its own, in particular none
//! across the notification call.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::discount::DiscountStrategy;
use crate::error::{CoreError, CoreResult};
use crate::notification::NotificationService;
use crate::order::Order;
use crate::pricing::PriceCalculator;
use crate::types::Item;
use crate::validation::validate_cart_size;
use crate::MAX_CART_ITEMS;

/// Where a cart is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartState {
    /// No items yet.
    Empty,
    /// Items added, no order yet.
    Populated,
    /// Order produced. Terminal.
    Ordered,
}

/// A shopping cart.
///
/// ## Invariants
/// - At most one order per cart; a second `make_order` is rejected
/// - Items cannot be added once ordered
/// - Maximum items: `MAX_CART_ITEMS`
pub struct Cart {
    items: Vec<Item>,
    order: Option<Order>,
    notified: bool,
    calculator: Arc<PriceCalculator>,
    notifier: Arc<dyn NotificationService>,
}

impl Cart {
    /// Creates an empty cart wired to shared pricing and notification
    /// services.
    pub fn new(calculator: Arc<PriceCalculator>, notifier: Arc<dyn NotificationService>) -> Self {
        Cart {
            items: Vec::new(),
            order: None,
            notified: false,
            calculator,
            notifier,
        }
    }

    /// Adds an item.
    ///
    /// ## Errors
    /// - `InvalidState` once the cart has been ordered
    /// - `CartTooLarge` past `MAX_CART_ITEMS`
    pub fn add_item(&mut self, item: Item) -> CoreResult<()> {
        if let Some(order) = &self.order {
            return Err(CoreError::invalid_state(format!(
                "cart already ordered (order {}), items can no longer be added",
                order.id()
            )));
        }

        validate_cart_size(self.items.len())
            .map_err(|_| CoreError::CartTooLarge { max: MAX_CART_ITEMS })?;

        debug!(name = item.name(), price = %item.price(), "Item added to cart");
        self.items.push(item);
        Ok(())
    }

    /// Runs the pipeline: total, order, record, notify.
    ///
    /// On success returns the recorded order. See the module docs for which
    /// failures leave an order behind.
    pub fn make_order(&mut self, discount: &dyn DiscountStrategy) -> CoreResult<&Order> {
        if let Some(existing) = &self.order {
            warn!(order_id = %existing.id(), "Rejected second order for the same cart");
            return Err(CoreError::AlreadyOrdered {
                order_id: existing.id(),
            });
        }

        if self.items.is_empty() {
            return Err(CoreError::invalid_state("cannot order an empty cart"));
        }

        let total = self.calculator.calculate_total(&self.items, discount);
        let order = Order::new(self.items.clone(), total)?;

        info!(
            order_id = %order.id(),
            items = order.item_count(),
            total = %total,
            "Order created"
        );

        let order: &Order = self.order.insert(order);

        if let Err(source) = self.notifier.send_order_notification(order, total) {
            warn!(order_id = %order.id(), error = %source, "Order notification failed");
            return Err(CoreError::NotificationDelivery {
                order_id: order.id(),
                source,
            });
        }

        self.notified = true;
        info!(order_id = %order.id(), "Order notification sent");
        Ok(order)
    }

    /// Re-sends the notification for an order whose first dispatch failed.
    ///
    /// No-op if the order was already notified.
    pub fn retry_notification(&mut self) -> CoreResult<()> {
        let order = self
            .order
            .as_ref()
            .ok_or_else(|| CoreError::invalid_state("cart has no order to notify about"))?;

        if self.notified {
            debug!(order_id = %order.id(), "Order already notified, skipping");
            return Ok(());
        }

        self.notifier
            .send_order_notification(order, order.total_price())
            .map_err(|source| {
                warn!(order_id = %order.id(), error = %source, "Order notification retry failed");
                CoreError::NotificationDelivery {
                    order_id: order.id(),
                    source,
                }
            })?;

        self.notified = true;
        info!(order_id = %order.id(), "Order notification sent on retry");
        Ok(())
    }

    /// Current items.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// The produced order, if any.
    pub fn order(&self) -> Option<&Order> {
        self.order.as_ref()
    }

    /// True once the order exists and its notification went through.
    pub fn is_notified(&self) -> bool {
        self.notified
    }

    pub fn state(&self) -> CartState {
        match (&self.order, self.items.is_empty()) {
            (Some(_), _) => CartState::Ordered,
            (None, true) => CartState::Empty,
            (None, false) => CartState::Populated,
        }
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl fmt::Debug for Cart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cart")
            .field("items", &self.items)
            .field("order", &self.order)
            .field("notified", &self.notified)
            .field("calculator", &self.calculator)
            .finish_non_exhaustive()
    }
}
