//! # Notification Boundary
//!
//! The capability the cart calls to announce a new order. Delivery (mail,
//! SMS, push) is external; this crate only defines the contract.
//!
//! ## Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Cart ──► NotificationService::send_order_notification(order, total)   │
//! │                     │                                                   │
//! │                     ├── Ok(())                  delivered               │
//! │                     ├── Err(Rejected)           channel said no         │
//! │                     └── Err(Unreachable)        channel not reachable   │
//! │                                                                         │
//! │  • Synchronous; the only call in the pipeline that may block on I/O    │
//! │  • Injected into the cart, never constructed by it                     │
//! │  • Retries, if any, belong to the implementation                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use crate::money::Money;
use crate::order::Order;

/// Notification delivery failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotificationError {
    /// The channel refused the message. Retrying will not help.
    #[error("Notification rejected by channel: {0}")]
    Rejected(String),

    /// The channel could not be reached.
    #[error("Notification channel unreachable: {0}")]
    Unreachable(String),
}

impl NotificationError {
    /// Returns true if a later attempt might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, NotificationError::Unreachable(_))
    }
}

/// Dispatches an order summary to an external channel.
///
/// Implementations must be shareable across carts and hold no reference back
/// to any cart.
pub trait NotificationService: Send + Sync {
    fn send_order_notification(
        &self,
        order: &Order,
        total_price: Money,
    ) -> Result<(), NotificationError>;
}
