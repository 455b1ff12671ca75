//! # Error Types
//!
//! Domain-specific error types for checkout-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  checkout-core errors (this file)                                      │
//! │  ├── CoreError          - Pipeline and construction failures           │
//! │  └── ValidationError    - Field-level range checks                     │
//! │                                                                         │
//! │  notification boundary (notification.rs)                               │
//! │  └── NotificationError  - Channel rejected / unreachable               │
//! │                                                                         │
//! │  Flow: ValidationError ─► CoreError::InvalidConfiguration (build time) │
//! │        NotificationError ─► CoreError::NotificationDelivery (call time)│
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## When Each Error Fires
//! - Construction time: `InvalidConfiguration`, `InvalidItem`
//! - Before an order exists: `InvalidState`, `AlreadyOrdered`, `CartTooLarge`
//! - After the order exists: `NotificationDelivery` only

use rust_decimal::Decimal;
use thiserror::Error;

use crate::notification::NotificationError;
use crate::types::OrderId;

// =============================================================================
// Core Error
// =============================================================================

/// Checkout pipeline errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A VAT rate or discount policy was built with out-of-range values.
    ///
    /// Raised only by constructors, so a pipeline run never sees it.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(ValidationError),

    /// An item was built with invalid data (e.g. a negative price).
    #[error("Invalid item: {0}")]
    InvalidItem(ValidationError),

    /// Data violates an invariant of the value being built.
    ///
    /// ## When This Occurs
    /// - Ordering an empty cart
    /// - Order total came out negative (upstream defect)
    /// - Adding items to a cart that has already been ordered
    #[error("Invalid state: {reason}")]
    InvalidState { reason: String },

    /// The cart already produced its order; a second run is rejected.
    #[error("Cart already ordered (order {order_id})")]
    AlreadyOrdered { order_id: OrderId },

    /// Cart has exceeded maximum allowed items.
    #[error("Cart cannot have more than {max} items")]
    CartTooLarge { max: usize },

    /// The order was created and recorded, but the notification failed.
    ///
    /// ## User Workflow
    /// ```text
    /// make_order()
    ///      │
    ///      ├── total computed      ✓
    ///      ├── order recorded      ✓  (order_id below stays valid)
    ///      └── notification sent   ✗  ──► NotificationDelivery
    /// ```
    #[error("Order {order_id} created but notification failed: {source}")]
    NotificationDelivery {
        order_id: OrderId,
        #[source]
        source: NotificationError,
    },
}

impl CoreError {
    /// Builds an `InvalidState` error from any message.
    pub fn invalid_state(reason: impl Into<String>) -> Self {
        CoreError::InvalidState {
            reason: reason.into(),
        }
    }

    /// Returns true if the failure happened after the order was recorded.
    ///
    /// Callers use this to decide whether the order itself is still valid.
    pub fn is_notification_failure(&self) -> bool {
        matches!(self, CoreError::NotificationDelivery { .. })
    }

    /// Returns true if a policy object was built with bad parameters.
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, CoreError::InvalidConfiguration(_))
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Field-level validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: String,
        min: Decimal,
        max: Decimal,
        value: Decimal,
    },

    /// Value must not be negative.
    #[error("{field} must not be negative, got {value}")]
    Negative { field: String, value: Decimal },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
