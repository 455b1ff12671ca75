//! # checkout-core: Pure Pricing-and-Fulfillment Pipeline
//!
//! Computes a cart's total under a VAT policy and a discount strategy,
//! materializes an immutable order, and hands it to an injected notification
//! capability.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Checkout Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │            Host application (out of scope)                      │   │
//! │  │    sessions, persistence, entry points                          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Cart::make_order(&discount)            │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            ★ checkout-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌────────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   cart    │─►│  pricing   │─►│    vat    │  │ discount  │  │   │
//! │  │   │   Cart    │  │ PriceCalc  │  │ VatManager│  │ Strategy  │  │   │
//! │  │   └─────┬─────┘  └────────────┘  └───────────┘  └───────────┘  │   │
//! │  │         │        ┌────────────┐  ┌──────────────────────────┐  │   │
//! │  │         ├───────►│   order    │  │ notification (trait)     │  │   │
//! │  │         │        └────────────┘  └────────────▲─────────────┘  │   │
//! │  │         └─────────────────────────────────────┘                 │   │
//! │  │   NO I/O • NO CREDENTIALS • PURE CALCULATIONS                   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │       checkout-notify (NotificationService implementation)      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Exact decimal `Money`
//! - [`types`] - `Rate`, `Item`, `OrderId`
//! - [`vat`] - `VatManager`
//! - [`discount`] - `DiscountStrategy` and its variants
//! - [`pricing`] - `PriceCalculator`
//! - [`order`] - immutable `Order`
//! - [`notification`] - `NotificationService` boundary
//! - [`cart`] - `Cart` orchestrator
//! - [`error`] / [`validation`] - error types and range checks
//!
//! ## Example Usage
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use checkout_core::{
//!     Cart, Item, Money, NotificationError, NotificationService, Order,
//!     PercentageDiscount, PriceCalculator, VatManager,
//! };
//! use rust_decimal::Decimal;
//!
//! struct Silent;
//!
//! impl NotificationService for Silent {
//!     fn send_order_notification(&self, _: &Order, _: Money) -> Result<(), NotificationError> {
//!         Ok(())
//!     }
//! }
//!
//! let vat = VatManager::new(Decimal::new(18, 2)).unwrap(); // 18%
//! let calculator = Arc::new(PriceCalculator::new(vat));
//! let mut cart = Cart::new(calculator, Arc::new(Silent));
//!
//! cart.add_item(Item::new("Widget", Money::from_cents(10000)).unwrap()).unwrap();
//!
//! let discount = PercentageDiscount::new(Decimal::new(1, 1)).unwrap(); // 10%
//! let order = cart.make_order(&discount).unwrap();
//!
//! // 100 × 0.9 × 1.18
//! assert_eq!(order.total_price().amount(), Decimal::new(1062, 1));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod discount;
pub mod error;
pub mod money;
pub mod notification;
pub mod order;
pub mod pricing;
pub mod types;
pub mod validation;
pub mod vat;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartState};
pub use discount::{DiscountStrategy, FixedAmountDiscount, NoDiscount, PercentageDiscount};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use notification::{NotificationError, NotificationService};
pub use order::Order;
pub use pricing::PriceCalculator;
pub use types::{Item, OrderId, Rate};
pub use vat::VatManager;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum items allowed in a single cart.
pub const MAX_CART_ITEMS: usize = 100;

/// Maximum unit price of an item (1,000,000,000).
///
/// ## Business Reason
/// Catches mistyped prices. Together with `MAX_CART_ITEMS` and a VAT rate of
/// at most 100% it also bounds a cart total far below `Decimal::MAX`, so the
/// pipeline's arithmetic cannot overflow.
pub const MAX_ITEM_PRICE: rust_decimal::Decimal =
    rust_decimal::Decimal::from_parts(1_000_000_000, 0, 0, false, 0);
