//! Shared fixtures for unit tests.
//!
//! `Order` can only be built by a `Cart`, so fixtures go through the real
//! pipeline with a notifier that accepts everything.

use std::sync::Arc;

use checkout_core::{
    Cart, Item, Money, NotificationError, NotificationService, Order, PercentageDiscount,
    PriceCalculator, VatManager,
};
use rust_decimal::Decimal;

struct AcceptAll;

impl NotificationService for AcceptAll {
    fn send_order_notification(&self, _: &Order, _: Money) -> Result<(), NotificationError> {
        Ok(())
    }
}

/// Places an order for items named `item-1`, `item-2`, ... at `prices`.
pub fn place_order(prices: &[Decimal], vat: Decimal, discount: Decimal) -> Order {
    let calculator = PriceCalculator::new(VatManager::new(vat).unwrap());
    let mut cart = Cart::new(Arc::new(calculator), Arc::new(AcceptAll));
    for (i, price) in prices.iter().enumerate() {
        cart.add_item(Item::new(format!("item-{}", i + 1), Money::new(*price)).unwrap())
            .unwrap();
    }
    cart.make_order(&PercentageDiscount::new(discount).unwrap())
        .unwrap()
        .clone()
}
