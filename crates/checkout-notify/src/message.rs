//! # Order Message Rendering
//!
//! Turns an order into the subject and body sent to managers.
//!
//! ## Text Layout
//! ```text
//! Subject: [Orders] New order 6f1c...e2 (2 items, total 240.00)
//!
//! Order 6f1c...e2
//! Placed: 2024-05-01T10:15:00+00:00
//!
//!   Widget      50.00
//!   Gadget     150.00
//!
//! Total (VAT and discounts included): 240.00
//! ```

use checkout_core::{Money, Order};
use serde::Serialize;

use crate::config::{MessageFormat, MessageSettings};
use crate::error::NotifyResult;
use crate::mailer::OutgoingMessage;

#[derive(Serialize)]
struct JsonLine<'a> {
    name: &'a str,
    price: String,
}

#[derive(Serialize)]
struct JsonSummary<'a> {
    order_id: String,
    placed_at: String,
    item_count: usize,
    items: Vec<JsonLine<'a>>,
    total: String,
}

/// Renders the notification for `order`.
///
/// `total_price` is the figure handed over by the pipeline and is what the
/// message reports as the total.
pub fn render(
    order: &Order,
    total_price: Money,
    settings: &MessageSettings,
) -> NotifyResult<OutgoingMessage> {
    let subject = format!(
        "{} New order {} ({} item{}, total {})",
        settings.subject_prefix,
        order.id(),
        order.item_count(),
        if order.item_count() == 1 { "" } else { "s" },
        total_price
    );

    let body = match settings.format {
        MessageFormat::Text => render_text(order, total_price),
        MessageFormat::Json => render_json(order, total_price)?,
    };

    Ok(OutgoingMessage {
        subject: subject.trim_start().to_string(),
        body,
    })
}

fn render_text(order: &Order, total_price: Money) -> String {
    let width = order
        .items()
        .iter()
        .map(|item| item.name().chars().count())
        .max()
        .unwrap_or(0);

    let mut body = format!(
        "Order {}\nPlaced: {}\n\n",
        order.id(),
        order.created_at().to_rfc3339()
    );
    for item in order.items() {
        body.push_str(&format!(
            "  {:<width$}  {:>10}\n",
            item.name(),
            item.price().to_string(),
            width = width
        ));
    }
    body.push_str(&format!(
        "\nTotal (VAT and discounts included): {}\n",
        total_price
    ));
    body
}

fn render_json(order: &Order, total_price: Money) -> NotifyResult<String> {
    let summary = JsonSummary {
        order_id: order.id().to_string(),
        placed_at: order.created_at().to_rfc3339(),
        item_count: order.item_count(),
        items: order
            .items()
            .iter()
            .map(|item| JsonLine {
                name: item.name(),
                price: item.price().amount().to_string(),
            })
            .collect(),
        total: total_price.amount().to_string(),
    };

    Ok(serde_json::to_string_pretty(&summary)?)
}
