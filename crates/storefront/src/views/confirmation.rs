//! Order confirmation shown after checkout.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use threadbare_core::{Cart, CartLineItem, Price};
use uuid::Uuid;

use crate::error::add_breadcrumb;

pub const THANK_YOU_HEADLINE: &str = "Thank You for Your Purchase!";
pub const THANK_YOU_MESSAGE: &str = "Your order has been placed successfully.";

/// Snapshot of the cart at the moment the order was placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderConfirmation {
    pub order_id: Uuid,
    pub placed_at: DateTime<Utc>,
    pub lines: Vec<CartLineItem>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    pub item_count: u64,
}

impl OrderConfirmation {
    /// Copy the cart's lines into a new order with a fresh ID.
    #[must_use]
    pub fn from_cart(cart: &Cart) -> Self {
        Self {
            order_id: Uuid::new_v4(),
            placed_at: Utc::now(),
            lines: cart.lines().cloned().collect(),
            total: cart.total(),
            item_count: cart.item_count(),
        }
    }

    #[must_use]
    pub const fn headline(&self) -> &'static str {
        THANK_YOU_HEADLINE
    }

    #[must_use]
    pub const fn message(&self) -> &'static str {
        THANK_YOU_MESSAGE
    }

    /// The order total formatted for display.
    #[must_use]
    pub fn total_display(&self) -> String {
        Price::usd(self.total).display()
    }
}

/// Place an order for the current cart contents.
///
/// No payment or fulfilment happens; the cart is left as it was.
#[must_use]
pub fn checkout(cart: &Cart) -> OrderConfirmation {
    let order = OrderConfirmation::from_cart(cart);

    let order_id = order.order_id.to_string();
    add_breadcrumb(
        "checkout",
        "Order placed",
        Some(&[("order_id", order_id.as_str())]),
    );
    tracing::info!(
        order_id = %order.order_id,
        lines = order.lines.len(),
        items = order.item_count,
        total = %order.total,
        "Order placed"
    );
    order
}
