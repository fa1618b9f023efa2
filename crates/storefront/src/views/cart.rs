//! Cart view.
//!
//! Display rows for the cart page plus the quantity controls and the
//! "removed from the cart" notice.

use threadbare_core::{Cart, CartLineItem, Price, ProductId};
use tracing::instrument;

use crate::error::add_breadcrumb;
use crate::notice::NoticeSlot;

/// Line item display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLineRow {
    pub product_id: ProductId,
    pub name: String,
    pub image: String,
    /// Unit price.
    pub price: String,
    pub quantity: u32,
    /// Unit price times quantity.
    pub subtotal: String,
}

impl From<&CartLineItem> for CartLineRow {
    fn from(line: &CartLineItem) -> Self {
        Self {
            product_id: line.product_id,
            name: line.name.clone(),
            image: line.image.clone(),
            price: line.unit_price().display(),
            quantity: line.quantity.get(),
            subtotal: Price::usd(line.subtotal()).display(),
        }
    }
}

/// Cart display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSummary {
    pub rows: Vec<CartLineRow>,
    pub subtotal: String,
    pub total: String,
    pub item_count: u64,
}

impl CartSummary {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl From<&Cart> for CartSummary {
    fn from(cart: &Cart) -> Self {
        // No shipping or tax, so both figures are the same sum.
        let total = cart.total_price().display();
        Self {
            rows: cart.lines().map(CartLineRow::from).collect(),
            subtotal: total.clone(),
            total,
            item_count: cart.item_count(),
        }
    }
}

/// State of the cart screen.
#[derive(Debug, Clone, Default)]
pub struct CartView {
    notice: NoticeSlot,
}

impl CartView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn summary(&self, cart: &Cart) -> CartSummary {
        CartSummary::from(cart)
    }

    /// The "+" button.
    pub fn increment(&mut self, cart: &mut Cart, product_id: ProductId) -> bool {
        cart.increment(product_id)
    }

    /// The "-" button. Stops at one.
    pub fn decrement(&mut self, cart: &mut Cart, product_id: ProductId) -> bool {
        cart.decrement(product_id)
    }

    /// Quantity typed into a line's input, clamped to at least one.
    pub fn set_quantity(&mut self, cart: &mut Cart, product_id: ProductId, requested: i64) -> bool {
        cart.update_quantity(product_id, requested)
    }

    /// Remove a line and announce it. Unknown IDs do nothing.
    #[instrument(skip_all, fields(product_id = %product_id))]
    pub fn remove_item(&mut self, cart: &mut Cart, product_id: ProductId) -> Option<CartLineItem> {
        let removed = cart.remove(product_id)?;

        let id = product_id.to_string();
        add_breadcrumb(
            "cart",
            "Removed from cart",
            Some(&[("product_id", id.as_str())]),
        );
        self.notice
            .post(format!("Removed {} from the cart.", removed.name));
        Some(removed)
    }

    #[must_use]
    pub const fn notice(&self) -> &NoticeSlot {
        &self.notice
    }

    pub const fn notice_mut(&mut self) -> &mut NoticeSlot {
        &mut self.notice
    }
}
