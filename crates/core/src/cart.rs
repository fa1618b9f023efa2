//! The shopping cart.
//!
//! Line items are stored in an [`IndexMap`] keyed by [`ProductId`], so there is
//! structurally at most one line per product while iteration still follows
//! the order in which products were first added.
//!
//! Every operation is permissive: unknown product IDs are ignored and
//! quantities are clamped instead of rejected.

use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{Price, Product, ProductId, Quantity};

/// A line in the cart.
///
/// Name, price and image are copied from the product when it is first added
/// and do not follow later catalog changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub product_id: ProductId,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub image: String,
    pub quantity: Quantity,
}

impl CartLineItem {
    fn new(product: &Product, quantity: Quantity) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity,
        }
    }

    /// Unit price times quantity, unrounded. Saturates at [`Decimal::MAX`].
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.price
            .checked_mul(Decimal::from(self.quantity.get()))
            .unwrap_or(Decimal::MAX)
    }

    /// The unit price as a displayable [`Price`].
    #[must_use]
    pub const fn unit_price(&self) -> Price {
        Price::usd(self.price)
    }
}

/// An in-memory cart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: IndexMap<ProductId, CartLineItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` units of `product`.
    ///
    /// If the product is already in the cart its quantity grows by `quantity`
    /// (saturating); otherwise a new line is appended at the end.
    pub fn add(&mut self, product: &Product, quantity: Quantity) -> &CartLineItem {
        self.lines
            .entry(product.id)
            .and_modify(|line| line.quantity = line.quantity.saturating_add(quantity))
            .or_insert_with(|| CartLineItem::new(product, quantity))
    }

    /// Set the quantity of an existing line, clamping to at least one.
    ///
    /// Returns `false` (and changes nothing) if the product is not in the cart.
    pub fn update_quantity(&mut self, product_id: ProductId, requested: i64) -> bool {
        self.lines.get_mut(&product_id).is_some_and(|line| {
            line.quantity = Quantity::clamped(requested);
            true
        })
    }

    /// Increase a line's quantity by one.
    pub fn increment(&mut self, product_id: ProductId) -> bool {
        let current = self.quantity_of(product_id);
        current.is_some_and(|q| self.update_quantity(product_id, i64::from(q.get()) + 1))
    }

    /// Decrease a line's quantity by one, stopping at one.
    pub fn decrement(&mut self, product_id: ProductId) -> bool {
        let current = self.quantity_of(product_id);
        current.is_some_and(|q| self.update_quantity(product_id, i64::from(q.get()) - 1))
    }

    /// Remove a line, returning it if it was present.
    ///
    /// The relative order of the remaining lines is preserved.
    pub fn remove(&mut self, product_id: ProductId) -> Option<CartLineItem> {
        self.lines.shift_remove(&product_id)
    }

    /// Sum of price × quantity over all lines, unrounded. Saturates at
    /// [`Decimal::MAX`].
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.lines
            .values()
            .map(CartLineItem::subtotal)
            .fold(Decimal::ZERO, |sum, subtotal| {
                sum.checked_add(subtotal).unwrap_or(Decimal::MAX)
            })
    }

    /// The total as a displayable [`Price`].
    #[must_use]
    pub fn total_price(&self) -> Price {
        Price::usd(self.total())
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> impl ExactSizeIterator<Item = &CartLineItem> {
        self.lines.values()
    }

    /// Look up the line for a product.
    #[must_use]
    pub fn get(&self, product_id: ProductId) -> Option<&CartLineItem> {
        self.lines.get(&product_id)
    }

    /// Quantity in the cart for a product, if present.
    #[must_use]
    pub fn quantity_of(&self, product_id: ProductId) -> Option<Quantity> {
        self.get(product_id).map(|line| line.quantity)
    }

    /// Total units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.lines
            .values()
            .map(|line| u64::from(line.quantity.get()))
            .sum()
    }

    /// Number of distinct products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
