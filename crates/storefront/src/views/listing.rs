//! Product listing view.
//!
//! Holds the filter selections, the per-product quantity inputs, the
//! multi-select checkboxes and the "added to cart" notice.

use std::collections::{HashMap, HashSet};

use threadbare_core::{Cart, FilterState, Product, ProductId, Quantity};
use tracing::instrument;

use crate::catalog::Catalog;
use crate::error::add_breadcrumb;
use crate::notice::NoticeSlot;

/// Shown in place of the grid when no product matches the filters.
pub const NO_RESULTS_MESSAGE: &str = "No Result Found";

/// Product display data for the listing grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub id: ProductId,
    pub name: String,
    pub image: String,
    pub price: String,
    pub category: String,
    pub size: String,
    pub color: Option<String>,
    pub in_stock: bool,
    pub stock_label: &'static str,
    /// Value of the quantity input.
    pub quantity: u32,
    /// Whether the checkbox is ticked.
    pub selected: bool,
}

/// State of the listing screen.
#[derive(Debug, Clone, Default)]
pub struct ListingView {
    filters: FilterState,
    quantities: HashMap<ProductId, Quantity>,
    selected: HashSet<ProductId>,
    notice: NoticeSlot,
}

impl ListingView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Filters
    // -------------------------------------------------------------------------

    #[must_use]
    pub const fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Category dropdown changed ("" means all categories).
    pub fn set_category(&mut self, category: &str) {
        self.filters.set_category(category);
    }

    /// Size dropdown changed ("" means all sizes).
    pub fn set_size(&mut self, size: &str) {
        self.filters.set_size(size);
    }

    /// Search box changed.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.filters.set_search(term);
    }

    /// Products that pass the current filters, in catalog order.
    #[must_use]
    pub fn visible<'c>(&self, catalog: &'c Catalog) -> Vec<&'c Product> {
        catalog.filter(&self.filters)
    }

    /// Cards for the visible products.
    #[must_use]
    pub fn cards(&self, catalog: &Catalog) -> Vec<ProductCard> {
        self.visible(catalog)
            .into_iter()
            .map(|product| self.card(product))
            .collect()
    }

    /// [`NO_RESULTS_MESSAGE`] when the filters hide every product.
    #[must_use]
    pub fn empty_message(&self, catalog: &Catalog) -> Option<&'static str> {
        self.visible(catalog).is_empty().then_some(NO_RESULTS_MESSAGE)
    }

    fn card(&self, product: &Product) -> ProductCard {
        ProductCard {
            id: product.id,
            name: product.name.clone(),
            image: product.image.clone(),
            price: product.unit_price().display(),
            category: product.category.to_string(),
            size: product.size.to_string(),
            color: product.color.clone(),
            in_stock: product.in_stock,
            stock_label: if product.in_stock {
                "In stock"
            } else {
                "Out of stock"
            },
            quantity: self.quantity_for(product.id).get(),
            selected: self.is_selected(product.id),
        }
    }

    // -------------------------------------------------------------------------
    // Quantity inputs
    // -------------------------------------------------------------------------

    /// Record raw input from a product's quantity field.
    ///
    /// Unparseable input counts as one; values below one are clamped.
    pub fn set_quantity_input(&mut self, product_id: ProductId, input: &str) {
        self.quantities
            .insert(product_id, Quantity::from_input(input));
    }

    /// The pending quantity for a product (one until the user changes it).
    #[must_use]
    pub fn quantity_for(&self, product_id: ProductId) -> Quantity {
        self.quantities
            .get(&product_id)
            .copied()
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Adding to the cart
    // -------------------------------------------------------------------------

    /// Add one product with its pending quantity and announce it.
    #[instrument(skip_all, fields(product_id = %product.id))]
    pub fn add_to_cart(&mut self, cart: &mut Cart, product: &Product) {
        let quantity = self.quantity_for(product.id);
        cart.add(product, quantity);

        let product_id = product.id.to_string();
        let units = quantity.to_string();
        add_breadcrumb(
            "cart",
            "Added to cart",
            Some(&[("product_id", product_id.as_str()), ("quantity", units.as_str())]),
        );
        self.notice.post(format!("{} added to cart!", product.name));
    }

    /// Tick or untick a product's checkbox. Returns the new state.
    pub fn toggle_selected(&mut self, product_id: ProductId) -> bool {
        if self.selected.remove(&product_id) {
            false
        } else {
            self.selected.insert(product_id)
        }
    }

    #[must_use]
    pub fn is_selected(&self, product_id: ProductId) -> bool {
        self.selected.contains(&product_id)
    }

    /// Number of ticked checkboxes.
    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Add every ticked product with its pending quantity, then clear the
    /// selection. Products are added in catalog order; IDs no longer in the
    /// catalog are skipped. Returns how many products were added.
    #[instrument(skip_all, fields(selected = self.selected.len()))]
    pub fn add_selected(&mut self, cart: &mut Cart, catalog: &Catalog) -> usize {
        let chosen: Vec<&Product> = catalog
            .products()
            .iter()
            .filter(|product| self.selected.contains(&product.id))
            .collect();

        for product in &chosen {
            cart.add(product, self.quantity_for(product.id));
        }
        self.selected.clear();

        match chosen.as_slice() {
            [] => {}
            [only] => self.notice.post(format!("{} added to cart!", only.name)),
            many => self
                .notice
                .post(format!("{} products added to cart!", many.len())),
        }
        if !chosen.is_empty() {
            let count = chosen.len().to_string();
            add_breadcrumb(
                "cart",
                "Added selection to cart",
                Some(&[("products", count.as_str())]),
            );
        }
        chosen.len()
    }

    // -------------------------------------------------------------------------
    // Notice
    // -------------------------------------------------------------------------

    #[must_use]
    pub const fn notice(&self) -> &NoticeSlot {
        &self.notice
    }

    pub const fn notice_mut(&mut self) -> &mut NoticeSlot {
        &mut self.notice
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"[
        {"id": 1, "name": "Zip Hoodie", "price": 40, "category": "Hoodie", "size": "M", "color": "Grey", "image": "/img/1.png", "instock": true},
        {"id": 2, "name": "Classic Tee", "price": 19.99, "category": "T-shirt", "size": "S", "image": "/img/2.png", "instock": false},
        {"id": 3, "name": "Pullover Hoodie", "price": 45.5, "category": "Hoodie", "size": "L", "color": "Navy", "image": "/img/3.png", "instock": true}
    ]"#;

    fn catalog() -> Catalog {
        Catalog::from_json(CATALOG.as_bytes()).unwrap()
    }

    fn product(catalog: &Catalog, id: i32) -> &Product {
        catalog.get(ProductId::new(id)).unwrap()
    }

    #[test]
    fn test_cards_follow_filters() {
        let catalog = catalog();
        let mut view = ListingView::new();
        view.set_category("Hoodie");

        let names: Vec<String> = view.cards(&catalog).into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Zip Hoodie", "Pullover Hoodie"]);

        view.set_category("");
        assert_eq!(view.cards(&catalog).len(), 3);
    }

    #[test]
    fn test_card_display_fields() {
        let catalog = catalog();
        let view = ListingView::new();
        let cards = view.cards(&catalog);
        let tee = cards.iter().find(|c| c.id == ProductId::new(2)).unwrap();

        assert_eq!(tee.price, "$19.99");
        assert_eq!(tee.stock_label, "Out of stock");
        assert_eq!(tee.color, None);
        assert_eq!(tee.quantity, 1);
        assert!(!tee.selected);
    }

    #[test]
    fn test_empty_message() {
        let catalog = catalog();
        let mut view = ListingView::new();
        assert_eq!(view.empty_message(&catalog), None);

        view.set_search("socks");
        assert_eq!(view.empty_message(&catalog), Some(NO_RESULTS_MESSAGE));
    }

    #[test]
    fn test_quantity_input_is_clamped() {
        let mut view = ListingView::new();
        let id = ProductId::new(1);

        view.set_quantity_input(id, "3");
        assert_eq!(view.quantity_for(id).get(), 3);
        view.set_quantity_input(id, "-2");
        assert_eq!(view.quantity_for(id).get(), 1);
        view.set_quantity_input(id, "");
        assert_eq!(view.quantity_for(id).get(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_add_to_cart_uses_pending_quantity_and_notifies() {
        let catalog = catalog();
        let mut cart = Cart::new();
        let mut view = ListingView::new();
        let hoodie = product(&catalog, 1);

        view.set_quantity_input(hoodie.id, "2");
        view.add_to_cart(&mut cart, hoodie);
        view.add_to_cart(&mut cart, hoodie);

        assert_eq!(cart.quantity_of(hoodie.id).map(Quantity::get), Some(4));
        assert_eq!(view.notice().message(), Some("Zip Hoodie added to cart!"));

        view.notice_mut().expired().await;
        assert_eq!(view.notice().message(), None);
    }

    #[test]
    fn test_toggle_selected() {
        let mut view = ListingView::new();
        let id = ProductId::new(3);

        assert!(view.toggle_selected(id));
        assert!(view.is_selected(id));
        assert!(!view.toggle_selected(id));
        assert_eq!(view.selected_count(), 0);
    }

    #[tokio::test]
    async fn test_add_selected_adds_in_catalog_order_and_clears() {
        let catalog = catalog();
        let mut cart = Cart::new();
        let mut view = ListingView::new();

        view.toggle_selected(ProductId::new(3));
        view.toggle_selected(ProductId::new(1));
        view.toggle_selected(ProductId::new(99));
        view.set_quantity_input(ProductId::new(3), "2");

        assert_eq!(view.add_selected(&mut cart, &catalog), 2);

        let order: Vec<i32> = cart.lines().map(|l| l.product_id.as_i32()).collect();
        assert_eq!(order, vec![1, 3]);
        assert_eq!(cart.quantity_of(ProductId::new(3)).map(Quantity::get), Some(2));
        assert_eq!(view.selected_count(), 0);
        assert_eq!(view.notice().message(), Some("2 products added to cart!"));
    }

    #[tokio::test]
    async fn test_add_selected_single_names_product() {
        let catalog = catalog();
        let mut cart = Cart::new();
        let mut view = ListingView::new();

        view.toggle_selected(ProductId::new(2));
        assert_eq!(view.add_selected(&mut cart, &catalog), 1);
        assert_eq!(view.notice().message(), Some("Classic Tee added to cart!"));
    }

    #[test]
    fn test_add_selected_with_nothing_selected() {
        let catalog = catalog();
        let mut cart = Cart::new();
        let mut view = ListingView::new();

        assert_eq!(view.add_selected(&mut cart, &catalog), 0);
        assert!(cart.is_empty());
        assert_eq!(view.notice().message(), None);
    }
}
