//! End-to-end storefront flows: load a catalog, browse, fill the cart and
//! check out.

#![allow(clippy::unwrap_used)]

use std::time::Duration;

use rust_decimal::Decimal;
use threadbare_core::{Cart, ProductId, Quantity};
use threadbare_integration_tests::{bundled_catalog_path, serve_catalog};
use threadbare_storefront::catalog::CatalogSource;
use threadbare_storefront::config::StorefrontConfig;
use threadbare_storefront::state::AppState;
use threadbare_storefront::views::listing::NO_RESULTS_MESSAGE;
use threadbare_storefront::views::{CartView, ListingView, checkout};

const CATALOG: &str = r#"[
    {"id": 1, "name": "Hoodie", "price": 40, "category": "Hoodie", "size": "M", "image": "/img/1.png", "instock": true},
    {"id": 2, "name": "Striped Tee", "price": 15.5, "category": "T-shirt", "size": "S", "color": "Red", "image": "/img/2.png", "instock": true},
    {"id": 3, "name": "Hooded Jacket", "price": 72.25, "category": "Jacket", "size": "M", "image": "/img/3.png", "instock": false}
]"#;

async fn state_over_http(body: &'static str) -> AppState {
    let url = serve_catalog(body).await.unwrap();
    let config = StorefrontConfig {
        catalog_source: CatalogSource::Http(url),
        ..StorefrontConfig::default()
    };
    AppState::load(config).await
}

#[tokio::test]
async fn test_browse_add_update_remove_checkout() {
    let state = state_over_http(CATALOG).await;
    let catalog = state.catalog();
    assert_eq!(catalog.len(), 3);

    // Freeze the clock once the network is done so notice expiry is exact.
    tokio::time::pause();

    let mut listing = ListingView::new();
    let mut cart = Cart::new();

    // Search is case-insensitive and combines with the size filter.
    listing.set_search("HOOD");
    listing.set_size("M");
    let names: Vec<String> = listing.cards(catalog).into_iter().map(|c| c.name).collect();
    assert_eq!(names, vec!["Hoodie", "Hooded Jacket"]);

    let hoodie = catalog.get(ProductId::new(1)).unwrap();
    listing.set_quantity_input(hoodie.id, "2");
    listing.add_to_cart(&mut cart, hoodie);
    assert_eq!(listing.notice().message(), Some("Hoodie added to cart!"));
    assert_eq!(cart.total(), Decimal::from(80));

    let mut cart_view = CartView::new();
    assert_eq!(cart_view.summary(&cart).total, "$80.00");

    cart_view.set_quantity(&mut cart, hoodie.id, 0);
    assert_eq!(cart.quantity_of(hoodie.id), Some(Quantity::ONE));
    assert_eq!(cart_view.summary(&cart).total, "$40.00");

    let order = checkout(&cart);
    assert_eq!(order.total_display(), "$40.00");
    assert_eq!(order.lines.len(), 1);
    assert_eq!(cart.len(), 1);

    cart_view.remove_item(&mut cart, hoodie.id).unwrap();
    assert!(cart.is_empty());
    assert_eq!(
        cart_view.notice().message(),
        Some("Removed Hoodie from the cart.")
    );

    tokio::time::advance(Duration::from_secs(3)).await;
    assert_eq!(cart_view.notice().message(), None);
}

#[tokio::test]
async fn test_multi_select_then_cart_totals() {
    let state = state_over_http(CATALOG).await;
    let catalog = state.catalog();
    let mut listing = ListingView::new();
    let mut cart = Cart::new();

    listing.toggle_selected(ProductId::new(2));
    listing.toggle_selected(ProductId::new(3));
    listing.set_quantity_input(ProductId::new(2), "3");
    assert_eq!(listing.add_selected(&mut cart, catalog), 2);

    let summary = CartView::new().summary(&cart);
    assert_eq!(summary.item_count, 4);
    assert_eq!(summary.rows[0].subtotal, "$46.50");
    assert_eq!(summary.total, "$118.75");
}

#[tokio::test]
async fn test_filters_with_no_match() {
    let state = state_over_http(CATALOG).await;
    let mut listing = ListingView::new();

    listing.set_category("Jacket");
    listing.set_size("S");
    assert!(listing.cards(state.catalog()).is_empty());
    assert_eq!(
        listing.empty_message(state.catalog()),
        Some(NO_RESULTS_MESSAGE)
    );
}

#[tokio::test]
async fn test_malformed_catalog_leaves_storefront_empty() {
    let state = state_over_http(r#"{"products": "not a list"}"#).await;
    let listing = ListingView::new();

    assert!(state.catalog().is_empty());
    assert_eq!(
        listing.empty_message(state.catalog()),
        Some(NO_RESULTS_MESSAGE)
    );
}

#[tokio::test]
async fn test_bundled_catalog_loads() {
    let config = StorefrontConfig {
        catalog_source: CatalogSource::File(bundled_catalog_path()),
        ..StorefrontConfig::default()
    };
    let state = AppState::load(config).await;
    let catalog = state.catalog();

    assert!(!catalog.is_empty());
    assert!(!catalog.categories().is_empty());
    assert!(!catalog.sizes().is_empty());
}
