//! Threadbare storefront.
//!
//! Reads configuration from the environment, sets up error tracking and
//! logging, then loads the product catalog and reports what it found.

#![cfg_attr(not(test), forbid(unsafe_code))]

use threadbare_core::{Category, Size};
use threadbare_storefront::config::StorefrontConfig;
use threadbare_storefront::state::AppState;
use threadbare_storefront::telemetry::{init_sentry, init_tracing};

#[tokio::main]
async fn main() {
    // Load configuration from environment (needed for Sentry init)
    let config = StorefrontConfig::from_env().expect("Failed to load configuration");

    // Initialize Sentry (must be done before tracing subscriber)
    let _sentry_guard = init_sentry(&config);
    init_tracing();

    let state = AppState::load(config).await;
    let catalog = state.catalog();

    let categories: Vec<&str> = catalog
        .categories()
        .into_iter()
        .map(Category::as_str)
        .collect();
    let sizes: Vec<&str> = catalog.sizes().into_iter().map(Size::as_str).collect();
    tracing::info!(
        source = %state.config().catalog_source,
        products = catalog.len(),
        categories = ?categories,
        sizes = ?sizes,
        "Storefront ready"
    );
}
