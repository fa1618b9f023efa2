//! Application state shared across the storefront.

use std::sync::Arc;

use crate::catalog::{Catalog, CatalogLoader};
use crate::config::StorefrontConfig;

/// Application state shared across all views.
///
/// This struct is cheaply cloneable via `Arc`. The catalog is loaded once
/// and never changes afterwards.
#[derive(Debug, Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

#[derive(Debug)]
struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
}

impl AppState {
    /// Create a new application state from an already loaded catalog.
    #[must_use]
    pub fn new(config: StorefrontConfig, catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, catalog }),
        }
    }

    /// Load the catalog from the configured source and build the state.
    ///
    /// A failed load is reported and leaves the storefront with an empty
    /// catalog.
    pub async fn load(config: StorefrontConfig) -> Self {
        let catalog = CatalogLoader::new().load(&config.catalog_source).await;
        Self::new(config, catalog)
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }
}
