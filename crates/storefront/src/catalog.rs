//! Product catalog loading.
//!
//! The catalog is fetched exactly once at startup from either an HTTP(S)
//! endpoint or a local JSON file. A load either succeeds completely or
//! leaves the storefront with an empty catalog: one malformed record, a
//! negative price or a duplicated ID rejects the whole document. There is no
//! retry and no timeout beyond what the transport imposes.

use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, info, instrument};
use url::Url;

use threadbare_core::{Category, FilterState, Product, ProductError, ProductId, Size};

use crate::error::AppError;

/// Errors that can occur while loading the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The configured location is not a usable URL or path.
    #[error("Invalid catalog location {location}: {reason}")]
    InvalidLocation { location: String, reason: String },

    /// HTTP request failed or returned a non-success status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Reading the local catalog file failed.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not a JSON array of product records.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A record parsed but violates a product invariant.
    #[error("Invalid product: {0}")]
    InvalidProduct(#[from] ProductError),

    /// Two records share an ID.
    #[error("Duplicate product id: {0}")]
    DuplicateId(ProductId),
}

// =============================================================================
// CatalogSource
// =============================================================================

/// Where the catalog document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// Fetched with an HTTP GET.
    Http(Url),
    /// Read from the local filesystem.
    File(PathBuf),
}

impl CatalogSource {
    /// Interpret a configured location.
    ///
    /// `http://` and `https://` URLs become [`CatalogSource::Http`], `file://`
    /// URLs and anything else are treated as filesystem paths.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidLocation` for malformed URLs.
    pub fn parse(location: &str) -> Result<Self, CatalogError> {
        let invalid = |reason: String| CatalogError::InvalidLocation {
            location: location.to_string(),
            reason,
        };

        let lower = location.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            return Url::parse(location)
                .map(Self::Http)
                .map_err(|e| invalid(e.to_string()));
        }
        if lower.starts_with("file://") {
            let url = Url::parse(location).map_err(|e| invalid(e.to_string()))?;
            return url
                .to_file_path()
                .map(Self::File)
                .map_err(|()| invalid("not a local file path".to_string()));
        }
        Ok(Self::File(PathBuf::from(location)))
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(url) => write!(f, "{url}"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// The loaded, read-only product catalog.
///
/// Products keep the order of the source document.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    index: HashMap<ProductId, usize>,
}

impl Catalog {
    /// A catalog with no products.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a catalog, validating every product and ID uniqueness.
    ///
    /// # Errors
    ///
    /// Returns the first `InvalidProduct` or `DuplicateId` encountered.
    pub fn from_products(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(products.len());
        for (position, product) in products.iter().enumerate() {
            product.validate()?;
            if index.insert(product.id, position).is_some() {
                return Err(CatalogError::DuplicateId(product.id));
            }
        }
        Ok(Self { products, index })
    }

    /// Parse a catalog document (a JSON array of product records).
    ///
    /// # Errors
    ///
    /// Returns `Parse` for malformed JSON, otherwise see [`Catalog::from_products`].
    pub fn from_json(bytes: &[u8]) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_slice(bytes)?;
        Self::from_products(products)
    }

    /// All products in source order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.index
            .get(&id)
            .and_then(|&position| self.products.get(position))
    }

    /// Products matching the given filter, in source order.
    #[must_use]
    pub fn filter(&self, state: &FilterState) -> Vec<&Product> {
        threadbare_core::filter(&self.products, state)
    }

    /// Distinct categories in first-seen order, for the category dropdown.
    #[must_use]
    pub fn categories(&self) -> Vec<&Category> {
        distinct(self.products.iter().map(|p| &p.category))
    }

    /// Distinct sizes in first-seen order, for the size dropdown.
    #[must_use]
    pub fn sizes(&self) -> Vec<&Size> {
        distinct(self.products.iter().map(|p| &p.size))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

fn distinct<'a, T: PartialEq>(values: impl Iterator<Item = &'a T>) -> Vec<&'a T> {
    let mut seen: Vec<&T> = Vec::new();
    for value in values {
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}

// =============================================================================
// CatalogLoader
// =============================================================================

/// Fetches the catalog document from its source.
#[derive(Debug, Clone, Default)]
pub struct CatalogLoader {
    client: reqwest::Client,
}

impl CatalogLoader {
    /// Create a loader with a default HTTP client.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch and parse the catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the document cannot be read, is not valid
    /// JSON, or contains an invalid product.
    #[instrument(skip(self, source), fields(source = %source))]
    pub async fn fetch(&self, source: &CatalogSource) -> Result<Catalog, CatalogError> {
        let bytes = match source {
            CatalogSource::Http(url) => {
                let response = self.client.get(url.clone()).send().await?;
                let response = response.error_for_status()?;
                response.bytes().await?.to_vec()
            }
            CatalogSource::File(path) => {
                tokio::fs::read(path)
                    .await
                    .map_err(|source| CatalogError::Io {
                        path: path.clone(),
                        source,
                    })?
            }
        };
        debug!(bytes = bytes.len(), "Catalog document received");

        let catalog = Catalog::from_json(&bytes)?;
        info!(products = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }

    /// Fetch the catalog, falling back to an empty one on failure.
    ///
    /// Failures are reported to Sentry and logged; they are never retried.
    pub async fn load(&self, source: &CatalogSource) -> Catalog {
        match self.fetch(source).await {
            Ok(catalog) => catalog,
            Err(err) => {
                AppError::from(err).report();
                Catalog::empty()
            }
        }
    }
}
