//! Integration tests for the Threadbare storefront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p threadbare-integration-tests
//! ```
//!
//! The tests need no external services: catalogs are served from an
//! in-process HTTP server bound to an ephemeral local port.

use std::path::PathBuf;

use axum::{Router, routing::get};
use url::Url;

/// Path of the catalog that ships with the repository.
#[must_use]
pub fn bundled_catalog_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/products.json")
}

/// Serve `body` as JSON at `/products.json` and return its URL.
///
/// The server runs on a background task for the rest of the test.
///
/// # Errors
///
/// Returns an error if no local port can be bound.
pub async fn serve_catalog(body: &'static str) -> std::io::Result<Url> {
    let app = Router::new().route(
        "/products.json",
        get(move || async move { ([("content-type", "application/json")], body) }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("catalog test server failed");
    });

    Url::parse(&format!("http://{addr}/products.json"))
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))
}
