//! Product records as published by the catalog source.
//!
//! The wire shape is `{id, name, price, category, size, color?, image, instock}`.
//! Products are immutable once loaded; every field is public for reading but
//! nothing in the storefront mutates a loaded product.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::id::ProductId;
use super::price::Price;

/// Defines a string-backed label type compared by exact equality.
macro_rules! define_label {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a label from any string.
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Get the label as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

define_label!(
    /// Product category (e.g., "Hoodie", "T-shirt").
    Category
);

define_label!(
    /// Garment size (e.g., "S", "M", "L").
    Size
);

/// A product record failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProductError {
    /// Prices must be zero or greater.
    #[error("product {id} has negative price {price}")]
    NegativePrice { id: ProductId, price: Decimal },

    /// Names are shown in listings and notifications, so they cannot be blank.
    #[error("product {id} has an empty name")]
    EmptyName { id: ProductId },
}

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique, stable product identifier.
    pub id: ProductId,
    /// Display name; the free-text search matches against this.
    pub name: String,
    /// Unit price in US dollars.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub category: Category,
    pub size: Size,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Image URL or path, passed through untouched.
    pub image: String,
    #[serde(rename = "instock")]
    pub in_stock: bool,
}

impl Product {
    /// The unit price as a displayable [`Price`].
    #[must_use]
    pub const fn unit_price(&self) -> Price {
        Price::usd(self.price)
    }

    /// Check the invariants a catalog record must satisfy.
    ///
    /// # Errors
    ///
    /// Returns `ProductError` if the price is negative or the name is blank.
    pub fn validate(&self) -> Result<(), ProductError> {
        if self.price.is_sign_negative() && !self.price.is_zero() {
            return Err(ProductError::NegativePrice {
                id: self.id,
                price: self.price,
            });
        }
        if self.name.trim().is_empty() {
            return Err(ProductError::EmptyName { id: self.id });
        }
        Ok(())
    }
}
