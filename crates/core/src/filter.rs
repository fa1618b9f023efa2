//! Listing filters.
//!
//! A [`FilterState`] holds up to three constraints: category, size and a
//! free-text term matched against product names. Unset constraints are
//! wildcards and the set ones combine with AND. Results keep catalog order.

use serde::{Deserialize, Serialize};

use crate::types::{Category, Product, Size};

/// The listing's current filter selections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// Exact category to match, or any.
    pub category: Option<Category>,
    /// Exact size to match, or any.
    pub size: Option<Size>,
    /// Case-insensitive substring of the product name; empty matches all.
    pub search: String,
}

impl FilterState {
    /// A filter that matches every product.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to one category. An empty string clears the constraint.
    #[must_use]
    pub fn with_category(mut self, category: &str) -> Self {
        self.set_category(category);
        self
    }

    /// Restrict to one size. An empty string clears the constraint.
    #[must_use]
    pub fn with_size(mut self, size: &str) -> Self {
        self.set_size(size);
        self
    }

    /// Set the free-text search term.
    #[must_use]
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    /// Update the category from a dropdown value ("" means all categories).
    pub fn set_category(&mut self, category: &str) {
        self.category = (!category.is_empty()).then(|| Category::from(category));
    }

    /// Update the size from a dropdown value ("" means all sizes).
    pub fn set_size(&mut self, size: &str) {
        self.size = (!size.is_empty()).then(|| Size::from(size));
    }

    /// Update the search term from the search box.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    /// Whether no constraint is set.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.category.is_none() && self.size.is_none() && self.search.is_empty()
    }

    /// Whether `product` satisfies every set constraint.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        self.category
            .as_ref()
            .is_none_or(|category| &product.category == category)
            && self.size.as_ref().is_none_or(|size| &product.size == size)
            && name_contains(&product.name, &self.search)
    }
}

/// Case-insensitive substring test. An empty needle always matches.
fn name_contains(name: &str, needle: &str) -> bool {
    needle.is_empty() || name.to_lowercase().contains(&needle.to_lowercase())
}

/// Products from `catalog` that match `state`, in catalog order.
#[must_use]
pub fn filter<'a>(catalog: &'a [Product], state: &FilterState) -> Vec<&'a Product> {
    catalog.iter().filter(|product| state.matches(product)).collect()
}
