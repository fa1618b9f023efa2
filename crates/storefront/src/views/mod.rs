//! View models for the three storefront screens.
//!
//! Each view owns its transient state (filters, pending quantities,
//! selections, notices) for as long as the screen is shown. The catalog and
//! cart are passed in by reference on every call rather than stored, so a
//! view never outlives or duplicates them.
//!
//! # Screens
//!
//! - [`listing`] - Filterable product grid with add-to-cart
//! - [`cart`] - Line items with quantity controls and totals
//! - [`confirmation`] - Thank-you page with an order snapshot

pub mod cart;
pub mod confirmation;
pub mod listing;

pub use cart::{CartLineRow, CartSummary, CartView};
pub use confirmation::{OrderConfirmation, checkout};
pub use listing::{ListingView, ProductCard};
