//! Threadbare storefront library.
//!
//! Loads the product catalog and holds the view state for the listing,
//! cart and confirmation screens. The cart model itself lives in
//! `threadbare-core`.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod notice;
pub mod state;
pub mod telemetry;
pub mod views;
