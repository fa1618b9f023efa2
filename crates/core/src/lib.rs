//! Threadbare Core - Catalog, filter and cart types.
//!
//! This crate provides the types and pure logic shared by the storefront:
//! - [`types`] - Newtype IDs, prices, quantities and the product record
//! - [`filter`] - Conjunctive category/size/name filtering over a product slice
//! - [`cart`] - The in-memory cart with merge-on-add line items
//!
//! # Architecture
//!
//! The core crate contains no I/O, no HTTP clients and no clocks. Everything
//! here is synchronous and deterministic, which keeps it trivially testable.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod filter;
pub mod types;

pub use cart::{Cart, CartLineItem};
pub use filter::{FilterState, filter};
pub use types::*;
