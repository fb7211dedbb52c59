//! Lubemart Catalog - static product data and query engine.
//!
//! The catalog is a fixed, build-time list of product records. Everything in
//! this crate is read-only and side-effect-free: query functions borrow from
//! the static list and are safe to call from any number of subscribers.
//!
//! # Modules
//!
//! - [`product`] - The [`Product`] record and its supporting types
//! - [`data`] - The shipped catalog
//! - [`query`] - Lookup, filter, search, and sort functions

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod data;
pub mod product;
pub mod query;

pub use data::catalog;
pub use product::{Category, Product, ProductDetails, SelectOption};
pub use query::{CategoryFilter, SizeFilter, SortKey};
