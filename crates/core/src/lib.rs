//! Lubemart Core - Shared types library.
//!
//! This crate provides common types used across all Lubemart components:
//! - `catalog` - Static product catalog and query engine
//! - `storefront` - Client-side commerce state layer (session, cart, wishlist)
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
