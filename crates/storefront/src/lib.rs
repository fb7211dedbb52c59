//! Lubemart Storefront - client-side commerce state layer.
//!
//! This crate holds the stateful half of the storefront: the user session,
//! the cart, and the wishlist, each persisted as a JSON document through the
//! [`storage`] adapter, plus the [`Storefront`](state::Storefront)
//! coordinator that wires the stores together.
//!
//! There is no server in this system. Persistence is a local key-value store
//! (the browser-storage analogue), authentication is an explicitly mock user
//! table with plaintext passwords, and network latency is simulated. The
//! single consistency model is last-write-wins from one logical writer.
//!
//! # Modules
//!
//! - [`storage`] - Load/save adapter over a pluggable key-value backend
//! - [`models`] - Persisted domain records (user, order, cart line)
//! - [`stores`] - Session, cart, and wishlist stores
//! - [`state`] - The `Storefront` coordinator and cart reconciliation
//! - [`checkout`] - Simulated order placement
//! - [`config`] - Environment-driven configuration
//! - [`subscribers`] - Publish/subscribe interface the stores emit through

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod checkout;
pub mod config;
pub mod error;
pub mod models;
pub mod state;
pub mod storage;
pub mod stores;
pub mod subscribers;

pub use config::StorefrontConfig;
pub use error::StorefrontError;
pub use state::Storefront;
