//! Stateful stores: session, cart, wishlist.
//!
//! Each store owns its slice of state, persists it wholesale on every
//! mutation, and emits to its subscribers. Stores are explicit values with an
//! explicit lifecycle - constructed at application start, dropped at
//! teardown - not ambient globals. Cross-store coordination (cart adoption,
//! identity sync) lives in [`crate::state::Storefront`], not in the stores
//! themselves.

pub mod cart;
pub mod session;
pub mod wishlist;

pub use cart::CartStore;
pub use session::SessionStore;
pub use wishlist::WishlistStore;
