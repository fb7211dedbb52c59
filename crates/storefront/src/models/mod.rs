//! Persisted domain records.
//!
//! These are the document shapes written through the storage adapter:
//! validated domain objects, separate from the static catalog types.

pub mod cart;
pub mod order;
pub mod user;

pub use cart::CartLine;
pub use order::{Order, PaymentMethod, ShippingAddress};
pub use user::{Address, ProfileUpdate, SignupForm, User};
