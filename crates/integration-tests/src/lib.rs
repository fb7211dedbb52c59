//! Integration tests for Lubemart.
//!
//! Unit tests live with each crate; the suites under `tests/` exercise the
//! assembled [`Storefront`] end to end - session, cart, and wishlist over a
//! shared storage backend, including restarts against file-backed storage.
//!
//! This library holds the shared test fixtures.

use std::sync::Once;
use std::time::Duration;

use lubemart_storefront::Storefront;
use lubemart_storefront::models::{ShippingAddress, SignupForm};
use lubemart_storefront::storage::{MemoryStorage, Storage, StorageBackend};

static TRACING: Once = Once::new();

/// Install a test subscriber once per process. Honors `RUST_LOG`.
fn init_tracing() {
    TRACING.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .init();
    });
}

/// A storefront over fresh in-memory storage with zero simulated latency.
#[must_use]
pub fn storefront() -> Storefront {
    storefront_over(Storage::new(MemoryStorage::new()))
}

/// A storefront over an explicit storage handle, zero latency.
///
/// Use with a shared or file-backed handle to simulate restarts.
#[must_use]
pub fn storefront_over(storage: Storage) -> Storefront {
    init_tracing();
    Storefront::with_storage(storage, Duration::ZERO).expect("storefront init")
}

/// A storage handle over any backend.
pub fn storage(backend: impl StorageBackend + 'static) -> Storage {
    Storage::new(backend)
}

/// A valid signup form for `email`.
#[must_use]
pub fn signup_form(email: &str) -> SignupForm {
    SignupForm {
        first_name: "Meera".to_owned(),
        last_name: "Joshi".to_owned(),
        email: email.to_owned(),
        password: "roadworthy".to_owned(),
        confirm_password: "roadworthy".to_owned(),
        phone: Some("555-0142".to_owned()),
        address: None,
    }
}

/// A completed shipping address.
#[must_use]
pub fn shipping_address() -> ShippingAddress {
    ShippingAddress {
        street: "8 Camshaft Road".to_owned(),
        city: "Nashik".to_owned(),
        state: "MH".to_owned(),
        zip_code: "422001".to_owned(),
        country: "India".to_owned(),
    }
}
