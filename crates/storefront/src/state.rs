//! The `Storefront` coordinator.
//!
//! Owns the three stores and runs every cross-store rule in one place:
//! cart/identity reconciliation at startup and at login or signup, the
//! cart-to-identity mirror after every cart mutation, and the checkout flow.
//! The stores themselves never reach into each other.
//!
//! # Cart reconciliation
//!
//! The locally persisted cart and the authenticated identity's stored cart
//! are reconciled asymmetrically:
//!
//! - At startup, a restored session with a non-empty stored cart overwrites
//!   the local cart. Otherwise the local cart stands and, if a session was
//!   restored, is mirrored up to the identity.
//! - At login, a non-empty identity cart overwrites the local cart. An empty
//!   identity cart means the local cart stands and is mirrored up.
//! - At signup, the guest cart is adopted onto the new identity, so items
//!   picked before registering are kept.
//!
//! While a cart is being adopted from an identity, the mirror-back is
//! suppressed: adoption must not trigger a sync of the very state it just
//! copied down.

use std::time::Duration;

use tokio::time::sleep;
use tracing::info;

use lubemart_catalog::Product;
use lubemart_core::ProductId;
use rust_decimal::Decimal;

use crate::checkout::{self, CheckoutError};
use crate::config::StorefrontConfig;
use crate::error::Result;
use crate::models::{
    CartLine, Order, PaymentMethod, ProfileUpdate, ShippingAddress, SignupForm, User,
};
use crate::storage::{FileStorage, Storage};
use crate::stores::{CartStore, SessionStore, WishlistStore};
use crate::subscribers::SubscriptionId;

/// Checkout runs longer than auth in the simulated timings; payment
/// processing is the slow path being modeled.
const CHECKOUT_LATENCY_FACTOR: u32 = 2;

/// The assembled state layer: session, cart, and wishlist behind one handle.
#[derive(Debug)]
pub struct Storefront {
    session: SessionStore,
    cart: CartStore,
    wishlist: WishlistStore,
    latency: Duration,
    /// Set while a cart is being copied down from an identity, to suppress
    /// the mirror-back in [`Self::after_cart_mutation`].
    adopting_cart: bool,
}

impl Storefront {
    /// Open a storefront with file-backed persistence per `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be opened or initial
    /// reconciliation cannot be persisted.
    pub fn open(config: &StorefrontConfig) -> Result<Self> {
        let backend = FileStorage::open(&config.data_dir)?;
        Self::with_storage(Storage::new(backend), config.simulated_latency)
    }

    /// Assemble the stores over an explicit storage handle.
    ///
    /// Loads persisted state and reconciles the local cart against any
    /// restored session before returning.
    ///
    /// # Errors
    ///
    /// Returns an error if initial reconciliation cannot be persisted.
    pub fn with_storage(storage: Storage, latency: Duration) -> Result<Self> {
        let session = SessionStore::load(storage.clone(), latency);
        let cart = CartStore::load(storage.clone());
        let wishlist = WishlistStore::load(storage);

        let mut storefront = Self {
            session,
            cart,
            wishlist,
            latency,
            adopting_cart: false,
        };
        storefront.reconcile_startup()?;
        Ok(storefront)
    }

    fn reconcile_startup(&mut self) -> Result<()> {
        let Some(user) = self.session.current_user() else {
            return Ok(());
        };

        if user.has_stored_cart() {
            let lines = user.cart.clone();
            info!(count = lines.len(), "adopting stored cart from restored session");
            self.adopt_cart(lines)?;
        } else {
            self.session.sync_cart(self.cart.lines())?;
        }
        Ok(())
    }

    /// Replace the local cart with an identity's lines, with the mirror-back
    /// suppressed for the duration.
    fn adopt_cart(&mut self, lines: Vec<CartLine>) -> Result<()> {
        self.adopting_cart = true;
        let result = self.cart.replace(lines);
        self.adopting_cart = false;
        result?;
        Ok(())
    }

    /// Mirror the cart to the identity after a local mutation, unless the
    /// mutation was itself an adoption.
    fn after_cart_mutation(&mut self) -> Result<()> {
        if self.adopting_cart {
            return Ok(());
        }
        self.session.sync_cart(self.cart.lines())?;
        Ok(())
    }

    // --- session ---

    /// The authenticated identity, or `None` for a guest.
    #[must_use]
    pub fn current_user(&self) -> Option<&User> {
        self.session.current_user()
    }

    /// Whether a user is logged in.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Log in and reconcile carts: a non-empty identity cart replaces the
    /// local cart; an empty one receives the local cart instead.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::AuthError::InvalidCredentials`] on a failed
    /// login, or a storage error.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<User> {
        let user = self.session.login(email, password).await?;

        if user.has_stored_cart() {
            info!(count = user.cart.len(), "identity cart replaces local cart");
            self.adopt_cart(user.cart.clone())?;
        } else {
            self.session.sync_cart(self.cart.lines())?;
        }

        Ok(user)
    }

    /// Register a new user; the current guest cart is adopted onto the new
    /// identity.
    ///
    /// # Errors
    ///
    /// Returns a validation or duplicate-email error, or a storage error.
    pub async fn signup(&mut self, form: SignupForm) -> Result<User> {
        let snapshot = self.cart.lines().to_vec();
        let user = self.session.signup(form, snapshot).await?;
        Ok(user)
    }

    /// Log out. The cart and wishlist stay on the device.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be cleared.
    pub fn logout(&mut self) -> Result<()> {
        self.session.logout()?;
        Ok(())
    }

    /// Merge a partial profile update into the current identity; no-op for
    /// guests.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting fails.
    pub fn update_profile(&mut self, update: ProfileUpdate) -> Result<()> {
        self.session.update_profile(update)?;
        Ok(())
    }

    /// Register a session listener.
    pub fn subscribe_session(
        &mut self,
        listener: impl Fn(&Option<User>) + Send + 'static,
    ) -> SubscriptionId {
        self.session.subscribe(listener)
    }

    // --- cart ---

    /// The cart lines in insertion order.
    #[must_use]
    pub fn cart_lines(&self) -> &[CartLine] {
        self.cart.lines()
    }

    /// Sum over cart lines of price times quantity.
    #[must_use]
    pub fn cart_total(&self) -> Decimal {
        self.cart.total()
    }

    /// Sum over cart lines of quantity.
    #[must_use]
    pub fn cart_count(&self) -> u32 {
        self.cart.count()
    }

    /// Add `quantity` of `product` in `size` to the cart, merging with an
    /// existing (product, size) line.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting fails.
    pub fn add_to_cart(&mut self, product: &Product, size: &str, quantity: u32) -> Result<()> {
        self.cart.add(CartLine::from_product(product, size, quantity))?;
        self.after_cart_mutation()
    }

    /// Remove every cart line for `product_id`, regardless of size.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting fails.
    pub fn remove_from_cart(&mut self, product_id: ProductId) -> Result<()> {
        self.cart.remove(product_id)?;
        self.after_cart_mutation()
    }

    /// Set the quantity of every cart line for `product_id`; values below 1
    /// are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting fails.
    pub fn set_cart_quantity(&mut self, product_id: ProductId, quantity: u32) -> Result<()> {
        self.cart.set_quantity(product_id, quantity)?;
        self.after_cart_mutation()
    }

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting fails.
    pub fn clear_cart(&mut self) -> Result<()> {
        self.cart.clear()?;
        self.after_cart_mutation()
    }

    /// Register a cart listener.
    pub fn subscribe_cart(
        &mut self,
        listener: impl Fn(&[CartLine]) + Send + 'static,
    ) -> SubscriptionId {
        self.cart.subscribe(listener)
    }

    // --- wishlist ---

    /// The wishlisted products in insertion order.
    #[must_use]
    pub fn wishlist(&self) -> &[Product] {
        self.wishlist.products()
    }

    /// Whether `product_id` is wishlisted.
    #[must_use]
    pub fn is_wishlisted(&self, product_id: ProductId) -> bool {
        self.wishlist.contains(product_id)
    }

    /// Save a product to the wishlist; idempotent.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting fails.
    pub fn add_to_wishlist(&mut self, product: Product) -> Result<()> {
        self.wishlist.add(product)?;
        Ok(())
    }

    /// Remove a product from the wishlist.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting fails.
    pub fn remove_from_wishlist(&mut self, product_id: ProductId) -> Result<()> {
        self.wishlist.remove(product_id)?;
        Ok(())
    }

    /// Register a wishlist listener.
    pub fn subscribe_wishlist(
        &mut self,
        listener: impl Fn(&[Product]) + Send + 'static,
    ) -> SubscriptionId {
        self.wishlist.subscribe(listener)
    }

    // --- checkout ---

    /// Place an order for the current cart contents.
    ///
    /// Simulates payment processing, snapshots the cart into an [`Order`],
    /// records it on the authenticated identity (guest orders leave no
    /// record), and clears the cart. The order is returned either way.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] for an empty cart, or a storage
    /// error.
    pub async fn place_order(
        &mut self,
        shipping_address: ShippingAddress,
        payment_method: PaymentMethod,
    ) -> Result<Order> {
        if self.cart.is_empty() {
            return Err(CheckoutError::EmptyCart.into());
        }

        sleep(self.latency * CHECKOUT_LATENCY_FACTOR).await;

        let order = checkout::build_order(self.cart.lines(), shipping_address, payment_method)?;

        info!(order = %order.id, total = %order.total, "order placed");

        self.session.record_order(order.clone())?;
        self.cart.clear()?;
        self.after_cart_mutation()?;

        Ok(order)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    use lubemart_catalog::query;

    use super::*;
    use crate::storage::{MemoryStorage, StorageBackend, StorageError};

    /// Backend that starts failing writes once the switch is flipped.
    struct FlakyStorage {
        inner: MemoryStorage,
        fail_writes: Arc<AtomicBool>,
    }

    impl StorageBackend for FlakyStorage {
        fn read(&self, key: &str) -> std::result::Result<Option<String>, StorageError> {
            self.inner.read(key)
        }

        fn write(&self, key: &str, value: &str) -> std::result::Result<(), StorageError> {
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(std::io::Error::other("disk full").into());
            }
            self.inner.write(key, value)
        }

        fn remove(&self, key: &str) -> std::result::Result<(), StorageError> {
            self.inner.remove(key)
        }
    }

    fn storefront() -> Storefront {
        Storefront::with_storage(Storage::new(MemoryStorage::new()), Duration::ZERO).unwrap()
    }

    fn product(id: i32) -> &'static Product {
        query::by_id(ProductId::new(id)).unwrap()
    }

    fn form(email: &str) -> SignupForm {
        SignupForm {
            first_name: "Asha".to_owned(),
            last_name: "Verma".to_owned(),
            email: email.to_owned(),
            password: "secret1".to_owned(),
            confirm_password: "secret1".to_owned(),
            phone: None,
            address: None,
        }
    }

    fn address() -> ShippingAddress {
        ShippingAddress {
            street: "14 Piston Lane".to_owned(),
            city: "Pune".to_owned(),
            state: "MH".to_owned(),
            zip_code: "411001".to_owned(),
            country: "India".to_owned(),
        }
    }

    #[tokio::test]
    async fn test_guest_cart_adopted_at_signup() {
        let mut sf = storefront();
        sf.add_to_cart(product(1), "1L", 2).unwrap();

        let user = sf.signup(form("asha@example.com")).await.unwrap();

        assert_eq!(user.cart.len(), 1);
        assert_eq!(sf.cart_count(), 2);
    }

    #[tokio::test]
    async fn test_identity_cart_wins_at_login() {
        let mut sf = storefront();

        // Build an identity with a one-line stored cart, then log out and
        // fill a different cart as a guest.
        sf.add_to_cart(product(1), "1L", 1).unwrap();
        sf.signup(form("asha@example.com")).await.unwrap();
        sf.logout().unwrap();
        sf.clear_cart().unwrap();
        sf.add_to_cart(product(3), "1L", 5).unwrap();

        sf.login("asha@example.com", "secret1").await.unwrap();

        let ids: Vec<i32> = sf.cart_lines().iter().map(|l| l.product_id.as_i32()).collect();
        assert_eq!(ids, vec![1]);
    }

    #[tokio::test]
    async fn test_local_cart_pushed_up_when_identity_cart_empty() {
        let mut sf = storefront();
        sf.signup(form("asha@example.com")).await.unwrap();
        sf.logout().unwrap();

        sf.add_to_cart(product(2), "1L", 1).unwrap();
        let user = sf.login("asha@example.com", "secret1").await.unwrap();

        // The identity had no stored cart, so the guest cart stands and is
        // mirrored onto the identity.
        assert!(user.cart.is_empty());
        assert_eq!(sf.cart_lines().len(), 1);
        assert_eq!(sf.current_user().unwrap().cart.len(), 1);
    }

    #[tokio::test]
    async fn test_startup_adopts_stored_cart_over_local() {
        let storage = Storage::new(MemoryStorage::new());

        {
            let mut sf = Storefront::with_storage(storage.clone(), Duration::ZERO).unwrap();
            sf.add_to_cart(product(1), "1L", 3).unwrap();
            sf.signup(form("asha@example.com")).await.unwrap();
        }

        // A fresh handle over the same storage restores the session and its
        // stored cart.
        let sf = Storefront::with_storage(storage, Duration::ZERO).unwrap();
        assert!(sf.is_authenticated());
        assert_eq!(sf.cart_count(), 3);
    }

    #[tokio::test]
    async fn test_cart_mutations_mirror_to_identity() {
        let mut sf = storefront();
        sf.signup(form("asha@example.com")).await.unwrap();

        sf.add_to_cart(product(1), "1L", 1).unwrap();
        sf.add_to_cart(product(3), "5L", 2).unwrap();
        sf.remove_from_cart(ProductId::new(1)).unwrap();

        let identity_cart = &sf.current_user().unwrap().cart;
        assert_eq!(identity_cart.len(), 1);
        assert_eq!(identity_cart[0].product_id, ProductId::new(3));
    }

    #[tokio::test]
    async fn test_cart_and_wishlist_survive_logout() {
        let mut sf = storefront();
        sf.signup(form("asha@example.com")).await.unwrap();
        sf.add_to_cart(product(1), "1L", 1).unwrap();
        sf.add_to_wishlist(product(2).clone()).unwrap();

        sf.logout().unwrap();

        assert!(!sf.is_authenticated());
        assert_eq!(sf.cart_count(), 1);
        assert!(sf.is_wishlisted(ProductId::new(2)));
    }

    #[tokio::test]
    async fn test_checkout_records_order_and_clears_cart() {
        let mut sf = storefront();
        sf.signup(form("asha@example.com")).await.unwrap();
        sf.add_to_cart(product(1), "1L", 2).unwrap();

        let total = sf.cart_total();
        let order = sf.place_order(address(), PaymentMethod::Card).await.unwrap();

        assert_eq!(order.total, total);
        assert!(sf.cart_lines().is_empty());

        let user = sf.current_user().unwrap();
        assert_eq!(user.orders.len(), 1);
        assert_eq!(user.orders[0].id, order.id);
    }

    #[tokio::test]
    async fn test_guest_checkout_leaves_no_record() {
        let mut sf = storefront();
        sf.add_to_cart(product(1), "1L", 1).unwrap();

        let order = sf.place_order(address(), PaymentMethod::CashOnDelivery).await.unwrap();

        assert!(order.id.as_str().starts_with("LM-"));
        assert!(sf.cart_lines().is_empty());
        assert!(!sf.is_authenticated());
    }

    #[tokio::test]
    async fn test_storage_failure_at_checkout_is_a_storage_error() {
        let fail_writes = Arc::new(AtomicBool::new(false));
        let backend = FlakyStorage {
            inner: MemoryStorage::new(),
            fail_writes: Arc::clone(&fail_writes),
        };
        let mut sf = Storefront::with_storage(Storage::new(backend), Duration::ZERO).unwrap();
        sf.add_to_cart(product(1), "1L", 1).unwrap();

        fail_writes.store(true, Ordering::SeqCst);
        let err = sf.place_order(address(), PaymentMethod::Card).await.unwrap_err();

        // Persistence failures surface as storage errors; checkout itself
        // can only fail on an empty cart.
        assert!(matches!(err, crate::StorefrontError::Storage(_)));
    }

    #[tokio::test]
    async fn test_checkout_empty_cart_fails() {
        let mut sf = storefront();
        let err = sf.place_order(address(), PaymentMethod::Card).await.unwrap_err();
        assert!(matches!(
            err,
            crate::StorefrontError::Checkout(CheckoutError::EmptyCart)
        ));
    }
}
