//! Wishlist store.

use tracing::debug;

use lubemart_catalog::Product;
use lubemart_core::ProductId;

use crate::storage::{Storage, StorageError, keys};
use crate::subscribers::{Subscribers, SubscriptionId};

/// An insertion-ordered set of saved products.
///
/// Stores full product snapshots rather than ids, like the cart. The
/// wishlist is keyed to the browser and is never mirrored onto the
/// authenticated identity; it survives logout and is shared across users on
/// the same device.
pub struct WishlistStore {
    storage: Storage,
    products: Vec<Product>,
    subscribers: Subscribers<[Product]>,
}

impl WishlistStore {
    /// Load the locally persisted wishlist, or start empty.
    #[must_use]
    pub fn load(storage: Storage) -> Self {
        let products = storage.load(keys::WISHLIST).unwrap_or_default();
        Self {
            storage,
            products,
            subscribers: Subscribers::new(),
        }
    }

    /// The saved products in insertion order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of saved products.
    #[must_use]
    pub fn count(&self) -> usize {
        self.products.len()
    }

    /// Whether `product_id` is saved.
    #[must_use]
    pub fn contains(&self, product_id: ProductId) -> bool {
        self.products.iter().any(|p| p.id == product_id)
    }

    /// Save a product. Adding one already present is a no-op that keeps its
    /// original position.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the wishlist fails.
    pub fn add(&mut self, product: Product) -> Result<(), StorageError> {
        if self.contains(product.id) {
            debug!(product = %product.id, "already wishlisted");
            return Ok(());
        }

        self.products.push(product);
        self.persist()
    }

    /// Remove a saved product. Removing an absent id is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the wishlist fails.
    pub fn remove(&mut self, product_id: ProductId) -> Result<(), StorageError> {
        self.products.retain(|p| p.id != product_id);
        self.persist()
    }

    /// Empty the wishlist.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the wishlist fails.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.products.clear();
        self.persist()
    }

    /// Register a listener invoked with the product list after every
    /// mutation.
    pub fn subscribe(&mut self, listener: impl Fn(&[Product]) + Send + 'static) -> SubscriptionId {
        self.subscribers.subscribe(listener)
    }

    /// Remove a listener.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.unsubscribe(id);
    }

    fn persist(&self) -> Result<(), StorageError> {
        self.storage.save(keys::WISHLIST, &self.products)?;
        self.subscribers.emit(&self.products);
        Ok(())
    }
}

impl std::fmt::Debug for WishlistStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WishlistStore")
            .field("count", &self.products.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use lubemart_catalog::query;

    use super::*;
    use crate::storage::MemoryStorage;

    fn store() -> WishlistStore {
        WishlistStore::load(Storage::new(MemoryStorage::new()))
    }

    fn product(id: i32) -> Product {
        query::by_id(ProductId::new(id)).unwrap().clone()
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut wishlist = store();
        wishlist.add(product(1)).unwrap();
        wishlist.add(product(2)).unwrap();
        wishlist.add(product(1)).unwrap();

        assert_eq!(wishlist.count(), 2);
        let ids: Vec<i32> = wishlist.products().iter().map(|p| p.id.as_i32()).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_remove_absent_id_is_a_no_op() {
        let mut wishlist = store();
        wishlist.add(product(1)).unwrap();
        wishlist.remove(ProductId::new(99)).unwrap();

        assert!(wishlist.contains(ProductId::new(1)));
    }

    #[test]
    fn test_persists_across_reload() {
        let storage = Storage::new(MemoryStorage::new());
        {
            let mut wishlist = WishlistStore::load(storage.clone());
            wishlist.add(product(3)).unwrap();
        }

        let reloaded = WishlistStore::load(storage);
        assert!(reloaded.contains(ProductId::new(3)));
    }
}
