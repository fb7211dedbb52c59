//! Cart store.

use rust_decimal::Decimal;
use tracing::debug;

use lubemart_core::ProductId;

use crate::models::CartLine;
use crate::storage::{Storage, StorageError, keys};
use crate::subscribers::{Subscribers, SubscriptionId};

/// The current session's cart: an insertion-ordered list of lines.
///
/// Lines merge by (product id, size) on add. Removal is by product id alone,
/// which drops every size variant of that product - longstanding behavior
/// the rest of the system depends on, kept deliberately.
pub struct CartStore {
    storage: Storage,
    lines: Vec<CartLine>,
    subscribers: Subscribers<[CartLine]>,
}

impl CartStore {
    /// Load the locally persisted cart, or start empty.
    #[must_use]
    pub fn load(storage: Storage) -> Self {
        let lines = storage.load(keys::CART).unwrap_or_default();
        Self {
            storage,
            lines,
            subscribers: Subscribers::new(),
        }
    }

    /// The lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum over lines of price times quantity.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Sum over lines of quantity (the header badge count, not line count).
    #[must_use]
    pub fn count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Add a line, merging with an existing (product id, size) line by
    /// summing quantities. New selections append in insertion order; merges
    /// never reorder.
    ///
    /// A zero-quantity line is rejected as a no-op, consistent with
    /// [`Self::set_quantity`].
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the cart fails.
    pub fn add(&mut self, line: CartLine) -> Result<(), StorageError> {
        if line.quantity == 0 {
            debug!(product = %line.product_id, "ignoring zero-quantity add");
            return Ok(());
        }

        if let Some(existing) = self
            .lines
            .iter_mut()
            .find(|l| l.matches(line.product_id, &line.size))
        {
            existing.quantity += line.quantity;
        } else {
            self.lines.push(line);
        }

        self.persist()
    }

    /// Remove every line for `product_id`, regardless of size.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the cart fails.
    pub fn remove(&mut self, product_id: ProductId) -> Result<(), StorageError> {
        self.lines.retain(|line| line.product_id != product_id);
        self.persist()
    }

    /// Set the quantity of every line for `product_id`.
    ///
    /// Quantities below 1 are ignored entirely - there is no
    /// removal-at-zero; callers remove lines explicitly.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the cart fails.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: u32) -> Result<(), StorageError> {
        if quantity < 1 {
            debug!(product = %product_id, "ignoring set_quantity below 1");
            return Ok(());
        }

        for line in self
            .lines
            .iter_mut()
            .filter(|line| line.product_id == product_id)
        {
            line.quantity = quantity;
        }

        self.persist()
    }

    /// Empty the cart (used after checkout).
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the cart fails.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.lines.clear();
        self.persist()
    }

    /// Replace the whole cart with lines adopted from another source (the
    /// authenticated identity's stored cart).
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the cart fails.
    pub fn replace(&mut self, lines: Vec<CartLine>) -> Result<(), StorageError> {
        self.lines = lines;
        self.persist()
    }

    /// Register a listener invoked with the line list after every mutation.
    pub fn subscribe(&mut self, listener: impl Fn(&[CartLine]) + Send + 'static) -> SubscriptionId {
        self.subscribers.subscribe(listener)
    }

    /// Remove a listener.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.unsubscribe(id);
    }

    fn persist(&self) -> Result<(), StorageError> {
        self.storage.save(keys::CART, &self.lines)?;
        self.subscribers.emit(&self.lines);
        Ok(())
    }
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("lines", &self.lines)
            .finish_non_exhaustive()
    }
}
