//! Persistent store adapter.
//!
//! The stateful stores persist their entire state as one JSON document per
//! well-known key, browser-local-storage style: serialize-the-world on every
//! write, parse-the-world on every read. At this scale that is the right
//! trade; there is no incremental diffing.
//!
//! `load` never fails: content that cannot be read or parsed is logged and
//! treated as absent, so a corrupted document degrades to an empty store
//! instead of a crash.

mod backend;

pub use backend::{FileStorage, MemoryStorage, StorageBackend};

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::warn;

/// Well-known document keys.
pub mod keys {
    /// The current session's cart lines.
    pub const CART: &str = "cart";

    /// The wishlist product snapshots.
    pub const WISHLIST: &str = "wishlist";

    /// The currently authenticated identity, absent for guests.
    pub const CURRENT_USER: &str = "currentUser";

    /// The mock table of all registered users.
    pub const USERS: &str = "users";
}

/// Errors from the persistence layer.
///
/// Only writes can surface errors; reads recover silently (see [`Storage::load`]).
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend could not be read or written.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The value could not be serialized.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Handle to a key-value backend with JSON document semantics.
///
/// Cheaply cloneable; all stores in one storefront share the same backend,
/// mirroring a single browser's local storage.
#[derive(Clone)]
pub struct Storage {
    backend: Arc<dyn StorageBackend>,
}

impl Storage {
    /// Wrap a backend.
    pub fn new(backend: impl StorageBackend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Load and deserialize the document at `key`.
    ///
    /// Returns `None` when the key is absent, unreadable, or holds malformed
    /// content. The latter two are logged at `warn` and recovered, never
    /// propagated: a damaged document must not take the application down.
    #[must_use]
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.backend.read(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                warn!(key, error = %err, "failed to read persisted state, treating as absent");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(key, error = %err, "malformed persisted state, treating as absent");
                None
            }
        }
    }

    /// Serialize `value` and write it at `key`, replacing any previous
    /// document wholesale.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the backend write fails.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value)?;
        self.backend.write(key, &raw)
    }

    /// Remove the document at `key`. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend removal fails.
    pub fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.backend.remove(key)
    }
}

impl std::fmt::Debug for Storage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storage").finish_non_exhaustive()
    }
}
