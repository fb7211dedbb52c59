//! Publish/subscribe support for the stores.
//!
//! Each store emits its post-mutation state to every registered listener.
//! The view layer is one subscriber among many; tests register listeners the
//! same way.

/// Handle returned by `subscribe`, used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener<T> = Box<dyn Fn(&T) + Send>;

/// An ordered list of listeners for one store.
///
/// Listeners are invoked synchronously, in subscription order, on the caller's
/// thread. A listener must not mutate the store it is observing.
pub struct Subscribers<T: ?Sized> {
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener<T>)>,
}

impl<T: ?Sized> Subscribers<T> {
    /// Create an empty subscriber list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next_id: 0,
            listeners: Vec::new(),
        }
    }

    /// Register a listener; returns the handle to remove it again.
    pub fn subscribe(&mut self, listener: impl Fn(&T) + Send + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Unknown handles are ignored.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
    }

    /// Notify every listener with the current state.
    pub fn emit(&self, state: &T) {
        for (_, listener) in &self.listeners {
            listener(state);
        }
    }
}

impl<T: ?Sized> Default for Subscribers<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> std::fmt::Debug for Subscribers<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscribers")
            .field("count", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn test_emit_reaches_every_listener_in_order() {
        let mut subscribers = Subscribers::<u32>::new();
        let seen = Arc::new(AtomicUsize::new(0));

        for _ in 0..3 {
            let seen = Arc::clone(&seen);
            subscribers.subscribe(move |_| {
                seen.fetch_add(1, Ordering::SeqCst);
            });
        }

        subscribers.emit(&7);
        assert_eq!(seen.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let mut subscribers = Subscribers::<u32>::new();
        let seen = Arc::new(AtomicUsize::new(0));

        let id = {
            let seen = Arc::clone(&seen);
            subscribers.subscribe(move |_| {
                seen.fetch_add(1, Ordering::SeqCst);
            })
        };

        subscribers.emit(&1);
        subscribers.unsubscribe(id);
        subscribers.unsubscribe(id);
        subscribers.emit(&2);

        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }
}
