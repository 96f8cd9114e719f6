//! Thread-safe observable value

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::{Mutex, RwLock};

use crate::{Publisher, Subscription};

type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct Shared<T> {
    value: RwLock<T>,
    listeners: Mutex<Vec<(u64, Listener<T>)>>,
    next_id: AtomicU64,
}

/// A shared value with synchronous change notification.
///
/// Cloning a `Store` yields another handle to the same value. No lock is
/// held while listeners run, so a listener may read the store, subscribe,
/// or drop its own subscription.
pub struct Store<T> {
    shared: Arc<Shared<T>>,
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T> Store<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Creates a store holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            shared: Arc::new(Shared {
                value: RwLock::new(value),
                listeners: Mutex::new(Vec::new()),
                next_id: AtomicU64::new(0),
            }),
        }
    }

    /// Reads the current value without cloning it.
    ///
    /// `f` must not call [`replace`](Publisher::replace) on this store.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.shared.value.read())
    }

    /// Replaces the value with `f(current)` and notifies listeners.
    ///
    /// The read and the write are separate steps: a concurrent writer may
    /// land in between.
    pub fn update(&self, f: impl FnOnce(&T) -> T) {
        let next = self.with(f);
        self.replace(next);
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.shared.listeners.lock().len()
    }

    fn remove_listener(shared: &Weak<Shared<T>>, id: u64) {
        if let Some(shared) = shared.upgrade() {
            shared.listeners.lock().retain(|(lid, _)| *lid != id);
        }
    }
}

impl<T> Publisher<T> for Store<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = self.shared.next_id.fetch_add(1, Ordering::Relaxed);
        self.shared.listeners.lock().push((id, Arc::new(listener)));

        let weak = Arc::downgrade(&self.shared);
        Subscription::new(move || Self::remove_listener(&weak, id))
    }

    fn get(&self) -> T {
        self.shared.value.read().clone()
    }

    fn replace(&self, value: T) {
        *self.shared.value.write() = value.clone();

        let listeners: Vec<Listener<T>> = self
            .shared
            .listeners
            .lock()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        tracing::trace!(listeners = listeners.len(), "store value replaced");
        for listener in &listeners {
            listener(&value);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Store<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("value", &*self.shared.value.read())
            .field("listeners", &self.shared.listeners.lock().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn recorder<T: Clone + Send + 'static>() -> (Arc<Mutex<Vec<T>>>, impl Fn(&T) + Send + Sync) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&log);
        (log, move |v: &T| sink.lock().push(v.clone()))
    }

    #[test]
    fn get_returns_latest_value() {
        let store = Store::new("a".to_owned());
        assert_eq!(store.get(), "a");
        store.replace("b".to_owned());
        assert_eq!(store.get(), "b");
    }

    #[test]
    fn subscribe_does_not_replay() {
        let store = Store::new(1);
        let (log, listener) = recorder();
        let _sub = store.subscribe(listener);
        assert!(log.lock().is_empty());
        store.replace(2);
        assert_eq!(*log.lock(), vec![2]);
    }

    #[test]
    fn listeners_run_in_subscription_order() {
        let store = Store::new(0);
        let order = Arc::new(Mutex::new(Vec::new()));
        let subs: Vec<_> = (0..3)
            .map(|i| {
                let order = Arc::clone(&order);
                store.subscribe(move |_: &i32| order.lock().push(i))
            })
            .collect();
        store.replace(1);
        assert_eq!(*order.lock(), vec![0, 1, 2]);
        drop(subs);
    }

    #[test]
    fn dropped_subscription_stops_notifications() {
        let store = Store::new(0);
        let (log, listener) = recorder();
        let sub = store.subscribe(listener);
        assert_eq!(store.subscriber_count(), 1);
        store.replace(1);
        drop(sub);
        assert_eq!(store.subscriber_count(), 0);
        store.replace(2);
        assert_eq!(*log.lock(), vec![1]);
    }

    #[test]
    fn detached_listener_outlives_guard() {
        let store = Store::new(0);
        let (log, listener) = recorder();
        store.subscribe(listener).detach();
        store.replace(3);
        assert_eq!(*log.lock(), vec![3]);
        assert_eq!(store.subscriber_count(), 1);
    }

    #[test]
    fn listener_can_read_store_reentrantly() {
        let store = Store::new(0);
        let reader = store.clone();
        let seen = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&seen);
        let _sub = store.subscribe(move |_: &i32| *sink.lock() = Some(reader.get()));
        store.replace(9);
        assert_eq!(*seen.lock(), Some(9));
    }

    #[test]
    fn update_applies_function() {
        let store = Store::new(2);
        store.update(|v| v * 10);
        assert_eq!(store.get(), 20);
        assert_eq!(store.with(|v| *v + 1), 21);
    }

    #[test]
    fn subscription_outliving_store_is_harmless() {
        let store = Store::new(0);
        let sub = store.subscribe(|_: &i32| {});
        drop(store);
        drop(sub);
    }
}
