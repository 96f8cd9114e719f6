//! # formstate-store
//!
//! A minimal publish-subscribe value cell.
//!
//! - [`Publisher`]: the contract (`subscribe`, `get`, `replace`)
//! - [`Store`]: a cloneable, thread-safe implementation
//! - [`Subscription`]: RAII guard that removes its listener on drop
//!
//! Notification is synchronous: `replace` returns after every listener has
//! seen the new value, in subscription order.
//!
//! ```
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicI32, Ordering};
//! use formstate_store::{Publisher, Store};
//!
//! let store = Store::new(1);
//! let seen = Arc::new(AtomicI32::new(0));
//! let sink = Arc::clone(&seen);
//! let subscription = store.subscribe(move |v: &i32| sink.store(*v, Ordering::SeqCst));
//!
//! store.replace(5);
//! assert_eq!(seen.load(Ordering::SeqCst), 5);
//!
//! drop(subscription);
//! store.replace(7);
//! assert_eq!(seen.load(Ordering::SeqCst), 5);
//! ```

mod store;
mod subscription;

pub use store::Store;
pub use subscription::Subscription;

/// A value that can be read, replaced and observed.
pub trait Publisher<T> {
    /// Registers `listener`, which runs on every subsequent [`replace`](Self::replace).
    ///
    /// The current value is not replayed to the new listener.
    fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static;

    /// Returns a copy of the current value.
    fn get(&self) -> T;

    /// Stores `value` and notifies every listener with it.
    fn replace(&self, value: T);
}
