//! RAII guard for store listeners

/// Keeps a listener registered for as long as it is alive.
///
/// Dropping the subscription (or calling [`unsubscribe`](Self::unsubscribe))
/// removes the listener. Use [`detach`](Self::detach) to keep the listener
/// registered for the remaining lifetime of the store.
#[must_use = "dropping a Subscription immediately removes its listener"]
pub struct Subscription {
    on_drop: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    /// Creates a subscription that runs `on_drop` when released.
    pub fn new<F>(on_drop: F) -> Self
    where
        F: FnOnce() + Send + Sync + 'static,
    {
        Self {
            on_drop: Some(Box::new(on_drop)),
        }
    }

    /// Creates a subscription that releases nothing.
    pub fn empty() -> Self {
        Self { on_drop: None }
    }

    /// Removes the listener now.
    pub fn unsubscribe(mut self) {
        self.release();
    }

    /// Leaves the listener registered without keeping a guard.
    pub fn detach(mut self) {
        self.on_drop.take();
    }

    /// Returns true while the guard still owns a listener.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.on_drop.is_some()
    }

    fn release(&mut self) {
        if let Some(on_drop) = self.on_drop.take() {
            on_drop();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}
