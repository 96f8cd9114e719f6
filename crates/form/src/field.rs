//! Observable, self-validating fields
//!
//! A [`Field`] owns a value, a baseline to reset to and an ordered list of
//! rules. Every operation computes a complete [`FieldState`] and publishes
//! it in one step.

use std::fmt;
use std::sync::{Arc, Weak};

use formstate_store::{Publisher, Store, Subscription};
use formstate_validator::foundation::{
    Validator, ValueSource, all_passed, extract_errors, is_falsy, run_all,
};

use crate::{FieldOptions, FieldState, Value};

struct Rules {
    validators: Vec<Validator>,
    optional: bool,
}

impl Rules {
    /// Runs every rule against `value` and builds the next snapshot.
    fn evaluate(&self, name: String, value: Value, initial_value: Value, dirty: bool) -> FieldState {
        let results = run_all(&value, &self.validators);
        let valid = all_passed(&results) || (self.optional && is_falsy(&value));
        FieldState {
            name,
            value,
            initial_value,
            valid,
            dirty,
            errors: extract_errors(&results),
        }
    }
}

struct FieldInner {
    store: Store<FieldState>,
    rules: Rules,
}

impl FieldInner {
    fn evaluate(&self, name: String, value: Value, initial_value: Value, dirty: bool) -> FieldState {
        self.rules.evaluate(name, value, initial_value, dirty)
    }

    fn publish(&self, state: FieldState, op: &'static str) {
        tracing::debug!(
            field = %state.name,
            op,
            valid = state.valid,
            dirty = state.dirty,
            errors = state.errors.len(),
            "field state published"
        );
        self.store.replace(state);
    }
}

/// A named value with validation rules and change notification.
///
/// `Field` is a cheap handle; clones share the same state. Operations that
/// take a `dirty` flag default to marking the field dirty in their short
/// form (`set_value`, `update`).
///
/// # Examples
///
/// ```
/// use formstate::prelude::*;
/// use serde_json::json;
///
/// let name = Field::new("name", [required().boxed(), min(3).boxed()], FieldOptions::new());
/// assert!(!name.get().valid);
/// assert!(!name.get().dirty);
///
/// name.set_value("Ada");
/// let state = name.get();
/// assert!(state.valid);
/// assert!(state.dirty);
///
/// name.reset(None);
/// assert_eq!(name.value(), json!(null));
/// assert!(!name.get().dirty);
/// ```
#[derive(Clone)]
pub struct Field {
    inner: Arc<FieldInner>,
}

impl Field {
    /// Creates a field and validates its initial value immediately.
    pub fn new(
        name: impl Into<String>,
        validators: impl IntoIterator<Item = Validator>,
        options: FieldOptions,
    ) -> Self {
        let FieldOptions {
            initial_value,
            optional,
            dirty,
        } = options;
        let rules = Rules {
            validators: validators.into_iter().collect(),
            optional,
        };
        let name = name.into();

        tracing::trace!(field = %name, rules = rules.validators.len(), optional, "field created");
        let state = rules.evaluate(name, initial_value.clone(), initial_value, dirty);
        Self {
            inner: Arc::new(FieldInner {
                store: Store::new(state),
                rules,
            }),
        }
    }

    /// Sets the value and marks the field dirty.
    pub fn set_value(&self, value: impl Into<Value>) {
        self.set_value_with(value, true);
    }

    /// Sets the value with an explicit dirty flag.
    pub fn set_value_with(&self, value: impl Into<Value>, dirty: bool) {
        let current = self.get();
        let state = self
            .inner
            .evaluate(current.name, value.into(), current.initial_value, dirty);
        self.inner.publish(state, "set_value");
    }

    /// Computes the new value from the current snapshot, marking the field dirty.
    pub fn update(&self, updater: impl FnOnce(&FieldState) -> Value) {
        self.update_with(updater, true);
    }

    /// Computes the new value from the current snapshot with an explicit dirty flag.
    pub fn update_with(&self, updater: impl FnOnce(&FieldState) -> Value, dirty: bool) {
        let current = self.get();
        let value = updater(&current);
        let state = self
            .inner
            .evaluate(current.name, value, current.initial_value, dirty);
        self.inner.publish(state, "update");
    }

    /// Replaces name, value and baseline from `state`, then revalidates.
    ///
    /// `valid` and `errors` in `state` are ignored and recomputed.
    pub fn set_state(&self, state: FieldState, dirty: bool) {
        let state = self
            .inner
            .evaluate(state.name, state.value, state.initial_value, dirty);
        self.inner.publish(state, "set_state");
    }

    /// Replaces the baseline used by [`reset`](Self::reset).
    ///
    /// The value and dirty flag stay as they are.
    pub fn set_initial_value(&self, initial_value: impl Into<Value>) {
        let current = self.get();
        let state = self.inner.evaluate(
            current.name,
            current.value,
            initial_value.into(),
            current.dirty,
        );
        self.inner.publish(state, "set_initial_value");
    }

    /// Overrides `valid` without running the rules.
    ///
    /// For validity decided elsewhere, such as a server-side check. `errors`
    /// keep their last computed value; `dirty` changes only when given.
    pub fn force_valid(&self, valid: bool, dirty: Option<bool>) {
        let mut state = self.get();
        state.valid = valid;
        if let Some(dirty) = dirty {
            state.dirty = dirty;
        }
        self.inner.publish(state, "force_valid");
    }

    /// Overrides only the dirty flag.
    pub fn set_dirty(&self, dirty: bool) {
        let mut state = self.get();
        state.dirty = dirty;
        self.inner.publish(state, "set_dirty");
    }

    /// Reruns the rules against the current value.
    ///
    /// Never marks the field dirty unless `dirty` says so.
    pub fn revalidate(&self, dirty: Option<bool>) {
        let current = self.get();
        let dirty = dirty.unwrap_or(current.dirty);
        let state = self
            .inner
            .evaluate(current.name, current.value, current.initial_value, dirty);
        self.inner.publish(state, "revalidate");
    }

    /// Restores the baseline, or sets both value and baseline to `new_value`.
    ///
    /// Always clears the dirty flag.
    pub fn reset(&self, new_value: Option<Value>) {
        let current = self.get();
        let baseline = new_value.unwrap_or(current.initial_value);
        let state = self
            .inner
            .evaluate(current.name, baseline.clone(), baseline, false);
        self.inner.publish(state, "reset");
    }

    /// Returns the current snapshot.
    #[must_use]
    pub fn get(&self) -> FieldState {
        self.inner.store.get()
    }

    /// Returns the current value.
    #[must_use]
    pub fn value(&self) -> Value {
        self.inner.store.with(|state| state.value.clone())
    }

    /// Returns the field name.
    #[must_use]
    pub fn name(&self) -> String {
        self.inner.store.with(|state| state.name.clone())
    }

    /// Shorthand for `get().valid`.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.inner.store.with(|state| state.valid)
    }

    /// Shorthand for `get().dirty`.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.inner.store.with(|state| state.dirty)
    }

    /// Calls `listener` with every snapshot published from now on.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&FieldState) + Send + Sync + 'static,
    {
        self.inner.store.subscribe(listener)
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.store.subscriber_count()
    }

    /// Returns a weak, read-only reference for cross-field rules.
    ///
    /// ```
    /// use formstate::prelude::*;
    ///
    /// let password = Field::new("password", [], FieldOptions::new());
    /// let confirm = Field::new(
    ///     "confirm",
    ///     [equals_field(password.reference()).boxed()],
    ///     FieldOptions::new(),
    /// );
    ///
    /// password.set_value("hunter2");
    /// confirm.set_value("hunter2");
    /// assert!(confirm.get().valid);
    /// ```
    #[must_use]
    pub fn reference(&self) -> FieldRef {
        FieldRef {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Returns true if both handles point at the same field.
    #[must_use]
    pub fn same_field(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("state", &self.get())
            .field("rules", &self.inner.rules.validators.len())
            .field("optional", &self.inner.rules.optional)
            .finish()
    }
}

/// A weak, read-only view of a field's value.
///
/// Holding a `FieldRef` does not keep the field alive; once every [`Field`]
/// handle is dropped the reference reads as `null`.
#[derive(Clone)]
pub struct FieldRef {
    inner: Weak<FieldInner>,
}

impl FieldRef {
    /// Upgrades to a full handle if the field is still alive.
    #[must_use]
    pub fn upgrade(&self) -> Option<Field> {
        self.inner.upgrade().map(|inner| Field { inner })
    }
}

impl ValueSource for FieldRef {
    fn current_value(&self) -> Value {
        self.inner
            .upgrade()
            .map_or(Value::Null, |inner| inner.store.with(|state| state.value.clone()))
    }
}

impl fmt::Debug for FieldRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRef")
            .field("alive", &(self.inner.strong_count() > 0))
            .finish()
    }
}
