//! Forms: aggregate state over a fixed set of fields

use std::fmt;
use std::sync::{Arc, Weak};

use formstate_store::{Publisher, Store, Subscription};

use crate::{Field, FieldState, FormState};

struct FormInner {
    fields: Vec<Field>,
    store: Store<FormState>,
}

impl FormInner {
    fn collect(fields: &[Field]) -> FormState {
        let snapshots: Vec<FieldState> = fields.iter().map(Field::get).collect();
        FormState::from_fields(&snapshots)
    }

    fn recompute(&self) {
        let state = Self::collect(&self.fields);
        tracing::trace!(
            fields = self.fields.len(),
            valid = state.valid,
            dirty = state.dirty,
            "form state recomputed"
        );
        self.store.replace(state);
    }
}

/// A fixed, ordered group of fields with derived [`FormState`].
///
/// The form subscribes to every field and recomputes its state from scratch
/// whenever one of them publishes, so each field operation yields exactly
/// one form update. Dropping the form releases those subscriptions.
///
/// # Examples
///
/// ```
/// use formstate::prelude::*;
/// use serde_json::json;
///
/// let user = Field::new("user", [required().boxed()], FieldOptions::new());
/// let mail = Field::new("mail", [email().boxed()], FieldOptions::new().optional());
/// let form = Form::new([user.clone(), mail.clone()]);
///
/// assert!(!form.get().valid);
/// user.set_value("ada");
///
/// let state = form.get();
/// assert!(state.valid);
/// assert!(state.dirty);
/// assert_eq!(state.data["user"], json!("ada"));
/// assert_eq!(state.errors["mail"], ["email"]);
/// ```
pub struct Form {
    inner: Arc<FormInner>,
    subscriptions: Vec<Subscription>,
}

impl Form {
    /// Creates a form over `fields` and computes its initial state.
    pub fn new(fields: impl IntoIterator<Item = Field>) -> Self {
        let fields: Vec<Field> = fields.into_iter().collect();
        let inner = Arc::new(FormInner {
            store: Store::new(FormInner::collect(&fields)),
            fields,
        });

        let subscriptions = inner
            .fields
            .iter()
            .map(|field| {
                let weak: Weak<FormInner> = Arc::downgrade(&inner);
                field.subscribe(move |_| {
                    if let Some(inner) = weak.upgrade() {
                        inner.recompute();
                    }
                })
            })
            .collect();

        tracing::debug!(fields = inner.fields.len(), "form created");
        Self {
            inner,
            subscriptions,
        }
    }

    /// Returns the current aggregate state.
    #[must_use]
    pub fn get(&self) -> FormState {
        self.inner.store.get()
    }

    /// Calls `listener` with every form state published from now on.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&FormState) + Send + Sync + 'static,
    {
        self.inner.store.subscribe(listener)
    }

    /// The fields in construction order.
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.inner.fields
    }

    /// Looks a field up by name; with duplicates the last one wins.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.inner.fields.iter().rev().find(|field| field.name() == name)
    }

    /// Resets every field to its baseline, in order.
    pub fn reset(&self) {
        for field in &self.inner.fields {
            field.reset(None);
        }
    }

    /// Revalidates every field, forwarding `dirty` to each.
    pub fn revalidate(&self, dirty: Option<bool>) {
        for field in &self.inner.fields {
            field.revalidate(dirty);
        }
    }
}

impl fmt::Debug for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Form")
            .field("state", &self.get())
            .field("subscriptions", &self.subscriptions.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FieldOptions;
    use formstate_validator::prelude::*;
    use parking_lot::Mutex;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn text(name: &str, value: &str) -> Field {
        Field::new(
            name,
            [required().boxed()],
            FieldOptions::new().with_initial_value(value),
        )
    }

    #[test]
    fn aggregates_field_states() {
        let a = text("a", "x");
        let b = text("b", "");
        let form = Form::new([a, b]);

        let state = form.get();
        assert!(!state.valid);
        assert!(!state.dirty);
        assert_eq!(json!(state.data), json!({ "a": "x", "b": "" }));
        assert!(state.errors["a"].is_empty());
        assert_eq!(state.errors["b"], ["required"]);
    }

    #[test]
    fn recomputes_once_per_field_publish() {
        let a = text("a", "");
        let b = text("b", "");
        let form = Form::new([a.clone(), b.clone()]);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let _sub = form.subscribe(move |state| sink.lock().push(state.valid));

        a.set_value("1");
        b.set_value("2");
        assert_eq!(*seen.lock(), vec![false, true]);
        assert!(form.get().dirty);
    }

    #[test]
    fn reset_and_revalidate_reach_every_field() {
        let a = text("a", "init");
        let b = text("b", "");
        let form = Form::new([a.clone(), b.clone()]);
        a.set_value("");
        b.set_value("typed");

        form.reset();
        let state = form.get();
        assert!(!state.dirty);
        assert_eq!(state.data["a"], json!("init"));
        assert_eq!(state.data["b"], json!(""));

        form.revalidate(Some(true));
        assert!(a.is_dirty() && b.is_dirty());
        form.revalidate(None);
        assert!(a.is_dirty() && b.is_dirty());
    }

    #[test]
    fn field_lookup() {
        let first = text("dup", "1");
        let second = text("dup", "2");
        let form = Form::new([first, second.clone(), text("other", "")]);
        assert!(form.field("dup").is_some_and(|f| f.same_field(&second)));
        assert!(form.field("missing").is_none());
        assert_eq!(form.fields().len(), 3);
        assert_eq!(form.get().data["dup"], json!("2"));
    }

    #[test]
    fn dropping_form_releases_subscriptions() {
        let a = text("a", "");
        let form = Form::new([a.clone()]);
        assert_eq!(a.subscriber_count(), 1);
        drop(form);
        assert_eq!(a.subscriber_count(), 0);
        a.set_value("still works");
    }
}
