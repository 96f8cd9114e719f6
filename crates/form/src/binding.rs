//! Mirror field state onto a set of CSS-like class names
//!
//! A [`ClassBinding`] keeps one `valid`/`invalid` class and an independent
//! `dirty` class on a [`ClassList`] in sync with a field. It applies the
//! current state on attach, follows every published snapshot, and stops when
//! detached or dropped.

use std::borrow::Cow;
use std::sync::Arc;

use formstate_store::Subscription;
use indexmap::IndexSet;
use parking_lot::Mutex;

use crate::{Field, FieldState};

/// Something that holds class names, such as a UI element.
pub trait ClassList {
    /// Adds `class` if absent.
    fn add(&mut self, class: &str);
    /// Removes `class` if present.
    fn remove(&mut self, class: &str);
    /// Returns true if `class` is present.
    fn contains(&self, class: &str) -> bool;
}

/// In-memory [`ClassList`] preserving insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassSet {
    classes: IndexSet<String>,
}

impl ClassSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterates over the classes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    /// Number of classes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Returns true if no class is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl ClassList for ClassSet {
    fn add(&mut self, class: &str) {
        if !self.classes.contains(class) {
            self.classes.insert(class.to_owned());
        }
    }

    fn remove(&mut self, class: &str) {
        self.classes.shift_remove(class);
    }

    fn contains(&self, class: &str) -> bool {
        self.classes.contains(class)
    }
}

/// Which field to follow and which class names to use.
#[derive(Debug, Clone)]
pub struct BindingParams {
    /// The field to mirror.
    pub field: Field,
    /// Class present while the field is dirty. Defaults to `"dirty"`.
    pub dirty: Cow<'static, str>,
    /// Class present while the field is valid. Defaults to `"valid"`.
    pub valid: Cow<'static, str>,
    /// Class present while the field is invalid. Defaults to `"invalid"`.
    pub invalid: Cow<'static, str>,
}

impl BindingParams {
    /// Default class names for `field`.
    pub fn new(field: Field) -> Self {
        Self {
            field,
            dirty: Cow::Borrowed("dirty"),
            valid: Cow::Borrowed("valid"),
            invalid: Cow::Borrowed("invalid"),
        }
    }

    /// Overrides the dirty class.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_dirty(mut self, class: impl Into<Cow<'static, str>>) -> Self {
        self.dirty = class.into();
        self
    }

    /// Overrides the valid class.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_valid(mut self, class: impl Into<Cow<'static, str>>) -> Self {
        self.valid = class.into();
        self
    }

    /// Overrides the invalid class.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_invalid(mut self, class: impl Into<Cow<'static, str>>) -> Self {
        self.invalid = class.into();
        self
    }
}

// Only the names go into the listener; capturing the field would keep it
// alive through its own listener list.
#[derive(Clone)]
struct ClassNames {
    dirty: Cow<'static, str>,
    valid: Cow<'static, str>,
    invalid: Cow<'static, str>,
}

impl ClassNames {
    fn apply<C: ClassList + ?Sized>(&self, target: &mut C, state: &FieldState) {
        if state.dirty {
            target.add(&self.dirty);
        } else {
            target.remove(&self.dirty);
        }
        if state.valid {
            target.add(&self.valid);
            target.remove(&self.invalid);
        } else {
            target.add(&self.invalid);
            target.remove(&self.valid);
        }
    }
}

/// Live link between a field and a [`ClassList`].
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use parking_lot::Mutex;
/// use formstate::prelude::*;
///
/// let field = Field::new("name", [required().boxed()], FieldOptions::new());
/// let element = Arc::new(Mutex::new(ClassSet::new()));
/// let binding = ClassBinding::attach(Arc::clone(&element), BindingParams::new(field.clone()));
///
/// assert!(element.lock().contains("invalid"));
/// field.set_value("Ada");
/// assert!(element.lock().contains("valid"));
/// assert!(element.lock().contains("dirty"));
/// assert!(!element.lock().contains("invalid"));
///
/// drop(binding);
/// field.set_value("");
/// assert!(element.lock().contains("valid"));
/// ```
pub struct ClassBinding<C> {
    target: Arc<Mutex<C>>,
    subscription: Option<Subscription>,
}

impl<C> ClassBinding<C>
where
    C: ClassList + Send + 'static,
{
    /// Applies the field's current state to `target` and follows it.
    ///
    /// The listener locks `target` on every field update, on the thread that
    /// changed the field. Release any guard on `target` before changing the
    /// bound field from the same thread, or that call deadlocks.
    pub fn attach(target: Arc<Mutex<C>>, params: BindingParams) -> Self {
        let mut binding = Self {
            target,
            subscription: None,
        };
        binding.update(params);
        binding
    }

    /// Switches to new parameters, dropping the previous subscription.
    ///
    /// Classes applied under the old names are left in place.
    pub fn update(&mut self, params: BindingParams) {
        self.detach();

        let names = ClassNames {
            dirty: params.dirty,
            valid: params.valid,
            invalid: params.invalid,
        };
        names.apply(&mut *self.target.lock(), &params.field.get());

        let target = Arc::clone(&self.target);
        self.subscription = Some(
            params
                .field
                .subscribe(move |state| names.apply(&mut *target.lock(), state)),
        );
    }

    /// Stops following the field. Idempotent.
    pub fn detach(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
    }

    /// Returns true while the binding follows a field.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }

    /// The element being updated.
    #[must_use]
    pub fn target(&self) -> &Arc<Mutex<C>> {
        &self.target
    }
}

impl<C> std::fmt::Debug for ClassBinding<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassBinding")
            .field("attached", &self.subscription.is_some())
            .finish_non_exhaustive()
    }
}
