//! Published snapshots of fields and forms

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::Value;

/// Snapshot of a single field.
///
/// A new snapshot is published after every operation on the field;
/// subscribers never see a partially updated one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldState {
    /// Field name, used as the key in form data and errors.
    pub name: String,
    /// Current value.
    pub value: Value,
    /// Baseline restored by `reset`.
    pub initial_value: Value,
    /// Whether the field counts as valid.
    pub valid: bool,
    /// Whether the value changed since the last reset.
    pub dirty: bool,
    /// Kinds of every failing rule, in evaluation order.
    ///
    /// Always reflects raw rule output, so an optional empty field can be
    /// valid and still list errors.
    pub errors: Vec<String>,
}

/// Snapshot of a whole form, derived from its fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormState {
    /// True when every field is valid.
    pub valid: bool,
    /// True when any field is dirty.
    pub dirty: bool,
    /// Field name to current value, in field order.
    pub data: IndexMap<String, Value>,
    /// Field name to that field's errors, in field order.
    pub errors: IndexMap<String, Vec<String>>,
}

impl FormState {
    /// Aggregates field snapshots.
    ///
    /// When two fields share a name the later one wins in `data` and
    /// `errors`, while `valid`/`dirty` still account for both.
    pub fn from_fields<'a>(fields: impl IntoIterator<Item = &'a FieldState>) -> Self {
        let mut state = Self {
            valid: true,
            ..Self::default()
        };
        for field in fields {
            state.valid &= field.valid;
            state.dirty |= field.dirty;
            state.data.insert(field.name.clone(), field.value.clone());
            state.errors.insert(field.name.clone(), field.errors.clone());
        }
        state
    }

    /// All field errors concatenated in field order.
    #[must_use]
    pub fn error_list(&self) -> Vec<String> {
        self.errors.values().flatten().cloned().collect()
    }
}
