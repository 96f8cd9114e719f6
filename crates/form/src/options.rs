//! Field configuration

use serde::{Deserialize, Serialize};

use crate::Value;

/// Construction options for a [`Field`](crate::Field).
///
/// Every key is optional when deserializing:
///
/// ```
/// use formstate::FieldOptions;
///
/// let options: FieldOptions = serde_json::from_str(r#"{ "optional": true }"#)?;
/// assert!(options.optional);
/// assert!(options.initial_value.is_null());
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldOptions {
    /// Initial value, also the baseline restored by `reset`.
    pub initial_value: Value,
    /// An optional field is valid whenever its value is falsy.
    pub optional: bool,
    /// Initial dirty flag.
    pub dirty: bool,
}

impl FieldOptions {
    /// Default options: `null` value, required, clean.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial value.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_initial_value(mut self, value: impl Into<Value>) -> Self {
        self.initial_value = value.into();
        self
    }

    /// Marks the field optional.
    #[must_use = "builder methods must be chained or built"]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Sets the initial dirty flag.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_dirty(mut self, dirty: bool) -> Self {
        self.dirty = dirty;
        self
    }
}
