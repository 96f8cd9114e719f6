//! # formstate
//!
//! Reactive form state: fields that validate themselves on every change and
//! forms that aggregate them.
//!
//! - [`Field`]: a named value with rules, a reset baseline and a dirty flag
//! - [`Form`]: derived `valid`/`dirty`/`data`/`errors` over a fixed set of fields
//! - [`ClassBinding`]: mirrors a field onto `valid`/`invalid`/`dirty` classes
//!
//! Rules come from [`formstate_validator`], re-exported as [`validator`].
//!
//! ## Quick Start
//!
//! ```
//! use formstate::prelude::*;
//!
//! let password = Field::new(
//!     "password",
//!     [required().boxed(), min(8).boxed()],
//!     FieldOptions::new(),
//! );
//! let confirm = Field::new(
//!     "confirm",
//!     [equals_field(password.reference()).boxed()],
//!     FieldOptions::new(),
//! );
//! let form = Form::new([password.clone(), confirm.clone()]);
//!
//! password.set_value("correct horse");
//! confirm.set_value("correct horse");
//! assert!(form.get().valid);
//!
//! // Cross-field rules are not re-run automatically.
//! password.set_value("battery staple");
//! assert!(form.get().valid);
//! form.revalidate(None);
//! assert_eq!(form.get().errors["confirm"], ["equal"]);
//! ```

mod binding;
mod field;
mod form;
mod options;
mod state;

pub use binding::{BindingParams, ClassBinding, ClassList, ClassSet};
pub use field::{Field, FieldRef};
pub use form::Form;
pub use formstate_store::Subscription;
pub use formstate_validator as validator;
pub use formstate_validator::Value;
pub use options::FieldOptions;
pub use state::{FieldState, FormState};

/// Common imports: fields, forms, bindings and every built-in rule.
pub mod prelude {
    pub use crate::{
        BindingParams, ClassBinding, ClassList, ClassSet, Field, FieldOptions, FieldRef,
        FieldState, Form, FormState, Subscription,
    };
    pub use formstate_validator::prelude::*;
}
