//! Macros for creating validators with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`rule!`] — Create a leaf rule (struct + `Validate` impl + kind override + factory fn)
//! - [`all!`] — Combine heterogeneous validators with [`AllOf`](crate::combinators::AllOf)
//! - [`any!`] — Combine heterogeneous validators with [`AnyOf`](crate::combinators::AnyOf)
//! - [`none!`] — Combine heterogeneous validators with [`NoneOf`](crate::combinators::NoneOf)
//!
//! # Examples
//!
//! ```
//! use formstate_validator::prelude::*;
//! use formstate_validator::rule;
//! use serde_json::json;
//!
//! rule! {
//!     /// Passes for even integers.
//!     pub Even {} => "even";
//!     check(self, input) { input.as_i64().is_some_and(|n| n % 2 == 0) }
//!     fn even();
//! }
//!
//! assert!(even().validate(&json!(4)).passed);
//! assert_eq!(even().with_kind("odd?").validate(&json!(3)).kind, "odd?");
//! ```

// ============================================================================
// RULE MACRO
// ============================================================================

/// Creates a leaf rule: struct definition, constructor, kind override,
/// `Validate` implementation and factory function.
///
/// The struct always carries a `kind` tag initialised from the expression
/// after `=>` (anything convertible into `Cow<'static, str>`, typically a
/// [`RuleKind`](crate::foundation::RuleKind)). `with_kind` replaces it.
/// The check block evaluates to `bool`; the macro wraps it into a leaf
/// [`ValidationResult`](crate::foundation::ValidationResult).
///
/// `#[derive(Debug, Clone)]` is always applied. Add extra derives via `#[derive(...)]`.
///
/// The generated factory takes the struct's fields in declaration order;
/// omit the `fn` line to write a factory with a different signature.
#[macro_export]
macro_rules! rule {
    // ── Rule + factory fn ────────────────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),* $(,)? } => $kind:expr;
        check($self_:ident, $inp:ident) $check:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::rule! {
            $(#[$meta])*
            $vis $name { $($field: $fty),* } => $kind;
            check($self_, $inp) $check
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Rule only, factory written by hand ───────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),* $(,)? } => $kind:expr;
        check($self_:ident, $inp:ident) $check:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $($field: $fty,)*
            kind: ::std::borrow::Cow<'static, str>,
        }

        #[allow(clippy::new_without_default)]
        impl $name {
            /// Creates the rule with its default kind.
            #[must_use]
            pub fn new($($field: $fty),*) -> Self {
                Self {
                    $($field,)*
                    kind: ::std::convert::Into::into($kind),
                }
            }

            /// Overrides the kind tag reported in results.
            #[must_use = "builder methods must be chained or built"]
            pub fn with_kind(mut self, kind: impl Into<::std::borrow::Cow<'static, str>>) -> Self {
                self.kind = kind.into();
                self
            }

            /// Returns the kind tag reported in results.
            #[must_use]
            pub fn kind(&self) -> &str {
                &self.kind
            }
        }

        impl $crate::foundation::Validate for $name {
            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &$crate::Value) -> $crate::foundation::ValidationResult {
                let passed: bool = $check;
                $crate::foundation::ValidationResult::new($self_.kind.clone(), passed)
            }
        }
    };
}

// ============================================================================
// VARIADIC COMBINATOR MACROS
// ============================================================================

/// Combines validators of different types with [`AllOf`](crate::combinators::AllOf).
///
/// ```
/// use formstate_validator::prelude::*;
/// use serde_json::json;
///
/// let v = all![required(), max(3.0)];
/// assert!(v.validate(&json!("abc")).passed);
/// assert!(!v.validate(&json!("abcd")).passed);
/// ```
#[macro_export]
macro_rules! all {
    ($($v:expr),* $(,)?) => {
        $crate::combinators::all([$($crate::foundation::Validator::new($v)),*])
    };
}

/// Combines validators of different types with [`AnyOf`](crate::combinators::AnyOf).
#[macro_export]
macro_rules! any {
    ($($v:expr),* $(,)?) => {
        $crate::combinators::any([$($crate::foundation::Validator::new($v)),*])
    };
}

/// Combines validators of different types with [`NoneOf`](crate::combinators::NoneOf).
#[macro_export]
macro_rules! none {
    ($($v:expr),* $(,)?) => {
        $crate::combinators::none([$($crate::foundation::Validator::new($v)),*])
    };
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::foundation::{RuleKind, Validate};
    use serde_json::json;

    rule! {
        /// A test rule without configuration.
        TestNotNull {} => "not_null";
        check(self, input) { !input.is_null() }
        fn test_not_null();
    }

    rule! {
        /// A test rule with configuration.
        TestAtLeast { bound: i64 } => RuleKind::Min;
        check(self, input) { input.as_i64().is_some_and(|n| n >= self.bound) }
        fn test_at_least(bound: i64);
    }

    #[test]
    fn unit_rule() {
        assert!(test_not_null().validate(&json!(1)).passed);
        assert!(!test_not_null().validate(&json!(null)).passed);
        assert_eq!(test_not_null().kind(), "not_null");
    }

    #[test]
    fn configured_rule() {
        let v = test_at_least(3);
        assert!(v.validate(&json!(3)).passed);
        assert!(!v.validate(&json!(2)).passed);
        assert_eq!(v.validate(&json!(2)).kind, "min");
    }

    #[test]
    fn kind_override() {
        let v = test_at_least(3).with_kind("foo");
        assert_eq!(v.validate(&json!(5)).kind, "foo");
        assert_eq!(v.validate(&json!(1)).kind, "foo");
    }

    #[test]
    fn variadic_macros() {
        let v = all![test_not_null(), test_at_least(1)];
        assert!(v.validate(&json!(1)).passed);
        let v = any![test_at_least(10), test_not_null()];
        assert!(v.validate(&json!(1)).passed);
        let v = none![test_at_least(10)];
        assert!(v.validate(&json!(1)).passed);
    }
}
