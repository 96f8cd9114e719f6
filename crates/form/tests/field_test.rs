//! Field lifecycle through the public API

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use formstate::Value;
use formstate::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;

fn username() -> Field {
    formstate_log::init_test();
    Field::new(
        "username",
        [all![required(), range(3, 8)].boxed()],
        FieldOptions::new(),
    )
}

#[test]
fn new_field_is_validated_but_clean() {
    let field = username();
    let state = field.get();
    assert_eq!(state.value, json!(null));
    assert!(!state.valid);
    assert!(!state.dirty);
    assert_eq!(state.errors, ["all", "required", "range"]);
}

#[rstest]
#[case(json!("al"), false, vec!["all", "range"])]
#[case(json!("alice"), true, vec![])]
#[case(json!("alexandria"), false, vec!["all", "range"])]
fn set_value_validates_and_marks_dirty(
    #[case] value: Value,
    #[case] valid: bool,
    #[case] errors: Vec<&str>,
) {
    let field = username();
    field.set_value(value.clone());

    let state = field.get();
    assert_eq!(state.value, value);
    assert_eq!(state.valid, valid);
    assert!(state.dirty);
    assert_eq!(state.errors, errors);
}

#[test]
fn set_value_with_keeps_clean() {
    let field = username();
    field.set_value_with("alice", false);
    assert!(field.is_valid());
    assert!(!field.is_dirty());
}

#[test]
fn update_sees_current_snapshot() {
    let field = Field::new(
        "count",
        [],
        FieldOptions::new().with_initial_value(1),
    );
    field.update(|state| json!(state.value.as_i64().unwrap_or(0) + 1));
    field.update(|state| json!(state.value.as_i64().unwrap_or(0) * 10));
    assert_eq!(field.value(), json!(20));
    assert!(field.is_dirty());

    field.update_with(|_| json!(0), false);
    assert!(!field.is_dirty());
}

#[test]
fn optional_empty_field_is_valid_but_keeps_errors() {
    formstate_log::init_test();
    let nickname = Field::new(
        "nickname",
        [min(3).boxed()],
        FieldOptions::new().optional(),
    );
    let state = nickname.get();
    assert!(state.valid);
    assert_eq!(state.errors, ["min"]);

    nickname.set_value("al");
    assert!(!nickname.is_valid());

    nickname.set_value("");
    assert!(nickname.is_valid());
    assert_eq!(nickname.get().errors, ["min"]);
}

#[test]
fn revalidate_does_not_dirty() {
    let field = username();
    field.revalidate(None);
    assert!(!field.is_dirty());

    field.revalidate(Some(true));
    assert!(field.is_dirty());
    field.revalidate(None);
    assert!(field.is_dirty());
}

#[test]
fn force_valid_overrides_until_next_change() {
    let field = username();
    field.force_valid(true, None);
    let state = field.get();
    assert!(state.valid);
    assert!(!state.dirty);
    assert_eq!(state.errors, ["all", "required", "range"]);

    field.set_value("al");
    assert!(!field.is_valid());
}

#[test]
fn reset_restores_or_rebases() {
    let field = Field::new(
        "city",
        [required().boxed()],
        FieldOptions::new().with_initial_value("Oslo"),
    );
    field.set_value("Bergen");
    field.reset(None);
    assert_eq!(field.value(), json!("Oslo"));
    assert!(!field.is_dirty());

    field.reset(Some(json!("Tromsø")));
    let state = field.get();
    assert_eq!(state.value, json!("Tromsø"));
    assert_eq!(state.initial_value, json!("Tromsø"));
    assert!(!state.dirty);

    field.set_initial_value("Bodø");
    assert_eq!(field.value(), json!("Tromsø"));
    field.reset(None);
    assert_eq!(field.value(), json!("Bodø"));
}

#[test]
fn every_operation_publishes_once() {
    let field = username();
    let count = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&count);
    let _sub = field.subscribe(move |_| {
        seen.fetch_add(1, Ordering::SeqCst);
    });

    field.set_value("alice");
    field.update(|_| json!("bob"));
    field.set_initial_value("carol");
    field.force_valid(false, Some(false));
    field.set_dirty(true);
    field.revalidate(None);
    field.reset(None);

    assert_eq!(count.load(Ordering::SeqCst), 7);
}

#[test]
fn dropped_subscription_stops_notifications() {
    let field = username();
    let count = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&count);
    let sub = field.subscribe(move |_| {
        seen.fetch_add(1, Ordering::SeqCst);
    });

    field.set_value("alice");
    drop(sub);
    field.set_value("bob");

    assert_eq!(count.load(Ordering::SeqCst), 1);
    assert_eq!(field.subscriber_count(), 0);
}

#[test]
fn equals_field_reads_live_value() {
    formstate_log::init_test();
    let password = Field::new("password", [required().boxed()], FieldOptions::new());
    let confirm = Field::new(
        "confirm",
        [equals_field(password.reference()).boxed()],
        FieldOptions::new(),
    );

    // both null
    assert!(confirm.is_valid());

    password.set_value("s3cret");
    confirm.set_value("s3cret");
    assert!(confirm.is_valid());

    password.set_value("changed");
    assert!(confirm.is_valid());
    confirm.revalidate(None);
    assert!(!confirm.is_valid());
    assert_eq!(confirm.get().errors, ["equal"]);
}

#[test]
fn field_ref_reads_null_after_drop() {
    let source = Field::new("a", [], FieldOptions::new().with_initial_value("x"));
    let reference = source.reference();
    assert!(reference.upgrade().is_some_and(|f| f.same_field(&source)));

    drop(source);
    assert!(reference.upgrade().is_none());
    assert_eq!(reference.current_value(), json!(null));
}
