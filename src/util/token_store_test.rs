use super::*;

// Tests run against the process-local cell (non-hydrate build). Each test
// thread gets its own cell, so there is no cross-test interference.

#[test]
fn get_returns_none_when_nothing_stored() {
    clear();
    assert!(get().is_none());
}

#[test]
fn set_then_get_round_trips() {
    set("tok-abc");
    assert_eq!(get().as_deref(), Some("tok-abc"));
}

#[test]
fn set_replaces_the_previous_credential() {
    set("tok-old");
    set("tok-new");
    assert_eq!(get().as_deref(), Some("tok-new"));
}

#[test]
fn clear_removes_the_credential() {
    set("tok-abc");
    clear();
    assert!(get().is_none());
}

#[test]
fn clear_when_empty_is_a_no_op() {
    clear();
    clear();
    assert!(get().is_none());
}
