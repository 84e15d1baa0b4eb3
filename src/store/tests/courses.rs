//! Tests for the course CRUD operations.

use super::*;
use crate::store::AppState;

#[test]
fn seeded_store_starts_with_sample_catalog() {
    let store = AppState::seeded();

    assert_eq!(store.courses.len(), 6);
    assert_eq!(store.partners.len(), 6);
    assert!(store.applications.is_empty());
    assert!(store.notifications.is_empty());
}

/// Adding a course appends exactly one element retrievable by its id.
#[test]
fn add_appends_course() {
    let mut store = AppState::new();

    store.add_course(course("c1", "Intro to Testing"));

    assert_eq!(store.courses.len(), 1);
    let matches: Vec<_> = store.courses.iter().filter(|c| c.id == "c1").collect();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].title, "Intro to Testing");
}

/// Update is a full replace by id and never changes the collection length.
#[test]
fn update_replaces_in_place() {
    let mut store = AppState::new();
    store.add_course(course("c1", "Old Title"));
    store.add_course(course("c2", "Untouched"));

    let mut replacement = course("c1", "New Title");
    replacement.featured = true;
    store.update_course("c1", replacement.clone());

    assert_eq!(store.courses.len(), 2);
    assert_eq!(store.courses[0], replacement);
    assert_eq!(store.courses[1].title, "Untouched");
}

#[test]
fn update_unknown_id_is_a_no_op() {
    let mut store = AppState::new();
    store.add_course(course("c1", "Only Course"));
    let before = store.courses.clone();

    store.update_course("missing", course("missing", "Ghost"));

    assert_eq!(store.courses, before);
}

/// Delete removes exactly one element; deleting again changes nothing.
#[test]
fn delete_removes_once() {
    let mut store = AppState::new();
    store.add_course(course("c1", "First"));
    store.add_course(course("c2", "Second"));

    store.delete_course("c1");
    assert_eq!(store.courses.len(), 1);
    assert_eq!(store.courses[0].id, "c2");

    store.delete_course("c1");
    assert_eq!(store.courses.len(), 1);
}

#[test]
fn minted_ids_are_unique() {
    let mut store = AppState::new();

    let a = store.mint_id();
    let b = store.mint_id();
    let c = store.mint_id();

    assert_ne!(a, b);
    assert_ne!(b, c);
    assert_ne!(a, c);
}
