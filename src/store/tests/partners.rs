//! Tests for the partner CRUD operations, which mirror the course contract.

use super::*;
use crate::store::AppState;

#[test]
fn add_appends_partner() {
    let mut store = AppState::new();

    store.add_partner(partner("p1", "Northwind College"));

    assert_eq!(store.partners.len(), 1);
    assert_eq!(store.partners[0].name, "Northwind College");
}

#[test]
fn update_replaces_in_place() {
    let mut store = AppState::new();
    store.add_partner(partner("p1", "Old Name"));

    let mut replacement = partner("p1", "New Name");
    replacement.description = Some("Updated profile.".to_string());
    store.update_partner("p1", replacement.clone());

    assert_eq!(store.partners.len(), 1);
    assert_eq!(store.partners[0], replacement);
}

#[test]
fn update_unknown_id_is_a_no_op() {
    let mut store = AppState::new();
    store.add_partner(partner("p1", "Only Partner"));
    let before = store.partners.clone();

    store.update_partner("missing", partner("missing", "Ghost"));

    assert_eq!(store.partners, before);
}

#[test]
fn delete_removes_once() {
    let mut store = AppState::new();
    store.add_partner(partner("p1", "First"));
    store.add_partner(partner("p2", "Second"));

    store.delete_partner("p2");
    assert_eq!(store.partners.len(), 1);
    assert_eq!(store.partners[0].id, "p1");

    store.delete_partner("p2");
    assert_eq!(store.partners.len(), 1);
}
