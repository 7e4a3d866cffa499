//! Integration tests for name registries
//!
//! Tests registration, collisions, and prefix completion.

use ylikuutio_foundation::{EntityId, ErrorKind};
use ylikuutio_storage::Registry;

fn id(n: u32) -> EntityId {
    EntityId::new(n, 1)
}

// =============================================================================
// Registration
// =============================================================================

#[test]
fn second_holder_is_refused_and_first_keeps_name() {
    let mut registry = Registry::new();
    registry.add("foo", id(1)).unwrap();
    let err = registry.add("foo", id(2)).unwrap_err();

    assert!(matches!(err.kind, ErrorKind::NameInUse { .. }));
    assert_eq!(registry.get("foo"), Some(id(1)));
    assert_eq!(registry.len(), 1);
}

#[test]
fn re_adding_same_holder_is_noop() {
    let mut registry = Registry::new();
    registry.add("foo", id(1)).unwrap();
    registry.add("foo", id(1)).unwrap();
    assert_eq!(registry.len(), 1);
}

#[test]
fn empty_name_is_refused() {
    let mut registry = Registry::new();
    let err = registry.add("", id(1)).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::EmptyName));
    assert!(registry.is_empty());
}

#[test]
fn removed_name_is_free_again() {
    let mut registry = Registry::new();
    registry.add("foo", id(1)).unwrap();
    assert_eq!(registry.remove("foo"), Some(id(1)));
    assert!(!registry.contains("foo"));
    registry.add("foo", id(2)).unwrap();
    assert_eq!(registry.get("foo"), Some(id(2)));
}

// =============================================================================
// Completion
// =============================================================================

fn stations() -> Registry {
    let mut registry = Registry::new();
    for (n, name) in ["tampere", "tammisaari", "turku", "toijala", "helsinki"]
        .into_iter()
        .enumerate()
    {
        registry.add(name, id(u32::try_from(n).unwrap())).unwrap();
    }
    registry
}

#[test]
fn completions_are_sorted_and_prefixed() {
    let registry = stations();
    assert_eq!(registry.completions("ta"), vec!["tammisaari", "tampere"]);
    assert_eq!(registry.number_of_completions("t"), 4);
    assert_eq!(registry.number_of_completions("x"), 0);
}

#[test]
fn complete_extends_to_common_prefix() {
    let registry = stations();
    assert_eq!(registry.complete("ta"), "tam");
    assert_eq!(registry.complete("tu"), "turku");
    assert_eq!(registry.complete("x"), "x");
}

#[test]
fn names_iterate_sorted() {
    let registry = stations();
    let names: Vec<_> = registry.names().collect();
    assert_eq!(
        names,
        vec!["helsinki", "tammisaari", "tampere", "toijala", "turku"]
    );
}
