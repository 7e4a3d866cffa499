//! Integration tests for the generational arena
//!
//! Tests spawning, destruction, index reuse, and stale handle detection.

use ylikuutio_foundation::ErrorKind;
use ylikuutio_storage::Arena;

#[test]
fn next_id_predicts_spawn() {
    let mut arena = Arena::new();
    let predicted = arena.next_id();
    assert_eq!(arena.spawn("a"), predicted);

    arena.destroy(predicted).unwrap();
    let predicted = arena.next_id();
    assert_eq!(arena.spawn("b"), predicted);
}

#[test]
fn destroyed_handle_goes_stale_when_index_is_reused() {
    let mut arena = Arena::new();
    let old = arena.spawn("old");
    arena.destroy(old).unwrap();
    let new = arena.spawn("new");

    assert_eq!(old.index, new.index);
    assert_ne!(old.generation, new.generation);
    assert!(!arena.exists(old));
    assert!(arena.exists(new));

    let err = arena.get(old).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::StaleEntity(_)));
    assert_eq!(*arena.get(new).unwrap(), "new");
}

#[test]
fn destroying_twice_fails() {
    let mut arena = Arena::new();
    let id = arena.spawn(1);
    assert_eq!(arena.destroy(id).unwrap(), 1);
    assert!(arena.destroy(id).is_err());
    assert!(arena.is_empty());
}

#[test]
fn iter_skips_destroyed() {
    let mut arena = Arena::new();
    let a = arena.spawn('a');
    let b = arena.spawn('b');
    let c = arena.spawn('c');
    arena.destroy(b).unwrap();

    let live: Vec<_> = arena.iter().map(|(id, value)| (id, *value)).collect();
    assert_eq!(live, vec![(a, 'a'), (c, 'c')]);
    assert_eq!(arena.len(), 2);
}

#[test]
fn get_mut_writes_through() {
    let mut arena = Arena::new();
    let id = arena.spawn(String::from("before"));
    arena.get_mut(id).unwrap().push_str(" after");
    assert_eq!(arena.get(id).unwrap(), "before after");
}
