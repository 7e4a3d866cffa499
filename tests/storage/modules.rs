//! Integration tests for relation modules
//!
//! The parent and master halves allocate IDs; the child and apprentice
//! halves remember where they are bound.

use ylikuutio_foundation::{EntityId, ErrorKind, MasterOf, ParentOf};
use ylikuutio_storage::{ApprenticeModule, ChildModule, MasterModule, ParentModule};

fn id(n: u32) -> EntityId {
    EntityId::new(n, 1)
}

#[test]
fn parent_module_reuses_freed_child_ids() {
    let mut module = ParentModule::new(ParentOf::Materials);
    for n in 0..4 {
        assert_eq!(module.bind_child(id(n)).unwrap(), n as usize);
    }
    assert_eq!(module.unbind_child(2).unwrap(), id(2));
    assert_eq!(module.number_of_children(), 3);
    assert_eq!(module.child(2), None);

    assert_eq!(module.bind_child(id(9)).unwrap(), 2);
    assert_eq!(module.child(2), Some(id(9)));
}

#[test]
fn parent_module_refuses_duplicate_child() {
    let mut module = ParentModule::new(ParentOf::Objects);
    module.bind_child(id(1)).unwrap();
    let err = module.bind_child(id(1)).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::AlreadyBound(0)));
    assert_eq!(module.number_of_children(), 1);
}

#[test]
fn children_iterate_in_child_id_order() {
    let mut module = ParentModule::new(ParentOf::Cameras);
    module.bind_child(id(5)).unwrap();
    module.bind_child(id(6)).unwrap();
    module.bind_child(id(7)).unwrap();
    module.unbind_child(0).unwrap();

    let children: Vec<_> = module.children().collect();
    assert_eq!(children, vec![(1, id(6)), (2, id(7))]);
}

#[test]
fn child_module_set_and_clear() {
    let mut child = ChildModule::new(ParentOf::Pipelines);
    assert!(!child.is_bound());

    child.set(id(1), 3);
    assert_eq!(child.parent(), Some(id(1)));
    assert_eq!(child.child_id(), Some(3));

    assert_eq!(child.clear(), Some((id(1), 3)));
    assert_eq!(child.parent(), None);
    assert_eq!(child.clear(), None);
}

#[test]
fn master_and_apprentice_halves() {
    let mut master = MasterModule::new(MasterOf::Species);
    let mut apprentice = ApprenticeModule::new(MasterOf::Species);

    let apprentice_id = master.bind_apprentice(id(4)).unwrap();
    apprentice.set(id(2), apprentice_id);

    assert_eq!(master.number_of_apprentices(), 1);
    assert_eq!(master.apprentice(apprentice_id), Some(id(4)));
    assert_eq!(apprentice.master(), Some(id(2)));
    assert_eq!(apprentice.role(), MasterOf::Species);

    assert_eq!(master.unbind_apprentice(apprentice_id).unwrap(), id(4));
    assert_eq!(apprentice.clear(), Some((id(2), 0)));
    assert_eq!(master.number_of_apprentices(), 0);
    assert!(!apprentice.is_bound());
}
