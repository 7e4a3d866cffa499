//! Integration tests for holobionts

use ylikuutio_foundation::{ErrorKind, MasterOf};
use ylikuutio_ontology::{BrainStruct, Holobiont, HolobiontStruct, SymbiosisStruct};

use crate::common::{ecosystem, pipeline, scene, universe};

#[test]
fn holobiont_instances_symbiosis() {
    let mut universe = universe();
    let s = scene(&mut universe);
    let p = pipeline(&mut universe, s);
    let y = universe
        .factory()
        .create_symbiosis(SymbiosisStruct::new(s, p));
    let h = universe
        .factory()
        .create_holobiont(HolobiontStruct::new(s, y).at([0.0, 5.0, 0.0]));

    assert_eq!(universe.master(h.id(), MasterOf::Holobionts), Some(y.id()));
    assert_eq!(universe.get(h).unwrap().cartesian_coordinates(), [0.0, 5.0, 0.0]);
}

#[test]
fn moving_holobiont_releases_scene_symbiosis_and_brain() {
    let mut universe = universe();
    let s1 = scene(&mut universe);
    let s2 = scene(&mut universe);
    let p = pipeline(&mut universe, s1);
    let y = universe
        .factory()
        .create_symbiosis(SymbiosisStruct::new(s1, p));
    let brain = universe.factory().create_brain(BrainStruct::new(s1));
    let h = universe
        .factory()
        .create_holobiont(HolobiontStruct::new(s1, y).with_brain(brain));

    Holobiont::bind_to_new_scene_parent(&mut universe, h, s2).unwrap();

    assert_eq!(universe.master(h.id(), MasterOf::Holobionts), None);
    assert_eq!(universe.master(h.id(), MasterOf::Movables), None);
    assert_eq!(universe.number_of_apprentices(y.id()), 0);
}

#[test]
fn ecosystem_symbiosis_follows_holobiont_anywhere() {
    let mut universe = universe();
    let e = ecosystem(&mut universe);
    let s1 = scene(&mut universe);
    let s2 = scene(&mut universe);
    let p = pipeline(&mut universe, e);
    let y = universe
        .factory()
        .create_symbiosis(SymbiosisStruct::new(e, p));
    let h = universe
        .factory()
        .create_holobiont(HolobiontStruct::new(s1, y));

    Holobiont::bind_to_new_scene_parent(&mut universe, h, s2).unwrap();
    assert_eq!(universe.master(h.id(), MasterOf::Holobionts), Some(y.id()));
}

#[test]
fn symbiosis_in_another_scene_is_refused() {
    let mut universe = universe();
    let s1 = scene(&mut universe);
    let s2 = scene(&mut universe);
    let p1 = pipeline(&mut universe, s1);
    let p2 = pipeline(&mut universe, s2);
    let local = universe
        .factory()
        .create_symbiosis(SymbiosisStruct::new(s1, p1));
    let foreign = universe
        .factory()
        .create_symbiosis(SymbiosisStruct::new(s2, p2));
    let h = universe
        .factory()
        .create_holobiont(HolobiontStruct::new(s1, local));

    let err = Holobiont::bind_to_new_symbiosis_master(&mut universe, h, foreign).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::SceneMismatch { .. }));
    assert_eq!(universe.master(h.id(), MasterOf::Holobionts), Some(local.id()));
}
