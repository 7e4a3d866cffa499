//! Integration tests for species

use ylikuutio_foundation::{ErrorKind, MasterOf};
use ylikuutio_ontology::{MaterialStruct, ObjectStruct, Species, SpeciesStruct};

use crate::common::{ecosystem, pipeline, scene, universe};

#[test]
fn species_uses_material_and_masters_objects() {
    let mut universe = universe();
    let s = scene(&mut universe);
    let p = pipeline(&mut universe, s);
    let m = universe
        .factory()
        .create_material(MaterialStruct::new(s, p));
    let species = universe.factory().create_species(
        SpeciesStruct::new(s, m)
            .with_model("cat.fbx", "fbx")
            .with_terrain(false),
    );
    let object = universe
        .factory()
        .create_object(ObjectStruct::new(s, species));

    assert_eq!(universe.master(species.id(), MasterOf::Species), Some(m.id()));
    assert_eq!(universe.master(object.id(), MasterOf::Objects), Some(species.id()));
    assert_eq!(universe.get(species).unwrap().model_filename(), "cat.fbx");
}

#[test]
fn moving_species_releases_objects_left_behind() {
    let mut universe = universe();
    let e = ecosystem(&mut universe);
    let s1 = scene(&mut universe);
    let s2 = scene(&mut universe);
    let p = pipeline(&mut universe, e);
    let m = universe
        .factory()
        .create_material(MaterialStruct::new(e, p));
    let species = universe
        .factory()
        .create_species(SpeciesStruct::new(s1, m));
    let object = universe
        .factory()
        .create_object(ObjectStruct::new(s1, species));

    Species::bind_to_new_scene_parent(&mut universe, species, s2).unwrap();

    assert_eq!(universe.master(object.id(), MasterOf::Objects), None);
    assert_eq!(universe.master(species.id(), MasterOf::Species), Some(m.id()));
    assert!(universe.exists(object.id()));
}

#[test]
fn ecosystem_species_keeps_objects_of_every_scene() {
    let mut universe = universe();
    let e1 = ecosystem(&mut universe);
    let e2 = ecosystem(&mut universe);
    let s1 = scene(&mut universe);
    let s2 = scene(&mut universe);
    let p = pipeline(&mut universe, e1);
    let m = universe
        .factory()
        .create_material(MaterialStruct::new(e1, p));
    let species = universe
        .factory()
        .create_species(SpeciesStruct::new(e1, m));
    universe
        .factory()
        .create_object(ObjectStruct::new(s1, species));
    universe
        .factory()
        .create_object(ObjectStruct::new(s2, species));

    Species::bind_to_new_ecosystem_parent(&mut universe, species, e2).unwrap();
    assert_eq!(universe.number_of_apprentices(species.id()), 2);
}

#[test]
fn material_from_another_scene_is_refused() {
    let mut universe = universe();
    let s1 = scene(&mut universe);
    let s2 = scene(&mut universe);
    let p = pipeline(&mut universe, s2);
    let foreign = universe
        .factory()
        .create_material(MaterialStruct::new(s2, p));
    let species = universe
        .factory()
        .create_species(SpeciesStruct::new(s1, foreign));

    // creation still succeeds, without the master
    assert_eq!(universe.parent(species.id()), Some(s1.id()));
    assert_eq!(universe.master(species.id(), MasterOf::Species), None);

    let err = Species::bind_to_new_material(&mut universe, species, foreign).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::SceneMismatch { .. }));
}
