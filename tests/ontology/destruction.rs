//! Integration tests for destroying entities

use ylikuutio_foundation::{ErrorKind, MasterOf, ParentOf};
use ylikuutio_ontology::{
    CameraStruct, MaterialStruct, ObjectStruct, SceneStruct, SpeciesStruct, Text3dStruct,
    VectorFontStruct,
};

use crate::common::{ecosystem, pipeline, scene, universe};

#[test]
fn destroying_a_scene_destroys_everything_in_it() {
    let mut universe = universe();
    let before = universe.number_of_entities();
    let s = universe
        .factory()
        .create_scene(SceneStruct::new().with_global_name("doomed"));
    let p = pipeline(&mut universe, s);
    let m = universe
        .factory()
        .create_material(MaterialStruct::new(s, p));
    let species = universe
        .factory()
        .create_species(SpeciesStruct::new(s, m));
    universe
        .factory()
        .create_object(ObjectStruct::new(s, species));
    assert_eq!(universe.number_of_descendants(s.id()), 4);

    universe.destroy(s.id()).unwrap();

    assert_eq!(universe.number_of_entities(), before);
    assert!(!universe.exists(p.id()));
    assert_eq!(universe.get_entity("doomed"), None);
    assert!(universe.children(universe.root(), ParentOf::Scenes).is_empty());
}

#[test]
fn apprentices_survive_their_master() {
    let mut universe = universe();
    let e = ecosystem(&mut universe);
    let s = scene(&mut universe);
    let p = pipeline(&mut universe, e);
    let m = universe
        .factory()
        .create_material(MaterialStruct::new(s, p));

    universe.destroy(p.id()).unwrap();

    assert!(universe.exists(m.id()));
    assert_eq!(universe.master(m.id(), MasterOf::Materials), None);
    assert_eq!(universe.parent(m.id()), Some(s.id()));
}

#[test]
fn destroying_an_apprentice_frees_its_apprentice_id() {
    let mut universe = universe();
    let s = scene(&mut universe);
    let p = pipeline(&mut universe, s);
    let first = universe
        .factory()
        .create_material(MaterialStruct::new(s, p));
    universe
        .factory()
        .create_material(MaterialStruct::new(s, p));

    universe.destroy(first.id()).unwrap();
    assert_eq!(universe.number_of_apprentices(p.id()), 1);

    let third = universe
        .factory()
        .create_material(MaterialStruct::new(s, p));
    assert_eq!(universe.apprentice_id(third.id(), MasterOf::Materials), Some(0));
    assert_eq!(universe.child_id(third.id()), Some(0));
}

#[test]
fn destroying_the_active_camera_clears_it() {
    let mut universe = universe();
    let s = scene(&mut universe);
    let camera = universe.factory().create_camera(CameraStruct::new(s));
    universe.set_active_camera(s, Some(camera)).unwrap();

    universe.destroy(camera.id()).unwrap();
    assert_eq!(universe.get(s).unwrap().active_camera(), None);
}

#[test]
fn destroying_a_material_takes_its_fonts_but_not_their_texts() {
    let mut universe = universe();
    let e = ecosystem(&mut universe);
    let s = scene(&mut universe);
    let p = pipeline(&mut universe, e);
    let m = universe
        .factory()
        .create_material(MaterialStruct::new(e, p));
    let font = universe
        .factory()
        .create_vector_font(VectorFontStruct::new(m));
    let text = universe
        .factory()
        .create_text_3d(Text3dStruct::new(s, font, "ok"));

    universe.destroy(m.id()).unwrap();

    assert!(!universe.exists(font.id()));
    assert!(universe.exists(text.id()));
    assert_eq!(universe.master(text.id(), MasterOf::Text3ds), None);
    assert_eq!(universe.number_of_apprentices(text.id()), 2);
}

#[test]
fn stale_handles_are_refused() {
    let mut universe = universe();
    let s = scene(&mut universe);
    universe.destroy(s.id()).unwrap();

    assert!(universe.get(s).is_err());
    assert!(universe.destroy(s.id()).is_err());

    // the slot is reused under a new generation
    let again = scene(&mut universe);
    assert_eq!(again.id().slot(), s.id().slot());
    assert_ne!(again, s);
    assert!(universe.get(s).is_err());
}

#[test]
fn the_universe_cannot_be_destroyed() {
    let mut universe = universe();
    let root = universe.root();
    let err = universe.destroy(root).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::CannotBeErased(_)));
    assert!(universe.exists(root));
}
