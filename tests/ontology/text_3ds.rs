//! Integration tests for 3D text and its glyph objects

use ylikuutio_foundation::{ErrorKind, MasterOf, ParentOf, Request};
use ylikuutio_ontology::{
    BrainStruct, MaterialId, MaterialStruct, Object, ObjectId, SceneId, Text3d, Text3dId,
    Text3dStruct, Universe, VectorFont, VectorFontId, VectorFontStruct,
};

use crate::common::{ecosystem, pipeline, scene, universe};

fn glyphs(universe: &Universe, text: Text3dId) -> Vec<ObjectId> {
    universe
        .children(text.id(), ParentOf::Objects)
        .into_iter()
        .filter_map(|id| universe.typed(id))
        .collect()
}

fn shared_font(universe: &mut Universe) -> (MaterialId, VectorFontId) {
    let e = ecosystem(universe);
    let p = pipeline(universe, e);
    let material = universe
        .factory()
        .create_material(MaterialStruct::new(e, p));
    let font = universe.factory().create_vector_font(
        VectorFontStruct::new(material).with_font("kongtext.svg", "svg"),
    );
    (material, font)
}

#[test]
fn glyphs_are_laid_out_one_per_visible_character() {
    let mut universe = universe();
    let s = scene(&mut universe);
    let (_, font) = shared_font(&mut universe);
    let text = universe
        .factory()
        .create_text_3d(Text3dStruct::new(s, font, "a b").at([10.0, 0.0, 2.0]));

    let glyphs: Vec<ObjectId> = universe
        .apprentices(text.id(), MasterOf::Objects)
        .into_iter()
        .filter_map(|id| universe.typed(id))
        .collect();
    assert_eq!(glyphs.len(), 2);
    assert_eq!(
        universe.get(glyphs[0]).unwrap().cartesian_coordinates(),
        [10.0, 0.0, 2.0]
    );
    assert_eq!(
        universe.get(glyphs[1]).unwrap().cartesian_coordinates(),
        [12.0, 0.0, 2.0]
    );
    for glyph in &glyphs {
        assert_eq!(universe.parent(glyph.id()), Some(text.id()));
        assert_eq!(universe.scene(glyph.id()), Some(s));
    }
    assert_eq!(universe.get(text).unwrap().text(), "a b");
}

#[test]
fn text_outside_a_scene_still_owns_its_glyphs() {
    let mut universe = universe();
    let (_, font) = shared_font(&mut universe);
    let text = universe.factory().create_text_3d(Text3dStruct::new(
        Request::<SceneId>::none(),
        font,
        "hello",
    ));

    assert_eq!(universe.parent(text.id()), None);
    assert_eq!(universe.master(text.id(), MasterOf::Text3ds), Some(font.id()));
    assert_eq!(glyphs(&universe, text).len(), 5);
    assert_eq!(universe.number_of_apprentices(text.id()), 5);
}

#[test]
fn moving_text_takes_its_glyphs_along() {
    let mut universe = universe();
    let s1 = scene(&mut universe);
    let s2 = scene(&mut universe);
    let (_, font) = shared_font(&mut universe);
    let text = universe
        .factory()
        .create_text_3d(Text3dStruct::new(s1, font, "abc"));

    Text3d::bind_to_new_scene_parent(&mut universe, text, s2).unwrap();

    let moved = glyphs(&universe, text);
    assert_eq!(moved.len(), 3);
    for glyph in &moved {
        assert_eq!(universe.scene(glyph.id()), Some(s2));
        assert_eq!(universe.master(glyph.id(), MasterOf::Objects), Some(text.id()));
    }
    assert_eq!(universe.number_of_apprentices(text.id()), 3);
    assert!(universe.children(s1.id(), ParentOf::Objects).is_empty());
    assert_eq!(universe.master(text.id(), MasterOf::Text3ds), Some(font.id()));
}

#[test]
fn moving_text_releases_brains_of_its_glyphs() {
    let mut universe = universe();
    let s1 = scene(&mut universe);
    let s2 = scene(&mut universe);
    let (_, font) = shared_font(&mut universe);
    let brain = universe.factory().create_brain(BrainStruct::new(s1));
    let text = universe
        .factory()
        .create_text_3d(Text3dStruct::new(s1, font, "a"));
    let glyph = glyphs(&universe, text)[0];
    Object::bind_to_new_brain(&mut universe, glyph, brain).unwrap();

    Text3d::bind_to_new_scene_parent(&mut universe, text, s2).unwrap();

    assert_eq!(universe.master(glyph.id(), MasterOf::Movables), None);
    assert_eq!(universe.number_of_apprentices(brain.id()), 0);
}

#[test]
fn destroying_text_destroys_its_glyphs() {
    let mut universe = universe();
    let s = scene(&mut universe);
    let (_, font) = shared_font(&mut universe);
    let before = universe.number_of_entities();
    let text = universe
        .factory()
        .create_text_3d(Text3dStruct::new(s, font, "abc"));
    let letters = glyphs(&universe, text);
    assert_eq!(universe.number_of_entities(), before + 4);

    universe.destroy(text.id()).unwrap();

    assert_eq!(universe.number_of_entities(), before);
    assert!(letters.iter().all(|glyph| !universe.exists(glyph.id())));
    assert!(universe.children(s.id(), ParentOf::Objects).is_empty());
    assert_eq!(universe.number_of_apprentices(font.id()), 0);
}

#[test]
fn glyph_can_be_reassigned_to_another_text() {
    let mut universe = universe();
    let s = scene(&mut universe);
    let (_, font) = shared_font(&mut universe);
    let first = universe
        .factory()
        .create_text_3d(Text3dStruct::new(s, font, "x"));
    let second = universe
        .factory()
        .create_text_3d(Text3dStruct::new(s, font, "y"));
    let glyph = universe
        .typed::<ObjectId>(universe.apprentices(first.id(), MasterOf::Objects)[0])
        .unwrap();

    Object::bind_to_new_text_3d_master(&mut universe, glyph, second).unwrap();
    assert_eq!(universe.number_of_apprentices(first.id()), 0);
    assert_eq!(universe.number_of_apprentices(second.id()), 2);
}

#[test]
fn font_in_another_scene_is_refused() {
    let mut universe = universe();
    let s1 = scene(&mut universe);
    let s2 = scene(&mut universe);
    let (_, shared) = shared_font(&mut universe);
    let p = pipeline(&mut universe, s2);
    let material = universe
        .factory()
        .create_material(MaterialStruct::new(s2, p));
    let foreign = universe
        .factory()
        .create_vector_font(VectorFontStruct::new(material));
    let text = universe
        .factory()
        .create_text_3d(Text3dStruct::new(s1, shared, "z"));

    let err = Text3d::bind_to_new_vector_font_master(&mut universe, text, foreign).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::SceneMismatch { .. }));
    assert_eq!(universe.master(text.id(), MasterOf::Text3ds), Some(shared.id()));
}

#[test]
fn vector_font_moves_between_materials() {
    let mut universe = universe();
    let (first, font) = shared_font(&mut universe);
    let (second, _) = shared_font(&mut universe);

    VectorFont::bind_to_new_material_parent(&mut universe, font, second).unwrap();
    assert_eq!(universe.parent(font.id()), Some(second.id()));
    assert_eq!(universe.number_of_children(first.id()), 0);
    assert_eq!(universe.get(font).unwrap().font_filename(), "kongtext.svg");
}
