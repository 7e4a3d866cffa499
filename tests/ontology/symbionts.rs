//! Integration tests for symbiont materials, symbiont species and bionts

use ylikuutio_foundation::{ErrorKind, MasterOf, ParentOf, Request};
use ylikuutio_ontology::{
    Biont, BiontStruct, Holobiont, HolobiontStruct, SceneId, SymbiontMaterial, SymbiontMaterialId,
    SymbiontMaterialStruct, SymbiontSpecies, SymbiontSpeciesId, SymbiontSpeciesStruct,
    SymbiosisId, SymbiosisStruct, Universe,
};

use crate::common::{pipeline, scene, universe};

/// A symbiosis of two materials: bark with the trunk, leaves with the crown and the fruit.
fn tree(
    universe: &mut Universe,
    parent: SceneId,
) -> (SymbiosisId, [SymbiontMaterialId; 2], [SymbiontSpeciesId; 3]) {
    let p = pipeline(universe, parent);
    let symbiosis = universe.factory().create_symbiosis(
        SymbiosisStruct::new(parent, p).with_model("tree.fbx", "fbx"),
    );
    let bark = universe.factory().create_symbiont_material(
        SymbiontMaterialStruct::new(symbiosis).with_texture("bark.png", "png"),
    );
    let leaves = universe
        .factory()
        .create_symbiont_material(SymbiontMaterialStruct::new(symbiosis));
    let trunk = universe
        .factory()
        .create_symbiont_species(SymbiontSpeciesStruct::new(bark, 0));
    let crown = universe
        .factory()
        .create_symbiont_species(SymbiontSpeciesStruct::new(leaves, 1));
    let fruit = universe.factory().create_symbiont_species(
        SymbiontSpeciesStruct::new(leaves, 2).with_light_position([0.0, 10.0, 0.0]),
    );
    (symbiosis, [bark, leaves], [trunk, crown, fruit])
}

// =============================================================================
// Symbiosis Parts
// =============================================================================

#[test]
fn symbiosis_owns_materials_which_own_species() {
    let mut universe = universe();
    let s = scene(&mut universe);
    let (symbiosis, [bark, leaves], [trunk, crown, fruit]) = tree(&mut universe, s);

    assert_eq!(
        universe.children(symbiosis.id(), ParentOf::SymbiontMaterials),
        vec![bark.id(), leaves.id()]
    );
    assert_eq!(universe.parent(trunk.id()), Some(bark.id()));
    assert_eq!(universe.scene(fruit.id()), Some(s));
    assert_eq!(
        universe.symbiont_species(symbiosis),
        vec![trunk, crown, fruit]
    );
    assert_eq!(universe.number_of_descendants(symbiosis.id()), 5);
    assert_eq!(universe.get(bark).unwrap().texture_filename(), "bark.png");
    assert_eq!(universe.get(fruit).unwrap().mesh_index(), 2);
    assert_eq!(universe.get(fruit).unwrap().light_position(), [0.0, 10.0, 0.0]);
}

#[test]
fn symbiont_species_moves_between_materials() {
    let mut universe = universe();
    let s = scene(&mut universe);
    let (symbiosis, [bark, leaves], [trunk, crown, fruit]) = tree(&mut universe, s);

    SymbiontSpecies::bind_to_new_symbiont_material_parent(&mut universe, fruit, bark).unwrap();

    assert_eq!(universe.parent(fruit.id()), Some(bark.id()));
    assert_eq!(universe.children(leaves.id(), ParentOf::SymbiontSpecies), vec![crown.id()]);
    assert_eq!(
        universe.symbiont_species(symbiosis),
        vec![trunk, fruit, crown]
    );
}

#[test]
fn symbiont_material_moves_between_symbioses() {
    let mut universe = universe();
    let s = scene(&mut universe);
    let (first, [bark, _], [trunk, ..]) = tree(&mut universe, s);
    let (second, ..) = tree(&mut universe, s);

    SymbiontMaterial::bind_to_new_symbiosis_parent(&mut universe, bark, second).unwrap();

    assert_eq!(universe.parent(bark.id()), Some(second.id()));
    assert_eq!(universe.symbiont_species(first).len(), 2);
    assert!(universe.symbiont_species(second).contains(&trunk));
}

// =============================================================================
// Bionts
// =============================================================================

#[test]
fn holobiont_creates_one_biont_per_symbiont_species() {
    let mut universe = universe();
    let s = scene(&mut universe);
    let (symbiosis, _, species) = tree(&mut universe, s);
    let h = universe
        .factory()
        .create_holobiont(HolobiontStruct::new(s, symbiosis).at([1.0, 2.0, 3.0]));

    let bionts = universe.bionts(h);
    assert_eq!(bionts.len(), 3);
    for (biont, species) in bionts.iter().zip(species) {
        assert_eq!(universe.parent(biont.id()), Some(h.id()));
        assert_eq!(universe.master(biont.id(), MasterOf::Bionts), Some(species.id()));
        assert_eq!(universe.get(*biont).unwrap().cartesian_coordinates(), [1.0, 2.0, 3.0]);
    }
    assert_eq!(universe.number_of_apprentices(species[1].id()), 1);
}

#[test]
fn holobiont_without_symbiosis_has_no_bionts() {
    let mut universe = universe();
    let s = scene(&mut universe);
    let h = universe.factory().create_holobiont(HolobiontStruct::new(
        s,
        Request::<SymbiosisId>::none(),
    ));

    assert!(universe.bionts(h).is_empty());
}

#[test]
fn biont_moves_between_holobionts() {
    let mut universe = universe();
    let s = scene(&mut universe);
    let (symbiosis, _, _) = tree(&mut universe, s);
    let first = universe
        .factory()
        .create_holobiont(HolobiontStruct::new(s, symbiosis));
    let second = universe
        .factory()
        .create_holobiont(HolobiontStruct::new(s, symbiosis));
    let biont = universe.bionts(first)[1];
    let species = universe.master(biont.id(), MasterOf::Bionts);

    Biont::bind_to_new_holobiont_parent(&mut universe, biont, second).unwrap();

    assert_eq!(universe.bionts(first).len(), 2);
    assert_eq!(universe.bionts(second).len(), 4);
    assert_eq!(universe.child_id(biont.id()), Some(3));
    assert_eq!(universe.master(biont.id(), MasterOf::Bionts), species);
}

#[test]
fn biont_refuses_species_of_another_scene() {
    let mut universe = universe();
    let s1 = scene(&mut universe);
    let s2 = scene(&mut universe);
    let (here, _, [trunk, ..]) = tree(&mut universe, s1);
    let (_, _, [foreign, ..]) = tree(&mut universe, s2);
    let h = universe
        .factory()
        .create_holobiont(HolobiontStruct::new(s1, here));
    let biont = universe.bionts(h)[0];

    let err =
        Biont::bind_to_new_symbiont_species_master(&mut universe, biont, foreign).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::SceneMismatch { .. }));
    assert_eq!(universe.master(biont.id(), MasterOf::Bionts), Some(trunk.id()));

    let extra = universe
        .factory()
        .create_biont(BiontStruct::new(h, foreign));
    assert_eq!(universe.parent(extra.id()), Some(h.id()));
    assert_eq!(universe.master(extra.id(), MasterOf::Bionts), None);
}

#[test]
fn moving_holobiont_releases_species_of_its_bionts() {
    let mut universe = universe();
    let s1 = scene(&mut universe);
    let s2 = scene(&mut universe);
    let (symbiosis, _, species) = tree(&mut universe, s1);
    let h = universe
        .factory()
        .create_holobiont(HolobiontStruct::new(s1, symbiosis));

    Holobiont::bind_to_new_scene_parent(&mut universe, h, s2).unwrap();

    let bionts = universe.bionts(h);
    assert_eq!(bionts.len(), 3);
    for biont in &bionts {
        assert_eq!(universe.scene(biont.id()), Some(s2));
        assert_eq!(universe.master(biont.id(), MasterOf::Bionts), None);
    }
    assert!(species.iter().all(|part| universe.number_of_apprentices(part.id()) == 0));
}

// =============================================================================
// Destruction
// =============================================================================

#[test]
fn destroying_symbiosis_releases_bionts_but_keeps_them() {
    let mut universe = universe();
    let s = scene(&mut universe);
    let (symbiosis, [bark, _], [trunk, ..]) = tree(&mut universe, s);
    let h = universe
        .factory()
        .create_holobiont(HolobiontStruct::new(s, symbiosis));
    let bionts = universe.bionts(h);

    universe.destroy(symbiosis.id()).unwrap();

    assert!(!universe.exists(bark.id()));
    assert!(!universe.exists(trunk.id()));
    assert!(universe.exists(h.id()));
    assert_eq!(universe.master(h.id(), MasterOf::Holobionts), None);
    for biont in &bionts {
        assert!(universe.exists(biont.id()));
        assert_eq!(universe.master(biont.id(), MasterOf::Bionts), None);
    }
}

#[test]
fn destroying_holobiont_destroys_its_bionts() {
    let mut universe = universe();
    let s = scene(&mut universe);
    let (symbiosis, _, [trunk, ..]) = tree(&mut universe, s);
    let h = universe
        .factory()
        .create_holobiont(HolobiontStruct::new(s, symbiosis));
    let bionts = universe.bionts(h);

    universe.destroy(h.id()).unwrap();

    assert!(bionts.iter().all(|biont| !universe.exists(biont.id())));
    assert_eq!(universe.number_of_apprentices(trunk.id()), 0);
}
