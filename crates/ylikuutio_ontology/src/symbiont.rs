//! The parts of a symbiosis and of its holobionts.
//!
//! A symbiosis model is split into symbiont materials, one per texture,
//! each holding the symbiont species drawn with it. Every holobiont that
//! instances the symbiosis owns one biont per symbiont species.

use ylikuutio_foundation::{MasterOf, ParentOf, Request, Result};

use crate::binding::BindOutcome;
use crate::ids::{BiontId, HolobiontId, SymbiontMaterialId, SymbiontSpeciesId, SymbiosisId};
use crate::universe::Universe;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The texture of one part of a symbiosis.
///
/// Child of a symbiosis and parent of the symbiont species drawn with it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SymbiontMaterial {
    pub(crate) texture_filename: String,
    pub(crate) texture_file_format: String,
}

impl SymbiontMaterial {
    /// Returns the texture filename.
    #[must_use]
    pub fn texture_filename(&self) -> &str {
        &self.texture_filename
    }

    /// Returns the texture file format.
    #[must_use]
    pub fn texture_file_format(&self) -> &str {
        &self.texture_file_format
    }

    /// Moves `material` under `symbiosis`, releasing bionts of its species
    /// that lie in another scene.
    ///
    /// # Errors
    ///
    /// Refused (and logged) on a local name collision. Fails as an
    /// invariant violation if the material has no current parent.
    pub fn bind_to_new_symbiosis_parent(
        universe: &mut Universe,
        material: SymbiontMaterialId,
        symbiosis: SymbiosisId,
    ) -> Result<BindOutcome> {
        universe.rebind_to_parent(
            material.id(),
            symbiosis.id(),
            "SymbiontMaterial::bind_to_new_symbiosis_parent",
        )
    }
}

/// Parameters for creating a [`SymbiontMaterial`].
#[derive(Debug, Clone, Default)]
pub struct SymbiontMaterialStruct {
    /// Symbiosis to bind to.
    pub parent: Request<SymbiosisId>,
    /// Global name, or empty for none.
    pub global_name: String,
    /// Local name, or empty for none.
    pub local_name: String,
    /// Texture filename.
    pub texture_filename: String,
    /// Texture file format.
    pub texture_file_format: String,
}

impl SymbiontMaterialStruct {
    /// Creates parameters for a symbiont material under `parent`.
    #[must_use]
    pub fn new(parent: impl Into<Request<SymbiosisId>>) -> Self {
        Self {
            parent: parent.into(),
            ..Self::default()
        }
    }

    /// Builder method to set the texture file.
    #[must_use]
    pub fn with_texture(mut self, filename: impl Into<String>, format: impl Into<String>) -> Self {
        self.texture_filename = filename.into();
        self.texture_file_format = format.into();
        self
    }
}

crate::named_struct!(SymbiontMaterialStruct);

/// The mesh of one part of a symbiosis.
///
/// Child of a symbiont material and master of the bionts drawn with it.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SymbiontSpecies {
    pub(crate) mesh_index: usize,
    pub(crate) light_position: [f32; 3],
}

impl SymbiontSpecies {
    /// Returns the index of this mesh within the symbiosis model.
    #[must_use]
    pub fn mesh_index(&self) -> usize {
        self.mesh_index
    }

    /// Returns the light position used when drawing this mesh.
    #[must_use]
    pub fn light_position(&self) -> [f32; 3] {
        self.light_position
    }

    /// Moves `species` under `material`, releasing its bionts if they lie
    /// in another scene.
    ///
    /// # Errors
    ///
    /// Refused (and logged) on a local name collision. Fails as an
    /// invariant violation if the species has no current parent.
    pub fn bind_to_new_symbiont_material_parent(
        universe: &mut Universe,
        species: SymbiontSpeciesId,
        material: SymbiontMaterialId,
    ) -> Result<BindOutcome> {
        universe.rebind_to_parent(
            species.id(),
            material.id(),
            "SymbiontSpecies::bind_to_new_symbiont_material_parent",
        )
    }
}

/// Parameters for creating a [`SymbiontSpecies`].
#[derive(Debug, Clone, Default)]
pub struct SymbiontSpeciesStruct {
    /// Symbiont material to bind to.
    pub parent: Request<SymbiontMaterialId>,
    /// Global name, or empty for none.
    pub global_name: String,
    /// Local name, or empty for none.
    pub local_name: String,
    /// Index of the mesh within the symbiosis model.
    pub mesh_index: usize,
    /// Light position.
    pub light_position: [f32; 3],
}

impl SymbiontSpeciesStruct {
    /// Creates parameters for mesh `mesh_index` under `parent`.
    #[must_use]
    pub fn new(parent: impl Into<Request<SymbiontMaterialId>>, mesh_index: usize) -> Self {
        Self {
            parent: parent.into(),
            mesh_index,
            ..Self::default()
        }
    }

    /// Builder method to set the light position.
    #[must_use]
    pub fn with_light_position(mut self, light_position: [f32; 3]) -> Self {
        self.light_position = light_position;
        self
    }
}

crate::named_struct!(SymbiontSpeciesStruct);

/// The part of a holobiont drawn with one symbiont species.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Biont {
    pub(crate) cartesian_coordinates: [f32; 3],
}

impl Biont {
    /// Returns the position.
    #[must_use]
    pub fn cartesian_coordinates(&self) -> [f32; 3] {
        self.cartesian_coordinates
    }

    /// Moves `biont` under `holobiont`, releasing its symbiont species if
    /// it lies in another scene.
    ///
    /// # Errors
    ///
    /// Refused (and logged) on a local name collision. Fails as an
    /// invariant violation if the biont has no current parent.
    pub fn bind_to_new_holobiont_parent(
        universe: &mut Universe,
        biont: BiontId,
        holobiont: HolobiontId,
    ) -> Result<BindOutcome> {
        universe.rebind_to_parent(
            biont.id(),
            holobiont.id(),
            "Biont::bind_to_new_holobiont_parent",
        )
    }

    /// Makes `species` the master of `biont`.
    ///
    /// # Errors
    ///
    /// Refused (and logged) if the species lies in another scene.
    pub fn bind_to_new_symbiont_species_master(
        universe: &mut Universe,
        biont: BiontId,
        species: SymbiontSpeciesId,
    ) -> Result<BindOutcome> {
        universe.rebind_to_master(
            biont.id(),
            MasterOf::Bionts,
            species.id(),
            "Biont::bind_to_new_symbiont_species_master",
        )
    }
}

/// Parameters for creating a [`Biont`].
#[derive(Debug, Clone, Default)]
pub struct BiontStruct {
    /// Holobiont to bind to.
    pub parent: Request<HolobiontId>,
    /// Symbiont species to draw with.
    pub symbiont_species: Request<SymbiontSpeciesId>,
    /// Global name, or empty for none.
    pub global_name: String,
    /// Local name, or empty for none.
    pub local_name: String,
    /// Position.
    pub cartesian_coordinates: [f32; 3],
}

impl BiontStruct {
    /// Creates parameters for a biont under `parent` drawn with `symbiont_species`.
    #[must_use]
    pub fn new(
        parent: impl Into<Request<HolobiontId>>,
        symbiont_species: impl Into<Request<SymbiontSpeciesId>>,
    ) -> Self {
        Self {
            parent: parent.into(),
            symbiont_species: symbiont_species.into(),
            ..Self::default()
        }
    }

    /// Builder method to set the position.
    #[must_use]
    pub fn at(mut self, cartesian_coordinates: [f32; 3]) -> Self {
        self.cartesian_coordinates = cartesian_coordinates;
        self
    }
}

crate::named_struct!(BiontStruct);

impl Universe {
    /// Returns every symbiont species of `symbiosis`, material by material.
    ///
    /// This is the order in which a holobiont creates its bionts.
    #[must_use]
    pub fn symbiont_species(&self, symbiosis: SymbiosisId) -> Vec<SymbiontSpeciesId> {
        self.children(symbiosis.id(), ParentOf::SymbiontMaterials)
            .into_iter()
            .flat_map(|material| self.children(material, ParentOf::SymbiontSpecies))
            .filter_map(|species| self.typed::<SymbiontSpeciesId>(species))
            .collect()
    }

    /// Returns the bionts of `holobiont`, in childID order.
    #[must_use]
    pub fn bionts(&self, holobiont: HolobiontId) -> Vec<BiontId> {
        self.children(holobiont.id(), ParentOf::Bionts)
            .into_iter()
            .filter_map(|biont| self.typed::<BiontId>(biont))
            .collect()
    }
}
