//! Species: mesh templates.

use ylikuutio_foundation::{MasterOf, Request, Result};

use crate::binding::BindOutcome;
use crate::ids::{EcosystemId, EcosystemOrScene, MaterialId, SceneId, SpeciesId};
use crate::universe::Universe;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A mesh rendered with a material, instanced by objects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Species {
    pub(crate) model_filename: String,
    pub(crate) model_file_format: String,
    pub(crate) is_terrain: bool,
}

impl Species {
    /// Returns the model filename.
    #[must_use]
    pub fn model_filename(&self) -> &str {
        &self.model_filename
    }

    /// Returns the model file format.
    #[must_use]
    pub fn model_file_format(&self) -> &str {
        &self.model_file_format
    }

    /// Returns true for heightmap terrain.
    #[must_use]
    pub fn is_terrain(&self) -> bool {
        self.is_terrain
    }

    /// Moves `species` under `ecosystem`.
    ///
    /// # Errors
    ///
    /// Refused (and logged) on a local name collision. Fails as an
    /// invariant violation if the species has no current parent.
    pub fn bind_to_new_ecosystem_parent(
        universe: &mut Universe,
        species: SpeciesId,
        ecosystem: EcosystemId,
    ) -> Result<BindOutcome> {
        universe.rebind_to_parent(
            species.id(),
            ecosystem.id(),
            "Species::bind_to_new_ecosystem_parent",
        )
    }

    /// Moves `species` under `scene`, releasing its material and its
    /// objects if they lie in another scene.
    ///
    /// # Errors
    ///
    /// Refused (and logged) on a local name collision. Fails as an
    /// invariant violation if the species has no current parent.
    pub fn bind_to_new_scene_parent(
        universe: &mut Universe,
        species: SpeciesId,
        scene: SceneId,
    ) -> Result<BindOutcome> {
        universe.rebind_to_parent(
            species.id(),
            scene.id(),
            "Species::bind_to_new_scene_parent",
        )
    }

    /// Makes `material` the master of `species`.
    ///
    /// # Errors
    ///
    /// Refused (and logged) if the material lies in another scene.
    pub fn bind_to_new_material(
        universe: &mut Universe,
        species: SpeciesId,
        material: MaterialId,
    ) -> Result<BindOutcome> {
        universe.rebind_to_master(
            species.id(),
            MasterOf::Species,
            material.id(),
            "Species::bind_to_new_material",
        )
    }
}

/// Parameters for creating a [`Species`].
#[derive(Debug, Clone, Default)]
pub struct SpeciesStruct {
    /// Ecosystem or scene to bind to.
    pub parent: Request<EcosystemOrScene>,
    /// Material to render with.
    pub material: Request<MaterialId>,
    /// Global name, or empty for none.
    pub global_name: String,
    /// Local name, or empty for none.
    pub local_name: String,
    /// Model filename.
    pub model_filename: String,
    /// Model file format.
    pub model_file_format: String,
    /// Whether the model is heightmap terrain.
    pub is_terrain: bool,
}

impl SpeciesStruct {
    /// Creates parameters for a species under `parent` rendered with `material`.
    #[must_use]
    pub fn new(
        parent: impl Into<Request<EcosystemOrScene>>,
        material: impl Into<Request<MaterialId>>,
    ) -> Self {
        Self {
            parent: parent.into(),
            material: material.into(),
            ..Self::default()
        }
    }

    /// Builder method to set the model file.
    #[must_use]
    pub fn with_model(mut self, filename: impl Into<String>, format: impl Into<String>) -> Self {
        self.model_filename = filename.into();
        self.model_file_format = format.into();
        self
    }

    /// Builder method to mark the species as terrain.
    #[must_use]
    pub fn with_terrain(mut self, is_terrain: bool) -> Self {
        self.is_terrain = is_terrain;
        self
    }
}

crate::named_struct!(SpeciesStruct);
