//! Materials.

use ylikuutio_foundation::{MasterOf, Request, Result};

use crate::binding::BindOutcome;
use crate::ids::{EcosystemId, EcosystemOrScene, MaterialId, PipelineId, SceneId};
use crate::universe::Universe;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A texture applied through a pipeline.
///
/// Child of an ecosystem or a scene and apprentice of a pipeline. Species
/// use materials as their master, and vector fonts live under them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Material {
    pub(crate) texture_filename: String,
    pub(crate) texture_file_format: String,
}

impl Material {
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

    /// Moves `material` under `ecosystem`.
    ///
    /// # Errors
    ///
    /// Refused (and logged) on a local name collision. Fails as an
    /// invariant violation if the material has no current parent.
    pub fn bind_to_new_ecosystem_parent(
        universe: &mut Universe,
        material: MaterialId,
        ecosystem: EcosystemId,
    ) -> Result<BindOutcome> {
        universe.rebind_to_parent(
            material.id(),
            ecosystem.id(),
            "Material::bind_to_new_ecosystem_parent",
        )
    }

    /// Moves `material` and its vector fonts under `scene`, releasing its
    /// pipeline, its species and the fonts' texts if they lie in another scene.
    ///
    /// # Errors
    ///
    /// Refused (and logged) on a local name collision. Fails as an
    /// invariant violation if the material has no current parent.
    pub fn bind_to_new_scene_parent(
        universe: &mut Universe,
        material: MaterialId,
        scene: SceneId,
    ) -> Result<BindOutcome> {
        universe.rebind_to_parent(
            material.id(),
            scene.id(),
            "Material::bind_to_new_scene_parent",
        )
    }

    /// Makes `pipeline` the master of `material`.
    ///
    /// # Errors
    ///
    /// Refused (and logged) if the pipeline lies in another scene.
    pub fn bind_to_new_pipeline(
        universe: &mut Universe,
        material: MaterialId,
        pipeline: PipelineId,
    ) -> Result<BindOutcome> {
        universe.rebind_to_master(
            material.id(),
            MasterOf::Materials,
            pipeline.id(),
            "Material::bind_to_new_pipeline",
        )
    }
}

/// Parameters for creating a [`Material`].
#[derive(Debug, Clone, Default)]
pub struct MaterialStruct {
    /// Ecosystem or scene to bind to.
    pub parent: Request<EcosystemOrScene>,
    /// Pipeline to render with.
    pub pipeline: Request<PipelineId>,
    /// Global name, or empty for none.
    pub global_name: String,
    /// Local name, or empty for none.
    pub local_name: String,
    /// Texture filename.
    pub texture_filename: String,
    /// Texture file format.
    pub texture_file_format: String,
}

impl MaterialStruct {
    /// Creates parameters for a material under `parent` rendered with `pipeline`.
    #[must_use]
    pub fn new(
        parent: impl Into<Request<EcosystemOrScene>>,
        pipeline: impl Into<Request<PipelineId>>,
    ) -> Self {
        Self {
            parent: parent.into(),
            pipeline: pipeline.into(),
            ..Self::default()
        }
    }

    /// Builder method to set the texture.
    #[must_use]
    pub fn with_texture(mut self, filename: impl Into<String>, format: impl Into<String>) -> Self {
        self.texture_filename = filename.into();
        self.texture_file_format = format.into();
        self
    }
}

crate::named_struct!(MaterialStruct);
