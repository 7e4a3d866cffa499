//! Symbioses and their instances, holobionts.

use ylikuutio_foundation::{MasterOf, Request, Result};

use crate::binding::BindOutcome;
use crate::ids::{
    BrainId, EcosystemId, EcosystemOrScene, HolobiontId, PipelineId, SceneId, SymbiosisId,
};
use crate::universe::Universe;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A model made of several materials, rendered with one pipeline.
///
/// Child of an ecosystem or a scene and apprentice of a pipeline. Owns the
/// symbiont materials its model is split into and masters the holobionts
/// that instance it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Symbiosis {
    pub(crate) model_filename: String,
    pub(crate) model_file_format: String,
}

impl Symbiosis {
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

    /// Moves `symbiosis` under `ecosystem`.
    ///
    /// # Errors
    ///
    /// Refused (and logged) on a local name collision. Fails as an
    /// invariant violation if the symbiosis has no current parent.
    pub fn bind_to_new_ecosystem_parent(
        universe: &mut Universe,
        symbiosis: SymbiosisId,
        ecosystem: EcosystemId,
    ) -> Result<BindOutcome> {
        universe.rebind_to_parent(
            symbiosis.id(),
            ecosystem.id(),
            "Symbiosis::bind_to_new_ecosystem_parent",
        )
    }

    /// Moves `symbiosis` under `scene`, releasing its pipeline and its
    /// holobionts if they lie in another scene.
    ///
    /// # Errors
    ///
    /// Refused (and logged) on a local name collision. Fails as an
    /// invariant violation if the symbiosis has no current parent.
    pub fn bind_to_new_scene_parent(
        universe: &mut Universe,
        symbiosis: SymbiosisId,
        scene: SceneId,
    ) -> Result<BindOutcome> {
        universe.rebind_to_parent(
            symbiosis.id(),
            scene.id(),
            "Symbiosis::bind_to_new_scene_parent",
        )
    }

    /// Makes `pipeline` the master of `symbiosis`.
    ///
    /// # Errors
    ///
    /// Refused (and logged) if the pipeline lies in another scene.
    pub fn bind_to_new_pipeline(
        universe: &mut Universe,
        symbiosis: SymbiosisId,
        pipeline: PipelineId,
    ) -> Result<BindOutcome> {
        universe.rebind_to_master(
            symbiosis.id(),
            MasterOf::Symbioses,
            pipeline.id(),
            "Symbiosis::bind_to_new_pipeline",
        )
    }
}

/// Parameters for creating a [`Symbiosis`].
#[derive(Debug, Clone, Default)]
pub struct SymbiosisStruct {
    /// Ecosystem or scene to bind to.
    pub parent: Request<EcosystemOrScene>,
    /// Pipeline to render with.
    pub pipeline: Request<PipelineId>,
    /// Global name, or empty for none.
    pub global_name: String,
    /// Local name, or empty for none.
    pub local_name: String,
    /// Model filename.
    pub model_filename: String,
    /// Model file format.
    pub model_file_format: String,
}

impl SymbiosisStruct {
    /// Creates parameters for a symbiosis under `parent` rendered with `pipeline`.
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

    /// Builder method to set the model file.
    #[must_use]
    pub fn with_model(mut self, filename: impl Into<String>, format: impl Into<String>) -> Self {
        self.model_filename = filename.into();
        self.model_file_format = format.into();
        self
    }
}

crate::named_struct!(SymbiosisStruct);

/// A placed instance of a symbiosis.
///
/// Owns one biont per symbiont species of its symbiosis, created along
/// with it.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Holobiont {
    pub(crate) cartesian_coordinates: [f32; 3],
    pub(crate) orientation: [f32; 3],
}

impl Holobiont {
    /// Returns the position.
    #[must_use]
    pub fn cartesian_coordinates(&self) -> [f32; 3] {
        self.cartesian_coordinates
    }

    /// Returns roll, yaw and pitch in radians.
    #[must_use]
    pub fn orientation(&self) -> [f32; 3] {
        self.orientation
    }

    /// Moves `holobiont` and its bionts under `scene`, releasing masters in
    /// other scenes.
    ///
    /// # Errors
    ///
    /// Refused (and logged) on a local name collision. Fails as an
    /// invariant violation if the holobiont has no current parent.
    pub fn bind_to_new_scene_parent(
        universe: &mut Universe,
        holobiont: HolobiontId,
        scene: SceneId,
    ) -> Result<BindOutcome> {
        universe.rebind_to_parent(
            holobiont.id(),
            scene.id(),
            "Holobiont::bind_to_new_scene_parent",
        )
    }

    /// Makes `symbiosis` the master of `holobiont`.
    ///
    /// # Errors
    ///
    /// Refused (and logged) if the symbiosis lies in another scene.
    pub fn bind_to_new_symbiosis_master(
        universe: &mut Universe,
        holobiont: HolobiontId,
        symbiosis: SymbiosisId,
    ) -> Result<BindOutcome> {
        universe.rebind_to_master(
            holobiont.id(),
            MasterOf::Holobionts,
            symbiosis.id(),
            "Holobiont::bind_to_new_symbiosis_master",
        )
    }

    /// Makes `brain` steer `holobiont`.
    ///
    /// # Errors
    ///
    /// Refused (and logged) if the brain lies in another scene.
    pub fn bind_to_new_brain(
        universe: &mut Universe,
        holobiont: HolobiontId,
        brain: BrainId,
    ) -> Result<BindOutcome> {
        universe.rebind_to_master(
            holobiont.id(),
            MasterOf::Movables,
            brain.id(),
            "Holobiont::bind_to_new_brain",
        )
    }
}

/// Parameters for creating a [`Holobiont`].
#[derive(Debug, Clone, Default)]
pub struct HolobiontStruct {
    /// Scene to bind to.
    pub parent: Request<SceneId>,
    /// Symbiosis this holobiont instances.
    pub symbiosis: Request<SymbiosisId>,
    /// Brain steering the holobiont.
    pub brain: Request<BrainId>,
    /// Global name, or empty for none.
    pub global_name: String,
    /// Local name, or empty for none.
    pub local_name: String,
    /// Position.
    pub cartesian_coordinates: [f32; 3],
    /// Roll, yaw and pitch in radians.
    pub orientation: [f32; 3],
}

impl HolobiontStruct {
    /// Creates parameters for a holobiont under `parent` instancing `symbiosis`.
    #[must_use]
    pub fn new(
        parent: impl Into<Request<SceneId>>,
        symbiosis: impl Into<Request<SymbiosisId>>,
    ) -> Self {
        Self {
            parent: parent.into(),
            symbiosis: symbiosis.into(),
            ..Self::default()
        }
    }

    /// Builder method to set the brain.
    #[must_use]
    pub fn with_brain(mut self, brain: impl Into<Request<BrainId>>) -> Self {
        self.brain = brain.into();
        self
    }

    /// Builder method to set the position.
    #[must_use]
    pub fn at(mut self, cartesian_coordinates: [f32; 3]) -> Self {
        self.cartesian_coordinates = cartesian_coordinates;
        self
    }
}

crate::named_struct!(HolobiontStruct);
