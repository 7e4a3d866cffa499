//! Objects: placed instances of a mesh.

use ylikuutio_foundation::{MasterOf, Request, Result};

use crate::binding::BindOutcome;
use crate::ids::{BrainId, MeshMaster, ObjectId, SceneId, SpeciesId, Text3dId};
use crate::universe::Universe;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An instance of a species mesh, or one glyph of a 3D text.
///
/// Child of a scene, or of the 3D text whose glyph it is. Apprentice of its
/// mesh master and, optionally, of a brain that moves it.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Object {
    pub(crate) cartesian_coordinates: [f32; 3],
    pub(crate) orientation: [f32; 3],
    pub(crate) scale: f32,
}

impl Object {
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

    /// Returns the uniform scale factor.
    #[must_use]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Moves `object` under `scene`, releasing masters in other scenes.
    ///
    /// # Errors
    ///
    /// Refused (and logged) on a local name collision. Fails as an
    /// invariant violation if the object has no current parent.
    pub fn bind_to_new_scene_parent(
        universe: &mut Universe,
        object: ObjectId,
        scene: SceneId,
    ) -> Result<BindOutcome> {
        universe.rebind_to_parent(
            object.id(),
            scene.id(),
            "Object::bind_to_new_scene_parent",
        )
    }

    /// Makes `species` the mesh master of `object`.
    ///
    /// # Errors
    ///
    /// Refused (and logged) if the species lies in another scene.
    pub fn bind_to_new_species_master(
        universe: &mut Universe,
        object: ObjectId,
        species: SpeciesId,
    ) -> Result<BindOutcome> {
        universe.rebind_to_master(
            object.id(),
            MasterOf::Objects,
            species.id(),
            "Object::bind_to_new_species_master",
        )
    }

    /// Makes `text` the mesh master of `object`.
    ///
    /// # Errors
    ///
    /// Refused (and logged) if the text lies in another scene.
    pub fn bind_to_new_text_3d_master(
        universe: &mut Universe,
        object: ObjectId,
        text: Text3dId,
    ) -> Result<BindOutcome> {
        universe.rebind_to_master(
            object.id(),
            MasterOf::Objects,
            text.id(),
            "Object::bind_to_new_text_3d_master",
        )
    }

    /// Makes `brain` steer `object`.
    ///
    /// # Errors
    ///
    /// Refused (and logged) if the brain lies in another scene.
    pub fn bind_to_new_brain(
        universe: &mut Universe,
        object: ObjectId,
        brain: BrainId,
    ) -> Result<BindOutcome> {
        universe.rebind_to_master(
            object.id(),
            MasterOf::Movables,
            brain.id(),
            "Object::bind_to_new_brain",
        )
    }
}

/// Parameters for creating an [`Object`].
#[derive(Debug, Clone)]
pub struct ObjectStruct {
    /// Scene to bind to.
    pub parent: Request<SceneId>,
    /// Species or 3D text supplying the mesh.
    pub mesh_master: Request<MeshMaster>,
    /// Brain steering the object.
    pub brain: Request<BrainId>,
    /// Global name, or empty for none.
    pub global_name: String,
    /// Local name, or empty for none.
    pub local_name: String,
    /// Position.
    pub cartesian_coordinates: [f32; 3],
    /// Roll, yaw and pitch in radians.
    pub orientation: [f32; 3],
    /// Uniform scale factor.
    pub scale: f32,
}

impl Default for ObjectStruct {
    fn default() -> Self {
        Self {
            parent: Request::none(),
            mesh_master: Request::none(),
            brain: Request::none(),
            global_name: String::new(),
            local_name: String::new(),
            cartesian_coordinates: [0.0; 3],
            orientation: [0.0; 3],
            scale: 1.0,
        }
    }
}

impl ObjectStruct {
    /// Creates parameters for an object under `parent` with the given mesh.
    #[must_use]
    pub fn new(
        parent: impl Into<Request<SceneId>>,
        mesh_master: impl Into<Request<MeshMaster>>,
    ) -> Self {
        Self {
            parent: parent.into(),
            mesh_master: mesh_master.into(),
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

    /// Builder method to set the scale.
    #[must_use]
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }
}

crate::named_struct!(ObjectStruct);
