//! Scenes.

use ylikuutio_foundation::{Error, Result};

use crate::ids::{CameraId, SceneId};
use crate::universe::Universe;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A self-contained world.
///
/// Everything below a scene belongs to it. Masters and apprentices may
/// not cross from one scene into another.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Scene {
    pub(crate) gravity: f32,
    pub(crate) water_level: f32,
    pub(crate) active_camera: Option<CameraId>,
}

impl Scene {
    /// Returns the gravitational acceleration.
    #[must_use]
    pub fn gravity(&self) -> f32 {
        self.gravity
    }

    /// Returns the water level height.
    #[must_use]
    pub fn water_level(&self) -> f32 {
        self.water_level
    }

    /// Returns the camera this scene is viewed through.
    #[must_use]
    pub fn active_camera(&self) -> Option<CameraId> {
        self.active_camera
    }
}

impl Universe {
    /// Makes `camera` the active camera of its scene.
    ///
    /// # Errors
    ///
    /// Returns an error if `camera` is dead or not bound to `scene`.
    pub fn set_active_camera(&mut self, scene: SceneId, camera: Option<CameraId>) -> Result<()> {
        if let Some(camera) = camera {
            self.get(camera)?;
            if self.parent(camera.id()) != Some(scene.id()) {
                return Err(Error::invariant(format!(
                    "{camera} is not a camera of {scene}"
                )));
            }
        }
        self.get_mut(scene)?.active_camera = camera;
        Ok(())
    }
}

/// Parameters for creating a [`Scene`].
#[derive(Debug, Clone)]
pub struct SceneStruct {
    /// Global name, or empty for none.
    pub global_name: String,
    /// Local name, or empty for none. Same as the global name.
    pub local_name: String,
    /// Gravitational acceleration.
    pub gravity: f32,
    /// Water level height.
    pub water_level: f32,
}

impl Default for SceneStruct {
    fn default() -> Self {
        Self {
            global_name: String::new(),
            local_name: String::new(),
            gravity: 9.81,
            water_level: f32::NEG_INFINITY,
        }
    }
}

impl SceneStruct {
    /// Creates parameters for an unnamed scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the gravity.
    #[must_use]
    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self
    }

    /// Builder method to set the water level.
    #[must_use]
    pub fn with_water_level(mut self, water_level: f32) -> Self {
        self.water_level = water_level;
        self
    }
}

crate::named_struct!(SceneStruct);
