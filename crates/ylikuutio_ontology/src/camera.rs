//! Cameras.

use ylikuutio_foundation::{MasterOf, Request, Result};

use crate::binding::BindOutcome;
use crate::ids::{BrainId, CameraId, SceneId};
use crate::universe::Universe;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A viewpoint into its scene.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Camera {
    pub(crate) cartesian_coordinates: [f32; 3],
    pub(crate) yaw: f32,
    pub(crate) pitch: f32,
    pub(crate) is_static_view: bool,
}

impl Camera {
    /// Returns the position.
    #[must_use]
    pub fn cartesian_coordinates(&self) -> [f32; 3] {
        self.cartesian_coordinates
    }

    /// Returns yaw and pitch in radians.
    #[must_use]
    pub fn direction(&self) -> (f32, f32) {
        (self.yaw, self.pitch)
    }

    /// Returns true if this camera ignores movement input.
    #[must_use]
    pub fn is_static_view(&self) -> bool {
        self.is_static_view
    }

    /// Moves `camera` under `scene`, releasing a brain from another scene.
    ///
    /// A camera that was its old scene's active camera stops being one.
    ///
    /// # Errors
    ///
    /// Refused (and logged) on a local name collision. Fails as an
    /// invariant violation if the camera has no current parent.
    pub fn bind_to_new_scene_parent(
        universe: &mut Universe,
        camera: CameraId,
        scene: SceneId,
    ) -> Result<BindOutcome> {
        let old_scene = universe.scene(camera.id());
        let outcome =
            universe.rebind_to_parent(camera.id(), scene.id(), "Camera::bind_to_new_scene_parent")?;
        if let Some(old_scene) = old_scene.filter(|old| *old != scene) {
            let old = universe.get_mut(old_scene)?;
            if old.active_camera == Some(camera) {
                old.active_camera = None;
            }
        }
        Ok(outcome)
    }

    /// Makes `brain` steer `camera`.
    ///
    /// # Errors
    ///
    /// Refused (and logged) if the brain lies in another scene.
    pub fn bind_to_new_brain(
        universe: &mut Universe,
        camera: CameraId,
        brain: BrainId,
    ) -> Result<BindOutcome> {
        universe.rebind_to_master(
            camera.id(),
            MasterOf::Movables,
            brain.id(),
            "Camera::bind_to_new_brain",
        )
    }
}

/// Parameters for creating a [`Camera`].
#[derive(Debug, Clone, Default)]
pub struct CameraStruct {
    /// Scene to bind to.
    pub parent: Request<SceneId>,
    /// Brain steering the camera.
    pub brain: Request<BrainId>,
    /// Global name, or empty for none.
    pub global_name: String,
    /// Local name, or empty for none.
    pub local_name: String,
    /// Position.
    pub cartesian_coordinates: [f32; 3],
    /// Yaw in radians.
    pub yaw: f32,
    /// Pitch in radians.
    pub pitch: f32,
    /// Whether the camera ignores movement input.
    pub is_static_view: bool,
}

impl CameraStruct {
    /// Creates parameters for a camera under `parent`.
    #[must_use]
    pub fn new(parent: impl Into<Request<SceneId>>) -> Self {
        Self {
            parent: parent.into(),
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

    /// Builder method to set the view direction.
    #[must_use]
    pub fn looking(mut self, yaw: f32, pitch: f32) -> Self {
        self.yaw = yaw;
        self.pitch = pitch;
        self
    }

    /// Builder method to fix the view.
    #[must_use]
    pub fn with_static_view(mut self, is_static_view: bool) -> Self {
        self.is_static_view = is_static_view;
        self
    }
}

crate::named_struct!(CameraStruct);
