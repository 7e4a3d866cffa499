//! Brains and waypoints.

use ylikuutio_foundation::{MasterOf, Request, Result};

use crate::binding::BindOutcome;
use crate::ids::{BrainId, Movable, SceneId, WaypointId};
use crate::universe::Universe;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Behaviour shared by the movables it masters.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Brain {
    pub(crate) is_active: bool,
}

impl Default for Brain {
    fn default() -> Self {
        Self { is_active: true }
    }
}

impl Brain {
    /// Returns true if the brain is steering its movables.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Returns the movables `brain` steers, in apprenticeID order.
    #[must_use]
    pub fn movables(universe: &Universe, brain: BrainId) -> Vec<Movable> {
        universe
            .apprentices(brain.id(), MasterOf::Movables)
            .into_iter()
            .filter_map(|id| universe.typed::<Movable>(id))
            .collect()
    }

    /// Moves `brain` under `scene`, releasing movables in other scenes.
    ///
    /// # Errors
    ///
    /// Refused (and logged) on a local name collision. Fails as an
    /// invariant violation if the brain has no current parent.
    pub fn bind_to_new_scene_parent(
        universe: &mut Universe,
        brain: BrainId,
        scene: SceneId,
    ) -> Result<BindOutcome> {
        universe.rebind_to_parent(brain.id(), scene.id(), "Brain::bind_to_new_scene_parent")
    }
}

/// Parameters for creating a [`Brain`].
#[derive(Debug, Clone)]
pub struct BrainStruct {
    /// Scene to bind to.
    pub parent: Request<SceneId>,
    /// Global name, or empty for none.
    pub global_name: String,
    /// Local name, or empty for none.
    pub local_name: String,
    /// Whether the brain starts active.
    pub is_active: bool,
}

impl Default for BrainStruct {
    fn default() -> Self {
        Self {
            parent: Request::none(),
            global_name: String::new(),
            local_name: String::new(),
            is_active: true,
        }
    }
}

impl BrainStruct {
    /// Creates parameters for a brain under `parent`.
    #[must_use]
    pub fn new(parent: impl Into<Request<SceneId>>) -> Self {
        Self {
            parent: parent.into(),
            ..Self::default()
        }
    }

    /// Builder method to set whether the brain starts active.
    #[must_use]
    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }
}

crate::named_struct!(BrainStruct);

/// A marker in space that a brain can move along a route.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Waypoint {
    pub(crate) cartesian_coordinates: [f32; 3],
}

impl Waypoint {
    /// Returns the position.
    #[must_use]
    pub fn cartesian_coordinates(&self) -> [f32; 3] {
        self.cartesian_coordinates
    }

    /// Moves `waypoint` under `scene`, releasing a brain from another scene.
    ///
    /// # Errors
    ///
    /// Refused (and logged) on a local name collision. Fails as an
    /// invariant violation if the waypoint has no current parent.
    pub fn bind_to_new_scene_parent(
        universe: &mut Universe,
        waypoint: WaypointId,
        scene: SceneId,
    ) -> Result<BindOutcome> {
        universe.rebind_to_parent(
            waypoint.id(),
            scene.id(),
            "Waypoint::bind_to_new_scene_parent",
        )
    }

    /// Makes `brain` steer `waypoint`.
    ///
    /// # Errors
    ///
    /// Refused (and logged) if the brain lies in another scene.
    pub fn bind_to_new_brain(
        universe: &mut Universe,
        waypoint: WaypointId,
        brain: BrainId,
    ) -> Result<BindOutcome> {
        universe.rebind_to_master(
            waypoint.id(),
            MasterOf::Movables,
            brain.id(),
            "Waypoint::bind_to_new_brain",
        )
    }
}

/// Parameters for creating a [`Waypoint`].
#[derive(Debug, Clone, Default)]
pub struct WaypointStruct {
    /// Scene to bind to.
    pub parent: Request<SceneId>,
    /// Brain steering the waypoint.
    pub brain: Request<BrainId>,
    /// Global name, or empty for none.
    pub global_name: String,
    /// Local name, or empty for none.
    pub local_name: String,
    /// Position.
    pub cartesian_coordinates: [f32; 3],
}

impl WaypointStruct {
    /// Creates parameters for a waypoint under `parent`.
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
}

crate::named_struct!(WaypointStruct);
