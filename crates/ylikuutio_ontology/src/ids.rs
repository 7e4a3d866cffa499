//! Typed entity handles.
//!
//! Every concrete kind gets a newtype over [`EntityId`] so the type system
//! keeps a `MaterialId` from being passed where a `PipelineId` is wanted.
//! Relations that accept more than one kind use closed sum types instead
//! of down-casting.

use std::fmt;

use ylikuutio_foundation::{EntityId, EntityKind, Request, Resolve};

use crate::entity::EntityData;
use crate::{
    Biont, Brain, Camera, ComputeTask, Ecosystem, Holobiont, Material, Object, Pipeline, Scene,
    Species, Symbiosis, SymbiontMaterial, SymbiontSpecies, Text3d, VectorFont, Waypoint,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A handle whose kind is known statically.
pub trait TypedId: Resolve {
    /// The kind of entity this handle refers to.
    const KIND: EntityKind;

    /// The per-kind data stored in the entity record.
    type Payload;

    /// Borrows the payload out of the entity data, if the kinds agree.
    fn payload(data: &EntityData) -> Option<&Self::Payload>;

    /// Mutably borrows the payload out of the entity data, if the kinds agree.
    fn payload_mut(data: &mut EntityData) -> Option<&mut Self::Payload>;
}

macro_rules! typed_ids {
    ($($(#[$meta:meta])* $name:ident => $kind:ident($payload:ty);)*) => {$(
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        pub struct $name(EntityId);

        impl $name {
            pub(crate) const fn from_raw(id: EntityId) -> Self {
                Self(id)
            }

            /// Returns the untyped handle.
            #[must_use]
            pub const fn id(self) -> EntityId {
                self.0
            }
        }

        impl Resolve for $name {
            const EXPECTED: &'static str = EntityKind::$kind.name();

            fn from_entity(id: EntityId, kind: EntityKind) -> Option<Self> {
                (kind == EntityKind::$kind).then_some(Self(id))
            }

            fn entity_id(self) -> EntityId {
                self.0
            }
        }

        impl TypedId for $name {
            const KIND: EntityKind = EntityKind::$kind;
            type Payload = $payload;

            fn payload(data: &EntityData) -> Option<&$payload> {
                match data {
                    EntityData::$kind(payload) => Some(payload),
                    _ => None,
                }
            }

            fn payload_mut(data: &mut EntityData) -> Option<&mut $payload> {
                match data {
                    EntityData::$kind(payload) => Some(payload),
                    _ => None,
                }
            }
        }

        impl From<$name> for EntityId {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl From<$name> for Request<$name> {
            fn from(id: $name) -> Self {
                Request::handle(id)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", EntityKind::$kind.name(), self.0)
            }
        }
    )*};
}

typed_ids! {
    /// Handle to an [`Ecosystem`].
    EcosystemId => Ecosystem(Ecosystem);
    /// Handle to a [`Scene`].
    SceneId => Scene(Scene);
    /// Handle to a [`Camera`].
    CameraId => Camera(Camera);
    /// Handle to a [`Brain`].
    BrainId => Brain(Brain);
    /// Handle to a [`Waypoint`].
    WaypointId => Waypoint(Waypoint);
    /// Handle to a [`Pipeline`].
    PipelineId => Pipeline(Pipeline);
    /// Handle to a [`ComputeTask`].
    ComputeTaskId => ComputeTask(ComputeTask);
    /// Handle to a [`Material`].
    MaterialId => Material(Material);
    /// Handle to a [`Species`].
    SpeciesId => Species(Species);
    /// Handle to an [`Object`].
    ObjectId => Object(Object);
    /// Handle to a [`Symbiosis`].
    SymbiosisId => Symbiosis(Symbiosis);
    /// Handle to a [`SymbiontMaterial`].
    SymbiontMaterialId => SymbiontMaterial(SymbiontMaterial);
    /// Handle to a [`SymbiontSpecies`].
    SymbiontSpeciesId => SymbiontSpecies(SymbiontSpecies);
    /// Handle to a [`Holobiont`].
    HolobiontId => Holobiont(Holobiont);
    /// Handle to a [`Biont`].
    BiontId => Biont(Biont);
    /// Handle to a [`VectorFont`].
    VectorFontId => VectorFont(VectorFont);
    /// Handle to a [`Text3d`].
    Text3dId => Text3d(Text3d);
}

/// Parent of the kinds that may live either scene-independently or in a scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EcosystemOrScene {
    /// Scene-independent parent.
    Ecosystem(EcosystemId),
    /// Scene parent.
    Scene(SceneId),
}

impl EcosystemOrScene {
    /// Returns the untyped handle.
    #[must_use]
    pub const fn id(self) -> EntityId {
        match self {
            Self::Ecosystem(id) => id.id(),
            Self::Scene(id) => id.id(),
        }
    }

    /// Returns the scene, if this is one.
    #[must_use]
    pub const fn scene(self) -> Option<SceneId> {
        match self {
            Self::Ecosystem(_) => None,
            Self::Scene(id) => Some(id),
        }
    }
}

impl Resolve for EcosystemOrScene {
    const EXPECTED: &'static str = "ecosystem or scene";

    fn from_entity(id: EntityId, kind: EntityKind) -> Option<Self> {
        match kind {
            EntityKind::Ecosystem => Some(Self::Ecosystem(EcosystemId(id))),
            EntityKind::Scene => Some(Self::Scene(SceneId(id))),
            _ => None,
        }
    }

    fn entity_id(self) -> EntityId {
        self.id()
    }
}

/// Master that supplies an object's mesh.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MeshMaster {
    /// A regular mesh.
    Species(SpeciesId),
    /// A glyph of a 3D text.
    Text3d(Text3dId),
}

impl MeshMaster {
    /// Returns the untyped handle.
    #[must_use]
    pub const fn id(self) -> EntityId {
        match self {
            Self::Species(id) => id.id(),
            Self::Text3d(id) => id.id(),
        }
    }
}

impl Resolve for MeshMaster {
    const EXPECTED: &'static str = "species or text_3d";

    fn from_entity(id: EntityId, kind: EntityKind) -> Option<Self> {
        match kind {
            EntityKind::Species => Some(Self::Species(SpeciesId(id))),
            EntityKind::Text3d => Some(Self::Text3d(Text3dId(id))),
            _ => None,
        }
    }

    fn entity_id(self) -> EntityId {
        self.id()
    }
}

/// Anything a brain can steer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Movable {
    /// A camera.
    Camera(CameraId),
    /// A waypoint.
    Waypoint(WaypointId),
    /// An object.
    Object(ObjectId),
    /// A holobiont.
    Holobiont(HolobiontId),
}

impl Movable {
    /// Returns the untyped handle.
    #[must_use]
    pub const fn id(self) -> EntityId {
        match self {
            Self::Camera(id) => id.id(),
            Self::Waypoint(id) => id.id(),
            Self::Object(id) => id.id(),
            Self::Holobiont(id) => id.id(),
        }
    }
}

impl Resolve for Movable {
    const EXPECTED: &'static str = "camera, waypoint, object or holobiont";

    fn from_entity(id: EntityId, kind: EntityKind) -> Option<Self> {
        match kind {
            EntityKind::Camera => Some(Self::Camera(CameraId(id))),
            EntityKind::Waypoint => Some(Self::Waypoint(WaypointId(id))),
            EntityKind::Object => Some(Self::Object(ObjectId(id))),
            EntityKind::Holobiont => Some(Self::Holobiont(HolobiontId(id))),
            _ => None,
        }
    }

    fn entity_id(self) -> EntityId {
        self.id()
    }
}

macro_rules! sum_conversions {
    ($sum:ident { $($variant:ident($id:ident)),* }) => {$(
        impl From<$id> for $sum {
            fn from(id: $id) -> Self {
                Self::$variant(id)
            }
        }

        impl From<$id> for Request<$sum> {
            fn from(id: $id) -> Self {
                Request::handle($sum::$variant(id))
            }
        }
    )*
        impl From<$sum> for Request<$sum> {
            fn from(value: $sum) -> Self {
                Request::handle(value)
            }
        }

        impl From<$sum> for EntityId {
            fn from(value: $sum) -> Self {
                value.id()
            }
        }
    };
}

sum_conversions!(EcosystemOrScene { Ecosystem(EcosystemId), Scene(SceneId) });
sum_conversions!(MeshMaster { Species(SpeciesId), Text3d(Text3dId) });
sum_conversions!(Movable {
    Camera(CameraId),
    Waypoint(WaypointId),
    Object(ObjectId),
    Holobiont(HolobiontId)
});
