//! Entity kinds and the roles under which they bind to each other.
//!
//! The ontology is closed: every entity is one of the [`EntityKind`]s below,
//! and each kind has a fixed set of relation modules. A kind binds to its
//! parent under exactly one [`ParentOf`] role, owns one parent module per
//! role it can hold children under, and owns master and apprentice modules
//! for the [`MasterOf`] roles it participates in.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The concrete type of an entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EntityKind {
    /// The root of the ontology.
    Universe,
    /// Scene-independent container for shared resources.
    Ecosystem,
    /// A renderable world.
    Scene,
    /// A viewpoint in a scene.
    Camera,
    /// Behaviour controller for movables.
    Brain,
    /// A navigation point in a scene.
    Waypoint,
    /// A shader program.
    Pipeline,
    /// A GPGPU job run by a pipeline.
    ComputeTask,
    /// A texture bound to a pipeline.
    Material,
    /// A mesh template rendered with a material.
    Species,
    /// An instance of a mesh.
    Object,
    /// A multi-material model rendered with a pipeline.
    Symbiosis,
    /// The texture of one part of a symbiosis.
    SymbiontMaterial,
    /// The mesh of one part of a symbiosis.
    SymbiontSpecies,
    /// An instance of a symbiosis.
    Holobiont,
    /// The part of a holobiont drawn with one symbiont species.
    Biont,
    /// A font whose glyphs are meshes.
    VectorFont,
    /// A text string laid out with a vector font.
    Text3d,
}

/// The role under which a child binds to a parent.
///
/// A parent owns one parent module per role; the child's single child
/// module always binds under the same role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ParentOf {
    /// Universe → Ecosystem.
    Ecosystems,
    /// Universe → Scene.
    Scenes,
    /// Scene → Camera.
    Cameras,
    /// Scene → Brain.
    Brains,
    /// Scene → Waypoint.
    Waypoints,
    /// Ecosystem or Scene → Pipeline.
    Pipelines,
    /// Pipeline → `ComputeTask`.
    ComputeTasks,
    /// Ecosystem or Scene → Material.
    Materials,
    /// Ecosystem or Scene → Species.
    Species,
    /// Scene or `Text3d` → Object.
    Objects,
    /// Ecosystem or Scene → Symbiosis.
    Symbioses,
    /// Symbiosis → `SymbiontMaterial`.
    SymbiontMaterials,
    /// `SymbiontMaterial` → `SymbiontSpecies`.
    SymbiontSpecies,
    /// Scene → Holobiont.
    Holobionts,
    /// Holobiont → Biont.
    Bionts,
    /// Material → `VectorFont`.
    VectorFonts,
    /// Scene → `Text3d`.
    Text3ds,
}

/// The role under which an apprentice binds to a master.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MasterOf {
    /// Pipeline ⇢ Material.
    Materials,
    /// Pipeline ⇢ Symbiosis.
    Symbioses,
    /// Material ⇢ Species.
    Species,
    /// Species or `Text3d` ⇢ Object.
    Objects,
    /// Symbiosis ⇢ Holobiont.
    Holobionts,
    /// `SymbiontSpecies` ⇢ Biont.
    Bionts,
    /// Brain ⇢ Camera, Waypoint, Object, or Holobiont.
    Movables,
    /// `VectorFont` ⇢ `Text3d`.
    Text3ds,
}

impl EntityKind {
    /// Every entity kind, in declaration order.
    pub const ALL: [EntityKind; 18] = [
        Self::Universe,
        Self::Ecosystem,
        Self::Scene,
        Self::Camera,
        Self::Brain,
        Self::Waypoint,
        Self::Pipeline,
        Self::ComputeTask,
        Self::Material,
        Self::Species,
        Self::Object,
        Self::Symbiosis,
        Self::SymbiontMaterial,
        Self::SymbiontSpecies,
        Self::Holobiont,
        Self::Biont,
        Self::VectorFont,
        Self::Text3d,
    ];

    /// Returns the lower-case name of this kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Universe => "universe",
            Self::Ecosystem => "ecosystem",
            Self::Scene => "scene",
            Self::Camera => "camera",
            Self::Brain => "brain",
            Self::Waypoint => "waypoint",
            Self::Pipeline => "pipeline",
            Self::ComputeTask => "compute_task",
            Self::Material => "material",
            Self::Species => "species",
            Self::Object => "object",
            Self::Symbiosis => "symbiosis",
            Self::SymbiontMaterial => "symbiont_material",
            Self::SymbiontSpecies => "symbiont_species",
            Self::Holobiont => "holobiont",
            Self::Biont => "biont",
            Self::VectorFont => "vector_font",
            Self::Text3d => "text_3d",
        }
    }

    /// Returns the role under which this kind binds to its parent.
    ///
    /// The Universe is the only kind without a parent.
    #[must_use]
    pub const fn child_role(self) -> Option<ParentOf> {
        match self {
            Self::Universe => None,
            Self::Ecosystem => Some(ParentOf::Ecosystems),
            Self::Scene => Some(ParentOf::Scenes),
            Self::Camera => Some(ParentOf::Cameras),
            Self::Brain => Some(ParentOf::Brains),
            Self::Waypoint => Some(ParentOf::Waypoints),
            Self::Pipeline => Some(ParentOf::Pipelines),
            Self::ComputeTask => Some(ParentOf::ComputeTasks),
            Self::Material => Some(ParentOf::Materials),
            Self::Species => Some(ParentOf::Species),
            Self::Object => Some(ParentOf::Objects),
            Self::Symbiosis => Some(ParentOf::Symbioses),
            Self::SymbiontMaterial => Some(ParentOf::SymbiontMaterials),
            Self::SymbiontSpecies => Some(ParentOf::SymbiontSpecies),
            Self::Holobiont => Some(ParentOf::Holobionts),
            Self::Biont => Some(ParentOf::Bionts),
            Self::VectorFont => Some(ParentOf::VectorFonts),
            Self::Text3d => Some(ParentOf::Text3ds),
        }
    }

    /// Returns the roles under which this kind holds children.
    #[must_use]
    pub const fn parent_roles(self) -> &'static [ParentOf] {
        match self {
            Self::Universe => &[ParentOf::Ecosystems, ParentOf::Scenes],
            Self::Ecosystem => &[
                ParentOf::Pipelines,
                ParentOf::Materials,
                ParentOf::Species,
                ParentOf::Symbioses,
            ],
            Self::Scene => &[
                ParentOf::Cameras,
                ParentOf::Brains,
                ParentOf::Waypoints,
                ParentOf::Pipelines,
                ParentOf::Materials,
                ParentOf::Species,
                ParentOf::Objects,
                ParentOf::Symbioses,
                ParentOf::Holobionts,
                ParentOf::Text3ds,
            ],
            Self::Pipeline => &[ParentOf::ComputeTasks],
            Self::Material => &[ParentOf::VectorFonts],
            Self::Symbiosis => &[ParentOf::SymbiontMaterials],
            Self::SymbiontMaterial => &[ParentOf::SymbiontSpecies],
            Self::Holobiont => &[ParentOf::Bionts],
            Self::Text3d => &[ParentOf::Objects],
            Self::Camera
            | Self::Brain
            | Self::Waypoint
            | Self::ComputeTask
            | Self::Species
            | Self::Object
            | Self::SymbiontSpecies
            | Self::Biont
            | Self::VectorFont => &[],
        }
    }

    /// Returns the roles under which this kind acts as a master.
    #[must_use]
    pub const fn master_roles(self) -> &'static [MasterOf] {
        match self {
            Self::Brain => &[MasterOf::Movables],
            Self::Pipeline => &[MasterOf::Materials, MasterOf::Symbioses],
            Self::Material => &[MasterOf::Species],
            Self::Species | Self::Text3d => &[MasterOf::Objects],
            Self::Symbiosis => &[MasterOf::Holobionts],
            Self::SymbiontSpecies => &[MasterOf::Bionts],
            Self::VectorFont => &[MasterOf::Text3ds],
            Self::Universe
            | Self::Ecosystem
            | Self::Scene
            | Self::Camera
            | Self::Waypoint
            | Self::ComputeTask
            | Self::Object
            | Self::SymbiontMaterial
            | Self::Holobiont
            | Self::Biont => &[],
        }
    }

    /// Returns the roles under which this kind acts as an apprentice.
    #[must_use]
    pub const fn apprentice_roles(self) -> &'static [MasterOf] {
        match self {
            Self::Camera | Self::Waypoint => &[MasterOf::Movables],
            Self::Material => &[MasterOf::Materials],
            Self::Species => &[MasterOf::Species],
            Self::Object => &[MasterOf::Objects, MasterOf::Movables],
            Self::Symbiosis => &[MasterOf::Symbioses],
            Self::Holobiont => &[MasterOf::Holobionts, MasterOf::Movables],
            Self::Biont => &[MasterOf::Bionts],
            Self::Text3d => &[MasterOf::Text3ds],
            Self::Universe
            | Self::Ecosystem
            | Self::Scene
            | Self::Brain
            | Self::Pipeline
            | Self::ComputeTask
            | Self::SymbiontMaterial
            | Self::SymbiontSpecies
            | Self::VectorFont => &[],
        }
    }

    /// Returns true if entities of this kind can hold children under `role`.
    #[must_use]
    pub fn is_parent_of(self, role: ParentOf) -> bool {
        self.parent_roles().contains(&role)
    }

    /// Returns true if entities of this kind can master apprentices under `role`.
    #[must_use]
    pub fn is_master_of(self, role: MasterOf) -> bool {
        self.master_roles().contains(&role)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for ParentOf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Ecosystems => "ecosystems",
            Self::Scenes => "scenes",
            Self::Cameras => "cameras",
            Self::Brains => "brains",
            Self::Waypoints => "waypoints",
            Self::Pipelines => "pipelines",
            Self::ComputeTasks => "compute_tasks",
            Self::Materials => "materials",
            Self::Species => "species",
            Self::Objects => "objects",
            Self::Symbioses => "symbioses",
            Self::SymbiontMaterials => "symbiont_materials",
            Self::SymbiontSpecies => "symbiont_species",
            Self::Holobionts => "holobionts",
            Self::Bionts => "bionts",
            Self::VectorFonts => "vector_fonts",
            Self::Text3ds => "text_3ds",
        };
        write!(f, "parent_of_{name}")
    }
}

impl fmt::Display for MasterOf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Materials => "materials",
            Self::Symbioses => "symbioses",
            Self::Species => "species",
            Self::Objects => "objects",
            Self::Holobionts => "holobionts",
            Self::Bionts => "bionts",
            Self::Movables => "movables",
            Self::Text3ds => "text_3ds",
        };
        write!(f, "master_of_{name}")
    }
}
