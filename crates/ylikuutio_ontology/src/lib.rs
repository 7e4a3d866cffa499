//! The Ylikuutio ontology: every entity of a universe and how they relate.
//!
//! Each entity has at most one parent, which owns it, and may use one or
//! more masters, which supply resources to it. An object, for example, is
//! a child of a scene but an apprentice of the species whose mesh it
//! instances. Masters and apprentices never cross from one scene into
//! another; entities that live in an ecosystem belong to no scene and may
//! be shared by all of them.
//!
//! This crate provides:
//! - [`Universe`] - Owner of every entity, the global namespace, and all binding operations
//! - [`EntityFactory`] - The only way to create entities
//! - Per-kind payloads such as [`Pipeline`] and [`Species`], with their
//!   `bind_to_new_*` rebind operations and `*Struct` creation parameters
//! - Typed handles such as [`PipelineId`], and [`EcosystemOrScene`] for
//!   kinds that accept either parent
//! - [`RenderSystem`] - Receiver of the render traversal
//!
//! # Example
//!
//! ```
//! use ylikuutio_ontology::{
//!     EcosystemStruct, MaterialStruct, PipelineStruct, SceneStruct, Universe, UniverseConfig,
//! };
//!
//! let mut universe = Universe::new(UniverseConfig::headless());
//! let ecosystem = universe.factory().create_ecosystem(EcosystemStruct::new());
//! let scene = universe.factory().create_scene(SceneStruct::new());
//! let pipeline = universe.factory().create_pipeline(PipelineStruct::new(scene));
//! let material = universe
//!     .factory()
//!     .create_material(MaterialStruct::new(ecosystem, pipeline));
//!
//! assert_eq!(universe.parent(material.id()), Some(ecosystem.id()));
//! assert_eq!(universe.number_of_apprentices(pipeline.id()), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

/// Adds `with_global_name` and `with_local_name` builders to a `*Struct`.
macro_rules! named_struct {
    ($name:ident) => {
        impl $name {
            /// Builder method to set the global name.
            #[must_use]
            pub fn with_global_name(mut self, name: impl Into<String>) -> Self {
                self.global_name = name.into();
                self
            }

            /// Builder method to set the local name.
            #[must_use]
            pub fn with_local_name(mut self, name: impl Into<String>) -> Self {
                self.local_name = name.into();
                self
            }
        }
    };
}
pub(crate) use named_struct;

pub mod binding;
pub mod brain;
pub mod camera;
pub mod compute_task;
pub mod config;
pub mod ecosystem;
pub mod entity;
pub mod factory;
pub mod ids;
pub mod material;
pub mod object;
pub mod pipeline;
pub mod render;
pub mod scene;
pub mod species;
pub mod symbiont;
pub mod symbiosis;
pub mod text_3d;
pub mod universe;
pub mod vector_font;

pub use binding::BindOutcome;
pub use brain::{Brain, BrainStruct, Waypoint, WaypointStruct};
pub use camera::{Camera, CameraStruct};
pub use compute_task::{ComputeTask, ComputeTaskStruct};
pub use config::{GraphicsApiBackend, UniverseConfig};
pub use ecosystem::{Ecosystem, EcosystemStruct};
pub use entity::{Entity, EntityData, ParentSlot};
pub use factory::EntityFactory;
pub use ids::{
    BiontId, BrainId, CameraId, ComputeTaskId, EcosystemId, EcosystemOrScene, HolobiontId,
    MaterialId, MeshMaster, Movable, ObjectId, PipelineId, SceneId, SpeciesId, SymbiontMaterialId,
    SymbiontSpeciesId, SymbiosisId, Text3dId, TypedId, VectorFontId, WaypointId,
};
pub use material::{Material, MaterialStruct};
pub use object::{Object, ObjectStruct};
pub use pipeline::{ParentOfPipelinesModule, Pipeline, PipelineStruct};
pub use render::RenderSystem;
pub use scene::{Scene, SceneStruct};
pub use species::{Species, SpeciesStruct};
pub use symbiont::{
    Biont, BiontStruct, SymbiontMaterial, SymbiontMaterialStruct, SymbiontSpecies,
    SymbiontSpeciesStruct,
};
pub use symbiosis::{Holobiont, HolobiontStruct, Symbiosis, SymbiosisStruct};
pub use text_3d::{Text3d, Text3dStruct};
pub use universe::Universe;
pub use vector_font::{VectorFont, VectorFontStruct};
