//! Pipelines and the render order of an ecosystem's or scene's pipelines.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use ylikuutio_foundation::{EntityId, ParentOf, Request, Result};
use ylikuutio_storage::ParentModule;

use crate::binding::BindOutcome;
use crate::ids::{EcosystemId, EcosystemOrScene, PipelineId, SceneId};
use crate::universe::Universe;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A shader program.
///
/// Child of an ecosystem or a scene, parent of compute tasks, and master of
/// the materials and symbioses rendered with it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pipeline {
    pub(crate) vertex_shader: String,
    pub(crate) fragment_shader: String,
    pub(crate) is_gpgpu: bool,
}

impl Pipeline {
    /// Returns the vertex shader filename.
    #[must_use]
    pub fn vertex_shader(&self) -> &str {
        &self.vertex_shader
    }

    /// Returns the fragment shader filename.
    #[must_use]
    pub fn fragment_shader(&self) -> &str {
        &self.fragment_shader
    }

    /// Returns true if this pipeline runs compute work rather than drawing.
    #[must_use]
    pub fn is_gpgpu(&self) -> bool {
        self.is_gpgpu
    }

    /// Moves `pipeline` under `ecosystem`.
    ///
    /// # Errors
    ///
    /// Refused (and logged) if `ecosystem` already has a child with the
    /// pipeline's local name. Fails as an invariant violation if the
    /// pipeline has no current parent.
    pub fn bind_to_new_ecosystem_parent(
        universe: &mut Universe,
        pipeline: PipelineId,
        ecosystem: EcosystemId,
    ) -> Result<BindOutcome> {
        universe.rebind_to_parent(
            pipeline.id(),
            ecosystem.id(),
            "Pipeline::bind_to_new_ecosystem_parent",
        )
    }

    /// Moves `pipeline` under `scene`.
    ///
    /// Materials and symbioses using the pipeline from another scene are
    /// released first.
    ///
    /// # Errors
    ///
    /// Refused (and logged) if `scene` already has a child with the
    /// pipeline's local name. Fails as an invariant violation if the
    /// pipeline has no current parent.
    pub fn bind_to_new_scene_parent(
        universe: &mut Universe,
        pipeline: PipelineId,
        scene: SceneId,
    ) -> Result<BindOutcome> {
        universe.rebind_to_parent(
            pipeline.id(),
            scene.id(),
            "Pipeline::bind_to_new_scene_parent",
        )
    }

    /// Moves `pipeline` under an ecosystem or a scene.
    ///
    /// # Errors
    ///
    /// See [`bind_to_new_ecosystem_parent`](Self::bind_to_new_ecosystem_parent)
    /// and [`bind_to_new_scene_parent`](Self::bind_to_new_scene_parent).
    pub fn bind_to_new_parent(
        universe: &mut Universe,
        pipeline: PipelineId,
        parent: EcosystemOrScene,
    ) -> Result<BindOutcome> {
        match parent {
            EcosystemOrScene::Ecosystem(ecosystem) => {
                Self::bind_to_new_ecosystem_parent(universe, pipeline, ecosystem)
            }
            EcosystemOrScene::Scene(scene) => {
                Self::bind_to_new_scene_parent(universe, pipeline, scene)
            }
        }
    }
}

/// Parameters for creating a [`Pipeline`].
#[derive(Debug, Clone, Default)]
pub struct PipelineStruct {
    /// Ecosystem or scene to bind to.
    pub parent: Request<EcosystemOrScene>,
    /// Global name, or empty for none.
    pub global_name: String,
    /// Local name, or empty for none.
    pub local_name: String,
    /// Vertex shader filename.
    pub vertex_shader: String,
    /// Fragment shader filename.
    pub fragment_shader: String,
    /// Whether the pipeline runs compute work.
    pub is_gpgpu: bool,
}

impl PipelineStruct {
    /// Creates parameters for a pipeline under `parent`.
    #[must_use]
    pub fn new(parent: impl Into<Request<EcosystemOrScene>>) -> Self {
        Self {
            parent: parent.into(),
            ..Self::default()
        }
    }

    /// Builder method to set the shader filenames.
    #[must_use]
    pub fn with_shaders(mut self, vertex: impl Into<String>, fragment: impl Into<String>) -> Self {
        self.vertex_shader = vertex.into();
        self.fragment_shader = fragment.into();
        self
    }

    /// Builder method to mark the pipeline as GPGPU.
    #[must_use]
    pub fn with_gpgpu(mut self, is_gpgpu: bool) -> Self {
        self.is_gpgpu = is_gpgpu;
        self
    }
}

crate::named_struct!(PipelineStruct);

/// Place of one pipeline in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RenderOrder {
    is_gpgpu: bool,
    child_id: usize,
    pipeline: EntityId,
}

impl Ord for RenderOrder {
    /// GPGPU pipelines come first, then ascending childID.
    fn cmp(&self, other: &Self) -> Ordering {
        self.is_gpgpu
            .cmp(&other.is_gpgpu)
            .then_with(|| other.child_id.cmp(&self.child_id))
            .then_with(|| self.pipeline.cmp(&other.pipeline))
    }
}

impl PartialOrd for RenderOrder {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The pipelines of an ecosystem or scene, kept in render order.
///
/// Removal is by value: the heap is filtered and re-heapified.
#[derive(Debug, Clone)]
pub struct ParentOfPipelinesModule {
    module: ParentModule,
    queue: BinaryHeap<RenderOrder>,
}

impl Default for ParentOfPipelinesModule {
    fn default() -> Self {
        Self::new()
    }
}

impl ParentOfPipelinesModule {
    /// Creates an empty module.
    #[must_use]
    pub fn new() -> Self {
        Self {
            module: ParentModule::new(ParentOf::Pipelines),
            queue: BinaryHeap::new(),
        }
    }

    /// Returns the underlying parent module.
    #[must_use]
    pub fn module(&self) -> &ParentModule {
        &self.module
    }

    /// Binds `pipeline` and queues it for rendering.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyBound` if `pipeline` is already bound here.
    pub fn bind_pipeline(&mut self, pipeline: EntityId, is_gpgpu: bool) -> Result<usize> {
        let child_id = self.module.bind_child(pipeline)?;
        self.queue.push(RenderOrder {
            is_gpgpu,
            child_id,
            pipeline,
        });
        Ok(child_id)
    }

    /// Unbinds the pipeline at `child_id` and drops it from the queue.
    ///
    /// # Errors
    ///
    /// Returns an error if `child_id` is out of range or empty.
    pub fn unbind_pipeline(&mut self, child_id: usize) -> Result<EntityId> {
        let pipeline = self.module.unbind_child(child_id)?;
        self.queue.retain(|order| order.child_id != child_id);
        Ok(pipeline)
    }

    /// Returns the bound pipelines in render order.
    #[must_use]
    pub fn render_order(&self) -> Vec<EntityId> {
        let mut order = self.queue.clone().into_sorted_vec();
        order.reverse();
        order.into_iter().map(|entry| entry.pipeline).collect()
    }
}

impl Universe {
    /// Returns the pipelines of `parent` in render order.
    ///
    /// # Errors
    ///
    /// Returns an error if `parent` is dead.
    pub fn pipeline_render_order(&self, parent: EcosystemOrScene) -> Result<Vec<PipelineId>> {
        let entity = self.entity(parent.id())?;
        Ok(match entity.parent_slot(ParentOf::Pipelines) {
            Some(crate::entity::ParentSlot::Pipelines(pipelines)) => pipelines
                .render_order()
                .into_iter()
                .map(PipelineId::from_raw)
                .collect(),
            _ => Vec::new(),
        })
    }
}
