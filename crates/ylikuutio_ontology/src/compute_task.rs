//! GPGPU jobs.

use ylikuutio_foundation::{Request, Result};

use crate::binding::BindOutcome;
use crate::ids::{ComputeTaskId, PipelineId};
use crate::universe::Universe;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A compute job run by its parent pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ComputeTask {
    pub(crate) texture_width: u32,
    pub(crate) texture_height: u32,
    pub(crate) n_max_iterations: u32,
}

impl ComputeTask {
    /// Returns the output texture size in texels.
    #[must_use]
    pub fn texture_size(&self) -> (u32, u32) {
        (self.texture_width, self.texture_height)
    }

    /// Returns the iteration cap.
    #[must_use]
    pub fn n_max_iterations(&self) -> u32 {
        self.n_max_iterations
    }

    /// Moves `task` under `pipeline`.
    ///
    /// # Errors
    ///
    /// Refused if `pipeline` already has a task with the same local name.
    pub fn bind_to_new_pipeline_parent(
        universe: &mut Universe,
        task: ComputeTaskId,
        pipeline: PipelineId,
    ) -> Result<BindOutcome> {
        universe.rebind_to_parent(
            task.id(),
            pipeline.id(),
            "ComputeTask::bind_to_new_pipeline_parent",
        )
    }
}

/// Parameters for creating a [`ComputeTask`].
#[derive(Debug, Clone, Default)]
pub struct ComputeTaskStruct {
    /// Pipeline to bind to.
    pub parent: Request<PipelineId>,
    /// Global name, or empty for none.
    pub global_name: String,
    /// Local name, or empty for none.
    pub local_name: String,
    /// Output texture width in texels.
    pub texture_width: u32,
    /// Output texture height in texels.
    pub texture_height: u32,
    /// Iteration cap.
    pub n_max_iterations: u32,
}

impl ComputeTaskStruct {
    /// Creates parameters for a task under `parent`.
    #[must_use]
    pub fn new(parent: impl Into<Request<PipelineId>>) -> Self {
        Self {
            parent: parent.into(),
            n_max_iterations: 1,
            ..Self::default()
        }
    }

    /// Builder method to set the output texture size.
    #[must_use]
    pub fn with_texture_size(mut self, width: u32, height: u32) -> Self {
        self.texture_width = width;
        self.texture_height = height;
        self
    }

    /// Builder method to set the iteration cap.
    #[must_use]
    pub fn with_max_iterations(mut self, n: u32) -> Self {
        self.n_max_iterations = n;
        self
    }
}

crate::named_struct!(ComputeTaskStruct);
