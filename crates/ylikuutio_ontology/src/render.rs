//! Render traversal.
//!
//! The ontology does not draw anything itself. [`Universe::render`] walks
//! the active scene in render order and hands each visible entity to a
//! [`RenderSystem`], which a graphics backend implements.

use log::trace;
use ylikuutio_foundation::{EntityId, MasterOf, ParentOf, Result};

use crate::ids::{
    BiontId, ComputeTaskId, EcosystemId, EcosystemOrScene, HolobiontId, MaterialId, ObjectId,
    PipelineId, SceneId, SpeciesId, SymbiosisId, Text3dId, TypedId, VectorFontId,
};
use crate::universe::Universe;
use crate::{
    Biont, ComputeTask, Holobiont, Material, Object, Pipeline, Species, Symbiosis, Text3d,
    VectorFont,
};

/// Receives the entities of a frame in render order.
///
/// Every method defaults to doing nothing, so a backend only implements
/// the kinds it draws.
#[allow(unused_variables)]
pub trait RenderSystem {
    /// Called once per frame before any entity.
    fn begin_frame(&mut self, scene: SceneId) {}

    /// Called for each pipeline, GPGPU pipelines first.
    fn render_pipeline(&mut self, id: PipelineId, pipeline: &Pipeline) {}

    /// Called for each compute task of the current pipeline.
    fn render_compute_task(&mut self, id: ComputeTaskId, task: &ComputeTask) {}

    /// Called for each material of the current pipeline.
    fn render_material(&mut self, id: MaterialId, material: &Material) {}

    /// Called for each species of the current material.
    fn render_species(&mut self, id: SpeciesId, species: &Species) {}

    /// Called for each object of the current species or 3D text.
    fn render_object(&mut self, id: ObjectId, object: &Object) {}

    /// Called for each vector font of the current material.
    fn render_vector_font(&mut self, id: VectorFontId, font: &VectorFont) {}

    /// Called for each 3D text of the current vector font.
    fn render_text_3d(&mut self, id: Text3dId, text: &Text3d) {}

    /// Called for each symbiosis of the current pipeline.
    fn render_symbiosis(&mut self, id: SymbiosisId, symbiosis: &Symbiosis) {}

    /// Called for each holobiont of the current symbiosis.
    fn render_holobiont(&mut self, id: HolobiontId, holobiont: &Holobiont) {}

    /// Called for each biont of the current holobiont.
    fn render_biont(&mut self, id: BiontId, biont: &Biont) {}

    /// Called once per frame after every entity.
    fn end_frame(&mut self) {}
}

impl Universe {
    /// Sets whether the render traversal visits `id` and what hangs below it.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is dead.
    pub fn set_should_be_rendered(&mut self, id: EntityId, should_be_rendered: bool) -> Result<()> {
        self.entity_mut(id)?.should_be_rendered = should_be_rendered;
        Ok(())
    }

    /// Renders the active scene. Does nothing without one.
    ///
    /// Pipelines of the scene and of every ecosystem are visited GPGPU
    /// first, each parent's queue order kept otherwise. Entities belonging
    /// to another scene are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the active scene has been destroyed.
    pub fn render(&self, system: &mut dyn RenderSystem) -> Result<()> {
        let Some(scene) = self.active_scene() else {
            return Ok(());
        };
        if !self.entity(scene.id())?.should_be_rendered() {
            return Ok(());
        }

        let mut pipelines = self.pipeline_render_order(EcosystemOrScene::Scene(scene))?;
        for ecosystem in self.children(self.root(), ParentOf::Ecosystems) {
            let ecosystem = EcosystemOrScene::Ecosystem(EcosystemId::from_raw(ecosystem));
            pipelines.extend(self.pipeline_render_order(ecosystem)?);
        }
        pipelines.sort_by_key(|pipeline| !self.get(*pipeline).is_ok_and(Pipeline::is_gpgpu));

        system.begin_frame(scene);
        for pipeline in pipelines {
            self.render_pipeline(scene, pipeline, system);
        }
        system.end_frame();
        trace!("rendered {scene}");
        Ok(())
    }

    /// Returns the payload of `id` if the traversal should visit it.
    fn visible<I: TypedId>(&self, scene: SceneId, id: I) -> Option<&I::Payload> {
        let entity = self.entity(id.entity_id()).ok()?;
        if !entity.should_be_rendered() {
            return None;
        }
        if !self
            .scene(id.entity_id())
            .is_none_or(|owner| owner == scene)
        {
            return None;
        }
        I::payload(entity.data())
    }

    fn visible_children<I: TypedId>(
        &self,
        scene: SceneId,
        parent: EntityId,
        role: ParentOf,
    ) -> Vec<(I, &I::Payload)> {
        self.children(parent, role)
            .into_iter()
            .filter_map(|id| self.typed::<I>(id))
            .filter_map(|id| self.visible(scene, id).map(|payload| (id, payload)))
            .collect()
    }

    fn visible_apprentices<I: TypedId>(
        &self,
        scene: SceneId,
        master: EntityId,
        role: MasterOf,
    ) -> Vec<(I, &I::Payload)> {
        self.apprentices(master, role)
            .into_iter()
            .filter_map(|id| self.typed::<I>(id))
            .filter_map(|id| self.visible(scene, id).map(|payload| (id, payload)))
            .collect()
    }

    fn render_pipeline(&self, scene: SceneId, pipeline: PipelineId, system: &mut dyn RenderSystem) {
        let Some(payload) = self.visible(scene, pipeline) else {
            return;
        };
        system.render_pipeline(pipeline, payload);
        let owner = pipeline.id();

        for (task, payload) in self.visible_children::<ComputeTaskId>(scene, owner, ParentOf::ComputeTasks) {
            system.render_compute_task(task, payload);
        }

        for (material, payload) in
            self.visible_apprentices::<MaterialId>(scene, owner, MasterOf::Materials)
        {
            system.render_material(material, payload);
            for (species, payload) in
                self.visible_apprentices::<SpeciesId>(scene, material.id(), MasterOf::Species)
            {
                system.render_species(species, payload);
                self.render_objects(scene, species.id(), system);
            }
            for (font, payload) in
                self.visible_children::<VectorFontId>(scene, material.id(), ParentOf::VectorFonts)
            {
                system.render_vector_font(font, payload);
                for (text, payload) in
                    self.visible_apprentices::<Text3dId>(scene, font.id(), MasterOf::Text3ds)
                {
                    system.render_text_3d(text, payload);
                    self.render_objects(scene, text.id(), system);
                }
            }
        }

        for (symbiosis, payload) in
            self.visible_apprentices::<SymbiosisId>(scene, owner, MasterOf::Symbioses)
        {
            system.render_symbiosis(symbiosis, payload);
            for (holobiont, payload) in
                self.visible_apprentices::<HolobiontId>(scene, symbiosis.id(), MasterOf::Holobionts)
            {
                system.render_holobiont(holobiont, payload);
                for (biont, payload) in
                    self.visible_children::<BiontId>(scene, holobiont.id(), ParentOf::Bionts)
                {
                    system.render_biont(biont, payload);
                }
            }
        }
    }

    fn render_objects(&self, scene: SceneId, mesh_master: EntityId, system: &mut dyn RenderSystem) {
        for (object, payload) in self.visible_apprentices::<ObjectId>(scene, mesh_master, MasterOf::Objects) {
            system.render_object(object, payload);
        }
    }
}
