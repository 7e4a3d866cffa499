//! The entity factory.
//!
//! Every entity is created here. Creation always succeeds and returns a
//! handle: an entity whose parent or master cannot be resolved, or whose
//! local name is already taken under that parent, is still created and
//! left unbound for the caller to inspect, rebind or destroy. Each such
//! refusal is logged.

use log::{debug, warn};
use ylikuutio_foundation::{EntityId, MasterOf, Request, Resolve, Result};

use crate::entity::{Entity, EntityData};
use crate::ids::{
    BiontId, BrainId, CameraId, ComputeTaskId, EcosystemId, HolobiontId, MaterialId, MeshMaster,
    ObjectId, PipelineId, SceneId, SpeciesId, SymbiontMaterialId, SymbiontSpeciesId, SymbiosisId,
    Text3dId, VectorFontId, WaypointId,
};
use crate::universe::Universe;
use crate::{
    Biont, BiontStruct, Brain, BrainStruct, Camera, CameraStruct, ComputeTask, ComputeTaskStruct,
    Ecosystem, EcosystemStruct, Holobiont, HolobiontStruct, Material, MaterialStruct, Object,
    ObjectStruct, Pipeline, PipelineStruct, Scene, SceneStruct, Species, SpeciesStruct,
    Symbiosis, SymbiosisStruct, SymbiontMaterial, SymbiontMaterialStruct, SymbiontSpecies,
    SymbiontSpeciesStruct, Text3d, Text3dStruct, VectorFont, VectorFontStruct, Waypoint,
    WaypointStruct,
};

/// Distance between neighbouring glyph objects of a 3D text.
const GLYPH_ADVANCE: f32 = 1.0;

/// Creates entities in a [`Universe`] and wires up their relations.
pub struct EntityFactory<'u> {
    universe: &'u mut Universe,
}

impl<'u> EntityFactory<'u> {
    pub(crate) fn new(universe: &'u mut Universe) -> Self {
        Self { universe }
    }

    // =========================================================================
    // Plumbing
    // =========================================================================

    fn spawn(&mut self, data: EntityData) -> EntityId {
        let id = self.universe.entities.next_id();
        self.universe.entities.spawn(Entity::new(id, data))
    }

    /// Resolves `request`, logging a failure under `operation`.
    fn resolve<T: Resolve>(&self, request: &Request<T>, operation: &str) -> Option<T> {
        self.universe
            .resolve(request)
            .inspect_err(|err| warn!("{operation}: {err}"))
            .ok()
            .flatten()
    }

    fn log_refusal(operation: &str, result: Result<usize>) {
        if let Err(err) = result {
            warn!("{operation}: {err}");
        }
    }

    /// Binds `id` to the parent named by `request`, if any.
    fn place<T: Resolve>(&mut self, id: EntityId, request: &Request<T>, operation: &str) {
        if let Some(parent) = self.resolve(request, operation) {
            let result = self.universe.bind_child(id, parent.entity_id());
            Self::log_refusal(operation, result);
        }
    }

    /// Binds `id` as an apprentice of the master named by `request`, if any.
    fn apprentice<T: Resolve>(
        &mut self,
        id: EntityId,
        role: MasterOf,
        request: &Request<T>,
        operation: &str,
    ) {
        if let Some(master) = self.resolve(request, operation) {
            let result = self.universe.bind_apprentice(id, role, master.entity_id());
            Self::log_refusal(operation, result);
        }
    }

    /// Names a still unbound `id`, so that binding it checks the local name.
    fn name(&mut self, id: EntityId, global_name: &str, local_name: &str, operation: &str) {
        if !global_name.is_empty() {
            if let Err(err) = self.universe.set_global_name(id, global_name) {
                warn!("{operation}: {err}");
            }
        }
        if !local_name.is_empty() {
            if let Err(err) = self.universe.set_local_name(id, local_name) {
                warn!("{operation}: {err}");
            }
        }
    }

    /// Binds a child of the universe and names it in the shared namespace.
    fn place_in_universe(&mut self, id: EntityId, global_name: &str, local_name: &str, operation: &str) {
        let root = self.universe.root();
        let result = self.universe.bind_child(id, root);
        Self::log_refusal(operation, result);
        let name = if global_name.is_empty() {
            local_name
        } else {
            global_name
        };
        self.name(id, name, "", operation);
    }

    fn finish(&self, id: EntityId, operation: &str) {
        debug!(
            "{operation}: created {id:?} under {:?}",
            self.universe.parent(id)
        );
    }

    // =========================================================================
    // Top-level containers
    // =========================================================================

    /// Creates an ecosystem under the universe.
    pub fn create_ecosystem(&mut self, params: EcosystemStruct) -> EcosystemId {
        const OP: &str = "EntityFactory::create_ecosystem";
        let id = self.spawn(EntityData::Ecosystem(Ecosystem {}));
        self.place_in_universe(id, &params.global_name, &params.local_name, OP);
        self.finish(id, OP);
        EcosystemId::from_raw(id)
    }

    /// Creates a scene under the universe.
    ///
    /// With default cameras enabled, the scene also gets a camera, which
    /// becomes its active camera.
    pub fn create_scene(&mut self, params: SceneStruct) -> SceneId {
        const OP: &str = "EntityFactory::create_scene";
        let id = self.spawn(EntityData::Scene(Scene {
            gravity: params.gravity,
            water_level: params.water_level,
            active_camera: None,
        }));
        self.place_in_universe(id, &params.global_name, &params.local_name, OP);
        let scene = SceneId::from_raw(id);

        if self.universe.config().create_default_cameras {
            let camera = self.create_camera(CameraStruct::new(scene));
            if let Err(err) = self.universe.set_active_camera(scene, Some(camera)) {
                warn!("{OP}: {err}");
            }
        }
        self.finish(id, OP);
        scene
    }

    // =========================================================================
    // Scene inhabitants
    // =========================================================================

    /// Creates a camera.
    pub fn create_camera(&mut self, params: CameraStruct) -> CameraId {
        const OP: &str = "EntityFactory::create_camera";
        let id = self.spawn(EntityData::Camera(Camera {
            cartesian_coordinates: params.cartesian_coordinates,
            yaw: params.yaw,
            pitch: params.pitch,
            is_static_view: params.is_static_view,
        }));
        self.name(id, &params.global_name, &params.local_name, OP);
        self.place(id, &params.parent, OP);
        self.apprentice(id, MasterOf::Movables, &params.brain, OP);
        self.finish(id, OP);
        CameraId::from_raw(id)
    }

    /// Creates a brain.
    pub fn create_brain(&mut self, params: BrainStruct) -> BrainId {
        const OP: &str = "EntityFactory::create_brain";
        let id = self.spawn(EntityData::Brain(Brain {
            is_active: params.is_active,
        }));
        self.name(id, &params.global_name, &params.local_name, OP);
        self.place(id, &params.parent, OP);
        self.finish(id, OP);
        BrainId::from_raw(id)
    }

    /// Creates a waypoint.
    pub fn create_waypoint(&mut self, params: WaypointStruct) -> WaypointId {
        const OP: &str = "EntityFactory::create_waypoint";
        let id = self.spawn(EntityData::Waypoint(Waypoint {
            cartesian_coordinates: params.cartesian_coordinates,
        }));
        self.name(id, &params.global_name, &params.local_name, OP);
        self.place(id, &params.parent, OP);
        self.apprentice(id, MasterOf::Movables, &params.brain, OP);
        self.finish(id, OP);
        WaypointId::from_raw(id)
    }

    // =========================================================================
    // Render resources
    // =========================================================================

    /// Creates a pipeline.
    pub fn create_pipeline(&mut self, params: PipelineStruct) -> PipelineId {
        const OP: &str = "EntityFactory::create_pipeline";
        let id = self.spawn(EntityData::Pipeline(Pipeline {
            vertex_shader: params.vertex_shader,
            fragment_shader: params.fragment_shader,
            is_gpgpu: params.is_gpgpu,
        }));
        self.name(id, &params.global_name, &params.local_name, OP);
        self.place(id, &params.parent, OP);
        self.finish(id, OP);
        PipelineId::from_raw(id)
    }

    /// Creates a compute task.
    pub fn create_compute_task(&mut self, params: ComputeTaskStruct) -> ComputeTaskId {
        const OP: &str = "EntityFactory::create_compute_task";
        let id = self.spawn(EntityData::ComputeTask(ComputeTask {
            texture_width: params.texture_width,
            texture_height: params.texture_height,
            n_max_iterations: params.n_max_iterations,
        }));
        self.name(id, &params.global_name, &params.local_name, OP);
        self.place(id, &params.parent, OP);
        self.finish(id, OP);
        ComputeTaskId::from_raw(id)
    }

    /// Creates a material.
    pub fn create_material(&mut self, params: MaterialStruct) -> MaterialId {
        const OP: &str = "EntityFactory::create_material";
        let id = self.spawn(EntityData::Material(Material {
            texture_filename: params.texture_filename,
            texture_file_format: params.texture_file_format,
        }));
        self.name(id, &params.global_name, &params.local_name, OP);
        self.place(id, &params.parent, OP);
        self.apprentice(id, MasterOf::Materials, &params.pipeline, OP);
        self.finish(id, OP);
        MaterialId::from_raw(id)
    }

    /// Creates a species.
    pub fn create_species(&mut self, params: SpeciesStruct) -> SpeciesId {
        const OP: &str = "EntityFactory::create_species";
        let id = self.spawn(EntityData::Species(Species {
            model_filename: params.model_filename,
            model_file_format: params.model_file_format,
            is_terrain: params.is_terrain,
        }));
        self.name(id, &params.global_name, &params.local_name, OP);
        self.place(id, &params.parent, OP);
        self.apprentice(id, MasterOf::Species, &params.material, OP);
        self.finish(id, OP);
        SpeciesId::from_raw(id)
    }

    /// Creates an object.
    pub fn create_object(&mut self, params: ObjectStruct) -> ObjectId {
        const OP: &str = "EntityFactory::create_object";
        let id = self.spawn(EntityData::Object(Object {
            cartesian_coordinates: params.cartesian_coordinates,
            orientation: params.orientation,
            scale: params.scale,
        }));
        self.name(id, &params.global_name, &params.local_name, OP);
        self.place(id, &params.parent, OP);
        self.apprentice::<MeshMaster>(id, MasterOf::Objects, &params.mesh_master, OP);
        self.apprentice(id, MasterOf::Movables, &params.brain, OP);
        self.finish(id, OP);
        ObjectId::from_raw(id)
    }

    /// Creates a symbiosis.
    pub fn create_symbiosis(&mut self, params: SymbiosisStruct) -> SymbiosisId {
        const OP: &str = "EntityFactory::create_symbiosis";
        let id = self.spawn(EntityData::Symbiosis(Symbiosis {
            model_filename: params.model_filename,
            model_file_format: params.model_file_format,
        }));
        self.name(id, &params.global_name, &params.local_name, OP);
        self.place(id, &params.parent, OP);
        self.apprentice(id, MasterOf::Symbioses, &params.pipeline, OP);
        self.finish(id, OP);
        SymbiosisId::from_raw(id)
    }

    /// Creates a holobiont.
    pub fn create_holobiont(&mut self, params: HolobiontStruct) -> HolobiontId {
        const OP: &str = "EntityFactory::create_holobiont";
        let id = self.spawn(EntityData::Holobiont(Holobiont {
            cartesian_coordinates: params.cartesian_coordinates,
            orientation: params.orientation,
        }));
        self.name(id, &params.global_name, &params.local_name, OP);
        self.place(id, &params.parent, OP);
        self.apprentice(id, MasterOf::Holobionts, &params.symbiosis, OP);
        self.apprentice(id, MasterOf::Movables, &params.brain, OP);
        let holobiont = HolobiontId::from_raw(id);

        let symbiosis = self
            .universe
            .master(id, MasterOf::Holobionts)
            .and_then(|master| self.universe.typed::<SymbiosisId>(master));
        if let Some(symbiosis) = symbiosis {
            for species in self.universe.symbiont_species(symbiosis) {
                self.create_biont(
                    BiontStruct::new(holobiont, species).at(params.cartesian_coordinates),
                );
            }
        }
        self.finish(id, OP);
        holobiont
    }

    /// Creates a symbiont material.
    pub fn create_symbiont_material(&mut self, params: SymbiontMaterialStruct) -> SymbiontMaterialId {
        const OP: &str = "EntityFactory::create_symbiont_material";
        let id = self.spawn(EntityData::SymbiontMaterial(SymbiontMaterial {
            texture_filename: params.texture_filename,
            texture_file_format: params.texture_file_format,
        }));
        self.name(id, &params.global_name, &params.local_name, OP);
        self.place(id, &params.parent, OP);
        self.finish(id, OP);
        SymbiontMaterialId::from_raw(id)
    }

    /// Creates a symbiont species.
    pub fn create_symbiont_species(&mut self, params: SymbiontSpeciesStruct) -> SymbiontSpeciesId {
        const OP: &str = "EntityFactory::create_symbiont_species";
        let id = self.spawn(EntityData::SymbiontSpecies(SymbiontSpecies {
            mesh_index: params.mesh_index,
            light_position: params.light_position,
        }));
        self.name(id, &params.global_name, &params.local_name, OP);
        self.place(id, &params.parent, OP);
        self.finish(id, OP);
        SymbiontSpeciesId::from_raw(id)
    }

    /// Creates a biont.
    ///
    /// Holobionts create their bionts themselves; this is for adding or
    /// replacing one by hand.
    pub fn create_biont(&mut self, params: BiontStruct) -> BiontId {
        const OP: &str = "EntityFactory::create_biont";
        let id = self.spawn(EntityData::Biont(Biont {
            cartesian_coordinates: params.cartesian_coordinates,
        }));
        self.name(id, &params.global_name, &params.local_name, OP);
        self.place(id, &params.parent, OP);
        self.apprentice(id, MasterOf::Bionts, &params.symbiont_species, OP);
        self.finish(id, OP);
        BiontId::from_raw(id)
    }

    /// Creates a vector font.
    pub fn create_vector_font(&mut self, params: VectorFontStruct) -> VectorFontId {
        const OP: &str = "EntityFactory::create_vector_font";
        let id = self.spawn(EntityData::VectorFont(VectorFont {
            font_filename: params.font_filename,
            font_file_format: params.font_file_format,
        }));
        self.name(id, &params.global_name, &params.local_name, OP);
        self.place(id, &params.parent, OP);
        self.finish(id, OP);
        VectorFontId::from_raw(id)
    }

    /// Creates a 3D text and one glyph object per visible character.
    ///
    /// Glyph objects are children of the text and use it as their mesh
    /// master, so they move and die with it.
    pub fn create_text_3d(&mut self, params: Text3dStruct) -> Text3dId {
        const OP: &str = "EntityFactory::create_text_3d";
        let origin = params.cartesian_coordinates;
        let id = self.spawn(EntityData::Text3d(Text3d {
            text: params.text.clone(),
            cartesian_coordinates: origin,
        }));
        self.name(id, &params.global_name, &params.local_name, OP);
        self.place(id, &params.parent, OP);
        self.apprentice(id, MasterOf::Text3ds, &params.vector_font, OP);
        let text = Text3dId::from_raw(id);

        let mut x = origin[0];
        for glyph in params.text.chars() {
            if !glyph.is_whitespace() {
                self.create_glyph(text, [x, origin[1], origin[2]]);
            }
            x += GLYPH_ADVANCE;
        }
        self.finish(id, OP);
        text
    }

    fn create_glyph(&mut self, text: Text3dId, cartesian_coordinates: [f32; 3]) -> ObjectId {
        const OP: &str = "EntityFactory::create_text_3d";
        let id = self.spawn(EntityData::Object(Object {
            cartesian_coordinates,
            orientation: [0.0; 3],
            scale: 1.0,
        }));
        let result = self.universe.bind_child(id, text.id());
        Self::log_refusal(OP, result);
        let result = self.universe.bind_apprentice(id, MasterOf::Objects, text.id());
        Self::log_refusal(OP, result);
        ObjectId::from_raw(id)
    }
}
