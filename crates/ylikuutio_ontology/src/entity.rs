//! The entity record shared by every kind.
//!
//! An [`Entity`] carries what all kinds have in common: names, the
//! relation modules dictated by its [`EntityKind`], the registry of its
//! children's local names, and the kind-specific [`EntityData`].

use ylikuutio_foundation::{EntityId, EntityKind, MasterOf, ParentOf, Result};
use ylikuutio_storage::{ApprenticeModule, ChildModule, MasterModule, ParentModule, Registry};

use crate::pipeline::ParentOfPipelinesModule;
use crate::{
    Biont, Brain, Camera, ComputeTask, Ecosystem, Holobiont, Material, Object, Pipeline, Scene,
    Species, Symbiosis, SymbiontMaterial, SymbiontSpecies, Text3d, VectorFont, Waypoint,
};

/// Kind-specific data of an entity.
#[derive(Debug, Clone, PartialEq)]
pub enum EntityData {
    /// The universe itself.
    Universe,
    /// See [`Ecosystem`].
    Ecosystem(Ecosystem),
    /// See [`Scene`].
    Scene(Scene),
    /// See [`Camera`].
    Camera(Camera),
    /// See [`Brain`].
    Brain(Brain),
    /// See [`Waypoint`].
    Waypoint(Waypoint),
    /// See [`Pipeline`].
    Pipeline(Pipeline),
    /// See [`ComputeTask`].
    ComputeTask(ComputeTask),
    /// See [`Material`].
    Material(Material),
    /// See [`Species`].
    Species(Species),
    /// See [`Object`].
    Object(Object),
    /// See [`Symbiosis`].
    Symbiosis(Symbiosis),
    /// See [`SymbiontMaterial`].
    SymbiontMaterial(SymbiontMaterial),
    /// See [`SymbiontSpecies`].
    SymbiontSpecies(SymbiontSpecies),
    /// See [`Holobiont`].
    Holobiont(Holobiont),
    /// See [`Biont`].
    Biont(Biont),
    /// See [`VectorFont`].
    VectorFont(VectorFont),
    /// See [`Text3d`].
    Text3d(Text3d),
}

impl EntityData {
    /// Returns the kind this data belongs to.
    #[must_use]
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Universe => EntityKind::Universe,
            Self::Ecosystem(_) => EntityKind::Ecosystem,
            Self::Scene(_) => EntityKind::Scene,
            Self::Camera(_) => EntityKind::Camera,
            Self::Brain(_) => EntityKind::Brain,
            Self::Waypoint(_) => EntityKind::Waypoint,
            Self::Pipeline(_) => EntityKind::Pipeline,
            Self::ComputeTask(_) => EntityKind::ComputeTask,
            Self::Material(_) => EntityKind::Material,
            Self::Species(_) => EntityKind::Species,
            Self::Object(_) => EntityKind::Object,
            Self::Symbiosis(_) => EntityKind::Symbiosis,
            Self::SymbiontMaterial(_) => EntityKind::SymbiontMaterial,
            Self::SymbiontSpecies(_) => EntityKind::SymbiontSpecies,
            Self::Holobiont(_) => EntityKind::Holobiont,
            Self::Biont(_) => EntityKind::Biont,
            Self::VectorFont(_) => EntityKind::VectorFont,
            Self::Text3d(_) => EntityKind::Text3d,
        }
    }
}

/// One parent module of an entity.
///
/// Pipelines are kept in render order alongside their childIDs; every
/// other role only needs the plain module.
#[derive(Debug, Clone)]
pub enum ParentSlot {
    /// An ordinary parent module.
    Plain(ParentModule),
    /// The pipelines of an ecosystem or scene.
    Pipelines(ParentOfPipelinesModule),
}

impl ParentSlot {
    fn new(role: ParentOf) -> Self {
        match role {
            ParentOf::Pipelines => Self::Pipelines(ParentOfPipelinesModule::new()),
            _ => Self::Plain(ParentModule::new(role)),
        }
    }

    /// Returns the underlying module.
    #[must_use]
    pub fn module(&self) -> &ParentModule {
        match self {
            Self::Plain(module) => module,
            Self::Pipelines(pipelines) => pipelines.module(),
        }
    }

    pub(crate) fn bind_child(&mut self, child: EntityId, is_gpgpu: bool) -> Result<usize> {
        match self {
            Self::Plain(module) => module.bind_child(child),
            Self::Pipelines(pipelines) => pipelines.bind_pipeline(child, is_gpgpu),
        }
    }

    pub(crate) fn unbind_child(&mut self, child_id: usize) -> Result<EntityId> {
        match self {
            Self::Plain(module) => module.unbind_child(child_id),
            Self::Pipelines(pipelines) => pipelines.unbind_pipeline(child_id),
        }
    }
}

/// An entity record.
#[derive(Debug, Clone)]
pub struct Entity {
    pub(crate) id: EntityId,
    pub(crate) global_name: String,
    pub(crate) local_name: String,
    pub(crate) can_be_erased: bool,
    pub(crate) should_be_rendered: bool,
    pub(crate) child: Option<ChildModule>,
    pub(crate) parents: Vec<ParentSlot>,
    pub(crate) masters: Vec<MasterModule>,
    pub(crate) apprentices: Vec<ApprenticeModule>,
    pub(crate) local_names: Registry,
    pub(crate) data: EntityData,
}

impl Entity {
    /// Creates an unbound, unnamed record with the modules its kind requires.
    pub(crate) fn new(id: EntityId, data: EntityData) -> Self {
        let kind = data.kind();
        Self {
            id,
            global_name: String::new(),
            local_name: String::new(),
            can_be_erased: kind != EntityKind::Universe,
            should_be_rendered: true,
            child: kind.child_role().map(ChildModule::new),
            parents: kind.parent_roles().iter().copied().map(ParentSlot::new).collect(),
            masters: kind.master_roles().iter().copied().map(MasterModule::new).collect(),
            apprentices: kind
                .apprentice_roles()
                .iter()
                .copied()
                .map(ApprenticeModule::new)
                .collect(),
            local_names: Registry::new(),
            data,
        }
    }

    /// Returns this entity's handle.
    #[must_use]
    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Returns this entity's kind.
    #[must_use]
    pub fn kind(&self) -> EntityKind {
        self.data.kind()
    }

    /// Returns the global name, or `""` if none was set.
    #[must_use]
    pub fn global_name(&self) -> &str {
        &self.global_name
    }

    /// Returns the local name, or `""` if none was set.
    #[must_use]
    pub fn local_name(&self) -> &str {
        &self.local_name
    }

    /// Returns false for entities that must outlive any destroy request.
    #[must_use]
    pub fn can_be_erased(&self) -> bool {
        self.can_be_erased
    }

    /// Returns true if the render traversal should visit this entity.
    #[must_use]
    pub fn should_be_rendered(&self) -> bool {
        self.should_be_rendered
    }

    /// Returns the kind-specific data.
    #[must_use]
    pub fn data(&self) -> &EntityData {
        &self.data
    }

    /// Returns the child module; `None` only for the universe.
    #[must_use]
    pub fn child_module(&self) -> Option<&ChildModule> {
        self.child.as_ref()
    }

    pub(crate) fn child_module_mut(&mut self) -> Option<&mut ChildModule> {
        self.child.as_mut()
    }

    /// Returns the current parent.
    #[must_use]
    pub fn parent(&self) -> Option<EntityId> {
        self.child.and_then(|child| child.parent())
    }

    /// Returns the childID assigned by the current parent.
    #[must_use]
    pub fn child_id(&self) -> Option<usize> {
        self.child.and_then(|child| child.child_id())
    }

    /// Returns the parent module for `role`.
    #[must_use]
    pub fn parent_module(&self, role: ParentOf) -> Option<&ParentModule> {
        self.parents
            .iter()
            .map(ParentSlot::module)
            .find(|module| module.role() == role)
    }

    pub(crate) fn parent_slot(&self, role: ParentOf) -> Option<&ParentSlot> {
        self.parents.iter().find(|slot| slot.module().role() == role)
    }

    pub(crate) fn parent_slot_mut(&mut self, role: ParentOf) -> Option<&mut ParentSlot> {
        self.parents
            .iter_mut()
            .find(|slot| slot.module().role() == role)
    }

    /// Returns the master module for `role`.
    #[must_use]
    pub fn master_module(&self, role: MasterOf) -> Option<&MasterModule> {
        self.masters.iter().find(|module| module.role() == role)
    }

    pub(crate) fn master_module_mut(&mut self, role: MasterOf) -> Option<&mut MasterModule> {
        self.masters.iter_mut().find(|module| module.role() == role)
    }

    /// Returns the apprentice module for `role`.
    #[must_use]
    pub fn apprentice_module(&self, role: MasterOf) -> Option<&ApprenticeModule> {
        self.apprentices.iter().find(|module| module.role() == role)
    }

    pub(crate) fn apprentice_module_mut(&mut self, role: MasterOf) -> Option<&mut ApprenticeModule> {
        self.apprentices
            .iter_mut()
            .find(|module| module.role() == role)
    }

    /// Returns the number of children across every parent module.
    #[must_use]
    pub fn number_of_children(&self) -> usize {
        self.parents
            .iter()
            .map(|slot| slot.module().number_of_children())
            .sum()
    }

    /// Returns the number of apprentices across every master module.
    #[must_use]
    pub fn number_of_apprentices(&self) -> usize {
        self.masters
            .iter()
            .map(MasterModule::number_of_apprentices)
            .sum()
    }

    /// Iterates over every child in every parent module.
    pub fn children(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.parents
            .iter()
            .flat_map(|slot| slot.module().children().map(|(_, child)| child))
    }

    /// Returns the registry of the children's local names.
    #[must_use]
    pub fn local_names(&self) -> &Registry {
        &self.local_names
    }

    pub(crate) fn is_gpgpu_pipeline(&self) -> bool {
        matches!(&self.data, EntityData::Pipeline(pipeline) if pipeline.is_gpgpu())
    }
}
