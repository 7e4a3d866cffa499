//! The universe: owner of every entity and of the global namespace.

use log::{debug, trace, warn};
use ylikuutio_foundation::{
    EntityId, EntityKind, Error, ErrorKind, MasterOf, ParentOf, Request, Resolve, Result,
};
use ylikuutio_storage::{Arena, Registry};

use crate::config::UniverseConfig;
use crate::entity::{Entity, EntityData};
use crate::factory::EntityFactory;
use crate::ids::{SceneId, TypedId};

/// Root of the ontology.
///
/// The universe owns every entity in one generational arena. Entities refer
/// to each other only through [`EntityId`]s, so all binding operations are
/// methods on the universe rather than on the entities themselves.
#[derive(Debug)]
pub struct Universe {
    config: UniverseConfig,
    pub(crate) entities: Arena<Entity>,
    pub(crate) registry: Registry,
    root: EntityId,
    active_scene: Option<SceneId>,
}

impl Default for Universe {
    fn default() -> Self {
        Self::new(UniverseConfig::default())
    }
}

impl Universe {
    /// Creates an empty universe.
    #[must_use]
    pub fn new(config: UniverseConfig) -> Self {
        let mut entities = Arena::new();
        let root = entities.next_id();
        let root = entities.spawn(Entity::new(root, EntityData::Universe));
        debug!("created universe ({:?} backend)", config.backend);
        Self {
            config,
            entities,
            registry: Registry::new(),
            root,
            active_scene: None,
        }
    }

    /// Returns the configuration this universe was created with.
    #[must_use]
    pub fn config(&self) -> &UniverseConfig {
        &self.config
    }

    /// Returns the universe's own entity.
    #[must_use]
    pub fn root(&self) -> EntityId {
        self.root
    }

    /// Returns an entity factory bound to this universe.
    pub fn factory(&mut self) -> EntityFactory<'_> {
        EntityFactory::new(self)
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// Returns the record of a live entity.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is stale or unknown.
    pub fn entity(&self, id: EntityId) -> Result<&Entity> {
        self.entities.get(id)
    }

    pub(crate) fn entity_mut(&mut self, id: EntityId) -> Result<&mut Entity> {
        self.entities.get_mut(id)
    }

    /// Returns true if `id` refers to a live entity.
    #[must_use]
    pub fn exists(&self, id: EntityId) -> bool {
        self.entities.exists(id)
    }

    /// Returns the kind of a live entity.
    #[must_use]
    pub fn kind(&self, id: EntityId) -> Option<EntityKind> {
        self.entities.get(id).ok().map(Entity::kind)
    }

    /// Returns the number of live entities, the universe included.
    #[must_use]
    pub fn number_of_entities(&self) -> usize {
        self.entities.len()
    }

    /// Iterates over every live entity.
    pub fn entities(&self) -> impl Iterator<Item = (EntityId, &Entity)> + '_ {
        self.entities.iter()
    }

    /// Returns the kind-specific data behind a typed handle.
    ///
    /// # Errors
    ///
    /// Returns an error if the handle is stale.
    pub fn get<I: TypedId>(&self, id: I) -> Result<&I::Payload> {
        let entity = self.entity(id.entity_id())?;
        I::payload(&entity.data).ok_or_else(|| Error::kind_mismatch(I::EXPECTED, entity.kind()))
    }

    /// Returns the kind-specific data behind a typed handle mutably.
    ///
    /// # Errors
    ///
    /// Returns an error if the handle is stale.
    pub fn get_mut<I: TypedId>(&mut self, id: I) -> Result<&mut I::Payload> {
        let entity = self.entity_mut(id.entity_id())?;
        let kind = entity.kind();
        I::payload_mut(&mut entity.data).ok_or_else(|| Error::kind_mismatch(I::EXPECTED, kind))
    }

    /// Recovers a typed handle from an untyped one.
    #[must_use]
    pub fn typed<T: Resolve>(&self, id: EntityId) -> Option<T> {
        T::from_entity(id, self.kind(id)?)
    }

    /// Resolves a request against the live entities and the global namespace.
    ///
    /// # Errors
    ///
    /// Returns an error if the requested handle is dead, the name is not
    /// registered, or the entity is of an unacceptable kind.
    pub fn resolve<T: Resolve>(&self, request: &Request<T>) -> Result<Option<T>> {
        request.resolve(|id| self.kind(id), |name| self.registry.get(name))
    }

    // =========================================================================
    // Relations
    // =========================================================================

    /// Returns the parent of `id`.
    #[must_use]
    pub fn parent(&self, id: EntityId) -> Option<EntityId> {
        self.entity(id).ok()?.parent()
    }

    /// Returns the childID of `id` within its parent.
    #[must_use]
    pub fn child_id(&self, id: EntityId) -> Option<usize> {
        self.entity(id).ok()?.child_id()
    }

    /// Returns the scene `id` belongs to.
    ///
    /// A scene belongs to itself. Everything else belongs to the scene of
    /// its parent, so ecosystems and their descendants belong to none.
    #[must_use]
    pub fn scene(&self, id: EntityId) -> Option<SceneId> {
        let mut current = id;
        loop {
            let entity = self.entity(current).ok()?;
            if entity.kind() == EntityKind::Scene {
                return Some(SceneId::from_raw(current));
            }
            current = entity.parent()?;
        }
    }

    /// Returns the master `id` uses under `role`.
    #[must_use]
    pub fn master(&self, id: EntityId, role: MasterOf) -> Option<EntityId> {
        self.entity(id).ok()?.apprentice_module(role)?.master()
    }

    /// Returns the apprenticeID of `id` within its master under `role`.
    #[must_use]
    pub fn apprentice_id(&self, id: EntityId, role: MasterOf) -> Option<usize> {
        self.entity(id).ok()?.apprentice_module(role)?.apprentice_id()
    }

    /// Returns the children of `id` under `role`, in childID order.
    #[must_use]
    pub fn children(&self, id: EntityId, role: ParentOf) -> Vec<EntityId> {
        self.entity(id)
            .ok()
            .and_then(|entity| entity.parent_module(role))
            .map(|module| module.children().map(|(_, child)| child).collect())
            .unwrap_or_default()
    }

    /// Returns the apprentices of `id` under `role`, in apprenticeID order.
    #[must_use]
    pub fn apprentices(&self, id: EntityId, role: MasterOf) -> Vec<EntityId> {
        self.entity(id)
            .ok()
            .and_then(|entity| entity.master_module(role))
            .map(|module| module.apprentices().map(|(_, a)| a).collect())
            .unwrap_or_default()
    }

    /// Returns the number of children of `id` across all its parent modules.
    #[must_use]
    pub fn number_of_children(&self, id: EntityId) -> usize {
        self.entity(id).map_or(0, Entity::number_of_children)
    }

    /// Returns the number of entities below `id` in the ownership tree.
    #[must_use]
    pub fn number_of_descendants(&self, id: EntityId) -> usize {
        let Ok(entity) = self.entity(id) else {
            return 0;
        };
        entity
            .children()
            .map(|child| 1 + self.number_of_descendants(child))
            .sum()
    }

    /// Returns the number of apprentices of `id` across all its master modules.
    #[must_use]
    pub fn number_of_apprentices(&self, id: EntityId) -> usize {
        self.entity(id).map_or(0, Entity::number_of_apprentices)
    }

    // =========================================================================
    // Names
    // =========================================================================

    /// Returns the global namespace.
    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Returns the entity with the given global name.
    #[must_use]
    pub fn get_entity(&self, name: &str) -> Option<EntityId> {
        self.registry.get(name)
    }

    /// Returns true if `parent`'s namespace contains `name`.
    ///
    /// The universe's namespace is the global one.
    #[must_use]
    pub fn has_child(&self, parent: EntityId, name: &str) -> bool {
        self.get_child(parent, name).is_some()
    }

    /// Returns the entity registered under `name` in `parent`'s namespace.
    #[must_use]
    pub fn get_child(&self, parent: EntityId, name: &str) -> Option<EntityId> {
        if parent == self.root {
            return self.registry.get(name);
        }
        self.entity(parent).ok()?.local_names.get(name)
    }

    /// Sets the global name of `id`, releasing its previous one.
    ///
    /// For children of the universe the global and local names are the
    /// same name, so both change.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty, already held by another
    /// entity, or `id` is dead. On error nothing changes.
    pub fn set_global_name(&mut self, id: EntityId, name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(Error::new(ErrorKind::EmptyName));
        }
        let entity = self.entity(id)?;
        if entity.global_name == name {
            return Ok(());
        }
        if self.registry.get(name).is_some_and(|holder| holder != id) {
            warn!("global name {name:?} is already in use");
            return Err(Error::global_name_in_use(name));
        }
        let shares_namespace = entity.parent() == Some(self.root);
        let old = std::mem::take(&mut self.entity_mut(id)?.global_name);
        if !old.is_empty() {
            self.registry.remove(&old);
        }
        self.registry.add(name, id)?;

        let entity = self.entity_mut(id)?;
        entity.global_name = name.to_string();
        if shares_namespace {
            entity.local_name = name.to_string();
        }
        trace!("{id:?} is now globally {name:?}");
        Ok(())
    }

    /// Sets the local name of `id` in its parent's namespace.
    ///
    /// An unbound entity keeps the name and registers it when bound.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty, already used by a sibling, or
    /// `id` is the universe or dead. On error nothing changes.
    pub fn set_local_name(&mut self, id: EntityId, name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(Error::new(ErrorKind::EmptyName));
        }
        let entity = self.entity(id)?;
        if entity.kind() == EntityKind::Universe {
            return Err(Error::new(ErrorKind::LocalNameNotAllowed));
        }
        if entity.local_name == name {
            return Ok(());
        }
        let old = entity.local_name.clone();
        let parent = entity.parent();
        if parent == Some(self.root) {
            return self.set_global_name(id, name);
        }

        if let Some(parent) = parent {
            let namespace = &mut self.entity_mut(parent)?.local_names;
            if namespace.get(name).is_some_and(|holder| holder != id) {
                warn!("local name {name:?} is already in use under {parent:?}");
                return Err(Error::local_name_in_use(name, parent));
            }
            if !old.is_empty() {
                namespace.remove(&old);
            }
            namespace.add(name, id)?;
        }
        self.entity_mut(id)?.local_name = name.to_string();
        trace!("{id:?} is now locally {name:?}");
        Ok(())
    }

    // =========================================================================
    // Scenes
    // =========================================================================

    /// Returns the active scene.
    #[must_use]
    pub fn active_scene(&self) -> Option<SceneId> {
        self.active_scene
    }

    /// Makes `scene` the active scene, or deactivates all scenes with `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if `scene` is dead.
    pub fn set_active_scene(&mut self, scene: Option<SceneId>) -> Result<()> {
        if let Some(scene) = scene {
            self.get(scene)?;
        }
        self.active_scene = scene;
        debug!("active scene is now {scene:?}");
        Ok(())
    }

    // =========================================================================
    // Destruction
    // =========================================================================

    /// Destroys `id` and every descendant.
    ///
    /// Children are destroyed depth-first. Apprentices of the destroyed
    /// entities are released but survive, as do the masters they used.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is dead or cannot be erased.
    pub fn destroy(&mut self, id: EntityId) -> Result<()> {
        if !self.entity(id)?.can_be_erased {
            return Err(Error::new(ErrorKind::CannotBeErased(id)));
        }
        self.destroy_subtree(id)
    }

    fn destroy_subtree(&mut self, id: EntityId) -> Result<()> {
        let children: Vec<_> = self.entity(id)?.children().collect();
        for child in children {
            self.destroy_subtree(child)?;
        }

        let entity = self.entity(id)?;
        let kind = entity.kind();
        let apprentices: Vec<_> = entity
            .masters
            .iter()
            .flat_map(|module| module.apprentices().map(|(_, a)| (a, module.role())))
            .collect();
        for (apprentice, role) in apprentices {
            self.unbind_apprentice(apprentice, role)?;
        }
        for role in kind.apprentice_roles() {
            self.unbind_apprentice(id, *role)?;
        }

        if let Some(scene) = self.parent(id).and_then(|p| self.typed::<SceneId>(p)) {
            let scene = self.get_mut(scene)?;
            if scene.active_camera.is_some_and(|camera| camera.id() == id) {
                scene.active_camera = None;
            }
        }
        self.unbind_child(id)?;

        let global_name = std::mem::take(&mut self.entity_mut(id)?.global_name);
        if self.registry.get(&global_name) == Some(id) {
            self.registry.remove(&global_name);
        }
        if self.active_scene.is_some_and(|scene| scene.id() == id) {
            self.active_scene = None;
        }

        self.entities.destroy(id)?;
        debug!("destroyed {kind} {id:?}");
        Ok(())
    }
}
