//! Binding entities to parents and masters.
//!
//! Every operation here keeps both halves of a relation in agreement: the
//! parent (or master) module on one entity and the child (or apprentice)
//! module on the other. Operations that can be refused check everything
//! up front, so a refusal leaves all relations exactly as they were.
//!
//! Scene consistency: a master and its apprentice may only belong to
//! different scenes when at least one of them belongs to no scene at all.
//! Moving an entity moves everything below it, so a move into a scene
//! checks the relations of the whole subtree.

use log::{debug, error, trace, warn};
use ylikuutio_foundation::{EntityId, Error, ErrorKind, MasterOf, ParentOf, Result};

use crate::ids::SceneId;
use crate::universe::Universe;

/// Result of a successful rebind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BindOutcome {
    /// Already bound where requested; nothing changed.
    Unchanged,
    /// Bound anew with the given childID or apprenticeID.
    Bound(usize),
}

fn scenes_conflict(a: Option<SceneId>, b: Option<SceneId>) -> bool {
    matches!((a, b), (Some(a), Some(b)) if a != b)
}

impl Universe {
    // =========================================================================
    // Parent / child
    // =========================================================================

    /// Checks that `new_parent` can take `child` without touching anything.
    fn check_can_adopt(&self, child: EntityId, new_parent: EntityId) -> Result<ParentOf> {
        let entity = self.entity(child)?;
        let role = entity
            .child_module()
            .map(|module| module.role())
            .ok_or_else(|| Error::invariant(format!("{} has no parent role", entity.kind())))?;
        let parent = self.entity(new_parent)?;
        if !parent.kind().is_parent_of(role) {
            return Err(Error::new(ErrorKind::NotAParent {
                kind: parent.kind(),
                role,
            }));
        }
        let name = entity.local_name();
        if new_parent != self.root()
            && parent
                .local_names
                .get(name)
                .is_some_and(|holder| holder != child)
        {
            return Err(Error::local_name_in_use(name, new_parent));
        }
        Ok(role)
    }

    /// Binds an unbound `child` to `parent` and returns its childID.
    ///
    /// The child's local name, if any, is registered in the parent's namespace.
    pub(crate) fn bind_child(&mut self, child: EntityId, parent: EntityId) -> Result<usize> {
        let role = self.check_can_adopt(child, parent)?;
        let entity = self.entity(child)?;
        if entity.parent().is_some() {
            return Err(Error::invariant(format!("{child:?} is already bound")));
        }
        let name = entity.local_name.clone();
        let is_gpgpu = entity.is_gpgpu_pipeline();
        let shares_namespace = parent == self.root();

        let parent_entity = self.entity_mut(parent)?;
        let child_id = parent_entity
            .parent_slot_mut(role)
            .ok_or_else(|| Error::invariant(format!("{parent:?} lost its {role}")))?
            .bind_child(child, is_gpgpu)?;
        if !shares_namespace && !name.is_empty() {
            parent_entity.local_names.add(&name, child)?;
        }
        if let Some(module) = self.entity_mut(child)?.child_module_mut() {
            module.set(parent, child_id);
        }
        trace!("bound {child:?} to {parent:?} as child {child_id} of {role}");
        Ok(child_id)
    }

    /// Unbinds `child` from its parent and returns the released binding.
    ///
    /// The child keeps its local name but leaves the parent's namespace.
    /// An unbound child is left alone.
    ///
    /// # Errors
    ///
    /// Returns an error if `child` is dead or the two halves disagree.
    pub fn unbind_child(&mut self, child: EntityId) -> Result<Option<(EntityId, usize)>> {
        let entity = self.entity(child)?;
        let Some(module) = entity.child_module() else {
            return Ok(None);
        };
        let role = module.role();
        let Some((parent, child_id)) = module.parent().zip(module.child_id()) else {
            return Ok(None);
        };
        let name = entity.local_name.clone();
        let shares_namespace = parent == self.root();

        let parent_entity = self.entity_mut(parent)?;
        let released = parent_entity
            .parent_slot_mut(role)
            .ok_or_else(|| Error::invariant(format!("{parent:?} lost its {role}")))?
            .unbind_child(child_id)?;
        if released != child {
            return Err(Error::invariant(format!(
                "child {child_id} of {parent:?} is {released:?}, not {child:?}"
            )));
        }
        if !shares_namespace && parent_entity.local_names.get(&name) == Some(child) {
            parent_entity.local_names.remove(&name);
        }
        let binding = self
            .entity_mut(child)?
            .child_module_mut()
            .and_then(|module| module.clear());
        trace!("unbound {child:?} from {parent:?}");
        Ok(binding)
    }

    /// Moves `child` to `new_parent`, assigning a fresh childID.
    ///
    /// Binding to the current parent is a no-op. An unbound child is simply
    /// bound. The local name moves along with the child.
    ///
    /// # Errors
    ///
    /// Returns an error if `new_parent` cannot hold this kind of child or
    /// already has a child with the same local name. On error the child
    /// stays where it was.
    pub fn unbind_and_bind_to_new_parent(
        &mut self,
        child: EntityId,
        new_parent: EntityId,
    ) -> Result<BindOutcome> {
        if self.entity(child)?.parent() == Some(new_parent) {
            return Ok(BindOutcome::Unchanged);
        }
        self.check_can_adopt(child, new_parent)?;
        self.unbind_child(child)?;
        self.bind_child(child, new_parent).map(BindOutcome::Bound)
    }

    /// Rebinds an entity that must already have a parent, keeping scene
    /// consistency: when the new parent lies in a scene, every master and
    /// apprentice of the entity or of its descendants that lies in another
    /// scene is released first. Relations within the subtree are kept.
    pub(crate) fn rebind_to_parent(
        &mut self,
        entity: EntityId,
        new_parent: EntityId,
        operation: &'static str,
    ) -> Result<BindOutcome> {
        let Some(old_parent) = self.entity(entity)?.parent() else {
            error!("{operation}: {entity:?} has no parent to be moved from");
            return Err(Error::not_bound(entity).in_operation(operation));
        };
        if old_parent == new_parent {
            return Ok(BindOutcome::Unchanged);
        }
        if let Err(err) = self.check_can_adopt(entity, new_parent) {
            warn!("{operation}: {err}");
            return Err(err.in_operation(operation));
        }

        if let Some(scene) = self.scene(new_parent) {
            let moving = self.subtree(entity)?;
            for &member in &moving {
                self.release_apprentices_in_other_scenes(member, scene, &moving)?;
                self.release_masters_in_other_scenes(member, scene, &moving)?;
            }
        }
        self.unbind_child(entity)?;
        let child_id = self.bind_child(entity, new_parent)?;
        debug!("{operation}: {entity:?} moved from {old_parent:?} to {new_parent:?}");
        Ok(BindOutcome::Bound(child_id))
    }

    // =========================================================================
    // Master / apprentice
    // =========================================================================

    /// Checks that `master` can take `apprentice` under `role` without touching anything.
    fn check_can_master(&self, apprentice: EntityId, role: MasterOf, master: EntityId) -> Result<()> {
        let entity = self.entity(apprentice)?;
        if entity.apprentice_module(role).is_none() {
            return Err(Error::invariant(format!(
                "{} cannot be an apprentice under {role}",
                entity.kind()
            )));
        }
        let master_kind = self.entity(master)?.kind();
        if !master_kind.is_master_of(role) {
            return Err(Error::new(ErrorKind::NotAMaster {
                kind: master_kind,
                role,
            }));
        }
        match (self.scene(apprentice), self.scene(master)) {
            (Some(a), Some(m)) if a != m => Err(Error::scene_mismatch(a.id(), m.id())),
            _ => Ok(()),
        }
    }

    /// Binds an unbound `apprentice` to `master` under `role` and returns its apprenticeID.
    pub(crate) fn bind_apprentice(
        &mut self,
        apprentice: EntityId,
        role: MasterOf,
        master: EntityId,
    ) -> Result<usize> {
        self.check_can_master(apprentice, role, master)?;
        if self.master(apprentice, role).is_some() {
            return Err(Error::invariant(format!(
                "{apprentice:?} already has a master under {role}"
            )));
        }
        let apprentice_id = self
            .entity_mut(master)?
            .master_module_mut(role)
            .ok_or_else(|| Error::invariant(format!("{master:?} lost its {role}")))?
            .bind_apprentice(apprentice)?;
        if let Some(module) = self.entity_mut(apprentice)?.apprentice_module_mut(role) {
            module.set(master, apprentice_id);
        }
        trace!("bound {apprentice:?} to {master:?} as apprentice {apprentice_id} of {role}");
        Ok(apprentice_id)
    }

    /// Releases `apprentice` from its master under `role` and returns the released binding.
    ///
    /// An apprentice without a master under `role` is left alone.
    ///
    /// # Errors
    ///
    /// Returns an error if `apprentice` is dead or the two halves disagree.
    pub fn unbind_apprentice(
        &mut self,
        apprentice: EntityId,
        role: MasterOf,
    ) -> Result<Option<(EntityId, usize)>> {
        let Some(module) = self.entity(apprentice)?.apprentice_module(role) else {
            return Ok(None);
        };
        let Some((master, apprentice_id)) = module.master().zip(module.apprentice_id()) else {
            return Ok(None);
        };
        let released = self
            .entity_mut(master)?
            .master_module_mut(role)
            .ok_or_else(|| Error::invariant(format!("{master:?} lost its {role}")))?
            .unbind_apprentice(apprentice_id)?;
        if released != apprentice {
            return Err(Error::invariant(format!(
                "apprentice {apprentice_id} of {master:?} is {released:?}, not {apprentice:?}"
            )));
        }
        let binding = self
            .entity_mut(apprentice)?
            .apprentice_module_mut(role)
            .and_then(|module| module.clear());
        trace!("unbound {apprentice:?} from {master:?}");
        Ok(binding)
    }

    /// Moves `apprentice` to `new_master` under `role`, assigning a fresh apprenticeID.
    ///
    /// Binding to the current master is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if `new_master` cannot master this role or lies in a
    /// different scene than the apprentice. On error the apprentice keeps
    /// its current master.
    pub fn unbind_and_bind_to_new_master(
        &mut self,
        apprentice: EntityId,
        role: MasterOf,
        new_master: EntityId,
    ) -> Result<BindOutcome> {
        if self.master(apprentice, role) == Some(new_master) {
            return Ok(BindOutcome::Unchanged);
        }
        self.check_can_master(apprentice, role, new_master)?;
        self.unbind_apprentice(apprentice, role)?;
        self.bind_apprentice(apprentice, role, new_master)
            .map(BindOutcome::Bound)
    }

    /// Like [`unbind_and_bind_to_new_master`](Self::unbind_and_bind_to_new_master),
    /// logging refusals under the name of the calling operation.
    pub(crate) fn rebind_to_master(
        &mut self,
        apprentice: EntityId,
        role: MasterOf,
        new_master: EntityId,
        operation: &'static str,
    ) -> Result<BindOutcome> {
        self.unbind_and_bind_to_new_master(apprentice, role, new_master)
            .inspect_err(|err| warn!("{operation}: {err}"))
            .map_err(|err| err.in_operation(operation))
    }

    /// Releases every master of `apprentice` that lies in a scene other than `scene`.
    ///
    /// Returns the number of relations released.
    ///
    /// # Errors
    ///
    /// Returns an error if `apprentice` is dead.
    pub fn unbind_from_any_master_belonging_to_other_scene(
        &mut self,
        apprentice: EntityId,
        scene: SceneId,
    ) -> Result<usize> {
        self.release_masters_in_other_scenes(apprentice, scene, &[])
    }

    /// Releases every apprentice of `master` that lies in a scene other than `scene`.
    ///
    /// Returns the number of relations released.
    ///
    /// # Errors
    ///
    /// Returns an error if `master` is dead.
    pub fn unbind_all_apprentices_belonging_to_other_scenes(
        &mut self,
        master: EntityId,
        scene: SceneId,
    ) -> Result<usize> {
        self.release_apprentices_in_other_scenes(master, scene, &[])
    }

    /// Releases the masters of `apprentice` outside `moving` that lie in a scene other than `scene`.
    fn release_masters_in_other_scenes(
        &mut self,
        apprentice: EntityId,
        scene: SceneId,
        moving: &[EntityId],
    ) -> Result<usize> {
        let roles = self.entity(apprentice)?.kind().apprentice_roles();
        let mut released = 0;
        for &role in roles {
            let Some(master) = self.master(apprentice, role) else {
                continue;
            };
            if !moving.contains(&master) && scenes_conflict(Some(scene), self.scene(master)) {
                self.unbind_apprentice(apprentice, role)?;
                released += 1;
            }
        }
        Ok(released)
    }

    /// Releases the apprentices of `master` outside `moving` that lie in a scene other than `scene`.
    fn release_apprentices_in_other_scenes(
        &mut self,
        master: EntityId,
        scene: SceneId,
        moving: &[EntityId],
    ) -> Result<usize> {
        let roles = self.entity(master)?.kind().master_roles();
        let mut released = 0;
        for &role in roles {
            for apprentice in self.apprentices(master, role) {
                if !moving.contains(&apprentice)
                    && scenes_conflict(Some(scene), self.scene(apprentice))
                {
                    self.unbind_apprentice(apprentice, role)?;
                    released += 1;
                }
            }
        }
        Ok(released)
    }

    /// Returns `root` followed by every entity below it, parents first.
    fn subtree(&self, root: EntityId) -> Result<Vec<EntityId>> {
        let mut members = vec![root];
        let mut next = 0;
        while next < members.len() {
            let member = members[next];
            members.extend(self.entity(member)?.children());
            next += 1;
        }
        Ok(members)
    }
}
