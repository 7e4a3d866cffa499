//! The two relations between entities, each split into two halves.
//!
//! Ownership: a [`ParentModule`] holds the children bound under one
//! [`ParentOf`] role, and every child holds one [`ChildModule`] saying where
//! it is bound. Usage: a [`MasterModule`] holds the apprentices bound under
//! one [`MasterOf`] role, and each apprentice holds one [`ApprenticeModule`]
//! per role it uses.
//!
//! The halves are plain data. Keeping the two sides in agreement is the job
//! of whoever owns both entities, since a module cannot reach the entity on
//! the other end by itself.

use ylikuutio_foundation::{EntityId, MasterOf, ParentOf, Result};

use crate::slots::SlotVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Children bound to one entity under one role, indexed by childID.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParentModule {
    role: ParentOf,
    children: SlotVec<EntityId>,
}

impl ParentModule {
    /// Creates an empty parent module.
    #[must_use]
    pub fn new(role: ParentOf) -> Self {
        Self {
            role,
            children: SlotVec::new(),
        }
    }

    /// Returns the role of this module.
    #[must_use]
    pub fn role(&self) -> ParentOf {
        self.role
    }

    /// Binds `child` and returns its childID.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyBound` if `child` is already bound here.
    pub fn bind_child(&mut self, child: EntityId) -> Result<usize> {
        self.children.bind(child)
    }

    /// Unbinds the child at `child_id` and returns it.
    ///
    /// # Errors
    ///
    /// Returns an error if `child_id` is out of range or empty.
    pub fn unbind_child(&mut self, child_id: usize) -> Result<EntityId> {
        self.children.remove(child_id)
    }

    /// Returns the child at `child_id`.
    #[must_use]
    pub fn child(&self, child_id: usize) -> Option<EntityId> {
        self.children.get(child_id).copied()
    }

    /// Returns the number of bound children.
    #[must_use]
    pub fn number_of_children(&self) -> usize {
        self.children.len()
    }

    /// Iterates over `(child_id, child)` in childID order.
    pub fn children(&self) -> impl Iterator<Item = (usize, EntityId)> + '_ {
        self.children.iter().map(|(id, child)| (id, *child))
    }
}

/// Where a child is bound, if anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChildModule {
    role: ParentOf,
    binding: Option<(EntityId, usize)>,
}

impl ChildModule {
    /// Creates an unbound child module.
    #[must_use]
    pub fn new(role: ParentOf) -> Self {
        Self {
            role,
            binding: None,
        }
    }

    /// Returns the role under which this child binds.
    #[must_use]
    pub fn role(&self) -> ParentOf {
        self.role
    }

    /// Returns the current parent.
    #[must_use]
    pub fn parent(&self) -> Option<EntityId> {
        self.binding.map(|(parent, _)| parent)
    }

    /// Returns the childID assigned by the current parent.
    #[must_use]
    pub fn child_id(&self) -> Option<usize> {
        self.binding.map(|(_, child_id)| child_id)
    }

    /// Returns true if bound to a parent.
    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.binding.is_some()
    }

    /// Records a binding made on the parent side.
    pub fn set(&mut self, parent: EntityId, child_id: usize) {
        self.binding = Some((parent, child_id));
    }

    /// Forgets the binding and returns it.
    pub fn clear(&mut self) -> Option<(EntityId, usize)> {
        self.binding.take()
    }
}

/// Apprentices bound to one entity under one role, indexed by apprenticeID.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MasterModule {
    role: MasterOf,
    apprentices: SlotVec<EntityId>,
}

impl MasterModule {
    /// Creates an empty master module.
    #[must_use]
    pub fn new(role: MasterOf) -> Self {
        Self {
            role,
            apprentices: SlotVec::new(),
        }
    }

    /// Returns the role of this module.
    #[must_use]
    pub fn role(&self) -> MasterOf {
        self.role
    }

    /// Binds `apprentice` and returns its apprenticeID.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyBound` if `apprentice` is already bound here.
    pub fn bind_apprentice(&mut self, apprentice: EntityId) -> Result<usize> {
        self.apprentices.bind(apprentice)
    }

    /// Unbinds the apprentice at `apprentice_id` and returns it.
    ///
    /// # Errors
    ///
    /// Returns an error if `apprentice_id` is out of range or empty.
    pub fn unbind_apprentice(&mut self, apprentice_id: usize) -> Result<EntityId> {
        self.apprentices.remove(apprentice_id)
    }

    /// Returns the apprentice at `apprentice_id`.
    #[must_use]
    pub fn apprentice(&self, apprentice_id: usize) -> Option<EntityId> {
        self.apprentices.get(apprentice_id).copied()
    }

    /// Returns the number of bound apprentices.
    #[must_use]
    pub fn number_of_apprentices(&self) -> usize {
        self.apprentices.len()
    }

    /// Iterates over `(apprentice_id, apprentice)` in apprenticeID order.
    pub fn apprentices(&self) -> impl Iterator<Item = (usize, EntityId)> + '_ {
        self.apprentices.iter().map(|(id, apprentice)| (id, *apprentice))
    }
}

/// Which master an apprentice uses under one role, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ApprenticeModule {
    role: MasterOf,
    binding: Option<(EntityId, usize)>,
}

impl ApprenticeModule {
    /// Creates an unbound apprentice module.
    #[must_use]
    pub fn new(role: MasterOf) -> Self {
        Self {
            role,
            binding: None,
        }
    }

    /// Returns the role of this module.
    #[must_use]
    pub fn role(&self) -> MasterOf {
        self.role
    }

    /// Returns the current master.
    #[must_use]
    pub fn master(&self) -> Option<EntityId> {
        self.binding.map(|(master, _)| master)
    }

    /// Returns the apprenticeID assigned by the current master.
    #[must_use]
    pub fn apprentice_id(&self) -> Option<usize> {
        self.binding.map(|(_, apprentice_id)| apprentice_id)
    }

    /// Returns true if bound to a master.
    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.binding.is_some()
    }

    /// Records a binding made on the master side.
    pub fn set(&mut self, master: EntityId, apprentice_id: usize) {
        self.binding = Some((master, apprentice_id));
    }

    /// Forgets the binding and returns it.
    pub fn clear(&mut self) -> Option<(EntityId, usize)> {
        self.binding.take()
    }
}
