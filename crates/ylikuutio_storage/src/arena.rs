//! Generational storage for entity records.
//!
//! The `Arena` owns every record and hands out [`EntityId`]s. Destroying a
//! record bumps the generation of its slot so stale handles are detected
//! instead of silently aliasing the next occupant.

use ylikuutio_foundation::{EntityId, Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Owns values of type `T` behind generational handles.
///
/// Slots are reused from a free list. Even generations mark free slots,
/// odd generations live ones.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Arena<T> {
    generations: Vec<u32>,
    values: Vec<Option<T>>,
    free_list: Vec<u32>,
    live_count: usize,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Arena<T> {
    /// Creates a new empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self {
            generations: Vec::new(),
            values: Vec::new(),
            free_list: Vec::new(),
            live_count: 0,
        }
    }

    /// Returns the handle the next [`spawn`](Self::spawn) will return.
    ///
    /// Records that need to know their own handle are built with this.
    #[must_use]
    pub fn next_id(&self) -> EntityId {
        match self.free_list.last() {
            Some(&index) => EntityId::new(index, self.generations[index as usize] + 1),
            None => EntityId::new(self.index_for_push(), 1),
        }
    }

    /// Stores `value` and returns its handle.
    pub fn spawn(&mut self, value: T) -> EntityId {
        self.live_count += 1;

        if let Some(index) = self.free_list.pop() {
            let idx = index as usize;
            self.generations[idx] += 1;
            self.values[idx] = Some(value);
            EntityId::new(index, self.generations[idx])
        } else {
            let index = self.index_for_push();
            self.generations.push(1);
            self.values.push(Some(value));
            EntityId::new(index, 1)
        }
    }

    /// Removes the value behind `id` and returns it.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is stale or never existed.
    pub fn destroy(&mut self, id: EntityId) -> Result<T> {
        self.validate(id)?;

        let idx = id.slot();
        self.generations[idx] += 1;
        self.free_list.push(id.index);
        self.live_count -= 1;
        self.values[idx]
            .take()
            .ok_or_else(|| Error::invariant(format!("live slot {idx} holds no value")))
    }

    /// Checks if an entity exists and is not stale.
    #[must_use]
    pub fn exists(&self, id: EntityId) -> bool {
        self.generations
            .get(id.slot())
            .is_some_and(|&generation| generation == id.generation && generation % 2 == 1)
    }

    /// Validates that an entity is live.
    ///
    /// # Errors
    ///
    /// Returns `StaleEntity` for a recycled slot and `EntityNotFound` for an
    /// index that was never allocated or is currently free.
    pub fn validate(&self, id: EntityId) -> Result<()> {
        let Some(&current) = self.generations.get(id.slot()) else {
            return Err(Error::entity_not_found(id));
        };
        if current != id.generation {
            return Err(Error::stale_entity(id));
        }
        if current % 2 == 0 {
            return Err(Error::entity_not_found(id));
        }
        Ok(())
    }

    /// Returns the value behind `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is not live.
    pub fn get(&self, id: EntityId) -> Result<&T> {
        self.validate(id)?;
        self.values[id.slot()]
            .as_ref()
            .ok_or_else(|| Error::entity_not_found(id))
    }

    /// Returns the value behind `id` mutably.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is not live.
    pub fn get_mut(&mut self, id: EntityId) -> Result<&mut T> {
        self.validate(id)?;
        self.values[id.slot()]
            .as_mut()
            .ok_or_else(|| Error::entity_not_found(id))
    }

    /// Returns the number of live values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live_count
    }

    /// Returns true if there are no live values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live_count == 0
    }

    /// Iterates over all live handles and values in index order.
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &T)> + '_ {
        self.generations
            .iter()
            .zip(&self.values)
            .enumerate()
            .filter_map(|(idx, (&generation, value))| {
                let index = u32::try_from(idx).ok()?;
                value.as_ref().map(|v| (EntityId::new(index, generation), v))
            })
    }

    /// Returns the current generation for an index, if it exists.
    #[must_use]
    pub fn generation(&self, index: u32) -> Option<u32> {
        self.generations.get(index as usize).copied()
    }

    fn index_for_push(&self) -> u32 {
        u32::try_from(self.generations.len()).unwrap_or(u32::MAX)
    }
}
