//! Dense slot allocation with freed-ID recycling.
//!
//! A `SlotVec` hands out small integer IDs that index directly into its
//! backing vector. Unbinding leaves a hole and remembers the index; the
//! next bind fills the smallest remembered hole before growing the vector.
//! IDs therefore stay dense and are stable for as long as a value is bound.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use ylikuutio_foundation::{Error, ErrorKind, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Slot allocator mapping small integer IDs to values.
///
/// Invariant: `len()` always equals `capacity() - free_len()`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SlotVec<T> {
    slots: Vec<Option<T>>,
    free: BinaryHeap<Reverse<usize>>,
    live: usize,
}

impl<T> Default for SlotVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SlotVec<T> {
    /// Creates an empty allocator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: BinaryHeap::new(),
            live: 0,
        }
    }

    /// Stores `value` in the smallest free slot, or a new one, and returns its ID.
    pub fn insert(&mut self, value: T) -> usize {
        self.live += 1;
        if let Some(Reverse(slot)) = self.free.pop() {
            self.slots[slot] = Some(value);
            slot
        } else {
            self.slots.push(Some(value));
            self.slots.len() - 1
        }
    }

    /// Empties `slot` and returns the value it held.
    ///
    /// # Errors
    ///
    /// Returns an error if `slot` is out of range or already empty.
    pub fn remove(&mut self, slot: usize) -> Result<T> {
        let length = self.slots.len();
        let value = self
            .slots
            .get_mut(slot)
            .ok_or_else(|| Error::new(ErrorKind::InvalidSlot { slot, length }))?
            .take()
            .ok_or_else(|| Error::new(ErrorKind::EmptySlot(slot)))?;
        self.free.push(Reverse(slot));
        self.live -= 1;
        Ok(value)
    }

    /// Returns the value in `slot`, if any.
    #[must_use]
    pub fn get(&self, slot: usize) -> Option<&T> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    /// Returns the number of occupied slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live
    }

    /// Returns true if no slot is occupied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Returns the number of slots ever allocated, occupied or not.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of holes waiting for reuse.
    #[must_use]
    pub fn free_len(&self) -> usize {
        self.free.len()
    }

    /// Returns the ID the next insert will use.
    #[must_use]
    pub fn next_slot(&self) -> usize {
        self.free
            .peek()
            .map_or(self.slots.len(), |Reverse(slot)| *slot)
    }

    /// Iterates over occupied slots in ID order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(slot, value)| value.as_ref().map(|v| (slot, v)))
    }

    /// Iterates over occupied values in ID order.
    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.slots.iter().flatten()
    }
}

impl<T: PartialEq> SlotVec<T> {
    /// Returns the ID holding `value`, if any.
    #[must_use]
    pub fn position(&self, value: &T) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.as_ref() == Some(value))
    }

    /// Like [`insert`](Self::insert), but refuses a value that is already stored.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyBound` with the existing ID if `value` is present.
    pub fn bind(&mut self, value: T) -> Result<usize> {
        if let Some(slot) = self.position(&value) {
            return Err(Error::new(ErrorKind::AlreadyBound(slot)));
        }
        Ok(self.insert(value))
    }
}
