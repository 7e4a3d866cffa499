//! Name registries.
//!
//! A `Registry` maps names to entities. The universe keeps one for global
//! names, and every entity that can hold children keeps one for the local
//! names of those children. Names are also kept in sorted order so
//! console-style prefix completion is cheap.

use im::{HashMap, OrdSet};
use ylikuutio_foundation::{EntityId, Error, ErrorKind, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Bidirectional-enough map from names to entities.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Registry {
    entities: HashMap<String, EntityId>,
    names: OrdSet<String>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entities.contains_key(name)
    }

    /// Returns the entity registered under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<EntityId> {
        self.entities.get(name).copied()
    }

    /// Registers `entity` under `name`.
    ///
    /// Registering an entity under the name it already holds is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `EmptyName` for an empty name and `NameInUse` (with no scope)
    /// if another entity holds the name.
    pub fn add(&mut self, name: &str, entity: EntityId) -> Result<()> {
        if name.is_empty() {
            return Err(Error::new(ErrorKind::EmptyName));
        }
        match self.entities.get(name) {
            Some(&holder) if holder == entity => Ok(()),
            Some(_) => Err(Error::global_name_in_use(name)),
            None => {
                self.entities.insert(name.to_string(), entity);
                self.names.insert(name.to_string());
                Ok(())
            }
        }
    }

    /// Removes `name` and returns the entity it pointed to.
    pub fn remove(&mut self, name: &str) -> Option<EntityId> {
        let entity = self.entities.remove(name)?;
        self.names.remove(name);
        Some(entity)
    }

    /// Returns the number of registered names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Iterates over all names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }

    /// Returns every registered name starting with `prefix`, sorted.
    #[must_use]
    pub fn completions(&self, prefix: &str) -> Vec<String> {
        self.names
            .iter()
            .skip_while(|name| name.as_str() < prefix)
            .take_while(|name| name.starts_with(prefix))
            .cloned()
            .collect()
    }

    /// Returns the number of names starting with `prefix`.
    #[must_use]
    pub fn number_of_completions(&self, prefix: &str) -> usize {
        self.completions(prefix).len()
    }

    /// Extends `prefix` as far as every completion agrees.
    ///
    /// With no completions the prefix is returned unchanged.
    #[must_use]
    pub fn complete(&self, prefix: &str) -> String {
        let completions = self.completions(prefix);
        let Some((first, rest)) = completions.split_first() else {
            return prefix.to_string();
        };
        let mut common = first.len();
        for other in rest {
            common = first
                .char_indices()
                .zip(other.chars())
                .take_while(|((_, a), b)| a == b)
                .last()
                .map_or(0, |((i, c), _)| i + c.len_utf8())
                .min(common);
        }
        first[..common].to_string()
    }
}
