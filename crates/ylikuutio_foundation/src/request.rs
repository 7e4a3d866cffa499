//! Deferred entity references.
//!
//! A [`Request`] names the entity something should bind to without
//! requiring the caller to hold a handle: it is either a handle (possibly
//! absent) or the global name of an entity registered in the universe.
//! The handle type is anything implementing [`Resolve`], which lets a
//! single request accept several kinds through a closed sum type.

use crate::entity::EntityId;
use crate::error::{Error, Result};
use crate::kind::EntityKind;

/// A typed handle that can be recovered from an untyped entity.
pub trait Resolve: Copy {
    /// Human-readable description of the accepted kinds, used in errors.
    const EXPECTED: &'static str;

    /// Returns the typed handle if `kind` is acceptable.
    fn from_entity(id: EntityId, kind: EntityKind) -> Option<Self>;

    /// Returns the untyped handle.
    fn entity_id(self) -> EntityId;
}

/// A reference to an entity, given either as a handle or as a global name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Request<T> {
    /// A handle. `None` is a valid request for "no entity".
    Handle(Option<T>),
    /// The global name of an entity, looked up in the universe registry.
    Name(String),
}

impl<T> Default for Request<T> {
    fn default() -> Self {
        Self::Handle(None)
    }
}

impl<T> Request<T> {
    /// Creates a request for the given handle.
    #[must_use]
    pub fn handle(handle: T) -> Self {
        Self::Handle(Some(handle))
    }

    /// Creates a request for the entity with the given global name.
    #[must_use]
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    /// Creates a request for no entity.
    #[must_use]
    pub fn none() -> Self {
        Self::Handle(None)
    }

    /// Returns true if this is a request for no entity.
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::Handle(None))
    }
}

impl<T: Resolve> Request<T> {
    /// Resolves the request to a typed handle.
    ///
    /// `lookup` maps an entity to its kind (`None` for dead or unknown
    /// handles) and `find` maps a global name to an entity. A request for
    /// no entity resolves to `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the handle is dead, the name is unregistered, or
    /// the entity found is of a kind `T` does not accept.
    pub fn resolve<L, F>(&self, lookup: L, find: F) -> Result<Option<T>>
    where
        L: Fn(EntityId) -> Option<EntityKind>,
        F: FnOnce(&str) -> Option<EntityId>,
    {
        let id = match self {
            Self::Handle(None) => return Ok(None),
            Self::Handle(Some(handle)) => handle.entity_id(),
            Self::Name(name) => find(name).ok_or_else(|| Error::name_not_found(name.clone()))?,
        };
        let kind = lookup(id).ok_or_else(|| Error::entity_not_found(id))?;
        T::from_entity(id, kind)
            .map(Some)
            .ok_or_else(|| Error::kind_mismatch(T::EXPECTED, kind))
    }
}
