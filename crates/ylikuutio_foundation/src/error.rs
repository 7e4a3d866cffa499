//! Error types for the Ylikuutio ontology.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//!
//! Binding failures come in two flavours. Soft failures (a name collision,
//! an unresolvable request, a cross-scene master) leave every relation
//! exactly as it was before the call. Invariant violations indicate a
//! programming error in the caller, such as rebinding an entity that was
//! never bound.

use std::fmt;

use thiserror::Error;

use crate::entity::EntityId;
use crate::kind::{EntityKind, MasterOf, ParentOf};

/// Result alias used throughout the Ylikuutio crates.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Ylikuutio operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Records the operation that produced this error.
    #[must_use]
    pub fn in_operation(mut self, operation: impl Into<String>) -> Self {
        let context = self.context.take().unwrap_or_default();
        self.context = Some(context.with_frame(operation));
        self
    }

    /// Creates an entity not found error.
    #[must_use]
    pub fn entity_not_found(id: EntityId) -> Self {
        Self::new(ErrorKind::EntityNotFound(id))
    }

    /// Creates a stale entity reference error.
    #[must_use]
    pub fn stale_entity(id: EntityId) -> Self {
        Self::new(ErrorKind::StaleEntity(id))
    }

    /// Creates a kind mismatch error.
    #[must_use]
    pub fn kind_mismatch(expected: impl Into<String>, actual: EntityKind) -> Self {
        Self::new(ErrorKind::KindMismatch {
            expected: expected.into(),
            actual,
        })
    }

    /// Creates a name not found error.
    #[must_use]
    pub fn name_not_found(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::NameNotFound(name.into()))
    }

    /// Creates a global name collision error.
    #[must_use]
    pub fn global_name_in_use(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::NameInUse {
            name: name.into(),
            scope: None,
        })
    }

    /// Creates a local name collision error within `parent`'s namespace.
    #[must_use]
    pub fn local_name_in_use(name: impl Into<String>, parent: EntityId) -> Self {
        Self::new(ErrorKind::NameInUse {
            name: name.into(),
            scope: Some(parent),
        })
    }

    /// Creates a scene mismatch error.
    #[must_use]
    pub fn scene_mismatch(apprentice_scene: EntityId, master_scene: EntityId) -> Self {
        Self::new(ErrorKind::SceneMismatch {
            apprentice_scene,
            master_scene,
        })
    }

    /// Creates an entity not bound error.
    #[must_use]
    pub fn not_bound(id: EntityId) -> Self {
        Self::new(ErrorKind::NotBound(id))
    }

    /// Creates an invariant violation error.
    #[must_use]
    pub fn invariant(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvariantViolation(message.into()))
    }

    /// Returns true if this error signals a programming error by the caller.
    #[must_use]
    pub fn is_invariant_violation(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::NotBound(_) | ErrorKind::InvariantViolation(_)
        )
    }

    /// Returns true if this error is a recoverable binding refusal.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        !self.is_invariant_violation()
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Entity was not found in the arena.
    #[error("entity not found: {0:?}")]
    EntityNotFound(EntityId),

    /// Entity handle is stale (generation mismatch).
    #[error("stale entity reference: {0:?}")]
    StaleEntity(EntityId),

    /// Entity exists but is of the wrong kind for the operation.
    #[error("kind mismatch: expected {expected}, got {actual}")]
    KindMismatch {
        /// Description of the accepted kinds.
        expected: String,
        /// The actual kind encountered.
        actual: EntityKind,
    },

    /// No entity is registered under the given global name.
    #[error("no entity named {0:?}")]
    NameNotFound(String),

    /// A name is already taken by another entity.
    #[error("name {name:?} is already in use")]
    NameInUse {
        /// The contested name.
        name: String,
        /// The parent whose local namespace holds the name, or `None` for the global namespace.
        scope: Option<EntityId>,
    },

    /// Names must not be empty.
    #[error("names must not be empty")]
    EmptyName,

    /// The Universe has no parent and so cannot have a local name.
    #[error("the universe cannot have a local name")]
    LocalNameNotAllowed,

    /// Master and apprentice belong to different scenes.
    #[error("scene mismatch: apprentice in {apprentice_scene:?}, master in {master_scene:?}")]
    SceneMismatch {
        /// Scene of the apprentice.
        apprentice_scene: EntityId,
        /// Scene of the master.
        master_scene: EntityId,
    },

    /// Entity lacks a parent module for the role.
    #[error("{kind} has no {role}")]
    NotAParent {
        /// The kind that was asked to hold the child.
        kind: EntityKind,
        /// The missing role.
        role: ParentOf,
    },

    /// Entity lacks a master module for the role.
    #[error("{kind} has no {role}")]
    NotAMaster {
        /// The kind that was asked to master the apprentice.
        kind: EntityKind,
        /// The missing role.
        role: MasterOf,
    },

    /// A value is already bound in a slot allocator.
    #[error("already bound at slot {0}")]
    AlreadyBound(usize),

    /// Slot index beyond the end of the allocator.
    #[error("invalid slot {slot} (length {length})")]
    InvalidSlot {
        /// The requested slot.
        slot: usize,
        /// The allocator length.
        length: usize,
    },

    /// Slot index within range but holding nothing.
    #[error("slot {0} is empty")]
    EmptySlot(usize),

    /// Entity has no current binding where one is required.
    #[error("entity {0:?} is not bound")]
    NotBound(EntityId),

    /// Entity may not be erased.
    #[error("entity {0:?} cannot be erased")]
    CannotBeErased(EntityId),

    /// Internal invariant violated (should not happen).
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Entity the failing operation was acting on.
    pub entity: Option<EntityId>,
    /// Operations that were in progress, innermost first.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the entity.
    #[must_use]
    pub fn with_entity(mut self, entity: EntityId) -> Self {
        self.entity = Some(entity);
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(entity) = self.entity {
            write!(f, "on {entity:?}")?;
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}
