//! Ecosystems.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A scene-independent container.
///
/// Pipelines, materials, species and symbioses that live in an ecosystem
/// belong to no scene, so apprentices in any scene may use them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ecosystem {}

/// Parameters for creating an [`Ecosystem`].
#[derive(Debug, Clone, Default)]
pub struct EcosystemStruct {
    /// Global name, or empty for none.
    pub global_name: String,
    /// Local name, or empty for none. Same as the global name.
    pub local_name: String,
}

impl EcosystemStruct {
    /// Creates parameters for an unnamed ecosystem.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

crate::named_struct!(EcosystemStruct);
