//! Ylikuutio - entity ontology for a 3D engine
//!
//! This crate re-exports all layers of the Ylikuutio ontology for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: ylikuutio_ontology   - Universe, entities, factory, rebinds, render traversal
//! Layer 2: ylikuutio_graph      - Distance matrices and shortest paths
//! Layer 1: ylikuutio_storage    - Slot allocator, arena, name registry, relation modules
//! Layer 0: ylikuutio_foundation - Core types (EntityId, EntityKind, Request, Error)
//! ```

pub use ylikuutio_foundation as foundation;
pub use ylikuutio_graph as graph;
pub use ylikuutio_ontology as ontology;
pub use ylikuutio_storage as storage;
