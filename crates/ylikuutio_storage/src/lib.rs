//! Slot allocation, arenas, name registries, and relation modules for Ylikuutio.
//!
//! This crate provides:
//! - [`SlotVec`] - Dense ID allocation with smallest-freed-ID reuse
//! - [`Arena`] - Generational storage for entity records
//! - [`Registry`] - Name to entity maps with prefix completion
//! - [`ParentModule`], [`ChildModule`], [`MasterModule`], [`ApprenticeModule`] -
//!   the two halves of the ownership and usage relations

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod arena;
pub mod module;
pub mod registry;
pub mod slots;

pub use arena::Arena;
pub use module::{ApprenticeModule, ChildModule, MasterModule, ParentModule};
pub use registry::Registry;
pub use slots::SlotVec;
