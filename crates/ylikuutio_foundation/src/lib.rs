//! Core identifiers, entity kinds, requests, and errors for Ylikuutio.
//!
//! This crate provides:
//! - [`EntityId`] - Generational entity identifiers
//! - [`EntityKind`] - The closed set of entity types in the ontology
//! - [`ParentOf`] / [`MasterOf`] - The roles under which entities bind to each other
//! - [`Request`] - Deferred references, either a handle or a global name
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod entity;
pub mod error;
pub mod kind;
pub mod request;

pub use entity::EntityId;
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use kind::{EntityKind, MasterOf, ParentOf};
pub use request::{Request, Resolve};
