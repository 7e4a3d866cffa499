//! Distance matrices and all-pairs shortest paths for Ylikuutio.
//!
//! This crate provides:
//! - [`DistanceMatrix`] - Square matrix of edge weights
//! - [`Distance`] - Weight types with an explicit "unreachable" value
//! - [`floyd_warshall`] - All-pairs shortest path lengths

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod distance;
pub mod error;
pub mod floyd_warshall;
pub mod matrix;

pub use distance::Distance;
pub use error::{GraphError, Result};
pub use floyd_warshall::floyd_warshall;
pub use matrix::DistanceMatrix;
