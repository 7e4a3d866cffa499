//! Error types for graph algorithms.

use thiserror::Error;

/// Result alias for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors produced while building or solving a distance matrix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// Input rows do not form a square matrix.
    #[error("distance matrix must be square: row {row} has {length} columns, expected {expected}")]
    NotSquare {
        /// Index of the offending row.
        row: usize,
        /// Number of columns in that row.
        length: usize,
        /// Expected number of columns.
        expected: usize,
    },

    /// Index outside the matrix.
    #[error("vertex {vertex} out of range for a matrix of size {size}")]
    OutOfRange {
        /// The requested vertex.
        vertex: usize,
        /// The matrix size.
        size: usize,
    },

    /// A cycle with negative total weight passes through the vertex.
    #[error("negative cycle through vertex {0}")]
    NegativeCycle(usize),
}
