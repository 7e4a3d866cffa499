//! Square matrices of edge weights.

use crate::distance::Distance;
use crate::error::{GraphError, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Row-major square matrix where entry `(i, j)` is the weight of the edge
/// from vertex `i` to vertex `j`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DistanceMatrix<T> {
    size: usize,
    weights: Vec<T>,
}

impl<T: Distance> DistanceMatrix<T> {
    /// Creates a matrix with no edges: zero on the diagonal, unreachable elsewhere.
    #[must_use]
    pub fn new(size: usize) -> Self {
        let mut weights = vec![T::UNREACHABLE; size * size];
        for i in 0..size {
            weights[i * size + i] = T::ZERO;
        }
        Self { size, weights }
    }

    /// Builds a matrix from rows.
    ///
    /// # Errors
    ///
    /// Returns `NotSquare` if any row's length differs from the number of rows.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let size = rows.len();
        let mut weights = Vec::with_capacity(size * size);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != size {
                return Err(GraphError::NotSquare {
                    row,
                    length: values.len(),
                    expected: size,
                });
            }
            weights.extend(values);
        }
        Ok(Self { size, weights })
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the weight from `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if either vertex is outside the matrix.
    pub fn get(&self, from: usize, to: usize) -> Result<T> {
        self.check(from)?;
        self.check(to)?;
        Ok(self.weights[from * self.size + to])
    }

    /// Sets the weight from `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if either vertex is outside the matrix.
    pub fn set(&mut self, from: usize, to: usize, weight: T) -> Result<()> {
        self.check(from)?;
        self.check(to)?;
        self.weights[from * self.size + to] = weight;
        Ok(())
    }

    /// Sets the weight in both directions.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if either vertex is outside the matrix.
    pub fn set_undirected(&mut self, a: usize, b: usize, weight: T) -> Result<()> {
        self.set(a, b, weight)?;
        self.set(b, a, weight)
    }

    /// Iterates over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.weights.chunks(self.size.max(1)).take(self.size)
    }

    pub(crate) fn at(&self, from: usize, to: usize) -> T {
        self.weights[from * self.size + to]
    }

    pub(crate) fn at_mut(&mut self, from: usize, to: usize) -> &mut T {
        &mut self.weights[from * self.size + to]
    }

    fn check(&self, vertex: usize) -> Result<()> {
        if vertex < self.size {
            Ok(())
        } else {
            Err(GraphError::OutOfRange {
                vertex,
                size: self.size,
            })
        }
    }
}
