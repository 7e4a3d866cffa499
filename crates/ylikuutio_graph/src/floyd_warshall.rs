//! All-pairs shortest paths.

use crate::distance::Distance;
use crate::error::{GraphError, Result};
use crate::matrix::DistanceMatrix;

/// Computes the length of the shortest path between every pair of vertices.
///
/// Unreachable pairs stay unreachable in the result.
///
/// # Errors
///
/// Returns `NegativeCycle` if some vertex can reach itself with negative
/// total weight, since shortest paths are then undefined.
pub fn floyd_warshall<T: Distance>(edges: &DistanceMatrix<T>) -> Result<DistanceMatrix<T>> {
    let mut distances = edges.clone();
    let n = distances.size();

    for k in 0..n {
        for i in 0..n {
            let via = distances.at(i, k);
            if via.is_unreachable() {
                continue;
            }
            for j in 0..n {
                let candidate = via.join(distances.at(k, j));
                let current = distances.at_mut(i, j);
                if candidate < *current {
                    *current = candidate;
                }
            }
        }
    }

    if let Some(vertex) = (0..n).find(|&i| distances.at(i, i) < T::ZERO) {
        return Err(GraphError::NegativeCycle(vertex));
    }
    Ok(distances)
}
