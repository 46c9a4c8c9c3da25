//! Weighted undirected edges.

use super::VertexId;
use serde::{Deserialize, Serialize};

/// Edge weight. Graphs only ever hold finite, non-negative weights.
pub type Weight = f64;

/// An undirected edge `{u, v}` with a weight.
///
/// Graphs store edges canonicalized so that `u < v`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightedEdge {
    /// Smaller endpoint.
    pub u: VertexId,
    /// Larger endpoint.
    pub v: VertexId,
    /// Edge weight.
    pub weight: Weight,
}

impl WeightedEdge {
    /// Creates an edge, swapping the endpoints so that `u <= v`.
    #[must_use]
    pub fn new(a: VertexId, b: VertexId, weight: Weight) -> Self {
        let (u, v) = canonical(a, b);
        Self { u, v, weight }
    }

    /// Returns the endpoints as a `(u, v)` pair.
    #[inline]
    #[must_use]
    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.u, self.v)
    }
}

/// Orders a vertex pair so the smaller id comes first.
#[inline]
#[must_use]
pub fn canonical(a: VertexId, b: VertexId) -> (VertexId, VertexId) {
    if a <= b { (a, b) } else { (b, a) }
}
