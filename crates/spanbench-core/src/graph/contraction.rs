//! Mutable working copy for edge contraction.

use spanbench_common::types::{VertexId, Weight};
use spanbench_common::utils::hash::FxIndexMap;

use super::WeightedGraph;

/// A weighted multigraph collapsed into a simple graph whose edge weights
/// are the sums of the parallel edges they stand for.
///
/// Contracting `{keep, absorb}` folds every edge of `absorb` into `keep`,
/// summing weights where `keep` already had an edge to the same neighbor,
/// drops the edges between the pair, and removes `absorb`. Vertex ids are
/// never reused, so ids stay comparable with the source graph.
///
/// Rows are insertion-ordered maps, which keeps [`edges`](Self::edges)
/// deterministic for a given contraction sequence.
#[derive(Debug, Clone)]
pub struct ContractionGraph {
    /// Neighbor to summed weight, per vertex. Removed vertices have empty rows.
    adjacency: Vec<FxIndexMap<VertexId, Weight>>,
    /// Liveness flag per vertex id.
    alive: Vec<bool>,
    /// Number of live vertices.
    alive_count: usize,
}

impl ContractionGraph {
    /// Copies `graph`, summing the weights of parallel edges.
    #[must_use]
    pub fn from_graph(graph: &WeightedGraph) -> Self {
        let n = graph.vertex_count();
        let mut adjacency: Vec<FxIndexMap<VertexId, Weight>> =
            (0..n).map(|_| FxIndexMap::default()).collect();

        for edge in graph.edges() {
            *adjacency[edge.u].entry(edge.v).or_insert(0.0) += edge.weight;
            *adjacency[edge.v].entry(edge.u).or_insert(0.0) += edge.weight;
        }

        Self {
            adjacency,
            alive: vec![true; n],
            alive_count: n,
        }
    }

    /// Returns the number of live vertices.
    pub fn vertex_count(&self) -> usize {
        self.alive_count
    }

    /// Returns true if `v` has not been absorbed.
    pub fn contains_vertex(&self, v: VertexId) -> bool {
        self.alive.get(v).copied().unwrap_or(false)
    }

    /// Returns the summed weight between `u` and `v`.
    pub fn weight(&self, u: VertexId, v: VertexId) -> Option<Weight> {
        self.adjacency.get(u)?.get(&v).copied()
    }

    /// Returns an iterator over `(neighbor, weight)` pairs of `v`.
    pub fn neighbors(&self, v: VertexId) -> impl Iterator<Item = (VertexId, Weight)> + '_ {
        self.adjacency
            .get(v)
            .into_iter()
            .flat_map(|row| row.iter().map(|(&x, &w)| (x, w)))
    }

    /// Returns the number of (merged) edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|row| row.len()).sum::<usize>() / 2
    }

    /// Returns every edge once as `(u, v)` with `u < v`, ordered by `u`
    /// ascending and then by the insertion order of `u`'s row.
    pub fn edges(&self) -> Vec<(VertexId, VertexId)> {
        let mut edges = Vec::with_capacity(self.edge_count());
        for (u, row) in self.adjacency.iter().enumerate() {
            edges.extend(row.keys().filter(|&&x| u < x).map(|&x| (u, x)));
        }
        edges
    }

    /// Contracts the edge `{keep, absorb}` into `keep` and removes `absorb`.
    ///
    /// Returns false and leaves the graph untouched if either vertex is
    /// already removed or the two are the same vertex.
    pub fn contract(&mut self, keep: VertexId, absorb: VertexId) -> bool {
        if keep == absorb || !self.contains_vertex(keep) || !self.contains_vertex(absorb) {
            return false;
        }

        let row = std::mem::take(&mut self.adjacency[absorb]);
        for (x, weight) in row {
            self.adjacency[x].shift_remove(&absorb);
            if x == keep {
                continue;
            }
            *self.adjacency[keep].entry(x).or_insert(0.0) += weight;
            *self.adjacency[x].entry(keep).or_insert(0.0) += weight;
        }

        self.alive[absorb] = false;
        self.alive_count -= 1;
        true
    }
}
