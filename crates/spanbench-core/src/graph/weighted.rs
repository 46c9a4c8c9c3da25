//! The immutable weighted graph consumed by every algorithm.

use std::collections::VecDeque;
use std::ops::Range;

use spanbench_common::types::{EdgeId, VertexId, Weight, WeightedEdge, canonical};
use spanbench_common::utils::error::{Error, Result};
use spanbench_common::utils::hash::FxHashMap;

use crate::index::Adjacency;

/// An undirected weighted graph over the compact vertex range `0..n`.
///
/// Edges are stored once, canonicalized so that `u < v`, in insertion
/// order; adjacency is kept in both directions. Parallel edges are allowed
/// and remain distinct. Self-loops, negative weights, and non-finite
/// weights are rejected at insertion time.
///
/// Weight lookup between a vertex pair is O(1) through a hashed index that
/// tracks the lightest edge of each pair.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeightedGraph {
    /// Edge records indexed by [`EdgeId`].
    edges: Vec<WeightedEdge>,
    /// Incident `(neighbor, edge)` entries per vertex.
    adjacency: Adjacency,
    /// Canonical vertex pair to its lightest edge.
    lightest: FxHashMap<(VertexId, VertexId), EdgeId>,
}

impl WeightedGraph {
    /// Creates a graph with `vertex_count` isolated vertices.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self::with_capacity(vertex_count, 0)
    }

    /// Creates a graph with room for `edge_capacity` edges.
    #[must_use]
    pub fn with_capacity(vertex_count: usize, edge_capacity: usize) -> Self {
        let mut lightest = FxHashMap::default();
        lightest.reserve(edge_capacity);
        Self {
            edges: Vec::with_capacity(edge_capacity),
            adjacency: Adjacency::new(vertex_count),
            lightest,
        }
    }

    /// Builds a graph from `(u, v, weight)` triples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEdge`] for the first triple that violates the
    /// graph invariants.
    pub fn from_edges(
        vertex_count: usize,
        edges: impl IntoIterator<Item = (VertexId, VertexId, Weight)>,
    ) -> Result<Self> {
        let edges = edges.into_iter();
        let mut graph = Self::with_capacity(vertex_count, edges.size_hint().0);
        for (u, v, weight) in edges {
            graph.add_edge(u, v, weight)?;
        }
        Ok(graph)
    }

    /// Appends an isolated vertex and returns its id.
    pub fn add_vertex(&mut self) -> VertexId {
        self.adjacency.add_vertex()
    }

    /// Adds the undirected edge `{u, v}` and returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEdge`] if either endpoint is out of range,
    /// the edge is a self-loop, or the weight is negative or not finite.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId, weight: Weight) -> Result<EdgeId> {
        let n = self.vertex_count();
        if u >= n || v >= n {
            return Err(Error::invalid_edge(
                u,
                v,
                format!("endpoint out of range for {n} vertices"),
            ));
        }
        if u == v {
            return Err(Error::invalid_edge(u, v, "self-loop"));
        }
        if !weight.is_finite() || weight < 0.0 {
            return Err(Error::invalid_edge(
                u,
                v,
                format!("weight {weight} is not a finite non-negative number"),
            ));
        }
        let index = u32::try_from(self.edges.len())
            .ok()
            .filter(|&i| i != u32::MAX)
            .ok_or_else(|| Error::Internal("edge id space exhausted".to_string()))?;
        let id = EdgeId::new(index);

        let edge = WeightedEdge::new(u, v, weight);
        self.edges.push(edge);
        self.adjacency.add_edge(edge.u, edge.v, id);

        let edges = &self.edges;
        self.lightest
            .entry(edge.endpoints())
            .and_modify(|current| {
                if weight < edges[current.index()].weight {
                    *current = id;
                }
            })
            .or_insert(id);

        Ok(id)
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.vertex_count()
    }

    /// Returns the number of edges, counting parallel edges separately.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if the graph has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }

    /// Returns the vertex id range `0..n`.
    pub fn vertices(&self) -> Range<VertexId> {
        0..self.vertex_count()
    }

    /// Returns all edges in insertion order, indexed by [`EdgeId`].
    pub fn edges(&self) -> &[WeightedEdge] {
        &self.edges
    }

    /// Returns an iterator over `(id, edge)` pairs in insertion order.
    pub fn edges_with_ids(&self) -> impl Iterator<Item = (EdgeId, &WeightedEdge)> + '_ {
        self.edges
            .iter()
            .enumerate()
            .map(|(i, edge)| (EdgeId::new(i as u32), edge))
    }

    /// Returns an iterator over `(neighbor, weight)` pairs of `v`.
    pub fn neighbors(&self, v: VertexId) -> impl Iterator<Item = (VertexId, Weight)> + '_ {
        self.adjacency
            .entries(v)
            .iter()
            .map(|&(dst, id)| (dst, self.edges[id.index()].weight))
    }

    /// Returns an iterator over `(neighbor, edge_id)` pairs of `v`.
    pub fn incident(&self, v: VertexId) -> impl Iterator<Item = (VertexId, EdgeId)> + '_ {
        self.adjacency.entries(v).iter().copied()
    }

    /// Returns the degree of `v`, counting parallel edges separately.
    pub fn degree(&self, v: VertexId) -> usize {
        self.adjacency.degree(v)
    }

    /// Returns the weight of the lightest edge between `u` and `v`.
    pub fn weight(&self, u: VertexId, v: VertexId) -> Option<Weight> {
        self.lightest_edge(u, v).map(|id| self.edges[id.index()].weight)
    }

    /// Returns the id of the lightest edge between `u` and `v`.
    pub fn lightest_edge(&self, u: VertexId, v: VertexId) -> Option<EdgeId> {
        self.lightest.get(&canonical(u, v)).copied()
    }

    /// Returns true if at least one edge connects `u` and `v`.
    pub fn contains_edge(&self, u: VertexId, v: VertexId) -> bool {
        self.lightest.contains_key(&canonical(u, v))
    }

    /// Returns the sum of all edge weights.
    pub fn total_weight(&self) -> Weight {
        self.edges.iter().map(|e| e.weight).sum()
    }

    /// Returns true if the graph has at least one vertex and every vertex
    /// is reachable from vertex 0.
    pub fn is_connected(&self) -> bool {
        self.is_connected_where(|_| true)
    }

    /// Connectivity restricted to the edges accepted by `keep`.
    ///
    /// Runs a single BFS from vertex 0, so the cost is O(n + m) per call.
    pub fn is_connected_where(&self, keep: impl Fn(EdgeId) -> bool) -> bool {
        let n = self.vertex_count();
        if n == 0 {
            return false;
        }

        let mut visited = vec![false; n];
        let mut queue = VecDeque::from([0]);
        visited[0] = true;
        let mut reached = 1;

        while let Some(v) = queue.pop_front() {
            for &(dst, id) in self.adjacency.entries(v) {
                if !visited[dst] && keep(id) {
                    visited[dst] = true;
                    reached += 1;
                    queue.push_back(dst);
                }
            }
        }

        reached == n
    }

    /// Returns the connected components, each sorted ascending, ordered by
    /// their smallest vertex.
    pub fn connected_components(&self) -> Vec<Vec<VertexId>> {
        let n = self.vertex_count();
        let mut visited = vec![false; n];
        let mut components = Vec::new();

        for start in 0..n {
            if visited[start] {
                continue;
            }
            visited[start] = true;
            let mut component = vec![start];
            let mut queue = VecDeque::from([start]);
            while let Some(v) = queue.pop_front() {
                for dst in self.adjacency.neighbors(v) {
                    if !visited[dst] {
                        visited[dst] = true;
                        component.push(dst);
                        queue.push_back(dst);
                    }
                }
            }
            component.sort_unstable();
            components.push(component);
        }

        components
    }

    /// Returns the subgraph induced by `vertices`, relabelled so that
    /// `vertices[i]` becomes vertex `i`.
    ///
    /// Edges keep their relative insertion order. Duplicate or out-of-range
    /// entries in `vertices` are ignored.
    pub fn induced_subgraph(&self, vertices: &[VertexId]) -> WeightedGraph {
        let mut relabel = vec![None; self.vertex_count()];
        let mut next = 0;
        for &v in vertices {
            if let Some(slot) = relabel.get_mut(v) {
                if slot.is_none() {
                    *slot = Some(next);
                    next += 1;
                }
            }
        }

        let mut sub = WeightedGraph::new(next);
        for edge in &self.edges {
            if let (Some(u), Some(v)) = (relabel[edge.u], relabel[edge.v]) {
                // Endpoints are distinct and in range; the weight was
                // already validated on insertion into `self`.
                let added = sub.add_edge(u, v, edge.weight);
                debug_assert!(added.is_ok());
            }
        }
        sub
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> WeightedGraph {
        WeightedGraph::from_edges(3, [(0, 1, 1.0), (1, 2, 2.0), (0, 2, 3.0)]).unwrap()
    }

    #[test]
    fn test_counts() {
        let g = triangle();
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_count(), 3);
        assert!(!g.is_empty());
        assert_eq!(g.total_weight(), 6.0);
    }

    #[test]
    fn test_edges_are_canonical() {
        let g = WeightedGraph::from_edges(3, [(2, 0, 4.0)]).unwrap();
        assert_eq!(g.edges()[0].endpoints(), (0, 2));
    }

    #[test]
    fn test_symmetric_adjacency() {
        let g = triangle();
        for edge in g.edges() {
            assert!(g.neighbors(edge.u).any(|(x, w)| x == edge.v && w == edge.weight));
            assert!(g.neighbors(edge.v).any(|(x, w)| x == edge.u && w == edge.weight));
        }
    }

    #[test]
    fn test_weight_lookup_either_orientation() {
        let g = triangle();
        assert_eq!(g.weight(1, 2), Some(2.0));
        assert_eq!(g.weight(2, 1), Some(2.0));
        assert!(g.contains_edge(2, 0));
    }

    #[test]
    fn test_weight_lookup_missing() {
        let g = WeightedGraph::from_edges(3, [(0, 1, 1.0)]).unwrap();
        assert_eq!(g.weight(1, 2), None);
        assert!(!g.contains_edge(0, 2));
    }

    #[test]
    fn test_parallel_edges_stay_distinct() {
        let g = WeightedGraph::from_edges(2, [(0, 1, 5.0), (1, 0, 2.0), (0, 1, 3.0)]).unwrap();
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.degree(0), 3);
        // Lookup reports the lightest parallel edge.
        assert_eq!(g.weight(0, 1), Some(2.0));
        assert_eq!(g.lightest_edge(0, 1), Some(EdgeId::new(1)));
    }

    #[test]
    fn test_rejects_self_loop() {
        let mut g = WeightedGraph::new(2);
        let err = g.add_edge(1, 1, 1.0).unwrap_err();
        assert!(matches!(err, Error::InvalidEdge { .. }));
    }

    #[test]
    fn test_rejects_out_of_range() {
        let mut g = WeightedGraph::new(2);
        assert!(g.add_edge(0, 2, 1.0).is_err());
    }

    #[test]
    fn test_rejects_bad_weights() {
        let mut g = WeightedGraph::new(2);
        assert!(g.add_edge(0, 1, -1.0).is_err());
        assert!(g.add_edge(0, 1, f64::NAN).is_err());
        assert!(g.add_edge(0, 1, f64::INFINITY).is_err());
        assert!(g.add_edge(0, 1, 0.0).is_ok());
    }

    #[test]
    fn test_connectivity() {
        assert!(triangle().is_connected());
        assert!(WeightedGraph::new(1).is_connected());
        assert!(!WeightedGraph::new(0).is_connected());

        let g = WeightedGraph::from_edges(4, [(0, 1, 1.0), (2, 3, 1.0)]).unwrap();
        assert!(!g.is_connected());
    }

    #[test]
    fn test_connectivity_with_filter() {
        let g = WeightedGraph::from_edges(3, [(0, 1, 1.0), (1, 2, 1.0)]).unwrap();
        assert!(g.is_connected_where(|_| true));
        assert!(!g.is_connected_where(|id| id != EdgeId::new(1)));
    }

    #[test]
    fn test_connected_components() {
        let g = WeightedGraph::from_edges(6, [(4, 1, 1.0), (1, 0, 1.0), (2, 5, 1.0)]).unwrap();
        let components = g.connected_components();
        assert_eq!(components, vec![vec![0, 1, 4], vec![2, 5], vec![3]]);
    }

    #[test]
    fn test_induced_subgraph_relabels() {
        let g = WeightedGraph::from_edges(5, [(0, 1, 1.0), (3, 4, 2.0), (1, 3, 7.0)]).unwrap();
        let sub = g.induced_subgraph(&[1, 3, 4]);

        assert_eq!(sub.vertex_count(), 3);
        assert_eq!(sub.edge_count(), 2);
        assert_eq!(sub.weight(1, 2), Some(2.0));
        assert_eq!(sub.weight(0, 1), Some(7.0));
    }

    #[test]
    fn test_induced_subgraph_keeps_every_inner_edge() {
        let g = WeightedGraph::from_edges(4, [(0, 2, 3.0), (2, 0, 1.0), (2, 3, 0.0), (1, 2, 4.0)])
            .unwrap();
        let sub = g.induced_subgraph(&[0, 2, 3]);

        assert_eq!(sub.edge_count(), 3);
        assert_eq!(sub.weight(0, 1), Some(1.0));
        assert_eq!(sub.weight(1, 2), Some(0.0));
        assert_eq!(sub.total_weight(), 4.0);
    }

    #[test]
    fn test_add_vertex() {
        let mut g = WeightedGraph::new(1);
        let v = g.add_vertex();
        g.add_edge(0, v, 1.5).unwrap();
        assert_eq!(g.vertex_count(), 2);
        assert_eq!(g.weight(0, 1), Some(1.5));
    }
}
