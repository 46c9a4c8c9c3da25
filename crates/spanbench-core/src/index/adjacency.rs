//! Undirected adjacency lists.
//!
//! Each vertex owns one row of `(neighbor, edge_id)` entries. An undirected
//! edge appears in both endpoint rows, so a full scan of all rows visits
//! every edge twice. Rows are small vectors because most real-world graphs
//! in the benchmark have low average degree.

use smallvec::SmallVec;
use spanbench_common::types::{EdgeId, VertexId};

/// Inline capacity of a row before it spills to the heap.
const INLINE_DEGREE: usize = 4;

/// One vertex's incident entries, in insertion order.
type Row = SmallVec<[(VertexId, EdgeId); INLINE_DEGREE]>;

/// Adjacency lists indexed by vertex id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Adjacency {
    rows: Vec<Row>,
    /// Number of undirected edges.
    edge_count: usize,
}

impl Adjacency {
    /// Creates adjacency for `vertex_count` isolated vertices.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            rows: vec![Row::new(); vertex_count],
            edge_count: 0,
        }
    }

    /// Appends an isolated vertex and returns its id.
    pub fn add_vertex(&mut self) -> VertexId {
        self.rows.push(Row::new());
        self.rows.len() - 1
    }

    /// Records the undirected edge `{u, v}` in both rows.
    ///
    /// Callers are responsible for range checks.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId, edge_id: EdgeId) {
        self.rows[u].push((v, edge_id));
        self.rows[v].push((u, edge_id));
        self.edge_count += 1;
    }

    /// Returns the `(neighbor, edge_id)` entries of `v`.
    ///
    /// Out-of-range vertices have no entries.
    pub fn entries(&self, v: VertexId) -> &[(VertexId, EdgeId)] {
        self.rows.get(v).map(|row| row.as_slice()).unwrap_or_default()
    }

    /// Returns an iterator over the neighbors of `v`.
    ///
    /// A neighbor reached by parallel edges is yielded once per edge.
    pub fn neighbors(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.entries(v).iter().map(|&(dst, _)| dst)
    }

    /// Returns the degree of `v`, counting parallel edges separately.
    pub fn degree(&self, v: VertexId) -> usize {
        self.entries(v).len()
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_adjacency() {
        let mut adj = Adjacency::new(4);

        adj.add_edge(0, 1, EdgeId::new(0));
        adj.add_edge(0, 2, EdgeId::new(1));
        adj.add_edge(0, 3, EdgeId::new(2));

        let neighbors: Vec<_> = adj.neighbors(0).collect();
        assert_eq!(neighbors, vec![1, 2, 3]);
        assert_eq!(adj.neighbors(2).collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn test_degree_counts_parallel_edges() {
        let mut adj = Adjacency::new(3);

        adj.add_edge(0, 1, EdgeId::new(0));
        adj.add_edge(0, 1, EdgeId::new(1));
        adj.add_edge(1, 2, EdgeId::new(2));

        assert_eq!(adj.degree(0), 2);
        assert_eq!(adj.degree(1), 3);
        assert_eq!(adj.degree(2), 1);
        assert_eq!(adj.degree(7), 0);
    }

    #[test]
    fn test_entries_carry_edge_ids() {
        let mut adj = Adjacency::new(3);

        adj.add_edge(0, 1, EdgeId::new(10));
        adj.add_edge(2, 0, EdgeId::new(20));

        assert_eq!(
            adj.entries(0),
            &[(1, EdgeId::new(10)), (2, EdgeId::new(20))]
        );
        assert_eq!(adj.entries(2), &[(0, EdgeId::new(20))]);
    }

    #[test]
    fn test_spills_past_inline_capacity() {
        let mut adj = Adjacency::new(11);

        for i in 1..11 {
            adj.add_edge(0, i, EdgeId::new(i as u32));
        }

        assert_eq!(adj.degree(0), 10);
        assert_eq!(adj.edge_count(), 10);
    }

    #[test]
    fn test_add_vertex() {
        let mut adj = Adjacency::new(2);
        let v = adj.add_vertex();

        assert_eq!(v, 2);
        assert_eq!(adj.vertex_count(), 3);
        assert_eq!(adj.degree(v), 0);
    }
}
