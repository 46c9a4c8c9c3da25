//! Kruskal's algorithm.

use std::time::Instant;

use crate::graph::WeightedGraph;
use crate::result::AlgorithmResult;
use crate::union_find::DisjointSet;

use super::{AlgorithmKind, finish_tree};

/// Minimum spanning tree by global edge sort.
///
/// Edges are visited by non-decreasing weight; an edge joins the tree iff
/// its endpoints are still in different sets. The sort is stable, so equal
/// weights keep insertion order. Stops as soon as the tree has `n - 1`
/// edges. On disconnected input the result is a spanning forest and is
/// reported invalid.
///
/// Output order is ascending weight.
pub fn kruskal(graph: &WeightedGraph) -> AlgorithmResult {
    let started = Instant::now();
    let n = graph.vertex_count();
    if n == 0 {
        return AlgorithmResult::empty(started);
    }

    let edges = graph.edges();
    let mut order: Vec<usize> = (0..edges.len()).collect();
    order.sort_by(|&a, &b| edges[a].weight.total_cmp(&edges[b].weight));

    let mut ds = DisjointSet::new(n);
    let mut tree = Vec::with_capacity(n - 1);
    for index in order {
        if tree.len() == n - 1 {
            break;
        }
        let edge = &edges[index];
        if ds.union(edge.u, edge.v) {
            tree.push(edge.endpoints());
        }
    }

    finish_tree(AlgorithmKind::Kruskal, graph, tree, started)
}
