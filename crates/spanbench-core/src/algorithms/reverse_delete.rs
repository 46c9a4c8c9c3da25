//! Reverse-Delete.

use std::time::Instant;

use crate::graph::WeightedGraph;
use crate::result::AlgorithmResult;

use super::{AlgorithmKind, finish_tree};

/// Minimum spanning tree by deleting edges heaviest first.
///
/// Starting from the full edge set, each edge in non-increasing weight
/// order (stable among equal weights) is tentatively removed and stays
/// removed only if the remaining graph is still connected. Connectivity is
/// a fresh BFS per edge, so the whole run is O(m (n + m)).
///
/// The surviving edges are returned in insertion order, each as `(u, v)`
/// with `u < v`.
pub fn reverse_delete(graph: &WeightedGraph) -> AlgorithmResult {
    let started = Instant::now();
    if graph.is_empty() {
        return AlgorithmResult::empty(started);
    }

    let edges = graph.edges();
    let mut order: Vec<usize> = (0..edges.len()).collect();
    order.sort_by(|&a, &b| edges[b].weight.total_cmp(&edges[a].weight));

    // On disconnected input every removal fails the check and all edges survive.
    let mut removed = vec![false; edges.len()];
    for index in order {
        removed[index] = true;
        if !graph.is_connected_where(|id| !removed[id.index()]) {
            removed[index] = false;
        }
    }

    let tree = edges
        .iter()
        .zip(&removed)
        .filter(|&(_, &gone)| !gone)
        .map(|(edge, _)| edge.endpoints())
        .collect();

    finish_tree(AlgorithmKind::ReverseDelete, graph, tree, started)
}
