//! Prim's algorithm.

use std::collections::BinaryHeap;
use std::time::Instant;

use spanbench_common::types::VertexId;

use crate::graph::WeightedGraph;
use crate::result::AlgorithmResult;

use super::{AlgorithmKind, MinScored, finish_tree};

/// Minimum spanning tree grown from vertex 0.
///
/// Keeps a min-heap of crossing edges `(from, to)` keyed by weight. Each
/// pop either discards an edge whose target is already in the tree or adds
/// the target and pushes its edges to unvisited neighbors. Equal weights
/// pop in `(from, to)` order. Stops once every vertex is visited or the
/// heap runs dry, the latter only on disconnected input.
///
/// Output order is expansion order; each edge is oriented `(tree, new)`.
pub fn prim(graph: &WeightedGraph) -> AlgorithmResult {
    let started = Instant::now();
    let n = graph.vertex_count();
    if n == 0 {
        return AlgorithmResult::empty(started);
    }

    let mut visited = vec![false; n];
    let mut visited_count = 1;
    let mut heap: BinaryHeap<MinScored<(VertexId, VertexId)>> = BinaryHeap::new();
    let mut tree = Vec::with_capacity(n - 1);

    let seed = 0;
    visited[seed] = true;
    heap.extend(graph.neighbors(seed).map(|(v, w)| MinScored(w, (seed, v))));

    while visited_count < n {
        let Some(MinScored(_, (u, v))) = heap.pop() else {
            break;
        };
        if visited[v] {
            continue;
        }
        visited[v] = true;
        visited_count += 1;
        tree.push((u, v));

        heap.extend(
            graph
                .neighbors(v)
                .filter(|&(x, _)| !visited[x])
                .map(|(x, w)| MinScored(w, (v, x))),
        );
    }

    finish_tree(AlgorithmKind::Prim, graph, tree, started)
}
