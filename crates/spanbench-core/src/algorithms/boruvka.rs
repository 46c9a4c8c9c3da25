//! Borůvka's algorithm.

use std::time::Instant;

use spanbench_common::types::{EdgeId, WeightedEdge};

use crate::graph::WeightedGraph;
use crate::result::AlgorithmResult;
use crate::union_find::DisjointSet;

use super::{AlgorithmKind, finish_tree};

/// Minimum spanning tree by component-cheapest-edge rounds.
///
/// Each round scans every edge once and records, per component root, the
/// lightest edge leaving the component. A candidate is replaced only by a
/// strictly lighter one, so the first edge seen wins ties. The candidates
/// are then merged in root-index order; when two components picked the
/// same edge the second union is a no-op. A round that merges nothing ends
/// the loop, which only happens on disconnected input.
///
/// Output order is per round, then per component root index.
pub fn boruvka(graph: &WeightedGraph) -> AlgorithmResult {
    let started = Instant::now();
    let n = graph.vertex_count();
    if n == 0 {
        return AlgorithmResult::empty(started);
    }

    let edges = graph.edges();
    let mut ds = DisjointSet::new(n);
    let mut components = n;
    let mut tree = Vec::with_capacity(n - 1);
    let mut cheapest: Vec<Option<EdgeId>> = vec![None; n];
    let mut rounds = 0usize;

    while components > 1 {
        rounds += 1;
        cheapest.fill(None);

        for (id, edge) in graph.edges_with_ids() {
            let pu = ds.find(edge.u);
            let pv = ds.find(edge.v);
            if pu != pv {
                offer(&mut cheapest[pu], id, edge, edges);
                offer(&mut cheapest[pv], id, edge, edges);
            }
        }

        let mut added = false;
        for candidate in cheapest.iter().flatten() {
            let edge = &edges[candidate.index()];
            if ds.union(edge.u, edge.v) {
                tree.push(edge.endpoints());
                components -= 1;
                added = true;
            }
        }
        if !added {
            break;
        }
    }

    tracing::trace!(rounds, components, "boruvka rounds complete");
    finish_tree(AlgorithmKind::Boruvka, graph, tree, started)
}

/// Stores `id` in `slot` if the slot is empty or holds a heavier edge.
fn offer(slot: &mut Option<EdgeId>, id: EdgeId, edge: &WeightedEdge, edges: &[WeightedEdge]) {
    match slot {
        Some(current) if edges[current.index()].weight <= edge.weight => {}
        _ => *slot = Some(id),
    }
}
