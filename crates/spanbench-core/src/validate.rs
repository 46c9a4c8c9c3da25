//! Spanning-tree validation.

use serde::{Deserialize, Serialize};
use spanbench_common::types::{VertexId, Weight};

use crate::graph::WeightedGraph;
use crate::union_find::DisjointSet;

/// Outcome of [`validate_spanning_tree`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TreeValidation {
    /// True if the edges form a spanning tree of the graph.
    pub is_valid: bool,
    /// Sum of the graph's weights over the edges.
    pub total_cost: Weight,
}

/// Checks that `edges` form a spanning tree of `graph` and sums their
/// weights using the graph's own weights.
///
/// The edges are a tree on `V(graph)` iff they are acyclic and join every
/// vertex into a single component. An empty edge list is never
/// valid. Edges that do not exist in `graph` invalidate the result and add
/// nothing to the cost; between parallel edges the lightest weight counts.
///
/// The check is a pure function of its inputs.
pub fn validate_spanning_tree(
    graph: &WeightedGraph,
    edges: &[(VertexId, VertexId)],
) -> TreeValidation {
    if edges.is_empty() {
        return TreeValidation {
            is_valid: false,
            total_cost: 0.0,
        };
    }

    let n = graph.vertex_count();
    let mut ds = DisjointSet::new(n);
    let mut is_valid = true;
    let mut total_cost = 0.0;

    for &(u, v) in edges {
        let Some(weight) = graph.weight(u, v) else {
            tracing::debug!(u, v, "tree edge not present in graph");
            is_valid = false;
            continue;
        };
        total_cost += weight;
        if !ds.union(u, v) {
            is_valid = false;
        }
    }

    is_valid = is_valid && ds.component_count() == 1;

    TreeValidation {
        is_valid,
        total_cost,
    }
}
