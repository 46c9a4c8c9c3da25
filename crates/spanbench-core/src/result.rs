//! The common output record of every algorithm.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use spanbench_common::types::{VertexId, Weight};

/// What an algorithm run produced.
///
/// For the spanning-tree algorithms `edges` is the selected tree in
/// discovery order and `total_cost` its weight. For Karger it is the best
/// cut found and its size. `is_valid` reports success either way; the
/// algorithms never fail with an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmResult {
    /// Selected undirected edges in discovery order.
    pub edges: Vec<(VertexId, VertexId)>,
    /// Tree weight, or cut size for Karger.
    pub total_cost: Weight,
    /// Wall-clock seconds spent in the algorithm body, validation included.
    pub execution_time: f64,
    /// Whether the run produced a valid spanning tree or a two-sided cut.
    pub is_valid: bool,
}

impl AlgorithmResult {
    /// An empty, invalid result timed from `started`.
    #[must_use]
    pub fn empty(started: Instant) -> Self {
        Self {
            edges: Vec::new(),
            total_cost: 0.0,
            execution_time: started.elapsed().as_secs_f64(),
            is_valid: false,
        }
    }

    /// Returns the number of selected edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Compares everything except the timing.
    pub fn same_outcome(&self, other: &Self) -> bool {
        self.edges == other.edges
            && self.total_cost == other.total_cost
            && self.is_valid == other.is_valid
    }
}
