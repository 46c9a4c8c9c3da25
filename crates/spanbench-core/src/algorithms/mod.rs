//! The algorithms under comparison.
//!
//! Four minimum-spanning-tree algorithms and Karger's randomized min-cut,
//! all with the same shape: take a [`WeightedGraph`] by shared reference,
//! return an [`AlgorithmResult`]. The spanning-tree algorithms run the
//! validator before returning, so the reported time covers it.
//!
//! ## Usage
//!
//! ```
//! use spanbench_core::{AlgorithmKind, KargerConfig, WeightedGraph};
//!
//! let graph = WeightedGraph::from_edges(3, [(0, 1, 1.0), (1, 2, 2.0), (0, 2, 3.0)])?;
//!
//! let tree = AlgorithmKind::Kruskal.run(&graph, &KargerConfig::default());
//! assert!(tree.is_valid);
//! assert_eq!(tree.total_cost, 3.0);
//! # Ok::<(), spanbench_common::Error>(())
//! ```

mod boruvka;
mod karger;
mod kruskal;
mod prim;
mod reverse_delete;
mod scored;

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use spanbench_common::types::VertexId;
use spanbench_common::utils::error::Error;

use crate::graph::WeightedGraph;
use crate::result::AlgorithmResult;
use crate::validate::validate_spanning_tree;

pub use boruvka::boruvka;
pub use karger::{DEFAULT_RESTARTS, KargerConfig, karger};
pub use kruskal::kruskal;
pub use prim::prim;
pub use reverse_delete::reverse_delete;
pub use scored::MinScored;

/// Selects one of the five algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlgorithmKind {
    /// Global sorted-edge MST.
    Kruskal,
    /// Priority-queue grown MST.
    Prim,
    /// Component-cheapest-edge rounds.
    Boruvka,
    /// Heaviest-first deletion preserving connectivity.
    ReverseDelete,
    /// Randomized contraction min-cut.
    Karger,
}

impl AlgorithmKind {
    /// All algorithms in benchmark order.
    pub const ALL: [AlgorithmKind; 5] = [
        AlgorithmKind::Kruskal,
        AlgorithmKind::Prim,
        AlgorithmKind::Boruvka,
        AlgorithmKind::ReverseDelete,
        AlgorithmKind::Karger,
    ];

    /// Human-readable name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Kruskal => "Kruskal",
            Self::Prim => "Prim",
            Self::Boruvka => "Boruvka",
            Self::ReverseDelete => "Reverse Delete",
            Self::Karger => "Karger",
        }
    }

    /// Short identifier used on the command line and in file names.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Kruskal => "kruskal",
            Self::Prim => "prim",
            Self::Boruvka => "boruvka",
            Self::ReverseDelete => "reverse-delete",
            Self::Karger => "karger",
        }
    }

    /// Textbook time complexity as shown in reports.
    #[must_use]
    pub fn complexity(self) -> &'static str {
        match self {
            Self::Kruskal => "O(m log m)",
            Self::Prim | Self::Boruvka => "O(m log n)",
            Self::ReverseDelete => "O(m (n + m))",
            Self::Karger => "O(m)",
        }
    }

    /// Returns true for the spanning-tree algorithms.
    #[must_use]
    pub fn is_spanning_tree(self) -> bool {
        !matches!(self, Self::Karger)
    }

    /// Runs the algorithm. `karger_config` is ignored by the spanning-tree
    /// algorithms.
    #[must_use]
    pub fn run(self, graph: &WeightedGraph, karger_config: &KargerConfig) -> AlgorithmResult {
        match self {
            Self::Kruskal => kruskal(graph),
            Self::Prim => prim(graph),
            Self::Boruvka => boruvka(graph),
            Self::ReverseDelete => reverse_delete(graph),
            Self::Karger => karger(graph, karger_config),
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AlgorithmKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        match normalized.as_str() {
            "kruskal" => Ok(Self::Kruskal),
            "prim" => Ok(Self::Prim),
            "boruvka" | "borůvka" => Ok(Self::Boruvka),
            "reverse-delete" => Ok(Self::ReverseDelete),
            "karger" => Ok(Self::Karger),
            _ => Err(Error::Config(format!("unknown algorithm '{s}'"))),
        }
    }
}

/// Validates a spanning tree and packages it, stopping the clock last.
fn finish_tree(
    kind: AlgorithmKind,
    graph: &WeightedGraph,
    edges: Vec<(VertexId, VertexId)>,
    started: Instant,
) -> AlgorithmResult {
    let validation = validate_spanning_tree(graph, &edges);
    let execution_time = started.elapsed().as_secs_f64();
    tracing::debug!(
        algorithm = kind.slug(),
        edges = edges.len(),
        cost = validation.total_cost,
        valid = validation.is_valid,
        seconds = execution_time,
        "spanning tree finished"
    );
    AlgorithmResult {
        edges,
        total_cost: validation.total_cost,
        execution_time,
        is_valid: validation.is_valid,
    }
}
