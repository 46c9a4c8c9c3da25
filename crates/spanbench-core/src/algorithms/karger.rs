//! Karger's randomized minimum cut.

use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use spanbench_common::types::{VertexId, Weight};

use crate::graph::{ContractionGraph, WeightedGraph};
use crate::result::AlgorithmResult;
use crate::union_find::DisjointSet;

/// Number of independent contraction trials when none is configured.
pub const DEFAULT_RESTARTS: usize = 5;

/// Parameters of a Karger run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KargerConfig {
    /// Number of independent trials; the smallest cut wins.
    pub restarts: usize,
    /// Seed for the run's generator. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for KargerConfig {
    fn default() -> Self {
        Self {
            restarts: DEFAULT_RESTARTS,
            seed: None,
        }
    }
}

impl KargerConfig {
    /// Sets the number of trials.
    pub fn with_restarts(mut self, restarts: usize) -> Self {
        self.restarts = restarts;
        self
    }

    /// Sets the generator seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// A two-sided partition of the original graph and the edges crossing it.
#[derive(Debug)]
struct Cut {
    edges: Vec<(VertexId, VertexId)>,
    size: Weight,
}

/// Minimum cut by repeated random edge contraction.
///
/// One trial contracts uniformly chosen crossing edges of a private
/// [`ContractionGraph`] until two super-vertices remain, tracking the
/// merges in a [`DisjointSet`]. Parallel edges are folded into summed
/// weights, so a cut's size is the total weight crossing it. The cut is then
/// read off the original graph: for every vertex on the side containing
/// vertex 0, in ascending order, each incident edge to the other side is
/// listed, one entry per parallel edge.
///
/// The smallest cut over `config.restarts` trials is returned, the first
/// one found on ties. A single generator, seeded once on entry, drives all
/// trials, so a fixed seed reproduces the result exactly. The result is
/// valid iff some trial ended with exactly two sides joined by at least one
/// edge, so disconnected input is never valid. This is a Monte Carlo
/// algorithm: the returned cut is not guaranteed to be minimum.
pub fn karger(graph: &WeightedGraph, config: &KargerConfig) -> AlgorithmResult {
    let started = Instant::now();
    if graph.vertex_count() == 0 || graph.edge_count() == 0 {
        return AlgorithmResult::empty(started);
    }

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut best: Option<Cut> = None;
    for trial in 0..config.restarts {
        let Some(cut) = contract(graph, &mut rng).and_then(|mut ds| read_cut(graph, &mut ds))
        else {
            tracing::trace!(trial, "karger trial yielded no cut");
            continue;
        };
        tracing::trace!(trial, size = cut.size, "karger trial finished");
        if best.as_ref().is_none_or(|b| cut.size < b.size) {
            best = Some(cut);
        }
    }

    let result = match best {
        Some(cut) => AlgorithmResult {
            edges: cut.edges,
            total_cost: cut.size,
            execution_time: started.elapsed().as_secs_f64(),
            is_valid: true,
        },
        None => AlgorithmResult::empty(started),
    };
    tracing::debug!(
        algorithm = "karger",
        restarts = config.restarts,
        cut = result.total_cost,
        valid = result.is_valid,
        seconds = result.execution_time,
        "min cut finished"
    );
    result
}

/// Runs one contraction trial down to two super-vertices.
///
/// Returns `None` if the trial runs out of crossing edges first, which
/// happens only on disconnected input.
fn contract(graph: &WeightedGraph, rng: &mut StdRng) -> Option<DisjointSet> {
    let n = graph.vertex_count();
    let mut working = ContractionGraph::from_graph(graph);
    let mut ds = DisjointSet::new(n);
    let mut remaining = n;

    while remaining > 2 {
        let candidates: Vec<(VertexId, VertexId)> = working
            .edges()
            .into_iter()
            .filter(|&(u, v)| ds.find(u) != ds.find(v))
            .collect();
        let &(u, v) = candidates.choose(rng)?;

        ds.union(u, v);
        working.contract(u, v);
        remaining -= 1;
    }

    Some(ds)
}

/// Lists the original edges crossing the partition in `ds`.
///
/// Returns `None` unless the partition has exactly two sides and at least
/// one edge crosses between them.
fn read_cut(graph: &WeightedGraph, ds: &mut DisjointSet) -> Option<Cut> {
    let n = graph.vertex_count();
    let first_root = ds.find(0);
    let mut second_root = None;
    let mut on_first_side = vec![false; n];

    for v in 0..n {
        let root = ds.find(v);
        if root == first_root {
            on_first_side[v] = true;
        } else {
            match second_root {
                None => second_root = Some(root),
                Some(r) if r == root => {}
                Some(_) => return None,
            }
        }
    }
    second_root?;

    let mut edges = Vec::new();
    let mut size = 0.0;
    for u in (0..n).filter(|&u| on_first_side[u]) {
        for (v, id) in graph.incident(u) {
            if !on_first_side[v] {
                edges.push((u, v));
                size += graph.edges()[id.index()].weight;
            }
        }
    }

    if edges.is_empty() {
        return None;
    }
    Some(Cut { edges, size })
}
