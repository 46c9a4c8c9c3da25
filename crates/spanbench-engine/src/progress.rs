//! Progress hooks.
//!
//! The runner reports what it is doing through a [`ProgressSink`]. Hooks
//! for algorithm runs are called from worker threads, so sinks must be
//! `Sync`.

use std::path::Path;

use spanbench_adapters::LoadedGraph;
use spanbench_common::Error;
use spanbench_core::{AlgorithmKind, AlgorithmResult};

/// Receives benchmark progress events. Every method defaults to a no-op.
pub trait ProgressSink: Sync {
    /// A dataset is about to be loaded. `index` is 0-based.
    fn dataset_started(&self, _name: &str, _index: usize, _total: usize) {}

    /// A dataset loaded successfully.
    fn graph_loaded(&self, _loaded: &LoadedGraph) {}

    /// A dataset failed to load and is skipped.
    fn dataset_failed(&self, _path: &Path, _error: &Error) {}

    /// One algorithm finished on a dataset.
    fn algorithm_finished(&self, _dataset: &str, _kind: AlgorithmKind, _result: &AlgorithmResult) {
    }

    /// One algorithm was skipped because its record already exists.
    fn algorithm_skipped(&self, _dataset: &str, _kind: AlgorithmKind) {}

    /// Every selected algorithm is done with a dataset.
    fn dataset_finished(&self, _dataset: &str) {}
}

/// A sink that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {}
