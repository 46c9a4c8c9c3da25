//! The benchmark driver.
//!
//! Datasets are processed one at a time, smallest first. Within a dataset
//! the selected algorithms run concurrently on a bounded rayon pool; they
//! share the loaded graph read-only. The record store is saved after every
//! dataset, so an interrupted benchmark keeps what it finished.

use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use rayon::prelude::*;
use serde::Serialize;
use spanbench_adapters::{LoadedGraph, RecordStore, TimingRecord, dataset_files, load_graph};
use spanbench_common::utils::error::{Error, Result};
use spanbench_core::{AlgorithmKind, AlgorithmResult, KargerConfig, WeightedGraph};

use crate::config::BenchConfig;
use crate::progress::ProgressSink;

/// File name of the record store inside the output directory.
pub const RECORDS_FILE: &str = "results.json";

/// Totals for a finished benchmark.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BenchSummary {
    /// Datasets loaded and benchmarked.
    pub datasets: usize,
    /// Datasets that failed to load.
    pub failed: usize,
    /// Algorithm runs performed.
    pub runs: usize,
    /// Algorithm runs skipped on resume.
    pub skipped: usize,
    /// Where the records were written.
    pub records_path: PathBuf,
}

/// Runs one algorithm over `graph`.
pub fn run_single(
    graph: &WeightedGraph,
    kind: AlgorithmKind,
    karger: &KargerConfig,
) -> AlgorithmResult {
    let _span = tracing::debug_span!("run", algorithm = kind.slug()).entered();
    let result = kind.run(graph, karger);
    tracing::debug!(
        valid = result.is_valid,
        cost = result.total_cost,
        seconds = result.execution_time,
        "run finished"
    );
    result
}

/// Drives a benchmark described by a [`BenchConfig`].
pub struct BenchRunner {
    config: BenchConfig,
    pool: rayon::ThreadPool,
}

impl BenchRunner {
    /// Creates a runner and its worker pool.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the configuration is invalid, or
    /// [`Error::Internal`] if the pool cannot be built.
    pub fn new(config: BenchConfig) -> Result<Self> {
        config.validate()?;
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.max_workers)
            .thread_name(|i| format!("spanbench-worker-{i}"))
            .build()
            .map_err(|e| Error::Internal(format!("failed to build worker pool: {e}")))?;
        Ok(Self { config, pool })
    }

    /// Returns the configuration.
    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Runs the benchmark over every dataset in the data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be listed, the output
    /// directory cannot be created, or records or exports cannot be
    /// written. A dataset that fails to load is reported and skipped.
    pub fn run(&self, progress: &dyn ProgressSink) -> Result<BenchSummary> {
        let files = dataset_files(&self.config.data_dir)?;
        fs::create_dir_all(&self.config.output_dir)?;
        let records_path = self.config.output_dir.join(RECORDS_FILE);
        let store = Mutex::new(RecordStore::open(&records_path)?);
        let loader = self.config.loader_config();

        tracing::info!(
            datasets = files.len(),
            algorithms = self.config.algorithms.len(),
            workers = self.config.max_workers,
            "benchmark started"
        );

        let mut summary = BenchSummary {
            records_path,
            ..BenchSummary::default()
        };
        for (index, path) in files.iter().enumerate() {
            let name = spanbench_adapters::loader::dataset_name(path);
            progress.dataset_started(&name, index, files.len());

            let loaded = match load_graph(path, &loader) {
                Ok(loaded) => loaded,
                Err(err) => {
                    tracing::error!(dataset = %name, error = %err, "failed to load dataset");
                    progress.dataset_failed(path, &err);
                    summary.failed += 1;
                    continue;
                }
            };
            progress.graph_loaded(&loaded);

            let (runs, skipped) = self.run_dataset(&loaded, &store, progress)?;
            store.lock().save()?;
            progress.dataset_finished(&loaded.name);

            summary.datasets += 1;
            summary.runs += runs;
            summary.skipped += skipped;
        }

        tracing::info!(
            datasets = summary.datasets,
            failed = summary.failed,
            runs = summary.runs,
            skipped = summary.skipped,
            "benchmark finished"
        );
        Ok(summary)
    }

    /// Runs the selected algorithms over one loaded dataset. Returns the
    /// number of runs performed and skipped.
    fn run_dataset(
        &self,
        loaded: &LoadedGraph,
        store: &Mutex<RecordStore>,
        progress: &dyn ProgressSink,
    ) -> Result<(usize, usize)> {
        let graph = &loaded.graph;
        let pending: Vec<AlgorithmKind> = {
            let store = store.lock();
            self.config
                .algorithms
                .iter()
                .copied()
                .filter(|&kind| {
                    let done = self.config.resume
                        && store.contains(kind, graph.vertex_count(), graph.edge_count());
                    if done {
                        tracing::info!(
                            dataset = %loaded.name,
                            algorithm = %kind,
                            "already recorded, skipping"
                        );
                        progress.algorithm_skipped(&loaded.name, kind);
                    }
                    !done
                })
                .collect()
        };
        let skipped = self.config.algorithms.len() - pending.len();

        let karger = self.config.karger_config();
        let outcomes: Vec<Result<()>> = self.pool.install(|| {
            pending
                .par_iter()
                .map(|&kind| {
                    let result = run_single(graph, kind, &karger);
                    progress.algorithm_finished(&loaded.name, kind, &result);
                    if self.config.export_edges {
                        self.export(&loaded.name, kind, &result)?;
                    }
                    store
                        .lock()
                        .insert(TimingRecord::from_result(&loaded.name, kind, graph, &result));
                    Ok(())
                })
                .collect()
        });
        outcomes.into_iter().collect::<Result<()>>()?;

        Ok((pending.len(), skipped))
    }

    fn export(&self, dataset: &str, kind: AlgorithmKind, result: &AlgorithmResult) -> Result<()> {
        let path = export_path(&self.config.output_dir, dataset, kind);
        fs::write(&path, serde_json::to_vec_pretty(result)?)?;
        tracing::debug!(path = %path.display(), "edges exported");
        Ok(())
    }
}

/// Returns `<dir>/<dataset>_<algorithm>.json`.
pub fn export_path(dir: &Path, dataset: &str, kind: AlgorithmKind) -> PathBuf {
    dir.join(format!("{dataset}_{}.json", kind.slug()))
}
