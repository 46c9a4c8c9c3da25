//! Benchmark configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use spanbench_adapters::LoaderConfig;
use spanbench_common::utils::error::{Error, Result};
use spanbench_core::{AlgorithmKind, DEFAULT_RESTARTS, KargerConfig};

/// Default number of worker threads per dataset.
pub const DEFAULT_MAX_WORKERS: usize = 4;

/// Everything a benchmark run needs to know.
///
/// # Examples
///
/// ```
/// use spanbench_engine::BenchConfig;
/// use spanbench_core::AlgorithmKind;
///
/// let config = BenchConfig::default()
///     .with_data_dir("graphs")
///     .with_algorithms(vec![AlgorithmKind::Kruskal, AlgorithmKind::Prim])
///     .with_seed(42);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Directory scanned for `.edges` and `.mtx` files.
    pub data_dir: PathBuf,
    /// Directory receiving the record store and edge exports.
    pub output_dir: PathBuf,
    /// Algorithms to run, in this order.
    pub algorithms: Vec<AlgorithmKind>,
    /// Karger trials per run.
    pub karger_restarts: usize,
    /// Seeds the loader and Karger when set.
    pub seed: Option<u64>,
    /// Worker threads per dataset.
    pub max_workers: usize,
    /// Skip runs that already have a record.
    pub resume: bool,
    /// Write every result's edges as JSON.
    pub export_edges: bool,
    /// File normalization options.
    pub loader: LoaderConfig,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            output_dir: PathBuf::from("results"),
            algorithms: AlgorithmKind::ALL.to_vec(),
            karger_restarts: DEFAULT_RESTARTS,
            seed: None,
            max_workers: DEFAULT_MAX_WORKERS,
            resume: false,
            export_edges: false,
            loader: LoaderConfig::default(),
        }
    }
}

impl BenchConfig {
    /// Sets the dataset directory.
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Sets the output directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Sets the algorithms to run.
    pub fn with_algorithms(mut self, algorithms: Vec<AlgorithmKind>) -> Self {
        self.algorithms = algorithms;
        self
    }

    /// Sets the number of Karger trials.
    pub fn with_karger_restarts(mut self, restarts: usize) -> Self {
        self.karger_restarts = restarts;
        self
    }

    /// Sets the seed shared by the loader and Karger.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the worker count.
    pub fn with_max_workers(mut self, workers: usize) -> Self {
        self.max_workers = workers;
        self
    }

    /// Enables or disables resuming from existing records.
    pub fn with_resume(mut self, resume: bool) -> Self {
        self.resume = resume;
        self
    }

    /// Enables or disables edge export.
    pub fn with_export_edges(mut self, export: bool) -> Self {
        self.export_edges = export;
        self
    }

    /// Sets the loader options.
    pub fn with_loader(mut self, loader: LoaderConfig) -> Self {
        self.loader = loader;
        self
    }

    /// Checks the configuration for values the runner cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for zero Karger restarts or zero workers.
    pub fn validate(&self) -> Result<()> {
        if self.karger_restarts == 0 {
            return Err(Error::Config("karger_restarts must be at least 1".into()));
        }
        if self.max_workers == 0 {
            return Err(Error::Config("max_workers must be at least 1".into()));
        }
        Ok(())
    }

    /// Karger parameters for this run.
    pub fn karger_config(&self) -> KargerConfig {
        let config = KargerConfig::default().with_restarts(self.karger_restarts);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }

    /// Loader options with the run seed applied.
    ///
    /// The run seed takes precedence over a seed set on the loader options.
    pub fn loader_config(&self) -> LoaderConfig {
        match self.seed {
            Some(seed) => self.loader.clone().with_seed(seed),
            None => self.loader.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BenchConfig::default();
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.output_dir, PathBuf::from("results"));
        assert_eq!(config.algorithms, AlgorithmKind::ALL.to_vec());
        assert_eq!(config.karger_restarts, 5);
        assert_eq!(config.max_workers, 4);
        assert!(!config.resume);
        assert!(!config.export_edges);
        assert!(config.loader.largest_component_only);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zeroes() {
        let err = BenchConfig::default()
            .with_karger_restarts(0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let err = BenchConfig::default()
            .with_max_workers(0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_seed_flows_to_loader_and_karger() {
        let config = BenchConfig::default()
            .with_karger_restarts(9)
            .with_loader(LoaderConfig::default().with_seed(1))
            .with_seed(7);

        let karger = config.karger_config();
        assert_eq!(karger.restarts, 9);
        assert_eq!(karger.seed, Some(7));
        assert_eq!(config.loader_config().seed, Some(7));
    }

    #[test]
    fn test_unseeded_keeps_loader_seed() {
        let config = BenchConfig::default().with_loader(LoaderConfig::default().with_seed(3));
        assert_eq!(config.loader_config().seed, Some(3));
        assert_eq!(config.karger_config().seed, None);
    }
}
