//! Graph file loading.
//!
//! Two plain-text dialects are understood, both one edge per line:
//!
//! | Extension | Format | Labels | Header |
//! |-----------|--------|--------|--------|
//! | `.edges` | [`GraphFormat::EdgeList`] | 0-indexed | none |
//! | `.mtx` | [`GraphFormat::MatrixMarket`] | 1-indexed | size line |
//!
//! Lines starting with `#` or `%` are comments. Every file is normalized
//! into a [`WeightedGraph`] with dense vertex ids; see [`parse_graph`] for
//! the rules.

mod format;
mod parse;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use spanbench_common::utils::error::Result;
use spanbench_core::WeightedGraph;

pub use format::GraphFormat;
pub use parse::{RANDOM_WEIGHT_MAX, parse_graph};

/// How input files are normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Seed for weights drawn when a line has none. `None` uses entropy.
    pub seed: Option<u64>,
    /// Keep repeated vertex pairs as parallel edges instead of merging them.
    pub keep_parallel_edges: bool,
    /// Project disconnected graphs onto their largest component.
    pub largest_component_only: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            seed: None,
            keep_parallel_edges: false,
            largest_component_only: true,
        }
    }
}

impl LoaderConfig {
    /// Sets the random-weight seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Keeps or merges repeated vertex pairs.
    pub fn with_parallel_edges(mut self, keep: bool) -> Self {
        self.keep_parallel_edges = keep;
        self
    }

    /// Enables or disables the largest-component projection.
    pub fn with_largest_component_only(mut self, enabled: bool) -> Self {
        self.largest_component_only = enabled;
        self
    }
}

/// What normalization did to a file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadReport {
    /// Non-comment, non-blank lines, header included.
    pub lines_read: usize,
    /// Distinct vertices before projection.
    pub raw_vertices: usize,
    /// Edges before projection.
    pub raw_edges: usize,
    /// Edges whose weight was drawn at random.
    pub random_weights: usize,
    /// Negative weights replaced by their absolute value.
    pub negative_weights: usize,
    /// Self-loop lines dropped.
    pub self_loops: usize,
    /// Repeated pairs merged into an earlier edge.
    pub duplicate_edges: usize,
    /// Connected components before projection.
    pub components: usize,
    /// Vertices removed by the projection.
    pub dropped_vertices: usize,
}

/// A graph read from disk.
#[derive(Debug, Clone)]
pub struct LoadedGraph {
    /// File stem, used as the dataset name.
    pub name: String,
    /// Source path.
    pub path: PathBuf,
    /// Detected dialect.
    pub format: GraphFormat,
    /// The normalized graph.
    pub graph: WeightedGraph,
    /// Normalization statistics.
    pub report: LoadReport,
}

/// Reads and normalizes the graph at `path`.
///
/// # Errors
///
/// Returns an error if the extension is not supported, the file cannot be
/// read, or a line fails to parse.
pub fn load_graph(path: impl AsRef<Path>, config: &LoaderConfig) -> Result<LoadedGraph> {
    let path = path.as_ref();
    let format = GraphFormat::from_path(path)?;
    let name = dataset_name(path);

    let _span = tracing::info_span!("load_graph", dataset = %name).entered();
    let text = fs::read_to_string(path)?;
    let (graph, report) = parse_graph(&text, format, config)?;

    tracing::info!(
        %format,
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "graph loaded"
    );

    Ok(LoadedGraph {
        name,
        path: path.to_path_buf(),
        format,
        graph,
        report,
    })
}

/// Lists the supported graph files directly inside `dir`, smallest first.
///
/// Ties on size are broken by file name, so the order is stable across
/// runs.
///
/// # Errors
///
/// Returns an error if the directory cannot be read.
pub fn dataset_files(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir.as_ref())? {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type()?.is_file() || GraphFormat::from_path(&path).is_err() {
            continue;
        }
        files.push((entry.metadata()?.len(), path));
    }
    files.sort();
    Ok(files.into_iter().map(|(_, path)| path).collect())
}

/// Returns the file stem as a dataset name.
pub fn dataset_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use spanbench_common::Error;
    use tempfile::tempdir;

    #[test]
    fn test_load_edge_list() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ring.edges");
        fs::write(&path, "0 1 1.0\n1 2 2.0\n2 0 3.0\n").unwrap();

        let loaded = load_graph(&path, &LoaderConfig::default()).unwrap();
        assert_eq!(loaded.name, "ring");
        assert_eq!(loaded.format, GraphFormat::EdgeList);
        assert_eq!(loaded.graph.vertex_count(), 3);
        assert_eq!(loaded.graph.edge_count(), 3);
        assert_eq!(loaded.report.lines_read, 3);
    }

    #[test]
    fn test_load_matrix_market() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tiny.mtx");
        fs::write(&path, "%%MatrixMarket matrix coordinate real\n2 2 1\n1 2 7.5\n").unwrap();

        let loaded = load_graph(&path, &LoaderConfig::default()).unwrap();
        assert_eq!(loaded.name, "tiny");
        assert_eq!(loaded.graph.weight(0, 1), Some(7.5));
    }

    #[test]
    fn test_load_rejects_unknown_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("graph.csv");
        fs::write(&path, "0,1\n").unwrap();

        let err = load_graph(&path, &LoaderConfig::default()).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = load_graph(dir.path().join("absent.edges"), &LoaderConfig::default())
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_dataset_files_sorted_by_size() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("big.edges"), "0 1 1\n1 2 1\n2 3 1\n").unwrap();
        fs::write(dir.path().join("small.mtx"), "2 2 1\n1 2 1\n").unwrap();
        fs::write(dir.path().join("b.edges"), "0 1 1\n").unwrap();
        fs::write(dir.path().join("a.edges"), "0 1 1\n").unwrap();
        fs::write(dir.path().join("readme.txt"), "").unwrap();
        fs::create_dir(dir.path().join("nested.edges")).unwrap();

        let names: Vec<String> = dataset_files(dir.path())
            .unwrap()
            .iter()
            .map(|path| dataset_name(path))
            .collect();
        assert_eq!(names, vec!["a", "b", "small", "big"]);
    }

    #[test]
    fn test_dataset_files_missing_dir() {
        let dir = tempdir().unwrap();
        assert!(dataset_files(dir.path().join("nope")).is_err());
    }

    #[test]
    fn test_config_builders() {
        let config = LoaderConfig::default()
            .with_seed(3)
            .with_parallel_edges(true)
            .with_largest_component_only(false);
        assert_eq!(config.seed, Some(3));
        assert!(config.keep_parallel_edges);
        assert!(!config.largest_component_only);
    }
}
