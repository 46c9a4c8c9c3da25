//! Persistent timing records.
//!
//! A benchmark run appends one [`TimingRecord`] per algorithm and dataset.
//! The store is a single pretty-printed JSON array on disk, rewritten in
//! full on every [`RecordStore::save`] through a temporary file and a
//! rename, so a crash mid-write leaves the previous contents intact.

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use spanbench_common::types::Weight;
use spanbench_common::utils::error::Result;
use spanbench_core::{AlgorithmKind, AlgorithmResult, WeightedGraph};

/// One timed algorithm run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingRecord {
    /// Dataset name (the input file stem).
    pub dataset: String,
    /// Algorithm that ran.
    pub algorithm: AlgorithmKind,
    /// Vertex count of the graph the algorithm saw.
    pub nodes: usize,
    /// Edge count of the graph the algorithm saw.
    pub edges: usize,
    /// Wall-clock seconds.
    pub execution_time: f64,
    /// Tree weight or cut size.
    pub total_cost: Weight,
    /// Whether the run succeeded.
    pub is_valid: bool,
}

impl TimingRecord {
    /// Builds a record from a finished run over `graph`.
    pub fn from_result(
        dataset: impl Into<String>,
        algorithm: AlgorithmKind,
        graph: &WeightedGraph,
        result: &AlgorithmResult,
    ) -> Self {
        Self {
            dataset: dataset.into(),
            algorithm,
            nodes: graph.vertex_count(),
            edges: graph.edge_count(),
            execution_time: result.execution_time,
            total_cost: result.total_cost,
            is_valid: result.is_valid,
        }
    }
}

/// The on-disk collection of timing records.
#[derive(Debug)]
pub struct RecordStore {
    path: PathBuf,
    records: Vec<TimingRecord>,
}

impl RecordStore {
    /// Opens the store at `path`.
    ///
    /// A missing file gives an empty store. A file that does not parse is
    /// logged and treated as empty; it is overwritten on the next save.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let records = match fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(records) => records,
                Err(err) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %err,
                        "corrupt record file, starting empty"
                    );
                    Vec::new()
                }
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(err) => return Err(err.into()),
        };

        tracing::debug!(path = %path.display(), records = records.len(), "record store opened");
        Ok(Self { path, records })
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns all records in insertion order.
    pub fn records(&self) -> &[TimingRecord] {
        &self.records
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns true if `algorithm` already ran on a graph of this size.
    pub fn contains(&self, algorithm: AlgorithmKind, nodes: usize, edges: usize) -> bool {
        self.records
            .iter()
            .any(|r| r.algorithm == algorithm && r.nodes == nodes && r.edges == edges)
    }

    /// Adds `record`, replacing any earlier record for the same dataset and
    /// algorithm.
    pub fn insert(&mut self, record: TimingRecord) {
        match self
            .records
            .iter_mut()
            .find(|r| r.dataset == record.dataset && r.algorithm == record.algorithm)
        {
            Some(existing) => *existing = record,
            None => self.records.push(record),
        }
    }

    /// Writes the store to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or any filesystem step fails.
    pub fn save(&self) -> Result<()> {
        let data = serde_json::to_vec_pretty(&self.records)?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        let mut file = fs::File::create(&tmp)?;
        file.write_all(&data)?;
        file.sync_all()?;
        fs::rename(&tmp, &self.path)?;

        tracing::debug!(path = %self.path.display(), records = self.records.len(), "record store saved");
        Ok(())
    }

    /// Groups records per algorithm, each group ordered by node count.
    pub fn by_algorithm(&self) -> BTreeMap<AlgorithmKind, Vec<&TimingRecord>> {
        let mut groups: BTreeMap<AlgorithmKind, Vec<&TimingRecord>> = BTreeMap::new();
        for record in &self.records {
            groups.entry(record.algorithm).or_default().push(record);
        }
        for group in groups.values_mut() {
            group.sort_by_key(|r| (r.nodes, r.edges));
        }
        groups
    }
}
