//! # spanbench-adapters
//!
//! Adapters layer for Spanbench: everything that touches the filesystem.
//!
//! ## Modules
//!
//! - [`loader`] - Edge-list and Matrix Market readers that normalize input
//!   into a connected [`WeightedGraph`](spanbench_core::WeightedGraph)
//! - [`records`] - Persistent timing records for benchmark runs

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod loader;
pub mod records;

pub use loader::{GraphFormat, LoadReport, LoadedGraph, LoaderConfig, dataset_files, load_graph};
pub use records::{RecordStore, TimingRecord};
