//! # spanbench-engine
//!
//! Runs the algorithms over a directory of datasets and records how long
//! each one took.
//!
//! ## Modules
//!
//! - [`config`] - Benchmark configuration
//! - [`progress`] - Progress hooks for front ends
//! - [`runner`] - The benchmark driver

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod progress;
pub mod runner;

pub use config::BenchConfig;
pub use progress::{NoProgress, ProgressSink};
pub use runner::{BenchRunner, BenchSummary, RECORDS_FILE, export_path, run_single};
