//! Full benchmark command.

use std::path::{Path, PathBuf};

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use spanbench_adapters::LoadedGraph;
use spanbench_common::Error;
use spanbench_core::{AlgorithmKind, AlgorithmResult};
use spanbench_engine::{BenchConfig, BenchRunner, ProgressSink};

use crate::OutputFormat;
use crate::output::{self, Format};

/// Arguments of the run command.
pub struct RunArgs {
    pub data_dir: PathBuf,
    pub output: PathBuf,
    pub algorithms: Vec<AlgorithmKind>,
    pub restarts: usize,
    pub seed: Option<u64>,
    pub workers: usize,
    pub resume: bool,
    pub export_edges: bool,
}

/// Progress bar over datasets, with one line per finished run.
struct BarProgress {
    bar: ProgressBar,
}

impl BarProgress {
    fn new(hidden: bool) -> Result<Self> {
        let bar = if hidden {
            ProgressBar::hidden()
        } else {
            ProgressBar::new(0)
        };
        bar.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                )?
                .progress_chars("#>-"),
        );
        Ok(Self { bar })
    }
}

impl ProgressSink for BarProgress {
    fn dataset_started(&self, name: &str, index: usize, total: usize) {
        self.bar.set_length(total as u64);
        self.bar.set_position(index as u64);
        self.bar.set_message(format!("loading {name}"));
    }

    fn graph_loaded(&self, loaded: &LoadedGraph) {
        self.bar.set_message(format!(
            "{} ({} nodes, {} edges)",
            loaded.name,
            loaded.graph.vertex_count(),
            loaded.graph.edge_count()
        ));
    }

    fn dataset_failed(&self, path: &Path, error: &Error) {
        self.bar.println(format!("✗ {}: {error}", path.display()));
        self.bar.inc(1);
    }

    fn algorithm_finished(&self, dataset: &str, kind: AlgorithmKind, result: &AlgorithmResult) {
        self.bar.println(format!(
            "  {dataset:<24} {:<15} {:>12}  cost {:<14.4} {}",
            kind.name(),
            output::seconds(result.execution_time),
            result.total_cost,
            if result.is_valid { "valid" } else { "INVALID" }
        ));
    }

    fn algorithm_skipped(&self, dataset: &str, kind: AlgorithmKind) {
        self.bar.println(format!("  {dataset:<24} {:<15} skipped", kind.name()));
    }

    fn dataset_finished(&self, _dataset: &str) {
        self.bar.inc(1);
    }
}

/// Run the benchmark command.
pub fn run(args: RunArgs, format: OutputFormat, quiet: bool) -> Result<()> {
    let mut config = BenchConfig::default()
        .with_data_dir(args.data_dir)
        .with_output_dir(args.output)
        .with_algorithms(args.algorithms)
        .with_karger_restarts(args.restarts)
        .with_max_workers(args.workers)
        .with_resume(args.resume)
        .with_export_edges(args.export_edges);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let fmt: Format = format.into();
    let runner = BenchRunner::new(config)?;
    let progress = BarProgress::new(quiet || matches!(fmt, Format::Json))?;
    let summary = runner.run(&progress)?;
    progress.bar.finish_and_clear();

    match fmt {
        Format::Json => {
            if !quiet {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            }
        }
        Format::Table => {
            let items = vec![
                ("Datasets", summary.datasets.to_string()),
                ("Failed", summary.failed.to_string()),
                ("Runs", summary.runs.to_string()),
                ("Skipped", summary.skipped.to_string()),
                ("Records", summary.records_path.display().to_string()),
            ];
            output::print_key_value_table(&items, quiet);
            if summary.failed == 0 {
                output::success("Benchmark complete", quiet);
            } else {
                output::status(
                    &format!("Benchmark complete, {} dataset(s) failed to load", summary.failed),
                    quiet,
                );
            }
        }
    }

    Ok(())
}
