//! Single-file solve command.

use std::path::Path;

use anyhow::Result;
use comfy_table::Cell;
use serde::Serialize;
use spanbench_adapters::{LoaderConfig, load_graph};
use spanbench_common::types::Weight;
use spanbench_core::{AlgorithmKind, KargerConfig};
use spanbench_engine::run_single;

use crate::OutputFormat;
use crate::output::{self, Format};

/// One algorithm's outcome on the file.
#[derive(Serialize)]
struct SolveOutput {
    algorithm: AlgorithmKind,
    complexity: &'static str,
    is_valid: bool,
    total_cost: Weight,
    edge_count: usize,
    execution_time: f64,
}

/// Run the solve command.
pub fn run(
    path: &Path,
    algorithms: &[AlgorithmKind],
    restarts: usize,
    seed: Option<u64>,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    anyhow::ensure!(restarts > 0, "--restarts must be at least 1");

    let mut loader = LoaderConfig::default();
    let mut karger = KargerConfig::default().with_restarts(restarts);
    if let Some(seed) = seed {
        loader = loader.with_seed(seed);
        karger = karger.with_seed(seed);
    }

    let loaded = load_graph(path, &loader)?;
    let rows: Vec<SolveOutput> = algorithms
        .iter()
        .map(|&kind| {
            let result = run_single(&loaded.graph, kind, &karger);
            SolveOutput {
                algorithm: kind,
                complexity: kind.complexity(),
                is_valid: result.is_valid,
                total_cost: result.total_cost,
                edge_count: result.edge_count(),
                execution_time: result.execution_time,
            }
        })
        .collect();

    let fmt: Format = format.into();
    match fmt {
        Format::Json => {
            if !quiet {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            }
        }
        Format::Table => {
            output::status(
                &format!(
                    "{}: {} nodes, {} edges",
                    loaded.name,
                    loaded.graph.vertex_count(),
                    loaded.graph.edge_count()
                ),
                quiet,
            );
            let mut table = output::create_table();
            output::add_header(
                &mut table,
                &["Algorithm", "Complexity", "Valid", "Cost", "Edges", "Time"],
            );
            for row in &rows {
                table.add_row(vec![
                    Cell::new(row.algorithm.name()),
                    Cell::new(row.complexity),
                    output::validity_cell(row.is_valid),
                    Cell::new(format!("{:.4}", row.total_cost)),
                    Cell::new(row.edge_count),
                    Cell::new(output::seconds(row.execution_time)),
                ]);
            }
            if !quiet {
                println!("{table}");
            }
        }
    }

    Ok(())
}
