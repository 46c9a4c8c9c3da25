//! Graph info command.

use std::path::Path;

use anyhow::Result;
use serde::Serialize;
use spanbench_adapters::{LoadReport, LoaderConfig, load_graph};
use spanbench_common::types::Weight;

use crate::OutputFormat;
use crate::output::{self, Format};

/// Information about a loaded graph.
#[derive(Serialize)]
struct GraphInfoOutput {
    dataset: String,
    path: String,
    format: String,
    nodes: usize,
    edges: usize,
    total_weight: Weight,
    min_degree: usize,
    max_degree: usize,
    avg_degree: f64,
    connected: bool,
    report: LoadReport,
}

/// Run the info command.
pub fn run(path: &Path, seed: Option<u64>, format: OutputFormat, quiet: bool) -> Result<()> {
    let mut loader = LoaderConfig::default();
    if let Some(seed) = seed {
        loader = loader.with_seed(seed);
    }
    let loaded = load_graph(path, &loader)?;
    let graph = &loaded.graph;

    let degrees = graph.vertices().map(|v| graph.degree(v));
    let n = graph.vertex_count();
    let output = GraphInfoOutput {
        dataset: loaded.name.clone(),
        path: loaded.path.display().to_string(),
        format: loaded.format.to_string(),
        nodes: n,
        edges: graph.edge_count(),
        total_weight: graph.total_weight(),
        min_degree: degrees.clone().min().unwrap_or(0),
        max_degree: degrees.max().unwrap_or(0),
        avg_degree: if n == 0 {
            0.0
        } else {
            2.0 * graph.edge_count() as f64 / n as f64
        },
        connected: graph.is_connected(),
        report: loaded.report,
    };

    let fmt: Format = format.into();
    match fmt {
        Format::Json => {
            if !quiet {
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
        }
        Format::Table => {
            let report = &output.report;
            let items = vec![
                ("Dataset", output.dataset.clone()),
                ("Path", output.path.clone()),
                ("Format", output.format.clone()),
                ("Nodes", output.nodes.to_string()),
                ("Edges", output.edges.to_string()),
                ("Total weight", format!("{:.4}", output.total_weight)),
                (
                    "Degree (min/avg/max)",
                    format!(
                        "{} / {:.2} / {}",
                        output.min_degree, output.avg_degree, output.max_degree
                    ),
                ),
                ("Connected", output.connected.to_string()),
                ("Lines read", report.lines_read.to_string()),
                ("Raw nodes", report.raw_vertices.to_string()),
                ("Raw edges", report.raw_edges.to_string()),
                ("Components", report.components.to_string()),
                ("Dropped nodes", report.dropped_vertices.to_string()),
                ("Random weights", report.random_weights.to_string()),
                ("Negative weights", report.negative_weights.to_string()),
                ("Self-loops", report.self_loops.to_string()),
                ("Duplicate edges", report.duplicate_edges.to_string()),
            ];
            output::print_key_value_table(&items, quiet);
        }
    }

    Ok(())
}
