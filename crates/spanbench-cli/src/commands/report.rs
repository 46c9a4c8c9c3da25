//! Timing report command.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Result;
use comfy_table::Cell;
use spanbench_adapters::{RecordStore, TimingRecord};

use crate::OutputFormat;
use crate::output::{self, Format};

/// Run the report command.
pub fn run(path: &Path, format: OutputFormat, quiet: bool) -> Result<()> {
    anyhow::ensure!(path.exists(), "no record file at {}", path.display());
    let store = RecordStore::open(path)?;
    let groups = store.by_algorithm();

    let fmt: Format = format.into();
    match fmt {
        Format::Json => {
            if !quiet {
                let by_slug: BTreeMap<&str, &Vec<&TimingRecord>> = groups
                    .iter()
                    .map(|(kind, records)| (kind.slug(), records))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&by_slug)?);
            }
        }
        Format::Table => {
            if groups.is_empty() {
                output::status("No records", quiet);
                return Ok(());
            }
            for (kind, records) in &groups {
                output::status(&format!("{} ({})", kind.name(), kind.complexity()), quiet);
                let mut table = output::create_table();
                output::add_header(
                    &mut table,
                    &["Dataset", "Nodes", "Edges", "Time", "Cost", "Valid"],
                );
                for record in records {
                    table.add_row(vec![
                        Cell::new(&record.dataset),
                        Cell::new(record.nodes),
                        Cell::new(record.edges),
                        Cell::new(output::seconds(record.execution_time)),
                        Cell::new(format!("{:.4}", record.total_cost)),
                        output::validity_cell(record.is_valid),
                    ]);
                }
                if !quiet {
                    println!("{table}");
                }
            }
        }
    }

    Ok(())
}
