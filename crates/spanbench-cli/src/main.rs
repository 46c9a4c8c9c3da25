//! Spanbench CLI - run and inspect spanning-tree and min-cut benchmarks.
//!
//! `run` drives the full benchmark over a data directory; `solve` and
//! `info` work on a single graph file; `report` reads back the stored
//! timing records.

mod commands;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use spanbench_core::{AlgorithmKind, DEFAULT_RESTARTS};
use spanbench_engine::config::DEFAULT_MAX_WORKERS;
use std::path::PathBuf;

/// Spanbench benchmark tool.
///
/// Compares Kruskal, Prim, Borůvka and Reverse-Delete minimum spanning
/// trees and Karger's randomized min-cut on real-world graphs.
#[derive(Parser)]
#[command(name = "spanbench")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, global = true, default_value = "table")]
    format: OutputFormat,

    /// Suppress progress and info messages
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Enable verbose debug logging
    #[arg(long, short, global = true)]
    verbose: bool,
}

/// Output format options.
#[derive(Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// Machine-readable JSON format
    Json,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Benchmark every graph in a directory
    Run {
        /// Directory of .edges and .mtx files
        #[arg(default_value = "data")]
        data_dir: PathBuf,

        /// Output directory for records and exports
        #[arg(short, long, default_value = "results")]
        output: PathBuf,

        /// Algorithms to run (repeatable; default all)
        #[arg(short, long = "algorithm", value_parser = parse_algorithm)]
        algorithms: Vec<AlgorithmKind>,

        /// Karger trials per run
        #[arg(long, default_value_t = DEFAULT_RESTARTS)]
        restarts: usize,

        /// Seed for random weights and Karger
        #[arg(long)]
        seed: Option<u64>,

        /// Worker threads per dataset
        #[arg(long, default_value_t = DEFAULT_MAX_WORKERS)]
        workers: usize,

        /// Skip runs that already have a record
        #[arg(long)]
        resume: bool,

        /// Write every result's edges as JSON
        #[arg(long)]
        export_edges: bool,
    },

    /// Run algorithms on a single graph file
    Solve {
        /// Graph file (.edges or .mtx)
        file: PathBuf,

        /// Algorithms to run (repeatable; default all)
        #[arg(short, long = "algorithm", value_parser = parse_algorithm)]
        algorithms: Vec<AlgorithmKind>,

        /// Karger trials
        #[arg(long, default_value_t = DEFAULT_RESTARTS)]
        restarts: usize,

        /// Seed for random weights and Karger
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Display graph statistics and what loading normalized
    Info {
        /// Graph file (.edges or .mtx)
        file: PathBuf,

        /// Seed for random weights
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show stored timing records per algorithm
    Report {
        /// Record file written by `run`
        records: PathBuf,
    },
}

fn parse_algorithm(s: &str) -> Result<AlgorithmKind, String> {
    s.parse().map_err(|e: spanbench_common::Error| e.to_string())
}

/// The selected algorithms, or all of them when none were named.
fn selected(algorithms: Vec<AlgorithmKind>) -> Vec<AlgorithmKind> {
    if algorithms.is_empty() {
        AlgorithmKind::ALL.to_vec()
    } else {
        algorithms
    }
}

fn main() {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    } else if !cli.quiet {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_writer(std::io::stderr)
            .init();
    }

    let result = match cli.command {
        Commands::Run {
            data_dir,
            output,
            algorithms,
            restarts,
            seed,
            workers,
            resume,
            export_edges,
        } => commands::run::run(
            commands::run::RunArgs {
                data_dir,
                output,
                algorithms: selected(algorithms),
                restarts,
                seed,
                workers,
                resume,
                export_edges,
            },
            cli.format,
            cli.quiet,
        ),
        Commands::Solve {
            file,
            algorithms,
            restarts,
            seed,
        } => commands::solve::run(
            &file,
            &selected(algorithms),
            restarts,
            seed,
            cli.format,
            cli.quiet,
        ),
        Commands::Info { file, seed } => commands::info::run(&file, seed, cli.format, cli.quiet),
        Commands::Report { records } => commands::report::run(&records, cli.format, cli.quiet),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
