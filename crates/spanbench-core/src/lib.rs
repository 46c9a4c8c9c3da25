//! # spanbench-core
//!
//! Core layer for Spanbench: the weighted graph, the disjoint-set forest,
//! the spanning-tree validator, and the five algorithms under comparison.
//!
//! This crate depends only on `spanbench-common`. Every algorithm takes the
//! graph by shared reference and never mutates it, so a caller may run any
//! number of them concurrently over the same graph.
//!
//! ## Modules
//!
//! - [`graph`] - The immutable [`WeightedGraph`] and Karger's [`ContractionGraph`]
//! - [`index`] - Adjacency index shared by the graph types
//! - [`union_find`] - [`DisjointSet`] with path compression and union by rank
//! - [`validate`] - Spanning-tree validation
//! - [`algorithms`] - Kruskal, Prim, Borůvka, Reverse-Delete, Karger
//! - [`result`] - [`AlgorithmResult`], the common output record

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algorithms;
pub mod graph;
pub mod index;
pub mod result;
pub mod union_find;
pub mod validate;

// Re-export commonly used types
pub use algorithms::{
    AlgorithmKind, DEFAULT_RESTARTS, KargerConfig, boruvka, karger, kruskal, prim, reverse_delete,
};
pub use graph::{ContractionGraph, WeightedGraph};
pub use result::AlgorithmResult;
pub use union_find::DisjointSet;
pub use validate::{TreeValidation, validate_spanning_tree};
