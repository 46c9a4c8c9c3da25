//! # spanbench-common
//!
//! Foundation layer for Spanbench: types, errors, and utilities.
//!
//! This crate provides the building blocks shared by every other Spanbench
//! crate. It has no internal dependencies and should be kept minimal.
//!
//! ## Modules
//!
//! - [`types`] - Core type definitions (VertexId, EdgeId, Weight, WeightedEdge)
//! - [`utils`] - Utility functions and helpers (hashing, errors)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod types;
pub mod utils;

// Re-export commonly used types at crate root
pub use types::{EdgeId, VertexId, Weight, WeightedEdge};
pub use utils::error::{Error, Result};
