//! Graph representations.
//!
//! - [`WeightedGraph`] - the immutable input graph shared by all algorithms
//! - [`ContractionGraph`] - a private, mutable working copy for edge contraction

mod contraction;
mod weighted;

pub use contraction::ContractionGraph;
pub use weighted::WeightedGraph;
