//! Core type definitions for Spanbench.
//!
//! - Identifier types ([`VertexId`], [`EdgeId`])
//! - Edge types ([`Weight`], [`WeightedEdge`])

mod edge;
mod id;

pub use edge::{Weight, WeightedEdge, canonical};
pub use id::{EdgeId, VertexId};
