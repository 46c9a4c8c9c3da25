//! Index structures over graph topology.

pub mod adjacency;

pub use adjacency::Adjacency;
