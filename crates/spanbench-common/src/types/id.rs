//! Identifier types for vertices and edges.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a vertex.
///
/// Vertices are compact: a graph with `n` vertices uses exactly the ids
/// `0..n`, so algorithms index flat arrays with them directly.
pub type VertexId = usize;

/// Identifier of an edge within a single graph.
///
/// Edge ids are assigned in insertion order starting at zero. They are
/// only meaningful for the graph that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(u32);

impl EdgeId {
    /// Creates an edge id from its insertion index.
    #[inline]
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Returns the insertion index as a `usize` for slice access.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

impl From<u32> for EdgeId {
    fn from(index: u32) -> Self {
        Self(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_id_basics() {
        let id = EdgeId::new(42);
        assert_eq!(id.index(), 42);
        assert_eq!(id.to_string(), "e42");
    }

    #[test]
    fn test_edge_id_ordering() {
        assert!(EdgeId::new(1) < EdgeId::new(2));
        assert_eq!(EdgeId::from(7), EdgeId::new(7));
    }

    #[test]
    fn test_edge_id_serializes_as_number() {
        let json = serde_json::to_string(&EdgeId::new(3)).unwrap();
        assert_eq!(json, "3");
    }
}
