//! Disjoint-set forest with path compression and union by rank.

use spanbench_common::types::VertexId;

/// A partition of `0..n` under merge-and-query.
///
/// `find` compresses the path it walks so every visited node points
/// straight at the root. `union` hangs the lower-rank root under the
/// higher-rank one; on equal ranks the root of the first argument wins and
/// its rank grows by one. Both run in amortized inverse-Ackermann time.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<VertexId>,
    rank: Vec<u32>,
    components: usize,
}

impl DisjointSet {
    /// Creates `n` singleton sets.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            components: n,
        }
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns true if the forest has no elements.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of disjoint sets.
    pub fn component_count(&self) -> usize {
        self.components
    }

    /// Returns the root of the set containing `x`.
    ///
    /// # Panics
    ///
    /// Panics if `x` is out of range.
    pub fn find(&mut self, x: VertexId) -> VertexId {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    /// Merges the sets containing `x` and `y`.
    ///
    /// Returns false if they were already the same set.
    pub fn union(&mut self, x: VertexId, y: VertexId) -> bool {
        let mut rx = self.find(x);
        let mut ry = self.find(y);
        if rx == ry {
            return false;
        }

        if self.rank[rx] < self.rank[ry] {
            std::mem::swap(&mut rx, &mut ry);
        }
        self.parent[ry] = rx;
        if self.rank[rx] == self.rank[ry] {
            self.rank[rx] += 1;
        }

        self.components -= 1;
        true
    }

    /// Returns true if `x` and `y` are in the same set.
    pub fn connected(&mut self, x: VertexId, y: VertexId) -> bool {
        self.find(x) == self.find(y)
    }

    /// Returns the rank of `x`'s slot. Only meaningful for roots, where it
    /// bounds the height of the tree.
    pub fn rank(&self, x: VertexId) -> u32 {
        self.rank[x]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singletons() {
        let mut ds = DisjointSet::new(4);
        assert_eq!(ds.len(), 4);
        assert_eq!(ds.component_count(), 4);
        for i in 0..4 {
            assert_eq!(ds.find(i), i);
        }
    }

    #[test]
    fn test_union_reports_merges() {
        let mut ds = DisjointSet::new(4);
        assert!(ds.union(0, 1));
        assert!(ds.union(2, 3));
        assert!(!ds.union(1, 0));
        assert!(ds.union(1, 3));
        assert!(!ds.union(0, 2));
        assert_eq!(ds.component_count(), 1);
    }

    #[test]
    fn test_equal_rank_keeps_first_root() {
        let mut ds = DisjointSet::new(2);
        ds.union(0, 1);
        assert_eq!(ds.find(1), 0);
        assert_eq!(ds.rank(0), 1);
        assert_eq!(ds.rank(1), 0);
    }

    #[test]
    fn test_lower_rank_goes_under_higher() {
        let mut ds = DisjointSet::new(3);
        ds.union(1, 2); // root 1, rank 1
        ds.union(0, 1); // rank(0) = 0 < rank(1) = 1
        assert_eq!(ds.find(0), 1);
        assert_eq!(ds.rank(1), 1);
    }

    #[test]
    fn test_path_compression() {
        let mut ds = DisjointSet::new(8);
        // Build a tree of height 3 rooted at 0
        ds.union(0, 1);
        ds.union(2, 3);
        ds.union(0, 2);
        ds.union(4, 5);
        ds.union(6, 7);
        ds.union(4, 6);
        ds.union(0, 4);

        let root = ds.find(7);
        assert_eq!(root, 0);
        // 7 now points directly at the root
        assert_eq!(ds.parent[7], 0);
        assert_eq!(ds.parent[6], 0);
    }

    #[test]
    fn test_connected() {
        let mut ds = DisjointSet::new(5);
        ds.union(0, 4);
        assert!(ds.connected(4, 0));
        assert!(!ds.connected(0, 1));
    }

    #[test]
    fn test_empty() {
        let ds = DisjointSet::new(0);
        assert!(ds.is_empty());
        assert_eq!(ds.component_count(), 0);
    }
}
