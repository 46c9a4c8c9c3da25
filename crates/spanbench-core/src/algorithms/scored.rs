//! Min-heap ordering for weighted candidates.

use std::cmp::Ordering;

use spanbench_common::types::Weight;

/// A `(weight, payload)` pair ordered so that [`std::collections::BinaryHeap`]
/// pops the smallest weight first.
///
/// Weights compare with [`f64::total_cmp`]; equal weights fall back to the
/// payload, again smallest first, which makes pops deterministic.
#[derive(Debug, Clone, Copy)]
pub struct MinScored<T>(pub Weight, pub T);

impl<T: Ord> PartialEq for MinScored<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: Ord> Eq for MinScored<T> {}

impl<T: Ord> PartialOrd for MinScored<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Ord> Ord for MinScored<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .0
            .total_cmp(&self.0)
            .then_with(|| other.1.cmp(&self.1))
    }
}
