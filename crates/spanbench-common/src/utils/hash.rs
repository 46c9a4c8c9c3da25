//! Hash map aliases with a fixed-key hasher.
//!
//! `AHasher::default()` uses constant keys, so iteration order depends only
//! on the insertion sequence. Algorithms that enumerate hashed adjacency
//! therefore stay reproducible for a given seed and input.

use std::hash::BuildHasherDefault;

use ahash::AHasher;

/// Fixed-key build hasher.
pub type FxBuildHasher = BuildHasherDefault<AHasher>;

/// Hash map with the fixed-key hasher.
pub type FxHashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

/// Insertion-ordered map with the fixed-key hasher.
pub type FxIndexMap<K, V> = indexmap::IndexMap<K, V, FxBuildHasher>;
