//! A hash-map with a fixed, platform-independent hasher.
//!
//! Voxel keys are small integer triples inserted once per surface sample, so the
//! map must hash them without allocating and must iterate in the same order on
//! every run and every target for equal insertion sequences.

use super::fx_hasher::FxHasher32;
use core::hash::BuildHasherDefault;

pub use hashbrown::hash_map::Entry;

/// Hashmap using [`hashbrown::HashMap`] and the deterministic [`FxHasher32`].
pub type HashMap<K, V> = hashbrown::hash_map::HashMap<K, V, BuildHasherDefault<FxHasher32>>;

/// Hashset using [`hashbrown::HashSet`] and the deterministic [`FxHasher32`].
pub type HashSet<K> = hashbrown::hash_set::HashSet<K, BuildHasherDefault<FxHasher32>>;

/// Creates an empty [`HashMap`] able to hold at least `capacity` elements.
pub fn with_capacity<K, V>(capacity: usize) -> HashMap<K, V> {
    HashMap::with_capacity_and_hasher(capacity, Default::default())
}
