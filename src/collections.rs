use std::hash::BuildHasherDefault;
use indexmap::IndexMap;
use rustc_hash::FxHasher;


/// Insertion ordered map with fast hashing
/// Search overlays use it so iteration follows the participating node order
pub(crate) type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;

/// Empty map sized for `capacity` entries
pub(crate) fn fx_index_map<K, V>(capacity: usize) -> FxIndexMap<K, V> {
    FxIndexMap::with_capacity_and_hasher(capacity, BuildHasherDefault::default())
}
