use std::hash::BuildHasherDefault;
use indexmap::IndexMap;
use rustc_hash::FxHasher;


/// Insertion-ordered map with rustc_hash for fast hashing
/// Iteration order is deterministic, which keeps vertex enumeration stable
pub(crate) type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;

/// Unordered map with rustc_hash for fast hashing
pub(crate) type FxHashMap<K, V> = rustc_hash::FxHashMap<K, V>;
