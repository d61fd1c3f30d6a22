use std::hash::BuildHasherDefault;
use indexmap::IndexMap;
use rustc_hash::FxHasher;


/// Insertion-ordered map hashed with rustc_hash
/// Iteration follows first insertion, so A* bookkeeping and report grouping come out
/// in the same order on every run
pub type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;
