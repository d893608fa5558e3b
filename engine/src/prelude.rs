pub use crate::{
    Action, ConfigurationError, Entity, Game, ItemKind, Msg, Result,
    Scenario,
};

/// Map with an efficient hash function.
pub use rustc_hash::FxHashMap as HashMap;

type DefaultHashBuilder = std::hash::BuildHasherDefault<rustc_hash::FxHasher>;

/// Insertion order preserving map with an efficient hash function.
pub type IndexMap<K, V> = indexmap::IndexMap<K, V, DefaultHashBuilder>;

/// Insertion order preserving set with an efficient hash function.
pub type IndexSet<V> = indexmap::IndexSet<V, DefaultHashBuilder>;
