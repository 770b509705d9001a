//! Hash map and set aliases selected by the `fxhash` and `ahash` features.
//!
//! `fxhash` takes precedence when both are enabled. The map backs the
//! decorator caches and the set backs the collection seen-sets.

#[cfg(all(feature = "decorator", feature = "fxhash"))]
pub(crate) type FastHashMap<K, V> = rustc_hash::FxHashMap<K, V>;

#[cfg(all(feature = "collection", feature = "fxhash"))]
pub(crate) type FastHashSet<T> = rustc_hash::FxHashSet<T>;

#[cfg(all(feature = "decorator", feature = "ahash", not(feature = "fxhash")))]
pub(crate) type FastHashMap<K, V> = ahash::AHashMap<K, V>;

#[cfg(all(feature = "collection", feature = "ahash", not(feature = "fxhash")))]
pub(crate) type FastHashSet<T> = ahash::AHashSet<T>;

#[cfg(all(feature = "decorator", not(any(feature = "fxhash", feature = "ahash"))))]
pub(crate) type FastHashMap<K, V> = std::collections::HashMap<K, V>;

#[cfg(all(feature = "collection", not(any(feature = "fxhash", feature = "ahash"))))]
pub(crate) type FastHashSet<T> = std::collections::HashSet<T>;
