//! Merging key-mapped containers.
//!
//! [`extend`] and [`defaults`] copy entries from a list of sources onto a
//! target map. Both mutate the target in place and hand it back so calls can
//! be chained.
//!
//! # Examples
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use underbar::collection::{defaults, extend};
//!
//! let mut settings = BTreeMap::from([("color", "red")]);
//! extend(&mut settings, &[&BTreeMap::from([("size", "large")])]);
//! defaults(&mut settings, &[&BTreeMap::from([("color", "blue"), ("shape", "round")])]);
//!
//! assert_eq!(
//!     settings,
//!     BTreeMap::from([("color", "red"), ("size", "large"), ("shape", "round")])
//! );
//! ```

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use super::traverse::{Collection, each};

/// A keyed [`Collection`] whose entries can be queried and assigned.
pub trait Mapping: Collection {
    /// The owned key type stored in the container.
    type Owned;

    /// Converts the key handed out by [`Collection::each`] into an owned key.
    fn owned_key<'a>(key: Self::Key<'a>) -> Self::Owned
    where
        Self: 'a;

    /// Returns `true` if an entry for `key` exists.
    fn has_key(&self, key: &Self::Owned) -> bool;

    /// Stores `value` under `key`, replacing any previous entry.
    fn assign(&mut self, key: Self::Owned, value: Self::Item);
}

impl<K, V, S> Mapping for HashMap<K, V, S>
where
    K: Hash + Eq + Clone,
    S: BuildHasher,
{
    type Owned = K;

    #[inline]
    fn owned_key<'a>(key: &'a K) -> K
    where
        Self: 'a,
    {
        key.clone()
    }

    #[inline]
    fn has_key(&self, key: &K) -> bool {
        self.contains_key(key)
    }

    #[inline]
    fn assign(&mut self, key: K, value: V) {
        self.insert(key, value);
    }
}

impl<K, V> Mapping for BTreeMap<K, V>
where
    K: Ord + Clone,
{
    type Owned = K;

    #[inline]
    fn owned_key<'a>(key: &'a K) -> K
    where
        Self: 'a,
    {
        key.clone()
    }

    #[inline]
    fn has_key(&self, key: &K) -> bool {
        self.contains_key(key)
    }

    #[inline]
    fn assign(&mut self, key: K, value: V) {
        self.insert(key, value);
    }
}

/// Copies every entry of every source onto `target`.
///
/// Sources are applied in order, so on a key collision the later source wins.
/// Returns `target`.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use underbar::collection::extend;
///
/// let mut target = HashMap::from([("a", 1)]);
/// let first = HashMap::from([("b", 2)]);
/// let second = HashMap::from([("b", 3), ("c", 4)]);
///
/// extend(&mut target, &[&first, &second]);
/// assert_eq!(target, HashMap::from([("a", 1), ("b", 3), ("c", 4)]));
/// ```
pub fn extend<'t, M>(target: &'t mut M, sources: &[&M]) -> &'t mut M
where
    M: Mapping,
    M::Item: Clone,
{
    each(sources, |source, _, _| {
        each(*source, |value, key, _| {
            target.assign(M::owned_key(key), value.clone());
        });
    });
    target
}

/// Copies entries onto `target` only for keys `target` does not have yet.
///
/// Keys already present on `target` are never overwritten; among the
/// sources, the first one to supply a key wins. Returns `target`.
///
/// Only an absent key counts as unset. A present entry is kept whatever its
/// value, so on a `HashMap<K, Option<V>>` an existing `None` is not filled.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use underbar::collection::defaults;
///
/// let mut options = HashMap::from([("retries", 5)]);
/// let fallback = HashMap::from([("retries", 3), ("timeout", 30)]);
/// let later = HashMap::from([("timeout", 60)]);
///
/// defaults(&mut options, &[&fallback, &later]);
/// assert_eq!(options, HashMap::from([("retries", 5), ("timeout", 30)]));
/// ```
pub fn defaults<'t, M>(target: &'t mut M, sources: &[&M]) -> &'t mut M
where
    M: Mapping,
    M::Item: Clone,
{
    each(sources, |source, _, _| {
        each(*source, |value, key, _| {
            let key = M::owned_key(key);
            if !target.has_key(&key) {
                target.assign(key, value.clone());
            }
        });
    });
    target
}
