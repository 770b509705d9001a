//! Named property access.
//!
//! [`Lookup`] is how [`pluck`](super::pluck), [`zip`](super::zip) and
//! [`sort_by_property`](super::sort_by_property) read one property out of an
//! element. Sequences are looked up by index, maps by key. Implement it for
//! your own records to make their fields pluckable.
//!
//! # Examples
//!
//! ```rust
//! use underbar::collection::{Lookup, pluck};
//!
//! struct Person {
//!     name: String,
//!     age: u32,
//! }
//!
//! impl Lookup<str> for Person {
//!     type Output = u32;
//!
//!     fn lookup(&self, key: &str) -> Option<&u32> {
//!         match key {
//!             "age" => Some(&self.age),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let people = vec![
//!     Person { name: "ada".to_string(), age: 36 },
//!     Person { name: "alan".to_string(), age: 41 },
//! ];
//! assert_eq!(pluck(&people, "age"), vec![Some(36), Some(41)]);
//! assert_eq!(pluck(&people, "height"), vec![None, None]);
//! # let _ = &people[0].name;
//! ```

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::hash::{BuildHasher, Hash};

/// Read access to a property identified by a key of type `Q`.
pub trait Lookup<Q: ?Sized> {
    /// The property type.
    type Output;

    /// Returns the property named by `key`, or `None` when it is absent.
    fn lookup(&self, key: &Q) -> Option<&Self::Output>;
}

impl<T> Lookup<usize> for [T] {
    type Output = T;

    #[inline]
    fn lookup(&self, key: &usize) -> Option<&T> {
        self.get(*key)
    }
}

impl<T, const N: usize> Lookup<usize> for [T; N] {
    type Output = T;

    #[inline]
    fn lookup(&self, key: &usize) -> Option<&T> {
        self.get(*key)
    }
}

impl<T> Lookup<usize> for Vec<T> {
    type Output = T;

    #[inline]
    fn lookup(&self, key: &usize) -> Option<&T> {
        self.get(*key)
    }
}

impl<T> Lookup<usize> for VecDeque<T> {
    type Output = T;

    #[inline]
    fn lookup(&self, key: &usize) -> Option<&T> {
        self.get(*key)
    }
}

impl<K, V, S, Q> Lookup<Q> for HashMap<K, V, S>
where
    K: Borrow<Q> + Hash + Eq,
    Q: Hash + Eq + ?Sized,
    S: BuildHasher,
{
    type Output = V;

    #[inline]
    fn lookup(&self, key: &Q) -> Option<&V> {
        self.get(key)
    }
}

impl<K, V, Q> Lookup<Q> for BTreeMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    type Output = V;

    #[inline]
    fn lookup(&self, key: &Q) -> Option<&V> {
        self.get(key)
    }
}

impl<L, Q> Lookup<Q> for &L
where
    L: Lookup<Q> + ?Sized,
    Q: ?Sized,
{
    type Output = L::Output;

    #[inline]
    fn lookup(&self, key: &Q) -> Option<&Self::Output> {
        (**self).lookup(key)
    }
}
