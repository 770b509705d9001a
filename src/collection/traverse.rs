//! Iteration core.
//!
//! This module provides the [`Collection`] trait, the single place where the
//! traversal order of a collection is decided. Every higher-order function in
//! [`crate::collection`] visits elements through [`Collection::each`].
//!
//! Two shapes of collection are supported:
//!
//! - **Sequences** (`[T]`, `[T; N]`, `Vec<T>`, `VecDeque<T>`): visited in
//!   ascending index order `0..len`, with the index as key.
//! - **Keyed containers** (`HashMap<K, V, S>`, `BTreeMap<K, V>`): visited in
//!   the container's own enumeration order, with a reference to the key.
//!   For `HashMap` that order is unspecified but stable within one pass.
//!
//! # Examples
//!
//! ```rust
//! use underbar::collection::each;
//!
//! let mut seen = Vec::new();
//! each(&vec!["a", "b"], |value, index, _| seen.push((*value, index)));
//! assert_eq!(seen, vec![("a", 0), ("b", 1)]);
//! ```

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::hash::BuildHasher;

/// The two collection shapes a traversal can dispatch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Contiguous integer-indexed elements with a known length.
    Sequence,
    /// Key-value associations with no intrinsic order.
    Keyed,
}

/// A container whose elements can be visited one at a time.
///
/// The iterator passed to [`each`](Collection::each) receives the value, its
/// key (an index for sequences, a key reference for keyed containers) and the
/// collection itself.
///
/// # Laws
///
/// - The iterator is invoked exactly [`size`](Collection::size) times.
/// - A traversal never mutates the collection.
/// - Two traversals of an unmodified collection visit elements in the same order.
pub trait Collection {
    /// The element type.
    type Item;

    /// The key handed to the iterator alongside each element.
    type Key<'a>
    where
        Self: 'a;

    /// Whether this collection is a sequence or a keyed container.
    const SHAPE: Shape;

    /// Invokes `iterator(value, key, collection)` once for every element.
    fn each<'a, F>(&'a self, iterator: F)
    where
        F: FnMut(&'a Self::Item, Self::Key<'a>, &'a Self);

    /// Returns the number of elements.
    fn size(&self) -> usize;
}

impl<T> Collection for [T] {
    type Item = T;
    type Key<'a>
        = usize
    where
        Self: 'a;

    const SHAPE: Shape = Shape::Sequence;

    fn each<'a, F>(&'a self, mut iterator: F)
    where
        F: FnMut(&'a T, usize, &'a Self),
    {
        for (index, value) in self.iter().enumerate() {
            iterator(value, index, self);
        }
    }

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Collection for [T; N] {
    type Item = T;
    type Key<'a>
        = usize
    where
        Self: 'a;

    const SHAPE: Shape = Shape::Sequence;

    fn each<'a, F>(&'a self, mut iterator: F)
    where
        F: FnMut(&'a T, usize, &'a Self),
    {
        for (index, value) in self.iter().enumerate() {
            iterator(value, index, self);
        }
    }

    #[inline]
    fn size(&self) -> usize {
        N
    }
}

impl<T> Collection for Vec<T> {
    type Item = T;
    type Key<'a>
        = usize
    where
        Self: 'a;

    const SHAPE: Shape = Shape::Sequence;

    fn each<'a, F>(&'a self, mut iterator: F)
    where
        F: FnMut(&'a T, usize, &'a Self),
    {
        for (index, value) in self.iter().enumerate() {
            iterator(value, index, self);
        }
    }

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T> Collection for VecDeque<T> {
    type Item = T;
    type Key<'a>
        = usize
    where
        Self: 'a;

    const SHAPE: Shape = Shape::Sequence;

    fn each<'a, F>(&'a self, mut iterator: F)
    where
        F: FnMut(&'a T, usize, &'a Self),
    {
        for (index, value) in self.iter().enumerate() {
            iterator(value, index, self);
        }
    }

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

impl<K, V, S: BuildHasher> Collection for HashMap<K, V, S> {
    type Item = V;
    type Key<'a>
        = &'a K
    where
        Self: 'a;

    const SHAPE: Shape = Shape::Keyed;

    fn each<'a, F>(&'a self, mut iterator: F)
    where
        F: FnMut(&'a V, &'a K, &'a Self),
    {
        for (key, value) in self {
            iterator(value, key, self);
        }
    }

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

impl<K, V> Collection for BTreeMap<K, V> {
    type Item = V;
    type Key<'a>
        = &'a K
    where
        Self: 'a;

    const SHAPE: Shape = Shape::Keyed;

    fn each<'a, F>(&'a self, mut iterator: F)
    where
        F: FnMut(&'a V, &'a K, &'a Self),
    {
        for (key, value) in self {
            iterator(value, key, self);
        }
    }

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

/// Invokes `iterator(value, key, collection)` once for every element of `collection`.
///
/// Free-function form of [`Collection::each`]. Returns nothing; an empty
/// collection produces zero invocations.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
/// use underbar::collection::each;
///
/// let scores = BTreeMap::from([("ada", 3), ("bob", 5)]);
/// let mut total = 0;
/// each(&scores, |score, _name, _| total += score);
/// assert_eq!(total, 8);
/// ```
#[inline]
pub fn each<'a, C, F>(collection: &'a C, iterator: F)
where
    C: Collection + ?Sized + 'a,
    F: FnMut(&'a C::Item, C::Key<'a>, &'a C),
{
    collection.each(iterator);
}

/// Returns the number of elements in `collection`.
#[inline]
pub fn size<C: Collection + ?Sized>(collection: &C) -> usize {
    collection.size()
}
