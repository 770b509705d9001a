//! Searching and filtering.
//!
//! - [`index_of`]: Position of the first equal element
//! - [`filter`] / [`reject`]: Partition a collection by a predicate
//! - [`uniq`] / [`uniq_by`]: Drop duplicate elements

use std::hash::Hash;

use super::traverse::{Collection, each};
use super::truthy::Truthy;
use crate::hash::FastHashSet;

/// Returns the index of the first element equal to `target`.
///
/// `None` means the value is not present.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::index_of;
///
/// assert_eq!(index_of(&[10, 20, 30, 20], &20), Some(1));
/// assert_eq!(index_of(&[10, 20, 30], &40), None);
/// ```
pub fn index_of<T: PartialEq>(sequence: &[T], target: &T) -> Option<usize> {
    let mut found = None;
    each(sequence, |item, index, _| {
        if found.is_none() && item == target {
            found = Some(index);
        }
    });
    found
}

/// Returns the elements whose predicate result is truthy, in traversal order.
///
/// Keyed containers contribute their values.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::filter;
///
/// let evens = filter(&vec![1, 2, 3, 4, 5, 6], |number| number % 2 == 0);
/// assert_eq!(evens, vec![2, 4, 6]);
/// ```
pub fn filter<'a, C, F, B>(collection: &'a C, mut predicate: F) -> Vec<C::Item>
where
    C: Collection + ?Sized + 'a,
    C::Item: Clone,
    F: FnMut(&'a C::Item) -> B,
    B: Truthy,
{
    let mut passed = Vec::new();
    each(collection, |value, _, _| {
        if predicate(value).is_truthy() {
            passed.push(value.clone());
        }
    });
    passed
}

/// Returns the elements whose predicate result is falsy.
///
/// The complement of [`filter`]: together they partition the collection.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::reject;
///
/// let odds = reject(&vec![1, 2, 3, 4, 5, 6], |number| number % 2 == 0);
/// assert_eq!(odds, vec![1, 3, 5]);
/// ```
pub fn reject<'a, C, F, B>(collection: &'a C, mut predicate: F) -> Vec<C::Item>
where
    C: Collection + ?Sized + 'a,
    C::Item: Clone,
    F: FnMut(&'a C::Item) -> B,
    B: Truthy,
{
    filter(collection, move |value| !predicate(value).is_truthy())
}

/// Returns the sequence with duplicates removed.
///
/// One representative survives per distinct value. Survivors currently come
/// out in first-occurrence order, but callers should not rely on any order.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::uniq;
///
/// let mut distinct = uniq(&[1, 2, 1, 3, 1, 4]);
/// distinct.sort_unstable();
/// assert_eq!(distinct, vec![1, 2, 3, 4]);
/// ```
pub fn uniq<T: Hash + Eq + Clone>(sequence: &[T]) -> Vec<T> {
    uniq_by(sequence, |value| value)
}

/// Returns the sequence with duplicates removed, comparing elements by `key`.
///
/// Use this for elements that are not hashable themselves, or to collapse
/// elements that share a derived key. The first element with a given key is
/// the one kept.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::uniq_by;
///
/// let words = ["apple", "Avocado", "banana", "Blueberry"];
/// let by_initial = uniq_by(&words, |word| word.chars().next().map(|c| c.to_ascii_lowercase()));
/// assert_eq!(by_initial, vec!["apple", "banana"]);
/// ```
pub fn uniq_by<'a, T, K, F>(sequence: &'a [T], mut key: F) -> Vec<T>
where
    T: Clone,
    K: Hash + Eq,
    F: FnMut(&'a T) -> K,
{
    let mut seen = FastHashSet::default();
    let mut survivors = Vec::new();
    each(sequence, |value, _, _| {
        if seen.insert(key(value)) {
            survivors.push(value.clone());
        }
    });
    survivors
}
