//! Reduction of a collection to a single value.
//!
//! # Accumulator seeding
//!
//! - [`reduce`] takes a seed: the iterator runs once per element and an empty
//!   collection returns the seed untouched.
//! - [`reduce_unseeded`] takes no seed: the first element becomes the
//!   accumulator and the iterator starts from the second element. A single
//!   element comes back untouched without the iterator running. An empty
//!   collection has no accumulator at all and yields `None`.
//!
//! [`contains`], [`every`] and [`some`] are all expressed through [`reduce`].

use super::traverse::{Collection, each};
use super::truthy::Truthy;

/// Folds every element into `initial` with `iterator(accumulator, value)`.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::reduce;
///
/// assert_eq!(reduce(&vec![1, 2, 3], |total, number| total + number, 0), 6);
///
/// let empty: Vec<i32> = Vec::new();
/// assert_eq!(reduce(&empty, |total, number| total + number, 10), 10);
/// ```
pub fn reduce<'a, C, F, B>(collection: &'a C, mut iterator: F, initial: B) -> B
where
    C: Collection + ?Sized + 'a,
    F: FnMut(B, &'a C::Item) -> B,
{
    let mut accumulator = Some(initial);
    each(collection, |value, _, _| {
        accumulator = accumulator.take().map(|current| iterator(current, value));
    });
    accumulator.unwrap_or_else(|| unreachable!("the accumulator is restored after every step"))
}

/// Folds the elements using the first element as the seed.
///
/// Returns `None` for an empty collection.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::reduce_unseeded;
///
/// assert_eq!(reduce_unseeded(&vec![1, 2, 3], |total, number| total + number), Some(6));
///
/// // With a single element the iterator never runs.
/// assert_eq!(reduce_unseeded(&vec![5], |total, number| total + number * number), Some(5));
///
/// let empty: Vec<i32> = Vec::new();
/// assert_eq!(reduce_unseeded(&empty, |total, number| total + number), None);
/// ```
pub fn reduce_unseeded<'a, C, F>(collection: &'a C, mut iterator: F) -> Option<C::Item>
where
    C: Collection + ?Sized + 'a,
    C::Item: Clone,
    F: FnMut(C::Item, &'a C::Item) -> C::Item,
{
    let mut accumulator = None;
    each(collection, |value, _, _| {
        accumulator = Some(match accumulator.take() {
            None => value.clone(),
            Some(current) => iterator(current, value),
        });
    });
    accumulator
}

/// Returns `true` if some element equals `target`.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use underbar::collection::contains;
///
/// assert!(contains(&vec![1, 2, 3], &2));
///
/// let ages = HashMap::from([("ada", 36), ("alan", 41)]);
/// assert!(contains(&ages, &41));
/// assert!(!contains(&ages, &50));
/// ```
pub fn contains<C>(collection: &C, target: &C::Item) -> bool
where
    C: Collection + ?Sized,
    C::Item: PartialEq,
{
    reduce(collection, |found, item| found || item == target, false)
}

/// Returns `true` if `predicate` is truthy for every element.
///
/// Vacuously `true` for an empty collection. Once an element fails, the
/// predicate is not called again. Pass [`identity`](super::identity) to test
/// the elements' own truthiness.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::{every, identity};
///
/// assert!(every(&vec![2, 4, 6], |number| number % 2 == 0));
/// assert!(!every(&vec![true, false], identity));
/// assert!(every(&Vec::<i32>::new(), |_| false));
/// ```
pub fn every<'a, C, F, B>(collection: &'a C, mut predicate: F) -> bool
where
    C: Collection + ?Sized + 'a,
    F: FnMut(&'a C::Item) -> B,
    B: Truthy,
{
    reduce(
        collection,
        |all_passed, value| all_passed && predicate(value).is_truthy(),
        true,
    )
}

/// Returns `true` if `predicate` is truthy for at least one element.
///
/// Vacuously `false` for an empty collection. Defined as
/// `!every(collection, |value| !predicate(value))`.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::{identity, some};
///
/// assert!(some(&vec![1, 3, 4], |number| number % 2 == 0));
/// assert!(some(&vec!["", "x"], identity));
/// assert!(!some(&Vec::<i32>::new(), |_| true));
/// ```
pub fn some<'a, C, F, B>(collection: &'a C, mut predicate: F) -> bool
where
    C: Collection + ?Sized + 'a,
    F: FnMut(&'a C::Item) -> B,
    B: Truthy,
{
    !every(collection, move |value| !predicate(value).is_truthy())
}
