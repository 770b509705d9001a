//! Set-like operations over sequences.

use std::hash::Hash;

use super::reduce::{contains, every, reduce};
use super::search::{filter, index_of, reject, uniq};

/// Returns the distinct elements of `first` that appear in every sequence of `others`.
///
/// `first` is the candidate set; membership in the others is tested by
/// equality. With no `others`, this is [`uniq`] of `first`.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::intersection;
///
/// let shared = intersection(&["moe", "curly", "larry", "moe"], &[vec!["moe", "groucho"], vec!["moe", "larry"]]);
/// assert_eq!(shared, vec!["moe"]);
/// ```
pub fn intersection<T, S>(first: &[T], others: &[S]) -> Vec<T>
where
    T: Hash + Eq + Clone,
    S: AsRef<[T]>,
{
    filter(&uniq(first), |item| {
        every(others, |other| index_of(other.as_ref(), item).is_some())
    })
}

/// Returns the elements of `first` that appear in none of `others`.
///
/// Duplicates within `first` are kept.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::difference;
///
/// let remaining = difference(&[1, 2, 3, 4, 5, 2], &[vec![5, 2], vec![10]]);
/// assert_eq!(remaining, vec![1, 3, 4]);
/// ```
pub fn difference<T, S>(first: &[T], others: &[S]) -> Vec<T>
where
    T: PartialEq + Clone,
    S: AsRef<[T]>,
{
    let excluded: Vec<T> = reduce(
        others,
        |mut union, other| {
            union.extend_from_slice(other.as_ref());
            union
        },
        Vec::new(),
    );
    reject(first, |item| contains(&excluded, item))
}
