//! Reordering and restructuring sequences.
//!
//! - [`shuffle`] / [`shuffle_with`]: Uniformly random permutation of a copy
//! - [`sort_by`] / [`sort_by_property`]: Stable ascending sort of a copy
//! - [`zip`]: Group the i-th elements of several sequences
//! - [`flatten`]: Collapse a [`Nested`] tree depth-first

use rand::Rng;

use super::error::CollectionError;
use super::lookup::Lookup;
use super::reduce::reduce;
use super::transform::{map, pluck};
use super::traverse::{Collection, Shape};

/// Returns a uniformly random permutation of `sequence`.
///
/// The input is left untouched. Uses the thread-local generator from `rand`.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::shuffle;
///
/// let original = vec![1, 2, 3, 4, 5];
/// let mut shuffled = shuffle(&original);
/// shuffled.sort_unstable();
/// assert_eq!(shuffled, original);
/// ```
pub fn shuffle<T: Clone>(sequence: &[T]) -> Vec<T> {
    shuffle_with(sequence, &mut rand::rng())
}

/// Returns a random permutation of `sequence` drawn from `rng`.
///
/// Fisher-Yates: walking from the last index down to 1, each position is
/// swapped with a uniformly chosen index in `0..=position`, which makes every
/// permutation equally likely.
///
/// # Examples
///
/// ```rust
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use underbar::collection::shuffle_with;
///
/// let first = shuffle_with(&[1, 2, 3, 4], &mut StdRng::seed_from_u64(7));
/// let second = shuffle_with(&[1, 2, 3, 4], &mut StdRng::seed_from_u64(7));
/// assert_eq!(first, second);
/// ```
pub fn shuffle_with<T: Clone, R: Rng>(sequence: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = sequence.to_vec();
    for position in (1..shuffled.len()).rev() {
        let chosen = rng.random_range(0..=position);
        shuffled.swap(position, chosen);
    }
    shuffled
}

/// Returns a copy of `collection` sorted ascending by `criterion`.
///
/// The sort is stable: elements with equal keys keep their relative order.
/// `criterion` is evaluated once per element. The input is not modified.
///
/// # Errors
///
/// Returns [`CollectionError::NotASequence`] when `collection` is a keyed
/// container, which has no order to sort.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use underbar::collection::{CollectionError, sort_by};
///
/// let words = vec!["pear", "fig", "banana", "kiwi"];
/// assert_eq!(sort_by(&words, |word| word.len()), Ok(vec!["fig", "pear", "kiwi", "banana"]));
///
/// let keyed = HashMap::from([("a", 1)]);
/// assert_eq!(
///     sort_by(&keyed, |value| *value),
///     Err(CollectionError::NotASequence { operation: "sort_by" })
/// );
/// ```
pub fn sort_by<'a, C, F, K>(collection: &'a C, criterion: F) -> Result<Vec<C::Item>, CollectionError>
where
    C: Collection + ?Sized + 'a,
    C::Item: Clone,
    F: FnMut(&C::Item) -> K,
    K: Ord,
{
    if C::SHAPE != Shape::Sequence {
        tracing::debug!(operation = "sort_by", "rejected a keyed container");
        return Err(CollectionError::NotASequence {
            operation: "sort_by",
        });
    }
    let mut sorted = map(collection, |value, _, _| value.clone());
    sorted.sort_by_cached_key(criterion);
    Ok(sorted)
}

/// Returns a copy of `collection` sorted ascending by the property `name`.
///
/// Elements missing the property sort before all others.
///
/// # Errors
///
/// Returns [`CollectionError::NotASequence`] for keyed containers, as
/// [`sort_by`] does.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use underbar::collection::sort_by_property;
///
/// let people = vec![
///     HashMap::from([("age", 41)]),
///     HashMap::from([("age", 36)]),
///     HashMap::new(),
/// ];
/// let sorted = sort_by_property(&people, "age").unwrap();
/// assert_eq!(sorted[0].get("age"), None);
/// assert_eq!(sorted[1].get("age"), Some(&36));
/// assert_eq!(sorted[2].get("age"), Some(&41));
/// ```
pub fn sort_by_property<'a, C, Q>(collection: &'a C, name: &Q) -> Result<Vec<C::Item>, CollectionError>
where
    C: Collection + ?Sized + 'a,
    C::Item: Clone + Lookup<Q>,
    <C::Item as Lookup<Q>>::Output: Ord + Clone,
    Q: ?Sized,
{
    sort_by(collection, |element| element.lookup(name).cloned())
}

/// Groups the elements of several sequences by index.
///
/// The result is as long as the longest input. Row `i` holds the `i`-th
/// element of each input, or `None` where an input is too short.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::zip;
///
/// let rows = zip(&[vec!["a", "b", "c", "d"], vec!["1", "2", "3"]]);
/// assert_eq!(rows.len(), 4);
/// assert_eq!(rows[0], vec![Some("a"), Some("1")]);
/// assert_eq!(rows[3], vec![Some("d"), None]);
/// ```
pub fn zip<T, S>(sequences: &[S]) -> Vec<Vec<Option<T>>>
where
    T: Clone,
    S: AsRef<[T]>,
{
    let columns: Vec<&[T]> = map(sequences, |sequence, _, _| sequence.as_ref());
    let longest = reduce(&columns, |longest, column| longest.max(column.len()), 0);
    (0..longest).map(|index| pluck(&columns, &index)).collect()
}

/// An arbitrarily deep tree of sequences.
///
/// Build values with the [`nested!`](crate::nested) macro or by hand.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Nested<T> {
    /// A leaf element.
    Item(T),
    /// A nested sequence.
    List(Vec<Nested<T>>),
}

impl<T> From<T> for Nested<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::Item(value)
    }
}

/// Flattens a nested sequence into its leaves, depth-first and left to right.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::flatten;
/// use underbar::nested;
///
/// assert_eq!(flatten(&nested![1, [2], [3, [[4]]]]), vec![1, 2, 3, 4]);
/// ```
pub fn flatten<T: Clone>(nested: &[Nested<T>]) -> Vec<T> {
    reduce(
        nested,
        |mut flat, element| {
            match element {
                Nested::Item(value) => flat.push(value.clone()),
                Nested::List(inner) => flat.extend(flatten(inner)),
            }
            flat
        },
        Vec::new(),
    )
}

/// Builds a `Vec<Nested<T>>` from bracketed literals.
///
/// Every element is a single token tree: a literal, an identifier, a
/// parenthesized expression, or a bracketed list that becomes
/// [`Nested::List`](crate::collection::Nested::List).
///
/// # Examples
///
/// ```rust
/// use underbar::collection::Nested;
/// use underbar::nested;
///
/// let tree = nested![1, [2, [3]]];
/// assert_eq!(
///     tree,
///     vec![
///         Nested::Item(1),
///         Nested::List(vec![Nested::Item(2), Nested::List(vec![Nested::Item(3)])]),
///     ]
/// );
/// ```
#[macro_export]
macro_rules! nested {
    (@element [$($inner:tt)*]) => {
        $crate::collection::Nested::List($crate::nested![$($inner)*])
    };
    (@element $value:expr) => {
        $crate::collection::Nested::Item($value)
    };
    ($($element:tt),* $(,)?) => {
        ::std::vec![$($crate::nested!(@element $element)),*]
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shuffle_of_single_element_is_identity() {
        assert_eq!(shuffle(&[42]), vec![42]);
    }

    #[test]
    fn zip_of_nothing_is_empty() {
        let empty: Vec<Vec<i32>> = Vec::new();
        assert!(zip(&empty).is_empty());
    }

    #[test]
    fn flatten_keeps_empty_lists_out() {
        let tree: Vec<Nested<i32>> = crate::nested![[], [[]], 5];
        assert_eq!(flatten(&tree), vec![5]);
    }
}
