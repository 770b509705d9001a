//! Element-wise transformation.

use super::lookup::Lookup;
use super::traverse::{Collection, each};

/// Returns `iterator(value, key, collection)` for every element, in traversal order.
///
/// The result always has one entry per visited element.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
/// use underbar::collection::map;
///
/// let doubled = map(&vec![1, 2, 3], |number, _, _| number * 2);
/// assert_eq!(doubled, vec![2, 4, 6]);
///
/// let stock = BTreeMap::from([("apples", 3), ("pears", 0)]);
/// let labels = map(&stock, |count, fruit, _| format!("{fruit}={count}"));
/// assert_eq!(labels, vec!["apples=3", "pears=0"]);
/// ```
pub fn map<'a, C, F, R>(collection: &'a C, mut iterator: F) -> Vec<R>
where
    C: Collection + ?Sized + 'a,
    F: FnMut(&'a C::Item, C::Key<'a>, &'a C) -> R,
{
    let mut results = Vec::with_capacity(collection.size());
    each(collection, |value, key, whole| {
        results.push(iterator(value, key, whole));
    });
    results
}

/// Extracts the property named `key` from every element.
///
/// Elements lacking the property contribute `None`.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use underbar::collection::pluck;
///
/// let rows = vec![
///     HashMap::from([("id", 1), ("score", 90)]),
///     HashMap::from([("id", 2)]),
/// ];
/// assert_eq!(pluck(&rows, "score"), vec![Some(90), None]);
/// ```
pub fn pluck<'a, C, Q>(collection: &'a C, key: &Q) -> Vec<Option<<C::Item as Lookup<Q>>::Output>>
where
    C: Collection + ?Sized + 'a,
    C::Item: Lookup<Q>,
    <C::Item as Lookup<Q>>::Output: Clone,
    Q: ?Sized,
{
    map(collection, |element, _, _| element.lookup(key).cloned())
}
