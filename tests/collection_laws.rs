#![cfg(feature = "collection")]
//! Property-based tests for collection laws.
//!
//! This module verifies the invariants that tie the collection primitives
//! together using proptest.

use std::collections::{BTreeMap, HashSet};

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use underbar::collection::{
    Nested, contains, difference, every, filter, first_n, flatten, index_of, intersection, last_n,
    map, reduce, reduce_unseeded, reject, shuffle_with, size, some, sort_by, uniq, zip,
};

proptest! {
    /// First-Last Law: the leading and trailing parts rebuild the sequence
    #[test]
    fn prop_first_last_reconstructs(
        elements in prop::collection::vec(any::<i32>(), 0..50),
        split in 0usize..60
    ) {
        let trailing = split.min(elements.len());
        let mut rebuilt = first_n(&elements, elements.len() - trailing).to_vec();
        rebuilt.extend_from_slice(last_n(&elements, trailing));
        prop_assert_eq!(rebuilt, elements);
    }

    /// Partition Law: filter and reject split a sequence exhaustively
    #[test]
    fn prop_filter_reject_partition(
        elements in prop::collection::vec(any::<i16>(), 0..50),
        divisor in 1i16..7
    ) {
        let passed = filter(&elements, |value| value % divisor == 0);
        let failed = reject(&elements, |value| value % divisor == 0);

        prop_assert_eq!(passed.len() + failed.len(), size(&elements));
        prop_assert!(passed.iter().all(|value| value % divisor == 0));
        prop_assert!(failed.iter().all(|value| value % divisor != 0));
    }

    /// Partition Law holds for keyed containers too
    #[test]
    fn prop_filter_reject_partition_keyed(
        entries in prop::collection::btree_map(any::<u8>(), any::<bool>(), 0..30)
    ) {
        let passed = filter(&entries, |flag| *flag);
        let failed = reject(&entries, |flag| *flag);
        prop_assert_eq!(passed.len() + failed.len(), size(&entries));
    }

    /// De Morgan Law: some(p) == !every(!p)
    #[test]
    fn prop_some_every_de_morgan(
        elements in prop::collection::vec(any::<i8>(), 0..40),
        threshold in any::<i8>()
    ) {
        let some_above = some(&elements, |value| *value > threshold);
        let every_at_most = every(&elements, |value| *value <= threshold);
        prop_assert_eq!(some_above, !every_at_most);
    }

    /// Map Law: map preserves length and order
    #[test]
    fn prop_map_matches_iterator_map(elements in prop::collection::vec(any::<i32>(), 0..50)) {
        let mapped = map(&elements, |value, _, _| value.wrapping_mul(3));
        let expected: Vec<i32> = elements.iter().map(|value| value.wrapping_mul(3)).collect();
        prop_assert_eq!(mapped, expected);
    }

    /// Seeding Law: an unseeded reduce equals a reduce seeded with the first element
    #[test]
    fn prop_reduce_seeding(elements in prop::collection::vec(any::<i32>(), 1..50)) {
        let unseeded = reduce_unseeded(&elements, |total, value| total.wrapping_add(*value));
        let seeded = reduce(&elements[1..], |total: i32, value| total.wrapping_add(*value), elements[0]);
        prop_assert_eq!(unseeded, Some(seeded));
    }

    /// Contains Law: contains agrees with index_of
    #[test]
    fn prop_contains_agrees_with_index_of(
        elements in prop::collection::vec(0u8..20, 0..30),
        target in 0u8..20
    ) {
        prop_assert_eq!(contains(&elements, &target), index_of(&elements, &target).is_some());
    }

    /// Uniq Law: uniq yields exactly the distinct values
    #[test]
    fn prop_uniq_is_distinct(elements in prop::collection::vec(0u8..10, 0..40)) {
        let distinct = uniq(&elements);
        let expected: HashSet<u8> = elements.iter().copied().collect();
        prop_assert_eq!(distinct.len(), expected.len());
        prop_assert_eq!(distinct.into_iter().collect::<HashSet<_>>(), expected);
    }

    /// Shuffle Law: a shuffle is a permutation and leaves its input alone
    #[test]
    fn prop_shuffle_is_permutation(
        elements in prop::collection::vec(any::<i32>(), 0..50),
        seed in any::<u64>()
    ) {
        let snapshot = elements.clone();
        let mut shuffled = shuffle_with(&elements, &mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(&elements, &snapshot);

        shuffled.sort_unstable();
        let mut sorted = snapshot;
        sorted.sort_unstable();
        prop_assert_eq!(shuffled, sorted);
    }

    /// Sort Law: sort_by by identity agrees with a stable sort
    #[test]
    fn prop_sort_by_matches_std(elements in prop::collection::vec(any::<i32>(), 0..50)) {
        let sorted = sort_by(&elements, |value| *value).unwrap();
        let mut expected = elements.clone();
        expected.sort();
        prop_assert_eq!(sorted, expected);
    }

    /// Zip Law: zip has as many rows as the longest input
    #[test]
    fn prop_zip_length(
        left in prop::collection::vec(any::<u8>(), 0..20),
        right in prop::collection::vec(any::<u8>(), 0..20)
    ) {
        let rows = zip(&[left.clone(), right.clone()]);
        prop_assert_eq!(rows.len(), left.len().max(right.len()));
        for (index, row) in rows.iter().enumerate() {
            prop_assert_eq!(row[0], left.get(index).copied());
            prop_assert_eq!(row[1], right.get(index).copied());
        }
    }

    /// Flatten Law: flattening one level of lists concatenates them
    #[test]
    fn prop_flatten_concatenates(
        groups in prop::collection::vec(prop::collection::vec(any::<i32>(), 0..5), 0..10)
    ) {
        let nested: Vec<Nested<i32>> = groups
            .iter()
            .map(|group| Nested::List(group.iter().copied().map(Nested::Item).collect()))
            .collect();
        prop_assert_eq!(flatten(&nested), groups.concat());
    }

    /// Set Law: intersection and difference split the distinct values of the first input
    #[test]
    fn prop_intersection_difference_split(
        first in prop::collection::vec(0u8..15, 0..30),
        other in prop::collection::vec(0u8..15, 0..30)
    ) {
        let others = [other.clone()];
        let shared: HashSet<u8> = intersection(&first, &others).into_iter().collect();
        let remaining: HashSet<u8> = difference(&first, &others).into_iter().collect();
        let distinct: HashSet<u8> = first.iter().copied().collect();

        prop_assert!(shared.is_disjoint(&remaining));
        prop_assert_eq!(&shared | &remaining, distinct);
        prop_assert!(shared.iter().all(|value| other.contains(value)));
    }
}

#[test]
fn keyed_size_matches_len() {
    let entries = BTreeMap::from([(1, "a"), (2, "b")]);
    assert_eq!(size(&entries), 2);
}
