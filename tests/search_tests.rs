#![cfg(feature = "collection")]
//! Unit tests for index_of, filter, reject, uniq and uniq_by.

use std::collections::{BTreeMap, HashMap};

use rstest::rstest;
use underbar::collection::{filter, identity, index_of, reject, uniq, uniq_by};

// =============================================================================
// index_of
// =============================================================================

#[rstest]
#[case(&[10, 20, 30], 10, Some(0))]
#[case(&[10, 20, 30], 30, Some(2))]
#[case(&[10, 20, 30], 40, None)]
#[case(&[7, 7, 7], 7, Some(0))]
#[case(&[], 1, None)]
fn index_of_finds_first_match(#[case] values: &[i32], #[case] target: i32, #[case] expected: Option<usize>) {
    assert_eq!(index_of(values, &target), expected);
}

#[rstest]
fn index_of_uses_equality_on_owned_strings() {
    let names = vec!["ada".to_string(), "grace".to_string()];
    assert_eq!(index_of(&names, &"grace".to_string()), Some(1));
}

// =============================================================================
// filter / reject
// =============================================================================

#[rstest]
fn filter_keeps_passing_elements_in_order() {
    let numbers = vec![1, 2, 3, 4, 5, 6];
    assert_eq!(filter(&numbers, |number| number % 2 == 0), vec![2, 4, 6]);
}

#[rstest]
fn reject_keeps_failing_elements_in_order() {
    let numbers = vec![1, 2, 3, 4, 5, 6];
    assert_eq!(reject(&numbers, |number| number % 2 == 0), vec![1, 3, 5]);
}

#[rstest]
fn filter_accepts_truthy_results() {
    let words = vec!["", "one", "", "two"];
    assert_eq!(filter(&words, identity), vec!["one", "two"]);
    assert_eq!(reject(&words, identity), vec!["", ""]);
}

#[rstest]
fn filter_on_keyed_container_returns_values() {
    let stock = BTreeMap::from([("apples", 0), ("pears", 4), ("plums", 9)]);
    assert_eq!(filter(&stock, |count| *count > 0), vec![4, 9]);
}

#[rstest]
fn filter_does_not_modify_input() {
    let numbers = vec![1, 2, 3];
    let _ = filter(&numbers, |_| false);
    assert_eq!(numbers, vec![1, 2, 3]);
}

#[rstest]
fn filter_and_reject_on_empty_are_empty() {
    let empty: HashMap<String, i32> = HashMap::new();
    assert!(filter(&empty, |_| true).is_empty());
    assert!(reject(&empty, |_| false).is_empty());
}

#[rstest]
fn reject_calls_predicate_once_per_element() {
    let mut calls = 0;
    let _ = reject(&vec![1, 2, 3], |_| {
        calls += 1;
        true
    });
    assert_eq!(calls, 3);
}

// =============================================================================
// uniq / uniq_by
// =============================================================================

#[rstest]
fn uniq_keeps_one_of_each_value() {
    let mut distinct = uniq(&[1, 2, 1, 3, 1, 4]);
    distinct.sort_unstable();
    assert_eq!(distinct, vec![1, 2, 3, 4]);
}

#[rstest]
fn uniq_on_strings() {
    let mut distinct = uniq(&["b", "a", "b", "c", "a"]);
    distinct.sort_unstable();
    assert_eq!(distinct, vec!["a", "b", "c"]);
}

#[rstest]
fn uniq_does_not_modify_input() {
    let values = vec![2, 2, 1];
    let _ = uniq(&values);
    assert_eq!(values, vec![2, 2, 1]);
}

#[rstest]
fn uniq_by_supports_unhashable_elements() {
    let readings = [1.5_f64, 1.5, 2.25, 1.5];
    let mut distinct = uniq_by(&readings, |reading| reading.to_bits());
    distinct.sort_by(f64::total_cmp);
    assert_eq!(distinct, vec![1.5, 2.25]);
}

#[rstest]
fn uniq_by_keeps_first_element_per_key() {
    let people = [("ada", 36), ("alan", 41), ("grace", 36)];
    assert_eq!(uniq_by(&people, |person| person.1), vec![("ada", 36), ("alan", 41)]);
}
