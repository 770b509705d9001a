//! Small helpers over ordered sequences.
//!
//! - [`identity`]: Returns its argument; the default predicate for [`every`](super::every)
//!   and [`some`](super::some)
//! - [`first`] / [`first_n`]: Leading elements
//! - [`last`] / [`last_n`]: Trailing elements
//!
//! For any `n <= sequence.len()`, `first_n(sequence, len - n)` followed by
//! `last_n(sequence, n)` reconstructs `sequence`.

/// Returns the value unchanged.
///
/// Passing `identity` where a predicate is expected tests the truthiness of
/// the element itself.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::{every, identity};
///
/// assert_eq!(identity(42), 42);
/// assert!(every(&vec![1, 2, 3], identity));
/// assert!(!every(&vec![1, 0, 3], identity));
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Returns the first element, or `None` for an empty sequence.
#[inline]
pub fn first<T>(sequence: &[T]) -> Option<&T> {
    sequence.first()
}

/// Returns the first `count` elements.
///
/// A `count` larger than the sequence returns the whole sequence.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::first_n;
///
/// assert_eq!(first_n(&[1, 2, 3], 2), &[1, 2]);
/// assert_eq!(first_n(&[1, 2, 3], 10), &[1, 2, 3]);
/// ```
#[inline]
pub fn first_n<T>(sequence: &[T], count: usize) -> &[T] {
    &sequence[..count.min(sequence.len())]
}

/// Returns the last element, or `None` for an empty sequence.
#[inline]
pub fn last<T>(sequence: &[T]) -> Option<&T> {
    sequence.last()
}

/// Returns the last `count` elements.
///
/// A `count` larger than the sequence returns the whole sequence.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::last_n;
///
/// assert_eq!(last_n(&[1, 2, 3], 2), &[2, 3]);
/// assert_eq!(last_n(&[1, 2, 3], 0), &[] as &[i32]);
/// ```
#[inline]
pub fn last_n<T>(sequence: &[T], count: usize) -> &[T] {
    &sequence[sequence.len().saturating_sub(count)..]
}
