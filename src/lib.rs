//! # underbar
//!
//! Composable collection primitives and function decorators.
//!
//! ## Overview
//!
//! - **Collections**: `each`, `map`, `filter`, `reduce` and friends over
//!   ordered sequences and key-mapped containers, plus reshaping operations
//!   such as `zip`, `flatten`, `sort_by` and `shuffle`
//! - **Decorators**: `once`, `memoize`, `delay` and `throttle` wrappers that
//!   change how a function is invoked
//!
//! Every collection operation is eager and returns a fully materialized
//! result. Every traversal goes through [`collection::each`].
//!
//! ## Feature Flags
//!
//! - `collection`: Collection primitives
//! - `decorator`: `once` and `memoize`
//! - `async`: `delay` and `throttle` on the tokio clock
//! - `serde`: `memoize_serialized`, keyed by JSON-serialized arguments
//! - `fxhash` / `ahash`: Faster hashers for caches and seen-sets
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use underbar::prelude::*;
//!
//! let evens = filter(&vec![1, 2, 3, 4], |number| number % 2 == 0);
//! assert_eq!(evens, vec![2, 4]);
//!
//! let total = reduce(&evens, |sum, number| sum + number, 0);
//! assert_eq!(total, 6);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used functions, traits and wrapper types.
///
/// # Usage
///
/// ```rust
/// use underbar::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "collection")]
    pub use crate::collection::*;

    #[cfg(feature = "decorator")]
    pub use crate::decorator::*;
}

mod hash;

#[cfg(feature = "collection")]
pub mod collection;

#[cfg(feature = "decorator")]
pub mod decorator;
