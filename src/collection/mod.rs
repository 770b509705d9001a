//! Collection primitives.
//!
//! This module provides eager, composable operations over two shapes of
//! collection: ordered sequences and key-mapped containers. Every operation
//! visits elements through [`each`], so traversal order is decided in one
//! place ([`Collection`]).
//!
//! - **Iteration**: [`each`], [`size`]
//! - **Sequences**: [`identity`], [`first`], [`first_n`], [`last`], [`last_n`]
//! - **Search**: [`index_of`], [`filter`], [`reject`], [`uniq`], [`uniq_by`]
//! - **Transform**: [`map`], [`pluck`]
//! - **Reduction**: [`reduce`], [`reduce_unseeded`], [`contains`], [`every`], [`some`]
//! - **Merge**: [`extend`], [`defaults`]
//! - **Reshape**: [`shuffle`], [`shuffle_with`], [`invoke`], [`invoke_named`],
//!   [`sort_by`], [`sort_by_property`], [`zip`], [`flatten`], [`intersection`],
//!   [`difference`]
//!
//! # Examples
//!
//! ```rust
//! use underbar::collection::{map, reduce, sort_by};
//!
//! let prices = vec![30, 10, 20];
//! let sorted = sort_by(&prices, |price| *price).unwrap();
//! let taxed = map(&sorted, |price, _, _| price * 11 / 10);
//! assert_eq!(taxed, vec![11, 22, 33]);
//! assert_eq!(reduce(&taxed, |total, price| total + price, 0), 66);
//! ```

mod error;
mod invoke;
mod lookup;
mod merge;
mod reduce;
mod reshape;
mod search;
mod sequence;
mod set;
mod transform;
mod traverse;
mod truthy;

pub use error::CollectionError;
pub use invoke::{Invocable, invoke, invoke_named};
pub use lookup::Lookup;
pub use merge::{Mapping, defaults, extend};
pub use reduce::{contains, every, reduce, reduce_unseeded, some};
pub use reshape::{Nested, flatten, shuffle, shuffle_with, sort_by, sort_by_property, zip};
pub use search::{filter, index_of, reject, uniq, uniq_by};
pub use sequence::{first, first_n, identity, last, last_n};
pub use set::{difference, intersection};
pub use transform::{map, pluck};
pub use traverse::{Collection, Shape, each, size};
pub use truthy::Truthy;
