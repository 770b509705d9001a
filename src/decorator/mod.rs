//! Function decorators.
//!
//! Each decorator wraps a function in a small stateful struct whose `call`
//! method changes how the function is invoked:
//!
//! - [`once`]: Run on the first call, replay that result afterwards
//! - [`memoize`]: Cache results per distinct argument tuple
//! - [`memoize_serialized`]: Cache results per JSON-serialized argument tuple
//!   (feature `serde`)
//! - [`delay`]: Run once after a wait, without blocking the caller (feature `async`)
//! - [`throttle`]: Run at most once per time window, dropping the rest
//!   (feature `async`)
//!
//! Wrapped functions take a single argument; pass a tuple for several. The
//! state of a wrapper belongs to that wrapper alone and lives as long as it
//! does. There is no reset.
//!
//! # Examples
//!
//! ```rust
//! use std::cell::Cell;
//! use underbar::decorator::{memoize, once};
//!
//! let setups = Cell::new(0);
//! let setup = once(|(): ()| setups.set(setups.get() + 1));
//! setup.call(());
//! setup.call(());
//! assert_eq!(setups.get(), 1);
//!
//! let square = memoize(|value: u64| value * value);
//! assert_eq!(square.call(12), 144);
//! ```

#[cfg(feature = "async")]
mod delay;
mod error;
mod memoize;
mod once;
#[cfg(feature = "async")]
mod throttle;

#[cfg(feature = "async")]
pub use delay::delay;
pub use error::DecoratorError;
pub use memoize::{Memoize, memoize};
#[cfg(feature = "serde")]
pub use memoize::{SerializedMemoize, memoize_serialized};
pub use once::{Once, once};
#[cfg(feature = "async")]
pub use throttle::{Throttle, throttle};
