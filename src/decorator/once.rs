//! Run-once wrapper.
//!
//! [`Once`] calls its function on the first [`call`](Once::call) and hands
//! back the cached result on every call after that, whatever the arguments.
//!
//! # Examples
//!
//! ```rust
//! use std::cell::Cell;
//! use underbar::decorator::once;
//!
//! let launches = Cell::new(0);
//! let launch = once(|target: &str| {
//!     launches.set(launches.get() + 1);
//!     format!("launched at {target}")
//! });
//!
//! assert_eq!(launch.call("moon"), "launched at moon");
//! assert_eq!(launch.call("mars"), "launched at moon");
//! assert_eq!(launches.get(), 1);
//! ```

use std::cell::{Cell, OnceCell};
use std::fmt;
use std::marker::PhantomData;

/// A function that runs at most once and then replays its result.
///
/// Multi-argument functions take their arguments as a tuple.
///
/// # Thread Safety
///
/// This type is NOT thread-safe.
pub struct Once<F, A, R> {
    function: Cell<Option<F>>,
    result: OnceCell<R>,
    _arguments: PhantomData<fn(A)>,
}

/// Wraps `function` so that it runs only on the first call.
#[inline]
pub fn once<F, A, R>(function: F) -> Once<F, A, R>
where
    F: FnOnce(A) -> R,
{
    Once::new(function)
}

impl<F, A, R> Once<F, A, R>
where
    F: FnOnce(A) -> R,
{
    /// Creates a new run-once wrapper around `function`.
    #[inline]
    pub const fn new(function: F) -> Self {
        Self {
            function: Cell::new(Some(function)),
            result: OnceCell::new(),
            _arguments: PhantomData,
        }
    }

    /// Invokes the function on the first call and returns the cached result.
    ///
    /// On later calls `args` is dropped without being looked at.
    ///
    /// # Panics
    ///
    /// - If the function calls this wrapper again while it is running.
    /// - If a previous first call panicked; the function is gone and no
    ///   result was ever stored.
    pub fn call(&self, args: A) -> &R {
        self.result.get_or_init(|| match self.function.take() {
            Some(function) => {
                tracing::trace!("once: running wrapped function");
                function(args)
            }
            None => panic!("Once function re-entered or panicked during its first call"),
        })
    }

    /// Returns the cached result, or `None` before the first call.
    #[inline]
    pub fn get(&self) -> Option<&R> {
        self.result.get()
    }

    /// Returns `true` once the function has produced its result.
    #[inline]
    pub fn is_called(&self) -> bool {
        self.result.get().is_some()
    }
}

impl<F, A, R: fmt::Debug> fmt::Debug for Once<F, A, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.result.get() {
            Some(result) => formatter.debug_tuple("Once").field(result).finish(),
            None => formatter.write_str("Once(<pending>)"),
        }
    }
}
