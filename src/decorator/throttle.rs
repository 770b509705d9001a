//! Leading-edge rate limiting.
//!
//! A [`Throttle`] invokes its function on the first call, then drops every
//! call for the next `wait`. Dropped calls are not queued and never run
//! later. Once `wait` has elapsed, the next call goes through and opens a new
//! window.
//!
//! The window is tracked as a deadline on the tokio clock
//! ([`tokio::time::Instant`]), so `tokio::time::pause` and
//! `tokio::time::advance` control it in tests. Outside a paused runtime it
//! follows the system monotonic clock.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::marker::PhantomData;
use std::time::Duration;

use tokio::time::Instant;

/// The suppression state between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Window {
    /// No call has run yet.
    Open,
    /// Calls are dropped until this deadline.
    Until(Instant),
    /// `wait` reaches past the end of the clock; calls are dropped for good.
    Forever,
}

/// A function that runs at most once per `wait` window.
///
/// # Reentrancy
///
/// The window opens before the function runs, so a call made from inside
/// the function itself is dropped like any other call in the window. With a
/// zero `wait` there is no window, and a reentrant call panics.
///
/// A `wait` too long to add to the current instant, such as
/// [`Duration::MAX`], suppresses every call after the first.
///
/// # Thread Safety
///
/// This type is NOT thread-safe.
pub struct Throttle<F, A, R> {
    function: RefCell<F>,
    wait: Duration,
    window: Cell<Window>,
    _signature: PhantomData<fn(A) -> R>,
}

/// Wraps `function` so that it runs at most once per `wait`.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use underbar::decorator::throttle;
///
/// let mut fired = 0;
/// {
///     let throttled = throttle(|(): ()| fired += 1, Duration::from_secs(60));
///     assert_eq!(throttled.call(()), Some(()));
///     assert_eq!(throttled.call(()), None);
/// }
/// assert_eq!(fired, 1);
/// ```
#[inline]
pub fn throttle<F, A, R>(function: F, wait: Duration) -> Throttle<F, A, R>
where
    F: FnMut(A) -> R,
{
    Throttle::new(function, wait)
}

impl<F, A, R> Throttle<F, A, R>
where
    F: FnMut(A) -> R,
{
    /// Creates a new throttled wrapper around `function`.
    pub const fn new(function: F, wait: Duration) -> Self {
        Self {
            function: RefCell::new(function),
            wait,
            window: Cell::new(Window::Open),
            _signature: PhantomData,
        }
    }

    /// Invokes the function unless the current window suppresses it.
    ///
    /// Returns `Some(result)` when the function ran and `None` when the call
    /// was dropped.
    pub fn call(&self, args: A) -> Option<R> {
        let now = Instant::now();
        if self.is_suppressed_at(now) {
            tracing::trace!("throttle: call dropped");
            return None;
        }
        self.window
            .set(now.checked_add(self.wait).map_or(Window::Forever, Window::Until));
        let mut function = self.function.borrow_mut();
        Some((*function)(args))
    }

    /// Returns `true` if a call made now would be dropped.
    pub fn is_suppressed(&self) -> bool {
        self.is_suppressed_at(Instant::now())
    }

    /// Returns the configured window length.
    #[inline]
    pub const fn wait(&self) -> Duration {
        self.wait
    }

    fn is_suppressed_at(&self, now: Instant) -> bool {
        match self.window.get() {
            Window::Open => false,
            Window::Until(deadline) => now < deadline,
            Window::Forever => true,
        }
    }
}

impl<F, A, R> fmt::Debug for Throttle<F, A, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Throttle")
            .field("wait", &self.wait)
            .field("window", &self.window.get())
            .finish_non_exhaustive()
    }
}
