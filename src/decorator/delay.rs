//! Deferred invocation on the tokio clock.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use super::error::DecoratorError;

/// Schedules `function(args)` to run once, no earlier than `wait` from now.
///
/// Returns immediately with a handle to the scheduled task; awaiting it
/// yields the function's result, dropping it leaves the task running. The
/// task is spawned on the runtime the caller is running in. On a
/// current-thread runtime it never runs concurrently with other code.
///
/// # Errors
///
/// Returns [`DecoratorError::NoRuntime`] when called outside a tokio runtime.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use underbar::decorator::delay;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let handle = delay(|(left, right): (i32, i32)| left + right, Duration::from_millis(5), (2, 3)).unwrap();
/// assert_eq!(handle.await.unwrap(), 5);
/// # }
/// ```
pub fn delay<F, A, R>(function: F, wait: Duration, args: A) -> Result<JoinHandle<R>, DecoratorError>
where
    F: FnOnce(A) -> R + Send + 'static,
    A: Send + 'static,
    R: Send + 'static,
{
    let handle = Handle::try_current().map_err(|_| DecoratorError::NoRuntime { operation: "delay" })?;
    tracing::trace!(wait = ?wait, "delay: scheduled");
    Ok(handle.spawn(async move {
        tokio::time::sleep(wait).await;
        function(args)
    }))
}
