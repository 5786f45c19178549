//! Delayed invocation on the tokio timer.
//!
//! [`delay`] schedules a function call after a wait and hands back a
//! [`DelayHandle`] that can cancel the call or await its result. The call runs
//! on the runtime that was current when `delay` was invoked.
//!
//! # Examples
//!
//! ```rust
//! use combinars::schedule::delay;
//! use std::time::Duration;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let handle = delay(|(left, right): (i32, i32)| left + right, Duration::from_millis(5), (2, 3))
//!     .expect("inside a runtime");
//! assert_eq!(handle.join().await, Ok(5));
//! # }
//! ```

use std::fmt;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Represents errors that can occur when scheduling or awaiting a delayed call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelayError {
    /// `delay` was called outside a tokio runtime.
    NoRuntime,
    /// The call was cancelled before it ran.
    Cancelled,
    /// The delayed function panicked.
    Panicked,
}

impl fmt::Display for DelayError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoRuntime => write!(
                formatter,
                "cannot schedule delayed call: no tokio runtime is running on this thread"
            ),
            Self::Cancelled => write!(formatter, "delayed call was cancelled"),
            Self::Panicked => write!(formatter, "delayed call panicked"),
        }
    }
}

impl std::error::Error for DelayError {}

/// A pending delayed call.
///
/// Dropping the handle does not cancel the call; use [`cancel`](Self::cancel).
#[derive(Debug)]
pub struct DelayHandle<R> {
    task: JoinHandle<R>,
    wait: Duration,
}

impl<R> DelayHandle<R> {
    /// Cancels the call if it has not run yet.
    ///
    /// Cancelling a call that already ran has no effect.
    pub fn cancel(&self) {
        log::debug!("delay: cancelling call scheduled after {:?}", self.wait);
        self.task.abort();
    }

    /// Returns `true` once the call has completed or been cancelled.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Returns the wait the call was scheduled with.
    #[must_use]
    pub const fn wait(&self) -> Duration {
        self.wait
    }

    /// Waits for the call and returns its result.
    ///
    /// # Errors
    ///
    /// Returns [`DelayError::Cancelled`] if the call was cancelled before it
    /// ran, or [`DelayError::Panicked`] if the function panicked.
    pub async fn join(self) -> Result<R, DelayError> {
        self.task.await.map_err(|error| {
            if error.is_cancelled() {
                DelayError::Cancelled
            } else {
                DelayError::Panicked
            }
        })
    }
}

/// Calls `function(arguments)` after `wait` on the current tokio runtime.
///
/// Functions of several arguments take a tuple, which is forwarded as-is.
///
/// # Errors
///
/// Returns [`DelayError::NoRuntime`] if no tokio runtime is running on the
/// calling thread.
///
/// # Examples
///
/// ```rust
/// use combinars::schedule::{DelayError, delay};
/// use std::time::Duration;
///
/// // Outside a runtime there is nothing to schedule on.
/// let result = delay(|()| 1, Duration::from_millis(1), ());
/// assert_eq!(result.err(), Some(DelayError::NoRuntime));
/// ```
pub fn delay<F, A, R>(function: F, wait: Duration, arguments: A) -> Result<DelayHandle<R>, DelayError>
where
    F: FnOnce(A) -> R + Send + 'static,
    A: Send + 'static,
    R: Send + 'static,
{
    let runtime = Handle::try_current().map_err(|_| DelayError::NoRuntime)?;
    log::debug!("delay: scheduling call after {wait:?}");
    let task = runtime.spawn(async move {
        tokio::time::sleep(wait).await;
        function(arguments)
    });
    Ok(DelayHandle { task, wait })
}
