//! Tokio-specific adapters.
//!
//! # Feature Flag
//!
//! Requires the `async-tokio` feature:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.3", features = ["async-tokio"] }
//! ```

use core::future::Future;
use core::time::Duration;

use crate::types::{Exception, Outcome};

use super::try_catch_async;

/// Awaits `future` for at most `duration`.
///
/// Running out of time is a failure carrying `tokio::time::error::Elapsed`;
/// otherwise behaves like [`try_catch_async`].
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use outcome_rail::async_ext::try_catch_timeout;
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let outcome = try_catch_timeout(Duration::from_millis(5), async {
///         tokio::time::sleep(Duration::from_secs(5)).await;
///         Ok::<_, std::io::Error>(1)
///     })
///     .await;
///
///     assert!(outcome.is_error_and(|e| e.is::<tokio::time::error::Elapsed>()));
/// }
/// ```
pub async fn try_catch_timeout<Fut, T, X>(duration: Duration, future: Fut) -> Outcome<T>
where
    Fut: Future<Output = Result<T, X>>,
    X: Into<Exception>,
{
    match tokio::time::timeout(duration, try_catch_async(future)).await {
        Ok(outcome) => outcome,
        Err(elapsed) => {
            trace_debug!(?duration, "wrapped future timed out");
            Outcome::fail(Exception::new(elapsed))
        },
    }
}

/// Runs a blocking callback on Tokio's blocking pool.
///
/// An `Err` from the callback or a panic inside it becomes a failure; a panic
/// keeps its message as a [`PanicError`](crate::PanicError).
pub async fn try_catch_blocking<F, T, X>(f: F) -> Outcome<T>
where
    F: FnOnce() -> Result<T, X> + Send + 'static,
    T: Send + 'static,
    X: Into<Exception> + Send + 'static,
{
    match tokio::task::spawn_blocking(f).await {
        Ok(result) => result.map_err(Into::into).into(),
        Err(join_error) if join_error.is_panic() => {
            Outcome::fail(Exception::from_panic(join_error.into_panic()))
        },
        Err(join_error) => Outcome::fail(Exception::new(join_error)),
    }
}
