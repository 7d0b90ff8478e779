//! Async adapters for outcome-rail.
//!
//! [`try_catch_async`] awaits a future and returns its outcome instead of
//! propagating an error or a panic. [`try_catch_ref_async`] does the same for
//! inline outcomes, but defers creating the future until it is first polled.
//!
//! # Feature Flag
//!
//! Requires the `async` feature to be enabled:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.3", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```rust
//! use outcome_rail::async_ext::{try_catch_async, try_catch_ref_async};
//!
//! async fn example() {
//!     let shared = try_catch_async(async { "1".parse::<i32>() }).await;
//!     let inline = try_catch_ref_async(|| async { "2".parse::<i32>() }).await;
//!     assert_eq!(shared.value(), Ok(&1));
//!     assert_eq!(inline.value(), Ok(&2));
//! }
//! ```

use core::future::Future;

use crate::types::{Exception, Outcome};

mod catch_future;
mod lazy_catch;
#[cfg(feature = "async-tokio")]
mod tokio_ext;

pub use catch_future::CatchFuture;
pub use lazy_catch::LazyCatchFuture;
#[cfg(feature = "async-tokio")]
pub use tokio_ext::{try_catch_blocking, try_catch_timeout};

#[cfg(feature = "tower")]
pub(crate) use catch_future::poll_caught;

/// Error mapping used when the caught [`Exception`] is kept as-is.
pub type KeepException = fn(Exception) -> Exception;

/// Awaits `future`; an `Err` or a panic resolves to a failed [`Outcome`].
///
/// Cancellation gets no special treatment: if the future reacts to it by
/// returning an error, that error is the failure.
#[inline]
pub fn try_catch_async<Fut, T, X>(future: Fut) -> CatchFuture<Fut, KeepException>
where
    Fut: Future<Output = Result<T, X>>,
    X: Into<Exception>,
{
    CatchFuture::new(future, core::convert::identity as KeepException)
}

/// Like [`try_catch_async`], mapping a caught exception into a typed error.
#[inline]
pub fn try_catch_async_with<Fut, T, X, E, G>(future: Fut, error_factory: G) -> CatchFuture<Fut, G>
where
    Fut: Future<Output = Result<T, X>>,
    X: Into<Exception>,
    G: FnOnce(Exception) -> E,
{
    CatchFuture::new(future, error_factory)
}

/// Deferred, inline counterpart of [`try_catch_async`]: `factory` is not
/// called until the returned future is first polled.
#[inline]
pub fn try_catch_ref_async<F, Fut, T, X>(factory: F) -> LazyCatchFuture<F, Fut>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, X>>,
    X: Into<Exception>,
{
    LazyCatchFuture::new(factory)
}

/// Wraps an existing outcome in an already-completed future.
#[inline]
pub fn ready<T, E>(outcome: Outcome<T, E>) -> core::future::Ready<Outcome<T, E>> {
    outcome.into_ready()
}
