//! Future wrapper that turns an error or a panic into a failed outcome.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use std::panic::{self, AssertUnwindSafe};

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;

use crate::types::{Exception, Outcome};

pin_project! {
    /// A Future wrapper that captures the wrapped future's failure.
    ///
    /// Resolves to `Outcome::ok` when the inner future returns `Ok`, and to a
    /// failure when it returns `Err` or panics while being polled. The caught
    /// [`Exception`] is passed through `error_factory` to build the error.
    ///
    /// # Cancel Safety
    ///
    /// `CatchFuture` is cancel-safe if the inner future is cancel-safe.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome_rail::async_ext::try_catch_async;
    ///
    /// async fn example() {
    ///     let outcome = try_catch_async(async { "7".parse::<i32>() }).await;
    ///     assert_eq!(outcome.value(), Ok(&7));
    /// }
    /// ```
    #[must_use = "futures do nothing unless polled"]
    pub struct CatchFuture<Fut, G> {
        #[pin]
        future: Fut,
        error_factory: Option<G>,
    }
}

impl<Fut, G> CatchFuture<Fut, G> {
    /// Creates a new `CatchFuture` with the given future and error mapping.
    #[inline]
    pub fn new(future: Fut, error_factory: G) -> Self {
        Self { future, error_factory: Some(error_factory) }
    }
}

impl<Fut, G, T, X, E> Future for CatchFuture<Fut, G>
where
    Fut: Future<Output = Result<T, X>>,
    X: Into<Exception>,
    G: FnOnce(Exception) -> E,
{
    type Output = Outcome<T, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        poll_caught(this.future, cx).map(|caught| {
            let error_factory = this
                .error_factory
                .take()
                .expect("CatchFuture polled after completion; this is a bug");
            match caught {
                Ok(value) => Outcome::ok(value),
                Err(exception) => Outcome::fail(error_factory(exception)),
            }
        })
    }
}

impl<Fut, G, T, X, E> FusedFuture for CatchFuture<Fut, G>
where
    Fut: Future<Output = Result<T, X>>,
    X: Into<Exception>,
    G: FnOnce(Exception) -> E,
{
    fn is_terminated(&self) -> bool {
        self.error_factory.is_none()
    }
}

/// Polls `future` once inside a panic boundary.
pub(crate) fn poll_caught<Fut, T, X>(
    future: Pin<&mut Fut>,
    cx: &mut Context<'_>,
) -> Poll<Result<T, Exception>>
where
    Fut: Future<Output = Result<T, X>>,
    X: Into<Exception>,
{
    match panic::catch_unwind(AssertUnwindSafe(|| future.poll(cx))) {
        Ok(Poll::Pending) => Poll::Pending,
        Ok(Poll::Ready(result)) => Poll::Ready(result.map_err(Into::into)),
        Err(payload) => {
            let exception = Exception::from_panic(payload);
            trace_debug!(error = %exception, "captured panic from wrapped future");
            Poll::Ready(Err(exception))
        },
    }
}
