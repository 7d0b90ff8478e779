//! Deferred counterpart of [`CatchFuture`](super::CatchFuture) for inline outcomes.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use std::panic::{self, AssertUnwindSafe};

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;

use crate::types::{Exception, ValueOutcome};

use super::catch_future::poll_caught;

pin_project! {
    /// A future that creates its inner future on first poll and resolves to a
    /// [`ValueOutcome`].
    ///
    /// Nothing runs until the future is polled: the factory closure is stored
    /// as-is, and a panic inside the factory is captured like any other.
    #[must_use = "futures do nothing unless polled"]
    pub struct LazyCatchFuture<F, Fut> {
        factory: Option<F>,
        #[pin]
        future: Option<Fut>,
    }
}

impl<F, Fut> LazyCatchFuture<F, Fut> {
    #[inline]
    pub fn new(factory: F) -> Self {
        Self { factory: Some(factory), future: None }
    }
}

impl<F, Fut, T, X> Future for LazyCatchFuture<F, Fut>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, X>>,
    X: Into<Exception>,
{
    type Output = ValueOutcome<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();

        if let Some(factory) = this.factory.take() {
            match panic::catch_unwind(AssertUnwindSafe(factory)) {
                Ok(future) => this.future.set(Some(future)),
                Err(payload) => {
                    return Poll::Ready(ValueOutcome::Error(Exception::from_panic(payload)));
                },
            }
        }

        let future = match this.future.as_mut().as_pin_mut() {
            Some(future) => future,
            None => panic!("LazyCatchFuture polled after completion; this is a bug"),
        };

        match poll_caught(future, cx) {
            Poll::Pending => Poll::Pending,
            Poll::Ready(caught) => {
                this.future.set(None);
                Poll::Ready(caught.into())
            },
        }
    }
}

impl<F, Fut, T, X> FusedFuture for LazyCatchFuture<F, Fut>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, X>>,
    X: Into<Exception>,
{
    fn is_terminated(&self) -> bool {
        self.factory.is_none() && self.future.is_none()
    }
}
