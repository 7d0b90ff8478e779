//! Tower integration for outcome-rail.
//!
//! This module provides a Tower `Layer` and `Service` that turn a service's
//! failures into [`Outcome`] responses instead of service errors.
//!
//! # Feature Flag
//!
//! Requires the `tower` feature:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.3", features = ["tower"] }
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use outcome_rail::tower::OutcomeLayer;
//! use tower::ServiceBuilder;
//!
//! let service = ServiceBuilder::new()
//!     .layer(OutcomeLayer::new())
//!     .service(my_service);
//! ```

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;
use tower::{Layer, Service};

use crate::async_ext::poll_caught;
use crate::types::{Exception, Outcome};

/// A Tower [`Layer`] that wraps services in [`OutcomeService`].
#[derive(Clone, Copy, Debug, Default)]
pub struct OutcomeLayer;

impl OutcomeLayer {
    #[inline]
    pub const fn new() -> Self {
        Self
    }
}

impl<S> Layer<S> for OutcomeLayer {
    type Service = OutcomeService<S>;

    #[inline]
    fn layer(&self, inner: S) -> Self::Service {
        OutcomeService::new(inner)
    }
}

/// A Tower [`Service`] whose responses are [`Outcome`]s.
///
/// An `Err` from the inner service's response future, or a panic while polling
/// it, becomes a failed outcome. Only readiness errors are still reported as
/// service errors, converted into [`Exception`].
#[derive(Clone, Debug)]
pub struct OutcomeService<S> {
    inner: S,
}

impl<S> OutcomeService<S> {
    #[inline]
    pub const fn new(inner: S) -> Self {
        Self { inner }
    }

    #[inline]
    pub const fn inner(&self) -> &S {
        &self.inner
    }

    #[inline]
    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    #[inline]
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S, Request> Service<Request> for OutcomeService<S>
where
    S: Service<Request>,
    S::Error: Into<Exception>,
{
    type Response = Outcome<S::Response>;
    type Error = Exception;
    type Future = OutcomeFuture<S::Future>;

    #[inline]
    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx).map_err(Into::into)
    }

    #[inline]
    fn call(&mut self, request: Request) -> Self::Future {
        OutcomeFuture::new(self.inner.call(request))
    }
}

pin_project! {
    /// Future returned by [`OutcomeService`].
    #[must_use = "futures do nothing unless polled"]
    pub struct OutcomeFuture<F> {
        #[pin]
        inner: F,
        terminated: bool,
    }
}

impl<F> OutcomeFuture<F> {
    #[inline]
    fn new(inner: F) -> Self {
        Self { inner, terminated: false }
    }
}

impl<F, T, E> Future for OutcomeFuture<F>
where
    F: Future<Output = Result<T, E>>,
    E: Into<Exception>,
{
    type Output = Result<Outcome<T>, Exception>;

    #[inline]
    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        poll_caught(this.inner, cx).map(|caught| {
            *this.terminated = true;
            Ok(Outcome::from(caught))
        })
    }
}

impl<F, T, E> FusedFuture for OutcomeFuture<F>
where
    F: Future<Output = Result<T, E>>,
    E: Into<Exception>,
{
    #[inline]
    fn is_terminated(&self) -> bool {
        self.terminated
    }
}

/// Extension trait for wrapping a service in [`OutcomeService`].
pub trait ServiceOutcomeExt<Request>: Service<Request> + Sized {
    /// Wraps this service so that its responses are outcomes.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use outcome_rail::tower::ServiceOutcomeExt;
    ///
    /// let wrapped = my_service.catch_outcome();
    /// ```
    fn catch_outcome(self) -> OutcomeService<Self> {
        OutcomeService::new(self)
    }
}

impl<S, Request> ServiceOutcomeExt<Request> for S where S: Service<Request> {}
