//! Tests for Tokio integration.

use std::io;
use std::time::Duration;

use outcome_rail::async_ext::{try_catch_blocking, try_catch_timeout};
use outcome_rail::PanicError;

#[tokio::test]
async fn timeout_passes_through_fast_futures() {
    let outcome = try_catch_timeout(Duration::from_secs(5), async { Ok::<_, io::Error>(1) }).await;
    assert_eq!(outcome.value(), Ok(&1));
}

#[tokio::test]
async fn timeout_elapsed_is_failure() {
    let outcome = try_catch_timeout(Duration::from_millis(10), async {
        tokio::time::sleep(Duration::from_secs(10)).await;
        Ok::<_, io::Error>(1)
    })
    .await;

    assert!(outcome.is_error_and(|e| e.is::<tokio::time::error::Elapsed>()));
}

#[tokio::test]
async fn timeout_keeps_inner_error() {
    let outcome = try_catch_timeout(Duration::from_secs(5), async {
        Err::<i32, _>(io::Error::new(io::ErrorKind::ConnectionRefused, "refused"))
    })
    .await;

    assert!(outcome.is_error_and(|e| e.is::<io::Error>()));
}

#[tokio::test]
async fn blocking_returns_value() {
    let outcome = try_catch_blocking(|| Ok::<_, io::Error>(2 + 2)).await;
    assert_eq!(outcome.value(), Ok(&4));
}

#[tokio::test]
async fn blocking_panic_keeps_message() {
    let outcome = try_catch_blocking(|| -> Result<i32, io::Error> { panic!("blocking boom") }).await;

    let error = outcome.error().unwrap();
    assert_eq!(error.downcast_ref::<PanicError>().map(PanicError::message), Some("blocking boom"));
}
