use std::io;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use outcome_rail::async_ext::try_catch_ref_async;
use outcome_rail::{PanicError, ValueOutcome};

#[tokio::test]
async fn factory_runs_only_when_polled() {
    let calls = Arc::new(AtomicU32::new(0));
    let calls_clone = calls.clone();

    let future = try_catch_ref_async(move || {
        calls_clone.fetch_add(1, Ordering::SeqCst);
        async { Ok::<_, io::Error>("done") }
    });
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    let outcome = future.await;
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(outcome, ValueOutcome::Ok("done"));
}

#[tokio::test]
async fn dropped_without_polling_never_runs() {
    let calls = Arc::new(AtomicU32::new(0));
    let calls_clone = calls.clone();

    drop(try_catch_ref_async(move || {
        calls_clone.fetch_add(1, Ordering::SeqCst);
        async { Ok::<_, io::Error>(()) }
    }));

    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn err_becomes_failure() {
    let outcome = try_catch_ref_async(|| async { "nope".parse::<i32>() }).await;
    assert!(outcome.is_error_and(|e| e.is::<std::num::ParseIntError>()));
}

#[tokio::test]
async fn panic_in_factory_is_captured() {
    let outcome = try_catch_ref_async(|| -> std::future::Ready<Result<i32, io::Error>> {
        panic!("factory failed")
    })
    .await;

    let message = outcome.try_get_error().and_then(|e| e.downcast_ref::<PanicError>()).map(PanicError::message);
    assert_eq!(message, Some("factory failed"));
}

#[tokio::test]
async fn awaits_across_yield_points() {
    let outcome = try_catch_ref_async(|| async {
        tokio::task::yield_now().await;
        Ok::<_, io::Error>(11)
    })
    .await;

    assert_eq!(outcome.into_value().ok(), Some(11));
}
