use std::io;

use outcome_rail::async_ext::{ready, try_catch_async, try_catch_async_with};
use outcome_rail::{Exception, Outcome, PanicError};

#[tokio::test]
async fn resolves_success() {
    let outcome = try_catch_async(async { Ok::<_, io::Error>(5) }).await;
    assert_eq!(outcome.value(), Ok(&5));
}

#[tokio::test]
async fn resolves_err_to_failure() {
    let outcome = try_catch_async(async {
        Err::<i32, _>(io::Error::new(io::ErrorKind::TimedOut, "too slow"))
    })
    .await;

    let error = outcome.error().unwrap();
    assert_eq!(error.downcast_ref::<io::Error>().map(io::Error::kind), Some(io::ErrorKind::TimedOut));
}

#[tokio::test]
async fn captures_panic_while_polling() {
    let outcome = try_catch_async(async {
        if true {
            panic!("async boom");
        }
        Ok::<i32, io::Error>(1)
    })
    .await;

    let error = outcome.error().unwrap();
    assert_eq!(error.downcast_ref::<PanicError>().map(PanicError::message), Some("async boom"));
}

#[tokio::test]
async fn error_factory_builds_typed_error() {
    let outcome = try_catch_async_with(async { "x".parse::<u8>() }, |exception| exception.to_string())
        .await;

    assert!(outcome.is_error_and(|message| message.contains("invalid digit")));
}

#[tokio::test]
async fn error_factory_not_called_on_success() {
    let outcome: Outcome<u8, usize> =
        try_catch_async_with(async { "7".parse::<u8>() }, |_: Exception| -> usize {
            unreachable!()
        })
        .await;

    assert_eq!(outcome.value(), Ok(&7));
}

#[tokio::test]
async fn ready_wraps_existing_outcome() {
    let outcome: Outcome<i32> = Outcome::ok(3);
    assert!(ready(outcome.clone()).await.ptr_eq(&outcome));
}
