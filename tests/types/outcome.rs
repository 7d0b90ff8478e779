use std::cell::Cell;

use outcome_rail::{Exception, Outcome, ResultError, UnitOutcome, ValueOutcome};

#[test]
fn ok_and_error_are_exclusive() {
    let ok: Outcome<i32, String> = Outcome::ok(1);
    let failed: Outcome<i32, String> = Outcome::fail("e".to_string());

    assert!(ok.is_ok() && !ok.is_error());
    assert!(failed.is_error() && !failed.is_ok());
}

#[test]
fn value_and_error_access_signal_misuse() {
    let ok: Outcome<i32, String> = Outcome::ok(1);
    let failed: Outcome<i32, String> = Outcome::fail("e".to_string());

    assert_eq!(ok.value(), Ok(&1));
    assert_eq!(ok.error(), Err(ResultError::NoError));
    assert_eq!(failed.value(), Err(ResultError::NoValue));
    assert_eq!(failed.error().map(String::as_str), Ok("e"));
}

#[test]
fn try_get_matches_state() {
    let ok: Outcome<i32, String> = Outcome::ok(3);
    let failed: Outcome<i32, String> = Outcome::fail("e".to_string());

    assert_eq!(ok.try_get_value(), Some(&3));
    assert_eq!(ok.try_get_error(), None);
    assert_eq!(failed.try_get_value(), None);
    assert_eq!(failed.try_get_error().map(String::as_str), Some("e"));
}

#[test]
fn default_outcome_has_no_value() {
    let outcome: Outcome<i32> = Outcome::default();

    assert!(outcome.is_error());
    let error = outcome.error().unwrap();
    assert_eq!(error.downcast_ref::<ResultError>(), Some(&ResultError::NoValue));
    assert_eq!(error.to_string(), "No value present");
}

#[test]
fn absent_payloads_are_rejected_at_construction() {
    assert_eq!(
        Outcome::<i32, String>::try_ok(None).err(),
        Some(ResultError::AbsentArgument { name: "value" })
    );
    assert_eq!(
        Outcome::<i32, String>::try_fail(None).err(),
        Some(ResultError::AbsentArgument { name: "error" })
    );
    assert!(Outcome::<i32, String>::try_ok(Some(1)).unwrap().is_ok());
}

#[test]
fn from_option_maps_none_to_no_value() {
    let some: Outcome<i32> = Some(4).into();
    let none: Outcome<i32> = None.into();

    assert_eq!(some.value(), Ok(&4));
    assert!(none.is_error_and(|e| e.is::<ResultError>()));
}

#[test]
fn map_skips_the_function_on_failure() {
    let calls = Cell::new(0);
    let failed: Outcome<i32, String> = Outcome::fail("kept".to_string());

    let mapped = failed.map(|x| {
        calls.set(calls.get() + 1);
        x + 1
    });

    assert_eq!(calls.get(), 0);
    assert_eq!(mapped.error().map(String::as_str), Ok("kept"));
}

#[test]
fn map_preserves_exception_identity() {
    let exception = Exception::msg("original");
    let failed: Outcome<i32> = Outcome::fail(exception.clone());

    let mapped = failed.map(|x| x.to_string());
    assert!(mapped.error().unwrap().ptr_eq(&exception));
}

#[test]
fn map_both_and_map_error() {
    let ok: Outcome<i32, String> = Outcome::ok(2);
    let failed: Outcome<i32, String> = Outcome::fail("bad".to_string());

    assert_eq!(ok.map_both(|x| x * 10, |e| e.len()).value(), Ok(&20));
    assert_eq!(failed.map_both(|x| x * 10, |e| e.len()).error(), Ok(&3));
    assert_eq!(failed.map_error(|e| e.to_uppercase()).error().map(String::as_str), Ok("BAD"));
    assert_eq!(ok.map_error(|e| e.len()).value(), Ok(&2));
}

#[test]
fn and_then_chains_only_successes() {
    let half = |x: &i32| {
        if x % 2 == 0 {
            Outcome::ok(x / 2)
        } else {
            Outcome::fail("odd".to_string())
        }
    };

    assert_eq!(Outcome::<i32, String>::ok(8).and_then(half).value(), Ok(&4));
    assert!(Outcome::<i32, String>::ok(3).and_then(half).is_error());
}

#[test]
fn or_returns_the_same_success() {
    let ok: Outcome<i32, String> = Outcome::ok(1);
    let failed: Outcome<i32, String> = Outcome::fail("e".to_string());

    assert!(ok.or(2).ptr_eq(&ok));
    assert_eq!(failed.or(2).value(), Ok(&2));
}

#[test]
fn or_with_factory_only_runs_on_failure() {
    let calls = Cell::new(0);
    let factory = || {
        calls.set(calls.get() + 1);
        9
    };

    let ok: Outcome<i32, String> = Outcome::ok(1);
    assert_eq!(ok.or_with(factory).value(), Ok(&1));
    assert_eq!(calls.get(), 0);

    let failed: Outcome<i32, String> = Outcome::fail("e".to_string());
    assert_eq!(failed.or_with(factory).value(), Ok(&9));
    assert_eq!(calls.get(), 1);
}

#[test]
fn or_default_unwraps_or_falls_back() {
    let ok: Outcome<i32, String> = Outcome::ok(1);
    let failed: Outcome<i32, String> = Outcome::fail("e".to_string());

    assert_eq!(ok.or_default(5), 1);
    assert_eq!(failed.or_default(5), 5);
    assert_eq!(failed.or_default_with(|| 6), 6);
}

#[test]
fn or_error_keeps_failures_and_replaces_successes() {
    let ok: Outcome<i32, String> = Outcome::ok(1);
    let failed: Outcome<i32, String> = Outcome::fail("first".to_string());

    assert!(failed.or_error("second".to_string()).ptr_eq(&failed));
    assert_eq!(ok.or_error("forced".to_string()).error().map(String::as_str), Ok("forced"));
    assert_eq!(ok.or_error_with(|| "lazy".to_string()).error().map(String::as_str), Ok("lazy"));
}

#[test]
fn or_error_default_unwraps_the_error_or_falls_back() {
    let ok: Outcome<i32, String> = Outcome::ok(1);
    let failed: Outcome<i32, String> = Outcome::fail("real".to_string());

    assert_eq!(failed.or_error_default("fallback".to_string()), "real");
    assert_eq!(ok.or_error_default("fallback".to_string()), "fallback");
    assert_eq!(ok.or_error_default_with(|| "lazy".to_string()), "lazy");
}

#[test]
fn inspect_runs_conditionally_and_returns_self() {
    let seen = Cell::new(0);
    let ok: Outcome<i32, String> = Outcome::ok(4);
    let failed: Outcome<i32, String> = Outcome::fail("e".to_string());

    let same = ok.inspect(|value| seen.set(*value)).inspect_error(|_| seen.set(-1));
    assert!(same.ptr_eq(&ok));
    assert_eq!(seen.get(), 4);

    let same = failed.inspect(|_| seen.set(100)).inspect_error(|e| seen.set(e.len() as i32));
    assert!(same.ptr_eq(&failed));
    assert_eq!(seen.get(), 1);
}

#[test]
fn predicates_combine_state_and_payload() {
    let ok: Outcome<i32, String> = Outcome::ok(4);
    let failed: Outcome<i32, String> = Outcome::fail("bad".to_string());

    assert!(ok.is_ok_and(|x| *x == 4));
    assert!(!ok.is_ok_and(|x| *x == 5));
    assert!(!failed.is_ok_and(|_| true));
    assert!(failed.is_error_and(|e| e == "bad"));
    assert!(!ok.is_error_and(|_| true));
}

#[test]
fn expect_returns_value() {
    let ok: Outcome<i32, String> = Outcome::ok(4);
    assert_eq!(*ok.expect("value required"), 4);

    let failed: Outcome<i32, String> = Outcome::fail("bad".to_string());
    assert_eq!(failed.expect_error("error required"), "bad");
}

#[test]
#[should_panic(expected = "value required")]
fn expect_panics_with_message_on_failure() {
    let failed: Outcome<i32, String> = Outcome::fail("bad".to_string());
    let _ = failed.expect("value required");
}

#[test]
#[should_panic(expected = "error required")]
fn expect_error_panics_with_message_on_success() {
    let ok: Outcome<i32, String> = Outcome::ok(1);
    let _ = ok.expect_error("error required");
}

#[test]
fn equality_compares_payloads() {
    let a: Outcome<i32, String> = Outcome::ok(1);
    let b: Outcome<i32, String> = Outcome::ok(1);
    let c: Outcome<i32, String> = Outcome::ok(2);
    let e1: Outcome<i32, String> = Outcome::fail("e".to_string());
    let e2: Outcome<i32, String> = Outcome::fail("e".to_string());

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(e1, e2);
    assert_ne!(a, e1);
}

#[test]
fn exception_outcomes_compare_by_exception_identity() {
    let exception = Exception::msg("x");
    let a: Outcome<i32> = Outcome::fail(exception.clone());
    let b: Outcome<i32> = Outcome::fail(exception);
    let c: Outcome<i32> = Outcome::fail(Exception::msg("x"));

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn absent_comparand_equals_only_failures() {
    let ok: Outcome<i32, String> = Outcome::ok(1);
    let failed: Outcome<i32, String> = Outcome::fail("e".to_string());

    assert!(failed == None);
    assert!(ok != None);
    assert!(ok == Some(Outcome::ok(1)));
}

#[test]
fn into_result_value_and_error() {
    let ok: Outcome<i32, String> = Outcome::ok(1);
    let failed: Outcome<i32, String> = Outcome::fail("e".to_string());

    assert_eq!(ok.clone().into_result(), Ok(1));
    assert_eq!(failed.clone().into_result(), Err("e".to_string()));
    assert_eq!(ok.clone().into_value(), Ok(1));
    assert_eq!(failed.clone().into_value(), Err(ResultError::NoValue));
    assert_eq!(ok.into_error(), Err(ResultError::NoError));
    assert_eq!(failed.into_error(), Ok("e".to_string()));
}

#[test]
fn into_value_outcome_moves_state_out() {
    let outcome: Outcome<Vec<i32>, String> = Outcome::ok(vec![1, 2, 3]);
    let inline: ValueOutcome<Vec<i32>, String> = outcome.into_value_outcome();

    assert_eq!(inline, ValueOutcome::Ok(vec![1, 2, 3]));
}

#[test]
fn shared_outcome_converts_without_disturbing_other_handles() {
    let outcome: Outcome<String, String> = Outcome::ok("shared".to_string());
    let other = outcome.clone();

    let inline = outcome.into_value_outcome();
    assert_eq!(inline.value().map(String::as_str), Ok("shared"));
    assert_eq!(other.value().map(String::as_str), Ok("shared"));
}

#[test]
fn unit_outcome_carries_only_state() {
    let done: UnitOutcome = Outcome::ok(());
    let failed: UnitOutcome = Outcome::fail_with(std::fmt::Error);

    assert!(done.is_ok());
    assert!(failed.is_error_and(|e| e.is::<std::fmt::Error>()));
}

#[test]
fn collecting_stops_at_first_failure() {
    let visited = Cell::new(0);
    let outcomes = (0..5).map(|i| {
        visited.set(visited.get() + 1);
        if i == 2 {
            Outcome::fail(format!("failed at {i}"))
        } else {
            Outcome::ok(i)
        }
    });

    let collected: Outcome<Vec<i32>, String> = outcomes.collect();

    assert_eq!(collected.error().map(String::as_str), Ok("failed at 2"));
    assert_eq!(visited.get(), 3);
}

#[test]
fn outcome_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<Outcome<i32>>();
    assert_send_sync::<Outcome<String, String>>();
}

#[tokio::test]
async fn into_ready_is_already_complete() {
    let outcome: Outcome<i32, String> = Outcome::ok(1);
    let awaited = outcome.clone().into_ready().await;

    assert!(awaited.ptr_eq(&outcome));
}
