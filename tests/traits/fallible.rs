use outcome_rail::traits::Fallible;
use outcome_rail::{Outcome, ResultError, ValueOutcome};

fn first_error<R: Fallible>(items: &[R]) -> Option<&R::Error> {
    items.iter().find_map(Fallible::try_get_error)
}

#[test]
fn works_across_outcome_shapes() {
    let shared = [Outcome::<i32, &str>::ok(1), Outcome::fail("shared")];
    let inline = [ValueOutcome::<i32, &str>::ok(1), ValueOutcome::fail("inline")];
    let std_results = [Ok::<i32, &str>(1), Err("std")];

    assert_eq!(first_error(&shared), Some(&"shared"));
    assert_eq!(first_error(&inline), Some(&"inline"));
    assert_eq!(first_error(&std_results), Some(&"std"));
}

#[test]
fn is_error_negates_is_ok() {
    let ok: Result<(), &str> = Ok(());
    let failed: ValueOutcome<(), &str> = ValueOutcome::fail("e");

    assert!(!Fallible::is_error(&ok));
    assert!(Fallible::is_error(&failed));
    assert!(!Fallible::is_ok(&failed));
}

#[test]
fn error_on_success_reports_no_error() {
    let ok: Result<i32, &str> = Ok(1);
    assert_eq!(Fallible::error(&ok), Err(ResultError::NoError));
}
