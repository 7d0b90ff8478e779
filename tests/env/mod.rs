use outcome_rail::env::{self, EnvError};

#[test]
fn missing_variable_is_a_failure_not_a_panic() {
    let outcome = env::try_get("OUTCOME_RAIL_TEST_MISSING");

    let error = outcome.error().unwrap();
    assert_eq!(
        error.downcast_ref::<EnvError>(),
        Some(&EnvError::NotPresent { name: "OUTCOME_RAIL_TEST_MISSING".to_string() })
    );
    assert!(!env::contains("OUTCOME_RAIL_TEST_MISSING"));
}

#[test]
fn present_variable_is_returned() {
    std::env::set_var("OUTCOME_RAIL_TEST_PRESENT", "hello");

    assert_eq!(env::try_get("OUTCOME_RAIL_TEST_PRESENT").into_value().ok(), Some("hello".to_string()));
    assert!(env::contains("OUTCOME_RAIL_TEST_PRESENT"));
    assert_eq!(env::get_or("OUTCOME_RAIL_TEST_PRESENT", "fallback"), "hello");
}

#[test]
fn get_or_falls_back_when_missing() {
    assert_eq!(env::get_or("OUTCOME_RAIL_TEST_FALLBACK", "fallback"), "fallback");
}

#[test]
fn parsed_lookup_reports_parse_errors() {
    std::env::set_var("OUTCOME_RAIL_TEST_PORT", "8080");
    std::env::set_var("OUTCOME_RAIL_TEST_BAD_PORT", "eighty");

    assert_eq!(env::try_get_parsed::<u16>("OUTCOME_RAIL_TEST_PORT").into_value().ok(), Some(8080));

    let bad = env::try_get_parsed::<u16>("OUTCOME_RAIL_TEST_BAD_PORT");
    let error = bad.error().unwrap().downcast_ref::<EnvError>().cloned().unwrap();
    assert_eq!(error.name(), "OUTCOME_RAIL_TEST_BAD_PORT");
    assert!(matches!(error, EnvError::Parse { .. }));
}
