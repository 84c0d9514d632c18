use env_loadr::{EnvError, get_bool, get_duration, get_float64, get_int, get_int64, get_string};
use std::time::Duration;

// Each test owns its keys, so parallel tests never observe each other's writes.

#[test]
fn test_string() {
    const KEY: &str = "TESTING_ENV_STRING";

    assert_eq!(get_string(KEY, "STRING INITIAL VALUE"), "STRING INITIAL VALUE");

    std::env::set_var(KEY, "STRING VALUE");
    assert_eq!(get_string(KEY, "STRING INITIAL VALUE"), "STRING VALUE");
}

#[test]
fn test_int() {
    const KEY: &str = "TESTING_ENV_INT";

    assert_eq!(get_int(KEY, 1), 1);

    std::env::set_var(KEY, "2");
    assert_eq!(get_int(KEY, 1), 2);
}

#[test]
#[should_panic(expected = "Invalid value")]
fn test_int_malformed_panics() {
    std::env::set_var("TESTING_ENV_INT_MALFORMED", "INVALID NUMBER FORMAT");
    get_int("TESTING_ENV_INT_MALFORMED", 1);
}

#[test]
fn test_int64() {
    const KEY: &str = "TESTING_ENV_INT64";

    assert_eq!(get_int64(KEY, 1), 1);

    std::env::set_var(KEY, "2");
    assert_eq!(get_int64(KEY, 1), 2);
}

#[test]
#[should_panic(expected = "Invalid value")]
fn test_int64_malformed_panics() {
    std::env::set_var("TESTING_ENV_INT64_MALFORMED", "INVALID NUMBER FORMAT");
    get_int64("TESTING_ENV_INT64_MALFORMED", 1);
}

#[test]
fn test_float64() {
    const KEY: &str = "TESTING_ENV_FLOAT64";

    assert_eq!(get_float64(KEY, 1.0), 1.0);

    std::env::set_var(KEY, "2");
    assert_eq!(get_float64(KEY, 1.0), 2.0);
}

#[test]
#[should_panic(expected = "Invalid value")]
fn test_float64_malformed_panics() {
    std::env::set_var("TESTING_ENV_FLOAT64_MALFORMED", "INVALID NUMBER FORMAT");
    get_float64("TESTING_ENV_FLOAT64_MALFORMED", 1.0);
}

#[test]
#[should_panic(expected = "out of range")]
fn test_float64_overflow_panics() {
    std::env::set_var("TESTING_ENV_FLOAT64_OVERFLOW", "1e400");
    get_float64("TESTING_ENV_FLOAT64_OVERFLOW", 1.0);
}

#[test]
fn test_duration() {
    const KEY: &str = "TESTING_ENV_DURATION";

    assert_eq!(get_duration(KEY, Duration::from_secs(1)), Duration::from_secs(1));

    std::env::set_var(KEY, "2s");
    assert_eq!(get_duration(KEY, Duration::from_secs(1)), Duration::from_secs(2));
}

#[test]
#[should_panic(expected = "Invalid value")]
fn test_duration_malformed_panics() {
    std::env::set_var("TESTING_ENV_DURATION_MALFORMED", "INVALID DURATION FORMAT");
    get_duration("TESTING_ENV_DURATION_MALFORMED", Duration::from_secs(1));
}

#[test]
fn test_bool() {
    const KEY: &str = "TESTING_ENV_BOOL";

    assert!(get_bool(KEY, true));

    std::env::set_var(KEY, "false");
    assert!(!get_bool(KEY, true));
}

#[test]
#[should_panic(expected = "Invalid value")]
fn test_bool_malformed_panics() {
    std::env::set_var("TESTING_ENV_BOOL_MALFORMED", "INVALID BOOL FORMAT");
    get_bool("TESTING_ENV_BOOL_MALFORMED", true);
}

#[test]
fn test_try_get_int_can_be_intercepted() {
    const KEY: &str = "TESTING_ENV_TRY_INT";
    std::env::set_var(KEY, "INVALID NUMBER FORMAT");

    let result = env_loadr::try_get_int(KEY, 1);
    assert!(matches!(result, Err(EnvError::InvalidValue { .. })));

    if let Err(e) = result {
        assert_eq!(e.key(), KEY);
    }
}

#[test]
fn test_repeated_calls_are_identical() {
    const KEY: &str = "TESTING_ENV_IDEMPOTENT";
    std::env::set_var(KEY, "300ms");

    let first = get_duration(KEY, Duration::ZERO);
    let second = get_duration(KEY, Duration::ZERO);
    assert_eq!(first, second);
    assert_eq!(first, Duration::from_millis(300));
}
