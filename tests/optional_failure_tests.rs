//! Integration tests for the failure-bearing `Optional<T, E>` shape.
//!
//! Failures are ordinary data: they are propagated, transformed and
//! recovered from, never interpreted. When two failures compete, the
//! receiver's failure wins.

use std::cell::Cell;

use optionals::optional::{Optional, ValueMissing};
use rstest::rstest;

#[derive(Debug, Clone, PartialEq, Eq)]
enum FetchError {
    NotFound(String),
    Timeout,
}

fn fetch(id: u32) -> Optional<String, FetchError> {
    match id {
        1 => Optional::present("alice".to_string()),
        2 => Optional::absent(FetchError::Timeout),
        other => Optional::absent(FetchError::NotFound(other.to_string())),
    }
}

// =============================================================================
// Propagation
// =============================================================================

#[rstest]
fn map_leaves_failure_untouched() {
    let failed: Optional<i32, String> = Optional::absent("err".to_string());
    let described = failed.map(|n| n + 1).fold(|n| n.to_string(), |failure| failure);
    assert_eq!(described, "err");
}

#[rstest]
fn flat_map_propagates_receiver_failure_without_calling() {
    let calls = Cell::new(0);
    let result = fetch(2).flat_map(|name| {
        calls.set(calls.get() + 1);
        Optional::present(name.len())
    });
    assert_eq!(result, Optional::absent(FetchError::Timeout));
    assert_eq!(calls.get(), 0);
}

#[rstest]
#[case(1, Optional::present(5))]
#[case(2, Optional::absent(FetchError::Timeout))]
#[case(9, Optional::absent(FetchError::NotFound("9".to_string())))]
fn fetch_then_measure(#[case] id: u32, #[case] expected: Optional<usize, FetchError>) {
    assert_eq!(fetch(id).map(|name| name.len()), expected);
}

// =============================================================================
// Failure Channel
// =============================================================================

#[rstest]
fn map_failure_leaves_value_untouched() {
    let present = fetch(1).map_failure(|error| format!("{error:?}"));
    assert_eq!(present, Optional::present("alice".to_string()));

    let absent = fetch(2).map_failure(|error| format!("{error:?}"));
    assert_eq!(absent, Optional::absent("Timeout".to_string()));
}

#[rstest]
fn flat_map_or_supplies_failure_for_failure_less_step() {
    let initial = |name: String| Optional::from_option(name.chars().next());
    assert_eq!(
        fetch(1).flat_map_or(initial, FetchError::Timeout),
        Optional::present('a')
    );

    let empty: Optional<String, FetchError> = Optional::present(String::new());
    assert_eq!(
        empty.flat_map_or(initial, FetchError::NotFound("initial".to_string())),
        Optional::absent(FetchError::NotFound("initial".to_string()))
    );
}

#[rstest]
fn lazy_failure_factories_only_run_when_needed() {
    let calls = Cell::new(0);
    let factory = || {
        calls.set(calls.get() + 1);
        FetchError::Timeout
    };

    let kept = fetch(1).filter_or_else(|name| name.starts_with('a'), factory);
    assert!(kept.is_present());
    assert_eq!(calls.get(), 0);

    let rejected = fetch(1).filter_or_else(|name| name.starts_with('z'), factory);
    assert_eq!(rejected, Optional::absent(FetchError::Timeout));
    assert_eq!(calls.get(), 1);

    let built: Optional<i32, FetchError> = Optional::from_option_or_else(Some(3), factory);
    assert_eq!(built, Optional::present(3));
    assert_eq!(calls.get(), 1);
}

#[rstest]
fn with_and_without_failure() {
    let empty = Optional::<i32>::none().with_failure("missing");
    assert_eq!(empty, Optional::absent("missing"));
    assert_eq!(empty.without_failure(), Optional::none());
    assert_eq!(Optional::some(2).with_failure_else(|| "unused"), Optional::present(2));
}

// =============================================================================
// Tie-break: the receiver's failure wins
// =============================================================================

#[rstest]
fn zip_keeps_receiver_failure() {
    let left: Optional<i32, &str> = Optional::absent("left");
    let right: Optional<i32, &str> = Optional::absent("right");
    assert_eq!(left.zip(right), Optional::absent("left"));
    assert_eq!(Optional::present(1).zip(right), Optional::absent("right"));
}

#[rstest]
fn and_keeps_receiver_failure() {
    let left: Optional<i32, &str> = Optional::absent("left");
    let right: Optional<i32, &str> = Optional::absent("right");
    assert_eq!(left.and(right), Optional::absent("left"));
}

#[rstest]
fn or_returns_alternative_failure_when_both_absent() {
    let left: Optional<i32, &str> = Optional::absent("left");
    let right: Optional<i32, &str> = Optional::absent("right");
    assert_eq!(left.or(right), Optional::absent("right"));
}

// =============================================================================
// Recovery and Extraction
// =============================================================================

#[rstest]
fn value_or_recover_receives_failure() {
    let recovered = fetch(7).value_or_recover(|error| match error {
        FetchError::NotFound(id) => format!("guest-{id}"),
        FetchError::Timeout => "retry".to_string(),
    });
    assert_eq!(recovered, "guest-7");
}

#[rstest]
fn checked_extraction_reports_value_missing() {
    assert_eq!(fetch(1).value_or_failure(), Ok("alice".to_string()));
    assert_eq!(fetch(2).value_or_failure(), Err(ValueMissing::Unspecified));

    let described = fetch(5).value_or_failure_else(|error| format!("lookup failed: {error:?}"));
    let error = described.unwrap_err();
    assert_eq!(error.message(), Some("lookup failed: NotFound(\"5\")"));
    assert_eq!(
        error.to_string(),
        "optional value is missing: lookup failed: NotFound(\"5\")"
    );
}

#[rstest]
#[should_panic(expected = "optional value is missing")]
fn unwrap_value_panics_on_absent() {
    let _ = fetch(2).unwrap_value();
}

#[rstest]
#[should_panic(expected = "user must exist")]
fn expect_value_panics_with_message() {
    let _ = fetch(3).expect_value("user must exist");
}

#[rstest]
fn result_round_trip() {
    let result: Result<String, FetchError> = fetch(2).into();
    assert_eq!(result, Err(FetchError::Timeout));
    assert_eq!(Optional::from(result), fetch(2));
}
