//! Unit tests for the Outcome<T, E> algebra.
//!
//! An Outcome is either Success carrying a value or Failure carrying an
//! error value; exactly one variant is populated and the variant is
//! immutable once constructed. Unwrapping the wrong variant is a
//! programmer error and panics.

use attempt::outcome::{ConcreteOutcome, Outcome};
use rstest::rstest;

// =============================================================================
// Construction and Predicates
// =============================================================================

#[rstest]
fn success_is_success() {
    let outcome: Outcome<i32, String> = Outcome::success(42);
    assert!(outcome.is_success());
    assert!(!outcome.is_failure());
}

#[rstest]
fn failure_is_failure() {
    let outcome: Outcome<i32, String> = Outcome::failure("oops".to_string());
    assert!(outcome.is_failure());
    assert!(!outcome.is_success());
}

// =============================================================================
// Unwrap Operations
// =============================================================================

#[rstest]
fn unwrap_returns_success_value() {
    let outcome: Outcome<i32, String> = Outcome::success(5);
    assert_eq!(outcome.unwrap(), 5);
}

#[rstest]
#[should_panic(expected = "called `Outcome::unwrap()` on a `Failure` value")]
fn unwrap_on_failure_panics() {
    let outcome: Outcome<i32, &str> = Outcome::failure("boom");
    let _ = outcome.unwrap();
}

#[rstest]
fn unwrap_failure_returns_error_value() {
    let outcome: Outcome<i32, &str> = Outcome::failure("boom");
    assert_eq!(outcome.unwrap_failure(), "boom");
}

#[rstest]
#[should_panic(expected = "called `Outcome::unwrap_failure()` on a `Success` value")]
fn unwrap_failure_on_success_panics() {
    let outcome: Outcome<i32, &str> = Outcome::success(5);
    let _ = outcome.unwrap_failure();
}

#[rstest]
fn unwrap_or_takes_default_on_failure() {
    let failure: Outcome<i32, &str> = Outcome::failure("boom");
    assert_eq!(failure.unwrap_or(0), 0);

    let success: Outcome<i32, &str> = Outcome::success(9);
    assert_eq!(success.unwrap_or(0), 9);
}

#[rstest]
fn unwrap_or_else_computes_from_error() {
    let failure: Outcome<usize, &str> = Outcome::failure("boom");
    assert_eq!(failure.unwrap_or_else(|error| error.len()), 4);
}

// =============================================================================
// Reference and Consuming Accessors
// =============================================================================

#[rstest]
fn reference_accessors() {
    let success: Outcome<i32, String> = Outcome::success(5);
    assert_eq!(success.success_ref(), Some(&5));
    assert_eq!(success.failure_ref(), None);

    let failure: Outcome<i32, String> = Outcome::failure("x".to_string());
    assert_eq!(failure.success_ref(), None);
    assert_eq!(failure.failure_ref(), Some(&"x".to_string()));
}

#[rstest]
fn consuming_accessors() {
    let success: Outcome<i32, String> = Outcome::success(5);
    assert_eq!(success.into_success(), Some(5));

    let failure: Outcome<i32, String> = Outcome::failure("x".to_string());
    let payload = failure.into_failure().expect("failure payload");
    assert_eq!(payload.into_error(), "x".to_string());
}

// =============================================================================
// Mapping Operations
// =============================================================================

#[rstest]
fn map_transforms_success_only() {
    let success: Outcome<i32, String> = Outcome::success(21);
    assert_eq!(success.map(|x| x * 2), Outcome::success(42));

    let failure: Outcome<i32, String> = Outcome::failure("oops".to_string());
    assert_eq!(failure.map(|x| x * 2), Outcome::failure("oops".to_string()));
}

#[rstest]
fn map_failure_transforms_error_only() {
    let failure: Outcome<i32, i32> = Outcome::failure(404);
    assert_eq!(
        failure.map_failure(|code| code + 1),
        Outcome::failure(405)
    );

    let success: Outcome<i32, i32> = Outcome::success(1);
    assert_eq!(success.map_failure(|code| code + 1), Outcome::success(1));
}

// =============================================================================
// Host Result Interop
// =============================================================================

#[rstest]
fn result_interop_preserves_variant() {
    let outcome: Outcome<i32, String> = Ok::<_, String>(3).into();
    assert_eq!(outcome, Outcome::success(3));

    let back: Result<i32, String> = Outcome::failure("e".to_string()).into();
    assert_eq!(back, Err("e".to_string()));
}

// =============================================================================
// Concrete Representation
// =============================================================================

#[rstest]
fn concrete_roundtrip_success() {
    let outcome: Outcome<i32, String> = Outcome::success(5);
    assert_eq!(Outcome::from_concrete(outcome.clone().to_concrete()), outcome);
}

#[rstest]
fn concrete_roundtrip_failure() {
    let outcome: Outcome<i32, String> = Outcome::failure("boom".to_string());
    assert_eq!(Outcome::from_concrete(outcome.clone().to_concrete()), outcome);
}

#[rstest]
fn concrete_from_impls_mirror_explicit_conversions() {
    let outcome: Outcome<i32, String> = Outcome::success(5);
    let concrete: ConcreteOutcome<i32, String> = outcome.clone().into();
    let back: Outcome<i32, String> = concrete.into();
    assert_eq!(back, outcome);
}

// =============================================================================
// Example Scenarios
// =============================================================================

#[rstest]
fn unwrap_success_five() {
    assert_eq!(Outcome::<i32, String>::success(5).unwrap(), 5);
}
