//! Tests for constrained public wrappers over overload-only internals.
//!
//! A public operation may promise an exhaustive set of admissible failure
//! kinds and delegate to an internal implementation with a wider error
//! type. narrow_failure converts the internal outcome into the declared
//! one, and faults when the internal implementation breaks the contract
//! by returning an undeclared failure kind.

use attempt::outcome::Outcome;
use rstest::rstest;

// =============================================================================
// The internal, overload-only implementation
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
enum InternalFailure {
    EmptyInput,
    InvalidDigit(char),
    IoInterrupted,
}

fn parse_internal(raw: &str) -> Outcome<u32, InternalFailure> {
    if raw.is_empty() {
        return Outcome::failure(InternalFailure::EmptyInput);
    }
    let mut total: u32 = 0;
    for character in raw.chars() {
        match character.to_digit(10) {
            Some(digit) => total = total * 10 + digit,
            None => return Outcome::failure(InternalFailure::InvalidDigit(character)),
        }
    }
    Outcome::success(total)
}

// =============================================================================
// The public wrapper with a declared, exhaustive failure set
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
enum ParseFailure {
    EmptyInput,
    InvalidDigit(char),
}

impl TryFrom<InternalFailure> for ParseFailure {
    type Error = InternalFailure;

    fn try_from(internal: InternalFailure) -> Result<Self, Self::Error> {
        match internal {
            InternalFailure::EmptyInput => Ok(Self::EmptyInput),
            InternalFailure::InvalidDigit(character) => Ok(Self::InvalidDigit(character)),
            InternalFailure::IoInterrupted => Err(internal),
        }
    }
}

fn parse(raw: &str) -> Outcome<u32, ParseFailure> {
    parse_internal(raw).narrow_failure()
}

// =============================================================================
// Declared failure kinds convert; successes pass through
// =============================================================================

#[rstest]
fn success_passes_through_the_wrapper() {
    assert_eq!(parse("111"), Outcome::success(111));
}

#[rstest]
fn declared_failure_kinds_convert() {
    assert_eq!(parse(""), Outcome::failure(ParseFailure::EmptyInput));
    assert_eq!(
        parse("1x2"),
        Outcome::failure(ParseFailure::InvalidDigit('x'))
    );
}

// =============================================================================
// Undeclared failure kinds fault
// =============================================================================

#[rstest]
#[should_panic(expected = "failure kind outside the declared set")]
fn undeclared_failure_kind_faults_instead_of_escaping() {
    let internal: Outcome<u32, InternalFailure> =
        Outcome::failure(InternalFailure::IoInterrupted);
    let _: Outcome<u32, ParseFailure> = internal.narrow_failure();
}
