//! Fixed-layout representation of an outcome.
//!
//! This module provides [`ConcreteOutcome`], a tagged-struct rendition of
//! [`Outcome`](crate::outcome::Outcome) with a stable `#[repr(C)]` shape.
//! Call sites that need a single concrete return layout across an
//! indirect-call boundary (dynamically loaded extensions, type-erased
//! containers) can convert to it and back without loss; the two
//! representations are semantically equivalent.

use std::fmt;

use super::failure::Failure;
use super::value::Outcome;

/// Discriminant of a [`ConcreteOutcome`].
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum OutcomeTag {
    Success = 0,
    Failure = 1,
}

/// A fixed-layout outcome: a discriminant plus storage for either the
/// success value or the failure payload.
///
/// Freely and losslessly interconvertible with [`Outcome`]; an attached
/// diagnostic trace survives the round trip. Exactly one storage slot is
/// populated, and it always agrees with the tag; the fields are private
/// so the invariant holds by construction.
///
/// # Examples
///
/// ```rust
/// use attempt::outcome::{ConcreteOutcome, Outcome};
///
/// let outcome: Outcome<i32, String> = Outcome::success(42);
/// let concrete = outcome.clone().to_concrete();
/// assert!(concrete.is_success());
/// assert_eq!(concrete.into_outcome(), outcome);
/// ```
#[must_use = "a ConcreteOutcome must be inspected or converted back"]
#[repr(C)]
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ConcreteOutcome<T, E> {
    tag: OutcomeTag,
    success: Option<T>,
    failure: Option<Failure<E>>,
}

impl<T, E> ConcreteOutcome<T, E> {
    /// Creates a successful concrete outcome.
    #[inline]
    pub const fn success(value: T) -> Self {
        Self {
            tag: OutcomeTag::Success,
            success: Some(value),
            failure: None,
        }
    }

    /// Creates a failed concrete outcome from an error value.
    ///
    /// Trace capture follows the same rules as [`Outcome::failure`].
    #[inline]
    pub fn failure(error: E) -> Self {
        Self {
            tag: OutcomeTag::Failure,
            success: None,
            failure: Some(Failure::new(error)),
        }
    }

    /// Returns `true` if this is a success.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self.tag, OutcomeTag::Success)
    }

    /// Returns `true` if this is a failure.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self.tag, OutcomeTag::Failure)
    }

    /// Converts back into the abstract [`Outcome`] representation.
    ///
    /// Lossless and total; see [`Outcome::to_concrete`] for the other
    /// direction.
    #[inline]
    pub fn into_outcome(self) -> Outcome<T, E> {
        match self.tag {
            OutcomeTag::Success => match self.success {
                Some(value) => Outcome::Success(value),
                // unreachable by construction: the tag and storage always agree
                None => unreachable!("ConcreteOutcome tagged Success held no value"),
            },
            OutcomeTag::Failure => match self.failure {
                Some(failure) => Outcome::Failure(failure),
                None => unreachable!("ConcreteOutcome tagged Failure held no payload"),
            },
        }
    }
}

impl<T, E> Outcome<T, E> {
    /// Converts into the fixed-layout [`ConcreteOutcome`] representation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::outcome::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::failure("oops".to_string());
    /// let concrete = outcome.to_concrete();
    /// assert!(concrete.is_failure());
    /// ```
    #[inline]
    pub fn to_concrete(self) -> ConcreteOutcome<T, E> {
        match self {
            Self::Success(value) => ConcreteOutcome {
                tag: OutcomeTag::Success,
                success: Some(value),
                failure: None,
            },
            Self::Failure(failure) => ConcreteOutcome {
                tag: OutcomeTag::Failure,
                success: None,
                failure: Some(failure),
            },
        }
    }

    /// Converts a fixed-layout outcome back into the abstract
    /// representation. Inverse of [`Outcome::to_concrete`].
    #[inline]
    pub fn from_concrete(concrete: ConcreteOutcome<T, E>) -> Self {
        concrete.into_outcome()
    }
}

impl<T, E> From<Outcome<T, E>> for ConcreteOutcome<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.to_concrete()
    }
}

impl<T, E> From<ConcreteOutcome<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(concrete: ConcreteOutcome<T, E>) -> Self {
        concrete.into_outcome()
    }
}

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for ConcreteOutcome<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.success, &self.failure) {
            (Some(value), _) => formatter
                .debug_tuple("ConcreteSuccess")
                .field(value)
                .finish(),
            (_, Some(failure)) => formatter
                .debug_tuple("ConcreteFailure")
                .field(failure.error())
                .finish(),
            (None, None) => formatter.write_str("ConcreteOutcome(<empty>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn concrete_success_roundtrip() {
        let outcome: Outcome<i32, String> = Outcome::success(42);
        let roundtripped = Outcome::from_concrete(outcome.clone().to_concrete());
        assert_eq!(roundtripped, outcome);
    }

    #[rstest]
    fn concrete_failure_roundtrip() {
        let outcome: Outcome<i32, String> = Outcome::failure("oops".to_string());
        let roundtripped = Outcome::from_concrete(outcome.clone().to_concrete());
        assert_eq!(roundtripped, outcome);
    }

    #[rstest]
    fn concrete_predicates_match_tag() {
        let success: ConcreteOutcome<i32, String> = ConcreteOutcome::success(1);
        assert!(success.is_success());
        assert!(!success.is_failure());

        let failure: ConcreteOutcome<i32, String> = ConcreteOutcome::failure("x".to_string());
        assert!(failure.is_failure());
        assert!(!failure.is_success());
    }
}
