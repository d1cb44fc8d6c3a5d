//! Outcome type - the two-variant result of a fallible operation.
//!
//! This module provides the `Outcome<T, E>` type, which represents the
//! result of an operation that either succeeded with a value or failed
//! with an error value. It is the central type of this library:
//!
//! - Fallible operations return an `Outcome` instead of raising
//! - Failures flow only through the `Outcome` channel, never implicitly
//! - Programmer errors (unwrapping the wrong variant) panic instead
//!
//! # Examples
//!
//! ```rust
//! use attempt::outcome::Outcome;
//!
//! fn checked_div(dividend: i32, divisor: i32) -> Outcome<i32, String> {
//!     if divisor == 0 {
//!         Outcome::failure("division by zero".to_string())
//!     } else {
//!         Outcome::success(dividend / divisor)
//!     }
//! }
//!
//! assert_eq!(checked_div(10, 2).unwrap(), 5);
//! assert!(checked_div(1, 0).is_failure());
//! ```

use std::fmt;
use std::marker::PhantomData;

use static_assertions::assert_impl_all;

use super::failure::Failure;
use crate::trace::ErrorTrace;

/// The result of a fallible operation: success carrying a value, or
/// failure carrying an error value.
///
/// Exactly one variant is populated, and the variant is immutable once
/// constructed. Exhaustive matching over the two variants is how this
/// library expresses "this operation always succeeds": a function proven
/// to never fail is simply typed as returning `T` directly rather than
/// `Outcome<T, E>`.
///
/// The `Failure` variant carries a [`Failure`] payload rather than a bare
/// error value, so that an optional diagnostic trace can ride along with
/// the error (see [`crate::trace`]). Equality over outcomes ignores the
/// trace entirely.
///
/// # Type Parameters
///
/// * `T` - The type of the success value
/// * `E` - The type of the error value
///
/// # Examples
///
/// ```rust
/// use attempt::outcome::Outcome;
///
/// let success: Outcome<i32, String> = Outcome::success(42);
/// let failure: Outcome<i32, String> = Outcome::failure("oops".to_string());
///
/// assert_eq!(success.map(|x| x * 2), Outcome::success(84));
/// assert!(failure.is_failure());
/// ```
#[must_use = "an Outcome must be inspected, combinator-transformed, or short-circuited"]
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Outcome<T, E> {
    /// The operation succeeded with a value.
    Success(T),
    /// The operation failed; the payload carries the error value and any
    /// attached diagnostic trace.
    Failure(Failure<E>),
}

impl<T, E> Outcome<T, E> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a successful outcome.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::outcome::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::success(42);
    /// assert!(outcome.is_success());
    /// ```
    #[inline]
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a failed outcome from an error value.
    ///
    /// If trace recording is enabled (see [`crate::trace::enable`]), a
    /// call-stack snapshot is captured and attached to the failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::outcome::Outcome;
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::failure("oops");
    /// assert!(outcome.is_failure());
    /// ```
    #[inline]
    pub fn failure(error: E) -> Self {
        Self::Failure(Failure::new(error))
    }

    /// Creates a failed outcome carrying an explicitly captured trace.
    ///
    /// Bypasses the process-wide toggle; see [`ErrorTrace::capture`].
    #[inline]
    pub fn failure_with_trace(error: E, trace: ErrorTrace) -> Self {
        Self::Failure(Failure::with_trace(error, trace))
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Success` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::outcome::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::success(42);
    /// assert!(outcome.is_success());
    /// ```
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::outcome::Outcome;
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::failure("oops");
    /// assert!(outcome.is_failure());
    /// ```
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    // =========================================================================
    // Compile-Time Type Queries
    // =========================================================================

    /// Returns a zero-sized marker for the static success type.
    ///
    /// This is a compile-time query over the generic parameter, not a
    /// runtime reflection call; it exists so generic code can name the
    /// success type of an outcome it holds.
    #[inline]
    pub const fn success_type(&self) -> PhantomData<T> {
        PhantomData
    }

    /// Returns a zero-sized marker for the static failure type.
    ///
    /// Mirror of [`Outcome::success_type`].
    #[inline]
    pub const fn failure_type(&self) -> PhantomData<E> {
        PhantomData
    }

    // =========================================================================
    // Value Extraction (Consuming)
    // =========================================================================

    /// Returns the success value, consuming the outcome.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Failure` value. Unwrapping the wrong variant
    /// is a programmer error, not a domain failure; it is not
    /// representable as an `Outcome`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::outcome::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::success(5);
    /// assert_eq!(outcome.unwrap(), 5);
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(failure) => panic!(
                "called `Outcome::unwrap()` on a `Failure` value: {:?}",
                failure.error()
            ),
        }
    }

    /// Returns the error value, consuming the outcome.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Success` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::outcome::Outcome;
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::failure("oops");
    /// assert_eq!(outcome.unwrap_failure(), "oops");
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap_failure(self) -> E
    where
        T: fmt::Debug,
    {
        match self {
            Self::Success(value) => panic!(
                "called `Outcome::unwrap_failure()` on a `Success` value: {value:?}"
            ),
            Self::Failure(failure) => failure.into_error(),
        }
    }

    /// Returns the success value or the provided default.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::outcome::Outcome;
    ///
    /// let failure: Outcome<i32, &str> = Outcome::failure("oops");
    /// assert_eq!(failure.unwrap_or(0), 0);
    /// ```
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the success value or computes one from the error value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::outcome::Outcome;
    ///
    /// let failure: Outcome<usize, &str> = Outcome::failure("oops");
    /// assert_eq!(failure.unwrap_or_else(|error| error.len()), 4);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, function: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(failure) => function(failure.into_error()),
        }
    }

    /// Converts the outcome into an `Option` of the success value.
    #[inline]
    pub fn into_success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Converts the outcome into an `Option` of the failure payload.
    #[inline]
    pub fn into_failure(self) -> Option<Failure<E>> {
        match self {
            Self::Success(_) => None,
            Self::Failure(failure) => Some(failure),
        }
    }

    // =========================================================================
    // Reference Extraction (Non-consuming)
    // =========================================================================

    /// Returns a reference to the success value if present.
    #[inline]
    pub const fn success_ref(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns a reference to the error value if present.
    #[inline]
    pub const fn failure_ref(&self) -> Option<&E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(failure) => Some(failure.error()),
        }
    }

    /// Returns the diagnostic trace attached to a failure, if any.
    ///
    /// Always `None` for successes, and `None` for failures constructed
    /// while trace recording was disabled.
    #[inline]
    pub fn trace(&self) -> Option<&ErrorTrace> {
        match self {
            Self::Success(_) => None,
            Self::Failure(failure) => failure.trace(),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the success value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::outcome::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::success(21);
    /// assert_eq!(outcome.map(|x| x * 2), Outcome::success(42));
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(function(value)),
            Self::Failure(failure) => Outcome::Failure(failure),
        }
    }

    /// Applies a function to the error value if present, preserving any
    /// attached trace.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::outcome::Outcome;
    ///
    /// let outcome: Outcome<i32, i32> = Outcome::failure(404);
    /// let mapped = outcome.map_failure(|code| format!("status {code}"));
    /// assert_eq!(mapped, Outcome::failure("status 404".to_string()));
    /// ```
    #[inline]
    pub fn map_failure<F, Func>(self, function: Func) -> Outcome<T, F>
    where
        Func: FnOnce(E) -> F,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(failure) => Outcome::Failure(failure.map(function)),
        }
    }

    // =========================================================================
    // Failure Narrowing (constrained public wrappers)
    // =========================================================================

    /// Converts the failure kind into a narrower, exhaustively declared
    /// set, for public operations that wrap an overload-only internal
    /// implementation.
    ///
    /// The public wrapper promises its callers an exhaustive enumeration
    /// of failure kinds; an internal failure outside that set means the
    /// library author's contract was broken, so the conversion faults
    /// rather than letting the undeclared failure escape through the
    /// result channel.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Failure` whose error value is rejected by
    /// `F::try_from`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::outcome::Outcome;
    ///
    /// #[derive(Debug, PartialEq)]
    /// enum ParseFailure {
    ///     Empty,
    /// }
    ///
    /// impl TryFrom<&'static str> for ParseFailure {
    ///     type Error = &'static str;
    ///
    ///     fn try_from(raw: &'static str) -> Result<Self, Self::Error> {
    ///         match raw {
    ///             "empty" => Ok(Self::Empty),
    ///             other => Err(other),
    ///         }
    ///     }
    /// }
    ///
    /// let internal: Outcome<i32, &'static str> = Outcome::failure("empty");
    /// let public: Outcome<i32, ParseFailure> = internal.narrow_failure();
    /// assert!(public.is_failure());
    /// ```
    #[inline]
    #[track_caller]
    pub fn narrow_failure<F>(self) -> Outcome<T, F>
    where
        F: TryFrom<E>,
        F::Error: fmt::Debug,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(failure) => match failure.narrow() {
                Ok(narrowed) => Outcome::Failure(narrowed),
                Err(undeclared) => panic!(
                    "failure kind outside the declared set of this operation: {undeclared:?}"
                ),
            },
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Outcome<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => formatter.debug_tuple("Success").field(value).finish(),
            Self::Failure(failure) => {
                formatter.debug_tuple("Failure").field(failure.error()).finish()
            }
        }
    }
}

// =============================================================================
// Host Result Interop
// =============================================================================

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    /// Converts a `Result` to an `Outcome`.
    ///
    /// `Ok(v)` becomes `Success(v)` and `Err(e)` becomes `Failure(e)`;
    /// the conversion goes through [`Outcome::failure`], so a trace is
    /// captured when recording is enabled.
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::success(value),
            Err(error) => Self::failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    /// Converts an `Outcome` to a `Result`, discarding any trace.
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(failure) => Err(failure.into_error()),
        }
    }
}

// Outcomes are plain values; they must stay freely shareable across
// execution contexts whenever their parameters are.
assert_impl_all!(Outcome<i32, String>: Send, Sync);
