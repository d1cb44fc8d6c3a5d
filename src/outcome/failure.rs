//! Failure payload - an error value plus optional diagnostic trace.
//!
//! This module provides the [`Failure`] struct, the payload carried by the
//! `Failure` variant of [`Outcome`](crate::outcome::Outcome). It pairs the
//! error value with an optional [`ErrorTrace`](crate::trace::ErrorTrace)
//! captured at construction time when trace recording is enabled.
//!
//! The trace is purely diagnostic: it never participates in equality,
//! ordering, or hashing. Two failures with the same error value compare
//! equal regardless of whether either carries a trace.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::trace::{self, ErrorTrace};

/// The payload of a failed [`Outcome`](crate::outcome::Outcome).
///
/// Carries the error value together with an optional call-stack trace
/// captured at the moment of construction (see [`crate::trace::enable`]).
/// The trace is read-only auxiliary metadata; all comparisons are defined
/// over the error value alone.
///
/// # Examples
///
/// ```rust
/// use attempt::outcome::Failure;
///
/// let failure = Failure::new("disk full");
/// assert_eq!(failure.error(), &"disk full");
/// // Capture is disabled by default, so no trace is attached.
/// assert!(failure.trace().is_none());
/// ```
pub struct Failure<E> {
    error: E,
    trace: Option<Box<ErrorTrace>>,
}

impl<E> Failure<E> {
    /// Creates a failure payload from an error value.
    ///
    /// If trace recording is enabled for the current execution context
    /// (see [`crate::trace::enable`]), a call-stack snapshot is captured
    /// and attached; otherwise the trace slot stays absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::outcome::Failure;
    ///
    /// let failure = Failure::new("boom");
    /// assert_eq!(failure.error(), &"boom");
    /// ```
    #[inline]
    pub fn new(error: E) -> Self {
        Self {
            error,
            trace: trace::capture_if_enabled().map(Box::new),
        }
    }

    /// Creates a failure payload with an explicitly supplied trace.
    ///
    /// Bypasses the process-wide toggle; callers that captured a trace
    /// deliberately (via [`ErrorTrace::capture`]) can attach it here.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::outcome::Failure;
    /// use attempt::trace::ErrorTrace;
    ///
    /// let failure = Failure::with_trace("boom", ErrorTrace::capture());
    /// assert!(failure.trace().is_some());
    /// ```
    #[inline]
    pub fn with_trace(error: E, trace: ErrorTrace) -> Self {
        Self {
            error,
            trace: Some(Box::new(trace)),
        }
    }

    /// Returns a reference to the error value.
    #[inline]
    pub const fn error(&self) -> &E {
        &self.error
    }

    /// Consumes the payload and returns the error value, discarding any
    /// attached trace.
    #[inline]
    pub fn into_error(self) -> E {
        self.error
    }

    /// Returns the attached trace, if one was captured at construction.
    #[inline]
    pub fn trace(&self) -> Option<&ErrorTrace> {
        self.trace.as_deref()
    }

    /// Applies a function to the error value, preserving any attached
    /// trace.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::outcome::Failure;
    ///
    /// let failure = Failure::new(404);
    /// let mapped = failure.map(|code| format!("status {code}"));
    /// assert_eq!(mapped.error(), &"status 404".to_string());
    /// ```
    #[inline]
    pub fn map<F, Func>(self, function: Func) -> Failure<F>
    where
        Func: FnOnce(E) -> F,
    {
        Failure {
            error: function(self.error),
            trace: self.trace,
        }
    }

    /// Attempts to convert the error value into a narrower kind,
    /// preserving any attached trace.
    ///
    /// Returns the conversion failure unchanged when the error value is
    /// outside the narrower set.
    #[inline]
    pub(crate) fn narrow<F>(self) -> Result<Failure<F>, F::Error>
    where
        F: TryFrom<E>,
    {
        let narrowed = F::try_from(self.error)?;
        Ok(Failure {
            error: narrowed,
            trace: self.trace,
        })
    }
}

// =============================================================================
// Trait Implementations (trace excluded from comparisons)
// =============================================================================

impl<E: Clone> Clone for Failure<E> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            error: self.error.clone(),
            trace: self.trace.clone(),
        }
    }
}

impl<E: PartialEq> PartialEq for Failure<E> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.error == other.error
    }
}

impl<E: Eq> Eq for Failure<E> {}

impl<E: Hash> Hash for Failure<E> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.error.hash(state);
    }
}

impl<E: fmt::Debug> fmt::Debug for Failure<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Failure").field(&self.error).finish()
    }
}

impl<E> From<E> for Failure<E> {
    #[inline]
    fn from(error: E) -> Self {
        Self::new(error)
    }
}
