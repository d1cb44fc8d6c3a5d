//! Classification of fallible values into continue/break outcomes.
//!
//! Any value participating in short-circuit composition is classified
//! into one of four shapes:
//!
//! | input               | classification          |
//! |---------------------|-------------------------|
//! | `Success(v)`        | `Continue(v)`           |
//! | `Failure(e)`        | `Break(the failure)`    |
//! | `Some(v)`           | `Continue(v)`           |
//! | `None`              | `Break(Absent)`         |
//!
//! The `Continue` payload is the unwrapped value; the `Break` payload is
//! the original failure (or the absent marker), ready to be returned
//! upward from the enclosing function.

use crate::outcome::{Failure, Outcome};

/// The classification of a fallible value: proceed with the unwrapped
/// payload, or stop and propagate the break payload.
///
/// # Examples
///
/// ```rust
/// use attempt::branch::{BranchOutcome, Branchable};
/// use attempt::outcome::Outcome;
///
/// let outcome: Outcome<i32, String> = Outcome::success(5);
/// assert_eq!(outcome.branch(), BranchOutcome::Continue(5));
/// ```
#[must_use = "a BranchOutcome must be matched to either continue or break"]
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum BranchOutcome<C, B> {
    /// Evaluation continues with the unwrapped payload.
    Continue(C),
    /// Evaluation stops; the payload propagates to the enclosing caller.
    Break(B),
}

impl<C, B> BranchOutcome<C, B> {
    /// Returns `true` if this is a `Continue` value.
    #[inline]
    pub const fn is_continue(&self) -> bool {
        matches!(self, Self::Continue(_))
    }

    /// Returns `true` if this is a `Break` value.
    #[inline]
    pub const fn is_break(&self) -> bool {
        matches!(self, Self::Break(_))
    }

    /// Converts into an `Option` of the continue payload.
    #[inline]
    pub fn continued(self) -> Option<C> {
        match self {
            Self::Continue(value) => Some(value),
            Self::Break(_) => None,
        }
    }

    /// Converts into an `Option` of the break payload.
    #[inline]
    pub fn broke(self) -> Option<B> {
        match self {
            Self::Continue(_) => None,
            Self::Break(payload) => Some(payload),
        }
    }
}

/// Marker for the break payload of an absent optional value.
///
/// Carries no information beyond "the value was absent"; the enclosing
/// function's return type decides what absence converts into (see
/// [`FromBreak`]).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Absent;

/// Types that can be classified into a continue/break outcome.
///
/// Implemented for [`Outcome`] and for `Option`; any host operation whose
/// return value conforms to this classification can participate in
/// short-circuit composition.
pub trait Branchable {
    /// Payload yielded to the enclosing expression on the continue path.
    type Continue;
    /// Payload propagated upward on the break path.
    type Break;

    /// Classifies the value.
    fn branch(self) -> BranchOutcome<Self::Continue, Self::Break>;
}

impl<T, E> Branchable for Outcome<T, E> {
    type Continue = T;
    type Break = Failure<E>;

    /// `Success(v)` continues with `v`; `Failure(e)` breaks with the
    /// original failure payload, trace included.
    #[inline]
    fn branch(self) -> BranchOutcome<T, Failure<E>> {
        match self {
            Self::Success(value) => BranchOutcome::Continue(value),
            Self::Failure(failure) => BranchOutcome::Break(failure),
        }
    }
}

impl<T> Branchable for Option<T> {
    type Continue = T;
    type Break = Absent;

    /// `Some(v)` continues with `v`; `None` breaks with the absent
    /// marker.
    #[inline]
    fn branch(self) -> BranchOutcome<T, Absent> {
        match self {
            Some(value) => BranchOutcome::Continue(value),
            None => BranchOutcome::Break(Absent),
        }
    }
}

/// Conversion of a break payload into an enclosing function's return
/// type, used by the [`short_circuit!`](crate::short_circuit) expansion.
///
/// A propagated failure may widen its error type through `From`, exactly
/// like the host `?` operator; an absent marker converts into `None` of
/// any optional type.
pub trait FromBreak<B> {
    /// Builds the early-return value from a break payload.
    fn from_break(payload: B) -> Self;
}

impl<T, E, F: From<E>> FromBreak<Failure<E>> for Outcome<T, F> {
    #[inline]
    fn from_break(payload: Failure<E>) -> Self {
        Self::Failure(payload.map(F::from))
    }
}

impl<T> FromBreak<Absent> for Option<T> {
    #[inline]
    fn from_break(_: Absent) -> Self {
        None
    }
}
