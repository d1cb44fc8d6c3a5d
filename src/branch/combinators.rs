//! Sequencing combinators over outcomes.
//!
//! [`and_then`](Outcome::and_then) and [`or_else`](Outcome::or_else) are
//! mirror images: one sequences on the success path and passes failures
//! through untouched, the other recovers on the failure path and passes
//! successes through untouched. They are the macro-free way to compose
//! chains of fallible operations; the
//! [`short_circuit!`](crate::short_circuit) construct is the
//! early-return way.
//!
//! Both combinators are total over the classified shapes and compose
//! associatively:
//!
//! ```text
//! r.and_then(f).and_then(g) == r.and_then(|v| f(v).and_then(g))
//! ```

use crate::outcome::Outcome;

impl<T, E> Outcome<T, E> {
    /// Sequences a fallible operation on the success path.
    ///
    /// Applies `function` to the success value; a failure passes through
    /// unchanged, trace included.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::outcome::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::success(4);
    /// let chained = outcome.and_then(|x| Outcome::success(x + 1));
    /// assert_eq!(chained, Outcome::success(5));
    ///
    /// let failure: Outcome<i32, String> = Outcome::failure("boom".to_string());
    /// let chained = failure.and_then(|x| Outcome::success(x + 1));
    /// assert_eq!(chained, Outcome::failure("boom".to_string()));
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(failure) => Outcome::Failure(failure),
        }
    }

    /// Recovers from a failure; the mirror image of
    /// [`and_then`](Outcome::and_then).
    ///
    /// Applies `function` to the error value; a success passes through
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use attempt::outcome::Outcome;
    ///
    /// let failure: Outcome<i32, String> = Outcome::failure("boom".to_string());
    /// let recovered: Outcome<i32, String> = failure.or_else(|_| Outcome::success(0));
    /// assert_eq!(recovered, Outcome::success(0));
    ///
    /// let success: Outcome<i32, String> = Outcome::success(42);
    /// let recovered: Outcome<i32, String> = success.or_else(|_: String| Outcome::success(0));
    /// assert_eq!(recovered, Outcome::success(42));
    /// ```
    #[inline]
    pub fn or_else<F, Func>(self, function: Func) -> Outcome<T, F>
    where
        Func: FnOnce(E) -> Outcome<T, F>,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(failure) => function(failure.into_error()),
        }
    }
}
