//! Early-return short-circuit construct.
//!
//! This module provides the [`short_circuit!`](crate::short_circuit)
//! macro, the statement-level "and-return" form of the classification in
//! [`branchable`](super::branchable): it yields the continue payload to
//! the enclosing expression, or returns the break payload from the
//! enclosing function.
//!
//! # Expansion
//!
//! ```text
//! short_circuit!(expression)
//! ```
//!
//! expands to a `match` over `Branchable::branch(expression)`:
//!
//! - `Continue(value)` yields `value` in place
//! - `Break(payload)` performs `return FromBreak::from_break(payload)`
//!
//! The control transfer is an ordinary `return` written into the caller's
//! own body by the expansion, so propagation stays syntactically visible
//! at every use site. Error types may widen through `From` at the
//! function boundary, like the host `?` operator.
//!
//! # Examples
//!
//! ## Chaining fallible operations
//!
//! ```rust
//! use attempt::outcome::Outcome;
//! use attempt::short_circuit;
//!
//! fn parse_digit(raw: &str) -> Outcome<u32, String> {
//!     match raw.parse::<u32>() {
//!         Ok(n) if n < 10 => Outcome::success(n),
//!         _ => Outcome::failure(format!("not a digit: {raw:?}")),
//!     }
//! }
//!
//! fn add_digits(first: &str, second: &str) -> Outcome<u32, String> {
//!     let lhs = short_circuit!(parse_digit(first));
//!     let rhs = short_circuit!(parse_digit(second));
//!     Outcome::success(lhs + rhs)
//! }
//!
//! assert_eq!(add_digits("3", "4"), Outcome::success(7));
//! assert!(add_digits("3", "x").is_failure());
//! ```
//!
//! ## Optional values
//!
//! ```rust
//! use attempt::short_circuit;
//!
//! fn first_char(raw: &str) -> Option<char> {
//!     let first = short_circuit!(raw.chars().next());
//!     Some(first.to_ascii_uppercase())
//! }
//!
//! assert_eq!(first_char("attempt"), Some('A'));
//! assert_eq!(first_char(""), None);
//! ```

/// Yields the continue payload of a fallible value, or early-returns the
/// break payload from the enclosing function.
///
/// See the [module documentation](crate::branch) for the expansion and
/// examples.
#[macro_export]
macro_rules! short_circuit {
    ($expression:expr) => {
        match $crate::branch::Branchable::branch($expression) {
            $crate::branch::BranchOutcome::Continue(value) => value,
            $crate::branch::BranchOutcome::Break(payload) => {
                return $crate::branch::FromBreak::from_break(payload);
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::outcome::Outcome;

    fn double_positive(value: i32) -> Outcome<i32, &'static str> {
        if value > 0 {
            Outcome::success(value * 2)
        } else {
            Outcome::failure("not positive")
        }
    }

    fn quadruple_positive(value: i32) -> Outcome<i32, &'static str> {
        let doubled = short_circuit!(double_positive(value));
        double_positive(doubled)
    }

    #[test]
    fn continue_path_yields_value() {
        assert_eq!(quadruple_positive(1), Outcome::success(4));
    }

    #[test]
    fn break_path_returns_failure() {
        assert_eq!(quadruple_positive(-1), Outcome::failure("not positive"));
    }
}
