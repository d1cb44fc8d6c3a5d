//! Short-circuit evaluation over fallible values.
//!
//! This module provides the protocol for composing chains of fallible
//! operations:
//!
//! - [`Branchable`]: classifies an [`Outcome`](crate::outcome::Outcome)
//!   or an `Option` into a [`BranchOutcome`] of `Continue`/`Break`
//! - [`short_circuit!`](crate::short_circuit): the statement-level
//!   early-return construct built on that classification
//! - [`and_then`](crate::outcome::Outcome::and_then) /
//!   [`or_else`](crate::outcome::Outcome::or_else): the combinator
//!   composition path, defined here
//! - [`FromBreak`]: how a break payload converts into the enclosing
//!   function's return type
//!
//! # Examples
//!
//! ```rust
//! use attempt::outcome::Outcome;
//! use attempt::short_circuit;
//!
//! fn reciprocal(value: f64) -> Outcome<f64, String> {
//!     if value == 0.0 {
//!         Outcome::failure("division by zero".to_string())
//!     } else {
//!         Outcome::success(1.0 / value)
//!     }
//! }
//!
//! fn reciprocal_sum(first: f64, second: f64) -> Outcome<f64, String> {
//!     let lhs = short_circuit!(reciprocal(first));
//!     let rhs = short_circuit!(reciprocal(second));
//!     Outcome::success(lhs + rhs)
//! }
//!
//! assert_eq!(reciprocal_sum(2.0, 4.0).unwrap(), 0.75);
//! assert!(reciprocal_sum(2.0, 0.0).is_failure());
//! ```

mod branchable;
mod combinators;
mod short_circuit_macro;

pub use branchable::{Absent, BranchOutcome, Branchable, FromBreak};
