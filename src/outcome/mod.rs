//! The result-value algebra.
//!
//! This module defines the outcome of a fallible operation:
//!
//! - [`Outcome`]: the abstract two-variant sum of `Success` and `Failure`
//! - [`Failure`]: the failure payload, pairing the error value with an
//!   optional diagnostic trace
//! - [`ConcreteOutcome`]: a fixed-layout rendition of the same outcome for
//!   indirect-call boundaries, interconvertible with [`Outcome`]
//!
//! # Examples
//!
//! ```rust
//! use attempt::outcome::Outcome;
//!
//! let outcome: Outcome<i32, String> = Outcome::success(5);
//! let doubled = outcome.map(|x| x * 2);
//! assert_eq!(doubled.unwrap(), 10);
//! ```

mod concrete;
mod failure;
mod value;

pub use concrete::ConcreteOutcome;
pub use failure::Failure;
pub use value::Outcome;
