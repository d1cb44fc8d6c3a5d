//! # attempt
//!
//! A result-value algebra for reporting recoverable failures without the
//! host exception mechanism.
//!
//! ## Overview
//!
//! Every fallible operation returns a two-variant outcome: success
//! carrying a value, or failure carrying an error value. Around that
//! algebra the library provides:
//!
//! - **Outcome algebra**: [`outcome::Outcome`] plus the fixed-layout
//!   [`outcome::ConcreteOutcome`] for indirect-call boundaries
//! - **Short-circuit evaluation**: the [`branch`] classification
//!   protocol, the `and_then`/`or_else` combinators, and the
//!   [`short_circuit!`] early-return construct
//! - **Error traces**: an opt-in, process-wide recorder that snapshots
//!   the call stack at every failure construction ([`trace`])
//! - **Capability probing**: a registry that resolves
//!   `(operation, argument types)` to a handler or a structured
//!   `NotImplemented` failure ([`capability`])
//!
//! Domain failures flow only through the outcome channel and are never
//! propagated implicitly; programmer errors (unwrapping the wrong
//! variant, breaking a declared-failure-set contract) panic instead.
//!
//! ## Feature Flags
//!
//! - `capability`: the capability registry (enabled by default)
//!
//! ## Example
//!
//! ```rust
//! use attempt::outcome::Outcome;
//! use attempt::short_circuit;
//!
//! fn parse(raw: &str) -> Outcome<i32, String> {
//!     raw.parse::<i32>()
//!         .map_err(|error| error.to_string())
//!         .into()
//! }
//!
//! fn parse_sum(first: &str, second: &str) -> Outcome<i32, String> {
//!     let lhs = short_circuit!(parse(first));
//!     let rhs = short_circuit!(parse(second));
//!     Outcome::success(lhs + rhs)
//! }
//!
//! assert_eq!(parse_sum("2", "3"), Outcome::success(5));
//! assert!(parse_sum("2", "three").is_failure());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use attempt::prelude::*;
/// ```
pub mod prelude {

    pub use crate::branch::{Absent, BranchOutcome, Branchable, FromBreak};
    pub use crate::outcome::{ConcreteOutcome, Failure, Outcome};
    pub use crate::trace::{ErrorTrace, Frame};

    #[cfg(feature = "capability")]
    pub use crate::capability::{
        ArgList, CapabilityError, CapabilityRegistry, CapabilityRegistryBuilder, OperationId,
        Signature, Slot,
    };
}

pub mod branch;
pub mod outcome;
pub mod trace;

#[cfg(feature = "capability")]
pub mod capability;
