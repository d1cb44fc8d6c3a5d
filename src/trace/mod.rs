//! Opt-in diagnostic traces for failures.
//!
//! Recovering the call-site context of a failure after the fact normally
//! requires re-running under a debugger. This module instead lets a
//! process opt in to capturing a call-stack snapshot at every failure
//! construction:
//!
//! - [`enable`] / [`disable`]: the process-wide capture toggle, default
//!   off
//! - [`ErrorTrace`]: the ordered, read-only frame list attached to
//!   failures constructed while capture is on
//!
//! Capture costs one relaxed atomic load per failure construction when
//! disabled. The toggle is observed per execution context: contexts that
//! started before a flip may keep the old behavior until they finish.
//!
//! # Examples
//!
//! ```rust
//! use attempt::outcome::Outcome;
//! use attempt::trace;
//!
//! trace::enable();
//! let failure: Outcome<(), &str> = Outcome::failure("boom");
//! let trace = failure.trace().expect("capture was enabled");
//! assert!(!trace.is_empty());
//! trace::disable();
//! ```

mod frames;
mod recorder;

pub use frames::{ErrorTrace, Frame};
pub use recorder::{disable, enable, is_enabled};

pub(crate) use recorder::capture_if_enabled;
