//! Process-wide trace-capture toggle.
//!
//! Failure construction consults a single boolean flag to decide whether
//! to snapshot the call stack. The flag is read with relaxed ordering on
//! the hot path and written with relaxed ordering by the administrative
//! [`enable`]/[`disable`] calls: writes are only guaranteed visible to
//! execution contexts that start after the write. A thread that began
//! before the toggle was flipped may keep observing the old behavior for
//! the remainder of its run.

use std::sync::atomic::{AtomicBool, Ordering};

use super::frames::ErrorTrace;

static CAPTURE_ENABLED: AtomicBool = AtomicBool::new(false);

/// Enables call-stack capture for subsequently constructed failures.
///
/// Visibility is per execution context; see the module docs.
///
/// # Examples
///
/// ```rust
/// use attempt::outcome::Outcome;
/// use attempt::trace;
///
/// trace::enable();
/// let outcome: Outcome<i32, &str> = Outcome::failure("oops");
/// assert!(outcome.trace().is_some());
/// trace::disable();
/// ```
#[inline]
pub fn enable() {
    CAPTURE_ENABLED.store(true, Ordering::Relaxed);
}

/// Disables call-stack capture for subsequently constructed failures.
#[inline]
pub fn disable() {
    CAPTURE_ENABLED.store(false, Ordering::Relaxed);
}

/// Reports whether capture is currently enabled, as observed by the
/// calling execution context.
#[inline]
pub fn is_enabled() -> bool {
    CAPTURE_ENABLED.load(Ordering::Relaxed)
}

/// Captures a trace when the toggle is set; the hook called on every
/// failure construction.
#[inline]
pub(crate) fn capture_if_enabled() -> Option<ErrorTrace> {
    if is_enabled() {
        Some(ErrorTrace::capture())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The toggle is process-wide state shared with every other test in
    // this binary, so the full enable/capture/disable cycle is covered
    // sequentially in tests/trace_tests.rs instead of here.
    #[test]
    fn capture_disabled_by_default_yields_nothing() {
        if !is_enabled() {
            assert!(capture_if_enabled().is_none());
        }
    }
}
