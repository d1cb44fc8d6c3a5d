//! Call-stack snapshots attached to failures.
//!
//! [`ErrorTrace`] is an ordered sequence of human-readable frame
//! descriptors obtained from the host runtime's stack introspection
//! facility (`std::backtrace`). A trace is captured atomically with the
//! failure that owns it and is read-only thereafter: program logic never
//! inspects it, and it never participates in equality of failures.

use std::backtrace::Backtrace;
use std::fmt;

/// One call frame of a captured trace.
///
/// Holds the symbol name of the frame and, when the runtime resolves it,
/// the source location (`path:line`).
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Frame {
    symbol: String,
    location: Option<String>,
}

impl Frame {
    /// Returns the symbol name of the frame.
    #[inline]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Returns the resolved source location of the frame, if available.
    #[inline]
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Some(location) => write!(formatter, "{} at {}", self.symbol, location),
            None => write!(formatter, "{}", self.symbol),
        }
    }
}

/// An ordered, read-only call-stack snapshot.
///
/// Captured at failure construction when recording is enabled (see
/// [`crate::trace::enable`]), or explicitly via [`ErrorTrace::capture`].
/// Purely diagnostic: inspection and printing only.
///
/// # Examples
///
/// ```rust
/// use attempt::trace::ErrorTrace;
///
/// let trace = ErrorTrace::capture();
/// assert!(!trace.is_empty());
/// for frame in trace.frames() {
///     let _ = frame.symbol();
/// }
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ErrorTrace {
    frames: Vec<Frame>,
}

impl ErrorTrace {
    /// Captures the current call stack, regardless of the process-wide
    /// toggle.
    ///
    /// The capture machinery's own frames are pruned from the front, so
    /// the first frame describes the caller.
    #[inline]
    pub fn capture() -> Self {
        Self::from_rendered(&Backtrace::force_capture().to_string())
    }

    /// Parses the runtime's rendered backtrace into frame descriptors.
    fn from_rendered(rendered: &str) -> Self {
        let mut frames: Vec<Frame> = Vec::new();
        for line in rendered.lines() {
            let trimmed = line.trim_start();
            if let Some(location) = trimmed.strip_prefix("at ") {
                if let Some(last) = frames.last_mut() {
                    if last.location.is_none() {
                        last.location = Some(location.trim().to_string());
                    }
                }
            } else if let Some((index, symbol)) = trimmed.split_once(": ") {
                if index.bytes().all(|byte| byte.is_ascii_digit()) {
                    frames.push(Frame {
                        symbol: symbol.trim().to_string(),
                        location: None,
                    });
                }
            }
        }

        let internal = frames
            .iter()
            .take_while(|frame| Self::is_capture_machinery(&frame.symbol))
            .count();
        frames.drain(..internal);

        // A runtime without symbolication still yields a usable one-frame
        // trace rather than an empty list.
        if frames.is_empty() && !rendered.trim().is_empty() {
            frames.push(Frame {
                symbol: rendered.trim().to_string(),
                location: None,
            });
        }

        Self { frames }
    }

    fn is_capture_machinery(symbol: &str) -> bool {
        symbol.contains("backtrace")
            || symbol.contains("ErrorTrace::capture")
            || symbol.contains("attempt::trace::")
    }

    /// Returns the frames in order, outermost capture site first.
    #[inline]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Returns the number of captured frames.
    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Returns `true` if the trace captured no frames.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Iterates over the frames in order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Frame> {
        self.frames.iter()
    }
}

impl<'trace> IntoIterator for &'trace ErrorTrace {
    type Item = &'trace Frame;
    type IntoIter = std::slice::Iter<'trace, Frame>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}

impl fmt::Display for ErrorTrace {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, frame) in self.frames.iter().enumerate() {
            writeln!(formatter, "{index:>4}: {frame}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const RENDERED: &str = "\
   0: attempt::trace::frames::ErrorTrace::capture
             at /src/trace/frames.rs:70:9
   1: demo::fetch_record
             at /src/demo.rs:12:5
   2: demo::main
";

    #[rstest]
    fn parses_symbols_and_locations() {
        let trace = ErrorTrace::from_rendered(RENDERED);
        assert_eq!(trace.len(), 2);
        assert_eq!(trace.frames()[0].symbol(), "demo::fetch_record");
        assert_eq!(trace.frames()[0].location(), Some("/src/demo.rs:12:5"));
        assert_eq!(trace.frames()[1].symbol(), "demo::main");
        assert_eq!(trace.frames()[1].location(), None);
    }

    #[rstest]
    fn capture_yields_ordered_nonempty_trace() {
        let trace = ErrorTrace::capture();
        assert!(!trace.is_empty());
    }

    #[rstest]
    fn unsymbolicated_render_degrades_to_single_frame() {
        let trace = ErrorTrace::from_rendered("disabled backtrace");
        assert_eq!(trace.len(), 1);
    }

    #[rstest]
    fn display_renders_one_frame_per_line() {
        let trace = ErrorTrace::from_rendered(RENDERED);
        let rendered = trace.to_string();
        assert_eq!(rendered.lines().count(), 2);
        assert!(rendered.contains("demo::fetch_record"));
    }
}
