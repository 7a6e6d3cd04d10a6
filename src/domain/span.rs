//! Report time spans.

use std::fmt;

use serde::Serialize;

use super::error::SpanError;

/// An immutable pair of epoch seconds with `start <= stop`.
///
/// The host supplies one for the current reporting period; previous windows
/// are derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TimeSpan {
    start: i64,
    stop: i64,
}

impl TimeSpan {
    /// Create a span, rejecting a start that falls after the stop.
    ///
    /// # Errors
    ///
    /// Returns [`SpanError::Inverted`] when `start > stop`.
    pub fn try_new(start: i64, stop: i64) -> Result<Self, SpanError> {
        if start > stop {
            return Err(SpanError::Inverted { start, stop });
        }
        Ok(Self { start, stop })
    }

    /// Start of the span, epoch seconds.
    #[must_use]
    pub const fn start(&self) -> i64 {
        self.start
    }

    /// Stop of the span, epoch seconds.
    #[must_use]
    pub const fn stop(&self) -> i64 {
        self.stop
    }

    /// Length of the span in seconds.
    #[must_use]
    pub const fn length_secs(&self) -> i64 {
        self.stop - self.start
    }

    /// True if `ts` falls within the span, both ends inclusive.
    #[must_use]
    pub const fn contains(&self, ts: i64) -> bool {
        self.start <= ts && ts <= self.stop
    }
}

impl fmt::Display for TimeSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} -> {}]", self.start, self.stop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_new_accepts_ordered_bounds() {
        let span = TimeSpan::try_new(100, 200).unwrap();
        assert_eq!(span.start(), 100);
        assert_eq!(span.stop(), 200);
        assert_eq!(span.length_secs(), 100);
    }

    #[test]
    fn try_new_accepts_zero_length() {
        let span = TimeSpan::try_new(50, 50).unwrap();
        assert_eq!(span.length_secs(), 0);
    }

    #[test]
    fn try_new_rejects_inverted_bounds() {
        assert_eq!(
            TimeSpan::try_new(200, 100),
            Err(SpanError::Inverted {
                start: 200,
                stop: 100
            })
        );
    }

    #[test]
    fn contains_is_inclusive() {
        let span = TimeSpan::try_new(10, 20).unwrap();
        assert!(span.contains(10));
        assert!(span.contains(20));
        assert!(!span.contains(9));
        assert!(!span.contains(21));
    }

    #[test]
    fn display_shows_both_bounds() {
        let span = TimeSpan::try_new(1, 2).unwrap();
        assert_eq!(span.to_string(), "[1 -> 2]");
    }
}
