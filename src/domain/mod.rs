//! Host-agnostic types: time spans, calendar lookbacks, and aggregates.
//!
//! Nothing in this module knows about templates, data bindings, or logging.

pub mod aggregate;
pub mod calendar;
pub mod error;
pub mod span;

pub use aggregate::{Aggregate, Measurement};
pub use calendar::{previous_window, Anchor, CalendarUnit, Lookback};
pub use error::SpanError;
pub use span::TimeSpan;
