//! Domain errors for time span arithmetic.
//!
//! These errors are returned when a previous window cannot be derived from
//! the current report span. They are local to a single accessor call and
//! never abort a report-generation pass.
//!
//! # Examples
//!
//! ```
//! use prevdays::domain::calendar::{CalendarUnit, Lookback};
//! use prevdays::domain::error::SpanError;
//!
//! let result = Lookback::new(CalendarUnit::Week, 0);
//! assert!(matches!(result, Err(SpanError::InvalidOffset { .. })));
//! ```

use thiserror::Error;

use super::calendar::CalendarUnit;

/// Errors raised while deriving a previous window.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpanError {
    /// An accessor was invoked before the host supplied the current span.
    #[error("previous window requested before the report span was prepared")]
    NotPrepared,

    /// The lookback count is zero, negative, or not a whole number.
    #[error("lookback must be a positive whole number of {unit}s, got {value}")]
    InvalidOffset {
        /// Unit the count was expressed in.
        unit: CalendarUnit,
        /// The rejected value, as supplied.
        value: String,
    },

    /// Converting between epoch seconds and local calendar time failed.
    #[error("local clock conversion failed: {detail}")]
    ClockConversion {
        /// What could not be converted.
        detail: String,
    },

    /// A span was constructed with its start after its stop.
    #[error("span start {start} is after stop {stop}")]
    Inverted {
        /// Requested start, epoch seconds.
        start: i64,
        /// Requested stop, epoch seconds.
        stop: i64,
    },

    /// A calendar unit name was not recognised.
    #[error("unknown calendar unit '{0}'")]
    UnknownUnit(String),
}
