//! Calendar arithmetic for previous report windows.
//!
//! All four lookback variants (day, week, month, year) are one operation
//! tagged by [`CalendarUnit`]. Arithmetic runs on local calendar dates in a
//! caller-supplied [`TimeZone`], so a "previous week" starts at local
//! midnight regardless of the offset in effect.
//!
//! Two anchorings are available:
//!
//! - [`Anchor::Trailing`] starts at local midnight `n` units before the
//!   current stop and ends at the current stop.
//! - [`Anchor::Shifted`] moves both ends of the current span back by `n`
//!   units, preserving wall-clock time of day.
//!
//! # Examples
//!
//! ```
//! use chrono::Utc;
//! use prevdays::domain::calendar::{previous_window, Anchor, CalendarUnit, Lookback};
//! use prevdays::domain::span::TimeSpan;
//!
//! // 2024-01-14T00:00Z .. 2024-01-15T00:00Z
//! let current = TimeSpan::try_new(1_705_190_400, 1_705_276_800).unwrap();
//! let week = Lookback::new(CalendarUnit::Week, 1).unwrap();
//!
//! let window = previous_window(current, week, Anchor::Trailing, &Utc).unwrap();
//! assert_eq!(window.start(), 1_704_672_000); // 2024-01-08T00:00Z
//! assert_eq!(window.stop(), current.stop());
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Days, LocalResult, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use serde::{Deserialize, Serialize};

use super::error::SpanError;
use super::span::TimeSpan;

/// Calendar unit a lookback is counted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarUnit {
    Day,
    Week,
    Month,
    Year,
}

impl CalendarUnit {
    /// Every unit, shortest first.
    pub const ALL: [CalendarUnit; 4] = [Self::Day, Self::Week, Self::Month, Self::Year];

    /// Lowercase unit name, also used as the binder context.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        }
    }

    /// Step a calendar date back by `count` units.
    ///
    /// Month and year steps clamp to the last day of the target month, so
    /// 31 March minus one month is the last day of February.
    #[must_use]
    pub fn step_back(self, date: NaiveDate, count: u32) -> Option<NaiveDate> {
        match self {
            Self::Day => date.checked_sub_days(Days::new(u64::from(count))),
            Self::Week => date.checked_sub_days(Days::new(u64::from(count) * 7)),
            Self::Month => date.checked_sub_months(Months::new(count)),
            Self::Year => count
                .checked_mul(12)
                .and_then(|months| date.checked_sub_months(Months::new(months))),
        }
    }

    /// Step a local wall-clock time back by `count` units, keeping the time of day.
    #[must_use]
    pub fn step_back_datetime(self, local: NaiveDateTime, count: u32) -> Option<NaiveDateTime> {
        self.step_back(local.date(), count)
            .map(|date| date.and_time(local.time()))
    }
}

impl fmt::Display for CalendarUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalendarUnit {
    type Err = SpanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" | "days" => Ok(Self::Day),
            "week" | "weeks" => Ok(Self::Week),
            "month" | "months" => Ok(Self::Month),
            "year" | "years" => Ok(Self::Year),
            other => Err(SpanError::UnknownUnit(other.to_string())),
        }
    }
}

/// How far back a previous window reaches: a positive count of calendar units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Lookback {
    unit: CalendarUnit,
    count: u32,
}

impl Lookback {
    /// Create a lookback, rejecting counts that are not strictly positive.
    ///
    /// # Errors
    ///
    /// Returns [`SpanError::InvalidOffset`] when `count <= 0` or the count
    /// does not fit the calendar arithmetic.
    pub fn new(unit: CalendarUnit, count: i64) -> Result<Self, SpanError> {
        let invalid = || SpanError::InvalidOffset {
            unit,
            value: count.to_string(),
        };
        if count <= 0 {
            return Err(invalid());
        }
        let count = u32::try_from(count).map_err(|_| invalid())?;
        Ok(Self { unit, count })
    }

    /// A lookback of exactly one unit.
    #[must_use]
    pub const fn one(unit: CalendarUnit) -> Self {
        Self { unit, count: 1 }
    }

    /// Parse a count supplied as text, e.g. from a template argument.
    ///
    /// # Errors
    ///
    /// Returns [`SpanError::InvalidOffset`] when the text is not a positive integer.
    pub fn parse(unit: CalendarUnit, count: &str) -> Result<Self, SpanError> {
        let parsed = count
            .trim()
            .parse::<i64>()
            .map_err(|_| SpanError::InvalidOffset {
                unit,
                value: count.to_string(),
            })?;
        Self::new(unit, parsed)
    }

    #[must_use]
    pub const fn unit(&self) -> CalendarUnit {
        self.unit
    }

    #[must_use]
    pub const fn count(&self) -> u32 {
        self.count
    }
}

impl fmt::Display for Lookback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.count == 1 {
            write!(f, "1 {}", self.unit)
        } else {
            write!(f, "{} {}s", self.count, self.unit)
        }
    }
}

/// Where a previous window is anchored relative to the current span.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    /// From local midnight `n` units before the current stop, up to the current stop.
    #[default]
    Trailing,
    /// The current span with both ends moved back by `n` units.
    Shifted,
}

/// Derive a previous window from the current span.
///
/// # Errors
///
/// Returns [`SpanError::ClockConversion`] when a bound cannot be mapped
/// between epoch seconds and local time in `tz`, including local midnights
/// that fall inside a DST gap or fold.
pub fn previous_window<Tz: TimeZone>(
    current: TimeSpan,
    lookback: Lookback,
    anchor: Anchor,
    tz: &Tz,
) -> Result<TimeSpan, SpanError> {
    match anchor {
        Anchor::Trailing => trailing_window(current, lookback, tz),
        Anchor::Shifted => shifted_window(current, lookback, tz),
    }
}

fn trailing_window<Tz: TimeZone>(
    current: TimeSpan,
    lookback: Lookback,
    tz: &Tz,
) -> Result<TimeSpan, SpanError> {
    let stop_date = local_datetime(tz, current.stop())?.date_naive();
    let start_date = lookback
        .unit()
        .step_back(stop_date, lookback.count())
        .ok_or_else(|| SpanError::ClockConversion {
            detail: format!("{stop_date} minus {lookback} is out of range"),
        })?;
    let start = epoch_of_local(tz, start_date.and_time(NaiveTime::MIN))?;
    TimeSpan::try_new(start, current.stop())
}

fn shifted_window<Tz: TimeZone>(
    current: TimeSpan,
    lookback: Lookback,
    tz: &Tz,
) -> Result<TimeSpan, SpanError> {
    let start_local = local_datetime(tz, current.start())?.naive_local();
    let stop_local = local_datetime(tz, current.stop())?.naive_local();
    let stop_shifted = shift_back(stop_local, lookback)?;
    let stop = epoch_of_local(tz, stop_shifted)?;

    let mut start = epoch_of_local(tz, shift_back(start_local, lookback)?)?;
    if start > stop {
        // Month-end clamping pulled the stop behind the start; move the
        // start back by the same number of days as the stop instead.
        let days = (stop_local.date() - stop_shifted.date()).num_days().unsigned_abs();
        let shifted = start_local
            .checked_sub_days(Days::new(days))
            .ok_or_else(|| SpanError::ClockConversion {
                detail: format!("{start_local} minus {days} days is out of range"),
            })?;
        start = epoch_of_local(tz, shifted)?;
    }
    TimeSpan::try_new(start, stop)
}

fn shift_back(local: NaiveDateTime, lookback: Lookback) -> Result<NaiveDateTime, SpanError> {
    lookback
        .unit()
        .step_back_datetime(local, lookback.count())
        .ok_or_else(|| SpanError::ClockConversion {
            detail: format!("{local} minus {lookback} is out of range"),
        })
}

/// Epoch seconds viewed as a local date and time in `tz`.
///
/// # Errors
///
/// Returns [`SpanError::ClockConversion`] for timestamps chrono cannot represent.
pub fn local_datetime<Tz: TimeZone>(tz: &Tz, epoch: i64) -> Result<DateTime<Tz>, SpanError> {
    match tz.timestamp_opt(epoch, 0) {
        LocalResult::Single(dt) => Ok(dt),
        _ => Err(SpanError::ClockConversion {
            detail: format!("timestamp {epoch} is outside the representable range"),
        }),
    }
}

/// Epoch seconds for a local wall-clock time in `tz`.
///
/// # Errors
///
/// Returns [`SpanError::ClockConversion`] when the local time is skipped or
/// repeated by a clock change.
pub fn epoch_of_local<Tz: TimeZone>(tz: &Tz, local: NaiveDateTime) -> Result<i64, SpanError> {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) => Ok(dt.timestamp()),
        LocalResult::Ambiguous(earliest, latest) => Err(SpanError::ClockConversion {
            detail: format!(
                "local time {local} is ambiguous ({} or {})",
                earliest.timestamp(),
                latest.timestamp()
            ),
        }),
        LocalResult::None => Err(SpanError::ClockConversion {
            detail: format!("local time {local} does not exist"),
        }),
    }
}
