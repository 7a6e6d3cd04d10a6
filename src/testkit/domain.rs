//! Builders for time spans pinned to calendar dates.

use chrono::{FixedOffset, TimeZone, Utc};

use crate::domain::TimeSpan;

/// Epoch seconds for midnight UTC on the given date.
pub fn utc_midnight(year: i32, month: u32, day: u32) -> i64 {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .map(|dt| dt.timestamp())
        .unwrap_or_else(|| panic!("invalid date {year}-{month}-{day}"))
}

/// Epoch seconds for a wall-clock time at a fixed offset east of UTC.
pub fn local_epoch(offset_secs: i32, ymd: (i32, u32, u32), hms: (u32, u32, u32)) -> i64 {
    let tz = offset(offset_secs);
    tz.with_ymd_and_hms(ymd.0, ymd.1, ymd.2, hms.0, hms.1, hms.2)
        .single()
        .map(|dt| dt.timestamp())
        .unwrap_or_else(|| panic!("invalid local time {ymd:?} {hms:?}"))
}

/// A fixed offset east of UTC.
pub fn offset(offset_secs: i32) -> FixedOffset {
    FixedOffset::east_opt(offset_secs).unwrap_or_else(|| panic!("invalid offset {offset_secs}"))
}

/// The UTC calendar day ending at midnight on the given date.
pub fn utc_day_ending(year: i32, month: u32, day: u32) -> TimeSpan {
    let stop = utc_midnight(year, month, day);
    span(stop - 86_400, stop)
}

pub fn span(start: i64, stop: i64) -> TimeSpan {
    TimeSpan::try_new(start, stop).unwrap_or_else(|e| panic!("invalid test span: {e}"))
}
