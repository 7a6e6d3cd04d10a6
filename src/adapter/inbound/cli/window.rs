//! Handler for the window computation.

use chrono::{Local, TimeZone, Utc};
use serde::Serialize;
use tracing::debug;

use crate::domain::calendar::{local_datetime, previous_window, Anchor, CalendarUnit, Lookback};
use crate::domain::span::TimeSpan;
use crate::error::Result;
use crate::infrastructure::config::settings::PrevDaysConfig;

use super::command::Cli;

/// Everything the command prints.
#[derive(Debug, Clone, Serialize)]
pub struct WindowReport {
    pub data_binding: String,
    pub unit: CalendarUnit,
    pub count: u32,
    pub anchor: Anchor,
    pub current: TimeSpan,
    pub window: TimeSpan,
    /// `window` bounds as RFC 3339 in the zone used for the arithmetic.
    pub window_local: [String; 2],
}

/// Compute the window described by `args` in `tz`.
///
/// # Errors
///
/// Fails if the config file is unreadable, the span is inverted, the count
/// is not positive, or the clock conversion fails.
pub fn compute<Tz: TimeZone>(args: &Cli, tz: &Tz) -> Result<WindowReport>
where
    Tz::Offset: std::fmt::Display,
{
    let config = match &args.config {
        Some(path) => PrevDaysConfig::load(path)?,
        None => PrevDaysConfig::default(),
    };
    let current = TimeSpan::try_new(args.start.unwrap_or(args.stop), args.stop)?;
    let lookback = Lookback::new(args.unit, args.count)?;
    let anchor = if args.shifted {
        Anchor::Shifted
    } else {
        Anchor::Trailing
    };

    let window = previous_window(current, lookback, anchor, tz)?;
    debug!(%current, %window, %lookback, "Computed window");

    Ok(WindowReport {
        data_binding: config.data_binding,
        unit: lookback.unit(),
        count: lookback.count(),
        anchor,
        current,
        window_local: [
            local_datetime(tz, window.start())?.to_rfc3339(),
            local_datetime(tz, window.stop())?.to_rfc3339(),
        ],
        window,
    })
}

/// Render a report as aligned text.
#[must_use]
pub fn render_text(report: &WindowReport) -> String {
    let anchor = match report.anchor {
        Anchor::Trailing => "trailing",
        Anchor::Shifted => "shifted",
    };
    format!(
        "binding: {}\nlookback: {} {}(s), {}\ncurrent: {}\nwindow: {}\nlocal: {} -> {}",
        report.data_binding,
        report.count,
        report.unit,
        anchor,
        report.current,
        report.window,
        report.window_local[0],
        report.window_local[1],
    )
}

/// Execute the command and print the result.
///
/// # Errors
///
/// See [`compute`].
pub fn execute(args: &Cli) -> Result<()> {
    let report = if args.utc {
        compute(args, &Utc)?
    } else {
        compute(args, &Local)?
    };

    if args.json {
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!("{}", render_text(&report));
    }
    Ok(())
}
