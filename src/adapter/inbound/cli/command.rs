//! Command-line interface definitions.
//!
//! The `prevdays` binary is a diagnostic: it computes the window a template
//! accessor would bind, without a host or a database.

use clap::Parser;
use std::path::PathBuf;

use crate::domain::calendar::CalendarUnit;

/// Compute the previous report window for a report span
#[derive(Parser, Debug)]
#[command(name = "prevdays")]
#[command(version)]
pub struct Cli {
    /// Stop of the current report span, epoch seconds
    #[arg(long, allow_negative_numbers = true)]
    pub stop: i64,

    /// Start of the current report span, epoch seconds [default: --stop]
    #[arg(long, allow_negative_numbers = true)]
    pub start: Option<i64>,

    /// Calendar unit to look back in [day, week, month, year]
    #[arg(long, default_value = "week")]
    pub unit: CalendarUnit,

    /// Number of units to look back
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub count: i64,

    /// Shift the whole current span back instead of ending at its stop
    #[arg(long)]
    pub shifted: bool,

    /// Do calendar arithmetic in UTC instead of the local time zone
    #[arg(long)]
    pub utc: bool,

    /// Host configuration file to read the [PrevDay] section from
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// JSON output for scripting
    #[arg(long)]
    pub json: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,

    /// Increase log verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
