//! Shared utilities for CLI commands.

use std::fmt::Display;
use std::sync::LazyLock;

use chrono::{DateTime, Duration, TimeZone};
use regex::Regex;

/// Pre-compiled regex for the leading integer of a budget.
static LEADING_INT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*([+-]?\d+)").unwrap());

/// Parse free-text available time into minutes.
///
/// Reads the leading base-10 integer and ignores whatever follows, so
/// "45", " 45 min" and "45.5" all give 45. Text without a leading integer,
/// or one too large to represent, gives 0.
pub fn parse_budget(s: &str) -> i64 {
    LEADING_INT_RE
        .captures(s)
        .and_then(|caps| caps[1].parse().ok())
        .unwrap_or(0)
}

/// Wall-clock time at which a session of `minutes` started at `now` ends.
///
/// Out-of-range projections clamp to `now`.
pub fn end_time<Tz: TimeZone>(now: &DateTime<Tz>, minutes: i64) -> DateTime<Tz> {
    Duration::try_minutes(minutes)
        .and_then(|d| now.clone().checked_add_signed(d))
        .unwrap_or_else(|| now.clone())
}

/// Format a time as `HH:MM`.
pub fn format_clock<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    time.format("%H:%M").to_string()
}
