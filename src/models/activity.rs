//! Suggested outdoor activity window

use chrono::{NaiveTime, TimeDelta, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Suffix appended to every window label
pub const WINDOW_SUFFIX: &str = " (local time)";

/// Two-hour clock range, wrapping past midnight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl ActivityWindow {
    /// Window length in hours
    pub const LENGTH_HOURS: i64 = 2;

    /// Build the window starting on the given hour of day, taken modulo 24
    #[must_use]
    pub fn starting_at(hour: u32) -> Self {
        let start = NaiveTime::from_hms_opt(hour % 24, 0, 0).unwrap_or(NaiveTime::MIN);
        let (end, _) = start.overflowing_add_signed(TimeDelta::hours(Self::LENGTH_HOURS));
        Self { start, end }
    }

    #[must_use]
    pub fn start_hour(&self) -> u32 {
        self.start.hour()
    }

    #[must_use]
    pub fn end_hour(&self) -> u32 {
        self.end.hour()
    }

    /// Human-readable label, e.g. `"23:00 - 1:00 (local time)"`
    #[must_use]
    pub fn label(&self) -> String {
        format!(
            "{} - {}{WINDOW_SUFFIX}",
            self.start.format("%-H:%M"),
            self.end.format("%-H:%M")
        )
    }
}

impl fmt::Display for ActivityWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}
