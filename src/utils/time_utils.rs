use anyhow::{Result, anyhow};
use chrono::{DateTime, Utc};

pub struct TimeUtils;

impl TimeUtils {
    pub const TIME_OF_DAY_FORMAT: &str = "%-I:%M %p"; // 3:05 PM
    pub const WEEKDAY_HOUR_FORMAT: &str = "%a %-I %p"; // Mon 3 PM
    pub const MONTH_DAY_FORMAT: &str = "%b %-d"; // Jan 5
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d";

    /// Picks the chart label format for a lookback of `days`.
    /// Short windows need intra-day resolution, long ones only the calendar day.
    pub fn label_format_for_days(days: u32) -> &'static str {
        match days {
            0..=1 => Self::TIME_OF_DAY_FORMAT,
            2..=7 => Self::WEEKDAY_HOUR_FORMAT,
            _ => Self::MONTH_DAY_FORMAT,
        }
    }
}

// Time Helper functions

pub fn epoch_ms_to_utc(epoch_ms: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp_millis(epoch_ms)
        .ok_or_else(|| anyhow!("Timestamp {} ms is out of range", epoch_ms))
}

/// Display label for a sample taken at `epoch_ms` within a `days` lookback.
/// Rendered in UTC so the same document always yields the same labels.
pub fn chart_label(epoch_ms: i64, days: u32) -> Result<String> {
    let dt = epoch_ms_to_utc(epoch_ms)?;
    Ok(dt.format(TimeUtils::label_format_for_days(days)).to_string())
}

pub fn epoch_ms_to_date_string(epoch_ms: i64) -> Result<String> {
    let dt = epoch_ms_to_utc(epoch_ms)?;
    Ok(dt.format(TimeUtils::STANDARD_TIME_FORMAT).to_string())
}
