//! Time utilities: parsing clock times, timestamps and durations, formatting seconds.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M"))
        .ok()
}

/// Parse `YYYY-MM-DD HH:MM[:SS]` (space or `T`), or a bare `HH:MM[:SS]`
/// taken on `default_date`.
pub fn parse_datetime(s: &str, default_date: NaiveDate) -> AppResult<NaiveDateTime> {
    let s = s.trim();

    if let Some(dt) = DATETIME_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(s, f).ok())
    {
        return Ok(dt);
    }

    parse_time(s)
        .map(|t| default_date.and_time(t))
        .ok_or_else(|| AppError::InvalidDateTime(s.to_string()))
}

/// Parse a duration into seconds.
///
/// Accepted: `3600`, `HH:MM`, `HH:MM:SS`, `1h30m`, `90m`, `45s`, `2h`.
pub fn parse_duration(s: &str) -> AppResult<u64> {
    let s = s.trim();
    let invalid = || AppError::InvalidDuration(s.to_string());

    if s.is_empty() {
        return Err(invalid());
    }

    if let Ok(secs) = s.parse::<u64>() {
        return Ok(secs);
    }

    if s.contains(':') {
        let parts: Vec<u64> = s
            .split(':')
            .map(|p| p.parse::<u64>())
            .collect::<Result<_, _>>()
            .map_err(|_| invalid())?;

        let total = match parts.as_slice() {
            [h, m] if *m < 60 => hms_to_seconds(*h, *m, 0),
            [h, m, sec] if *m < 60 && *sec < 60 => hms_to_seconds(*h, *m, *sec),
            _ => None,
        };
        return total.ok_or_else(invalid);
    }

    let re = Regex::new(r"^(?:(\d+)h)?\s*(?:(\d+)m)?\s*(?:(\d+)s)?$")
        .map_err(|e| AppError::Other(e.to_string()))?;
    let caps = re.captures(s).ok_or_else(invalid)?;

    let group = |i: usize| -> AppResult<u64> {
        caps.get(i)
            .map(|m| m.as_str().parse::<u64>().map_err(|_| invalid()))
            .unwrap_or(Ok(0))
    };

    hms_to_seconds(group(1)?, group(2)?, group(3)?).ok_or_else(invalid)
}

/// `None` when the total does not fit in `u64`.
fn hms_to_seconds(hours: u64, minutes: u64, seconds: u64) -> Option<u64> {
    hours
        .checked_mul(3600)?
        .checked_add(minutes.checked_mul(60)?)?
        .checked_add(seconds)
}

/// `H:MM:SS`, hours not padded.
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{hours}:{minutes:02}:{secs:02}")
}
