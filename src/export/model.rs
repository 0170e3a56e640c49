// src/export/model.rs

use crate::core::calculator::summary::{DaySummary, EntryOutcome};
use crate::utils::formatting::secs2readable;
use crate::utils::time::format_duration;
use serde::Serialize;

/// Flat row for a processed entry.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct EntryExport {
    pub date: String,
    pub arrival: String,
    pub departure: String,
    pub rounded_arrival: String,
    pub rounded_departure: String,
    pub logged_break: String,
    pub effective_break: String,
    pub work_duration: String,
    pub break_seconds: u64,
    pub work_seconds: u64,
}

impl EntryExport {
    pub fn from_outcome(o: &EntryOutcome, time_format: &str) -> Self {
        Self {
            date: o.date.format("%Y-%m-%d").to_string(),
            arrival: o.arrival.format(time_format).to_string(),
            departure: o.departure.format(time_format).to_string(),
            rounded_arrival: o.rounded_arrival.format(time_format).to_string(),
            rounded_departure: o.rounded_departure.format(time_format).to_string(),
            logged_break: format_duration(o.logged_break_seconds),
            effective_break: format_duration(o.result.effective_break_seconds),
            work_duration: format_duration(o.result.work_duration_seconds),
            break_seconds: o.result.effective_break_seconds,
            work_seconds: o.result.work_duration_seconds,
        }
    }
}

/// Flat row for a daily total.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct DayExport {
    pub date: String,
    pub entries: usize,
    pub work_duration: String,
    pub break_duration: String,
    pub expected: String,
    pub surplus: String,
    pub work_seconds: u64,
    pub surplus_seconds: i64,
}

impl From<&DaySummary> for DayExport {
    fn from(d: &DaySummary) -> Self {
        Self {
            date: d.date.format("%Y-%m-%d").to_string(),
            entries: d.entries,
            work_duration: format_duration(d.work_seconds),
            break_duration: format_duration(d.break_seconds),
            expected: format_duration(d.expected_seconds.max(0) as u64),
            surplus: secs2readable(d.surplus_seconds, true, true),
            work_seconds: d.work_seconds,
            surplus_seconds: d.surplus_seconds,
        }
    }
}
