//! Per-entry outcomes and their aggregation into daily summaries.

use crate::models::DurationResult;
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::collections::BTreeMap;

/// A processed time entry: raw input, rounded span and computed durations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryOutcome {
    pub date: NaiveDate,
    pub arrival: NaiveDateTime,
    pub departure: NaiveDateTime,
    pub rounded_arrival: NaiveDateTime,
    pub rounded_departure: NaiveDateTime,
    pub raw_seconds: u64,
    pub logged_break_seconds: u64,
    pub result: DurationResult,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub entries: usize,
    pub work_seconds: u64,
    pub break_seconds: u64,
    pub expected_seconds: i64,
    pub surplus_seconds: i64,
}

/// Surplus = worked - expected (negative when the day is short).
pub fn calculate_surplus(work_seconds: u64, expected_seconds: i64) -> i64 {
    work_seconds as i64 - expected_seconds
}

/// Group outcomes by arrival date, oldest day first.
pub fn summarize_days(outcomes: &[EntryOutcome], expected_daily_seconds: i64) -> Vec<DaySummary> {
    let mut by_day: BTreeMap<NaiveDate, (usize, u64, u64)> = BTreeMap::new();

    for o in outcomes {
        let day = by_day.entry(o.date).or_default();
        day.0 += 1;
        day.1 += o.result.work_duration_seconds;
        day.2 += o.result.effective_break_seconds;
    }

    by_day
        .into_iter()
        .map(|(date, (entries, work, brk))| DaySummary {
            date,
            entries,
            work_seconds: work,
            break_seconds: brk,
            expected_seconds: expected_daily_seconds,
            surplus_seconds: calculate_surplus(work, expected_daily_seconds),
        })
        .collect()
}
