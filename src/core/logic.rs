use crate::core::calculator::duration::compute_span;
use crate::core::calculator::summary::{self, DaySummary, EntryOutcome};
use crate::core::rounding::apply_time_rounding;
use crate::errors::{AppError, AppResult};
use crate::models::{BreakPolicy, RoundingPolicy};
use chrono::NaiveDateTime;

pub struct Core;

impl Core {
    /// Round the span with the user policy, then apply the break rule.
    ///
    /// The raw input must already be ordered; rounding never turns an
    /// inverted span into a valid one.
    pub fn process_entry(
        arrival: NaiveDateTime,
        departure: NaiveDateTime,
        logged_break_seconds: u64,
        rounding: &RoundingPolicy,
        breaks: &BreakPolicy,
    ) -> AppResult<EntryOutcome> {
        if departure <= arrival {
            return Err(AppError::InvalidSpan { arrival, departure });
        }

        let span = apply_time_rounding(arrival, departure, rounding);
        let result = compute_span(&span, logged_break_seconds, breaks)?;

        let rounded_departure = span
            .departure
            .ok_or_else(|| AppError::Other("rounded span lost its departure".to_string()))?;
        let raw_seconds = span.raw_duration_seconds().unwrap_or(0).max(0) as u64;

        Ok(EntryOutcome {
            date: arrival.date(),
            arrival,
            departure,
            rounded_arrival: span.arrival,
            rounded_departure,
            raw_seconds,
            logged_break_seconds,
            result,
        })
    }

    pub fn build_daily_summary(
        outcomes: &[EntryOutcome],
        expected_daily_seconds: i64,
    ) -> Vec<DaySummary> {
        summary::summarize_days(outcomes, expected_daily_seconds)
    }
}
