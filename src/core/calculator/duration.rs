//! Work duration and break compliance.

use crate::errors::{AppError, AppResult};
use crate::models::{BreakPolicy, DurationResult, TimeSpan};
use chrono::NaiveDateTime;

/// Break imposed by the policy for a span of `raw_seconds`.
///
/// Single threshold, strict comparison: exactly `break_after_hours` worked
/// does not trigger the break.
pub fn policy_break_seconds(raw_seconds: u64, policy: &BreakPolicy) -> u64 {
    let work_hours = raw_seconds as f64 / 3600.0;

    if work_hours > policy.break_after_hours {
        policy.mandatory_break_seconds()
    } else {
        0
    }
}

/// Payable work time between `arrival` and `departure`.
///
/// The policy break is a floor: the effective break is the larger of the
/// policy break and the logged one, never their sum.
pub fn compute_work_duration(
    arrival: NaiveDateTime,
    departure: NaiveDateTime,
    logged_break_seconds: u64,
    policy: &BreakPolicy,
) -> AppResult<DurationResult> {
    if departure <= arrival {
        return Err(AppError::InvalidSpan { arrival, departure });
    }

    let raw_seconds = (departure - arrival).num_seconds().max(0) as u64;

    let effective_break = policy_break_seconds(raw_seconds, policy).max(logged_break_seconds);
    let work = raw_seconds.saturating_sub(effective_break);

    Ok(DurationResult::new(work, effective_break))
}

/// Same as [`compute_work_duration`] for a finalized span.
pub fn compute_span(
    span: &TimeSpan,
    logged_break_seconds: u64,
    policy: &BreakPolicy,
) -> AppResult<DurationResult> {
    let departure = span
        .departure
        .ok_or_else(|| AppError::EntryState("span is still open".to_string()))?;

    compute_work_duration(span.arrival, departure, logged_break_seconds, policy)
}
