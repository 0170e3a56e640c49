//! Rounding of clock times and durations to a configured interval.
//!
//! Clock times are rounded on whole minutes since midnight of their own day;
//! seconds are ignored on input and zeroed on output.

use crate::models::{RoundingPolicy, TimeSpan};
use chrono::{Duration, NaiveDateTime, NaiveTime, Timelike};

const MINUTES_PER_DAY: u64 = 24 * 60;

/// Round `value` to a multiple of `step` (`step > 0`), half-up or ceiling.
fn round_to_step(value: u64, step: u64, nearest: bool) -> u64 {
    let floor = value / step * step;
    let rem = value % step;

    let up = if nearest { rem * 2 >= step } else { rem > 0 };

    if up { floor.saturating_add(step) } else { floor }
}

/// Round a timestamp to the policy interval.
///
/// Results at or past midnight roll over to the following day, with the
/// minute value wrapped modulo a day.
pub fn round_timestamp(ts: NaiveDateTime, policy: &RoundingPolicy) -> NaiveDateTime {
    if policy.is_disabled() {
        return ts;
    }

    let minutes = u64::from(ts.hour()) * 60 + u64::from(ts.minute());
    let rounded = round_to_step(
        minutes,
        u64::from(policy.interval_minutes),
        policy.round_to_nearest,
    );

    let rollover = if rounded >= MINUTES_PER_DAY { 1 } else { 0 };
    let midnight = ts.date().and_time(NaiveTime::MIN);

    midnight + Duration::days(rollover) + Duration::minutes((rounded % MINUTES_PER_DAY) as i64)
}

/// Round a duration expressed in seconds to the policy interval.
pub fn round_duration(seconds: u64, policy: &RoundingPolicy) -> u64 {
    if policy.is_disabled() {
        return seconds;
    }

    let step = u64::from(policy.interval_minutes) * 60;
    round_to_step(seconds, step, policy.round_to_nearest)
}

/// Round arrival and departure with their own policies.
///
/// When rounding collapses the span (`departure <= arrival`) the departure is
/// pushed forward by one interval of the departure policy (or of the arrival
/// policy when the departure one is disabled).
pub fn apply_to_span(
    arrival: NaiveDateTime,
    departure: NaiveDateTime,
    arrival_policy: &RoundingPolicy,
    departure_policy: &RoundingPolicy,
) -> TimeSpan {
    let rounded_arrival = round_timestamp(arrival, arrival_policy);
    let rounded_departure = round_timestamp(departure, departure_policy);

    let step = if departure_policy.is_disabled() {
        arrival_policy.interval_minutes
    } else {
        departure_policy.interval_minutes
    };

    TimeSpan::from_parts(
        rounded_arrival,
        restore_order(rounded_arrival, rounded_departure, step),
    )
}

/// Per-user rounding: arrival follows the user's direction, departure the
/// opposite one (nearest/up or up/nearest).
pub fn apply_time_rounding(
    arrival: NaiveDateTime,
    departure: NaiveDateTime,
    policy: &RoundingPolicy,
) -> TimeSpan {
    if policy.is_disabled() {
        return TimeSpan::from_parts(arrival, departure);
    }

    apply_to_span(arrival, departure, policy, &policy.inverted())
}

fn restore_order(
    arrival: NaiveDateTime,
    departure: NaiveDateTime,
    step_minutes: u32,
) -> NaiveDateTime {
    if departure > arrival || step_minutes == 0 {
        return departure;
    }

    let step = Duration::minutes(i64::from(step_minutes));
    let mut corrected = departure + step;

    // A single step is enough unless arrival was rounded up while departure
    // was rounded down on mismatched directions.
    while corrected <= arrival {
        corrected += step;
    }

    corrected
}

/// Human readable label for a rounding interval.
pub fn format_rounding_interval(interval_minutes: u32) -> String {
    match interval_minutes {
        0 => "No rounding".to_string(),
        60 => "1 hour".to_string(),
        n => format!("{n} minutes"),
    }
}

/// Intervals offered to users, with their labels.
pub fn available_rounding_options() -> Vec<(u32, String)> {
    [0, 15, 30, 60]
        .into_iter()
        .map(|i| (i, format_rounding_interval(i)))
        .collect()
}
