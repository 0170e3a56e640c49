use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};
use proptest::prelude::*;
use rworktime::core::calculator::duration::policy_break_seconds;
use rworktime::models::{BreakPolicy, RoundingPolicy};
use rworktime::{
    apply_time_rounding, apply_to_span, compute_work_duration, round_duration, round_timestamp,
};

fn any_timestamp() -> impl Strategy<Value = NaiveDateTime> {
    (2000i32..2100, 1u32..=12, 1u32..=28, 0u32..24, 0u32..60, 0u32..60).prop_map(
        |(y, mo, d, h, mi, s)| {
            NaiveDate::from_ymd_opt(y, mo, d)
                .and_then(|date| date.and_hms_opt(h, mi, s))
                .expect("generated values are in range")
        },
    )
}

/// Intervals that divide a day evenly.
fn day_interval() -> impl Strategy<Value = u32> {
    prop::sample::select(vec![1u32, 5, 10, 15, 20, 30, 60, 120, 1440])
}

fn any_policy() -> impl Strategy<Value = RoundingPolicy> {
    (
        prop::sample::select(vec![0u32, 1, 5, 7, 10, 15, 30, 45, 60]),
        any::<bool>(),
    )
        .prop_map(|(i, nearest)| RoundingPolicy::new(i, nearest))
}

proptest! {
    #[test]
    fn rounding_timestamp_is_idempotent(t in any_timestamp(), i in day_interval(), nearest in any::<bool>()) {
        let p = RoundingPolicy::new(i, nearest);
        let once = round_timestamp(t, &p);
        prop_assert_eq!(round_timestamp(once, &p), once);
    }

    #[test]
    fn zero_interval_never_changes_anything(t in any_timestamp(), secs in 0u64..1_000_000, nearest in any::<bool>()) {
        let p = RoundingPolicy::new(0, nearest);
        prop_assert_eq!(round_timestamp(t, &p), t);
        prop_assert_eq!(round_duration(secs, &p), secs);
    }

    #[test]
    fn rounded_timestamp_stays_within_one_interval(t in any_timestamp(), i in day_interval(), nearest in any::<bool>()) {
        let p = RoundingPolicy::new(i, nearest);
        let r = round_timestamp(t, &p);
        let whole_minute = t - Duration::seconds(i64::from(t.second()));

        let delta = (r - whole_minute).num_minutes();
        if nearest {
            prop_assert!(delta.abs() * 2 <= i64::from(i));
        } else {
            prop_assert!(delta >= 0 && delta < i64::from(i));
        }
    }

    #[test]
    fn rounded_duration_is_a_close_multiple(secs in 0u64..1_000_000, i in 1u32..240, nearest in any::<bool>()) {
        let p = RoundingPolicy::new(i, nearest);
        let step = u64::from(i) * 60;
        let r = round_duration(secs, &p);

        prop_assert_eq!(r % step, 0);
        if nearest {
            prop_assert!(r.abs_diff(secs) * 2 <= step);
        } else {
            prop_assert!(r >= secs && r - secs < step);
        }
    }

    #[test]
    fn span_rounding_keeps_departure_after_arrival(
        a in any_timestamp(),
        len in 1i64..(36 * 3600),
        pa in any_policy(),
        pd in any_policy(),
    ) {
        let d = a + Duration::seconds(len);

        let span = apply_to_span(a, d, &pa, &pd);
        let dep = span.departure.expect("rounded span is closed");
        prop_assert!(dep > span.arrival);

        let user = apply_time_rounding(a, d, &pa);
        let dep = user.departure.expect("rounded span is closed");
        prop_assert!(dep > user.arrival);
    }

    #[test]
    fn effective_break_is_a_floor_and_work_is_never_negative(
        a in any_timestamp(),
        len in 1u64..(48 * 3600),
        logged in 0u64..(12 * 3600),
        minutes in 0u32..180,
        after in 0.0f64..12.0,
    ) {
        let policy = BreakPolicy::new(minutes, after);
        let d = a + Duration::seconds(len as i64);

        let r = compute_work_duration(a, d, logged, &policy).expect("ordered span");

        prop_assert!(r.effective_break_seconds >= logged);
        prop_assert!(r.effective_break_seconds >= policy_break_seconds(len, &policy));
        prop_assert_eq!(r.effective_break_seconds, logged.max(policy_break_seconds(len, &policy)));
        prop_assert_eq!(r.work_duration_seconds, len.saturating_sub(r.effective_break_seconds));
        prop_assert!(r.work_duration_seconds <= len);
    }
}
