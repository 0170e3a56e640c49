mod common;
use common::dt;
use rworktime::compute_work_duration;
use rworktime::config::Config;
use rworktime::core::calculator::duration::{compute_span, policy_break_seconds};
use rworktime::errors::AppError;
use rworktime::models::{BreakPolicy, DurationResult, TimeSpan, WorkRegion};

fn policy_30_after_6() -> BreakPolicy {
    BreakPolicy::new(30, 6.0)
}

#[test]
fn test_exactly_threshold_hours_triggers_no_break() {
    let r = compute_work_duration(
        dt("2025-03-10 09:00:00"),
        dt("2025-03-10 15:00:00"),
        0,
        &policy_30_after_6(),
    )
    .expect("valid span");

    assert_eq!(r, DurationResult::new(21_600, 0));
}

#[test]
fn test_one_second_over_threshold_triggers_break() {
    let r = compute_work_duration(
        dt("2025-03-10 09:00:00"),
        dt("2025-03-10 15:00:01"),
        0,
        &policy_30_after_6(),
    )
    .expect("valid span");

    assert_eq!(r.effective_break_seconds, 1_800);
    assert_eq!(r.work_duration_seconds, 21_601 - 1_800);
}

#[test]
fn test_logged_break_longer_than_policy_wins() {
    let r = compute_work_duration(
        dt("2025-03-10 08:00:00"),
        dt("2025-03-10 17:00:00"),
        45 * 60,
        &policy_30_after_6(),
    )
    .expect("valid span");

    // max(30m, 45m), not 30m + 45m
    assert_eq!(r.effective_break_seconds, 2_700);
    assert_eq!(r.work_duration_seconds, 9 * 3600 - 2_700);
}

#[test]
fn test_logged_break_shorter_than_policy_is_raised() {
    let r = compute_work_duration(
        dt("2025-03-10 08:00:00"),
        dt("2025-03-10 17:00:00"),
        10 * 60,
        &policy_30_after_6(),
    )
    .expect("valid span");

    assert_eq!(r.effective_break_seconds, 1_800);
    assert_eq!(r.work_duration_seconds, 9 * 3600 - 1_800);
}

#[test]
fn test_logged_break_applies_below_threshold() {
    let r = compute_work_duration(
        dt("2025-03-10 09:00:00"),
        dt("2025-03-10 13:00:00"),
        15 * 60,
        &policy_30_after_6(),
    )
    .expect("valid span");

    assert_eq!(r, DurationResult::new(4 * 3600 - 900, 900));
}

#[test]
fn test_work_duration_never_negative() {
    // 10 minutes worked, policy demands an hour after 0h
    let r = compute_work_duration(
        dt("2025-03-10 09:00:00"),
        dt("2025-03-10 09:10:00"),
        0,
        &BreakPolicy::new(60, 0.0),
    )
    .expect("valid span");

    assert_eq!(r.work_duration_seconds, 0);
    assert_eq!(r.effective_break_seconds, 3_600);

    // same with a logged break longer than the span
    let r = compute_work_duration(
        dt("2025-03-10 09:00:00"),
        dt("2025-03-10 09:10:00"),
        7_200,
        &BreakPolicy::none(),
    )
    .expect("valid span");
    assert_eq!(r.work_duration_seconds, 0);
    assert_eq!(r.effective_break_seconds, 7_200);
}

#[test]
fn test_inverted_or_empty_span_is_rejected() {
    let a = dt("2025-03-10 15:00:00");
    let d = dt("2025-03-10 09:00:00");

    match compute_work_duration(a, d, 0, &policy_30_after_6()) {
        Err(AppError::InvalidSpan { arrival, departure }) => {
            assert_eq!(arrival, a);
            assert_eq!(departure, d);
        }
        other => panic!("expected InvalidSpan, got {other:?}"),
    }

    assert!(matches!(
        compute_work_duration(a, a, 0, &policy_30_after_6()),
        Err(AppError::InvalidSpan { .. })
    ));
}

#[test]
fn test_policy_break_is_single_tier() {
    let p = policy_30_after_6();
    assert_eq!(policy_break_seconds(6 * 3600, &p), 0);
    assert_eq!(policy_break_seconds(6 * 3600 + 1, &p), 1_800);
    // no extra tier for long days
    assert_eq!(policy_break_seconds(12 * 3600, &p), 1_800);
}

#[test]
fn test_compute_span() {
    let span = TimeSpan::closed(dt("2025-03-10 09:00:00"), dt("2025-03-10 17:00:00"))
        .expect("ordered span");
    let r = compute_span(&span, 0, &policy_30_after_6()).expect("closed span");
    assert_eq!(r, DurationResult::new(8 * 3600 - 1_800, 1_800));

    let open = TimeSpan::open(dt("2025-03-10 09:00:00"));
    assert!(open.is_open());
    assert!(matches!(
        compute_span(&open, 0, &policy_30_after_6()),
        Err(AppError::EntryState(_))
    ));
}

#[test]
fn test_closed_span_requires_order() {
    assert!(matches!(
        TimeSpan::closed(dt("2025-03-10 09:00:00"), dt("2025-03-10 09:00:00")),
        Err(AppError::InvalidSpan { .. })
    ));
}

#[test]
fn test_regional_break_policies() {
    assert_eq!(BreakPolicy::germany_default(), BreakPolicy::new(30, 6.0));
    assert_eq!(BreakPolicy::for_region(WorkRegion::Uk), BreakPolicy::new(20, 6.0));
    assert_eq!(
        BreakPolicy::for_region(WorkRegion::Australia),
        BreakPolicy::new(30, 5.0)
    );
    assert!(BreakPolicy::for_region(WorkRegion::Usa).is_none());
    assert!(BreakPolicy::for_region(WorkRegion::Other).is_none());

    let aus = WorkRegion::Australia.preset();
    assert_eq!(aus.standard_hours_per_day, 7.6);
    assert_eq!(aus.expected_daily_seconds(), 27_360);
    assert!(aus.double_time_enabled);

    let de = WorkRegion::Germany.preset();
    assert_eq!(de.overtime_rate, 1.25);
    assert_eq!(de.weekly_overtime_threshold, 48.0);
}

#[test]
fn test_region_codes() {
    assert_eq!(WorkRegion::from_code("UK"), Some(WorkRegion::Uk));
    assert_eq!(WorkRegion::from_code(" germany "), Some(WorkRegion::Germany));
    assert_eq!(WorkRegion::from_code("atlantis"), None);

    for r in WorkRegion::all() {
        assert_eq!(WorkRegion::from_code(r.code()), Some(r));
    }
    assert_eq!(WorkRegion::Usa.to_string(), "United States");
}

#[test]
fn test_resolve_uses_fallback_only_when_missing() {
    let explicit = BreakPolicy::new(45, 9.0);
    assert_eq!(
        BreakPolicy::resolve(Some(explicit), BreakPolicy::germany_default),
        explicit
    );
    assert_eq!(
        BreakPolicy::resolve(None, BreakPolicy::germany_default),
        BreakPolicy::new(30, 6.0)
    );
}

#[test]
fn test_config_break_policy_overrides() {
    let mut cfg = Config::default();
    assert_eq!(cfg.break_policy(), BreakPolicy::new(30, 6.0));

    cfg.region = WorkRegion::Uk;
    assert_eq!(cfg.break_policy(), BreakPolicy::new(20, 6.0));

    // half override: threshold comes from the preset
    cfg.mandatory_break_minutes = Some(45);
    assert_eq!(cfg.break_policy(), BreakPolicy::new(45, 6.0));

    // a region without breaks keeps its raw threshold for a half override
    cfg.region = WorkRegion::Usa;
    assert_eq!(cfg.break_policy(), BreakPolicy::new(45, 999.0));

    cfg.mandatory_break_minutes = None;
    assert!(cfg.break_policy().is_none());
}
