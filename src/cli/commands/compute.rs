use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::summary::calculate_surplus;
use crate::core::logic::Core;
use crate::core::rounding::format_rounding_interval;
use crate::errors::AppResult;
use crate::models::RoundingPolicy;
use crate::ui::messages::header;
use crate::utils::colors::{RESET, color_for_surplus};
use crate::utils::date::today;
use crate::utils::formatting::secs2readable;
use crate::utils::table::{Column, Table};
use crate::utils::time::{format_duration, parse_datetime, parse_duration};

/// Handle `compute`: round, apply the break rule and show the result.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Compute {
        arrival,
        departure,
        break_time,
        breaks,
        rounding,
        no_rounding,
    } = cmd
    {
        let cfg = breaks.apply(cfg)?;

        let day = today();
        let arr = parse_datetime(arrival, day)?;
        let dep = parse_datetime(departure, day)?;
        let logged = match break_time {
            Some(b) => parse_duration(b)?,
            None => 0,
        };

        let rounding_policy = if *no_rounding {
            RoundingPolicy::disabled()
        } else {
            rounding.policy(&cfg)
        };
        let break_policy = cfg.break_policy();

        tracing::debug!(?rounding_policy, ?break_policy, logged, "computing work duration");

        let outcome = Core::process_entry(arr, dep, logged, &rounding_policy, &break_policy)?;

        let fmt = format!("%Y-%m-%d {}", cfg.time_format());
        let rule = if break_policy.is_none() {
            "none".to_string()
        } else {
            format!(
                "{} min after {} h",
                break_policy.mandatory_break_minutes, break_policy.break_after_hours
            )
        };
        let rounding_label = if rounding_policy.is_disabled() {
            format_rounding_interval(0)
        } else {
            format!(
                "{} ({})",
                format_rounding_interval(rounding_policy.interval_minutes),
                rounding_policy.direction_label()
            )
        };

        let expected = cfg.expected_daily_seconds();
        let surplus = calculate_surplus(outcome.result.work_duration_seconds, expected);

        let mut table = Table::new(vec![Column::new("Field", 18), Column::new("Value", 24)]);
        table.add_row(vec!["Region".into(), cfg.region.name().to_string()]);
        table.add_row(vec!["Rounding".into(), rounding_label]);
        table.add_row(vec!["Break rule".into(), rule]);
        table.add_row(vec!["Arrival".into(), outcome.rounded_arrival.format(&fmt).to_string()]);
        table.add_row(vec![
            "Departure".into(),
            outcome.rounded_departure.format(&fmt).to_string(),
        ]);
        table.add_row(vec!["Span".into(), format_duration(outcome.raw_seconds)]);
        table.add_row(vec!["Logged break".into(), format_duration(logged)]);
        table.add_row(vec![
            "Effective break".into(),
            format_duration(outcome.result.effective_break_seconds),
        ]);
        table.add_row(vec![
            "Work duration".into(),
            format_duration(outcome.result.work_duration_seconds),
        ]);
        table.add_row(vec!["Expected".into(), format_duration(expected.max(0) as u64)]);

        header("Work duration");
        print!("{}", table.render());
        println!(
            "{:<18} {}{}{}",
            "Surplus",
            color_for_surplus(surplus),
            secs2readable(surplus, true, false),
            RESET
        );
    }

    Ok(())
}
