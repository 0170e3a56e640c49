use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::rounding::{format_rounding_interval, round_duration, round_timestamp};
use crate::errors::AppResult;
use crate::utils::date::today;
use crate::utils::time::{format_duration, parse_datetime, parse_duration};

/// Handle `round`: print the rounded timestamp.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Round { time, rounding } = cmd {
        let ts = parse_datetime(time, today())?;
        let policy = rounding.policy(cfg);
        let rounded = round_timestamp(ts, &policy);

        let fmt = format!("%Y-%m-%d {}", cfg.time_format());
        println!(
            "{} → {}  ({}, {})",
            ts.format(&fmt),
            rounded.format(&fmt),
            format_rounding_interval(policy.interval_minutes),
            policy.direction_label()
        );
    }

    Ok(())
}

/// Handle `round-duration`: print the rounded duration.
pub fn handle_duration(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::RoundDuration { duration, rounding } = cmd {
        let secs = parse_duration(duration)?;
        let policy = rounding.policy(cfg);
        let rounded = round_duration(secs, &policy);

        println!(
            "{} → {} ({} s)",
            format_duration(secs),
            format_duration(rounded),
            rounded
        );
    }

    Ok(())
}
