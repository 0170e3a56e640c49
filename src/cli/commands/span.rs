use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::rounding::{apply_time_rounding, apply_to_span};
use crate::errors::{AppError, AppResult};
use crate::utils::date::today;
use crate::utils::time::parse_datetime;

/// Handle `span`: round an arrival/departure pair.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Span {
        arrival,
        departure,
        rounding,
        same_direction,
    } = cmd
    {
        let day = today();
        let arr = parse_datetime(arrival, day)?;
        let dep = parse_datetime(departure, day)?;

        if dep <= arr {
            return Err(AppError::InvalidSpan {
                arrival: arr,
                departure: dep,
            });
        }

        let policy = rounding.policy(cfg);
        let span = if *same_direction {
            apply_to_span(arr, dep, &policy, &policy)
        } else {
            apply_time_rounding(arr, dep, &policy)
        };

        let fmt = format!("%Y-%m-%d {}", cfg.time_format());
        let rounded_dep = span
            .departure
            .map(|d| d.format(&fmt).to_string())
            .unwrap_or_else(|| "-".to_string());

        println!("arrival:   {} → {}", arr.format(&fmt), span.arrival.format(&fmt));
        println!("departure: {} → {}", dep.format(&fmt), rounded_dep);
    }

    Ok(())
}
