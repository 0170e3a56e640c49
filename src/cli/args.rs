//! Option groups shared by several subcommands.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{RoundingPolicy, WorkRegion};
use clap::Args;

/// Rounding overrides; anything not given falls back to the configuration.
#[derive(Args, Debug, Clone, Default)]
pub struct RoundingArgs {
    #[arg(long = "interval", value_name = "MINUTES", help = "Rounding interval in minutes (0 = none)")]
    pub interval: Option<u32>,

    #[arg(long = "up", conflicts_with = "nearest", help = "Round up to the next interval")]
    pub up: bool,

    #[arg(long = "nearest", help = "Round to the nearest interval")]
    pub nearest: bool,
}

impl RoundingArgs {
    pub fn policy(&self, cfg: &Config) -> RoundingPolicy {
        let base = cfg.rounding_policy();

        let round_to_nearest = if self.up {
            false
        } else if self.nearest {
            true
        } else {
            base.round_to_nearest
        };

        RoundingPolicy::new(
            self.interval.unwrap_or(base.interval_minutes),
            round_to_nearest,
        )
    }
}

/// Break rule overrides.
#[derive(Args, Debug, Clone, Default)]
pub struct BreakArgs {
    #[arg(long = "region", help = "Work region preset (usa, canada, uk, germany, eu, australia, other)")]
    pub region: Option<String>,

    #[arg(long = "break-minutes", value_name = "MINUTES", help = "Mandatory break length")]
    pub break_minutes: Option<u32>,

    #[arg(long = "break-after", value_name = "HOURS", help = "Worked hours that trigger the mandatory break")]
    pub break_after: Option<f64>,
}

impl BreakArgs {
    /// Configuration with the command line overrides applied.
    pub fn apply(&self, cfg: &Config) -> AppResult<Config> {
        let mut out = cfg.clone();

        if let Some(code) = &self.region {
            out.region =
                WorkRegion::from_code(code).ok_or_else(|| AppError::InvalidRegion(code.clone()))?;
        }
        if let Some(m) = self.break_minutes {
            out.mandatory_break_minutes = Some(m);
        }
        if let Some(h) = self.break_after {
            out.break_after_hours = Some(h);
        }

        Ok(out)
    }
}
