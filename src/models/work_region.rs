use crate::models::break_policy::BreakPolicy;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Labour-law region a company works under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum WorkRegion {
    Usa,
    Canada,
    Uk,
    #[default]
    Germany,
    Eu,
    Australia,
    Other,
}

impl WorkRegion {
    pub fn all() -> [WorkRegion; 7] {
        [
            WorkRegion::Usa,
            WorkRegion::Canada,
            WorkRegion::Uk,
            WorkRegion::Germany,
            WorkRegion::Eu,
            WorkRegion::Australia,
            WorkRegion::Other,
        ]
    }

    /// Canonical code, same spelling as the config file.
    pub fn code(&self) -> &'static str {
        match self {
            WorkRegion::Usa => "usa",
            WorkRegion::Canada => "canada",
            WorkRegion::Uk => "uk",
            WorkRegion::Germany => "germany",
            WorkRegion::Eu => "eu",
            WorkRegion::Australia => "australia",
            WorkRegion::Other => "other",
        }
    }

    /// Helper: convert input code from CLI (lowercase or uppercase)
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_lowercase();
        WorkRegion::all().into_iter().find(|r| r.code() == code)
    }

    pub fn name(&self) -> &'static str {
        match self {
            WorkRegion::Usa => "United States",
            WorkRegion::Canada => "Canada",
            WorkRegion::Uk => "United Kingdom",
            WorkRegion::Germany => "Germany",
            WorkRegion::Eu => "European Union",
            WorkRegion::Australia => "Australia",
            WorkRegion::Other => "Other",
        }
    }

    pub fn preset(&self) -> RegionalPreset {
        let base = RegionalPreset {
            region: *self,
            standard_hours_per_day: 8.0,
            standard_hours_per_week: 40.0,
            overtime_enabled: true,
            overtime_rate: 1.5,
            double_time_enabled: false,
            double_time_threshold: 12.0,
            double_time_rate: 2.0,
            require_breaks: true,
            break_duration_minutes: 30,
            break_after_hours: 6.0,
            weekly_overtime_threshold: 40.0,
            weekly_overtime_rate: 1.5,
        };

        match self {
            WorkRegion::Eu => base,
            WorkRegion::Germany => RegionalPreset {
                overtime_rate: 1.25,
                double_time_threshold: 10.0,
                double_time_rate: 1.5,
                weekly_overtime_threshold: 48.0,
                weekly_overtime_rate: 1.25,
                ..base
            },
            WorkRegion::Usa => RegionalPreset {
                require_breaks: false,
                break_duration_minutes: 0,
                break_after_hours: 999.0,
                ..base
            },
            WorkRegion::Uk => RegionalPreset {
                standard_hours_per_week: 48.0,
                break_duration_minutes: 20,
                weekly_overtime_threshold: 48.0,
                ..base
            },
            WorkRegion::Canada => RegionalPreset {
                break_after_hours: 5.0,
                ..base
            },
            WorkRegion::Australia => RegionalPreset {
                standard_hours_per_day: 7.6,
                standard_hours_per_week: 38.0,
                double_time_enabled: true,
                double_time_threshold: 10.0,
                break_after_hours: 5.0,
                weekly_overtime_threshold: 38.0,
                ..base
            },
            WorkRegion::Other => RegionalPreset {
                overtime_enabled: false,
                require_breaks: false,
                break_duration_minutes: 0,
                break_after_hours: 999.0,
                ..base
            },
        }
    }
}

impl fmt::Display for WorkRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Working-time rules preset for a region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RegionalPreset {
    pub region: WorkRegion,
    pub standard_hours_per_day: f64,
    pub standard_hours_per_week: f64,
    pub overtime_enabled: bool,
    pub overtime_rate: f64,
    pub double_time_enabled: bool,
    pub double_time_threshold: f64,
    pub double_time_rate: f64,
    pub require_breaks: bool,
    pub break_duration_minutes: u32,
    pub break_after_hours: f64,
    pub weekly_overtime_threshold: f64,
    pub weekly_overtime_rate: f64,
}

impl RegionalPreset {
    pub fn break_policy(&self) -> BreakPolicy {
        if !self.require_breaks {
            return BreakPolicy::none();
        }
        BreakPolicy::new(self.break_duration_minutes, self.break_after_hours)
    }

    pub fn expected_daily_seconds(&self) -> i64 {
        (self.standard_hours_per_day * 3600.0).round() as i64
    }
}
