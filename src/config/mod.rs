use crate::errors::{AppError, AppResult};
use crate::models::{BreakPolicy, RegionalPreset, RoundingPolicy, WorkRegion};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod migrate; // use submodule at src/config/migrate.rs

/// User configuration stored as YAML.
///
/// Break and daily-hours fields left to `null` follow the region preset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub region: WorkRegion,
    pub rounding_minutes: u32,
    pub round_to_nearest: bool,
    pub mandatory_break_minutes: Option<u32>,
    pub break_after_hours: Option<f64>,
    pub standard_hours_per_day: Option<f64>,
    pub time_format_24h: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            region: WorkRegion::default(),
            rounding_minutes: 0,
            round_to_nearest: true,
            mandatory_break_minutes: None,
            break_after_hours: None,
            standard_hours_per_day: None,
            time_format_24h: true,
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.rworktime`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rworktime")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rworktime.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("cannot read {}: {e}", path.display()))
        })?;

        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))
    }

    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml)?;
        Ok(())
    }

    /// Write a default configuration file.
    /// Returns `false` when the file already exists and `force` is not set.
    pub fn init_all(path: &Path, force: bool) -> AppResult<bool> {
        if path.exists() && !force {
            return Ok(false);
        }

        Self::default().save(path)?;
        Ok(true)
    }

    pub fn rounding_policy(&self) -> RoundingPolicy {
        RoundingPolicy::new(self.rounding_minutes, self.round_to_nearest)
    }

    pub fn preset(&self) -> RegionalPreset {
        self.region.preset()
    }

    /// Explicit overrides win; a half-specified override takes the missing
    /// value from the region preset.
    pub fn break_policy(&self) -> BreakPolicy {
        let preset = self.preset();

        let explicit = match (self.mandatory_break_minutes, self.break_after_hours) {
            (None, None) => None,
            (minutes, hours) => Some(BreakPolicy::new(
                minutes.unwrap_or(preset.break_duration_minutes),
                hours.unwrap_or(preset.break_after_hours),
            )),
        };

        BreakPolicy::resolve(explicit, || preset.break_policy())
    }

    pub fn standard_hours_per_day(&self) -> f64 {
        self.standard_hours_per_day
            .unwrap_or_else(|| self.preset().standard_hours_per_day)
    }

    /// The region preset's expected day, with the configured hours applied.
    pub fn expected_daily_seconds(&self) -> i64 {
        RegionalPreset {
            standard_hours_per_day: self.standard_hours_per_day(),
            ..self.preset()
        }
        .expected_daily_seconds()
    }

    pub fn time_format(&self) -> &'static str {
        if self.time_format_24h {
            "%H:%M:%S"
        } else {
            "%I:%M:%S %p"
        }
    }
}
