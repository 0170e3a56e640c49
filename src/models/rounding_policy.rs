use serde::{Deserialize, Serialize};

/// Granularity and direction used when rounding clock times or durations.
///
/// `interval_minutes == 0` disables rounding entirely.
/// `round_to_nearest == false` rounds up (ceiling).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundingPolicy {
    pub interval_minutes: u32,
    pub round_to_nearest: bool,
}

impl Default for RoundingPolicy {
    fn default() -> Self {
        Self::disabled()
    }
}

impl RoundingPolicy {
    pub fn new(interval_minutes: u32, round_to_nearest: bool) -> Self {
        Self {
            interval_minutes,
            round_to_nearest,
        }
    }

    pub fn nearest(interval_minutes: u32) -> Self {
        Self::new(interval_minutes, true)
    }

    pub fn ceiling(interval_minutes: u32) -> Self {
        Self::new(interval_minutes, false)
    }

    pub fn disabled() -> Self {
        Self::new(0, true)
    }

    pub fn is_disabled(&self) -> bool {
        self.interval_minutes == 0
    }

    /// Same interval, opposite direction.
    pub fn inverted(&self) -> Self {
        Self::new(self.interval_minutes, !self.round_to_nearest)
    }

    pub fn direction_label(&self) -> &'static str {
        if self.round_to_nearest {
            "nearest"
        } else {
            "up"
        }
    }
}
