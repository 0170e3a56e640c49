use crate::models::work_region::WorkRegion;
use serde::{Deserialize, Serialize};

/// Mandatory break rule: once the worked span strictly exceeds
/// `break_after_hours`, at least `mandatory_break_minutes` are deducted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BreakPolicy {
    pub mandatory_break_minutes: u32,
    pub break_after_hours: f64,
}

impl BreakPolicy {
    pub fn new(mandatory_break_minutes: u32, break_after_hours: f64) -> Self {
        Self {
            mandatory_break_minutes,
            break_after_hours,
        }
    }

    /// No mandatory break at all.
    pub fn none() -> Self {
        Self::new(0, 0.0)
    }

    /// Break rule taken from the regional preset.
    pub fn for_region(region: WorkRegion) -> Self {
        region.preset().break_policy()
    }

    /// Fallback used when no company/user policy exists: 30 minutes after 6 hours.
    pub fn germany_default() -> Self {
        Self::for_region(WorkRegion::Germany)
    }

    /// Use the explicit policy if there is one, otherwise ask the caller's factory.
    pub fn resolve<F>(explicit: Option<BreakPolicy>, fallback: F) -> Self
    where
        F: FnOnce() -> BreakPolicy,
    {
        explicit.unwrap_or_else(fallback)
    }

    pub fn mandatory_break_seconds(&self) -> u64 {
        u64::from(self.mandatory_break_minutes) * 60
    }

    pub fn is_none(&self) -> bool {
        self.mandatory_break_minutes == 0
    }
}
