use serde::Serialize;

/// Outcome of a work duration computation, both values in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DurationResult {
    pub work_duration_seconds: u64,
    pub effective_break_seconds: u64,
}

impl DurationResult {
    pub fn new(work_duration_seconds: u64, effective_break_seconds: u64) -> Self {
        Self {
            work_duration_seconds,
            effective_break_seconds,
        }
    }
}
