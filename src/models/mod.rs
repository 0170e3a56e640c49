pub mod break_policy;
pub mod duration_result;
pub mod rounding_policy;
pub mod time_span;
pub mod work_region;

pub use break_policy::BreakPolicy;
pub use duration_result::DurationResult;
pub use rounding_policy::RoundingPolicy;
pub use time_span::TimeSpan;
pub use work_region::{RegionalPreset, WorkRegion};
