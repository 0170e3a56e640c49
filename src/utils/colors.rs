/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

/// Surplus color:
/// \>0 → green
/// \<0 → red
/// 0 → reset
pub fn color_for_surplus(value: i64) -> &'static str {
    if value > 0 {
        GREEN
    } else if value < 0 {
        RED
    } else {
        RESET
    }
}
