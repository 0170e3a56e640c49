//! Formatting utilities used for CLI and export outputs.

pub fn mins2readable(mins: i64, want_sign: bool, short: bool) -> String {
    let abs_m = mins.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;

    let sign = if mins > 0 && want_sign {
        "+"
    } else if mins < 0 && want_sign {
        "-"
    } else {
        "" // zero → no sign
    };

    if short {
        // +02:25 / -01:10
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        // +02h 25m / -01h 10m
        format!("{}{:02}h {:02}m", sign, hours, minutes)
    }
}

/// Signed seconds rendered through [`mins2readable`], truncated to the minute.
pub fn secs2readable(secs: i64, want_sign: bool, short: bool) -> String {
    mins2readable(secs / 60, want_sign, short)
}
