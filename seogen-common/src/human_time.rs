//! Human-readable duration formatting for progress output
//!
//! Format is chosen by magnitude:
//! - `< 100s` → `X.XXs`
//! - `< 100m` → `M:SS.Xs`
//! - otherwise → `H:MM:SS`

use std::time::Duration;

const SHORT_FORMAT_MAX_MS: u128 = 100_000;
const MEDIUM_FORMAT_MAX_MS: u128 = 6_000_000;

/// Format a millisecond count as human-readable time
///
/// # Examples
///
/// ```
/// use seogen_common::human_time::format_millis;
///
/// assert_eq!(format_millis(4_500), "4.50s");
/// assert_eq!(format_millis(330_000), "5:30.0s");
/// assert_eq!(format_millis(3_661_000), "61:01.0s");
/// assert_eq!(format_millis(7_261_000), "2:01:01");
/// ```
pub fn format_millis(millis: u128) -> String {
    if millis < SHORT_FORMAT_MAX_MS {
        format!("{:.2}s", millis as f64 / 1000.0)
    } else if millis < MEDIUM_FORMAT_MAX_MS {
        // round once, then split, so 59.96s carries into the minute
        let tenths = (millis + 50) / 100;
        let minutes = tenths / 600;
        let secs_tenths = tenths % 600;
        format!("{}:{:02}.{}s", minutes, secs_tenths / 10, secs_tenths % 10)
    } else {
        let total_secs = millis / 1000;
        let hours = total_secs / 3600;
        let mins = (total_secs % 3600) / 60;
        let secs = total_secs % 60;
        format!("{}:{:02}:{:02}", hours, mins, secs)
    }
}

/// Format a `Duration` as human-readable time
pub fn format_duration(duration: Duration) -> String {
    format_millis(duration.as_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_format() {
        assert_eq!(format_millis(0), "0.00s");
        assert_eq!(format_millis(250), "0.25s");
        assert_eq!(format_millis(99_990), "99.99s");
    }

    #[test]
    fn test_medium_format() {
        assert_eq!(format_millis(100_000), "1:40.0s");
        assert_eq!(format_millis(120_000), "2:00.0s");
        assert_eq!(format_millis(3_661_000), "61:01.0s");
    }

    #[test]
    fn test_medium_format_carries_rounded_seconds() {
        assert_eq!(format_millis(119_960), "2:00.0s");
        assert_eq!(format_millis(119_940), "1:59.9s");
        assert_eq!(format_millis(125_050), "2:05.1s");
    }

    #[test]
    fn test_long_format() {
        assert_eq!(format_millis(7_200_000), "2:00:00");
        assert_eq!(format_millis(6_000_000), "1:40:00");
        assert_eq!(format_duration(Duration::from_secs(7261)), "2:01:01");
    }
}
