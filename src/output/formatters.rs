//! Formatting utilities for terminal output

use std::time::Duration;

/// Format an elapsed duration as seconds with two-decimal precision
#[must_use]
pub fn format_seconds(elapsed: Duration) -> String {
    format!("{:.2}", elapsed.as_secs_f64())
}

/// Format a millisecond count as seconds with two-decimal precision
///
/// Stored record times persist as milliseconds.
#[must_use]
pub fn format_millis(millis: u64) -> String {
    format!("{:.2}", millis as f64 / 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seconds_keep_two_decimals() {
        assert_eq!(format_seconds(Duration::from_millis(5000)), "5.00");
        assert_eq!(format_seconds(Duration::from_millis(1234)), "1.23");
        assert_eq!(format_seconds(Duration::from_millis(90)), "0.09");
    }

    #[test]
    fn millis_keep_two_decimals() {
        assert_eq!(format_millis(5000), "5.00");
        assert_eq!(format_millis(12345), "12.35");
        assert_eq!(format_millis(0), "0.00");
    }
}
