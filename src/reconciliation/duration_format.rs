//! Signed duration formatting.

/// Renders a signed minute count as `[-]HH:MM`.
///
/// Hours and minutes are zero-padded to two digits; negative totals are
/// prefixed with `-` and formatted from the absolute value. Totals beyond
/// 99 hours widen the hour field rather than truncating.
///
/// # Example
///
/// ```
/// use duty_engine::reconciliation::format_minutes;
///
/// assert_eq!(format_minutes(539), "08:59");
/// assert_eq!(format_minutes(-75), "-01:15");
/// assert_eq!(format_minutes(0), "00:00");
/// ```
pub fn format_minutes(total_minutes: i64) -> String {
    let sign = if total_minutes < 0 { "-" } else { "" };
    let magnitude = total_minutes.abs();
    format!("{}{:02}:{:02}", sign, magnitude / 60, magnitude % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(format_minutes(0), "00:00");
    }

    #[test]
    fn test_under_an_hour() {
        assert_eq!(format_minutes(5), "00:05");
        assert_eq!(format_minutes(59), "00:59");
    }

    #[test]
    fn test_full_day_shift() {
        assert_eq!(format_minutes(539), "08:59");
        assert_eq!(format_minutes(540), "09:00");
        assert_eq!(format_minutes(545), "09:05");
    }

    #[test]
    fn test_negative_total() {
        assert_eq!(format_minutes(-75), "-01:15");
        assert_eq!(format_minutes(-1), "-00:01");
    }

    #[test]
    fn test_range_scale_totals() {
        // A month of 9-hour days
        assert_eq!(format_minutes(22 * 540), "198:00");
        assert_eq!(format_minutes(-(22 * 540)), "-198:00");
    }
}
