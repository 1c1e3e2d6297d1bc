//! 12-hour clock string parsing.
//!
//! Punch times arrive as pre-formatted `"hh:mm AM|PM"` strings. They are
//! re-parsed only for duration math; a string that does not match yields
//! "no time" rather than an error, and the day's duty computation is simply
//! skipped.

use chrono::NaiveTime;

/// Parses a 12-hour `"hh:mm AM|PM"` clock string into a time of day.
///
/// The meridiem marker is case-insensitive and `12 AM`/`12 PM` convert to
/// 00:xx/12:xx respectively. Surrounding whitespace is tolerated. Any input
/// that does not match the format returns `None`.
///
/// # Example
///
/// ```
/// use duty_engine::reconciliation::parse_clock_time;
/// use chrono::NaiveTime;
///
/// assert_eq!(
///     parse_clock_time("09:05 AM"),
///     NaiveTime::from_hms_opt(9, 5, 0)
/// );
/// assert_eq!(
///     parse_clock_time("06:10 pm"),
///     NaiveTime::from_hms_opt(18, 10, 0)
/// );
/// assert_eq!(parse_clock_time("12:00 AM"), NaiveTime::from_hms_opt(0, 0, 0));
/// assert_eq!(parse_clock_time("not a time"), None);
/// ```
pub fn parse_clock_time(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw.trim(), "%I:%M %p").ok()
}
