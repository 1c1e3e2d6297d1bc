//! Statistical delay detection.
//!
//! A present-like day counts toward the delay statistic when its parsed
//! in-time is strictly later than the policy threshold. This is a summary
//! statistic only: the stored punch flag is authoritative for the day's
//! status and is never rewritten, even when the two disagree.

use chrono::NaiveTime;

/// Checks whether a parsed in-time counts as statistically delayed.
///
/// The comparison is strict: an arrival exactly at the threshold is on time.
///
/// # Example
///
/// ```
/// use duty_engine::reconciliation::is_statistically_delayed;
/// use chrono::NaiveTime;
///
/// let threshold = NaiveTime::from_hms_opt(9, 10, 0).unwrap();
///
/// assert!(!is_statistically_delayed(
///     NaiveTime::from_hms_opt(9, 10, 0).unwrap(),
///     threshold,
/// ));
/// assert!(is_statistically_delayed(
///     NaiveTime::from_hms_opt(9, 10, 1).unwrap(),
///     threshold,
/// ));
/// ```
pub fn is_statistically_delayed(in_time: NaiveTime, threshold: NaiveTime) -> bool {
    in_time > threshold
}
