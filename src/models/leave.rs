//! Approved leave span model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An approved leave application covering an inclusive day interval.
///
/// A day is "on leave" if it falls within any leave span supplied for the
/// employee. Callers are expected to pass only approved applications.
///
/// # Example
///
/// ```
/// use duty_engine::models::LeaveSpan;
/// use chrono::NaiveDate;
///
/// let span = LeaveSpan {
///     from_date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
///     to_date: NaiveDate::from_ymd_opt(2024, 6, 5).unwrap(),
/// };
///
/// assert!(span.contains(NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()));
/// assert!(span.contains(NaiveDate::from_ymd_opt(2024, 6, 5).unwrap()));
/// assert!(!span.contains(NaiveDate::from_ymd_opt(2024, 6, 6).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveSpan {
    /// The first day of leave (inclusive).
    pub from_date: NaiveDate,
    /// The last day of leave (inclusive).
    pub to_date: NaiveDate,
}

impl LeaveSpan {
    /// Checks whether a day falls within this leave span (inclusive).
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.from_date && date <= self.to_date
    }
}
