//! Report period model.
//!
//! This module contains the [`ReportPeriod`] type that defines the inclusive
//! calendar-day window a duty report is generated over.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An inclusive calendar-day range a duty report covers.
///
/// # Example
///
/// ```
/// use duty_engine::models::ReportPeriod;
/// use chrono::NaiveDate;
///
/// let period = ReportPeriod {
///     from_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
///     to_date: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
/// };
///
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()));
/// assert_eq!(period.days().count(), 30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportPeriod {
    /// The first day of the period (inclusive).
    pub from_date: NaiveDate,
    /// The last day of the period (inclusive).
    pub to_date: NaiveDate,
}

impl ReportPeriod {
    /// Returns true when the period is well-formed (`from_date <= to_date`).
    pub fn is_valid(&self) -> bool {
        self.from_date <= self.to_date
    }

    /// Checks if a given date falls within this period.
    ///
    /// The check is inclusive of both the first and last day.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.from_date && date <= self.to_date
    }

    /// Iterates every calendar day in the period in ascending order.
    ///
    /// An inverted period yields no days.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        let to = self.to_date;
        self.from_date.iter_days().take_while(move |d| *d <= to)
    }
}
