//! Day classification rules.
//!
//! This module decides what a calendar day *is* before any duty math runs.
//! The priority order is fixed: weekend, then holiday, then leave, then the
//! stored punch flag, then absent. The first matching rule wins, evaluated
//! independently per day.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::models::{AttendancePunch, HolidaySpan, LeaveSpan};

/// The outcome of classifying a single calendar day.
///
/// Holiday and punch outcomes borrow the matching record so the caller can
/// copy the holiday name or the punch's times/remarks onto the day row.
#[derive(Debug, Clone, PartialEq)]
pub enum DayClass<'a> {
    /// The day falls on a configured weekend day.
    Weekend,
    /// The day falls within the referenced holiday span.
    Holiday(&'a HolidaySpan),
    /// The day falls within an approved leave span.
    Leave,
    /// An attendance punch exists; its stored flag is authoritative.
    Punch(&'a AttendancePunch),
    /// Nothing matched: the employee is absent.
    Absent,
}

/// Classifies a calendar day by the fixed priority rules.
///
/// # Arguments
///
/// * `date` - The day being classified
/// * `punch` - The employee's punch for that day, if one exists
/// * `leaves` - The employee's approved leave spans
/// * `holidays` - The company holiday spans
/// * `weekend_days` - The configured weekend day set
///
/// # Returns
///
/// The first matching [`DayClass`], checked in priority order:
/// weekend, holiday, leave, punch, absent. A punch on a weekend or holiday
/// is deliberately ignored; the calendar outranks the punch.
///
/// # Example
///
/// ```
/// use duty_engine::reconciliation::{classify_day, DayClass};
/// use duty_engine::models::HolidaySpan;
/// use chrono::{NaiveDate, Weekday};
/// use std::collections::HashSet;
///
/// let weekend = HashSet::from([Weekday::Fri]);
/// let holidays = vec![HolidaySpan {
///     from_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
///     to_date: None,
///     name: "May Day".to_string(),
/// }];
///
/// // 2024-05-01 is a Wednesday
/// let class = classify_day(
///     NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
///     None,
///     &[],
///     &holidays,
///     &weekend,
/// );
/// assert!(matches!(class, DayClass::Holiday(h) if h.name == "May Day"));
/// ```
pub fn classify_day<'a>(
    date: NaiveDate,
    punch: Option<&'a AttendancePunch>,
    leaves: &[LeaveSpan],
    holidays: &'a [HolidaySpan],
    weekend_days: &HashSet<Weekday>,
) -> DayClass<'a> {
    if weekend_days.contains(&date.weekday()) {
        return DayClass::Weekend;
    }

    if let Some(holiday) = holidays.iter().find(|h| h.contains(date)) {
        return DayClass::Holiday(holiday);
    }

    if leaves.iter().any(|l| l.contains(date)) {
        return DayClass::Leave;
    }

    match punch {
        Some(punch) => DayClass::Punch(punch),
        None => DayClass::Absent,
    }
}
