//! Range reconciliation.
//!
//! This module ties the classification, parsing and duty-minute pieces into
//! the full per-day table and range summary. The reconciliation is a pure
//! function of its inputs: it performs no I/O, holds no state between
//! invocations, and never fails on malformed individual records.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::config::DutyPolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AttendancePunch, BreakRecord, DayResult, DayStatus, HolidaySpan, LeaveSpan, RangeSummary,
    ReportPeriod,
};

use super::{
    DayClass, classify_day, compute_duty_minutes, is_statistically_delayed, parse_clock_time,
};

/// The reconciled day table and summary for one report period.
#[derive(Debug, Clone, PartialEq)]
pub struct DutyReconciliation {
    /// One row per calendar day in the period, ascending.
    pub days: Vec<DayResult>,
    /// Aggregates across the period.
    pub summary: RangeSummary,
}

/// Reconciles an employee's duty time over an inclusive date range.
///
/// Produces exactly one [`DayResult`] per calendar day in the period, in
/// ascending order, plus the [`RangeSummary`] counters and duty totals.
///
/// # Arguments
///
/// * `period` - The inclusive calendar-day range to reconcile
/// * `punches` - The employee's attendance punches (at most one per day)
/// * `leaves` - The employee's approved leave spans
/// * `holidays` - The company holiday spans
/// * `breaks` - The employee's completed break records
/// * `policy` - The duty policy (expected hours, grace, threshold, weekend)
///
/// # Returns
///
/// The reconciled table, or [`EngineError::InvalidPeriod`] when the period
/// is inverted. Malformed record content is never an error: a punch whose
/// times do not parse simply contributes zero duty minutes, and processing
/// continues for every other day.
///
/// # Example
///
/// ```
/// use duty_engine::config::DutyPolicy;
/// use duty_engine::models::{AttendanceFlag, AttendancePunch, ReportPeriod};
/// use duty_engine::reconciliation::reconcile_range;
/// use chrono::NaiveDate;
///
/// let period = ReportPeriod {
///     from_date: NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
///     to_date: NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
/// };
/// let punches = vec![AttendancePunch {
///     date: NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
///     flag: AttendanceFlag::Present,
///     in_time: Some("09:05 AM".to_string()),
///     out_time: Some("06:10 PM".to_string()),
///     in_time_remarks: None,
///     out_time_remarks: None,
/// }];
///
/// let result =
///     reconcile_range(&period, &punches, &[], &[], &[], &DutyPolicy::default()).unwrap();
/// assert_eq!(result.days.len(), 1);
/// assert_eq!(result.days[0].actual_duty_minutes, 545);
/// assert_eq!(result.summary.present_count, 1);
/// ```
pub fn reconcile_range(
    period: &ReportPeriod,
    punches: &[AttendancePunch],
    leaves: &[LeaveSpan],
    holidays: &[HolidaySpan],
    breaks: &[BreakRecord],
    policy: &DutyPolicy,
) -> EngineResult<DutyReconciliation> {
    if !period.is_valid() {
        return Err(EngineError::InvalidPeriod {
            from: period.from_date,
            to: period.to_date,
        });
    }

    // At most one punch per day; the first wins if the invariant is broken
    // upstream.
    let mut punch_by_date: HashMap<NaiveDate, &AttendancePunch> = HashMap::new();
    for punch in punches {
        punch_by_date.entry(punch.date).or_insert(punch);
    }

    let mut break_totals: HashMap<NaiveDate, i64> = HashMap::new();
    for record in breaks {
        *break_totals.entry(record.date).or_insert(0) += record.duration_minutes;
    }

    let expected_duty_minutes = policy.expected_duty_minutes();
    let mut days = Vec::new();
    let mut summary = RangeSummary {
        present_count: 0,
        absent_count: 0,
        delay_count: 0,
        leave_count: 0,
        weekend_count: 0,
        holiday_count: 0,
        total_expected_duty_minutes: 0,
        total_actual_duty_minutes: 0,
    };

    for date in period.days() {
        let mut day = DayResult {
            date,
            status: DayStatus::Absent,
            expected_duty_minutes: None,
            in_time: None,
            out_time: None,
            in_time_remarks: None,
            out_time_remarks: None,
            break_minutes: None,
            actual_duty_minutes: 0,
            extra_or_less_minutes: None,
            remarks: None,
            is_statistically_delayed: false,
        };

        let class = classify_day(
            date,
            punch_by_date.get(&date).copied(),
            leaves,
            holidays,
            &policy.weekend_days,
        );

        match class {
            DayClass::Weekend => {
                day.status = DayStatus::Weekend;
                summary.weekend_count += 1;
            }
            DayClass::Holiday(holiday) => {
                day.status = DayStatus::Holiday;
                day.remarks = Some(holiday.name.clone());
                summary.holiday_count += 1;
            }
            DayClass::Leave => {
                day.status = DayStatus::Leave;
                summary.leave_count += 1;
            }
            DayClass::Punch(punch) => {
                day.status = DayStatus::from(punch.flag);
                day.in_time = punch.in_time.clone();
                day.out_time = punch.out_time.clone();
                day.in_time_remarks = punch.in_time_remarks.clone();
                day.out_time_remarks = punch.out_time_remarks.clone();

                if punch.flag.is_present_like() {
                    summary.present_count += 1;
                    let day_breaks = break_totals.get(&date).copied().unwrap_or(0);
                    day.expected_duty_minutes = Some(expected_duty_minutes);
                    day.break_minutes = Some(day_breaks);

                    let in_parsed = punch.in_time.as_deref().and_then(parse_clock_time);
                    let out_parsed = punch.out_time.as_deref().and_then(parse_clock_time);

                    if let (Some(in_time), Some(out_time)) = (in_parsed, out_parsed) {
                        if let Some(breakdown) = compute_duty_minutes(
                            in_time,
                            out_time,
                            day_breaks,
                            expected_duty_minutes,
                            policy.break_grace_minutes,
                        ) {
                            day.actual_duty_minutes = breakdown.actual_duty_minutes;
                            day.extra_or_less_minutes = Some(breakdown.extra_or_less_minutes);
                        }
                    }

                    if let Some(in_time) = in_parsed {
                        if is_statistically_delayed(in_time, policy.delay_threshold) {
                            day.is_statistically_delayed = true;
                            summary.delay_count += 1;
                        }
                    }
                } else {
                    summary.absent_count += 1;
                }
            }
            DayClass::Absent => {
                day.status = DayStatus::Absent;
                summary.absent_count += 1;
            }
        }

        summary.total_actual_duty_minutes += day.actual_duty_minutes;
        days.push(day);
    }

    summary.total_expected_duty_minutes =
        i64::from(summary.present_count) * expected_duty_minutes;

    Ok(DutyReconciliation { days, summary })
}
