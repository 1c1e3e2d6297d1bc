//! Duty-minute computation with the break grace allowance.
//!
//! This module turns a parsed in/out pair and the day's total break minutes
//! into the duty breakdown for one present-like day. The first hour of break
//! time is not penalized; only break time beyond the grace allowance is
//! deducted, and the deduction never drives duty time below zero.

use chrono::NaiveTime;

/// Break minutes per day that are not deducted from duty time.
///
/// This is a policy constant with no documented source beyond long-standing
/// office practice; [`crate::config::DutyPolicy`] exposes it as a
/// configuration point.
pub const DEFAULT_BREAK_GRACE_MINUTES: i64 = 60;

/// The duty-minute breakdown for one present-like day.
///
/// # Example
///
/// ```
/// use duty_engine::reconciliation::DutyBreakdown;
///
/// let breakdown = DutyBreakdown {
///     raw_minutes: 545,
///     break_minutes: 50,
///     excess_break_minutes: 0,
///     actual_duty_minutes: 545,
///     extra_or_less_minutes: 5,
/// };
/// assert_eq!(breakdown.actual_duty_minutes, 545);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DutyBreakdown {
    /// Minutes between clock-in and clock-out, before any deduction.
    pub raw_minutes: i64,
    /// Total break minutes recorded for the day.
    pub break_minutes: i64,
    /// Break minutes beyond the grace allowance, deducted from duty time.
    pub excess_break_minutes: i64,
    /// Duty minutes after the deduction; never negative.
    pub actual_duty_minutes: i64,
    /// Signed difference between actual and expected duty minutes.
    pub extra_or_less_minutes: i64,
}

/// Returns the break minutes beyond the grace allowance.
///
/// # Example
///
/// ```
/// use duty_engine::reconciliation::excess_break_minutes;
///
/// assert_eq!(excess_break_minutes(45, 60), 0);
/// assert_eq!(excess_break_minutes(90, 60), 30);
/// ```
pub fn excess_break_minutes(break_minutes: i64, grace_minutes: i64) -> i64 {
    (break_minutes - grace_minutes).max(0)
}

/// Computes the duty breakdown for one present-like day.
///
/// # Arguments
///
/// * `in_time` - The parsed clock-in time of day
/// * `out_time` - The parsed clock-out time of day
/// * `break_minutes` - Total break minutes recorded for the day
/// * `expected_duty_minutes` - Expected duty minutes for a full day
/// * `grace_minutes` - Break minutes not deducted from duty time
///
/// # Returns
///
/// `Some(DutyBreakdown)` when `out_time` is chronologically after `in_time`
/// on the same calendar day; `None` otherwise. The caller treats `None`
/// exactly like missing punch times: the day contributes nothing to duty
/// totals.
///
/// # Example
///
/// ```
/// use duty_engine::reconciliation::compute_duty_minutes;
/// use chrono::NaiveTime;
///
/// let breakdown = compute_duty_minutes(
///     NaiveTime::from_hms_opt(9, 5, 0).unwrap(),
///     NaiveTime::from_hms_opt(18, 10, 0).unwrap(),
///     50,
///     540,
///     60,
/// )
/// .unwrap();
///
/// assert_eq!(breakdown.raw_minutes, 545);
/// assert_eq!(breakdown.excess_break_minutes, 0);
/// assert_eq!(breakdown.actual_duty_minutes, 545);
/// assert_eq!(breakdown.extra_or_less_minutes, 5);
/// ```
pub fn compute_duty_minutes(
    in_time: NaiveTime,
    out_time: NaiveTime,
    break_minutes: i64,
    expected_duty_minutes: i64,
    grace_minutes: i64,
) -> Option<DutyBreakdown> {
    if out_time <= in_time {
        return None;
    }

    let raw_minutes = (out_time - in_time).num_minutes();
    let excess = excess_break_minutes(break_minutes, grace_minutes);
    let actual_duty_minutes = (raw_minutes - excess).max(0);

    Some(DutyBreakdown {
        raw_minutes,
        break_minutes,
        excess_break_minutes: excess,
        actual_duty_minutes,
        extra_or_less_minutes: actual_duty_minutes - expected_duty_minutes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    // DM-001: simple present day, break within grace
    #[test]
    fn test_dm_001_break_within_grace_is_free() {
        let breakdown = compute_duty_minutes(time(9, 5), time(18, 10), 50, 540, 60).unwrap();

        assert_eq!(breakdown.raw_minutes, 545);
        assert_eq!(breakdown.break_minutes, 50);
        assert_eq!(breakdown.excess_break_minutes, 0);
        assert_eq!(breakdown.actual_duty_minutes, 545);
        assert_eq!(breakdown.extra_or_less_minutes, 5);
    }

    // DM-002: break beyond grace is deducted
    #[test]
    fn test_dm_002_excess_break_deducted() {
        let breakdown = compute_duty_minutes(time(9, 0), time(18, 0), 90, 540, 60).unwrap();

        assert_eq!(breakdown.raw_minutes, 540);
        assert_eq!(breakdown.excess_break_minutes, 30);
        assert_eq!(breakdown.actual_duty_minutes, 510);
        assert_eq!(breakdown.extra_or_less_minutes, -30);
    }

    // DM-003: duty time never goes negative
    #[test]
    fn test_dm_003_deduction_floors_at_zero() {
        // 30 minutes worked, 2 hours of breaks recorded
        let breakdown = compute_duty_minutes(time(9, 0), time(9, 30), 120, 540, 60).unwrap();

        assert_eq!(breakdown.raw_minutes, 30);
        assert_eq!(breakdown.excess_break_minutes, 60);
        assert_eq!(breakdown.actual_duty_minutes, 0);
        assert_eq!(breakdown.extra_or_less_minutes, -540);
    }

    // DM-004: out before in yields no breakdown
    #[test]
    fn test_dm_004_out_before_in_is_skipped() {
        assert_eq!(compute_duty_minutes(time(18, 0), time(9, 0), 0, 540, 60), None);
    }

    // DM-005: zero-length day yields no breakdown
    #[test]
    fn test_dm_005_equal_times_are_skipped() {
        assert_eq!(compute_duty_minutes(time(9, 0), time(9, 0), 0, 540, 60), None);
    }

    #[test]
    fn test_excess_break_grace_boundary() {
        assert_eq!(excess_break_minutes(45, 60), 0);
        assert_eq!(excess_break_minutes(60, 60), 0);
        assert_eq!(excess_break_minutes(61, 60), 1);
        assert_eq!(excess_break_minutes(90, 60), 30);
        assert_eq!(excess_break_minutes(0, 60), 0);
    }

    #[test]
    fn test_exact_expected_duty_has_zero_extra() {
        let breakdown = compute_duty_minutes(time(9, 0), time(18, 0), 0, 540, 60).unwrap();
        assert_eq!(breakdown.actual_duty_minutes, 540);
        assert_eq!(breakdown.extra_or_less_minutes, 0);
    }

    #[test]
    fn test_short_day_has_negative_extra() {
        let breakdown = compute_duty_minutes(time(10, 0), time(17, 0), 0, 540, 60).unwrap();
        assert_eq!(breakdown.actual_duty_minutes, 420);
        assert_eq!(breakdown.extra_or_less_minutes, -120);
    }
}
