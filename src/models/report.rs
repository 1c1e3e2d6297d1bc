//! Report output models for the Duty-Time Reconciliation Engine.
//!
//! This module contains the per-day [`DayResult`] rows, the [`RangeSummary`]
//! aggregates and the [`ReportDocument`] envelope handed to the rendering
//! collaborator. Nothing here is persisted; a report is recomputed fresh for
//! every request.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::reconciliation::format_minutes;

use super::{AttendanceFlag, Employee, ReportPeriod};

/// The classification assigned to a calendar day in a duty report.
///
/// Weekend, holiday and leave classifications are derived from calendars;
/// present/delay/absent come verbatim from the stored punch flag (or from
/// the absence of a punch).
///
/// # Example
///
/// ```
/// use duty_engine::models::DayStatus;
///
/// assert_eq!(DayStatus::Weekend.code(), "W");
/// assert_eq!(DayStatus::Holiday.code(), "H");
/// assert!(DayStatus::Delay.is_present_like());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    /// The day falls on a configured weekend day ("W").
    Weekend,
    /// The day falls within a company holiday span ("H").
    Holiday,
    /// The day falls within an approved leave span ("L").
    Leave,
    /// The stored punch flag says the employee was at work on time ("P").
    Present,
    /// The stored punch flag says the employee arrived late ("D").
    Delay,
    /// No punch exists, or the stored flag says absent ("A").
    Absent,
}

impl DayStatus {
    /// Returns the single-letter code used in tabular report output.
    pub fn code(&self) -> &'static str {
        match self {
            DayStatus::Weekend => "W",
            DayStatus::Holiday => "H",
            DayStatus::Leave => "L",
            DayStatus::Present => "P",
            DayStatus::Delay => "D",
            DayStatus::Absent => "A",
        }
    }

    /// Returns true for statuses that carry expected duty minutes.
    pub fn is_present_like(&self) -> bool {
        matches!(self, DayStatus::Present | DayStatus::Delay)
    }
}

impl std::fmt::Display for DayStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl From<AttendanceFlag> for DayStatus {
    fn from(flag: AttendanceFlag) -> Self {
        match flag {
            AttendanceFlag::Present => DayStatus::Present,
            AttendanceFlag::Delay => DayStatus::Delay,
            AttendanceFlag::Absent => DayStatus::Absent,
        }
    }
}

/// One row of a duty report: a single classified calendar day.
///
/// Duty-minute fields are populated only for present-like days, and only
/// when both punch times parsed; everything else stays blank rather than
/// failing the report (see the crate's best-effort contract).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayResult {
    /// The calendar day this row describes.
    pub date: NaiveDate,
    /// The day's classification.
    pub status: DayStatus,
    /// Expected duty minutes; present-like days only.
    pub expected_duty_minutes: Option<i64>,
    /// The formatted clock-in time copied from the punch, if any.
    pub in_time: Option<String>,
    /// The formatted clock-out time copied from the punch, if any.
    pub out_time: Option<String>,
    /// Clock-in remarks copied from the punch, if any.
    pub in_time_remarks: Option<String>,
    /// Clock-out remarks copied from the punch, if any.
    pub out_time_remarks: Option<String>,
    /// Total break minutes recorded for the day; present-like days only.
    pub break_minutes: Option<i64>,
    /// Computed duty minutes after the excess-break deduction. Zero when the
    /// punch times are missing or unparseable, never negative.
    pub actual_duty_minutes: i64,
    /// Signed difference between actual and expected duty minutes; populated
    /// only when the duty computation actually ran.
    pub extra_or_less_minutes: Option<i64>,
    /// Row remarks; carries the holiday name on holiday days.
    pub remarks: Option<String>,
    /// Whether the parsed clock-in time was strictly later than the delay
    /// threshold. Statistical only; never overrides `status`.
    pub is_statistically_delayed: bool,
}

impl DayResult {
    /// Renders the day's actual duty minutes as `HH:MM`.
    pub fn actual_duty_display(&self) -> String {
        format_minutes(self.actual_duty_minutes)
    }

    /// Renders the day's signed extra/less minutes as `[-]HH:MM`, when the
    /// duty computation ran.
    pub fn extra_or_less_display(&self) -> Option<String> {
        self.extra_or_less_minutes.map(format_minutes)
    }
}

/// Aggregate counters and duty totals across a full report period.
///
/// # Example
///
/// ```
/// use duty_engine::models::RangeSummary;
///
/// let summary = RangeSummary {
///     present_count: 20,
///     absent_count: 1,
///     delay_count: 3,
///     leave_count: 2,
///     weekend_count: 4,
///     holiday_count: 3,
///     total_expected_duty_minutes: 20 * 540,
///     total_actual_duty_minutes: 10_930,
/// };
///
/// assert_eq!(summary.extra_or_less_minutes(), 130);
/// assert_eq!(summary.extra_or_less_display(), "02:10");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeSummary {
    /// Days whose punch flag was present-like (Present or Delay).
    pub present_count: u32,
    /// Days classified absent (no punch, or an absent flag).
    pub absent_count: u32,
    /// Present-like days whose parsed in-time exceeded the delay threshold.
    /// Independent of the stored flags.
    pub delay_count: u32,
    /// Days classified as approved leave.
    pub leave_count: u32,
    /// Days classified as weekend.
    pub weekend_count: u32,
    /// Days classified as holiday.
    pub holiday_count: u32,
    /// `present_count * expected duty minutes per day`.
    pub total_expected_duty_minutes: i64,
    /// Sum of every day's computed actual duty minutes.
    pub total_actual_duty_minutes: i64,
}

impl RangeSummary {
    /// Signed overall extra/less duty minutes for the range.
    pub fn extra_or_less_minutes(&self) -> i64 {
        self.total_actual_duty_minutes - self.total_expected_duty_minutes
    }

    /// Renders the overall extra/less duty as `[-]HH:MM`.
    pub fn extra_or_less_display(&self) -> String {
        format_minutes(self.extra_or_less_minutes())
    }

    /// Renders the total actual duty as `HH:MM`.
    pub fn total_actual_duty_display(&self) -> String {
        format_minutes(self.total_actual_duty_minutes)
    }

    /// Renders the total expected duty as `HH:MM`.
    pub fn total_expected_duty_display(&self) -> String {
        format_minutes(self.total_expected_duty_minutes)
    }
}

/// The complete duty report handed to the rendering/export collaborator.
///
/// Wraps the per-day table and range summary with identification metadata
/// and the echoed employee header profile. The profile is display-only; the
/// reconciliation never reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDocument {
    /// Unique identifier for this report generation.
    pub report_id: Uuid,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// The version of the engine that generated the report.
    pub engine_version: String,
    /// The employee header profile.
    pub employee: Employee,
    /// The period the report covers.
    pub period: ReportPeriod,
    /// One row per calendar day in the period, ascending.
    pub days: Vec<DayResult>,
    /// Aggregates across the period.
    pub summary: RangeSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn blank_day(date_str: &str, status: DayStatus) -> DayResult {
        DayResult {
            date: make_date(date_str),
            status,
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
        }
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(DayStatus::Weekend.code(), "W");
        assert_eq!(DayStatus::Holiday.code(), "H");
        assert_eq!(DayStatus::Leave.code(), "L");
        assert_eq!(DayStatus::Present.code(), "P");
        assert_eq!(DayStatus::Delay.code(), "D");
        assert_eq!(DayStatus::Absent.code(), "A");
    }

    #[test]
    fn test_status_from_flag_is_verbatim() {
        assert_eq!(DayStatus::from(AttendanceFlag::Present), DayStatus::Present);
        assert_eq!(DayStatus::from(AttendanceFlag::Delay), DayStatus::Delay);
        assert_eq!(DayStatus::from(AttendanceFlag::Absent), DayStatus::Absent);
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&DayStatus::Weekend).unwrap(),
            "\"weekend\""
        );
        let status: DayStatus = serde_json::from_str("\"holiday\"").unwrap();
        assert_eq!(status, DayStatus::Holiday);
    }

    #[test]
    fn test_day_result_display_helpers() {
        let mut day = blank_day("2024-06-10", DayStatus::Present);
        day.actual_duty_minutes = 545;
        day.extra_or_less_minutes = Some(5);

        assert_eq!(day.actual_duty_display(), "09:05");
        assert_eq!(day.extra_or_less_display().as_deref(), Some("00:05"));
    }

    #[test]
    fn test_day_result_display_blank_when_not_computed() {
        let day = blank_day("2024-06-14", DayStatus::Weekend);
        assert_eq!(day.actual_duty_display(), "00:00");
        assert!(day.extra_or_less_display().is_none());
    }

    #[test]
    fn test_summary_extra_or_less_negative() {
        let summary = RangeSummary {
            present_count: 2,
            absent_count: 0,
            delay_count: 0,
            leave_count: 0,
            weekend_count: 0,
            holiday_count: 0,
            total_expected_duty_minutes: 1080,
            total_actual_duty_minutes: 1005,
        };

        assert_eq!(summary.extra_or_less_minutes(), -75);
        assert_eq!(summary.extra_or_less_display(), "-01:15");
        assert_eq!(summary.total_expected_duty_display(), "18:00");
        assert_eq!(summary.total_actual_duty_display(), "16:45");
    }

    #[test]
    fn test_day_result_serialization_round_trip() {
        let mut day = blank_day("2024-06-10", DayStatus::Delay);
        day.expected_duty_minutes = Some(540);
        day.in_time = Some("09:25 AM".to_string());
        day.out_time = Some("06:00 PM".to_string());
        day.break_minutes = Some(40);
        day.actual_duty_minutes = 515;
        day.extra_or_less_minutes = Some(-25);
        day.is_statistically_delayed = true;

        let json = serde_json::to_string(&day).unwrap();
        let deserialized: DayResult = serde_json::from_str(&json).unwrap();
        assert_eq!(day, deserialized);
    }

    #[test]
    fn test_report_document_serialization() {
        let document = ReportDocument {
            report_id: Uuid::nil(),
            generated_at: DateTime::parse_from_rfc3339("2024-07-01T10:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
            engine_version: "0.1.0".to_string(),
            employee: Employee {
                code: "EMP-042".to_string(),
                name: "Rahim Uddin".to_string(),
                designation: None,
                branch: None,
                division: None,
                department: None,
                join_date: None,
                status: Default::default(),
            },
            period: ReportPeriod {
                from_date: make_date("2024-06-01"),
                to_date: make_date("2024-06-30"),
            },
            days: vec![blank_day("2024-06-01", DayStatus::Absent)],
            summary: RangeSummary {
                present_count: 0,
                absent_count: 1,
                delay_count: 0,
                leave_count: 0,
                weekend_count: 0,
                holiday_count: 0,
                total_expected_duty_minutes: 0,
                total_actual_duty_minutes: 0,
            },
        };

        let json = serde_json::to_string(&document).unwrap();
        assert!(json.contains("\"report_id\":\"00000000-0000-0000-0000-000000000000\""));
        assert!(json.contains("\"engine_version\":\"0.1.0\""));
        assert!(json.contains("\"days\":["));
        assert!(json.contains("\"summary\":{"));

        let deserialized: ReportDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(document, deserialized);
    }
}
