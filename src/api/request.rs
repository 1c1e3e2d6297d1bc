//! Request types for the Duty-Time Reconciliation Engine API.
//!
//! This module defines the JSON request structures for the `/report`
//! endpoint. The four input collections are pre-fetched by the caller (the
//! document-store layer); the engine itself performs no I/O.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{
    AttendanceFlag, AttendancePunch, BreakRecord, Employee, EmployeeStatus, HolidaySpan, LeaveSpan,
    ReportPeriod,
};

/// Request body for the `/report` endpoint.
///
/// Contains the employee header profile, the report period and the four
/// pre-fetched input collections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRequest {
    /// The employee the report is for (header display only).
    pub employee: EmployeeRequest,
    /// The inclusive date range to reconcile.
    pub period: ReportPeriodRequest,
    /// The employee's attendance punches within the period.
    #[serde(default)]
    pub attendance: Vec<AttendancePunchRequest>,
    /// The employee's approved leave spans.
    #[serde(default)]
    pub leaves: Vec<LeaveSpanRequest>,
    /// The company holiday spans.
    #[serde(default)]
    pub holidays: Vec<HolidaySpanRequest>,
    /// The employee's completed break records.
    #[serde(default)]
    pub breaks: Vec<BreakRecordRequest>,
}

impl ReportRequest {
    /// Returns true when no input collection holds any data at all.
    ///
    /// This is the "Report data not found" precondition: an empty report
    /// request is a caller error, not an all-absent month.
    pub fn has_no_data(&self) -> bool {
        self.attendance.is_empty()
            && self.leaves.is_empty()
            && self.holidays.is_empty()
            && self.breaks.is_empty()
    }
}

/// Employee header information in a report request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// The employee code.
    pub code: String,
    /// The employee's display name.
    pub name: String,
    /// The employee's designation.
    #[serde(default)]
    pub designation: Option<String>,
    /// The branch the employee belongs to.
    #[serde(default)]
    pub branch: Option<String>,
    /// The division the employee belongs to.
    #[serde(default)]
    pub division: Option<String>,
    /// The department the employee belongs to.
    #[serde(default)]
    pub department: Option<String>,
    /// The date the employee joined.
    #[serde(default)]
    pub join_date: Option<NaiveDate>,
    /// The employee's current standing.
    #[serde(default)]
    pub status: EmployeeStatus,
}

/// Report period information in a report request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportPeriodRequest {
    /// The first day of the period (inclusive).
    pub from_date: NaiveDate,
    /// The last day of the period (inclusive).
    pub to_date: NaiveDate,
}

/// Attendance punch information in a report request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendancePunchRequest {
    /// The calendar day the punch belongs to.
    pub date: NaiveDate,
    /// The authoritative status flag stored with the punch.
    pub flag: AttendanceFlag,
    /// The formatted clock-in time, if captured.
    #[serde(default)]
    pub in_time: Option<String>,
    /// The formatted clock-out time, if captured.
    #[serde(default)]
    pub out_time: Option<String>,
    /// Free-text clock-in remarks.
    #[serde(default)]
    pub in_time_remarks: Option<String>,
    /// Free-text clock-out remarks.
    #[serde(default)]
    pub out_time_remarks: Option<String>,
}

/// Leave span information in a report request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveSpanRequest {
    /// The first day of leave (inclusive).
    pub from_date: NaiveDate,
    /// The last day of leave (inclusive).
    pub to_date: NaiveDate,
}

/// Holiday span information in a report request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidaySpanRequest {
    /// The first day of the holiday (inclusive).
    pub from_date: NaiveDate,
    /// The last day of the holiday (inclusive); defaults to `from_date`.
    #[serde(default)]
    pub to_date: Option<NaiveDate>,
    /// The holiday's display name.
    pub name: String,
}

/// Break record information in a report request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreakRecordRequest {
    /// The calendar day the break was taken on.
    pub date: NaiveDate,
    /// The elapsed length of the break in minutes.
    pub duration_minutes: i64,
}

impl From<EmployeeRequest> for Employee {
    fn from(req: EmployeeRequest) -> Self {
        Employee {
            code: req.code,
            name: req.name,
            designation: req.designation,
            branch: req.branch,
            division: req.division,
            department: req.department,
            join_date: req.join_date,
            status: req.status,
        }
    }
}

impl From<ReportPeriodRequest> for ReportPeriod {
    fn from(req: ReportPeriodRequest) -> Self {
        ReportPeriod {
            from_date: req.from_date,
            to_date: req.to_date,
        }
    }
}

impl From<AttendancePunchRequest> for AttendancePunch {
    fn from(req: AttendancePunchRequest) -> Self {
        AttendancePunch {
            date: req.date,
            flag: req.flag,
            in_time: req.in_time,
            out_time: req.out_time,
            in_time_remarks: req.in_time_remarks,
            out_time_remarks: req.out_time_remarks,
        }
    }
}

impl From<LeaveSpanRequest> for LeaveSpan {
    fn from(req: LeaveSpanRequest) -> Self {
        LeaveSpan {
            from_date: req.from_date,
            to_date: req.to_date,
        }
    }
}

impl From<HolidaySpanRequest> for HolidaySpan {
    fn from(req: HolidaySpanRequest) -> Self {
        HolidaySpan {
            from_date: req.from_date,
            to_date: req.to_date,
            name: req.name,
        }
    }
}

impl From<BreakRecordRequest> for BreakRecord {
    fn from(req: BreakRecordRequest) -> Self {
        BreakRecord {
            date: req.date,
            duration_minutes: req.duration_minutes,
        }
    }
}
