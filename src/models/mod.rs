//! Core data models for the Duty-Time Reconciliation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod break_record;
mod employee;
mod holiday;
mod leave;
mod punch;
mod report;
mod report_period;

pub use break_record::BreakRecord;
pub use employee::{Employee, EmployeeStatus};
pub use holiday::HolidaySpan;
pub use leave::LeaveSpan;
pub use punch::{AttendanceFlag, AttendancePunch};
pub use report::{DayResult, DayStatus, RangeSummary, ReportDocument};
pub use report_period::ReportPeriod;
