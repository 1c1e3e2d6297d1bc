//! Employee model and related types.
//!
//! The employee profile is header material only: it is echoed on report
//! documents for display and never consulted by the reconciliation itself.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Represents the current standing of an employee record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    /// The employee is actively employed.
    #[default]
    Active,
    /// The employee record is retained but no longer active.
    Inactive,
}

/// Represents an employee a duty report is generated for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// The employee code (e.g., "EMP-042").
    pub code: String,
    /// The employee's display name.
    pub name: String,
    /// The employee's designation (e.g., "Accounts Officer").
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
