//! Attendance punch model and the stored attendance flag.
//!
//! A punch is the persisted record of one employee-day: the authoritative
//! status flag written at capture time, plus the formatted in/out wall-clock
//! strings. The flag is ground truth and is never recomputed by the engine;
//! the clock strings are re-parsed only for duration math, never re-rendered.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The status flag stored on an attendance punch.
///
/// The flag is written when the punch is captured and is authoritative:
/// reconciliation copies it verbatim onto the day's result and never
/// overrides it, even when the recorded times suggest otherwise.
///
/// # Example
///
/// ```
/// use duty_engine::models::AttendanceFlag;
///
/// assert_eq!(AttendanceFlag::Present.code(), "P");
/// assert!(AttendanceFlag::Delay.is_present_like());
/// assert!(!AttendanceFlag::Absent.is_present_like());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceFlag {
    /// The employee was at work on time.
    Present,
    /// The employee was at work but arrived late.
    Delay,
    /// The employee did not come to work.
    Absent,
}

impl AttendanceFlag {
    /// Returns the single-letter code used in tabular report output.
    pub fn code(&self) -> &'static str {
        match self {
            AttendanceFlag::Present => "P",
            AttendanceFlag::Delay => "D",
            AttendanceFlag::Absent => "A",
        }
    }

    /// Returns true if the flag indicates the employee was at work that day.
    ///
    /// Present-like days are the only days that carry expected duty minutes
    /// and participate in duty-minute computation.
    pub fn is_present_like(&self) -> bool {
        matches!(self, AttendanceFlag::Present | AttendanceFlag::Delay)
    }
}

impl std::fmt::Display for AttendanceFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// One employee-day attendance record.
///
/// Invariant: at most one punch per employee per calendar day. The in/out
/// times are pre-formatted 12-hour strings (`"hh:mm AM|PM"`); a missing or
/// malformed value simply excludes the day from duty-minute totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendancePunch {
    /// The calendar day the punch belongs to.
    pub date: NaiveDate,
    /// The authoritative status flag stored with the punch.
    pub flag: AttendanceFlag,
    /// The formatted clock-in time (e.g., "09:05 AM"), if captured.
    #[serde(default)]
    pub in_time: Option<String>,
    /// The formatted clock-out time (e.g., "06:10 PM"), if captured.
    #[serde(default)]
    pub out_time: Option<String>,
    /// Free-text remarks recorded at clock-in.
    #[serde(default)]
    pub in_time_remarks: Option<String>,
    /// Free-text remarks recorded at clock-out.
    #[serde(default)]
    pub out_time_remarks: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_flag_codes() {
        assert_eq!(AttendanceFlag::Present.code(), "P");
        assert_eq!(AttendanceFlag::Delay.code(), "D");
        assert_eq!(AttendanceFlag::Absent.code(), "A");
    }

    #[test]
    fn test_present_and_delay_are_present_like() {
        assert!(AttendanceFlag::Present.is_present_like());
        assert!(AttendanceFlag::Delay.is_present_like());
        assert!(!AttendanceFlag::Absent.is_present_like());
    }

    #[test]
    fn test_flag_display_matches_code() {
        assert_eq!(format!("{}", AttendanceFlag::Delay), "D");
    }

    #[test]
    fn test_flag_serialization() {
        assert_eq!(
            serde_json::to_string(&AttendanceFlag::Present).unwrap(),
            "\"present\""
        );
        let flag: AttendanceFlag = serde_json::from_str("\"delay\"").unwrap();
        assert_eq!(flag, AttendanceFlag::Delay);
    }

    #[test]
    fn test_deserialize_punch_with_times() {
        let json = r#"{
            "date": "2024-06-10",
            "flag": "present",
            "in_time": "09:05 AM",
            "out_time": "06:10 PM",
            "in_time_remarks": "client visit first",
            "out_time_remarks": null
        }"#;

        let punch: AttendancePunch = serde_json::from_str(json).unwrap();
        assert_eq!(punch.date, make_date("2024-06-10"));
        assert_eq!(punch.flag, AttendanceFlag::Present);
        assert_eq!(punch.in_time.as_deref(), Some("09:05 AM"));
        assert_eq!(punch.out_time.as_deref(), Some("06:10 PM"));
        assert_eq!(punch.in_time_remarks.as_deref(), Some("client visit first"));
        assert!(punch.out_time_remarks.is_none());
    }

    #[test]
    fn test_deserialize_punch_without_times() {
        let json = r#"{
            "date": "2024-06-11",
            "flag": "absent"
        }"#;

        let punch: AttendancePunch = serde_json::from_str(json).unwrap();
        assert_eq!(punch.flag, AttendanceFlag::Absent);
        assert!(punch.in_time.is_none());
        assert!(punch.out_time.is_none());
    }

    #[test]
    fn test_punch_serialization_round_trip() {
        let punch = AttendancePunch {
            date: make_date("2024-06-10"),
            flag: AttendanceFlag::Delay,
            in_time: Some("09:25 AM".to_string()),
            out_time: Some("06:00 PM".to_string()),
            in_time_remarks: None,
            out_time_remarks: Some("left for site".to_string()),
        };

        let json = serde_json::to_string(&punch).unwrap();
        let deserialized: AttendancePunch = serde_json::from_str(&json).unwrap();
        assert_eq!(punch, deserialized);
    }
}
