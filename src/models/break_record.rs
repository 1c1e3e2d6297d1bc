//! Break record model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A completed break taken by an employee on a given day.
///
/// An employee may take several breaks on the same day; reconciliation sums
/// them per day before applying the grace allowance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakRecord {
    /// The calendar day the break was taken on.
    pub date: NaiveDate,
    /// The elapsed length of the break in minutes.
    pub duration_minutes: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_break_record() {
        let json = r#"{"date": "2024-06-10", "duration_minutes": 50}"#;
        let record: BreakRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 6, 10).unwrap());
        assert_eq!(record.duration_minutes, 50);
    }

    #[test]
    fn test_serialization_round_trip() {
        let record = BreakRecord {
            date: NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
            duration_minutes: 35,
        };
        let json = serde_json::to_string(&record).unwrap();
        let deserialized: BreakRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
