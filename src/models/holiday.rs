//! Company holiday span model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A named company holiday covering an inclusive day interval.
///
/// Holidays apply to all employees uniformly. A single-day holiday may omit
/// `to_date`, in which case the span ends on `from_date`.
///
/// # Example
///
/// ```
/// use duty_engine::models::HolidaySpan;
/// use chrono::NaiveDate;
///
/// let eid = HolidaySpan {
///     from_date: NaiveDate::from_ymd_opt(2024, 6, 16).unwrap(),
///     to_date: Some(NaiveDate::from_ymd_opt(2024, 6, 18).unwrap()),
///     name: "Eid-ul-Adha".to_string(),
/// };
///
/// assert!(eid.contains(NaiveDate::from_ymd_opt(2024, 6, 17).unwrap()));
/// assert!(!eid.contains(NaiveDate::from_ymd_opt(2024, 6, 19).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidaySpan {
    /// The first day of the holiday (inclusive).
    pub from_date: NaiveDate,
    /// The last day of the holiday (inclusive); defaults to `from_date`.
    #[serde(default)]
    pub to_date: Option<NaiveDate>,
    /// The holiday's display name (e.g., "May Day").
    pub name: String,
}

impl HolidaySpan {
    /// Returns the last day of the holiday, falling back to `from_date`
    /// for single-day holidays recorded without an explicit end.
    pub fn end_date(&self) -> NaiveDate {
        self.to_date.unwrap_or(self.from_date)
    }

    /// Checks whether a day falls within this holiday span (inclusive).
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.from_date && date <= self.end_date()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_contains_multi_day_span() {
        let holiday = HolidaySpan {
            from_date: make_date("2024-06-16"),
            to_date: Some(make_date("2024-06-18")),
            name: "Eid-ul-Adha".to_string(),
        };

        assert!(holiday.contains(make_date("2024-06-16")));
        assert!(holiday.contains(make_date("2024-06-18")));
        assert!(!holiday.contains(make_date("2024-06-15")));
        assert!(!holiday.contains(make_date("2024-06-19")));
    }

    #[test]
    fn test_missing_to_date_defaults_to_from_date() {
        let holiday = HolidaySpan {
            from_date: make_date("2024-05-01"),
            to_date: None,
            name: "May Day".to_string(),
        };

        assert_eq!(holiday.end_date(), make_date("2024-05-01"));
        assert!(holiday.contains(make_date("2024-05-01")));
        assert!(!holiday.contains(make_date("2024-05-02")));
    }

    #[test]
    fn test_deserialize_without_to_date() {
        let json = r#"{"from_date": "2024-05-01", "name": "May Day"}"#;
        let holiday: HolidaySpan = serde_json::from_str(json).unwrap();
        assert!(holiday.to_date.is_none());
        assert_eq!(holiday.name, "May Day");
    }

    #[test]
    fn test_serialization_round_trip() {
        let holiday = HolidaySpan {
            from_date: make_date("2024-12-16"),
            to_date: Some(make_date("2024-12-16")),
            name: "Victory Day".to_string(),
        };
        let json = serde_json::to_string(&holiday).unwrap();
        let deserialized: HolidaySpan = serde_json::from_str(&json).unwrap();
        assert_eq!(holiday, deserialized);
    }
}
