//! Configuration types for the duty policy.
//!
//! This module contains the raw file structure deserialized from YAML and
//! the validated [`DutyPolicy`] the engine actually consumes.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use serde::Deserialize;

use crate::reconciliation::DEFAULT_BREAK_GRACE_MINUTES;

/// A weekday name as written in the policy file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekdayName {
    /// Monday.
    Mon,
    /// Tuesday.
    Tue,
    /// Wednesday.
    Wed,
    /// Thursday.
    Thu,
    /// Friday.
    Fri,
    /// Saturday.
    Sat,
    /// Sunday.
    Sun,
}

impl WeekdayName {
    /// Converts the policy-file name into a [`chrono::Weekday`].
    pub fn to_weekday(self) -> Weekday {
        match self {
            WeekdayName::Mon => Weekday::Mon,
            WeekdayName::Tue => Weekday::Tue,
            WeekdayName::Wed => Weekday::Wed,
            WeekdayName::Thu => Weekday::Thu,
            WeekdayName::Fri => Weekday::Fri,
            WeekdayName::Sat => Weekday::Sat,
            WeekdayName::Sun => Weekday::Sun,
        }
    }
}

/// The raw policy file structure as deserialized from YAML.
///
/// Validation (threshold parsing, non-zero duty hours) happens when the raw
/// file is converted into a [`DutyPolicy`] by the loader.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyFile {
    /// Expected duty hours per present-like day.
    pub expected_duty_hours: u32,
    /// Break minutes per day that are not deducted from duty time.
    pub break_grace_minutes: i64,
    /// Delay threshold as a wall-clock string (e.g., "09:10").
    pub delay_threshold: String,
    /// The weekday(s) treated as weekend.
    pub weekend_days: Vec<WeekdayName>,
}

/// The validated duty policy consumed by the reconciliation engine.
///
/// The shipped defaults reproduce the observed production policy: a 9-hour
/// duty day, a 60-minute break grace allowance, a 09:10 delay threshold and
/// Friday as the sole weekend day. The weekend set is a configuration point;
/// the Friday default is a regional convention, not a universal truth.
///
/// # Example
///
/// ```
/// use duty_engine::config::DutyPolicy;
/// use chrono::NaiveDate;
///
/// let policy = DutyPolicy::default();
/// assert_eq!(policy.expected_duty_minutes(), 540);
/// // 2024-06-14 is a Friday
/// assert!(policy.is_weekend(NaiveDate::from_ymd_opt(2024, 6, 14).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DutyPolicy {
    /// Expected duty hours per present-like day.
    pub expected_duty_hours: u32,
    /// Break minutes per day that are not deducted from duty time.
    pub break_grace_minutes: i64,
    /// In-times strictly later than this count as statistically delayed.
    pub delay_threshold: NaiveTime,
    /// The weekday(s) treated as weekend.
    pub weekend_days: HashSet<Weekday>,
}

impl DutyPolicy {
    /// Expected duty minutes per present-like day.
    pub fn expected_duty_minutes(&self) -> i64 {
        i64::from(self.expected_duty_hours) * 60
    }

    /// Checks whether a date falls on a configured weekend day.
    pub fn is_weekend(&self, date: NaiveDate) -> bool {
        self.weekend_days.contains(&date.weekday())
    }
}

impl Default for DutyPolicy {
    fn default() -> Self {
        Self {
            expected_duty_hours: 9,
            break_grace_minutes: DEFAULT_BREAK_GRACE_MINUTES,
            delay_threshold: NaiveTime::from_hms_opt(9, 10, 0).expect("valid threshold time"),
            weekend_days: HashSet::from([Weekday::Fri]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_matches_observed_production_values() {
        let policy = DutyPolicy::default();
        assert_eq!(policy.expected_duty_hours, 9);
        assert_eq!(policy.break_grace_minutes, 60);
        assert_eq!(
            policy.delay_threshold,
            NaiveTime::from_hms_opt(9, 10, 0).unwrap()
        );
        assert_eq!(policy.weekend_days, HashSet::from([Weekday::Fri]));
    }

    #[test]
    fn test_expected_duty_minutes() {
        let policy = DutyPolicy {
            expected_duty_hours: 8,
            ..DutyPolicy::default()
        };
        assert_eq!(policy.expected_duty_minutes(), 480);
    }

    #[test]
    fn test_is_weekend_friday_only_by_default() {
        let policy = DutyPolicy::default();
        // 2024-06-14 is a Friday, 2024-06-15 a Saturday
        assert!(policy.is_weekend(NaiveDate::from_ymd_opt(2024, 6, 14).unwrap()));
        assert!(!policy.is_weekend(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()));
    }

    #[test]
    fn test_is_weekend_with_two_day_weekend() {
        let policy = DutyPolicy {
            weekend_days: HashSet::from([Weekday::Sat, Weekday::Sun]),
            ..DutyPolicy::default()
        };
        assert!(policy.is_weekend(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()));
        assert!(policy.is_weekend(NaiveDate::from_ymd_opt(2024, 6, 16).unwrap()));
        assert!(!policy.is_weekend(NaiveDate::from_ymd_opt(2024, 6, 14).unwrap()));
    }

    #[test]
    fn test_weekday_name_conversion() {
        assert_eq!(WeekdayName::Fri.to_weekday(), Weekday::Fri);
        assert_eq!(WeekdayName::Sun.to_weekday(), Weekday::Sun);
    }

    #[test]
    fn test_deserialize_policy_file() {
        let yaml = r#"
expected_duty_hours: 9
break_grace_minutes: 60
delay_threshold: "09:10"
weekend_days: [fri]
"#;
        let file: PolicyFile = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(file.expected_duty_hours, 9);
        assert_eq!(file.break_grace_minutes, 60);
        assert_eq!(file.delay_threshold, "09:10");
        assert_eq!(file.weekend_days, vec![WeekdayName::Fri]);
    }

    #[test]
    fn test_deserialize_policy_file_rejects_unknown_weekday() {
        let yaml = r#"
expected_duty_hours: 9
break_grace_minutes: 60
delay_threshold: "09:10"
weekend_days: [freitag]
"#;
        assert!(serde_yaml::from_str::<PolicyFile>(yaml).is_err());
    }
}
