//! Reconciliation logic for the Duty-Time Reconciliation Engine.
//!
//! This module contains the per-day classification rules, 12-hour clock
//! parsing, duty-minute computation with the break grace allowance, the
//! statistical delay check, signed duration formatting, and the range
//! reconciliation that ties them together into a day table and summary.

mod clock_time;
mod day_classification;
mod delay;
mod duration_format;
mod duty;
mod engine;

pub use clock_time::parse_clock_time;
pub use day_classification::{DayClass, classify_day};
pub use delay::is_statistically_delayed;
pub use duration_format::format_minutes;
pub use duty::{DEFAULT_BREAK_GRACE_MINUTES, DutyBreakdown, compute_duty_minutes, excess_break_minutes};
pub use engine::{DutyReconciliation, reconcile_range};
