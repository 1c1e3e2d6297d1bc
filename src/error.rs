//! Error types for the Duty-Time Reconciliation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Note that data-quality problems (an unparseable punch time, a malformed
//! break record) are deliberately NOT errors: the engine degrades per-day and
//! keeps going. Only absent caller context is reportable.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Duty-Time Reconciliation Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use duty_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/policy.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Policy file not found: /missing/policy.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Policy configuration file was not found at the specified path.
    #[error("Policy file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Policy configuration file could not be parsed or validated.
    #[error("Failed to parse policy file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse or validation error.
        message: String,
    },

    /// The requested report period is inverted (from after to).
    #[error("Invalid report period: {from} is after {to}")]
    InvalidPeriod {
        /// The first day of the requested range.
        from: NaiveDate,
        /// The last day of the requested range.
        to: NaiveDate,
    },

    /// No attendance, leave, holiday or break data was supplied at all.
    #[error("Report data not found for employee '{employee_code}'")]
    ReportDataNotFound {
        /// The code of the employee the report was requested for.
        employee_code: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
