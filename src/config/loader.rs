//! Policy loading functionality.
//!
//! This module provides the [`PolicyLoader`] type for loading and validating
//! the duty policy from a YAML file.

use std::fs;
use std::path::Path;

use chrono::NaiveTime;

use crate::error::{EngineError, EngineResult};

use super::types::{DutyPolicy, PolicyFile};

/// Loads and provides access to the duty policy.
///
/// The `PolicyLoader` reads a YAML policy file and validates it into the
/// [`DutyPolicy`] the engine consumes.
///
/// # File Structure
///
/// ```text
/// expected_duty_hours: 9
/// break_grace_minutes: 60
/// delay_threshold: "09:10"
/// weekend_days: [fri]
/// ```
///
/// # Example
///
/// ```no_run
/// use duty_engine::config::PolicyLoader;
///
/// let loader = PolicyLoader::load("./config/policy.yaml").unwrap();
/// let policy = loader.policy();
/// println!("Break grace: {} minutes", policy.break_grace_minutes);
/// ```
#[derive(Debug, Clone)]
pub struct PolicyLoader {
    policy: DutyPolicy,
}

impl PolicyLoader {
    /// Loads the policy from the specified YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the policy file (e.g., "./config/policy.yaml")
    ///
    /// # Returns
    ///
    /// Returns a `PolicyLoader` instance on success, or an error if:
    /// - The file is missing
    /// - The file contains invalid YAML
    /// - The delay threshold does not parse as `HH:MM`
    /// - The expected duty hours are zero
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let file: PolicyFile =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        let policy = Self::validate(file, &path_str)?;
        Ok(Self { policy })
    }

    /// Validates a raw policy file into a [`DutyPolicy`].
    fn validate(file: PolicyFile, path: &str) -> EngineResult<DutyPolicy> {
        if file.expected_duty_hours == 0 {
            return Err(EngineError::ConfigParseError {
                path: path.to_string(),
                message: "expected_duty_hours must be greater than zero".to_string(),
            });
        }

        if file.break_grace_minutes < 0 {
            return Err(EngineError::ConfigParseError {
                path: path.to_string(),
                message: "break_grace_minutes must not be negative".to_string(),
            });
        }

        let delay_threshold = NaiveTime::parse_from_str(&file.delay_threshold, "%H:%M").map_err(
            |e| EngineError::ConfigParseError {
                path: path.to_string(),
                message: format!(
                    "delay_threshold '{}' is not a valid HH:MM time: {}",
                    file.delay_threshold, e
                ),
            },
        )?;

        Ok(DutyPolicy {
            expected_duty_hours: file.expected_duty_hours,
            break_grace_minutes: file.break_grace_minutes,
            delay_threshold,
            weekend_days: file
                .weekend_days
                .into_iter()
                .map(|d| d.to_weekday())
                .collect(),
        })
    }

    /// Returns the validated duty policy.
    pub fn policy(&self) -> &DutyPolicy {
        &self.policy
    }
}
