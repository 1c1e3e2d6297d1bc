//! Duty policy configuration for the Duty-Time Reconciliation Engine.
//!
//! This module provides functionality to load the duty policy from a YAML
//! file: expected duty hours, the break grace allowance, the delay threshold
//! and the configured weekend day set.
//!
//! # Example
//!
//! ```no_run
//! use duty_engine::config::PolicyLoader;
//!
//! let loader = PolicyLoader::load("./config/policy.yaml").unwrap();
//! println!("Expected duty hours: {}", loader.policy().expected_duty_hours);
//! ```

mod loader;
mod types;

pub use loader::PolicyLoader;
pub use types::{DutyPolicy, PolicyFile, WeekdayName};
